//! Response envelope: `{"success": bool, "result": ..., "error": ...}`.
//!
//! Pagination `meta` is not read; listings are fetched in one page.

use crate::error::{ApiError, SdkError, TransportError};

use serde::Deserialize;

/// Outer JSON structure of every REST response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub result: Option<T>,
    pub error: Option<serde_json::Value>,
}

impl<T> Envelope<T> {
    /// Unwrap the result, or turn a `success: false` envelope into an [`ApiError`].
    ///
    /// Never yields a partial result for an unsuccessful envelope.
    pub fn into_result(self, operation: &'static str) -> Result<T, SdkError> {
        if !self.success {
            return Err(ApiError::from_payload(operation, self.error).into());
        }

        self.result.ok_or_else(|| {
            TransportError::Decode {
                operation,
                reason: "successful envelope without a result".to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "result": [1, 2, 3]}"#).unwrap();
        assert_eq!(envelope.into_result("op").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_envelope_is_api_error() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"success": false, "result": [1], "error": {"code": "unavailable"}}"#,
        )
        .unwrap();

        match envelope.into_result("list_products") {
            Err(SdkError::Api(err)) => {
                assert_eq!(err.code, "unavailable");
                assert_eq!(err.operation, "list_products");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(r#"{"result": [1]}"#).unwrap();
        assert!(matches!(envelope.into_result("op"), Err(SdkError::Api(_))));
    }

    #[test]
    fn test_success_without_result_is_decode_error() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            envelope.into_result("op"),
            Err(SdkError::Transport(TransportError::Decode { .. }))
        ));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"success": true, "result": [], "meta": {"after": "abc"}}"#,
        )
        .unwrap();
        assert!(envelope.into_result("op").unwrap().is_empty());
    }
}
