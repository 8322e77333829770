//! Time source for request timestamps.

use chrono::Utc;

/// Supplies the Unix timestamp (seconds) stamped on each signed request.
pub trait Clock: Send + Sync {
    fn unix_timestamp(&self) -> u64;
}

/// Wall clock. Read once per request, never at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> u64 {
        Utc::now().timestamp().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_seconds() {
        let ts = SystemClock.unix_timestamp();
        // 2023-11-14 .. 2100-01-01
        assert!(ts > 1_700_000_000);
        assert!(ts < 4_102_444_800);
    }
}
