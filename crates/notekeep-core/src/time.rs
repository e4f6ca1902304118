//! Millisecond timestamps as stored in the index and reported to callers

use std::time::SystemTime;

use chrono::{DateTime, Utc};

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn system_time_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}

/// Best available creation time: birth time, then change time, then now
pub fn creation_millis(created: Option<SystemTime>, changed: Option<SystemTime>) -> i64 {
    created
        .or(changed)
        .map(system_time_millis)
        .unwrap_or_else(now_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_system_time_millis() {
        let t = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
        assert_eq!(system_time_millis(t), 1_700_000_000_123);
    }

    #[test]
    fn test_creation_fallbacks() {
        let born = UNIX_EPOCH + Duration::from_millis(1_000);
        let changed = UNIX_EPOCH + Duration::from_millis(2_000);
        assert_eq!(creation_millis(Some(born), Some(changed)), 1_000);
        assert_eq!(creation_millis(None, Some(changed)), 2_000);

        let before = now_millis();
        assert!(creation_millis(None, None) >= before);
    }
}
