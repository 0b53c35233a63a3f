pub mod keys;
pub mod store;

use std::time::{SystemTime, UNIX_EPOCH};

pub const CACHE_TTL_SECONDS: i64 = 24 * 60 * 60; // 1 day

pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Fresh strictly below the TTL, stale at and beyond it.
pub fn is_fresh(cached_at: i64, now: i64) -> bool {
    (now - cached_at) < CACHE_TTL_SECONDS
}
