//! Rate-limit telemetry extracted from GitHub response headers

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";
const USED_HEADER: &str = "x-ratelimit-used";

/// Unauthenticated GitHub quota, assumed when the ceiling header is absent
pub const DEFAULT_LIMIT: u64 = 60;

/// API quota snapshot from the most recent upstream exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Requests allowed per window
    pub limit: u64,

    /// Requests left in the current window
    pub remaining: u64,

    /// Window reset time (unix epoch seconds)
    pub reset: u64,

    /// Requests consumed in the current window
    pub used: u64,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            remaining: 0,
            reset: 0,
            used: 0,
        }
    }
}

impl RateLimit {
    /// Read the four quota headers.
    ///
    /// Missing or malformed values fall back to their defaults instead of failing.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let defaults = Self::default();
        Self {
            limit: header_u64(headers, LIMIT_HEADER).unwrap_or(defaults.limit),
            remaining: header_u64(headers, REMAINING_HEADER).unwrap_or(defaults.remaining),
            reset: header_u64(headers, RESET_HEADER).unwrap_or(defaults.reset),
            used: header_u64(headers, USED_HEADER).unwrap_or(defaults.used),
        }
    }

    /// Whole minutes until the window resets, rounded up; 0 once it has passed
    pub fn minutes_until_reset(&self, now_epoch_secs: u64) -> u64 {
        self.reset.saturating_sub(now_epoch_secs).div_ceil(60)
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}
