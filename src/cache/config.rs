//! Cache configuration.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_ENABLED: bool = true;
const DEFAULT_RESPONSE_LIMIT: usize = 256;
const DEFAULT_RESPONSE_TTL_SECS: u64 = 300;
const DEFAULT_CONSUME_BATCH_LIMIT: usize = 100;

/// Runtime cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether response caching (and revalidation) is active.
    pub enabled: bool,
    /// Maximum number of cached responses.
    pub response_limit: usize,
    /// TTL safety net for cached responses, in seconds.
    pub response_ttl_secs: u64,
    /// Maximum events drained per consumption run.
    pub consume_batch_limit: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            response_limit: DEFAULT_RESPONSE_LIMIT,
            response_ttl_secs: DEFAULT_RESPONSE_TTL_SECS,
            consume_batch_limit: DEFAULT_CONSUME_BATCH_LIMIT,
        }
    }
}

impl CacheConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn response_limit_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.response_limit).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn response_ttl(&self) -> Duration {
        Duration::from_secs(self.response_ttl_secs.max(1))
    }
}

impl From<&crate::config::CacheSettings> for CacheConfig {
    fn from(settings: &crate::config::CacheSettings) -> Self {
        Self {
            enabled: settings.enabled,
            response_limit: settings.response_limit,
            response_ttl_secs: settings.response_ttl_secs,
            consume_batch_limit: settings.consume_batch_limit,
        }
    }
}
