//! Runtime configuration.

use crate::errors::FixMdError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Default ring buffer capacity, in records.
pub const DEFAULT_RING_CAPACITY: usize = 10_000;

/// Largest ring capacity accepted from configuration or a snapshot, in records.
pub const MAX_RING_CAPACITY: usize = 1_000_000;

/// Environment variable overriding [`FixMdConfig::ring_capacity`].
pub const ENV_RING_CAPACITY: &str = "FIXMD_RING_CAPACITY";

/// Environment variable setting [`FixMdConfig::persistence_path`].
pub const ENV_PERSIST_PATH: &str = "FIXMD_PERSIST_PATH";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixMdConfig {
    /// Trade store capacity, fixed for the store's lifetime.
    pub ring_capacity: usize,
    /// JSON-lines file receiving persisted batches; `None` disables persistence.
    pub persistence_path: Option<PathBuf>,
}

impl Default for FixMdConfig {
    fn default() -> Self {
        Self {
            ring_capacity: DEFAULT_RING_CAPACITY,
            persistence_path: None,
        }
    }
}

impl FixMdConfig {
    /// Defaults overridden by `FIXMD_RING_CAPACITY` and `FIXMD_PERSIST_PATH`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FixMdConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ENV_RING_CAPACITY) {
            match v.trim().parse() {
                Ok(capacity) => cfg.ring_capacity = capacity,
                Err(_) => warn!(value = %v, "ignoring invalid {ENV_RING_CAPACITY}"),
            }
        }
        if let Some(v) = lookup(ENV_PERSIST_PATH) {
            if !v.is_empty() {
                cfg.persistence_path = Some(PathBuf::from(v));
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), FixMdError> {
        if self.ring_capacity == 0 {
            return Err(FixMdError::InvalidConfiguration {
                message: "ring capacity must be at least 1".to_string(),
            });
        }
        if self.ring_capacity > MAX_RING_CAPACITY {
            return Err(FixMdError::InvalidConfiguration {
                message: format!("ring capacity must be at most {MAX_RING_CAPACITY}"),
            });
        }
        Ok(())
    }
}
