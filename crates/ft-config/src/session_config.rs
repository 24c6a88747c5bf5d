use crate::{ConfigError, ConfigErrorResult, DEFAULT_WATCHDOG_INTERVAL_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How often the expiry watchdog re-probes the stored credential
    pub watchdog_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            watchdog_interval_secs: DEFAULT_WATCHDOG_INTERVAL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.watchdog_interval_secs == 0 || self.watchdog_interval_secs > 3600 {
            return Err(ConfigError::session(format!(
                "session.watchdog_interval_secs must be 1-3600, got {}",
                self.watchdog_interval_secs
            )));
        }

        Ok(())
    }
}
