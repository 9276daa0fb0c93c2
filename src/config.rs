use crate::error::{MockError, MockResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "LAMINA_MOCK_CONFIG";

/// Timing and logging knobs for a mock run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecConfig {
    pub startup_delay_ms: u64,
    pub line_delay_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            startup_delay_ms: 500,
            line_delay_ms: 100,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl ExecConfig {
    /// No delays, no log file.
    pub fn instant() -> Self {
        Self {
            startup_delay_ms: 0,
            line_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn line_delay(&self) -> Duration {
        Duration::from_millis(self.line_delay_ms)
    }

    /// Load from the file named by `LAMINA_MOCK_CONFIG`, or defaults if unset.
    pub fn from_env() -> MockResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> MockResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| MockError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&text).map_err(|reason| MockError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }
}
