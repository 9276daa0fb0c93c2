use crate::config::ExecConfig;
use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

/// Install a file-backed subscriber if the config names a log file.
///
/// stdout and stderr carry the transcript, so diagnostics only ever go to
/// the log file. Returns false when logging stays disabled.
pub fn init(config: &ExecConfig) -> bool {
    let Some(path) = &config.log_file else {
        return false;
    };

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        // an unwritable log must not fail the run
        Err(_err) => return false,
    };

    let level = Level::from_str(&config.log_level).unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .is_ok()
}
