use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for a mock run.
pub type MockResult<T> = Result<T, MockError>;

/// Everything that can end a run early. All variants exit with status 1.
#[derive(Debug, Error)]
pub enum MockError {
    /// Wrong number of command-line arguments
    #[error("Usage: lamina-mock <script.lm>")]
    Usage,

    #[error("Error: File '{}' not found!", path.display())]
    FileNotFound { path: PathBuf },

    /// Opening, reading or decoding the script failed
    #[error("Error: {source}: '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: invalid configuration '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Writing the transcript failed
    #[error("Error: {0}")]
    Io(#[from] io::Error),
}

impl MockError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}
