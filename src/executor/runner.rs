use super::transcript::Transcript;
use crate::config::ExecConfig;
use crate::error::{MockError, MockResult};
use crate::parser::{classify, split_lines, Classification};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::thread;

/// Per-classification counts for a finished run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub lines: usize,
    pub prints: usize,
    pub declarations: usize,
    pub loops: usize,
    pub skipped: usize,
    pub unrecognized: usize,
}

/// Simulate running the script at `path`, writing the transcript as we go.
pub fn run_script<W: Write>(
    path: &Path,
    config: &ExecConfig,
    transcript: &mut Transcript<W>,
) -> MockResult<RunSummary> {
    transcript.banner(&path.display().to_string())?;

    if !path.exists() {
        tracing::warn!("script not found: {}", path.display());
        return Err(MockError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| MockError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    transcript.loaded()?;
    tracing::info!("loaded {} ({} bytes)", path.display(), contents.len());
    thread::sleep(config.startup_delay());

    let mut summary = RunSummary::default();

    for record in split_lines(&contents) {
        summary.lines += 1;

        match classify(&record.text) {
            Classification::Skip => summary.skipped += 1,
            Classification::Print(message) => {
                tracing::debug!("line {}: print", record.number);
                transcript.output(&message)?;
                summary.prints += 1;
            }
            Classification::VarDeclaration(name) => {
                tracing::debug!("line {}: var {}", record.number, name);
                transcript.declared(&name)?;
                summary.declarations += 1;
            }
            Classification::ForLoop => {
                tracing::debug!("line {}: for", record.number);
                transcript.executing_loop()?;
                summary.loops += 1;
            }
            Classification::Unrecognized => {
                tracing::trace!("line {}: ignored: {}", record.number, record.text);
                summary.unrecognized += 1;
            }
        }

        // uniform cost per line, skipped lines included
        thread::sleep(config.line_delay());
    }

    transcript.completed()?;
    tracing::info!("run finished: {:?}", summary);

    Ok(summary)
}
