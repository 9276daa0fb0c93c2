mod runner;
mod transcript;

pub use runner::{run_script, RunSummary};
pub use transcript::Transcript;
