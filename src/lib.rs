//! Mock Lamina interpreter: pretends to run `.lm` scripts by matching a few
//! line prefixes and printing canned output, so an IDE's "run" button has
//! something to launch.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
mod logging;
pub mod parser;

pub use config::ExecConfig;
pub use error::{MockError, MockResult};
