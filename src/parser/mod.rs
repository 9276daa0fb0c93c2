mod commands;
mod preprocessor;
mod types;

pub use commands::{classify, is_comment};
pub use preprocessor::split_lines;
pub use types::{Classification, LineRecord};
