/// One source line, trimmed, with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub number: usize,
    pub text: String,
}

/// What a single line is treated as by the mock loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Blank line or `//` comment
    Skip,
    /// `print(...)`, carrying the message to display
    Print(String),
    /// `var name = ...`, carrying the declared name
    VarDeclaration(String),
    /// `for ...`
    ForLoop,
    Unrecognized,
}
