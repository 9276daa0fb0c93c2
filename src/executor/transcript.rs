use std::io::{self, Write};

pub const BANNER: &str = "Lamina Mock Interpreter v1.0";
pub const OUTPUT_TAG: &str = "[Lamina Output]";
pub const DECLARED_TAG: &str = "[Lamina] Variable declared:";
pub const LOOP_NOTICE: &str = "[Lamina] Executing loop...";
pub const LOADED: &str = "File content loaded successfully";
pub const SIMULATING: &str = "Simulating Lamina code execution...";
pub const COMPLETED: &str = "Lamina execution completed successfully!";

const SEPARATOR_WIDTH: usize = 40;

/// Line-oriented writer for the stdout transcript.
///
/// Every line is flushed as soon as it is written so a parent process
/// reading a pipe sees it immediately.
pub struct Transcript<W: Write> {
    out: W,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn banner(&mut self, path: &str) -> io::Result<()> {
        self.line(BANNER)?;
        self.line(&format!("Executing file: {}", path))?;
        self.separator()
    }

    pub fn separator(&mut self) -> io::Result<()> {
        self.line(&"-".repeat(SEPARATOR_WIDTH))
    }

    pub fn loaded(&mut self) -> io::Result<()> {
        self.line(LOADED)?;
        self.line(SIMULATING)
    }

    pub fn output(&mut self, message: &str) -> io::Result<()> {
        self.line(&format!("{} {}", OUTPUT_TAG, message))
    }

    pub fn declared(&mut self, name: &str) -> io::Result<()> {
        self.line(&format!("{} {}", DECLARED_TAG, name))
    }

    pub fn executing_loop(&mut self) -> io::Result<()> {
        self.line(LOOP_NOTICE)
    }

    pub fn completed(&mut self) -> io::Result<()> {
        self.separator()?;
        self.line(COMPLETED)
    }
}
