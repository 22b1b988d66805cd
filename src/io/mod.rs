//! Input/output abstractions
//!
//! The editor reads commands and writes its panel through these traits so
//! sessions can be scripted in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Trait for reading editor commands
pub trait InputReader {
    /// Read one line after showing `prompt`. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Trait for writing editor output
pub trait OutputWriter {
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        Ok((read > 0).then_some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Pre-recorded input lines, consumed front to back.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(lines: Vec<&str>) -> Self {
        Self {
            lines: lines.into_iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl InputReader for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Output writer that keeps every line in memory
#[derive(Debug, Default)]
pub struct CapturedOutput {
    pub lines: Vec<String>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl OutputWriter for CapturedOutput {
    fn writeln(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_ends_with_none() {
        let mut input = ScriptedInput::new(vec!["show", "quit"]);
        assert_eq!(input.read_line(">").unwrap().as_deref(), Some("show"));
        assert_eq!(input.read_line(">").unwrap().as_deref(), Some("quit"));
        assert_eq!(input.read_line(">").unwrap(), None);
    }

    #[test]
    fn captured_output_searches_lines() {
        let mut out = CapturedOutput::new();
        out.writeln("Slot 0: Empty");
        assert!(out.contains("Empty"));
        assert!(!out.contains("Item"));
    }
}
