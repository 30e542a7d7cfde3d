//! Text I/O seam between the engine and whatever drives it

use std::collections::VecDeque;

/// Line-oriented terminal.
///
/// The engine only ever prints whole lines and reads whole lines.
pub trait Console {
    /// Print one line of game text
    fn print(&mut self, line: &str);

    /// Show `prompt` and read one line.
    ///
    /// Returns `None` when input was interrupted or is exhausted; the engine
    /// treats that as a request to quit.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Console fed from a fixed list of input lines.
///
/// Everything printed is kept in `output`, and prompts are echoed there as
/// `"{prompt}{line}"` so a transcript reads like a real session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// True if any printed line contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let line = self.input.pop_front()?;
        self.output.push(format!("{prompt}{line}"));
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_reads_in_order() {
        let mut console = ScriptedConsole::new(["look", "north"]);
        assert_eq!(console.read_line("> ").as_deref(), Some("look"));
        assert_eq!(console.remaining(), 1);
        assert_eq!(console.read_line("> ").as_deref(), Some("north"));
        assert_eq!(console.read_line("> "), None);
        assert_eq!(console.output, vec!["> look", "> north"]);
    }

    #[test]
    fn test_scripted_console_records_output() {
        let mut console = ScriptedConsole::default();
        console.print("Hello");
        assert!(console.saw("ell"));
        assert!(!console.saw("bye"));
    }
}
