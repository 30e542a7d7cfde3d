//! Line console fed by an input channel

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{Receiver, Sender};

use lab_core::Console;
use log::warn;

/// What the console can receive while waiting for a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C
    Interrupt,
    /// End of input or a read error
    Closed,
}

/// Send every line of `reader` to `tx`, then [`Input::Closed`].
///
/// Runs on its own thread for stdin so an interrupt can arrive while a read
/// is still blocked.
pub fn forward_lines<R: BufRead>(reader: R, tx: Sender<Input>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if tx.send(Input::Line(line)).is_err() {
                    return;
                }
            }
            Err(err) => {
                warn!("input failed: {err}");
                break;
            }
        }
    }
    let _ = tx.send(Input::Closed);
}

/// Console reading lines from a channel and printing to `output`.
///
/// Write failures cannot be reported through [`Console`], so the first one is
/// kept and the console goes quiet; check [`LineConsole::take_error`] when
/// the game ends.
pub struct LineConsole<W> {
    input: Receiver<Input>,
    output: W,
    /// Print each line read, so replayed scripts show their commands
    echo_input: bool,
    error: Option<io::Error>,
}

impl<W: Write> LineConsole<W> {
    pub fn new(input: Receiver<Input>, output: W, echo_input: bool) -> Self {
        Self {
            input,
            output,
            echo_input,
            error: None,
        }
    }

    /// The first write error, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn write(&mut self, text: &str, newline: bool) {
        if self.error.is_some() {
            return;
        }
        let result = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}")
        };
        if let Err(err) = result.and_then(|()| self.output.flush()) {
            warn!("output failed: {err}");
            self.error = Some(err);
        }
    }
}

impl<W: Write> Console for LineConsole<W> {
    fn print(&mut self, line: &str) {
        self.write(line, true);
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.write(prompt, false);
        match self.input.recv() {
            Ok(Input::Line(line)) => {
                let line = line.trim_end_matches('\r').to_string();
                if self.echo_input {
                    self.write(&line, true);
                }
                Some(line)
            }
            Ok(Input::Interrupt | Input::Closed) | Err(_) => {
                // Keep the farewell off the prompt line
                self.write("", true);
                None
            }
        }
    }
}
