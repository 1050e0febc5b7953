use std::io::{self, Write};

use crate::config::Config;
use crate::error::ShellError;
use super::history::History;

/// Everything the interpreter carries from one command to the next.
pub struct ShellState {
    pub config: Config,
    /// The most recently launched external command.
    pub history: History,
    /// How many `source` invocations are currently on the stack.
    pub source_depth: u32,
    /// Set while `prev` is running the remembered command.
    pub replaying: bool,
    /// Normal output: banner, help text, history echo.
    pub out: Box<dyn Write>,
    /// Diagnostics.
    pub err: Box<dyn Write>,
}

impl ShellState {
    /// State wired to the process's own stdout and stderr.
    pub fn new(config: Config) -> Self {
        Self::with_output(config, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_output(config: Config, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        ShellState {
            config,
            history: History::default(),
            source_depth: 0,
            replaying: false,
            out,
            err,
        }
    }

    /// Write one line of normal output. A broken output stream is not worth
    /// stopping the shell for.
    pub fn say(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{}", msg);
    }

    /// Write one diagnostic line.
    pub fn complain(&mut self, msg: &str) {
        let _ = writeln!(self.err, "{}", msg);
        let _ = self.err.flush();
    }

    /// Log a fault and print it to the diagnostic stream.
    pub fn report(&mut self, e: &ShellError) {
        log::warn!("{}", e);
        self.complain(&e.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    KeepRunning,
    Exit,
}
