//! A small interactive command interpreter.
//!
//! Lines are split on `;`, each piece is tokenized (double quotes group
//! words), builtins are dispatched directly and everything else is launched
//! as an external program with optional `<` / `>` redirection. The last
//! external command can be re-run with `prev`, and `source` runs a file of
//! commands through the same executor.

pub mod builtins;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod parser;

pub use config::Config;
pub use engine::{execute_command, execute_line, ExecutionResult, ShellState};
pub use error::ShellError;
