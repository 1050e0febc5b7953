mod state;
mod history;
mod redirect;
mod launch;
mod execution;

// Re-export the public API so that `main.rs` and `builtins/` can use
// `engine::ShellState`, `engine::execute_command`, etc.
pub use state::{ShellState, ExecutionResult};
pub use history::History;
pub use redirect::{extract_redirection, Redirection};
pub use launch::{launch, ProcessResult, NOT_RUNNABLE_STATUS};
pub use execution::{execute_line, execute_command};
