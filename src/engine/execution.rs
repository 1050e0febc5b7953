use crate::builtins;
use crate::error::ShellError;
use crate::parser::{self, SimpleCommand};

use super::launch::{launch, ProcessResult};
use super::redirect::extract_redirection;
use super::state::{ExecutionResult, ShellState};

// ── Line level ────────────────────────────────────────────────────────────

/// Run every `;`-separated command on an interactive line, in order.
///
/// A segment that fails to tokenize is reported and skipped; the others
/// still run. Stops early only when a command asks the shell to exit.
pub fn execute_line(line: &str, state: &mut ShellState) -> ExecutionResult {
    let max = state.config.shell.max_line_length;
    if line.chars().count() > max {
        state.report(&ShellError::LineTooLong { max });
        return ExecutionResult::KeepRunning;
    }

    for segment in parser::tokenize_line(line) {
        let result = match segment {
            Ok(cmd) => execute_command(&cmd, state),
            Err(e) => {
                state.report(&e);
                ExecutionResult::KeepRunning
            }
        };
        if result == ExecutionResult::Exit {
            return ExecutionResult::Exit;
        }
    }
    ExecutionResult::KeepRunning
}

// ── Single command ────────────────────────────────────────────────────────

/// The one place a parsed command is dispatched.
///
/// Interactive lines, `source` scripts and `prev` replays all land here, so
/// builtin recognition is the same no matter where a command came from.
pub fn execute_command(cmd: &SimpleCommand, state: &mut ShellState) -> ExecutionResult {
    let Some(name) = cmd.name() else {
        return ExecutionResult::KeepRunning;
    };

    if let Some(info) = builtins::registry::find_command(name) {
        log::debug!("builtin: {}", cmd.joined());
        return (info.run)(cmd.args(), state);
    }

    log::debug!("external: {}", cmd.joined());
    let redirection = extract_redirection(cmd.argv.clone());
    match launch(&redirection, &mut state.out) {
        Ok(result) => finish_launch(&redirection.argv, &result, state),
        // Redirect targets that cannot be opened abort before any process
        // exists, so history keeps its old value.
        Err(e) => state.report(&e),
    }
    ExecutionResult::KeepRunning
}

/// Every attempt that got as far as process creation is remembered,
/// whether or not the program actually ran.
fn finish_launch(argv: &[String], result: &ProcessResult, state: &mut ShellState) {
    match result {
        ProcessResult::Exited(_) => {}
        ProcessResult::NotRunnable(e) | ProcessResult::WaitFailed(e) => state.report(e),
    }
    state.history.record_launch(argv);
}
