use crate::engine::{execute_command, ExecutionResult, ShellState};
use crate::builtins::registry::CommandInfo;
use crate::error::ShellError;
use crate::parser;

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "prev",
    description: "Print the previous command and execute it again.",
    usage: "prev\n\nPrint the most recently launched external command and run it again.\nBuiltins are never remembered.",
    run: prev_runner,
};

pub const NO_PREVIOUS: &str = "No previous command.";

pub fn prev_runner(_args: &[String], state: &mut ShellState) -> ExecutionResult {
    replay_previous(state)
}

/// Echo the remembered command and run it through the shared executor.
///
/// The line is copied out first; replaying an external command records the
/// same text again. A `prev` reached while a replay is already running is
/// refused, since the remembered line would only replay itself.
pub fn replay_previous(state: &mut ShellState) -> ExecutionResult {
    if state.replaying {
        state.report(&ShellError::NestedReplay);
        return ExecutionResult::KeepRunning;
    }

    let Some(line) = state.history.previous().map(str::to_owned) else {
        state.say(NO_PREVIOUS);
        return ExecutionResult::KeepRunning;
    };

    state.say(&line);
    let cmd = match parser::tokenize_command(&line) {
        Ok(cmd) => cmd,
        Err(e) => {
            state.report(&e);
            return ExecutionResult::KeepRunning;
        }
    };

    state.replaying = true;
    let result = execute_command(&cmd, state);
    state.replaying = false;
    result
}
