use std::io::Write;

use crate::engine::{ExecutionResult, ShellState};
use crate::builtins::registry::CommandInfo;

pub const COMMAND_INFO_EXIT: CommandInfo = CommandInfo {
    name: "exit",
    description: "Exit the shell.",
    usage: "exit\n\nPrint a farewell message and leave the shell with status 0.",
    run: exit_runner,
};

/// Says goodbye; the caller unwinds on [`ExecutionResult::Exit`] and the
/// binary exits with status 0.
pub fn exit_runner(_args: &[String], state: &mut ShellState) -> ExecutionResult {
    let farewell = state.config.shell.farewell.clone();
    state.say(&farewell);
    let _ = state.out.flush();
    ExecutionResult::Exit
}
