use std::env;

use crate::engine::{ExecutionResult, ShellState};
use crate::builtins::registry::CommandInfo;
use crate::error::ShellError;

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "cd",
    description: "Change the current working directory.",
    usage: "cd path\n\nChange the current directory to PATH. PATH is required.",
    run: cd_runner,
};

pub fn cd_runner(args: &[String], state: &mut ShellState) -> ExecutionResult {
    if let Err(e) = run(args) {
        state.report(&e);
    }
    ExecutionResult::KeepRunning
}

/// Change directory to `args[0]`. On failure the working directory is left
/// where it was.
pub fn run(args: &[String]) -> Result<(), ShellError> {
    let target = args
        .first()
        .ok_or(ShellError::MissingArgument { builtin: "cd" })?;

    env::set_current_dir(target).map_err(|source| ShellError::ChangeDir {
        path: target.clone(),
        source,
    })
}
