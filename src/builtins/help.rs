use crate::engine::{ExecutionResult, ShellState};
use crate::builtins::registry::{CommandInfo, BUILTINS, find_command};

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "help",
    description: "Print this help message.",
    usage: "help [name ...]\n\nWithout arguments, list the builtin commands. With NAME, show\nthe usage of that builtin.",
    run: help_runner,
};

pub const HELP_HEADER: &str = "Mini-shell built-in commands:";

pub fn help_runner(args: &[String], state: &mut ShellState) -> ExecutionResult {
    if args.is_empty() {
        let text = help_text();
        state.say(&text);
        return ExecutionResult::KeepRunning;
    }

    for arg in args {
        match find_command(arg) {
            Some(cmd) => {
                let text = format!("{}: {}\n{}", cmd.name, cmd.description, cmd.usage);
                state.say(&text);
            }
            None => state.complain(&format!("help: no help topics match `{}`", arg)),
        }
    }
    ExecutionResult::KeepRunning
}

/// The static listing printed by a bare `help`.
pub fn help_text() -> String {
    let max_len = BUILTINS.iter().map(|b| b.name.len()).max().unwrap_or(0);

    let mut text = String::from(HELP_HEADER);
    for builtin in BUILTINS {
        text.push_str(&format!("\n {:<width$}  {}", builtin.name, builtin.description, width = max_len));
    }
    text
}
