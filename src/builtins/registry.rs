use crate::engine::{ExecutionResult, ShellState};
use crate::builtins;

/// A builtin receives the words after its own name.
pub type BuiltinRunner = fn(&[String], &mut ShellState) -> ExecutionResult;

pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub run: BuiltinRunner,
}

pub const BUILTINS: &[CommandInfo] = &[
    builtins::cd::COMMAND_INFO,
    builtins::source::COMMAND_INFO,
    builtins::prev::COMMAND_INFO,
    builtins::help::COMMAND_INFO,
    builtins::system::COMMAND_INFO_EXIT,
];

/// Exact, case-sensitive lookup.
pub fn find_command(name: &str) -> Option<&'static CommandInfo> {
    BUILTINS.iter().find(|cmd| cmd.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_builtin() {
        for name in ["exit", "cd", "source", "prev", "help"] {
            assert_eq!(find_command(name).map(|c| c.name), Some(name));
        }
    }

    #[test]
    fn match_is_exact() {
        assert!(find_command("CD").is_none());
        assert!(find_command("help2").is_none());
        assert!(find_command("ls").is_none());
        assert!(find_command("").is_none());
    }
}
