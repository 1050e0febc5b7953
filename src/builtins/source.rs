use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::engine::{execute_command, ExecutionResult, ShellState};
use crate::builtins::registry::CommandInfo;
use crate::error::ShellError;
use crate::parser;

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "source",
    description: "Execute a script.",
    usage: "source filename\n\nRun each line of FILENAME as one command in the current shell.",
    run,
};

/// Run the `source` builtin.
pub fn run(args: &[String], state: &mut ShellState) -> ExecutionResult {
    let Some(path) = args.first() else {
        state.report(&ShellError::MissingArgument { builtin: "source" });
        return ExecutionResult::KeepRunning;
    };

    match run_script(Path::new(path), state) {
        Ok(result) => result,
        Err(e) => {
            state.report(&e);
            ExecutionResult::KeepRunning
        }
    }
}

/// Feed every line of `path` through [`execute_command`].
///
/// Each line is one command: there is no `;` splitting. Blank lines and
/// lines starting with `#` are skipped. A failing line does not stop the
/// script, but `exit` does, and is passed back up.
pub fn run_script(path: &Path, state: &mut ShellState) -> Result<ExecutionResult, ShellError> {
    let max = state.config.shell.max_source_depth;
    if state.source_depth >= max {
        return Err(ShellError::SourceDepth { path: path.to_path_buf(), max });
    }

    let file = File::open(path).map_err(|source| ShellError::Script {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("sourcing {}", path.display());
    state.source_depth += 1;
    let result = run_lines(BufReader::new(file), path, state);
    state.source_depth -= 1;
    result
}

fn run_lines(reader: impl BufRead, path: &Path, state: &mut ShellState) -> Result<ExecutionResult, ShellError> {
    let max_len = state.config.shell.max_line_length;

    for line in reader.lines() {
        let line = line.map_err(|source| ShellError::Script {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parsed = if line.chars().count() > max_len {
            Err(ShellError::LineTooLong { max: max_len })
        } else {
            parser::tokenize_command(&line)
        };

        match parsed {
            Ok(cmd) => {
                if execute_command(&cmd, state) == ExecutionResult::Exit {
                    return Ok(ExecutionResult::Exit);
                }
            }
            Err(e) => {
                log::warn!("{}: {}", path.display(), e);
                state.complain(&e.to_string());
            }
        }
    }
    Ok(ExecutionResult::KeepRunning)
}
