use std::env;
use std::io::Write;
use std::process::ExitCode;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use minish::engine::{self, ExecutionResult, ShellState};
use minish::{logging, Config};

/// Expand `{cwd}` in the configured prompt, showing the home prefix as `~`.
fn get_prompt(template: &str) -> String {
    if !template.contains("{cwd}") {
        return template.to_string();
    }

    let cwd = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let path_str = match dirs::home_dir() {
        Some(home) => match cwd.strip_prefix(&home) {
            Ok(relative) if relative.as_os_str().is_empty() => "~".to_string(),
            Ok(relative) => format!("~/{}", relative.display()),
            Err(_) => cwd.display().to_string(),
        },
        None => cwd.display().to_string(),
    };

    template.replace("{cwd}", &path_str)
}

fn main() -> ExitCode {
    let config = Config::load();
    logging::init(&config.logging);

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("minish: cannot start line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut state = ShellState::new(config);
    let banner = state.config.shell.banner.clone();
    state.say(&banner);
    log::info!("session started");

    loop {
        let prompt = get_prompt(&state.config.shell.prompt);
        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                if engine::execute_line(&line, &mut state) == ExecutionResult::Exit {
                    break;
                }
                let _ = state.out.flush();
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(ReadlineError::Eof) => {
                let farewell = state.config.shell.farewell.clone();
                state.say(&farewell);
                break;
            }
            Err(err) => {
                eprintln!("minish: {:?}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    let _ = state.out.flush();
    log::info!("session ended");
    ExitCode::SUCCESS
}
