use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Result, ShellError};
use super::redirect::{open_stdin_redirect, open_stdout_redirect, Redirection};

/// Exit status reported for a program that could not be started.
pub const NOT_RUNNABLE_STATUS: i32 = 127;

/// How a launch attempt ended once a process creation was tried.
#[derive(Debug)]
pub enum ProcessResult {
    /// The child ran and was waited for.
    Exited(ExitStatus),
    /// The program could not be resolved or executed.
    NotRunnable(ShellError),
    /// The child was spawned but waiting on it failed.
    WaitFailed(ShellError),
}

impl ProcessResult {
    pub fn code(&self) -> i32 {
        match self {
            ProcessResult::Exited(status) => status.code().unwrap_or(1),
            ProcessResult::NotRunnable(_) => NOT_RUNNABLE_STATUS,
            ProcessResult::WaitFailed(_) => 1,
        }
    }

    pub fn success(&self) -> bool {
        self.code() == 0
    }
}

/// Run `argv[0]` with the given redirections and block until it finishes.
///
/// Redirect targets are opened before anything is spawned; if either fails
/// the error comes back as `Err` and no process is created. `out` is flushed
/// first so buffered shell output lands before the child's.
pub fn launch(redirection: &Redirection, out: &mut dyn Write) -> Result<ProcessResult> {
    let stdin = redirection.input.as_deref().map(open_stdin_redirect).transpose()?;
    let stdout = redirection.output.as_deref().map(open_stdout_redirect).transpose()?;

    let Some((name, args)) = redirection.argv.split_first() else {
        return Ok(ProcessResult::Exited(ExitStatus::default()));
    };

    let mut command = Command::new(name);
    command.args(args);
    if let Some(f) = stdin {
        command.stdin(Stdio::from(f));
    }
    if let Some(f) = stdout {
        command.stdout(Stdio::from(f));
    }

    let _ = out.flush();

    // `command` owns the redirect handles; they close in the parent when it
    // drops at the end of this function.
    let result = match command.spawn() {
        Ok(mut child) => match child.wait() {
            Ok(status) => ProcessResult::Exited(status),
            Err(source) => ProcessResult::WaitFailed(ShellError::Wait {
                name: name.clone(),
                source,
            }),
        },
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied) => {
            ProcessResult::NotRunnable(ShellError::CommandNotFound { name: name.clone() })
        }
        Err(source) => ProcessResult::NotRunnable(ShellError::Spawn {
            name: name.clone(),
            source,
        }),
    };

    log_outcome(name, &result);
    Ok(result)
}

fn log_outcome(name: &str, result: &ProcessResult) {
    match result {
        ProcessResult::Exited(status) if status.code().is_none() => {
            log::info!("{} terminated by {}", name, describe_signal(status))
        }
        ProcessResult::Exited(_) if result.success() => log::debug!("{} succeeded", name),
        ProcessResult::Exited(_) => log::info!("{} exited with status {}", name, result.code()),
        ProcessResult::NotRunnable(_) => log::debug!("{} could not be started", name),
        ProcessResult::WaitFailed(_) => log::debug!("{} was started but not reaped", name),
    }
}

#[cfg(unix)]
fn describe_signal(status: &ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;
    use nix::sys::signal::Signal;

    match status.signal() {
        Some(raw) => match Signal::try_from(raw) {
            Ok(sig) => sig.as_str().to_string(),
            Err(_) => format!("signal {}", raw),
        },
        None => "an unknown cause".to_string(),
    }
}

#[cfg(not(unix))]
fn describe_signal(_status: &ExitStatus) -> String {
    "an unknown cause".to_string()
}
