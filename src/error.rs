use std::io;
use std::path::PathBuf;

/// Every fault the interpreter reports. None of them end the session;
/// the executor prints them to the diagnostic stream and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Error: unmatched double quote.")]
    UnmatchedQuote,

    #[error("{builtin}: expected argument to \"{builtin}\"")]
    MissingArgument { builtin: &'static str },

    #[error("Could not open input file {path}")]
    OpenInput {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not open output file {path}")]
    OpenOutput {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cd: {source}")]
    ChangeDir {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("source: {}: {source}", .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source: maximum nesting depth ({max}) exceeded while sourcing '{}'", .path.display())]
    SourceDepth { path: PathBuf, max: u32 },

    #[error("input line exceeds {max} characters")]
    LineTooLong { max: usize },

    #[error("{name}: command not found")]
    CommandNotFound { name: String },

    #[error("{name}: lost track of the process: {source}")]
    Wait {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("prev: the previous command calls prev itself; not replaying")]
    NestedReplay,

    #[error("{name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ShellError>;
