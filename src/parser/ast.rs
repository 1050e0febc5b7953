// ── AST types ──────────────────────────────────────────────────────────────

/// One program invocation: the command name followed by its arguments.
///
/// The vector carries its own length, so an empty command is simply one
/// with no words and is never dispatched.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct SimpleCommand {
    pub argv: Vec<String>,
}

impl SimpleCommand {
    pub fn new(argv: Vec<String>) -> Self {
        SimpleCommand { argv }
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Everything after the command name.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }

    /// The words joined by single spaces, as stored in history.
    pub fn joined(&self) -> String {
        self.argv.join(" ")
    }
}

/// A word as it appeared in the source text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Maximal run of non-whitespace characters.
    Bare(String),
    /// Text between a pair of `"`, taken verbatim.
    Quoted(String),
}

impl Token {
    pub fn into_word(self) -> String {
        match self {
            Token::Bare(s) | Token::Quoted(s) => s,
        }
    }
}
