mod ast;
mod combinators;

pub use ast::{SimpleCommand, Token};

use crate::error::ShellError;
use combinators::parse_token;

/// Separates simple commands on one interactive line.
pub const COMMAND_SEPARATOR: char = ';';

// ── Public API ────────────────────────────────────────────────────────────

/// Split a raw line on `;` and tokenize every segment independently.
///
/// Empty segments come back as empty commands. A quoting fault only poisons
/// the segment it occurs in; the rest of the line is still returned.
pub fn tokenize_line(line: &str) -> Vec<Result<SimpleCommand, ShellError>> {
    line.split(COMMAND_SEPARATOR).map(tokenize_command).collect()
}

/// Tokenize one segment into a [`SimpleCommand`].
///
/// Words are separated by runs of whitespace. A word that opens with `"`
/// runs to the next `"` and may contain spaces; scanning resumes right
/// after the closing quote.
pub fn tokenize_command(segment: &str) -> Result<SimpleCommand, ShellError> {
    let mut argv = Vec::new();
    let mut rest = segment;

    while let Ok((after, token)) = parse_token(rest) {
        argv.push(token.into_word());
        rest = after;
    }

    // The only thing parse_token refuses besides trailing whitespace is an
    // opening quote with no partner.
    if rest.trim_start().starts_with('"') {
        return Err(ShellError::UnmatchedQuote);
    }

    Ok(SimpleCommand::new(argv))
}

// ── Tests ──────────────────────────────────────────────────────────────────
