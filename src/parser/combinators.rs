use nom::{
    branch::alt,
    bytes::complete::take_till,
    character::complete::{char, multispace0, none_of},
    combinator::{map, recognize},
    sequence::{delimited, pair, preceded},
    IResult,
    Parser,
};

use super::ast::Token;

// ── Low-level nom parsers ──────────────────────────────────────────────────

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// `"..."` with everything up to the next quote taken literally.
/// An empty pair is a valid zero-length word.
pub fn parse_quoted_string(input: &str) -> IResult<&str, String> {
    let (input, content) = delimited(char('"'), take_till(|c: char| c == '"'), char('"')).parse(input)?;
    Ok((input, content.to_string()))
}

/// A run of non-whitespace that does not open with a quote. Quotes later in
/// the run are ordinary characters.
pub fn parse_unquoted_string(input: &str) -> IResult<&str, String> {
    let (input, content) = recognize(pair(none_of("\" \t\r\n"), take_till(is_space))).parse(input)?;
    Ok((input, content.to_string()))
}

/// Skip leading whitespace and read exactly one token.
pub fn parse_token(input: &str) -> IResult<&str, Token> {
    preceded(
        multispace0,
        alt((
            map(parse_quoted_string, Token::Quoted),
            map(parse_unquoted_string, Token::Bare),
        )),
    )
    .parse(input)
}
