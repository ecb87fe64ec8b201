use nom::{
    IResult, Parser as _,
    branch::alt,
    bytes::complete::{tag, take_while, take_while_m_n},
    combinator::{not, value},
    error::Error,
    sequence::terminated,
};

use crate::parser::Parser;

/// Checks if a byte represents a PDF whitespace character.
///
/// Whitespace includes null (0x00), tab (0x09), LF (0x0A), FF (0x0C), CR (0x0D), and space (0x20).
/// Returns `true` if the character is a whitespace, `false` otherwise.
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, 0x00 | 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

/// Checks if a byte represents a PDF delimiter character.
///
/// Delimiters include `(` (0x28), `)` (0x29), `<` (0x3c), `>` (0x3e), `[` (0x5b), `]` (0x5d),
/// `{` (0x7b), `}` (0x7d), `/` (0x2f), and `%` (0x25).
/// Returns `true` if the character is a delimiter, `false` otherwise.
pub fn is_delimiter(c: u8) -> bool {
    matches!(
        c,
        0x28 | 0x29 | 0x3c | 0x3e | 0x5b | 0x5d | 0x7b | 0x7d | 0x2f | 0x25
    )
}

/// Returns `true` if the byte terminates a name or keyword token.
pub fn ends_name(c: u8) -> bool {
    is_whitespace(c) || is_delimiter(c)
}

/// Returns `true` if the byte can be part of a name or keyword token.
pub fn valid_name_char(c: u8) -> bool {
    !ends_name(c)
}

/// Parses zero or more PDF whitespace characters. Never fails.
pub fn whitespace(input: &[u8]) -> IResult<&[u8], ()> {
    value((), take_while(is_whitespace)).parse(input)
}

/// Parses the end-of-line marker required after the `stream` keyword (CRLF or LF).
pub fn stream_eol(input: &[u8]) -> IResult<&[u8], ()> {
    value((), alt((tag("\x0D\x0A"), tag("\x0A")))).parse(input)
}

/// Matches `keyword` when it is not immediately followed by another regular character.
pub fn keyword<'a>(
    keyword: &'static str,
) -> impl nom::Parser<&'a [u8], Output = (), Error = Error<&'a [u8]>> {
    value(
        (),
        terminated(tag(keyword), not(take_while_m_n(1, 1, valid_name_char))),
    )
}

impl Parser<'_> {
    /// Advances the cursor past consecutive whitespace bytes.
    ///
    /// Calling it again right away does not move the cursor.
    pub fn skip_whitespace(&mut self) {
        self.lex(whitespace);
    }
}
