use nom::{
    IResult, ParseTo, Parser as _,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
};
use snafu::OptionExt;

use crate::{
    error::{self, Result},
    parser::Parser,
    types::Numeric,
};

/// Returns `true` if the byte can be part of a numeric token.
pub fn is_numeric_char(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Takes the maximal run of numeric bytes and checks that all of it forms
/// one number.
///
/// A valid number has an optional sign, then digits with an optional fraction
/// or a bare fraction (`.5`), then an optional exponent. Runs such as `1.2.3`
/// or `5-3` are rejected as a whole rather than split into two numbers.
pub fn numeric_token(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while1(is_numeric_char)
        .and_then(all_consuming(recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
            opt((one_of("eE"), opt(one_of("+-")), digit1)),
        ))))
        .parse(input)
}

/// Parses a numeric value, integer or real, from a byte slice.
///
/// Tokens with a decimal point or an exponent are real numbers. Integers that
/// do not fit into 64 bits are rejected.
pub fn numeric(input: &[u8]) -> IResult<&[u8], Numeric> {
    let (remaining, num_str) = numeric_token(input)?;

    if num_str.iter().any(|c| matches!(c, b'.' | b'e' | b'E')) {
        let num = num_str.parse_to().ok_or_else(|| {
            nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
        })?;
        Ok((remaining, Numeric::Real(num)))
    } else {
        let num = num_str.parse_to().ok_or_else(|| {
            nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
        })?;
        Ok((remaining, Numeric::Integer(num)))
    }
}

impl Parser<'_> {
    /// Parses the next numeric token. On failure the cursor does not move.
    pub fn parse_number(&mut self) -> Result<Numeric> {
        let pos = self.position();

        self.lex(numeric).context(error::SyntaxSnafu {
            pos,
            expected: "number",
        })
    }

    /// Parses the next token as an integer. On failure, including a real
    /// token, the cursor does not move.
    pub fn parse_int(&mut self) -> Result<i64> {
        let checkpoint = self.checkpoint();

        match self.parse_number()? {
            Numeric::Integer(value) => Ok(value),
            Numeric::Real(_) => {
                self.restore(checkpoint);
                error::SyntaxSnafu {
                    pos: checkpoint.0,
                    expected: "integer",
                }
                .fail()
            }
        }
    }

    /// Parses the next numeric token as a real. Integer tokens are widened.
    pub fn parse_double(&mut self) -> Result<f64> {
        match self.parse_number()? {
            Numeric::Integer(value) => Ok(value as f64),
            Numeric::Real(value) => Ok(value),
        }
    }
}
