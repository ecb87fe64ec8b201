mod array;
mod dictionary;
mod indirect_object;
pub mod name;
pub mod numeric;
mod object;
mod stream;
mod string;
pub mod whitespace;

use std::io::{Cursor, Write};

use nom::error::Error as NomError;
use snafu::ensure;

use crate::{
    error::{self, Result},
    source,
    types::{IndirectObject, Object},
};

pub use whitespace::{ends_name, is_delimiter, is_whitespace, valid_name_char};

/// Default limit for nested arrays, dictionaries and indirect objects.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of arrays, dictionaries (streams included) and
    /// indirect object bodies before parsing fails with `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Result of the general parse entry point.
///
/// A leading integer pair followed by `obj` makes an indirect object definition,
/// everything else is a direct object.
#[derive(Debug, PartialEq, Clone)]
pub enum Parsed {
    Object(Object),
    Indirect(IndirectObject),
}

impl Parsed {
    pub fn into_object(self) -> Object {
        match self {
            Parsed::Object(object) => object,
            Parsed::Indirect(indirect) => indirect.into_object(),
        }
    }

    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        match self {
            Parsed::Object(object) => object.write(w),
            Parsed::Indirect(indirect) => indirect.write(w),
        }
    }
}

/// A saved parser position, used to undo a rejected lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(u64);

/// Recursive-descent parser for PDF object syntax over a byte buffer.
///
/// Token-level helpers never move the cursor when they fail, so alternative
/// productions can be tried from the same position. Structural productions
/// either consume their whole syntax or fail the parse.
pub struct Parser<'a> {
    cursor: Cursor<&'a [u8]>,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: ParserConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Byte offset of the next unread byte.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub fn set_position(&mut self, pos: u64) {
        self.cursor.set_position(pos);
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position())
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.set_position(checkpoint.0);
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Number of bytes left after the cursor.
    pub fn remaining_len(&mut self) -> Result<u64> {
        source::remaining_len(&mut self.cursor)
    }

    /// Parses the next object, which may be an indirect object definition.
    pub fn parse(&mut self) -> Result<Parsed> {
        self.parse_any(0)
    }

    /// Parses the next direct object.
    ///
    /// # Errors
    /// Fails with a syntax error on an indirect object definition.
    pub fn parse_object(&mut self) -> Result<Object> {
        self.parse_value(0)
    }

    /// Parses an `N G obj ... endobj` indirect object definition.
    pub fn parse_top_level_object(&mut self) -> Result<IndirectObject> {
        self.skip_whitespace();
        let id = self.parse_int()?;
        self.skip_whitespace();
        let gen_id = self.parse_int()?;
        self.skip_whitespace();

        ensure!(
            self.keyword("obj"),
            error::SyntaxSnafu {
                pos: self.position(),
                expected: "'obj'",
            }
        );

        self.parse_indirect_body(id, gen_id, 0)
    }

    fn remaining(&self) -> &'a [u8] {
        let input: &'a [u8] = *self.cursor.get_ref();
        let pos = usize::try_from(self.cursor.position()).unwrap_or(usize::MAX);

        input.get(pos..).unwrap_or_default()
    }

    fn peek(&self) -> Option<u8> {
        self.remaining().first().copied()
    }

    fn advance(&mut self, count: usize) {
        self.cursor.set_position(self.cursor.position() + count as u64);
    }

    /// Runs a nom parser on the unread input, advancing past its match.
    ///
    /// The cursor does not move when the parser fails.
    fn lex<P>(&mut self, mut parser: P) -> Option<P::Output>
    where
        P: nom::Parser<&'a [u8], Error = NomError<&'a [u8]>>,
    {
        let input = self.remaining();
        let (rest, output) = parser.parse(input).ok()?;
        self.advance(input.len() - rest.len());

        Some(output)
    }

    /// Consumes `keyword` if it is next and ends at a delimiter, whitespace or
    /// the end of input.
    fn keyword(&mut self, keyword: &'static str) -> bool {
        self.lex(whitespace::keyword(keyword)).is_some()
    }

    /// Enters one more level of nesting.
    fn descend(&self, depth: usize) -> Result<usize> {
        ensure!(
            depth < self.config.max_depth,
            error::DepthExceededSnafu {
                pos: self.position(),
                limit: self.config.max_depth,
            }
        );

        Ok(depth + 1)
    }
}
