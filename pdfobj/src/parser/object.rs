use nom::bytes::complete::take_while1;
use snafu::OptionExt;

use crate::{
    error::{self, Result},
    parser::{Parsed, Parser, whitespace::valid_name_char},
    types::Object,
};

impl Parser<'_> {
    /// Parses the next object, dispatching on its first byte.
    ///
    /// Only integers can start an indirect object definition, so every other
    /// production yields [`Parsed::Object`].
    pub(super) fn parse_any(&mut self, depth: usize) -> Result<Parsed> {
        self.skip_whitespace();
        let pos = self.position();

        let object = match self.peek() {
            None => {
                return error::SyntaxSnafu {
                    pos,
                    expected: "object",
                }
                .fail();
            }
            Some(b'0'..=b'9' | b'+' | b'-' | b'.') => {
                return self.parse_number_or_indirect(depth);
            }
            Some(b'/') => {
                self.advance(1);
                Object::Name(self.get_name_token())
            }
            Some(b'(') => Object::String(self.parse_string()?),
            Some(b'<') if self.remaining().starts_with(b"<<") => self.parse_dictionary(depth)?,
            Some(b'<') => {
                return error::UnsupportedSnafu {
                    pos,
                    feature: "hexadecimal strings",
                }
                .fail();
            }
            Some(b'[') => Object::Array(self.parse_array(depth)?),
            Some(b'%') => {
                return error::UnsupportedSnafu {
                    pos,
                    feature: "comments",
                }
                .fail();
            }
            Some(_) => self.parse_keyword_object()?,
        };

        Ok(Parsed::Object(object))
    }

    /// Parses the next direct object. An indirect object definition in this
    /// position is a syntax error reported at its first byte.
    pub(super) fn parse_value(&mut self, depth: usize) -> Result<Object> {
        self.skip_whitespace();
        let pos = self.position();

        match self.parse_any(depth)? {
            Parsed::Object(object) => Ok(object),
            Parsed::Indirect(_) => error::SyntaxSnafu {
                pos,
                expected: "direct object",
            }
            .fail(),
        }
    }

    /// Parses `null`, `true` or `false`.
    fn parse_keyword_object(&mut self) -> Result<Object> {
        let checkpoint = self.checkpoint();

        let object = match self.lex(take_while1(valid_name_char)) {
            Some(b"null") => Some(Object::Null),
            Some(b"true") => Some(Object::Boolean(true)),
            Some(b"false") => Some(Object::Boolean(false)),
            _ => None,
        };

        if object.is_none() {
            self.restore(checkpoint);
        }

        object.context(error::SyntaxSnafu {
            pos: checkpoint.0,
            expected: "object",
        })
    }
}
