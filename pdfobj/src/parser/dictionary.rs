use tracing::trace;

use crate::{
    error::{self, Result},
    parser::Parser,
    types::{Dictionary, Object},
};

impl Parser<'_> {
    /// Parses a PDF dictionary enclosed in `<<` and `>>`, and the stream body
    /// when the `stream` keyword follows it.
    ///
    /// Keys are names, each followed by a direct object. A repeated key keeps
    /// the last value.
    ///
    /// # Example
    /// ```text
    /// <<
    ///     /Type /Page
    ///     /MediaBox [0 0 612 792]
    /// >>
    /// ```
    pub(super) fn parse_dictionary(&mut self, depth: usize) -> Result<Object> {
        let depth = self.descend(depth)?;
        self.advance(2);

        let mut dictionary = Dictionary::new();
        loop {
            self.skip_whitespace();

            if self.remaining().starts_with(b">>") {
                self.advance(2);
                break;
            }

            let pos = self.position();
            if self.peek() != Some(b'/') {
                return error::SyntaxSnafu {
                    pos,
                    expected: "name key or '>>'",
                }
                .fail();
            }
            self.advance(1);
            let key = self.get_name_token();

            let value = self.parse_value(depth)?;
            if let Some(previous) = dictionary.insert(key, value) {
                trace!(pos, ?previous, "Replaced duplicate dictionary key");
            }
        }

        let checkpoint = self.checkpoint();
        self.skip_whitespace();
        let start = self.position();
        if self.keyword("stream") {
            return Ok(Object::Stream(self.parse_stream_body(dictionary, start)?));
        }
        self.restore(checkpoint);

        Ok(Object::Dictionary(dictionary))
    }
}
