use crate::{
    error::{self, Result},
    parser::Parser,
    types::Object,
};

impl Parser<'_> {
    /// Parses a PDF array enclosed in square brackets.
    ///
    /// Elements are direct objects separated by optional whitespace.
    ///
    /// # Example
    /// [1 (two) /three 4 0 R]
    pub(super) fn parse_array(&mut self, depth: usize) -> Result<Vec<Object>> {
        let depth = self.descend(depth)?;
        self.advance(1);

        let mut elements = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b']') => {
                    self.advance(1);
                    return Ok(elements);
                }
                Some(_) => elements.push(self.parse_value(depth)?),
                None => {
                    return error::SyntaxSnafu {
                        pos: self.position(),
                        expected: "']'",
                    }
                    .fail();
                }
            }
        }
    }
}
