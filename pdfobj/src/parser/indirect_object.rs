use snafu::ensure;
use tracing::trace;

use crate::{
    error::{self, Result},
    parser::{Parsed, Parser},
    types::{IndirectObject, IndirectReference, Numeric, Object},
};

impl Parser<'_> {
    /// Parses a number, an `N G R` reference or an `N G obj ... endobj`
    /// indirect object definition.
    ///
    /// Only an integer can start a reference. After it, a second integer and
    /// the `R` or `obj` keyword are looked ahead for; when they are not found
    /// the cursor goes back to right after the first integer.
    ///
    /// # Example
    /// ```text
    /// 12 0 R
    /// 12 0 obj
    ///     (Hello, World!)
    /// endobj
    /// ```
    pub(super) fn parse_number_or_indirect(&mut self, depth: usize) -> Result<Parsed> {
        let id = match self.parse_number()? {
            Numeric::Integer(id) => id,
            Numeric::Real(value) => return Ok(Parsed::Object(Object::Real(value))),
        };
        let checkpoint = self.checkpoint();

        self.skip_whitespace();
        if let Ok(gen_id) = self.parse_int() {
            self.skip_whitespace();

            if self.keyword("R") {
                return Ok(Parsed::Object(Object::Reference(IndirectReference::new(
                    id, gen_id,
                ))));
            }
            if self.keyword("obj") {
                return self
                    .parse_indirect_body(id, gen_id, depth)
                    .map(Parsed::Indirect);
            }
        }

        trace!(
            pos = checkpoint.0,
            "Integer is not followed by a reference or object definition"
        );
        self.restore(checkpoint);

        Ok(Parsed::Object(Object::Integer(id)))
    }

    /// Parses the value and `endobj` keyword of an indirect object whose
    /// `N G obj` header has been consumed.
    pub(super) fn parse_indirect_body(
        &mut self,
        id: i64,
        gen_id: i64,
        depth: usize,
    ) -> Result<IndirectObject> {
        let depth = self.descend(depth)?;
        let object = self.parse_value(depth)?;

        self.skip_whitespace();
        ensure!(
            self.keyword("endobj"),
            error::SyntaxSnafu {
                pos: self.position(),
                expected: "'endobj'",
            }
        );

        Ok(IndirectObject::new(id, gen_id, object))
    }
}
