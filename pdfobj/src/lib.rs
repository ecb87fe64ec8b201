//! Parser and serializer for the object syntax of PDF files.
//!
//! [`Parser`] reads objects from a byte buffer into the [`Object`] model, and
//! every value can be written back out as PDF syntax.
//!
//! ```
//! use pdfobj::{Object, Parsed, Parser};
//!
//! let mut parser = Parser::new(b"4 0 obj << /Type /Page /Parent 3 0 R >> endobj");
//! let Parsed::Indirect(page) = parser.parse()? else {
//!     panic!("expected an indirect object");
//! };
//!
//! assert_eq!(page.id, 4);
//! assert_eq!(page.as_dictionary()?.get("Type"), Some(&Object::Name("Page".into())));
//! # Ok::<(), pdfobj::Error>(())
//! ```

mod error;
pub mod parser;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use parser::{Checkpoint, DEFAULT_MAX_DEPTH, Parsed, Parser, ParserConfig};
pub use types::{
    Dictionary, Filter, IndirectObject, IndirectReference, Name, Numeric, Object, PdfString,
    Stream,
};
