use std::{fmt::Display, io::Write};

/// Represents a PDF literal string.
///
/// Literal strings are enclosed in parentheses `(content)`. The bytes between
/// the outer parentheses are kept verbatim, balanced inner parentheses included.
///
/// # Examples
/// ```text
/// (Hello World)              // Hello World
/// (Nested (pair) kept)       // Nested (pair) kept
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct PdfString {
    data: Vec<u8>,
}

impl PdfString {
    /// Returns the underlying byte representation of the PDF string.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Writes the string wrapped in parentheses. No escaping is applied.
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(b"(")?;
        w.write_all(&self.data)?;
        w.write_all(b")")
    }
}

impl From<Vec<u8>> for PdfString {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for PdfString {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl From<&str> for PdfString {
    fn from(data: &str) -> Self {
        Self {
            data: data.as_bytes().to_vec(),
        }
    }
}

impl Display for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", String::from_utf8_lossy(&self.data))
    }
}
