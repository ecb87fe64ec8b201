use std::io::Write;

use crate::types::{Dictionary, Name, Object};

/// Represents a PDF stream object containing both a dictionary and binary data.
///
/// PDF streams are used to store large amounts of data, such as:
/// - Image and font data
/// - Content streams for page descriptions
/// - Compressed object data
///
/// `data` holds the decoded bytes when the stream declared a supported filter
/// (FlateDecode), the raw bytes between `stream` and `endstream` otherwise.
///
/// # Example
/// ```text
/// <<
///   /Length 128
///   /Filter /FlateDecode
/// >>
/// stream
/// ...compressed binary data...
/// endstream
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Stream {
    pub dictionary: Dictionary,
    pub data: Vec<u8>,
}

/// The first filter declared by a stream dictionary.
#[derive(Debug, Default, PartialEq, Clone)]
pub enum Filter {
    /// No filter declared - raw data
    #[default]
    None,
    /// FlateDecode compression (zlib/deflate algorithm)
    FlateDecode,
    /// Any other filter, kept as raw data
    Unsupported(Name),
}

impl Filter {
    /// Reads the `/Filter` entry of a stream dictionary.
    ///
    /// Filters can be specified as a single name (`/FlateDecode`) or as an
    /// array of names (`[/FlateDecode /ASCII85Decode]`). Only the first entry
    /// of an array is considered.
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        let first = match dictionary.get("Filter") {
            Some(Object::Array(filters)) => filters.first(),
            other => other,
        };

        match first.and_then(|filter| filter.as_name().ok()) {
            Some(name) if name.as_bytes() == b"FlateDecode" => Filter::FlateDecode,
            Some(name) => Filter::Unsupported(name.clone()),
            None => Filter::None,
        }
    }
}

impl Stream {
    pub fn new(dictionary: Dictionary, data: Vec<u8>) -> Self {
        Self { dictionary, data }
    }

    /// The first filter declared by the stream dictionary.
    pub fn filter(&self) -> Filter {
        Filter::from_dictionary(&self.dictionary)
    }

    /// Writes the dictionary followed by the data between `stream` and
    /// `endstream` keywords.
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        self.dictionary.write(w)?;
        w.write_all(b"\nstream\n")?;
        w.write_all(&self.data)?;
        w.write_all(b"\nendstream\n")
    }
}
