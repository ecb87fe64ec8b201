use snafu::ensure;
use tracing::debug;

use crate::{
    error::{self, Result},
    parser::{Parser, whitespace::stream_eol},
    types::{Dictionary, Filter, Object, Stream},
};

impl Parser<'_> {
    /// Parses the data of a stream whose `stream` keyword, found at `start`,
    /// has just been consumed.
    ///
    /// Exactly `/Length` bytes are taken after the end-of-line marker. They are
    /// decompressed when the first filter is FlateDecode and kept as they are
    /// otherwise.
    ///
    /// # Errors
    /// - `Syntax` if the end-of-line marker is missing, or `/Length` is
    ///   missing, negative or not an integer
    /// - `Unsupported` if `/Length` is an indirect reference
    /// - `LengthMismatch` if `/Length` runs past the input or does not end
    ///   right before `endstream`
    /// - `Decompression` if FlateDecode data is malformed
    pub(super) fn parse_stream_body(
        &mut self,
        dictionary: Dictionary,
        start: u64,
    ) -> Result<Stream> {
        ensure!(
            self.lex(stream_eol).is_some(),
            error::SyntaxSnafu {
                pos: self.position(),
                expected: "CRLF or LF after 'stream'",
            }
        );

        let len = self.stream_length(&dictionary, start)?;
        let pos = self.position();

        ensure!(
            len <= self.remaining_len()?,
            error::LengthMismatchSnafu {
                pos,
                declared: len,
                reason: "exceeds the bytes remaining in the input",
            }
        );

        let data = match Filter::from_dictionary(&dictionary) {
            Filter::FlateDecode => crate::source::inflate(&mut self.cursor, len)?,
            filter => {
                if let Filter::Unsupported(name) = &filter {
                    debug!(pos, filter = %name, "keeping raw data of unsupported filter");
                }
                // `len` fits: it is at most the remaining length of an in-memory slice
                let raw = &self.remaining()[..len as usize];
                self.advance(raw.len());
                raw.to_vec()
            }
        };

        self.skip_whitespace();
        ensure!(
            self.keyword("endstream"),
            error::LengthMismatchSnafu {
                pos: self.position(),
                declared: len,
                reason: "'endstream' does not follow the stream data",
            }
        );

        Ok(Stream::new(dictionary, data))
    }

    fn stream_length(&self, dictionary: &Dictionary, start: u64) -> Result<u64> {
        match dictionary.get("Length") {
            Some(Object::Integer(len)) if *len >= 0 => Ok(*len as u64),
            Some(Object::Reference(_)) => error::UnsupportedSnafu {
                pos: start,
                feature: "indirect /Length of a stream",
            }
            .fail(),
            _ => error::SyntaxSnafu {
                pos: start,
                expected: "non-negative integer /Length",
            }
            .fail(),
        }
    }
}
