use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while reading, decoding or parsing PDF object syntax.
///
/// Positions are byte offsets into the parsed input.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to read file: {}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Error during stream IO operations"))]
    Io { source: std::io::Error },

    #[snafu(display("Syntax error at byte {pos}: expected {expected}"))]
    Syntax { pos: u64, expected: &'static str },

    #[snafu(display("Stream data at byte {pos} with /Length {declared}: {reason}"))]
    LengthMismatch {
        pos: u64,
        declared: u64,
        reason: &'static str,
    },

    #[snafu(display("Failed to decompress {len} bytes at byte {pos}"))]
    Decompression {
        pos: u64,
        len: u64,
        source: std::io::Error,
    },

    #[snafu(display("Unsupported feature at byte {pos}: {feature}"))]
    Unsupported { pos: u64, feature: &'static str },

    #[snafu(display("Nesting depth exceeds the limit of {limit} at byte {pos}"))]
    DepthExceeded { pos: u64, limit: usize },

    #[snafu(display("Unexpected object type. Expected = {expected}, got = {got}"))]
    UnexpectedObjectType {
        expected: &'static str,
        got: &'static str,
    },
}
