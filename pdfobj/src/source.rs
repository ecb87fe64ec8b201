use std::{
    fs,
    io::{Read, Seek, SeekFrom},
    path::Path,
};

use flate2::read::ZlibDecoder;
use snafu::{ResultExt, ensure};
use tracing::debug;

use crate::error::{self, Result};

/// Returns the number of bytes between the current position of `stream` and its end.
///
/// The position of the stream is restored before returning.
pub fn remaining_len<S: Seek>(stream: &mut S) -> Result<u64> {
    let current = stream.stream_position().context(error::IoSnafu)?;
    let end = stream.seek(SeekFrom::End(0)).context(error::IoSnafu)?;
    stream
        .seek(SeekFrom::Start(current))
        .context(error::IoSnafu)?;

    Ok(end.saturating_sub(current))
}

/// Reads the whole file at `path` into memory.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();

    fs::read(path).with_context(|_| error::ReadFileSnafu {
        path: path.to_path_buf(),
    })
}

/// Decompresses exactly `len` bytes of zlib/deflate data starting at the current
/// position of `stream`.
///
/// On success the stream is left just past the `len` compressed bytes, whatever
/// amount of them the decoder actually needed. On failure it is left where it
/// was when called.
///
/// # Errors
/// - `LengthMismatch` if fewer than `len` bytes remain in the stream
/// - `Decompression` if the compressed data is malformed
pub fn inflate<R: Read + Seek>(stream: &mut R, len: u64) -> Result<Vec<u8>> {
    let pos = stream.stream_position().context(error::IoSnafu)?;
    let available = remaining_len(stream)?;

    ensure!(
        len <= available,
        error::LengthMismatchSnafu {
            pos,
            declared: len,
            reason: "exceeds the bytes remaining in the input",
        }
    );

    let mut data = Vec::new();
    let decoded = ZlibDecoder::new(stream.by_ref().take(len))
        .read_to_end(&mut data)
        .context(error::DecompressionSnafu { pos, len });

    let end = if decoded.is_ok() { pos + len } else { pos };
    stream.seek(SeekFrom::Start(end)).context(error::IoSnafu)?;
    decoded?;

    debug!(pos, len, decoded = data.len(), "inflated stream data");

    Ok(data)
}
