use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)), context(suffix(false)))]
pub enum Error {
    #[snafu(display("Error reading PDF objects"))]
    Pdf { source: pdfobj::Error },

    #[snafu(display("Offset {offset} is past the end of the input ({len} bytes)"))]
    Offset { offset: u64, len: usize },

    #[snafu(display("Failed to create output file: {}", path.display()))]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to write output"))]
    Output { source: std::io::Error },
}
