use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use pdfobj::{Parser, ParserConfig};
use snafu::{ResultExt, ensure};
use tracing::{debug, info};

use crate::error::{CreateOutput, Offset, Output, Pdf, Result};

mod cli;
mod error;

#[snafu::report]
fn main() -> Result<()> {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let input = pdfobj::source::read_file(&cli.filename).context(Pdf)?;
    let config = ParserConfig {
        max_depth: cli.max_depth,
    };

    let count = match &cli.output {
        Some(path) => {
            let file = File::create(path).context(CreateOutput { path })?;
            dump(&input, cli.offset, config, &mut BufWriter::new(file))?
        }
        None => dump(&input, cli.offset, config, &mut io::stdout().lock())?,
    };

    info!(count, "Finished writing objects");
    Ok(())
}

/// Parses every object of `input` from `offset` on and writes each one,
/// followed by a newline, to `out`.
///
/// Returns the number of objects written. Objects parsed before a failure are
/// already written when the error is returned.
fn dump<W: Write>(input: &[u8], offset: u64, config: ParserConfig, out: &mut W) -> Result<usize> {
    ensure!(
        offset <= input.len() as u64,
        Offset {
            offset,
            len: input.len(),
        }
    );

    let mut parser = Parser::with_config(input, config);
    parser.set_position(offset);

    let mut count = 0;
    loop {
        parser.skip_whitespace();
        if parser.is_at_end() {
            break;
        }

        let pos = parser.position();
        let parsed = parser.parse().context(Pdf)?;
        debug!(pos, end = parser.position(), "Parsed object");

        parsed.write(out).context(Output)?;
        out.write_all(b"\n").context(Output)?;
        count += 1;
    }

    out.flush().context(Output)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_dump() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            offset: u64,
            expected_count: usize,
            expected_output: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "empty input",
                input: b"",
                offset: 0,
                expected_count: 0,
                expected_output: b"",
            },
            TestCase {
                name: "whitespace only",
                input: b" \r\n\t",
                offset: 0,
                expected_count: 0,
                expected_output: b"",
            },
            TestCase {
                name: "direct objects",
                input: b"1 2.5 /Name [true null] 7 0 R",
                offset: 0,
                expected_count: 5,
                expected_output: b"1\n2.5\n/Name\n[ true null ]\n7 0 R\n",
            },
            TestCase {
                name: "indirect objects",
                input: b"1 0 obj\n<</Type/Catalog/Pages 2 0 R>>\nendobj\n2 0 obj\n(text)\nendobj\n",
                offset: 0,
                expected_count: 2,
                expected_output: b"1 0 obj\n<< /Pages 2 0 R /Type /Catalog >>\nendobj\n\n\
                                   2 0 obj\n(text)\nendobj\n\n",
            },
            TestCase {
                name: "starting at an offset",
                input: b"%PDF-1.7\n3 0 obj 42 endobj",
                offset: 9,
                expected_count: 1,
                expected_output: b"3 0 obj\n42\nendobj\n\n",
            },
        ];

        for case in &test_cases {
            let mut output = Vec::new();
            let count = dump(case.input, case.offset, ParserConfig::default(), &mut output)
                .unwrap_or_else(|err| panic!("Test '{}' failed: {err}", case.name));

            assert_eq!(count, case.expected_count, "Test '{}'", case.name);
            assert_eq!(
                output,
                case.expected_output,
                "Test '{}' failed: expected output: {:?}, got: {:?}",
                case.name,
                String::from_utf8_lossy(case.expected_output),
                String::from_utf8_lossy(&output)
            );
        }
    }

    #[test]
    fn test_dump_stops_at_first_error() {
        let mut output = Vec::new();

        let result = dump(b"1 2 ) 3", 0, ParserConfig::default(), &mut output);
        assert!(matches!(
            result,
            Err(Error::Pdf {
                source: pdfobj::Error::Syntax { pos: 4, .. }
            })
        ));
        assert_eq!(output, b"1\n2\n");
    }

    #[test]
    fn test_dump_offset_past_end() {
        let result = dump(b"1", 2, ParserConfig::default(), &mut Vec::new());

        assert!(matches!(result, Err(Error::Offset { offset: 2, len: 1 })));
    }

    #[test]
    fn test_dump_uses_depth_limit() {
        let config = ParserConfig { max_depth: 1 };

        let result = dump(b"[[1]]", 0, config, &mut Vec::new());
        assert!(matches!(
            result,
            Err(Error::Pdf {
                source: pdfobj::Error::DepthExceeded { limit: 1, .. }
            })
        ));
    }
}
