use snafu::ensure;

use crate::{
    error::{self, Result},
    parser::Parser,
    types::PdfString,
};

impl Parser<'_> {
    /// Parses a literal string enclosed in parentheses, keeping balanced inner
    /// parentheses.
    ///
    /// The content between the outer parentheses is taken verbatim.
    ///
    /// # Errors
    /// - `Unsupported` on a backslash, since escape sequences are not decoded
    /// - `Syntax` if the input ends before the closing parenthesis
    pub(super) fn parse_string(&mut self) -> Result<PdfString> {
        let start = self.position();
        let rest = self.remaining();

        ensure!(
            rest.first() == Some(&b'('),
            error::SyntaxSnafu {
                pos: start,
                expected: "'('",
            }
        );

        let mut depth = 0usize;
        for (offset, &c) in rest.iter().enumerate() {
            match c {
                b'\\' => {
                    return error::UnsupportedSnafu {
                        pos: start + offset as u64,
                        feature: "escape sequences in literal strings",
                    }
                    .fail();
                }
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance(offset + 1);
                        return Ok(PdfString::from(&rest[1..offset]));
                    }
                }
                _ => {}
            }
        }

        error::SyntaxSnafu {
            pos: start,
            expected: "closing ')'",
        }
        .fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_literal_string_parser() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static [u8],
            expected: bool,
            expected_result: Option<&'static [u8]>,
            expected_position: Option<u64>,
        }

        let test_cases = [
            TestCase {
                name: "simple string",
                input: b"(Hello World)",
                expected: true,
                expected_result: Some(b"Hello World"),
                expected_position: Some(13),
            },
            TestCase {
                name: "empty string",
                input: b"()",
                expected: true,
                expected_result: Some(b""),
                expected_position: Some(2),
            },
            TestCase {
                name: "balanced parentheses",
                input: b"(a (b (c)) d)rest",
                expected: true,
                expected_result: Some(b"a (b (c)) d"),
                expected_position: Some(13),
            },
            TestCase {
                name: "binary content",
                input: b"(\x00\xff\n\r)",
                expected: true,
                expected_result: Some(b"\x00\xff\n\r"),
                expected_position: Some(6),
            },
            TestCase {
                name: "unbalanced parentheses",
                input: b"(a (b)",
                expected: false,
                expected_result: None,
                expected_position: None,
            },
            TestCase {
                name: "unterminated string",
                input: b"(abc",
                expected: false,
                expected_result: None,
                expected_position: None,
            },
        ];

        for case in &test_cases {
            let mut parser = Parser::new(case.input);
            let result = parser.parse_string();
            assert_eq!(
                result.is_ok(),
                case.expected,
                "Test '{}' failed: expected success: {}, got: {:?}",
                case.name,
                case.expected,
                result
            );

            if let Ok(result) = result {
                assert_eq!(
                    result.as_bytes(),
                    case.expected_result.unwrap(),
                    "Test '{}' failed: expected result: {:?}, got: {:?}",
                    case.name,
                    case.expected_result,
                    result
                );
                assert_eq!(
                    Some(parser.position()),
                    case.expected_position,
                    "Test '{}' failed: expected position: {:?}, got: {}",
                    case.name,
                    case.expected_position,
                    parser.position()
                );
            }
        }
    }

    #[test]
    fn test_escape_sequence_is_unsupported() {
        let mut parser = Parser::new(b"(a\\)b)");

        let result = parser.parse_string();
        assert!(matches!(result, Err(Error::Unsupported { pos: 2, .. })));
        assert_eq!(parser.position(), 0);
    }
}
