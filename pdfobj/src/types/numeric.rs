/// Number of significant digits written for real values.
const SIGNIFICANT_DIGITS: usize = 15;

/// Represents a numeric token read from PDF syntax.
///
/// PDF has two kinds of numbers:
/// - Integer values (signed 64-bit integers here)
/// - Real values (IEEE double-precision floating-point numbers)
///
/// A token is real as soon as it contains a decimal point or an exponent.
///
/// # Examples
/// 42              // Integer
/// -17             // Negative integer
/// 3.14            // Real number
/// .5              // Real number without integer part
/// 123.456e-7      // Real number with exponent
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Numeric {
    /// An integer value stored as a 64-bit signed integer.
    Integer(i64),
    /// A real (floating-point) value stored as IEEE double-precision (64-bit).
    Real(f64),
}

/// Formats a real value with at most 15 significant digits.
///
/// The layout follows C's `%.15g`: fixed notation for decimal exponents in
/// `-4..15`, scientific notation otherwise, trailing zeros removed. The result
/// always carries a decimal point or an exponent so it reads back as a real.
pub fn format_real(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };

        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let precision = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
    let fixed = format!("{value:.precision$}");
    let trimmed = trim_fraction(&fixed);

    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.0")
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: f64,
            expected: &'static str,
        }

        let test_cases = [
            TestCase {
                name: "simple fraction",
                input: 3.14,
                expected: "3.14",
            },
            TestCase {
                name: "negative fraction",
                input: -3.14,
                expected: "-3.14",
            },
            TestCase {
                name: "fraction below one",
                input: 0.5,
                expected: "0.5",
            },
            TestCase {
                name: "integral value keeps a decimal point",
                input: 2.0,
                expected: "2.0",
            },
            TestCase {
                name: "zero",
                input: 0.0,
                expected: "0.0",
            },
            TestCase {
                name: "rounded to fifteen digits",
                input: 0.1 + 0.2,
                expected: "0.3",
            },
            TestCase {
                name: "fifteen digit integral value",
                input: 123456789012345.0,
                expected: "123456789012345.0",
            },
            TestCase {
                name: "large value in scientific notation",
                input: 1e20,
                expected: "1e+20",
            },
            TestCase {
                name: "small value in scientific notation",
                input: 1.5e-7,
                expected: "1.5e-07",
            },
            TestCase {
                name: "smallest fixed exponent",
                input: 0.0001,
                expected: "0.0001",
            },
        ];

        for case in &test_cases {
            let result = format_real(case.input);
            assert_eq!(
                result, case.expected,
                "Test '{}' failed: expected: {}, got: {}",
                case.name, case.expected, result
            );
        }
    }
}
