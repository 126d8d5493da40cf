use std::fmt;

use log::{debug, warn};

/// Best-effort integer parse of a single token.
///
/// Reads an optional sign followed by the longest run of ASCII digits and
/// ignores whatever comes after. A token with no leading digits is 0, and
/// values past the `i32` range saturate.
pub fn parse_token(token: &str) -> i32 {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut magnitude: i64 = 0;
    for &digit in digits.iter().take_while(|byte| byte.is_ascii_digit()) {
        magnitude = magnitude * 10 + i64::from(digit - b'0');
        if magnitude > i64::from(i32::MAX) + 1 {
            break;
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// An owned, ordered list of integers handed to the statistics functions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sample {
    values: Vec<i32>,
}

impl Sample {
    /// Tokenize a console line into a [Sample], keeping at most `max_inputs`
    /// values. Extra tokens are dropped.
    pub fn parse(line: &str, max_inputs: usize) -> Self {
        let mut tokens = line.split_ascii_whitespace();
        let values = tokens
            .by_ref()
            .take(max_inputs)
            .map(parse_token)
            .collect::<Vec<_>>();

        let discarded = tokens.count();
        if discarded > 0 {
            warn!(
                "Input holds more than {} integers, discarding {} extra tokens.",
                max_inputs, discarded
            );
        }
        debug!("Parsed {} integers from input line.", values.len());

        Sample { values }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<i32>> for Sample {
    fn from(values: Vec<i32>) -> Self {
        Sample { values }
    }
}

/// Writes `[a, b, c]`, the same list layout used for modes.
pub(crate) fn write_list(f: &mut fmt::Formatter<'_>, values: &[i32]) -> fmt::Result {
    write!(f, "[")?;
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "]")
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.values)
    }
}
