//! Parsing of the element-count argument.
//!
//! Parsing is an explicit step that reports why an argument was
//! rejected. Whether a rejection is fatal is the caller's decision,
//! expressed through [`ParseMode`].

use tracing::warn;

use crate::error::CountError;

/// How [`resolve_count`] treats an argument that fails to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Rejected arguments resolve to a count of zero.
    #[default]
    Permissive,
    /// Rejected arguments are returned to the caller as errors.
    Strict,
}

/// Parse a count argument.
///
/// Surrounding whitespace is ignored and a single leading `+` is
/// accepted. `-0` parses as zero; any other negative integer is
/// [`CountError::Negative`].
pub fn parse_count(input: &str) -> Result<u64, CountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CountError::Empty);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CountError::NotANumber {
            input: input.to_owned(),
        });
    }

    if negative {
        if digits.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
        return Err(CountError::Negative {
            input: input.to_owned(),
        });
    }

    // Only overflow is left once every byte is an ASCII digit.
    digits.parse::<u64>().map_err(|_| CountError::TooLarge {
        input: input.to_owned(),
    })
}

/// Resolve an optional count argument under the given mode.
///
/// An absent argument is always `Ok(0)`. In [`ParseMode::Permissive`]
/// a rejected argument is logged and also becomes `Ok(0)`.
pub fn resolve_count(arg: Option<&str>, mode: ParseMode) -> Result<u64, CountError> {
    let Some(arg) = arg else {
        return Ok(0);
    };
    match parse_count(arg) {
        Ok(count) => Ok(count),
        Err(err) => match mode {
            ParseMode::Permissive => {
                warn!(error = %err, "count rejected, defaulting to 0");
                Ok(0)
            }
            ParseMode::Strict => Err(err),
        },
    }
}
