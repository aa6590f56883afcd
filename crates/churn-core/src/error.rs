//! Error types for count parsing and run configuration.

use std::error::Error;
use std::fmt;

/// Reasons a count argument was not accepted.
///
/// Each variant that carries `input` keeps the original argument text
/// (untrimmed) so it can be echoed back in logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountError {
    /// The argument was empty or only whitespace.
    Empty,
    /// The argument is not an integer.
    NotANumber {
        /// The rejected argument.
        input: String,
    },
    /// The argument is an integer below zero.
    Negative {
        /// The rejected argument.
        input: String,
    },
    /// The argument is an integer too large for a `u64`.
    TooLarge {
        /// The rejected argument.
        input: String,
    },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "count is empty"),
            Self::NotANumber { input } => write!(f, "count '{input}' is not an integer"),
            Self::Negative { input } => write!(f, "count '{input}' is negative"),
            Self::TooLarge { input } => write!(f, "count '{input}' exceeds u64::MAX"),
        }
    }
}

impl Error for CountError {}

/// Errors from [`RunConfig::validate`](crate::RunConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The count is above [`MAX_COUNT`](crate::config::MAX_COUNT), so no
    /// container could ever hold that many elements.
    CountOverflow {
        /// The configured count.
        value: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOverflow { value } => {
                write!(
                    f,
                    "count {value} exceeds the maximum of {} elements",
                    crate::config::MAX_COUNT
                )
            }
        }
    }
}

impl Error for ConfigError {}
