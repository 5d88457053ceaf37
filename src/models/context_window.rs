use crate::utils::EXPAND_TO_BOUND;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Number of sentences kept before and after every matched sentence.
///
/// `-1` on either side expands to the paragraph boundary on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    before: i64,
    after: i64,
}

impl ContextWindow {
    /// Only the matched sentences themselves.
    pub const NONE: ContextWindow = ContextWindow {
        before: 0,
        after: 0,
    };

    /// Whole paragraph around every matched sentence.
    pub const WHOLE_PARAGRAPH: ContextWindow = ContextWindow {
        before: EXPAND_TO_BOUND,
        after: EXPAND_TO_BOUND,
    };

    pub fn new(before: i64, after: i64) -> Result<Self, Error> {
        for (side, value) in [("before", before), ("after", after)] {
            if value < EXPAND_TO_BOUND {
                return Err(Error::InvalidArgument(format!(
                    "context window: '{}' must be -1 or a non-negative integer, got {}",
                    side, value
                )));
            }
        }

        Ok(Self { before, after })
    }

    pub fn symmetric(size: i64) -> Result<Self, Error> {
        Self::new(size, size)
    }

    /// Accepts either a single (symmetric) size or a `[before, after]` pair.
    pub fn from_slice(values: &[i64]) -> Result<Self, Error> {
        match values {
            [size] => Self::symmetric(*size),
            [before, after] => Self::new(*before, *after),
            _ => Err(Error::InvalidArgument(format!(
                "context window: expected one or two values, got {}",
                values.len()
            ))),
        }
    }

    pub fn before(&self) -> i64 {
        self.before
    }

    pub fn after(&self) -> i64 {
        self.after
    }

    /// `true` if at least one side pulls in neighboring sentences by a positive count.
    ///
    /// Such windows always join their adjacent sentences.
    pub fn is_expanding(&self) -> bool {
        self.before > 0 || self.after > 0
    }
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self::NONE
    }
}

impl FromStr for ContextWindow {
    type Err = Error;

    /// Parses `"N"` or `"BEFORE,AFTER"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|value| {
                value.trim().parse::<i64>().map_err(|_| {
                    Error::InvalidArgument(format!(
                        "context window: '{}' is not an integer",
                        value.trim()
                    ))
                })
            })
            .collect::<Result<Vec<i64>, Error>>()?;

        Self::from_slice(&values)
    }
}

impl fmt::Display for ContextWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.before, self.after)
    }
}
