use std::num::ParseIntError;

use thiserror::Error;

use crate::Item;

/// Errors that can occur when processing cpuset strings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An item contained more than one `-` and is therefore neither a single integer nor a range.
    #[error("malformed interval: '{item}' must be either an integer or a 'start-end' range")]
    MalformedInterval {
        /// The comma-separated item that could not be interpreted.
        item: String,
    },

    /// A token that should have been an integer could not be parsed as one.
    ///
    /// Empty tokens produced by leading, trailing or doubled separators also end up here.
    #[error("invalid cpuset syntax: '{token}' in item '{item}' is not a base-10 integer")]
    InvalidInteger {
        /// The token that failed to parse. May be empty.
        token: String,

        /// The comma-separated item the token was taken from.
        item: String,

        /// The underlying integer parsing error.
        #[source]
        source: ParseIntError,
    },

    /// A range had a start greater than its end, e.g. `5-2`.
    #[error("reversed range: '{item}' starts at {start} which is after its end {end}")]
    ReversedRange {
        /// The comma-separated item that contained the range.
        item: String,

        /// The parsed start of the range.
        start: Item,

        /// The parsed (inclusive) end of the range.
        end: Item,
    },

    /// A range covered more values than can be held in memory, e.g. `0-9223372036854775807`.
    #[error("range too large: '{item}' from {start} to {end} covers too many values to allocate")]
    RangeTooLarge {
        /// The comma-separated item that contained the range.
        item: String,

        /// The parsed start of the range.
        start: Item,

        /// The parsed (inclusive) end of the range.
        end: Item,
    },
}

/// A specialized `Result` type for cpuset operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn malformed_interval_names_item() {
        let error = Error::MalformedInterval {
            item: "1-2-3".to_string(),
        };

        assert!(error.to_string().contains("'1-2-3'"));
        assert!(error.source().is_none());
    }

    #[test]
    fn invalid_integer_names_token_and_keeps_source() {
        let source = "x".parse::<Item>().unwrap_err();
        let error = Error::InvalidInteger {
            token: "x".to_string(),
            item: "x-4".to_string(),
            source,
        };

        let message = error.to_string();
        assert!(message.contains("'x'"));
        assert!(message.contains("'x-4'"));
        assert!(error.source().is_some());
    }

    #[test]
    fn reversed_range_names_bounds() {
        let error = Error::ReversedRange {
            item: "5-2".to_string(),
            start: 5,
            end: 2,
        };

        let message = error.to_string();
        assert!(message.contains("'5-2'"));
        assert!(message.contains('5'));
        assert!(message.contains('2'));
    }

    #[test]
    fn range_too_large_names_item() {
        let error = Error::RangeTooLarge {
            item: "0-9223372036854775807".to_string(),
            start: 0,
            end: Item::MAX,
        };

        assert!(error.to_string().contains("'0-9223372036854775807'"));
        assert!(error.source().is_none());
    }
}
