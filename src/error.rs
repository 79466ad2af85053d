//! Unified error types for threadstats.
//!
//! A single [`ThreadStatsError`] enum covers every failure the library can
//! produce, following the pattern of popular crates like `reqwest` and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - Parse-level errors abort the run; there is no partial output

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for threadstats operations.
pub type Result<T> = std::result::Result<T, ThreadStatsError>;

/// The error type for all threadstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThreadStatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The tag-event reader failed on the archive markup.
    #[error("Markup error: {source}")]
    Markup {
        /// The underlying reader error
        #[source]
        source: quick_xml::Error,
    },

    /// A message's meta text does not match the expected timestamp pattern.
    ///
    /// Archive timestamps look like `"Monday, January 1, 2024 at 10"`.
    #[error("Malformed timestamp: '{input}'")]
    MalformedTimestamp {
        /// The meta text that failed to parse
        input: String,
    },

    /// A timestamp's weekday token is not one of the seven English day names.
    #[error("Unknown weekday name: '{input}'")]
    UnknownWeekday {
        /// The token that was not a weekday
        input: String,
    },

    /// A timestamp's hour field is outside 0..=23.
    #[error("Hour out of range: {hour} (expected 0-23)")]
    HourOutOfRange {
        /// The parsed hour value
        hour: u32,
    },
}

impl From<quick_xml::Error> for ThreadStatsError {
    fn from(err: quick_xml::Error) -> Self {
        ThreadStatsError::Markup { source: err }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ThreadStatsError {
    /// Creates a malformed-timestamp error.
    pub fn malformed_timestamp(input: impl Into<String>) -> Self {
        ThreadStatsError::MalformedTimestamp {
            input: input.into(),
        }
    }

    /// Creates an unknown-weekday error.
    pub fn unknown_weekday(input: impl Into<String>) -> Self {
        ThreadStatsError::UnknownWeekday {
            input: input.into(),
        }
    }

    /// Creates an hour-out-of-range error.
    pub fn hour_out_of_range(hour: u32) -> Self {
        ThreadStatsError::HourOutOfRange { hour }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ThreadStatsError::Io(_))
    }

    /// Returns `true` if this is a markup reader error.
    pub fn is_markup(&self) -> bool {
        matches!(self, ThreadStatsError::Markup { .. })
    }

    /// Returns `true` if this is a timestamp-related error
    /// (malformed pattern, unknown weekday, or hour out of range).
    pub fn is_timestamp(&self) -> bool {
        matches!(
            self,
            ThreadStatsError::MalformedTimestamp { .. }
                | ThreadStatsError::UnknownWeekday { .. }
                | ThreadStatsError::HourOutOfRange { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ThreadStatsError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_malformed_timestamp_display() {
        let err = ThreadStatsError::malformed_timestamp("not a timestamp");
        let display = err.to_string();
        assert!(display.contains("Malformed timestamp"));
        assert!(display.contains("not a timestamp"));
    }

    #[test]
    fn test_unknown_weekday_display() {
        let err = ThreadStatsError::unknown_weekday("Smonday");
        let display = err.to_string();
        assert!(display.contains("Unknown weekday"));
        assert!(display.contains("Smonday"));
    }

    #[test]
    fn test_hour_out_of_range_display() {
        let err = ThreadStatsError::hour_out_of_range(25);
        let display = err.to_string();
        assert!(display.contains("25"));
        assert!(display.contains("0-23"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ThreadStatsError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ThreadStatsError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_timestamp());
        assert!(!io_err.is_markup());

        let ts_err = ThreadStatsError::malformed_timestamp("bad");
        assert!(ts_err.is_timestamp());
        assert!(!ts_err.is_io());

        assert!(ThreadStatsError::unknown_weekday("bad").is_timestamp());
        assert!(ThreadStatsError::hour_out_of_range(99).is_timestamp());
    }

    #[test]
    fn test_error_debug() {
        let err = ThreadStatsError::unknown_weekday("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnknownWeekday"));
    }
}
