//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every failure is a configuration or input problem detected before (or
/// instead of) running a simulation. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing a trace file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame capacity must be at least one frame.
    #[error("Invalid frame capacity {0}: must be at least 1")]
    InvalidCapacity(usize),

    /// Aging counter width has no usable most-significant bit.
    #[error("Invalid aging width {bits}: must be between 1 and {max} bits")]
    InvalidAgingBits { bits: u32, max: u32 },

    /// Workload parameters cannot produce a reference sequence.
    #[error("Invalid workload: {0}")]
    InvalidWorkload(String),

    /// A trace file entry is not a page number.
    #[error("Malformed trace entry {entry:?} at position {position}")]
    MalformedTrace { position: usize, entry: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(format!("{}", err), "Invalid frame capacity 0: must be at least 1");

        let err = Error::InvalidAgingBits { bits: 65, max: 64 };
        assert_eq!(
            format!("{}", err),
            "Invalid aging width 65: must be between 1 and 64 bits"
        );

        let err = Error::MalformedTrace {
            position: 3,
            entry: "x".to_string(),
        };
        assert_eq!(format!("{}", err), "Malformed trace entry \"x\" at position 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
        assert!(std::error::Error::source(&Error::InvalidCapacity(0)).is_none());
    }
}
