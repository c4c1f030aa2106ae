//! Error handling for KukaKit
//!
//! Provides error types for every stage of the pipeline:
//! - Trajectory errors (generator parameters, empty paths)
//! - Table errors (spline table import)
//! - Emit errors (writing rendered KRL files)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Trajectory error type
///
/// Raised when a path cannot be synthesized from the given parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// Circle radius is zero, negative or not finite
    #[error("Invalid circle radius: {radius} (must be > 0)")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// A center or orientation component is NaN or infinite
    #[error("Non-finite {name}: ({p1}, {p2}, {p3})")]
    NonFinite {
        /// The parameter holding the triple.
        name: String,
        p1: f64,
        p2: f64,
        p3: f64,
    },

    /// Too many points were requested
    #[error("Too many points requested: {count} x {per_item}")]
    TooManyPoints {
        /// Number of repetitions requested.
        count: usize,
        /// Points per repetition.
        per_item: usize,
    },

    /// A random sampling range is empty
    #[error("Invalid range for '{name}': {min}..{max}")]
    InvalidRange {
        /// The parameter the range belongs to.
        name: String,
        /// Inclusive lower bound.
        min: i64,
        /// Exclusive upper bound.
        max: i64,
    },

    /// No points were produced
    #[error("Trajectory contains no points")]
    EmptyTrajectory,
}

/// Spline table error type
///
/// Represents errors raised while importing a comma separated point table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// A record has fewer fields than the table layout requires
    #[error("Line {line}: expected at least {expected} fields, found {found}")]
    ShortRecord {
        /// The 1-based line number of the record.
        line: usize,
        /// Number of fields present.
        found: usize,
        /// Number of fields required.
        expected: usize,
    },

    /// A field is not a valid number
    #[error("Line {line}: invalid {column} value '{value}'")]
    InvalidField {
        /// The 1-based line number of the record.
        line: usize,
        /// The column name.
        column: String,
        /// The offending text.
        value: String,
    },

    /// The table source could not be read
    #[error("Failed to read table {path}: {reason}")]
    Read {
        /// The table path.
        path: String,
        /// The reason the read failed.
        reason: String,
    },
}

/// Emit error type
///
/// Represents failures while writing rendered chunks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitError {
    /// The output directory could not be created
    #[error("Failed to create output directory {path}: {reason}")]
    CreateDir {
        /// The directory path.
        path: String,
        /// The reason the directory could not be created.
        reason: String,
    },

    /// A rendered chunk could not be written
    #[error("Failed to write chunk {chunk} to {path}: {reason}")]
    Write {
        /// The 0-based chunk ordinal.
        chunk: usize,
        /// The destination file.
        path: String,
        /// The reason the write failed.
        reason: String,
    },
}

/// Main error type for KukaKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Trajectory error
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    /// Table import error
    #[error(transparent)]
    Table(#[from] TableError),

    /// Emit error
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        let err = TableError::ShortRecord {
            line: 4,
            found: 7,
            expected: 8,
        };
        assert_eq!(
            err.to_string(),
            "Line 4: expected at least 8 fields, found 7"
        );

        let err = TableError::InvalidField {
            line: 2,
            column: "z".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Line 2: invalid z value 'abc'");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = TrajectoryError::EmptyTrajectory.into();
        assert!(matches!(err, Error::Trajectory(_)));
        assert_eq!(err.to_string(), "Trajectory contains no points");

        let err: Error = EmitError::Write {
            chunk: 3,
            path: "out/fileSpline3.src".to_string(),
            reason: "disk full".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Emit(EmitError::Write { chunk: 3, .. })));
        assert!(err.to_string().contains("chunk 3"));
    }
}
