//! Error types.
//!
//! The optimizer loop itself cannot fail once its preconditions hold, so
//! every [`McmcError`] is raised before the first iteration runs.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors rejected before the optimizer loop starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McmcError {
    /// The city set has no cities.
    #[error("city set is empty")]
    EmptyCitySet,

    /// The iteration budget is zero.
    #[error("max_iterations must be positive")]
    ZeroIterations,

    /// A sweep was requested with zero runs.
    #[error("sweep requires at least one run")]
    ZeroRuns,

    /// The temperature (or annealing constant) is negative.
    #[error("control value must be non-negative, got {value}")]
    NegativeControl {
        /// The rejected control value.
        value: f64,
    },

    /// The temperature (or annealing constant) is NaN or infinite.
    #[error("control value must be finite, got {value}")]
    NonFiniteControl {
        /// The rejected control value.
        value: f64,
    },

    /// Two cities share the same name.
    #[error("duplicate city name '{name}'")]
    DuplicateCity {
        /// The repeated name.
        name: String,
    },

    /// A city has a NaN or infinite coordinate.
    #[error("city '{name}' has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// The offending city.
        name: String,
    },
}

/// Errors raised while loading a city file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from the underlying reader failed.
    #[error("failed to read city data: {0}")]
    Read(#[source] std::io::Error),

    /// The input has no header row.
    #[error("city file has no header row")]
    MissingHeader,

    /// A data row does not have the `name,latitude,longitude` shape.
    #[error("line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// What is wrong with the row.
        reason: String,
    },

    /// A coordinate field is not a floating point number.
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidCoordinate {
        /// 1-based line number.
        line: usize,
        /// `latitude` or `longitude`.
        field: &'static str,
        /// The raw field text.
        value: String,
    },

    /// The parsed rows do not form a valid city set.
    #[error(transparent)]
    CitySet(#[from] McmcError),
}

/// Errors raised by route exporters.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing or copying an artifact failed.
    #[error("export I/O error at {path}: {source}")]
    Io {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a console report failed.
    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),

    /// The report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No run in the sweep produced an artifact to promote.
    #[error("sweep produced no exported runs")]
    EmptySweep,
}

/// Errors raised by a parameter sweep.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The sweep or optimizer configuration is invalid.
    #[error(transparent)]
    Config(#[from] McmcError),

    /// The exporter failed on a run.
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(McmcError::EmptyCitySet.to_string(), "city set is empty");
        assert_eq!(
            McmcError::NegativeControl { value: -1.5 }.to_string(),
            "control value must be non-negative, got -1.5"
        );
        let err = LoadError::InvalidCoordinate {
            line: 3,
            field: "latitude",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 3: invalid latitude 'abc'");
    }

    #[test]
    fn test_load_error_wraps_config_error() {
        let err: LoadError = McmcError::DuplicateCity { name: "Fresno".into() }.into();
        assert_eq!(err.to_string(), "duplicate city name 'Fresno'");
    }
}
