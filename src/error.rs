//! Error types for hexlz.
//!
//! The taxonomy is intentionally small: the only failure the CLI can report
//! is a usage error. Invalid hex characters are NOT errors - the counter
//! parses them as zero nibbles (see [`crate::counter`]).

use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Errors the hexlz CLI surface can report.
#[derive(Debug, Error)]
pub enum HexlzError {
    /// Wrong number of command-line arguments.
    ///
    /// The `Display` form is the usage line itself, so callers print the
    /// error verbatim to stderr.
    #[error("Usage: {program} <hex_string>")]
    Usage {
        /// Program name as invoked (argv\[0\]).
        program: String,
    },
}

impl HexlzError {
    /// Map this error to its process exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            HexlzError::Usage { .. } => ExitCode::USAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_renders_usage_line() {
        let err = HexlzError::Usage {
            program: "hexlz".to_string(),
        };
        assert_eq!(err.to_string(), "Usage: hexlz <hex_string>");
    }

    #[test]
    fn usage_error_maps_to_exit_code_one() {
        let err = HexlzError::Usage {
            program: "hexlz".to_string(),
        };
        assert_eq!(err.to_exit_code(), ExitCode::USAGE);
        assert_eq!(err.to_exit_code().as_i32(), 1);
    }
}
