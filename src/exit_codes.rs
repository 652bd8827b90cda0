//! Exit code constants for hexlz.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Count computed and printed |
//! | 1 | `USAGE` | Wrong number of command-line arguments |

/// Exit codes matching the documented exit code table.
///
/// `ExitCode` provides type-safe exit code handling. Use the named
/// constants, or [`as_i32()`](Self::as_i32) to get the numeric value for
/// `std::process::exit()`.
///
/// # Example
///
/// ```rust
/// use hexlz::ExitCode;
///
/// let code = ExitCode::SUCCESS;
/// assert_eq!(code.as_i32(), 0);
///
/// assert_eq!(ExitCode::USAGE, ExitCode::from_i32(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - count computed and printed
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Usage error - wrong number of command-line arguments
    pub const USAGE: ExitCode = ExitCode(1);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an ExitCode from a raw i32 value.
    ///
    /// Prefer using the named constants when possible.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_constants() {
        assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
        assert_eq!(ExitCode::USAGE.as_i32(), 1);
    }

    #[test]
    fn round_trips_through_i32() {
        assert_eq!(ExitCode::from_i32(1), ExitCode::USAGE);
        assert_eq!(i32::from(ExitCode::SUCCESS), 0);
        assert_eq!(ExitCode::from(1), ExitCode::USAGE);
    }
}
