//! hexlz - count leading zero bits in a hexadecimal string
//!
//! hexlz scans a hex-encoded string from its most significant digit and
//! reports how many zero bits precede the first set bit.
//!
//! It can be used in two ways:
//! - **CLI**: Install via `cargo install hexlz` and run from command line
//! - **Library**: Add as a dependency and call [`count_leading_zeros`]
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! hexlz 0800
//! # Leading zeroes in hex string 0800: 5
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust
//! use hexlz::count_leading_zeros;
//!
//! assert_eq!(count_leading_zeros("0001"), 15);
//! assert_eq!(count_leading_zeros("8000"), 0);
//! ```
//!
//! # Permissive parsing
//!
//! Characters that are not valid hex digits parse as zero nibbles and
//! contribute four bits each to the count. This matches the historical
//! behavior of the tool and is part of the public contract; see
//! [`count_leading_zeros`] for details.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Count computed and printed |
//! | 1 | Wrong number of command-line arguments |

pub mod cli;
pub mod counter;
pub mod error;
pub mod exit_codes;

pub use counter::count_leading_zeros;
pub use error::HexlzError;
pub use exit_codes::ExitCode;
