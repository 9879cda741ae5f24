//! # Lingo Common
//!
//! Shared types, utilities, and common functionality for Lingo.
//!
//! This crate provides the error type, logging bootstrap and small string
//! helpers used across all other crates in the Lingo workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use utils::*;
