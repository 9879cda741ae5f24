//! # Lingo CLI
//!
//! Command line front end for the Lingo translator: render a key, resolve
//! a locale from request signals, or dump a locale's messages as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;

pub use cli::*;
pub use commands::*;
