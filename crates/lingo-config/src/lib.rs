//! # Lingo Config
//!
//! Language configuration for Lingo: the [`LangConfig`] schema, its
//! defaults, loading from TOML, YAML or JSON with environment overrides,
//! and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
