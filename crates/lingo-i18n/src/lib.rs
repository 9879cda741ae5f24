//! # Lingo I18n
//!
//! Runtime localization engine: per-locale message catalogs with
//! case-insensitive keys, request-driven locale detection, and two
//! interpolation dialects for rendering stored templates.
//!
//! - [`ResourceStore`] keeps one [`MessageTable`] per locale. Keys are
//!   lower-cased on every write and read.
//! - [`Translator`] owns the store together with the active locale and the
//!   detection settings, and is the type applications talk to.
//! - [`Vars`] selects the interpolation dialect: `printf`-style positional
//!   arguments or `{:name}` placeholders.
//!
//! Missing data never fails a lookup: an unknown key renders as the key
//! itself and unreadable resource files are skipped.
//!
//! # Example
//!
//! ```rust
//! use lingo_i18n::{vars, RequestSignals, Translator};
//!
//! let mut translator = Translator::new();
//! translator.set("greet", "Hello, %s!", Some("en-us"));
//! translator.set("greet2", "Hello, {:name}!", Some("en-us"));
//!
//! let request = RequestSignals::new().with_param("lang", "en-US");
//! assert_eq!(translator.detect(&request), "en-us");
//!
//! assert_eq!(translator.get("greet", &vars!["World"], None), "Hello, World!");
//! assert_eq!(translator.get("greet2", &vars! {"name" => "World"}, None), "Hello, World!");
//! assert_eq!(translator.text("missing.key"), "missing.key");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod detect;
pub mod error;
pub mod format;
pub mod request;
pub mod resource;
pub mod shared;
pub mod store;
pub mod translator;
pub mod vars;

pub use detect::{accept_language_token, DetectionConfig, Signal};
pub use error::FormatError;
pub use format::{sprintf, FormatArg};
pub use request::{LocaleRequest, RequestSignals, ACCEPT_LANGUAGE};
pub use resource::{FileResourceLoader, ResourceFormat, ResourceLoader};
pub use shared::SharedTranslator;
pub use store::{normalize_key, MessageTable, ResourceStore};
pub use translator::{Translator, DEFAULT_LOCALE};
pub use vars::{interpolate_named, Vars};
