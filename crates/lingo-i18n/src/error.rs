//! Error types for message formatting

use thiserror::Error;

/// Errors raised by [`sprintf`](crate::format::sprintf).
///
/// Lookups through [`Translator::get`](crate::Translator::get) never surface
/// these; they fall back to the unformatted template instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A conversion referenced an argument that was not supplied
    #[error("{required} arguments are required, {given} given")]
    TooFewArguments {
        /// Number of arguments the format string needs
        required: usize,
        /// Number of arguments supplied
        given: usize,
    },

    /// The conversion character is not one of the supported specifiers
    #[error("Unknown format specifier \"{0}\"")]
    UnknownSpecifier(char),

    /// The format string ends in the middle of a conversion
    #[error("Missing format specifier at end of string")]
    MissingSpecifier,

    /// `%0$s` style argument numbers start at one
    #[error("Argument number specifier must be greater than zero")]
    ZeroArgnum,

    /// Field width above [`MAX_WIDTH`](crate::format::MAX_WIDTH)
    #[error("Width must be at most {max}, {requested} requested")]
    WidthTooLarge {
        /// Width found in the conversion (saturated)
        requested: usize,
        /// Largest accepted width
        max: usize,
    },

    /// Precision above [`MAX_PRECISION`](crate::format::MAX_PRECISION)
    #[error("Precision must be at most {max}, {requested} requested")]
    PrecisionTooLarge {
        /// Precision found in the conversion (saturated)
        requested: usize,
        /// Largest accepted precision
        max: usize,
    },
}
