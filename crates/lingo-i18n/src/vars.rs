//! Interpolation variables and the two substitution dialects.

use crate::format::{sprintf, FormatArg};
use tracing::warn;

/// Variables substituted into a template.
///
/// The variant picks the dialect: [`Vars::Positional`] runs the template
/// through [`sprintf`], [`Vars::Named`] replaces `{:name}` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Vars {
    /// Arguments for `%s`, `%d`, ... conversions, consumed in order
    Positional(Vec<FormatArg>),
    /// `name → value` pairs, replaced in insertion order
    Named(Vec<(String, FormatArg)>),
}

impl Default for Vars {
    fn default() -> Self {
        Self::none()
    }
}

impl Vars {
    /// No variables; templates are returned untouched.
    pub const fn none() -> Self {
        Self::Named(Vec::new())
    }

    /// Positional arguments.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FormatArg>,
    {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Named arguments, kept in the given order.
    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FormatArg>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Appends a value, keeping the current dialect.
    ///
    /// The key is ignored for positional variables.
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FormatArg>,
    {
        match &mut self {
            Self::Positional(values) => values.push(value.into()),
            Self::Named(pairs) => pairs.push((key.into(), value.into())),
        }
        self
    }

    /// Whether there is nothing to substitute.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Positional(values) => values.is_empty(),
            Self::Named(pairs) => pairs.is_empty(),
        }
    }

    /// Renders `template` with these variables.
    ///
    /// Never fails: a positional template that cannot be formatted is
    /// returned as is, and named tokens without a value stay literal.
    pub fn render(&self, template: &str) -> String {
        if self.is_empty() {
            return template.to_string();
        }

        match self {
            Self::Positional(values) => sprintf(template, values).unwrap_or_else(|e| {
                warn!(template, error = %e, "positional interpolation failed, using raw template");
                template.to_string()
            }),
            Self::Named(pairs) => interpolate_named(template, pairs),
        }
    }
}

/// Replaces every `{:name}` token in `template` with its value.
///
/// Tokens are matched literally and replaced one name at a time in the
/// order given, each pass working on the output of the previous one.
pub fn interpolate_named(template: &str, vars: &[(String, FormatArg)]) -> String {
    vars.iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{:{name}}}"), &value.to_string())
        })
}

/// Builds [`Vars`].
///
/// ```rust
/// use lingo_i18n::{vars, Vars};
///
/// assert_eq!(vars![], Vars::none());
/// assert_eq!(vars!["World", 3], Vars::Positional(vec!["World".into(), 3.into()]));
/// assert_eq!(vars! {"name" => "World"}, Vars::named([("name", "World")]));
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::Vars::none()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Vars::Named(vec![
            $((::std::string::String::from($key), $crate::FormatArg::from($value))),+
        ])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Vars::Positional(vec![$($crate::FormatArg::from($value)),+])
    };
}
