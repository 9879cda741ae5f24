//! `printf`-style formatting for the positional interpolation dialect.
//!
//! Conversions follow `%[argnum$][flags][width][.precision]specifier`:
//!
//! | flag | effect |
//! |------|--------|
//! | `-`  | left-justify within the field |
//! | `+`  | always print a sign on numbers |
//! | ` `  | pad with spaces (default) |
//! | `0`  | pad with zeros |
//! | `'c` | pad with the character `c` |
//!
//! Specifiers: `b c d e E f F g G o s u x X` and `%%` for a literal percent.
//! Arguments are loosely typed; a string handed to `%d` contributes its
//! leading integer, a boolean renders as `1` or the empty string under `%s`.

use crate::error::FormatError;
use std::fmt;

const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Largest field width a conversion may request.
pub const MAX_WIDTH: usize = 4096;

/// Largest precision a conversion may request.
pub const MAX_PRECISION: usize = 4096;

/// Float precision beyond this many digits is clamped.
const MAX_FLOAT_PRECISION: usize = 53;

/// A loosely typed formatting argument.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    /// Text
    Str(String),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
}

impl FormatArg {
    /// Integer view of the argument.
    ///
    /// Strings contribute their leading integer (or `0`), floats are
    /// truncated towards zero.
    pub fn to_int(&self) -> i64 {
        match self {
            Self::Str(s) => leading_int(s),
            Self::Int(i) => *i,
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) => *f as i64,
            Self::Bool(b) => i64::from(*b),
        }
    }

    /// Floating point view of the argument.
    pub fn to_float(&self) -> f64 {
        match self {
            Self::Str(s) => leading_float(s),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Bool(b) => f64::from(u8::from(*b)),
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(true) => f.write_str("1"),
            Self::Bool(false) => Ok(()),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<char> for FormatArg {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for FormatArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! int_args {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for FormatArg {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}

int_args!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for FormatArg {
    fn from(value: u64) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// Formats `format` with `args`, consuming arguments in order.
///
/// ```rust
/// use lingo_i18n::{sprintf, FormatArg};
///
/// let out = sprintf("%s has %05.1f%%", &["disk".into(), FormatArg::Float(42.3)]).unwrap();
/// assert_eq!(out, "disk has 042.3%");
/// ```
pub fn sprintf(format: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let chars: Vec<char> = format.chars().collect();
    let mut out = String::with_capacity(format.len());
    let mut pos = 0;
    let mut next_arg = 0;

    while pos < chars.len() {
        let c = chars[pos];
        pos += 1;
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.get(pos) {
            None => return Err(FormatError::MissingSpecifier),
            Some('%') => {
                out.push('%');
                pos += 1;
                continue;
            }
            Some(_) => {}
        }

        let spec = Conversion::parse(&chars, &mut pos)?;
        let index = match spec.argnum {
            Some(0) => return Err(FormatError::ZeroArgnum),
            Some(n) => n - 1,
            None => {
                next_arg += 1;
                next_arg - 1
            }
        };
        let arg = args.get(index).ok_or(FormatError::TooFewArguments {
            required: index + 1,
            given: args.len(),
        })?;
        spec.render(arg, &mut out);
    }

    Ok(out)
}

/// One parsed `%...` conversion.
#[derive(Debug, Clone, PartialEq)]
struct Conversion {
    argnum: Option<usize>,
    left_align: bool,
    force_sign: bool,
    pad: char,
    width: Option<usize>,
    precision: Option<usize>,
    specifier: char,
}

impl Conversion {
    /// Parses the conversion starting just after the `%`.
    fn parse(chars: &[char], pos: &mut usize) -> Result<Self, FormatError> {
        let mut spec = Self {
            argnum: None,
            left_align: false,
            force_sign: false,
            pad: ' ',
            width: None,
            precision: None,
            specifier: 's',
        };

        let start = *pos;
        if let Some(n) = read_number(chars, pos) {
            if chars.get(*pos) == Some(&'$') {
                spec.argnum = Some(n);
                *pos += 1;
            } else {
                *pos = start;
            }
        }

        loop {
            match chars.get(*pos) {
                Some('-') => spec.left_align = true,
                Some('+') => spec.force_sign = true,
                Some(' ') => spec.pad = ' ',
                Some('0') => spec.pad = '0',
                Some('\'') => {
                    *pos += 1;
                    spec.pad = *chars.get(*pos).ok_or(FormatError::MissingSpecifier)?;
                }
                _ => break,
            }
            *pos += 1;
        }

        spec.width = read_number(chars, pos);
        if let Some(requested) = spec.width.filter(|w| *w > MAX_WIDTH) {
            return Err(FormatError::WidthTooLarge {
                requested,
                max: MAX_WIDTH,
            });
        }

        if chars.get(*pos) == Some(&'.') {
            *pos += 1;
            let precision = read_number(chars, pos).unwrap_or(0);
            if precision > MAX_PRECISION {
                return Err(FormatError::PrecisionTooLarge {
                    requested: precision,
                    max: MAX_PRECISION,
                });
            }
            spec.precision = Some(precision);
        }

        spec.specifier = *chars.get(*pos).ok_or(FormatError::MissingSpecifier)?;
        *pos += 1;

        match spec.specifier {
            'b' | 'c' | 'd' | 'e' | 'E' | 'f' | 'F' | 'g' | 'G' | 'o' | 's' | 'u' | 'x' | 'X' => {
                Ok(spec)
            }
            other => Err(FormatError::UnknownSpecifier(other)),
        }
    }

    fn render(&self, arg: &FormatArg, out: &mut String) {
        match self.specifier {
            's' => {
                let text = arg.to_string();
                let text = match self.precision {
                    Some(p) => text.chars().take(p).collect(),
                    None => text,
                };
                self.justify("", &text, out);
            }
            'd' => {
                let n = arg.to_int();
                self.justify(self.sign(n < 0), &n.unsigned_abs().to_string(), out);
            }
            #[allow(clippy::cast_sign_loss)]
            'u' => self.justify("", &(arg.to_int() as u64).to_string(), out),
            'c' => {
                let code = u32::try_from(arg.to_int()).ok().and_then(char::from_u32);
                if let Some(c) = code {
                    out.push(c);
                }
            }
            #[allow(clippy::cast_sign_loss)]
            'b' => self.justify("", &format!("{:b}", arg.to_int() as u64), out),
            #[allow(clippy::cast_sign_loss)]
            'o' => self.justify("", &format!("{:o}", arg.to_int() as u64), out),
            #[allow(clippy::cast_sign_loss)]
            'x' => self.justify("", &format!("{:x}", arg.to_int() as u64), out),
            #[allow(clippy::cast_sign_loss)]
            'X' => self.justify("", &format!("{:X}", arg.to_int() as u64), out),
            'f' | 'F' => {
                let v = arg.to_float();
                let precision = self.float_precision();
                let body = format!("{:.*}", precision, v.abs());
                self.justify(self.sign(v.is_sign_negative() && v != 0.0), &body, out);
            }
            'e' | 'E' => {
                let v = arg.to_float();
                let precision = self.float_precision();
                let body = format_exponent(v.abs(), precision, self.specifier == 'E');
                self.justify(self.sign(v.is_sign_negative() && v != 0.0), &body, out);
            }
            'g' | 'G' => {
                let v = arg.to_float();
                let precision = self.float_precision();
                let body = format_general(v.abs(), precision, self.specifier == 'G');
                self.justify(self.sign(v.is_sign_negative() && v != 0.0), &body, out);
            }
            _ => unreachable!("specifier validated during parsing"),
        }
    }

    fn float_precision(&self) -> usize {
        self.precision
            .unwrap_or(DEFAULT_FLOAT_PRECISION)
            .min(MAX_FLOAT_PRECISION)
    }

    const fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.force_sign {
            "+"
        } else {
            ""
        }
    }

    fn justify(&self, sign: &str, body: &str, out: &mut String) {
        let len = sign.chars().count() + body.chars().count();
        let fill = self.width.map_or(0, |w| w.saturating_sub(len));

        if fill == 0 {
            out.push_str(sign);
            out.push_str(body);
        } else if self.left_align {
            out.push_str(sign);
            out.push_str(body);
            out.extend(std::iter::repeat(self.pad).take(fill));
        } else if self.pad == '0' {
            out.push_str(sign);
            out.extend(std::iter::repeat('0').take(fill));
            out.push_str(body);
        } else {
            out.extend(std::iter::repeat(self.pad).take(fill));
            out.push_str(sign);
            out.push_str(body);
        }
    }
}

fn read_number(chars: &[char], pos: &mut usize) -> Option<usize> {
    let start = *pos;
    let mut value: usize = 0;
    while let Some(digit) = chars.get(*pos).and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(digit as usize);
        *pos += 1;
    }
    (*pos > start).then_some(value)
}

/// `1.5e3` style with an explicit exponent sign, e.g. `1.500000e+3`.
fn format_exponent(value: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{marker}{sign}{}", exponent.unsigned_abs())
}

/// Shortest of fixed or exponent notation with trailing zeros removed.
fn format_general(value: f64, precision: usize, upper: bool) -> String {
    let significant = precision.max(1);
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    #[allow(clippy::cast_possible_truncation)]
    let exponent = value.log10().floor() as i32;
    let significant_i32 = i32::try_from(significant).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= significant_i32 {
        let formatted = format_exponent(value, significant - 1, upper);
        let marker = if upper { 'E' } else { 'e' };
        match formatted.split_once(marker) {
            Some((mantissa, rest)) => format!("{}{marker}{rest}", trim_fraction(mantissa)),
            None => formatted,
        }
    } else {
        let decimals = usize::try_from(significant_i32 - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Leading integer of a string, `0` if there is none.
fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit));
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Leading floating point number of a string, `0.0` if there is none.
fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'-' | b'+') {
            exp_end += 1;
        }
        if exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}
