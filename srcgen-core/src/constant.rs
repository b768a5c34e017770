//! Typed constant values rendered as source literals.

use std::fmt;

/// A constant argument value taken from an attribute or configuration.
///
/// Rendering via [`Constant::to_source`] (or `Display`) produces a literal
/// that keeps its type when pasted back into source: numeric kinds other
/// than `int` carry their postfix (`L`, `u`, `uL`, `f`, `d`, `m`).
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Null,
    Bool(bool),
    Char(char),
    String(String),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    /// Decimal literal digits, kept as text to preserve precision.
    Decimal(String),
}

impl Constant {
    /// Render as a source literal.
    pub fn to_source(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(c) => {
                f.write_str("'")?;
                write_escaped(f, *c, '\'')?;
                f.write_str("'")
            }
            Self::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    write_escaped(f, c, '"')?;
                }
                f.write_str("\"")
            }
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}u"),
            Self::Long(v) => write!(f, "{v}L"),
            Self::ULong(v) => write!(f, "{v}uL"),
            Self::Float(v) => write_float(f, *v, "float", "f"),
            Self::Double(v) => write_float(f, *v, "double", "d"),
            Self::Decimal(digits) => write!(f, "{digits}m"),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, c: char, quote: char) -> fmt::Result {
    match c {
        '\\' => f.write_str("\\\\"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\t' => f.write_str("\\t"),
        '\0' => f.write_str("\\0"),
        c if c == quote => write!(f, "\\{c}"),
        c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
            write!(f, "\\u{:04x}", u32::from(c))
        }
        c => write!(f, "{c}"),
    }
}

fn write_float<T>(f: &mut fmt::Formatter<'_>, v: T, keyword: &str, postfix: &str) -> fmt::Result
where
    T: fmt::Display + Into<f64> + Copy,
{
    let wide: f64 = v.into();
    if wide.is_nan() {
        write!(f, "{keyword}.NaN")
    } else if wide.is_infinite() {
        let side = if wide > 0.0 { "Positive" } else { "Negative" };
        write!(f, "{keyword}.{side}Infinity")
    } else {
        write!(f, "{v}{postfix}")
    }
}
