//! Declaration values.

use serde::Serialize;

/// A single CSS declaration value.
///
/// Values convert from the usual Rust literals, so most declarations read
/// naturally:
///
/// ```rust
/// use herb::{StyleUnit, Value};
///
/// let unit = StyleUnit::new()
///     .add("display", "flex")
///     .add("flex-grow", 1)
///     .add("padding", Value::px(4.0))
///     .add("font-family", Value::comma(["Inter", "sans-serif"]));
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Value {
    /// A bare keyword or preformatted token, emitted verbatim (`red`, `10px`).
    Keyword(String),
    /// A quoted string, escaped on output (`content: "»"`).
    Str(String),
    /// A unitless number.
    Number(f64),
    /// A number with a unit (`4px`, `1.5em`).
    Dimension { value: f64, unit: String },
    /// A percentage.
    Percent(f64),
    /// Space separated values (`1px solid black`).
    List(Vec<Value>),
    /// Comma separated values (`Inter, sans-serif`).
    Comma(Vec<Value>),
}

/// Numbers compare by bit pattern, so a value holding NaN equals itself and
/// re-injecting it is a no-op.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Keyword(a), Value::Keyword(b)) | (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Number(a), Value::Number(b)) | (Value::Percent(a), Value::Percent(b)) => {
                a.to_bits() == b.to_bits()
            }
            (
                Value::Dimension { value: a, unit: ua },
                Value::Dimension { value: b, unit: ub },
            ) => a.to_bits() == b.to_bits() && ua == ub,
            (Value::List(a), Value::List(b)) | (Value::Comma(a), Value::Comma(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Creates a keyword value.
    pub fn keyword(s: impl Into<String>) -> Self {
        Value::Keyword(s.into())
    }

    /// Creates a quoted string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Creates a dimension with an arbitrary unit.
    pub fn dimension(value: f64, unit: impl Into<String>) -> Self {
        Value::Dimension {
            value,
            unit: unit.into(),
        }
    }

    pub fn px(value: f64) -> Self {
        Self::dimension(value, "px")
    }

    pub fn em(value: f64) -> Self {
        Self::dimension(value, "em")
    }

    pub fn rem(value: f64) -> Self {
        Self::dimension(value, "rem")
    }

    pub fn percent(value: f64) -> Self {
        Value::Percent(value)
    }

    /// Creates a space separated list.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Creates a comma separated list.
    pub fn comma<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Comma(items.into_iter().map(Into::into).collect())
    }

    /// Writes the CSS text form of this value.
    pub fn write_css(&self, dest: &mut String) {
        match self {
            Value::Keyword(s) => dest.push_str(s),
            Value::Str(s) => {
                // Writing into a String cannot fail.
                let _ = cssparser::serialize_string(s, dest);
            }
            Value::Number(n) => dest.push_str(&format_number(*n)),
            Value::Dimension { value, unit } => {
                dest.push_str(&format_number(*value));
                dest.push_str(unit);
            }
            Value::Percent(n) => {
                dest.push_str(&format_number(*n));
                dest.push('%');
            }
            Value::List(items) => write_joined(items, " ", dest),
            Value::Comma(items) => write_joined(items, ", ", dest),
        }
    }

    /// Returns the CSS text form of this value.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }
}

fn write_joined(items: &[Value], separator: &str, dest: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            dest.push_str(separator);
        }
        item.write_css(dest);
    }
}

/// Formats a number without a trailing `.0` for integral values.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Keyword(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Keyword(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}
