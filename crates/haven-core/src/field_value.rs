//! Field values carried by record snapshots.
//!
//! Sanctuary records arrive as untyped key/value bags. `FieldValue` closes the
//! value space over the JSON scalars plus an escape hatch for nested data, and
//! defines the two operations the auditor needs: strict comparison and the
//! lossy text form stored in audit rows.

use serde_json::Value;

/// One field's value inside a [`Snapshot`](crate::Snapshot).
///
/// A field that is absent from a snapshot is "undefined" and is modelled as
/// `Option::<&FieldValue>::None` at lookup time, not as a variant here.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Arrays and objects. Compared by identity, never structurally.
    Composite(Value),
}

impl FieldValue {
    /// Strict equality without type coercion.
    ///
    /// - `Integer(5)` and `Text("5")` differ.
    /// - `Integer(5)` and `Float(5.0)` are the same number.
    /// - `Float(NaN)` never equals anything.
    /// - `Composite` values are equal only when both sides are the very same
    ///   value (same snapshot slot), regardless of structure.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                *a as f64 == *b
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Composite(a), Self::Composite(b)) => std::ptr::eq(a, b),
            _ => false,
        }
    }

    /// Whether this value counts as "no value" for creation/deletion logging.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Lossy text form stored in `before_value` / `after_value`.
    ///
    /// Returns `None` for `Null`. Numbers follow the ECMAScript
    /// number-to-string rules: whole floats drop the fraction
    /// (`3.0` → `"3"`), very large or small magnitudes switch to exponent
    /// form (`1e21` → `"1e+21"`). Composites print as compact JSON.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Integer(i) => Some(integer_text(*i)),
            Self::Float(f) => Some(float_text(*f)),
            Self::Text(s) => Some(s.clone()),
            Self::Composite(v) => Some(v.to_string()),
        }
    }
}

/// Integers past this magnitude are not exactly representable as `f64`.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Text form of an integer, rounded through `f64` once it leaves the
/// exactly representable range so it reads the same as the equivalent float.
#[allow(clippy::cast_precision_loss)]
fn integer_text(i: i64) -> String {
    if i.unsigned_abs() > MAX_SAFE_INTEGER {
        return float_text(i as f64);
    }
    i.to_string()
}

/// ECMAScript number-to-string: shortest round-trip digits,
/// plain notation for decimal exponents in `-6..=20`, otherwise `d.ddde±x`.
#[allow(clippy::float_cmp)]
fn float_text(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e19".
    let scientific = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let sign = if f < 0.0 { "-" } else { "" };
    format!("{sign}{}", place_decimal_point(&digits, exponent + 1))
}

/// Lay out significant `digits` with the decimal point after `point` digits.
/// `point` may be zero, negative, or past the end of `digits`.
fn place_decimal_point(digits: &str, point: i32) -> String {
    let len = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    let zeros = |count: i32| "0".repeat(usize::try_from(count).unwrap_or(0));

    if (len..=21).contains(&point) {
        return format!("{digits}{}", zeros(point - len));
    }
    if (1..=21).contains(&point) {
        let (whole, fraction) = digits.split_at(usize::try_from(point).unwrap_or(0));
        return format!("{whole}.{fraction}");
    }
    if (-5..=0).contains(&point) {
        return format!("0.{}{digits}", zeros(-point));
    }

    let (lead, tail) = digits.split_at(1);
    let exponent = point - 1;
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    if tail.is_empty() {
        format!("{lead}e{exp_sign}{}", exponent.unsigned_abs())
    } else {
        format!("{lead}.{tail}e{exp_sign}{}", exponent.unsigned_abs())
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Value::String(s) => Self::Text(s),
            composite @ (Value::Array(_) | Value::Object(_)) => Self::Composite(composite),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
