//! Cell values for tabular data.
//!
//! A [`CellValue`] is the primitive stored in every cell of a dataset. The
//! same type is used for effective values (the values that filtering, search
//! and the filter universe operate on) and for the members of a filter list.
//!
//! Equality is strict: `CellValue::from("1")` is not equal to
//! `CellValue::from(1)`, and a `NaN` float never equals anything.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Deserializes untagged from JSON/TOML scalars, so a dataset can be loaded
/// directly from `[["Joe James", 42, true, null]]`.
///
/// # Example
///
/// ```
/// use horizon_grid_core::CellValue;
///
/// let value = CellValue::from("Yonkers");
/// assert_eq!(value.as_str(), Some("Yonkers"));
/// assert_eq!(value.display_text(), "Yonkers");
///
/// let number = CellValue::from(42);
/// assert_eq!(number.display_text(), "42");
/// assert_ne!(number, CellValue::from("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// An empty cell.
    #[default]
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating point number.
    Float(f64),
    /// A string value.
    String(String),
}

impl CellValue {
    /// Returns `true` if this is `CellValue::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns `true` if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, CellValue::String(_))
    }

    /// Returns `true` for the empty string.
    ///
    /// Filter updates treat an empty string as "clear this column".
    pub fn is_empty_string(&self) -> bool {
        matches!(self, CellValue::String(s) if s.is_empty())
    }

    /// Returns the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns this value as a float.
    /// Also converts integers to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => Some(*n),
            CellValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text shown for this value and matched by search.
    ///
    /// `Null` renders as the empty string.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::String(s) => Cow::Borrowed(s),
            CellValue::Bool(true) => Cow::Borrowed("true"),
            CellValue::Bool(false) => Cow::Borrowed("false"),
            CellValue::Integer(n) => Cow::Owned(n.to_string()),
            CellValue::Float(n) => Cow::Owned(format_float(*n)),
        }
    }

    /// Numeric coercion used when comparing non-string cells.
    ///
    /// `Null` is zero, booleans are zero or one, strings are parsed after
    /// trimming (an empty string is zero, anything unparsable is `NaN`).
    pub fn to_number(&self) -> f64 {
        match self {
            CellValue::Null => 0.0,
            CellValue::Bool(b) => f64::from(u8::from(*b)),
            CellValue::Integer(n) => *n as f64,
            CellValue::Float(n) => *n,
            CellValue::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }

    /// Compares the numeric readings of two values.
    ///
    /// This is a total order: values without a numeric reading (`NaN`) are
    /// equal to each other and sort after every number.
    pub fn numeric_cmp(&self, other: &CellValue) -> Ordering {
        let (a, b) = (self.to_number(), other.to_number());
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.total_cmp(&b),
        }
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::String(s.clone())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Integer(i64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Integer(i64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}
