//! Field values used for sorting. Items expose their sortable columns through
//! accessor closures registered per field name, so the collection never needs
//! to know the concrete item type.

use std::cmp::Ordering;

/// Value extracted from an item for a sort field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Booleans, then numbers, then text.
    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Text(_) => 2,
        }
    }

    /// Primitive ordering used when a field has no custom comparator.
    ///
    /// This is a total order. Integers and floats compare numerically, an
    /// integer ties before an equal float, and `NaN` sorts after every other
    /// number. Values of different kinds are ordered bool < number < text.
    #[must_use]
    pub fn primitive_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_)) => {
                number_cmp(self, other)
            }
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

/// Orders two numbers where at least one is a float.
fn number_cmp(a: &FieldValue, b: &FieldValue) -> Ordering {
    #[allow(clippy::cast_precision_loss)]
    let as_float = |value: &FieldValue| match value {
        FieldValue::Int(v) => (*v as f64, false),
        FieldValue::Float(v) => (*v, true),
        _ => (0.0, false),
    };
    let (x, x_float) = as_float(a);
    let (y, y_float) = as_float(b);

    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.total_cmp(&y).then(x_float.cmp(&y_float)),
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Extracts the value of one field from an item. `None` means missing.
pub type FieldAccessor<T> = Box<dyn Fn(&T) -> Option<FieldValue>>;

/// Custom ordering for two present values of one field.
pub type FieldComparator = Box<dyn Fn(&FieldValue, &FieldValue) -> Ordering>;

/// Orders two optional field values.
///
/// Missing values always sort after present ones and two missing values are
/// equal. Only the comparison of present values is reversed when descending.
pub(crate) fn compare_values(
    a: Option<&FieldValue>,
    b: Option<&FieldValue>,
    comparator: Option<&FieldComparator>,
    descending: bool,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = comparator.map_or_else(|| a.primitive_cmp(b), |compare| compare(a, b));
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
    }
}
