//! Content values bound to shapes

use super::value::Value;

/// The value of one content entry, classified once when the slide is read
#[derive(Debug, Clone, PartialEq)]
pub enum ContentValue {
    /// A single paragraph
    Scalar(String),
    /// One paragraph per line
    Lines(Vec<String>),
    /// Table rows, each an ordered list of cell texts
    Rows(Vec<Vec<String>>),
}

impl ContentValue {
    /// Classify a raw value
    ///
    /// A list containing at least one nested list becomes `Rows` (scalar
    /// members become single-cell rows). Any other list becomes `Lines`.
    /// Returns `None` for null and map values, which have no text form.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Map(_) => None,
            Value::List(items) if items.iter().any(|v| matches!(v, Value::List(_))) => {
                let rows = items
                    .iter()
                    .map(|item| match item {
                        Value::List(cells) => cells.iter().map(|c| c.to_string()).collect(),
                        other => vec![other.to_string()],
                    })
                    .collect();
                Some(ContentValue::Rows(rows))
            }
            Value::List(items) => Some(ContentValue::Lines(
                items.iter().map(|v| v.to_string()).collect(),
            )),
            scalar => Some(ContentValue::Scalar(scalar.to_string())),
        }
    }

    /// Name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ContentValue::Scalar(_) => "scalar",
            ContentValue::Lines(_) => "lines",
            ContentValue::Rows(_) => "rows",
        }
    }
}
