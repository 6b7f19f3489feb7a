//! Cells and rows from `serde_json` values. Enabled by the `json` feature.

use serde_json::Value;

use crate::cell::{Cell, IntoCell, IntoRow};

/// Scalars become text cells through their JSON display form, except strings,
/// which convert without the surrounding quotes, and null, which becomes the
/// empty cell. Arrays and objects render as compact JSON text.
impl IntoCell for Value {
    fn into_cell(self) -> Cell {
        match self {
            Value::Null => Cell::empty(),
            Value::String(s) => Cell::Text(s),
            other => Cell::Text(other.to_string()),
        }
    }
}

/// An array maps element by element; any other value becomes a single-cell
/// row.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use trestle::{table, TableSpec};
///
/// let rows = vec![json!([1, "a&b"]), json!([2, null])];
/// let html = table(rows, TableSpec::new());
/// assert!(html.contains("<td>a&amp;b</td>"));
/// assert!(html.contains("<td></td>"));
/// ```
impl IntoRow for Value {
    fn into_row(self) -> Vec<Cell> {
        match self {
            Value::Array(items) => items.into_iter().map(IntoCell::into_cell).collect(),
            other => vec![other.into_cell()],
        }
    }
}
