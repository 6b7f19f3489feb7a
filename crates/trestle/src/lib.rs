//! # trestle
//!
//! Generate HTML tables from rows of data.
//!
//! Hand [`table`] anything iterable whose items convert to rows and get back
//! a complete `<table>` string. Text is HTML-escaped by default; trust is
//! opted into per value with [`Raw`] or a prebuilt [`Tag`], never assumed.
//! Attributes render sorted by name, so output is deterministic and easy to
//! assert on.
//!
//! ## Quick start
//!
//! ```
//! use trestle::{table, Attrs, TableSpec};
//!
//! let spec = TableSpec::new()
//!     .headers("ID,Name")
//!     .table(Attrs::new().set("class", "users"));
//!
//! let html = table(vec![(1, "Ada"), (2, "Grace")], spec);
//!
//! assert!(html.starts_with("<table class=\"users\">\n"));
//! assert!(html.contains("<th>ID</th>"));
//! assert!(html.contains("<td>Grace</td>"));
//! ```
//!
//! ## Escaping and trust
//!
//! Every text value is escaped where it lands, whether that is element
//! content or an attribute value:
//!
//! ```
//! use trestle::{raw, table, TableSpec};
//!
//! let html = table([["R&D", "5"]], TableSpec::new());
//! assert!(html.contains("<td>R&amp;D</td>"));
//!
//! // raw() marks a fragment as already-safe markup.
//! let html = table([[raw("<em>R&D</em>")]], TableSpec::new());
//! assert!(html.contains("<td><em>R&D</em></td>"));
//! ```
//!
//! ## Per-element attributes
//!
//! Fixed attribute maps cover the common case; the `_with` variants on
//! [`TableSpec`] compute attributes per element from its render context:
//!
//! ```
//! use trestle::{table, Attrs, TableSpec};
//!
//! let spec = TableSpec::new()
//!     .td_with(|_value, index, _row| Attrs::new().set("class", format!("c{index}")));
//!
//! let html = table([[10, 20]], spec);
//! assert!(html.contains("<td class=\"c0\">10</td>"));
//! assert!(html.contains("<td class=\"c1\">20</td>"));
//! ```
//!
//! ## Row transforms
//!
//! [`table_with`] yields each input item to a transform along with a
//! [`Markup`] handle for building tags, links and raw fragments:
//!
//! ```
//! use trestle::{table_with, TableSpec};
//!
//! let html = table_with(["alpha", "beta"], TableSpec::new(), |name, t| {
//!     (name, t.link(name, format!("/pkg/{name}")))
//! });
//! assert!(html.contains("<a href=\"/pkg/alpha\">alpha</a>"));
//! ```
//!
//! The `json` feature adds conversions from `serde_json::Value`, for tables
//! built out of dynamic data.

pub mod attrs;
pub mod cell;
pub mod escape;
#[cfg(feature = "json")]
mod json;
pub mod markup;
pub mod spec;
pub mod table;
pub mod tag;

pub use attrs::{Attrs, CellFn, HeaderFn, RowFn, Source, TableFn};
pub use cell::{Cell, IntoCell, IntoRow, Raw};
pub use escape::escape;
pub use markup::Markup;
pub use spec::{Headers, TableSpec};
pub use table::Table;
pub use tag::Tag;

/// Renders `rows` as an HTML table configured by `spec`.
///
/// Each item of `rows` becomes one `<tr>` in the body. See [`IntoRow`] for
/// what counts as a row.
///
/// # Example
///
/// ```
/// use trestle::{table, TableSpec};
///
/// let html = table([[1, 2]], TableSpec::new());
/// assert_eq!(
///     html,
///     "<table>\n<tbody>\n<tr>\n<td>1</td>\n<td>2</td>\n</tr>\n</tbody>\n</table>\n"
/// );
/// ```
pub fn table<I>(rows: I, spec: TableSpec) -> String
where
    I: IntoIterator,
    I::Item: IntoRow,
{
    let mut table = Table::new(spec);
    for row in rows {
        table.push(row);
    }
    table.to_html()
}

/// Renders a table, passing each item through `transform` first.
///
/// The transform receives the item and a [`Markup`] handle and returns the
/// row to render, so source items do not have to be row-shaped.
pub fn table_with<I, F, R>(items: I, spec: TableSpec, mut transform: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item, &Markup) -> R,
    R: IntoRow,
{
    let markup = Markup;
    let mut table = Table::new(spec);
    for item in items {
        table.push(transform(item, &markup));
    }
    table.to_html()
}

/// Like [`table_with`], for transforms that can fail.
///
/// The first error is returned as-is and nothing is rendered.
///
/// # Example
///
/// ```
/// use trestle::{try_table_with, TableSpec};
///
/// let html = try_table_with(["3", "4"], TableSpec::new(), |s, _t| {
///     s.parse::<i32>().map(|n| [n, n * n])
/// });
/// assert!(html.unwrap().contains("<td>16</td>"));
/// ```
pub fn try_table_with<I, F, R, E>(items: I, spec: TableSpec, mut transform: F) -> Result<String, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, &Markup) -> Result<R, E>,
    R: IntoRow,
{
    let markup = Markup;
    let mut table = Table::new(spec);
    for item in items {
        table.push(transform(item, &markup)?);
    }
    Ok(table.to_html())
}

/// Marks `html` as trusted markup that renders without escaping.
///
/// Shorthand for [`Raw::new`].
pub fn raw(html: impl Into<String>) -> Raw {
    Raw::new(html)
}
