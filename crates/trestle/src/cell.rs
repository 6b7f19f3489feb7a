//! Cell values and the conversions that feed them.
//!
//! Everything that ends up inside a `<td>` is a [`Cell`]: plain text that
//! will be escaped, a [`Raw`] fragment that passes through untouched, or a
//! prebuilt [`Tag`]. The [`IntoCell`] trait is the single funnel for turning
//! application values into cells, and [`IntoRow`] does the same for whole
//! rows.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use crate::escape::escape_into;
use crate::tag::Tag;

/// A string that is already valid HTML and must not be escaped.
///
/// Wrapping a value in `Raw` is an assertion by the caller. Nothing is
/// checked, so only wrap markup you produced or sanitized yourself.
///
/// # Example
///
/// ```
/// use trestle::{table, Raw, TableSpec};
///
/// let html = table([[Raw::new("<em>hi</em>")]], TableSpec::new());
/// assert!(html.contains("<td><em>hi</em></td>"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Raw(String);

impl Raw {
    /// Marks `html` as trusted markup.
    pub fn new(html: impl Into<String>) -> Self {
        Raw(html.into())
    }

    /// The wrapped markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Raw {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Raw {
    fn from(html: String) -> Self {
        Raw(html)
    }
}

impl From<&str> for Raw {
    fn from(html: &str) -> Self {
        Raw(html.to_string())
    }
}

/// One value destined for a table slot.
///
/// `Text` is escaped on render, `Raw` is emitted verbatim, and `Tag` renders
/// as markup. A `Tag` cell whose element name matches the slot it lands in
/// is emitted as-is instead of being wrapped a second time.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Plain text, escaped when rendered.
    Text(String),
    /// Trusted markup, rendered verbatim.
    Raw(String),
    /// A prebuilt element.
    Tag(Box<Tag>),
}

impl Cell {
    /// A text cell, escaped on render.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    /// A trusted markup cell, rendered verbatim.
    pub fn raw(html: impl Into<String>) -> Self {
        Cell::Raw(html.into())
    }

    /// The empty text cell.
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    /// True for [`Cell::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }

    /// True for [`Cell::Raw`].
    pub fn is_raw(&self) -> bool {
        matches!(self, Cell::Raw(_))
    }

    /// True for [`Cell::Tag`].
    pub fn is_tag(&self) -> bool {
        matches!(self, Cell::Tag(_))
    }

    /// The unescaped text of a `Text` cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The markup of a `Raw` cell.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Cell::Raw(s) => Some(s),
            _ => None,
        }
    }

    /// The element of a `Tag` cell.
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Cell::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Renders the cell to HTML, escaping text content.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Cell::Text(text) => escape_into(out, text),
            Cell::Raw(html) => out.push_str(html),
            Cell::Tag(tag) => tag.write_html(out),
        }
    }
}

/// Prints the natural string form of the value: the unescaped text for
/// `Text`, the markup for `Raw`, the rendered element for `Tag`. Attribute
/// callbacks that build a value out of row cells rely on this.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Raw(html) => f.write_str(html),
            Cell::Tag(tag) => f.write_str(&tag.to_html()),
        }
    }
}

/// Conversion into a [`Cell`].
///
/// Implemented for the primitive types, strings, [`Raw`], [`Tag`],
/// [`Table`](crate::Table) and `Option<T>`. Implementing it for your own
/// types is the extension point for host framework values; a safe-string
/// type converts itself into `Cell::Raw`, everything else into `Cell::Text`:
///
/// ```
/// use trestle::{table, Cell, IntoCell, TableSpec};
///
/// struct Sanitized(String);
///
/// impl IntoCell for Sanitized {
///     fn into_cell(self) -> Cell {
///         Cell::Raw(self.0)
///     }
/// }
///
/// let html = table([[Sanitized("<br>".into())]], TableSpec::new());
/// assert!(html.contains("<td><br></td>"));
/// ```
pub trait IntoCell {
    /// Converts the value into a cell.
    fn into_cell(self) -> Cell;
}

impl IntoCell for Cell {
    fn into_cell(self) -> Cell {
        self
    }
}

impl IntoCell for Raw {
    fn into_cell(self) -> Cell {
        Cell::Raw(self.0)
    }
}

impl IntoCell for Tag {
    fn into_cell(self) -> Cell {
        Cell::Tag(Box::new(self))
    }
}

impl IntoCell for String {
    fn into_cell(self) -> Cell {
        Cell::Text(self)
    }
}

impl IntoCell for &String {
    fn into_cell(self) -> Cell {
        Cell::Text(self.clone())
    }
}

impl IntoCell for &str {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for Cow<'_, str> {
    fn into_cell(self) -> Cell {
        Cell::Text(self.into_owned())
    }
}

impl IntoCell for char {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for bool {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for i8 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for i16 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for i32 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for i64 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for i128 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for isize {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for u8 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for u16 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for u32 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for u64 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for u128 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for usize {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for f32 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

impl IntoCell for f64 {
    fn into_cell(self) -> Cell {
        Cell::Text(self.to_string())
    }
}

/// `None` renders as an empty cell.
impl<T: IntoCell> IntoCell for Option<T> {
    fn into_cell(self) -> Cell {
        match self {
            Some(value) => value.into_cell(),
            None => Cell::empty(),
        }
    }
}

/// Conversion into one table row.
///
/// Covers `Vec<T>` and arrays of any single cell type, plus tuples up to
/// eight elements for rows that mix types:
///
/// ```
/// use trestle::{table, TableSpec};
///
/// let html = table(vec![(1, "one"), (2, "two")], TableSpec::new());
/// assert!(html.contains("<td>one</td>"));
/// ```
pub trait IntoRow {
    /// Converts the value into a row of cells.
    fn into_row(self) -> Vec<Cell>;
}

impl<T: IntoCell> IntoRow for Vec<T> {
    fn into_row(self) -> Vec<Cell> {
        self.into_iter().map(IntoCell::into_cell).collect()
    }
}

impl<T: IntoCell, const N: usize> IntoRow for [T; N] {
    fn into_row(self) -> Vec<Cell> {
        self.into_iter().map(IntoCell::into_cell).collect()
    }
}

macro_rules! impl_into_row_for_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: IntoCell),+> IntoRow for ($($name,)+) {
            fn into_row(self) -> Vec<Cell> {
                vec![$(self.$index.into_cell()),+]
            }
        }
    };
}

impl_into_row_for_tuple!(A: 0);
impl_into_row_for_tuple!(A: 0, B: 1);
impl_into_row_for_tuple!(A: 0, B: 1, C: 2);
impl_into_row_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_into_row_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_into_row_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_into_row_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_into_row_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
