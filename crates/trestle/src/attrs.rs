//! Attribute maps and the sources that produce them.
//!
//! [`Attrs`] is an ordered name/value map; rendering walks it in key order so
//! output is deterministic. A [`Source`] is what a [`TableSpec`] slot stores:
//! either a fixed `Attrs` or a callback that computes one per element from
//! its render context.
//!
//! [`TableSpec`]: crate::TableSpec

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::cell::Cell;
use crate::escape::escape_into;

/// HTML attributes, ordered by name.
///
/// Values are escaped when rendered; names are emitted as given.
///
/// # Example
///
/// ```
/// use trestle::Attrs;
///
/// let attrs = Attrs::new().set("id", "r1").set("class", "odd");
/// assert_eq!(attrs.to_html(), "class=\"odd\" id=\"r1\"");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs(BTreeMap<String, String>);

impl Attrs {
    /// An empty attribute map.
    pub fn new() -> Self {
        Attrs::default()
    }

    /// Sets an attribute, consuming and returning the map for chaining.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Sets an attribute in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Looks up an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// True if `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of attributes set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders as `name="value"` pairs separated by single spaces, names in
    /// lexicographic order, values escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        let mut first = true;
        for (name, value) in &self.0 {
            if !first {
                out.push(' ');
            }
            first = false;
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, value);
            out.push('"');
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attrs(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Computes attributes for the `<table>` element.
pub type TableFn = Box<dyn Fn() -> Attrs + Send + Sync>;

/// Computes attributes for a `<tr>` from the row about to be rendered. For
/// the header row this is the headers themselves, as cells.
pub type RowFn = Box<dyn Fn(&[Cell]) -> Attrs + Send + Sync>;

/// Computes attributes for a header `<th>` from the header text.
pub type HeaderFn = Box<dyn Fn(&str) -> Attrs + Send + Sync>;

/// Computes attributes for a body cell from the cell value, its zero-based
/// column index and the full row.
pub type CellFn = Box<dyn Fn(&Cell, usize, &[Cell]) -> Attrs + Send + Sync>;

/// Where a slot's attributes come from: a fixed map, or a callback invoked
/// once per rendered element.
pub enum Source<F> {
    /// The same attributes for every element in the slot.
    Static(Attrs),
    /// Attributes computed per element.
    With(F),
}

impl<F> Source<F> {
    /// True for [`Source::Static`].
    pub fn is_static(&self) -> bool {
        matches!(self, Source::Static(_))
    }
}

impl<F> Default for Source<F> {
    fn default() -> Self {
        Source::Static(Attrs::new())
    }
}

impl<F> From<Attrs> for Source<F> {
    fn from(attrs: Attrs) -> Self {
        Source::Static(attrs)
    }
}

impl<F> fmt::Debug for Source<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Static(attrs) => f.debug_tuple("Static").field(attrs).finish(),
            Source::With(_) => f.write_str("With(..)"),
        }
    }
}

impl Source<TableFn> {
    /// Resolves the table attributes, borrowing in the static case.
    pub fn resolve(&self) -> Cow<'_, Attrs> {
        match self {
            Source::Static(attrs) => Cow::Borrowed(attrs),
            Source::With(f) => Cow::Owned(f()),
        }
    }
}

impl Source<RowFn> {
    /// Resolves attributes for the row `row`.
    pub fn resolve(&self, row: &[Cell]) -> Cow<'_, Attrs> {
        match self {
            Source::Static(attrs) => Cow::Borrowed(attrs),
            Source::With(f) => Cow::Owned(f(row)),
        }
    }
}

impl Source<HeaderFn> {
    /// Resolves attributes for the header cell `header`.
    pub fn resolve(&self, header: &str) -> Cow<'_, Attrs> {
        match self {
            Source::Static(attrs) => Cow::Borrowed(attrs),
            Source::With(f) => Cow::Owned(f(header)),
        }
    }
}

impl Source<CellFn> {
    /// Resolves attributes for one body cell.
    pub fn resolve(&self, value: &Cell, index: usize, row: &[Cell]) -> Cow<'_, Attrs> {
        match self {
            Source::Static(attrs) => Cow::Borrowed(attrs),
            Source::With(f) => Cow::Owned(f(value, index, row)),
        }
    }
}
