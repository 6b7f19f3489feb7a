//! Table configuration.
//!
//! A [`TableSpec`] collects everything about a table that is not row data:
//! caption, headers, column widths, the first-column `<th>` flag, and an
//! attribute [`Source`] for each of the four attribute slots. Specs are
//! built fluently and handed to [`table`](crate::table) or
//! [`Table::new`](crate::Table::new).

use crate::attrs::{Attrs, CellFn, HeaderFn, RowFn, Source, TableFn};
use crate::cell::{Cell, IntoCell};

/// Everything configurable about one table.
///
/// Each attribute slot has a pair of builder methods: the plain one takes a
/// fixed attribute map, the `_with` one takes a callback that computes the
/// map per element. Setting a slot replaces whatever it held before.
///
/// # Example
///
/// ```
/// use trestle::{table, Attrs, TableSpec};
///
/// let spec = TableSpec::new()
///     .headers("Name,Count")
///     .table(Attrs::new().set("class", "inventory"))
///     .td_with(|_value, index, _row| Attrs::new().set("class", format!("col{index}")));
///
/// let html = table([("bolts", 41)], spec);
/// assert!(html.contains("<table class=\"inventory\">"));
/// assert!(html.contains("<td class=\"col1\">41</td>"));
/// ```
#[derive(Debug, Default)]
pub struct TableSpec {
    pub(crate) caption: Option<Cell>,
    pub(crate) header_column: bool,
    pub(crate) headers: Option<Headers>,
    pub(crate) widths: Option<Vec<u32>>,
    pub(crate) table: Source<TableFn>,
    pub(crate) tr: Source<RowFn>,
    pub(crate) th: Source<HeaderFn>,
    pub(crate) td: Source<CellFn>,
}

impl TableSpec {
    /// A spec with no options set.
    pub fn new() -> Self {
        TableSpec::default()
    }

    /// Adds a `<caption>`, rendered first inside the table.
    pub fn caption(mut self, caption: impl IntoCell) -> Self {
        self.caption = Some(caption.into_cell());
        self
    }

    /// Renders the first cell of every body row as `<th>` instead of `<td>`.
    pub fn header_column(mut self, enabled: bool) -> Self {
        self.header_column = enabled;
        self
    }

    /// Adds a header row inside `<thead>`. Accepts a list of headers or a
    /// single comma-separated string.
    pub fn headers(mut self, headers: impl Into<Headers>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    /// Adds a `<colgroup>` with one fixed-width `<col>` per entry.
    pub fn widths(mut self, widths: impl IntoIterator<Item = u32>) -> Self {
        self.widths = Some(widths.into_iter().collect());
        self
    }

    /// Fixed attributes for the `<table>` element.
    pub fn table(mut self, attrs: impl Into<Attrs>) -> Self {
        self.table = Source::Static(attrs.into());
        self
    }

    /// Computed attributes for the `<table>` element.
    pub fn table_with<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Attrs + Send + Sync + 'static,
    {
        self.table = Source::With(Box::new(f));
        self
    }

    /// Fixed attributes for every `<tr>`.
    pub fn tr(mut self, attrs: impl Into<Attrs>) -> Self {
        self.tr = Source::Static(attrs.into());
        self
    }

    /// Computed attributes for each `<tr>`, from the row it will hold. The
    /// header row participates too, with the headers as the row.
    pub fn tr_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Cell]) -> Attrs + Send + Sync + 'static,
    {
        self.tr = Source::With(Box::new(f));
        self
    }

    /// Fixed attributes for every header `<th>`.
    pub fn th(mut self, attrs: impl Into<Attrs>) -> Self {
        self.th = Source::Static(attrs.into());
        self
    }

    /// Computed attributes for each header `<th>`, from its text.
    pub fn th_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Attrs + Send + Sync + 'static,
    {
        self.th = Source::With(Box::new(f));
        self
    }

    /// Fixed attributes for every body cell.
    pub fn td(mut self, attrs: impl Into<Attrs>) -> Self {
        self.td = Source::Static(attrs.into());
        self
    }

    /// Computed attributes for each body cell, from the cell value, its
    /// zero-based column index and the full row. Also consulted for the
    /// first-column `<th>` when [`header_column`](Self::header_column) is on.
    pub fn td_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&Cell, usize, &[Cell]) -> Attrs + Send + Sync + 'static,
    {
        self.td = Source::With(Box::new(f));
        self
    }
}

/// Header row content.
///
/// Most callers pass a `&str` or a `Vec`; the `From` impls pick the variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Headers {
    /// One string, split on commas at render time. Interior empty segments
    /// become empty headers; trailing ones are dropped, so `"a,,b"` yields
    /// three headers and `"a,b,"` yields two.
    Joined(String),
    /// One entry per header cell.
    List(Vec<String>),
}

impl Headers {
    /// The individual header strings.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Headers::Joined(s) => {
                let mut values: Vec<&str> = s.split(',').collect();
                while values.last() == Some(&"") {
                    values.pop();
                }
                values
            }
            Headers::List(list) => list.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Headers {
    fn from(joined: &str) -> Self {
        Headers::Joined(joined.to_string())
    }
}

impl From<String> for Headers {
    fn from(joined: String) -> Self {
        Headers::Joined(joined)
    }
}

impl From<Vec<String>> for Headers {
    fn from(list: Vec<String>) -> Self {
        Headers::List(list)
    }
}

impl From<Vec<&str>> for Headers {
    fn from(list: Vec<&str>) -> Self {
        Headers::List(list.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Headers {
    fn from(list: [&str; N]) -> Self {
        Headers::List(list.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[String; N]> for Headers {
    fn from(list: [String; N]) -> Self {
        Headers::List(list.into())
    }
}
