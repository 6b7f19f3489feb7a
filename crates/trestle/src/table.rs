//! Row storage and rendering.

use std::fmt;

use crate::attrs::Attrs;
use crate::cell::{Cell, IntoCell, IntoRow};
use crate::escape::escape_into;
use crate::spec::TableSpec;
use crate::tag::{write_close, write_open};

/// An HTML table: a [`TableSpec`] plus the rows pushed so far.
///
/// [`table`](crate::table) and friends drive this for you; build one
/// directly when rows arrive incrementally.
///
/// # Example
///
/// ```
/// use trestle::{Table, TableSpec};
///
/// let mut table = Table::new(TableSpec::new().headers("id,name"));
/// table.push((1, "ada"));
/// table.push((2, "grace"));
/// assert!(table.to_html().contains("<td>grace</td>"));
/// ```
#[derive(Debug, Default)]
pub struct Table {
    spec: TableSpec,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// An empty table with the given configuration.
    pub fn new(spec: TableSpec) -> Self {
        Table { spec, rows: Vec::new() }
    }

    /// Appends one row.
    pub fn push(&mut self, row: impl IntoRow) {
        self.rows.push(row.into_row());
    }

    /// Number of body rows pushed so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows have been pushed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table.
    ///
    /// Sections appear in a fixed order: caption, colgroup, thead, tbody.
    /// The `<table>` and `<tr>` opening tags are followed by a newline, as
    /// is every closing tag, so each cell sits on its own line. Rendering
    /// does not consume the table; [`TableSpec`] callbacks run once per
    /// element every time this is called.
    pub fn to_html(&self) -> String {
        let spec = &self.spec;
        let mut out = String::with_capacity(128 + self.rows.len() * 64);

        write_open(&mut out, "table", &spec.table.resolve());
        out.push('\n');

        if let Some(caption) = &spec.caption {
            write_wrapped(&mut out, "caption", caption);
        }

        if let Some(widths) = &spec.widths {
            out.push_str("<colgroup>\n");
            for width in widths {
                out.push_str("<col width=\"");
                out.push_str(&width.to_string());
                out.push_str("\" />\n");
            }
            out.push_str("</colgroup>\n");
        }

        if let Some(headers) = &spec.headers {
            let headers = headers.values();
            let header_row: Vec<Cell> = headers.iter().map(|h| Cell::text(*h)).collect();
            out.push_str("<thead>\n");
            write_open(&mut out, "tr", &spec.tr.resolve(&header_row));
            out.push('\n');
            for header in &headers {
                write_open(&mut out, "th", &spec.th.resolve(header));
                escape_into(&mut out, header);
                write_close(&mut out, "th");
            }
            write_close(&mut out, "tr");
            out.push_str("</thead>\n");
        }

        out.push_str("<tbody>\n");
        for row in &self.rows {
            write_open(&mut out, "tr", &spec.tr.resolve(row));
            out.push('\n');
            for (index, cell) in row.iter().enumerate() {
                let name = if spec.header_column && index == 0 {
                    "th"
                } else {
                    "td"
                };
                // The callback runs for every cell, even when a prebuilt tag
                // is about to be emitted as-is and its result goes unused.
                let attrs = spec.td.resolve(cell, index, row);
                match cell {
                    Cell::Tag(tag) if tag.name() == name => tag.write_html(&mut out),
                    cell => {
                        write_open(&mut out, name, &attrs);
                        cell.write_html(&mut out);
                        write_close(&mut out, name);
                    }
                }
            }
            write_close(&mut out, "tr");
        }
        out.push_str("</tbody>\n");
        write_close(&mut out, "table");

        out
    }
}

/// Emits `content` wrapped in `name`, honoring the same reuse rule as
/// [`Tag::wrap`](crate::Tag::wrap): a tag cell already named `name` is
/// emitted unchanged.
fn write_wrapped(out: &mut String, name: &str, content: &Cell) {
    match content {
        Cell::Tag(tag) if tag.name() == name => tag.write_html(out),
        content => {
            write_open(out, name, &Attrs::new());
            content.write_html(out);
            write_close(out, name);
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// A table used as a cell renders as its own markup, so tables nest without
/// double escaping.
impl IntoCell for Table {
    fn into_cell(self) -> Cell {
        Cell::Raw(self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    #[test]
    fn renders_the_exact_byte_layout() {
        let mut table = Table::new(TableSpec::new());
        table.push([1, 2]);
        assert_eq!(
            table.to_html(),
            "<table>\n<tbody>\n<tr>\n<td>1</td>\n<td>2</td>\n</tr>\n</tbody>\n</table>\n"
        );
    }

    #[test]
    fn renders_empty_tbody_for_no_rows() {
        let table = Table::new(TableSpec::new());
        assert_eq!(table.to_html(), "<table>\n<tbody>\n</tbody>\n</table>\n");
        assert!(table.is_empty());
    }

    #[test]
    fn sections_come_in_fixed_order() {
        let mut table = Table::new(
            TableSpec::new()
                .caption("Cap")
                .widths([10, 20])
                .headers("a,b"),
        );
        table.push([1, 2]);
        let html = table.to_html();
        let caption = html.find("<caption>").unwrap();
        let colgroup = html.find("<colgroup>").unwrap();
        let thead = html.find("<thead>").unwrap();
        let tbody = html.find("<tbody>").unwrap();
        assert!(caption < colgroup && colgroup < thead && thead < tbody);
    }

    #[test]
    fn caption_reuses_a_matching_tag() {
        let caption = Tag::with_attrs("caption", "Cap", Attrs::new().set("class", "c"));
        let table = Table::new(TableSpec::new().caption(caption));
        assert!(table.to_html().contains("<caption class=\"c\">Cap</caption>\n"));
    }

    #[test]
    fn header_column_uses_th_for_the_first_cell_only() {
        let mut table = Table::new(TableSpec::new().header_column(true));
        table.push([1, 2]);
        assert!(table
            .to_html()
            .contains("<tr>\n<th>1</th>\n<td>2</td>\n</tr>\n"));
    }

    #[test]
    fn prebuilt_matching_cells_are_not_rewrapped() {
        let mut table = Table::new(TableSpec::new().td(Attrs::new().set("class", "dropped")));
        table.push([Tag::new("td", 1)]);
        assert!(table.to_html().contains("<tr>\n<td>1</td>\n</tr>\n"));
    }

    #[test]
    fn rendering_twice_gives_the_same_output() {
        let mut table = Table::new(TableSpec::new().headers("h"));
        table.push(["x"]);
        assert_eq!(table.to_html(), table.to_html());
    }

    #[test]
    fn display_matches_to_html() {
        let mut table = Table::new(TableSpec::new());
        table.push(["x"]);
        assert_eq!(table.to_string(), table.to_html());
    }

    #[test]
    fn nested_tables_render_raw() {
        let mut inner = Table::new(TableSpec::new());
        inner.push([1]);
        let mut outer = Table::new(TableSpec::new());
        outer.push([inner]);
        let html = outer.to_html();
        assert!(html.contains("<td><table>\n<tbody>\n<tr>\n<td>1</td>\n"));
    }
}
