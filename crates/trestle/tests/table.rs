use trestle::{
    raw, table, table_with, try_table_with, Attrs, Cell, IntoCell, TableSpec, Tag,
};

// Most expectations here compare against the flattened form so the structure
// stays readable; the exact newline placement has its own test below.
fn flat(html: &str) -> String {
    html.replace('\n', "")
}

#[test]
fn test_basic_table() {
    let html = table(vec![vec![1, 2]], TableSpec::new());
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_exact_newline_layout() {
    let spec = TableSpec::new().caption("Cap").widths([3]).headers("h");
    let html = table([[1]], spec);
    assert_eq!(
        html,
        "<table>\n\
         <caption>Cap</caption>\n\
         <colgroup>\n<col width=\"3\" />\n</colgroup>\n\
         <thead>\n<tr>\n<th>h</th>\n</tr>\n</thead>\n\
         <tbody>\n<tr>\n<td>1</td>\n</tr>\n</tbody>\n\
         </table>\n"
    );
}

#[test]
fn test_empty_input_renders_empty_tbody() {
    let html = table(Vec::<Vec<i32>>::new(), TableSpec::new());
    assert_eq!(flat(&html), "<table><tbody></tbody></table>");
}

#[test]
fn test_cell_content_is_escaped() {
    let html = table([["a&b", "<c>"]], TableSpec::new());
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td>a&amp;b</td><td>&lt;c&gt;</td></tr></tbody></table>"
    );
}

#[test]
fn test_raw_content_is_not_escaped() {
    let html = table([[raw("&")]], TableSpec::new());
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td>&</td></tr></tbody></table>"
    );
}

#[test]
fn test_prebuilt_tag_cells_render_as_markup() {
    let html = table([[Tag::new("b", 1)]], TableSpec::new());
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td><b>1</b></td></tr></tbody></table>"
    );
}

#[test]
fn test_header_column_renders_first_cell_as_th() {
    let html = table([[1, 2]], TableSpec::new().header_column(true));
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><th>1</th><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_headers_from_a_list() {
    let html = table([[1, 2]], TableSpec::new().headers(vec!["a", "b"]));
    assert_eq!(
        flat(&html),
        "<table><thead><tr><th>a</th><th>b</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_headers_from_a_comma_separated_string() {
    let from_string = table([[1, 2]], TableSpec::new().headers("a,b"));
    let from_list = table([[1, 2]], TableSpec::new().headers(vec!["a", "b"]));
    assert_eq!(from_string, from_list);
}

#[test]
fn test_headers_string_drops_a_trailing_comma() {
    let html = table([[1, 2]], TableSpec::new().headers("a,b,"));
    assert_eq!(flat(&html).matches("<th>").count(), 2);
    assert_eq!(html, table([[1, 2]], TableSpec::new().headers("a,b")));
}

#[test]
fn test_empty_headers_string_renders_an_empty_header_row() {
    let html = table([[1]], TableSpec::new().headers(""));
    assert!(flat(&html).contains("<thead><tr></tr></thead>"));
    assert!(!html.contains("<th>"));
}

#[test]
fn test_header_text_is_escaped() {
    let html = table([[1]], TableSpec::new().headers(vec!["a&b"]));
    assert!(html.contains("<th>a&amp;b</th>"));
}

#[test]
fn test_widths_render_a_colgroup_before_the_body() {
    let html = table([[1, 2]], TableSpec::new().widths([3, 4]));
    assert_eq!(
        flat(&html),
        "<table><colgroup><col width=\"3\" /><col width=\"4\" /></colgroup>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_caption() {
    let html = table([[1, 2]], TableSpec::new().caption("Foo"));
    assert_eq!(
        flat(&html),
        "<table><caption>Foo</caption><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_caption_content_is_escaped() {
    let html = table([[1]], TableSpec::new().caption("R&D"));
    assert!(html.contains("<caption>R&amp;D</caption>"));
}

#[test]
fn test_table_attributes() {
    let html = table([[1, 2]], TableSpec::new().table(Attrs::new().set("class", "foo")));
    assert_eq!(
        flat(&html),
        "<table class=\"foo\"><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_tr_attributes_apply_to_header_and_body_rows() {
    let spec = TableSpec::new()
        .headers("a,b")
        .tr(Attrs::new().set("class", "foo"));
    let html = table([[1, 2]], spec);
    assert_eq!(
        flat(&html),
        "<table><thead><tr class=\"foo\"><th>a</th><th>b</th></tr></thead>\
         <tbody><tr class=\"foo\"><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_td_attributes() {
    let html = table([[1, 2]], TableSpec::new().td(Attrs::new().set("class", "foo")));
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td class=\"foo\">1</td><td class=\"foo\">2</td></tr></tbody></table>"
    );
}

#[test]
fn test_th_attributes() {
    let spec = TableSpec::new()
        .headers("a,b")
        .th(Attrs::new().set("class", "foo"));
    let html = table([[1, 2]], spec);
    assert!(html.contains("<th class=\"foo\">a</th>"));
    assert!(html.contains("<th class=\"foo\">b</th>"));
}

#[test]
fn test_attribute_values_are_escaped() {
    let html = table([[1]], TableSpec::new().table(Attrs::new().set("class", "a\"b")));
    assert!(html.starts_with("<table class=\"a&quot;b\">"));
}

#[test]
fn test_attributes_render_sorted_by_name() {
    let attrs = Attrs::new().set("id", "t").set("class", "c").set("width", "9");
    let html = table([[1]], TableSpec::new().table(attrs));
    assert!(html.starts_with("<table class=\"c\" id=\"t\" width=\"9\">"));
}

#[test]
fn test_tr_callback_receives_the_row() {
    let spec = TableSpec::new().tr_with(|row| {
        let joined: String = row.iter().map(Cell::to_string).collect();
        Attrs::new().set("class", format!("foo{joined}"))
    });
    let html = table([[1, 2]], spec);
    assert_eq!(
        flat(&html),
        "<table><tbody><tr class=\"foo12\"><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_tr_callback_sees_the_header_row_too() {
    let spec = TableSpec::new().headers("a,b").tr_with(|row| {
        let joined: String = row.iter().map(Cell::to_string).collect();
        Attrs::new().set("class", format!("foo{joined}"))
    });
    let html = table([[1, 2]], spec);
    assert!(html.contains("<tr class=\"fooab\">"));
    assert!(html.contains("<tr class=\"foo12\">"));
}

#[test]
fn test_td_callback_receives_value_index_and_row() {
    let spec = TableSpec::new().td_with(|value, index, row| {
        let joined: String = row.iter().map(Cell::to_string).collect();
        Attrs::new().set("class", format!("foo{joined}-{value}-{index}"))
    });
    let html = table([[1, 2]], spec);
    assert_eq!(
        flat(&html),
        "<table><tbody><tr>\
         <td class=\"foo12-1-0\">1</td>\
         <td class=\"foo12-2-1\">2</td>\
         </tr></tbody></table>"
    );
}

#[test]
fn test_td_callback_supplies_attrs_for_the_header_column_th() {
    let spec = TableSpec::new()
        .header_column(true)
        .td_with(|_value, index, _row| Attrs::new().set("class", format!("c{index}")));
    let html = table([[1, 2]], spec);
    assert!(html.contains("<th class=\"c0\">1</th>"));
    assert!(html.contains("<td class=\"c1\">2</td>"));
}

#[test]
fn test_th_callback_receives_the_header_text() {
    let spec = TableSpec::new()
        .headers("a,b")
        .th_with(|header| Attrs::new().set("class", format!("foo{header}")));
    let html = table([[1, 2]], spec);
    assert!(html.contains("<th class=\"fooa\">a</th>"));
    assert!(html.contains("<th class=\"foob\">b</th>"));
}

#[test]
fn test_transform_maps_items_to_rows() {
    let html = table_with(vec![vec![1, 2]], TableSpec::new(), |row, _t| {
        row.into_iter().map(|c| c * 2).collect::<Vec<_>>()
    });
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td>2</td><td>4</td></tr></tbody></table>"
    );
}

#[test]
fn test_transform_tag_helper() {
    let html = table_with(vec![vec![1, 2]], TableSpec::new(), |row, t| {
        row.into_iter().map(|c| t.tag("b", c * 2)).collect::<Vec<_>>()
    });
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td><b>2</b></td><td><b>4</b></td></tr></tbody></table>"
    );
}

#[test]
fn test_transform_tag_helper_with_attributes() {
    let html = table_with(vec![vec![1, 2]], TableSpec::new(), |row, t| {
        row.into_iter()
            .map(|c| t.tag_with("b", c * 2, [("1", "1")]))
            .collect::<Vec<_>>()
    });
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td><b 1=\"1\">2</b></td><td><b 1=\"1\">4</b></td></tr></tbody></table>"
    );
}

#[test]
fn test_transform_td_cells_are_not_wrapped_again() {
    let html = table_with(vec![vec![1, 2]], TableSpec::new(), |row, t| {
        row.into_iter().map(|c| t.tag("td", c)).collect::<Vec<_>>()
    });
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_transform_link_helper() {
    let html = table_with([[2]], TableSpec::new(), |row, t| {
        [t.link(row[0], "foo")]
    });
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td><a href=\"foo\">2</a></td></tr></tbody></table>"
    );
}

#[test]
fn test_transform_link_helper_with_attributes() {
    let html = table_with([[4]], TableSpec::new(), |row, t| {
        [t.link_with(row[0], "foo", [("1", "1")])]
    });
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td><a 1=\"1\" href=\"foo\">4</a></td></tr></tbody></table>"
    );
}

#[test]
fn test_transform_raw_helper() {
    let html = table_with([["&"]], TableSpec::new(), |row, t| [t.raw(row[0])]);
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td>&</td></tr></tbody></table>"
    );
}

#[test]
fn test_mixed_type_rows_via_tuples() {
    let html = table(
        vec![(1, "alice", true), (2, "bob", false)],
        TableSpec::new(),
    );
    assert!(html.contains("<td>alice</td>"));
    assert!(html.contains("<td>false</td>"));
}

#[test]
fn test_missing_values_render_empty_cells() {
    let html = table([[Some(1), None]], TableSpec::new());
    assert_eq!(
        flat(&html),
        "<table><tbody><tr><td>1</td><td></td></tr></tbody></table>"
    );
}

#[test]
fn test_try_transform_renders_on_success() {
    let result = try_table_with(["3", "4"], TableSpec::new(), |s, _t| {
        s.parse::<i32>().map(|n| [n, n * n])
    });
    let html = result.expect("all rows parse");
    assert!(html.contains("<td>16</td>"));
}

#[test]
fn test_try_transform_stops_at_the_first_error() {
    let mut seen = 0;
    let result = try_table_with(["3", "x", "4"], TableSpec::new(), |s, _t| {
        seen += 1;
        s.parse::<i32>().map(|n| [n])
    });
    assert!(result.is_err());
    assert_eq!(seen, 2);
}

struct Trusted(String);

impl IntoCell for Trusted {
    fn into_cell(self) -> Cell {
        Cell::Raw(self.0)
    }
}

struct Sku(u32);

impl IntoCell for Sku {
    fn into_cell(self) -> Cell {
        Cell::Text(format!("SKU-{:04}", self.0))
    }
}

#[test]
fn test_application_types_pick_their_own_conversion() {
    let html = table([(Trusted("<span>ok</span>".into()),)], TableSpec::new());
    assert!(html.contains("<td><span>ok</span></td>"));

    let html = table([(Sku(7),)], TableSpec::new());
    assert!(html.contains("<td>SKU-0007</td>"));
}

#[test]
fn test_tables_nest_without_double_escaping() {
    let html = table_with([[1]], TableSpec::new(), |row, _t| {
        let mut inner = trestle::Table::new(TableSpec::new());
        inner.push([row[0]]);
        [inner]
    });
    assert!(flat(&html).contains("<td><table><tbody><tr><td>1</td></tr></tbody></table></td>"));
}
