//! Renders a small release report as an HTML page on stdout.
//!
//! Run with `cargo run -p report-example > report.html` and open the file in
//! a browser.

use serde_json::json;
use trestle::{table, table_with, Attrs, TableSpec};

struct Release {
    version: &'static str,
    published: &'static str,
    downloads: u64,
    yanked: bool,
}

fn releases() -> Vec<Release> {
    vec![
        Release {
            version: "1.2.0",
            published: "2025-11-03",
            downloads: 54_210,
            yanked: false,
        },
        Release {
            version: "1.1.1",
            published: "2025-06-17",
            downloads: 240_118,
            yanked: true,
        },
        Release {
            version: "1.1.0",
            published: "2025-05-02",
            downloads: 1_024_553,
            yanked: false,
        },
    ]
}

/// Structured rows: each release is transformed into a row of tags and text.
fn release_table() -> String {
    let spec = TableSpec::new()
        .caption("Downloads by release")
        .headers("Version,Published,Downloads,Notes")
        .widths([90, 110, 100, 70])
        .table(Attrs::new().set("class", "releases"))
        .td_with(|_value, index, _row| match index {
            2 => Attrs::new().set("class", "num"),
            _ => Attrs::new(),
        });

    table_with(releases(), spec, |release, t| {
        let version = if release.yanked {
            t.tag_with("del", release.version, [("title", "yanked")])
        } else {
            t.tag("code", release.version)
        };
        let notes = t.link("notes", format!("/releases/{}", release.version));
        (version, release.published, release.downloads, notes)
    })
}

/// Dynamic rows: the same machinery fed from a JSON payload.
fn mirror_table() -> String {
    let payload = json!([
        ["eu-central", 14, "secondary"],
        ["us-east", 32, "primary"],
        ["ap-south", 9, null],
    ]);

    let rows = match payload {
        serde_json::Value::Array(mirrors) => mirrors,
        _ => Vec::new(),
    };

    table(rows, TableSpec::new().headers("Mirror,Nodes,Role"))
}

fn main() {
    print!(
        "<!DOCTYPE html>\n<html>\n<head><title>Release report</title></head>\n<body>\n{}{}</body>\n</html>\n",
        release_table(),
        mirror_table()
    );
}
