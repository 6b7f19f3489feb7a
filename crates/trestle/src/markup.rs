//! Markup helpers handed to row transforms.

use crate::attrs::Attrs;
use crate::cell::{IntoCell, Raw};
use crate::tag::Tag;

/// Helper handle passed to the transform in [`table_with`](crate::table_with)
/// and [`try_table_with`](crate::try_table_with).
///
/// Everything here is a thin constructor; the handle exists so a transform
/// can build tags and links without importing the types one by one.
///
/// # Example
///
/// ```
/// use trestle::{table_with, TableSpec};
///
/// let html = table_with([("docs", "/docs")], TableSpec::new(), |(name, href), t| {
///     (t.tag("b", name), t.link(name, href))
/// });
/// assert!(html.contains("<td><a href=\"/docs\">docs</a>\n</td>"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Markup;

impl Markup {
    /// Wraps `content` in an element, reusing a matching prebuilt tag.
    pub fn tag(&self, name: impl Into<String>, content: impl IntoCell) -> Tag {
        Tag::wrap(name, content, Attrs::new())
    }

    /// Like [`tag`](Self::tag), with attributes. The attributes are dropped
    /// when the content is already a tag of the same name.
    pub fn tag_with(
        &self,
        name: impl Into<String>,
        content: impl IntoCell,
        attrs: impl Into<Attrs>,
    ) -> Tag {
        Tag::wrap(name, content, attrs)
    }

    /// An `<a>` around `text` pointing at `href`.
    pub fn link(&self, text: impl IntoCell, href: impl Into<String>) -> Tag {
        self.link_with(text, href, Attrs::new())
    }

    /// Like [`link`](Self::link), with extra attributes. `href` is set last,
    /// so it wins over an `href` in `attrs`.
    pub fn link_with(
        &self,
        text: impl IntoCell,
        href: impl Into<String>,
        attrs: impl Into<Attrs>,
    ) -> Tag {
        Tag::wrap("a", text, attrs.into().set("href", href))
    }

    /// Marks a string as trusted markup.
    pub fn raw(&self, html: impl Into<String>) -> Raw {
        Raw::new(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_wraps_content() {
        let t = Markup;
        assert_eq!(t.tag("b", 4).to_html(), "<b>4</b>\n");
    }

    #[test]
    fn tag_reuses_matching_tags() {
        let t = Markup;
        let td = t.tag("td", 1);
        assert_eq!(t.tag("td", td.clone()), td);
    }

    #[test]
    fn link_sets_href() {
        let t = Markup;
        assert_eq!(t.link(2, "foo").to_html(), "<a href=\"foo\">2</a>\n");
    }

    #[test]
    fn link_with_merges_attrs_sorted() {
        let t = Markup;
        let link = t.link_with(4, "foo", [("1", "1")]);
        assert_eq!(link.to_html(), "<a 1=\"1\" href=\"foo\">4</a>\n");
    }

    #[test]
    fn link_href_wins_over_attrs() {
        let t = Markup;
        let link = t.link_with("x", "real", [("href", "stale")]);
        assert_eq!(link.attrs().get("href"), Some("real"));
    }

    #[test]
    fn raw_passes_through() {
        let t = Markup;
        assert_eq!(t.raw("<hr>").as_str(), "<hr>");
    }
}
