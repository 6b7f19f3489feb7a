//! A single HTML element: name, attributes, content.

use std::fmt;

use crate::attrs::Attrs;
use crate::cell::{Cell, IntoCell};

/// One HTML element.
///
/// Rendering emits `<name attrs>content</name>` with a newline after the
/// closing tag. Content goes through [`Cell`] rendering, so text is escaped
/// and nested tags emit their own markup.
///
/// # Example
///
/// ```
/// use trestle::{Attrs, Tag};
///
/// let tag = Tag::with_attrs("a", "R&D", Attrs::new().set("href", "/rd"));
/// assert_eq!(tag.to_html(), "<a href=\"/rd\">R&amp;D</a>\n");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    name: String,
    content: Cell,
    attrs: Attrs,
}

impl Tag {
    /// An element with no attributes.
    pub fn new(name: impl Into<String>, content: impl IntoCell) -> Self {
        Tag {
            name: name.into(),
            content: content.into_cell(),
            attrs: Attrs::new(),
        }
    }

    /// An element with attributes.
    pub fn with_attrs(
        name: impl Into<String>,
        content: impl IntoCell,
        attrs: impl Into<Attrs>,
    ) -> Self {
        Tag {
            name: name.into(),
            content: content.into_cell(),
            attrs: attrs.into(),
        }
    }

    /// Wraps `content` in an element named `name`, unless the content is
    /// already a tag of that name, in which case the existing tag is
    /// returned unchanged and `attrs` is dropped. This is what keeps a
    /// hand-built `<td>` from being wrapped in a second `<td>`.
    pub fn wrap(name: impl Into<String>, content: impl IntoCell, attrs: impl Into<Attrs>) -> Self {
        let name = name.into();
        match content.into_cell() {
            Cell::Tag(tag) if tag.name == name => *tag,
            content => Tag {
                name,
                content,
                attrs: attrs.into(),
            },
        }
    }

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// The element's content.
    pub fn content(&self) -> &Cell {
        &self.content
    }

    /// The opening tag, e.g. `<a href="/rd">`.
    pub fn open(&self) -> String {
        let mut out = String::new();
        write_open(&mut out, &self.name, &self.attrs);
        out
    }

    /// The rendered content between the tags.
    pub fn inner_html(&self) -> String {
        self.content.to_html()
    }

    /// The closing tag with its trailing newline, e.g. `</a>\n`.
    pub fn close(&self) -> String {
        let mut out = String::new();
        write_close(&mut out, &self.name);
        out
    }

    /// The complete element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        write_open(out, &self.name, &self.attrs);
        self.content.write_html(out);
        write_close(out, &self.name);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

pub(crate) fn write_open(out: &mut String, name: &str, attrs: &Attrs) {
    out.push('<');
    out.push_str(name);
    if !attrs.is_empty() {
        out.push(' ');
        attrs.write_html(out);
    }
    out.push('>');
}

pub(crate) fn write_close(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}
