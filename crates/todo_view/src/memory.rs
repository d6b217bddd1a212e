// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A tiny in-memory element tree implementing [`ElementFactory`](ElementFactory).
//!
//! Useful for tests and for serializing edit controls outside of a browser.

use std::cell::{Ref, RefCell};
use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::dom::ElementFactory;
use crate::escape::Escaped;
use crate::{Error, Result};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Factory for [`MemoryElement`](MemoryElement)s.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryDocument;

#[derive(Default)]
struct Node {
    tag: &'static str,
    class: String,
    attributes: Vec<(String, String)>,
    inner_html: String,
    children: Vec<MemoryElement>,
}

/// Shared handle to an element. Clones point to the same element.
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    fn node(&self) -> Ref<'_, Node> {
        self.0.borrow()
    }

    pub fn tag(&self) -> &'static str {
        self.node().tag
    }

    pub fn class_name(&self) -> String {
        self.node().class.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn inner_html(&self) -> String {
        self.node().inner_html.clone()
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.node().children.clone()
    }

    /// Returns `true` if both handles point to the same element.
    pub fn ptr_eq(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if `other` is this element or one of its descendants.
    pub fn contains(&self, other: &MemoryElement) -> bool {
        self.ptr_eq(other) || self.node().children.iter().any(|child| child.contains(other))
    }

    /// Serialize this element and everything under it.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();

        self.write_html(&mut out);

        out
    }

    fn write_html(&self, out: &mut String) {
        use std::fmt::Write;

        let node = self.node();

        out.push('<');
        out.push_str(node.tag);

        let class = (!node.class.is_empty()).then_some(("class", node.class.as_str()));
        let attributes = node.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()));

        for (name, value) in class.into_iter().chain(attributes) {
            // Writing to a `String` can't fail
            let _ = write!(out, " {name}=\"{}\"", Escaped(value));
        }

        out.push('>');

        if VOID_ELEMENTS.contains(&node.tag) {
            return;
        }

        // Children appended after `innerHTML` was set follow its markup
        out.push_str(&node.inner_html);

        for child in &node.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(node.tag);
        out.push('>');
    }
}

impl Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outer_html())
    }
}

impl ElementFactory for MemoryDocument {
    type Element = MemoryElement;

    fn create_element(&self, tag: &'static str) -> Result<MemoryElement> {
        Ok(MemoryElement(Rc::new(RefCell::new(Node {
            tag,
            ..Node::default()
        }))))
    }

    fn set_class_name(&self, el: &MemoryElement, class: &str) {
        el.0.borrow_mut().class = class.into();
    }

    fn set_inner_html(&self, el: &MemoryElement, html: &str) {
        let mut node = el.0.borrow_mut();

        node.inner_html = html.into();
        node.children.clear();
    }

    fn set_attribute(&self, el: &MemoryElement, name: &str, value: &str) -> Result<()> {
        if name == "class" {
            self.set_class_name(el, value);
            return Ok(());
        }

        let mut node = el.0.borrow_mut();

        match node.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, old)) => *old = value.into(),
            None => node.attributes.push((name.into(), value.into())),
        }

        Ok(())
    }

    fn append_child(&self, parent: &MemoryElement, child: &MemoryElement) -> Result<()> {
        if child.contains(parent) {
            return Err(Error::Dom(format!(
                "HierarchyRequestError: can't append <{}> to itself or its descendant",
                child.tag()
            )));
        }

        parent.0.borrow_mut().children.push(child.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_serialize() {
        let doc = MemoryDocument;
        let ul = doc.create_element("ul").unwrap();
        let li = doc.create_element("li").unwrap();

        doc.set_class_name(&ul, "todo-list");
        doc.set_attribute(&li, "data-id", "1").unwrap();
        doc.set_inner_html(&li, "<b>hi</b>");
        doc.append_child(&ul, &li).unwrap();

        assert_eq!(
            ul.outer_html(),
            r#"<ul class="todo-list"><li data-id="1"><b>hi</b></li></ul>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let doc = MemoryDocument;
        let input = doc.create_element("input").unwrap();

        doc.set_attribute(&input, "value", "\"quoted\"").unwrap();

        assert_eq!(input.outer_html(), r#"<input value="&quot;quoted&quot;">"#);
    }

    #[test]
    fn attributes_are_replaced() {
        let doc = MemoryDocument;
        let el = doc.create_element("button").unwrap();

        doc.set_attribute(&el, "aria-label", "one").unwrap();
        doc.set_attribute(&el, "aria-label", "two").unwrap();
        doc.set_attribute(&el, "class", "save").unwrap();

        assert_eq!(el.attribute("aria-label").as_deref(), Some("two"));
        assert_eq!(el.attribute("missing"), None);
        assert_eq!(el.class_name(), "save");
        assert_eq!(el.outer_html(), r#"<button class="save" aria-label="two"></button>"#);
    }

    #[test]
    fn handles_share_identity() {
        let doc = MemoryDocument;
        let a = doc.create_element("div").unwrap();
        let b = doc.create_element("div").unwrap();
        let a2 = a.clone();

        assert!(a.ptr_eq(&a2));
        assert!(!a.ptr_eq(&b));

        doc.set_class_name(&a2, "changed");

        assert_eq!(a.class_name(), "changed");
    }

    #[test]
    fn append_rejects_cycles() {
        let doc = MemoryDocument;
        let div = doc.create_element("div").unwrap();
        let ul = doc.create_element("ul").unwrap();
        let li = doc.create_element("li").unwrap();

        doc.append_child(&div, &ul).unwrap();
        doc.append_child(&ul, &li).unwrap();

        assert!(matches!(doc.append_child(&div, &div), Err(Error::Dom(_))));
        assert!(matches!(doc.append_child(&li, &div), Err(Error::Dom(_))));
        assert!(matches!(doc.append_child(&li, &ul), Err(Error::Dom(_))));

        assert!(div.contains(&li));
        assert!(!li.contains(&div));
        assert_eq!(div.outer_html(), "<div><ul><li></li></ul></div>");
    }

    #[test]
    fn inner_html_drops_children() {
        let doc = MemoryDocument;
        let div = doc.create_element("div").unwrap();
        let span = doc.create_element("span").unwrap();

        doc.append_child(&div, &span).unwrap();
        doc.set_inner_html(&div, "text");

        assert!(div.children().is_empty());
        assert_eq!(div.outer_html(), "<div>text</div>");
    }
}
