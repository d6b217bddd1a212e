// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abstraction over whatever constructs DOM elements.
//!
//! In the browser that's the [`Document`](web_sys::Document), in tests and
//! outside of wasm it's the [`MemoryDocument`](crate::memory::MemoryDocument).

use crate::Result;

/// Capability of creating and assembling detached DOM elements.
pub trait ElementFactory {
    /// Handle to an element. Cloning the handle must not clone the element.
    type Element: Clone;

    /// `document.createElement(tag)`
    fn create_element(&self, tag: &'static str) -> Result<Self::Element>;

    /// `el.className = class`
    fn set_class_name(&self, el: &Self::Element, class: &str);

    /// `el.innerHTML = html`
    fn set_inner_html(&self, el: &Self::Element, html: &str);

    /// `el.setAttribute(name, value)`
    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str) -> Result<()>;

    /// `parent.appendChild(child)`
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;
}

impl<F: ElementFactory> ElementFactory for &F {
    type Element = F::Element;

    fn create_element(&self, tag: &'static str) -> Result<Self::Element> {
        (**self).create_element(tag)
    }

    fn set_class_name(&self, el: &Self::Element, class: &str) {
        (**self).set_class_name(el, class)
    }

    fn set_inner_html(&self, el: &Self::Element, html: &str) {
        (**self).set_inner_html(el, html)
    }

    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str) -> Result<()> {
        (**self).set_attribute(el, name, value)
    }

    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()> {
        (**self).append_child(parent, child)
    }
}

#[cfg(feature = "web")]
pub use self::web::document;

#[cfg(feature = "web")]
mod web {
    use web_sys::{Document, Element};

    use super::ElementFactory;
    use crate::{Error, Result};

    /// Get the global `document`, failing when not running in a browser.
    pub fn document() -> Result<Document> {
        web_sys::window()
            .ok_or(Error::NoWindow)?
            .document()
            .ok_or(Error::NoDocument)
    }

    impl ElementFactory for Document {
        type Element = Element;

        fn create_element(&self, tag: &'static str) -> Result<Element> {
            Ok(Document::create_element(self, tag)?)
        }

        fn set_class_name(&self, el: &Element, class: &str) {
            el.set_class_name(class);
        }

        fn set_inner_html(&self, el: &Element, html: &str) {
            el.set_inner_html(html);
        }

        fn set_attribute(&self, el: &Element, name: &str, value: &str) -> Result<()> {
            Ok(el.set_attribute(name, value)?)
        }

        fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
            parent.append_child(child)?;

            Ok(())
        }
    }
}
