// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inline edit controls shown in place of a to-do label.

use crate::dom::ElementFactory;
use crate::Result;

/// Detached edit controls: a text input with save and cancel buttons.
///
/// `input` is the same element as the first child of `container`, handed out
/// separately so it can be focused without querying the tree.
#[derive(Clone, Debug)]
pub struct EditControls<E> {
    pub container: E,
    pub input: E,
}

/// Build a fresh set of [`EditControls`](EditControls) using `factory`.
///
/// ```html
/// <div class="edit-controls">
///     <input class="edit">
///     <button class="save"><span class="assistive">Save changes</span>&#x2713;</button>
///     <button class="cancel" aria-label="Cancel changes">&#x2717;</button>
/// </div>
/// ```
pub fn build_edit_controls<F>(factory: &F) -> Result<EditControls<F::Element>>
where
    F: ElementFactory,
{
    let container = factory.create_element("div")?;
    factory.set_class_name(&container, "edit-controls");

    let input = factory.create_element("input")?;
    factory.set_class_name(&input, "edit");

    let save = factory.create_element("button")?;
    factory.set_inner_html(&save, "<span class=\"assistive\">Save changes</span>&#x2713;");
    factory.set_class_name(&save, "save");

    let cancel = factory.create_element("button")?;
    factory.set_inner_html(&cancel, "&#x2717;");
    factory.set_attribute(&cancel, "aria-label", "Cancel changes")?;
    factory.set_class_name(&cancel, "cancel");

    factory.append_child(&container, &input)?;
    factory.append_child(&container, &save)?;
    factory.append_child(&container, &cancel)?;

    log::debug!("built edit controls");

    Ok(EditControls { container, input })
}

#[cfg(feature = "web")]
impl EditControls<web_sys::Element> {
    /// Build edit controls in the global `document`.
    pub fn new() -> Result<Self> {
        build_edit_controls(&crate::dom::document()?)
    }

    /// The `input` as an [`HtmlInputElement`](web_sys::HtmlInputElement),
    /// for focusing it and setting its value.
    pub fn input_element(&self) -> Result<web_sys::HtmlInputElement> {
        use wasm_bindgen::JsCast;

        self.input
            .clone()
            .dyn_into()
            .map_err(|_| crate::Error::Cast("HtmlInputElement"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemoryElement};

    fn with_class(children: &[MemoryElement], tag: &str, class: &str) -> Vec<MemoryElement> {
        children
            .iter()
            .filter(|el| el.tag() == tag && el.class_name() == class)
            .cloned()
            .collect()
    }

    #[test]
    fn container_layout() {
        let controls = build_edit_controls(&MemoryDocument).unwrap();
        let container = &controls.container;

        assert_eq!(container.tag(), "div");
        assert_eq!(container.class_name(), "edit-controls");

        let children = container.children();

        assert_eq!(children.len(), 3);
        assert_eq!(with_class(&children, "input", "edit").len(), 1);
        assert_eq!(with_class(&children, "button", "save").len(), 1);
        assert_eq!(with_class(&children, "button", "cancel").len(), 1);
    }

    #[test]
    fn input_is_inside_container() {
        let controls = build_edit_controls(&MemoryDocument).unwrap();
        let children = controls.container.children();

        assert!(controls.input.ptr_eq(&children[0]));
        assert_eq!(controls.input.class_name(), "edit");
    }

    #[test]
    fn buttons() {
        let controls = build_edit_controls(&MemoryDocument).unwrap();
        let children = controls.container.children();

        let save = &with_class(&children, "button", "save")[0];
        let cancel = &with_class(&children, "button", "cancel")[0];

        assert_eq!(
            save.inner_html(),
            "<span class=\"assistive\">Save changes</span>&#x2713;"
        );
        assert_eq!(cancel.inner_html(), "&#x2717;");
        assert_eq!(cancel.attribute("aria-label").as_deref(), Some("Cancel changes"));
    }

    #[test]
    fn serialized_markup() {
        let controls = build_edit_controls(&MemoryDocument).unwrap();

        assert_eq!(
            controls.container.outer_html(),
            concat!(
                r#"<div class="edit-controls">"#,
                r#"<input class="edit">"#,
                r#"<button class="save"><span class="assistive">Save changes</span>&#x2713;</button>"#,
                r#"<button class="cancel" aria-label="Cancel changes">&#x2717;</button>"#,
                r#"</div>"#,
            )
        );
    }

    #[test]
    fn every_call_builds_new_nodes() {
        let a = build_edit_controls(&MemoryDocument).unwrap();
        let b = build_edit_controls(&MemoryDocument).unwrap();

        assert!(!a.container.ptr_eq(&b.container));
        assert!(!a.input.ptr_eq(&b.input));
    }
}
