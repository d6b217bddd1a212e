// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # todo_view
//!
//! _HTML fragments for a TodoMVC list._
//!
//! **todo_view** turns plain to-do records into the markup a TodoMVC page
//! expects: the `<li>` entries of the list, the footer counter and the label
//! of the clear completed button. All of these are plain strings ready to be
//! set as `innerHTML`, with every title escaped on the way in.
//!
//! The inline edit controls are built as detached elements instead, through
//! an [`ElementFactory`](dom::ElementFactory). In the browser that's the
//! [`web_sys::Document`], everywhere else the [`MemoryDocument`](memory::MemoryDocument)
//! does the same job in memory.
//!
//! ### Rendering a list
//!
//! ```rust
//! use todo_view::prelude::*;
//!
//! let items = [
//!     TodoItem::new(1, "Buy milk", false),
//!     TodoItem::new(2, "<script>", true),
//! ];
//!
//! let list = render_list(&items);
//!
//! assert!(list.contains(r#"<li data-id="2" class="completed">"#));
//! assert!(list.contains("&lt;script&gt;"));
//!
//! assert_eq!(item_counter(1), "<strong>1</strong> item left");
//! assert_eq!(clear_completed_label(1), "Clear completed");
//! ```
//!
//! ### Edit controls
//!
//! ```rust
//! use todo_view::prelude::*;
//! use todo_view::memory::MemoryDocument;
//!
//! let controls = build_edit_controls(&MemoryDocument).unwrap();
//!
//! assert_eq!(controls.input.class_name(), "edit");
//! assert!(controls.container.children()[0].ptr_eq(&controls.input));
//! ```

mod error;

pub mod controls;
pub mod dom;
pub mod escape;
pub mod item;
pub mod memory;
pub mod render;

pub use controls::{build_edit_controls, EditControls};
pub use error::{Error, Result};
pub use escape::{escape, escape_opt, Escaped};
pub use item::TodoItem;
pub use render::{clear_completed_label, item_counter, render_item, render_list, write_item};

#[cfg(feature = "serde")]
pub use item::{from_json, to_json};

/// The prelude module with most commonly used types.
pub mod prelude {
    pub use crate::dom::ElementFactory;
    pub use crate::{build_edit_controls, EditControls, TodoItem};
    pub use crate::{clear_completed_label, escape, item_counter, render_list};
}
