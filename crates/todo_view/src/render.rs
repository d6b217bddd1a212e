// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTML strings for the list, the counter and the clear completed button.

use std::fmt::Write;

use crate::escape::Escaped;
use crate::item::TodoItem;

/// Rough size of a rendered item without its title, used to reserve capacity.
const ITEM_MARKUP_LEN: usize = 320;

/// Append the `<li>` markup for a single `item` to `buf`.
///
/// The `id` is written verbatim in three places, the `title` is escaped,
/// and the `completed` flag toggles both the `completed` class and the
/// `checked` attribute of the checkbox.
pub fn write_item(buf: &mut String, item: &TodoItem) {
    let mut id = itoa::Buffer::new();
    let id = id.format(item.id);

    let (completed, checked) = if item.completed {
        ("completed", "checked")
    } else {
        ("", "")
    };

    buf.extend([
        "<li data-id=\"",
        id,
        "\" class=\"",
        completed,
        "\"><div class=\"view\"><input id=\"to-do-",
        id,
        "\" class=\"toggle\" type=\"checkbox\" ",
        checked,
        "><label for=\"to-do-",
        id,
        "\">",
    ]);

    // Writing to a `String` can't fail
    let _ = write!(buf, "{}", Escaped(&item.title));

    buf.push_str(concat!(
        "</label>",
        "<button aria-label=\"Edit to-do\" class=\"edit\">&#x270e;</button>",
        "<button aria-label=\"Delete to-do\" class=\"destroy\">&#xd7;</button>",
        "</div></li>",
    ));
}

/// Render the `<li>` markup for a single `item`.
pub fn render_item(item: &TodoItem) -> String {
    let mut buf = String::with_capacity(ITEM_MARKUP_LEN + item.title.len());

    write_item(&mut buf, item);

    buf
}

/// Render all `items` into a single HTML string, keeping their order.
///
/// ```
/// use todo_view::{render_list, TodoItem};
///
/// let html = render_list(&[TodoItem::new(1, "Buy milk", false)]);
///
/// assert!(html.starts_with(r#"<li data-id="1" class="">"#));
/// assert!(html.contains("<label for=\"to-do-1\">Buy milk</label>"));
/// ```
pub fn render_list<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a TodoItem>,
{
    let items = items.into_iter();
    let mut buf = String::with_capacity(items.size_hint().0 * ITEM_MARKUP_LEN);
    let mut count = 0;

    for item in items {
        write_item(&mut buf, item);
        count += 1;
    }

    log::trace!("rendered {count} to-do items into {} bytes", buf.len());

    buf
}

/// Counter text for the footer: `<strong>{n}</strong> item{s} left`.
///
/// Only exactly one item is singular, negative counts are rendered as is.
pub fn item_counter(active: i64) -> String {
    let mut n = itoa::Buffer::new();
    let plural = if active == 1 { "" } else { "s" };

    ["<strong>", n.format(active), "</strong> item", plural, " left"].concat()
}

/// Label for the clear completed button, empty when there is nothing to clear.
pub fn clear_completed_label(completed: i64) -> &'static str {
    if completed > 0 {
        "Clear completed"
    } else {
        ""
    }
}
