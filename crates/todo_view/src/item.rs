// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The [`TodoItem`](TodoItem) record

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single entry on the to-do list.
///
/// The `id` is written into markup as is, the `title` is always escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u64, title: impl Into<String>, completed: bool) -> Self {
        TodoItem {
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Parse a JSON array of records, as stored by the browser app.
///
/// Every record must carry `id`, `title` and `completed`; a record missing
/// any of them fails the whole list with [`Error::Malformed`](crate::Error::Malformed).
#[cfg(feature = "serde")]
pub fn from_json(json: &str) -> crate::Result<Vec<TodoItem>> {
    let items: Vec<TodoItem> = serde_json::from_str(json)?;

    log::debug!("parsed {} to-do records", items.len());

    Ok(items)
}

/// Serialize records into the JSON array [`from_json`] reads.
#[cfg(feature = "serde")]
pub fn to_json(items: &[TodoItem]) -> crate::Result<String> {
    Ok(serde_json::to_string(items)?)
}
