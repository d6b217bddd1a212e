use gloo_storage::{LocalStorage, Storage};
use todo_view::TodoItem;

use crate::filter::Filter;

const KEY: &str = "todos-vanillajs";

pub struct State {
    pub entries: Vec<TodoItem>,
    pub filter: Filter,
}

impl State {
    pub fn new(entries: Vec<TodoItem>, filter: Filter) -> Self {
        State { entries, filter }
    }

    /// Load entries from `localStorage`, dropping them if they don't parse.
    pub fn load(filter: Filter) -> Self {
        let stored = LocalStorage::raw().get_item(KEY).ok().flatten();

        let entries = match stored.as_deref().map(todo_view::from_json) {
            Some(Ok(entries)) => entries,
            Some(Err(err)) => {
                log::warn!("discarding stored to-dos: {err}");
                Vec::new()
            }
            None => Vec::new(),
        };

        State::new(entries, filter)
    }

    #[inline(never)]
    pub fn store(&self) {
        match todo_view::to_json(&self.entries) {
            Ok(json) => {
                LocalStorage::raw().set_item(KEY, &json).ok();
            }
            Err(err) => log::error!("failed to store to-dos: {err}"),
        }
    }

    pub fn count_active(&self) -> usize {
        self.entries.iter().filter(|e| !e.completed).count()
    }

    pub fn count_completed(&self) -> usize {
        self.entries.len() - self.count_active()
    }

    pub fn filtered_entries(&self) -> impl Iterator<Item = &TodoItem> {
        self.entries
            .iter()
            .filter(|e| self.filter.matches(e.completed))
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut TodoItem> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Add a new entry, ignoring titles that are blank.
    pub fn add(&mut self, id: u64, title: &str) -> bool {
        let title = title.trim();

        if title.is_empty() {
            return false;
        }

        self.entries.push(TodoItem::new(id, title, false));

        true
    }

    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn toggle(&mut self, id: u64) {
        if let Some(entry) = self.get_mut(id) {
            entry.completed ^= true;
        }
    }

    pub fn set_all(&mut self, completed: bool) {
        for entry in self.entries.iter_mut() {
            entry.completed = completed;
        }
    }

    /// Update the title of an entry, removing it when the new title is blank.
    pub fn rename(&mut self, id: u64, title: &str) {
        let title = title.trim();

        if title.is_empty() {
            return self.remove(id);
        }

        if let Some(entry) = self.get_mut(id) {
            title.clone_into(&mut entry.title);
        }
    }

    pub fn clear_completed(&mut self) {
        self.entries.retain(|e| !e.completed);
    }
}
