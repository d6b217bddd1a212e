use std::cell::RefCell;
use std::rc::Rc;

use todo_view::prelude::*;
use todo_view::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, KeyboardEvent};

mod filter;
mod state;

use filter::Filter;
use state::State;

type Result<T = ()> = todo_view::Result<T>;

struct App {
    document: Document,
    state: RefCell<State>,
}

fn hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// The element an event was dispatched to, if it was an element at all.
fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into().ok()
}

/// Returns `true` if an entry's class list marks it as being edited.
fn is_editing(class_name: &str) -> bool {
    class_name.split_ascii_whitespace().any(|class| class == "editing")
}

/// Class list of an entry with its edit controls open.
fn with_editing(class_name: &str) -> String {
    if is_editing(class_name) {
        return class_name.into();
    }

    format!("{class_name} editing").trim_start().into()
}

/// Id of the to-do entry `el` belongs to.
fn entry_id(el: &Element) -> Option<(Element, u64)> {
    let li = el.closest("li[data-id]").ok()??;
    let id = li.get_attribute("data-id")?.parse().ok()?;

    Some((li, id))
}

impl App {
    fn new() -> Result<Self> {
        let filter = Filter::from_hash(&hash());

        Ok(App {
            document: todo_view::dom::document()?,
            state: RefCell::new(State::load(filter)),
        })
    }

    fn find(&self, selector: &str) -> Result<Element> {
        self.document
            .query_selector(selector)?
            .ok_or_else(|| Error::Dom(format!("no element matching `{selector}`")))
    }

    fn find_input(&self, selector: &str) -> Result<HtmlInputElement> {
        self.find(selector)?
            .dyn_into()
            .map_err(|_| Error::Cast("HtmlInputElement"))
    }

    /// Mutate the state, persist it and render the page again.
    fn update(&self, mutate: impl FnOnce(&mut State)) -> Result {
        {
            let mut state = self.state.borrow_mut();

            mutate(&mut state);
            state.store();
        }

        self.render()
    }

    fn render(&self) -> Result {
        let state = self.state.borrow();
        let active = state.count_active();
        let completed = state.count_completed();

        self.find(".todo-list")?
            .set_inner_html(&render_list(state.filtered_entries()));
        self.find(".todo-count")?
            .set_inner_html(&item_counter(active as i64));

        let clear = self.find(".clear-completed")?;
        let label = clear_completed_label(completed as i64);

        clear.set_text_content(Some(label));
        clear.toggle_attribute_with_force("hidden", label.is_empty())?;

        let empty = state.entries.is_empty();

        self.find(".main")?.toggle_attribute_with_force("hidden", empty)?;
        self.find(".footer")?.toggle_attribute_with_force("hidden", empty)?;
        self.find_input(".toggle-all")?.set_checked(!empty && active == 0);

        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            let link = self.find(&format!(".filters a[href=\"{}\"]", filter.to_href()))?;
            let class = if filter == state.filter { "selected" } else { "" };

            link.set_class_name(class);
        }

        Ok(())
    }

    fn begin_edit(&self, li: &Element, id: u64) -> Result {
        // Entry already has its edit controls open
        if is_editing(&li.class_name()) {
            return Ok(());
        }

        let title = match self.state.borrow().get(id) {
            Some(entry) => entry.title.clone(),
            None => return Ok(()),
        };

        let controls = build_edit_controls(&self.document)?;
        let input = controls.input_element()?;

        input.set_value(&title);
        li.set_class_name(&with_editing(&li.class_name()));
        li.append_child(&controls.container)?;
        input.focus()?;

        Ok(())
    }

    fn finish_edit(&self, input: Element, id: u64) -> Result {
        let title = input
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| Error::Cast("HtmlInputElement"))?
            .value();

        self.update(|state| state.rename(id, &title))
    }

    fn on_list_click(&self, event: Event) -> Result {
        let Some(target) = target_element(&event) else {
            return Ok(());
        };
        let Some((li, id)) = entry_id(&target) else {
            return Ok(());
        };

        if target.matches(".toggle")? {
            self.update(|state| state.toggle(id))
        } else if target.matches(".destroy")? {
            self.update(|state| state.remove(id))
        } else if target.matches("button.edit")? {
            self.begin_edit(&li, id)
        } else if target.closest(".save")?.is_some() {
            let input = li
                .query_selector(".edit-controls > input.edit")?
                .ok_or_else(|| Error::Dom("edit controls are missing".into()))?;

            self.finish_edit(input, id)
        } else if target.matches(".cancel")? {
            self.render()
        } else {
            Ok(())
        }
    }

    fn on_list_keydown(&self, event: KeyboardEvent) -> Result {
        let Some(target) = target_element(&event) else {
            return Ok(());
        };
        if !target.matches("input.edit")? {
            return Ok(());
        }
        let Some((_, id)) = entry_id(&target) else {
            return Ok(());
        };

        match event.key().as_str() {
            "Enter" => self.finish_edit(target, id),
            "Escape" => self.render(),
            _ => Ok(()),
        }
    }

    fn on_new_todo(&self, event: KeyboardEvent) -> Result {
        if event.key() != "Enter" {
            return Ok(());
        }

        let input = self.find_input(".new-todo")?;
        let title = input.value();
        let id = js_sys::Date::now() as u64;

        input.set_value("");

        self.update(|state| {
            state.add(id, &title);
        })
    }

    fn on_toggle_all(&self, _: Event) -> Result {
        let checked = self.find_input(".toggle-all")?.checked();

        self.update(|state| state.set_all(checked))
    }

    fn on_clear_completed(&self, _: Event) -> Result {
        self.update(State::clear_completed)
    }

    fn on_hash_change(&self, _: Event) -> Result {
        self.state.borrow_mut().filter = Filter::from_hash(&hash());

        self.render()
    }
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
fn listen<E>(
    app: &Rc<App>,
    target: &EventTarget,
    event: &str,
    handler: fn(&App, E) -> Result,
) -> Result
where
    E: JsCast + 'static,
{
    let app = app.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Err(err) = handler(&app, event.unchecked_into()) {
            log::error!("{err}");
        }
    });

    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

fn start(app: App) -> Result {
    let app = Rc::new(app);
    let window = web_sys::window().ok_or(Error::NoWindow)?;

    let list = app.find(".todo-list")?;
    let new_todo = app.find(".new-todo")?;
    let toggle_all = app.find(".toggle-all")?;
    let clear = app.find(".clear-completed")?;

    listen(&app, &list, "click", App::on_list_click)?;
    listen(&app, &list, "keydown", App::on_list_keydown)?;
    listen(&app, &new_todo, "keydown", App::on_new_todo)?;
    listen(&app, &toggle_all, "change", App::on_toggle_all)?;
    listen(&app, &clear, "click", App::on_clear_completed)?;
    listen(&app, &window, "hashchange", App::on_hash_change)?;

    app.render()
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

fn main() {
    init_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());

    let app = App::new().unwrap_throw();

    log::debug!("loaded {} to-dos", app.state.borrow().entries.len());

    start(app).unwrap_throw();
}
