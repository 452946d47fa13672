use super::{ChangeEvent, ChangeListener, ChangeSource, Document, ListenerId, Navigator};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

type ReadyCallback = Box<dyn FnOnce(&Page)>;

/// An in-memory document holding select controls and a location.
pub struct Page {
    elements: RefCell<HashMap<String, Rc<SelectElement>>>,
    location: Rc<Location>,
    pending: RefCell<Option<Vec<ReadyCallback>>>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            elements: RefCell::new(HashMap::new()),
            location: Rc::new(Location::default()),
            pending: RefCell::new(Some(Vec::new())),
        }
    }

    pub fn add_select<I, S>(&self, id: &str, options: I) -> Rc<SelectElement>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let element = Rc::new(SelectElement::new(options));
        self.elements
            .borrow_mut()
            .insert(id.to_string(), element.clone());
        element
    }

    pub fn location(&self) -> Rc<Location> {
        self.location.clone()
    }

    /// Runs `callback` once the page has finished loading, or immediately if it already has.
    pub fn when_ready<F>(&self, callback: F)
    where
        F: FnOnce(&Page) + 'static,
    {
        if let Some(callbacks) = self.pending.borrow_mut().as_mut() {
            callbacks.push(Box::new(callback));
            return;
        }

        callback(self);
    }

    /// Marks the page as loaded and runs the queued ready callbacks. Later calls do nothing.
    pub fn finish_loading(&self) {
        let callbacks = self.pending.borrow_mut().take().unwrap_or_default();
        for callback in callbacks {
            callback(self);
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for Page {
    fn change_source(&self, id: &str) -> Option<Rc<dyn ChangeSource>> {
        self.elements
            .borrow()
            .get(id)
            .cloned()
            .map(|element| element as Rc<dyn ChangeSource>)
    }
}

/// A dropdown control. Selecting a value dispatches a change event to every attached listener.
pub struct SelectElement {
    options: Vec<String>,
    value: RefCell<String>,
    listeners: RefCell<Vec<(ListenerId, ChangeListener)>>,
    next_listener: Cell<u64>,
}

impl SelectElement {
    fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let value = options.first().cloned().unwrap_or_default();

        Self {
            options,
            value: RefCell::new(value),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    pub fn select<V: Into<String>>(&self, value: V) {
        let value = value.into();
        *self.value.borrow_mut() = value.clone();

        // Listeners may attach or detach while the event is being dispatched.
        let listeners: Vec<ChangeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        let event = ChangeEvent::new(value);
        for listener in listeners {
            listener(&event);
        }
    }
}

impl ChangeSource for SelectElement {
    fn add_change_listener(&self, listener: ChangeListener) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_change_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

/// The address a page is showing, along with every navigation it has made.
pub struct Location {
    href: RefCell<String>,
    history: RefCell<Vec<String>>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            href: RefCell::new("about:blank".to_string()),
            history: RefCell::new(Vec::new()),
        }
    }
}

impl Location {
    pub fn href(&self) -> String {
        self.href.borrow().clone()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for Location {
    fn navigate(&self, target: &str) {
        *self.href.borrow_mut() = target.to_string();
        self.history.borrow_mut().push(target.to_string());
    }
}
