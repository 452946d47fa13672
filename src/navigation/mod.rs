//! Navigates the browsing context whenever the region selector changes.
//!
//! The hosting application calls [`RegionNavigation::install`] once its document
//! is ready, and keeps the returned binding for as long as navigation should
//! follow the selector. Dropping the binding leaves the listener attached, use
//! [`RegionNavigation::detach`] to remove it.

mod dom;

use std::fmt;
use std::rc::Rc;
use tracing_batteries::prelude::*;

pub use dom::{Location, Page, SelectElement};

/// The id of the control whose selected value is the navigation target.
pub const REGION_SELECTOR_ID: &str = "region_selector";

/// Raised by a control when its selected value changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

impl ChangeEvent {
    pub fn new<V: Into<String>>(value: V) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// The location of a browsing context.
pub trait Navigator {
    /// Loads `target`. Whether `target` is a reachable address is for the
    /// navigator to discover.
    fn navigate(&self, target: &str);
}

pub type ChangeListener = Rc<dyn Fn(&ChangeEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// A control which reports changes to its selected value.
pub trait ChangeSource {
    fn add_change_listener(&self, listener: ChangeListener) -> ListenerId;

    /// Returns `false` if no listener with this id was attached.
    fn remove_change_listener(&self, id: ListenerId) -> bool;
}

/// The controls of a loaded document, addressable by id.
pub trait Document {
    fn change_source(&self, id: &str) -> Option<Rc<dyn ChangeSource>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    MissingControl(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::MissingControl(id) => {
                write!(f, "the document has no control with the id '{id}'")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Sends the navigator to the value carried by `event`, exactly once and without
/// inspecting it.
pub fn navigate_to_selection(event: &ChangeEvent, navigator: &dyn Navigator) {
    debug!("Navigating to selected region '{}'", event.value);
    navigator.navigate(&event.value);
}

/// A change listener attached to a document's region selector.
pub struct RegionNavigation {
    control: Rc<dyn ChangeSource>,
    listener: ListenerId,
}

impl RegionNavigation {
    pub fn install<D, N>(document: &D, navigator: Rc<N>) -> Result<Self, NavigationError>
    where
        D: Document + ?Sized,
        N: Navigator + 'static,
    {
        let control = document
            .change_source(REGION_SELECTOR_ID)
            .ok_or_else(|| NavigationError::MissingControl(REGION_SELECTOR_ID.to_string()))?;

        let listener = control.add_change_listener(Rc::new(move |event: &ChangeEvent| {
            navigate_to_selection(event, navigator.as_ref())
        }));

        Ok(Self { control, listener })
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    /// Stops following the region selector. Returns `false` if the listener had
    /// already been removed from the control by someone else.
    pub fn detach(self) -> bool {
        self.control.remove_change_listener(self.listener)
    }
}
