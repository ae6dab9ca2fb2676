//! The slice of the page the glue code talks to.
//!
//! Behaviors are written against these traits instead of `web_sys` directly,
//! so the same setup code runs against the live document in the browser and
//! against in-memory fakes in tests.

use crate::error::GlueError;

/// A single element on the page.
pub trait PageElement: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str) -> Result<(), GlueError>;

    /// Flip `class` and return whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> Result<bool, GlueError>;

    /// Replace the element's children with a single text node.
    /// The text is never parsed as markup.
    fn set_text(&self, text: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_href(&self, url: &str) -> Result<(), GlueError>;

    /// First descendant matching a CSS selector.
    fn find(&self, selector: &str) -> Option<Self>;
}

/// Handler registration on an element. Handlers stay attached for the
/// lifetime of the page.
pub trait EventSource: PageElement {
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<(), GlueError>;

    /// Subscribe to a named event that records the element which caused it
    /// (e.g. a modal's `relatedTarget`). The handler receives `None` when the
    /// event carries no such element.
    fn on_trigger_event(
        &self,
        event: &str,
        handler: Box<dyn FnMut(Option<Self>)>,
    ) -> Result<(), GlueError>;
}

pub trait Page {
    type Element: EventSource;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn require(&self, id: &str) -> Result<Self::Element, GlueError> {
        self.element_by_id(id)
            .ok_or_else(|| GlueError::MissingElement(format!("#{}", id)))
    }
}

/// Synchronous key/value storage for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, GlueError>;

    fn save(&self, key: &str, value: &str) -> Result<(), GlueError>;
}
