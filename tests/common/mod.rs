//! In-memory stand-ins for the page, its elements and local storage.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use scribe_web::page::{EventSource, Page, PageElement, PreferenceStore};
use scribe_web::GlueError;

type TriggerHandler = Box<dyn FnMut(Option<FakeElement>)>;

#[derive(Default)]
struct Node {
    classes: BTreeSet<String>,
    text: String,
    attributes: HashMap<String, String>,
    children: HashMap<String, FakeElement>,
    click_handlers: Vec<Box<dyn FnMut()>>,
    event_handlers: HashMap<String, Vec<TriggerHandler>>,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_child(self, selector: &str, child: &FakeElement) -> Self {
        self.0
            .borrow_mut()
            .children
            .insert(selector.to_string(), child.clone());
        self
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn href(&self) -> Option<String> {
        self.0.borrow().attributes.get("href").cloned()
    }

    pub fn click_handler_count(&self) -> usize {
        self.0.borrow().click_handlers.len()
    }

    pub fn handler_count(&self, event: &str) -> usize {
        self.0
            .borrow()
            .event_handlers
            .get(event)
            .map_or(0, |h| h.len())
    }

    /// Run every click handler. Handlers are taken out while they run so
    /// they can freely touch this element.
    pub fn click(&self) {
        let mut handlers = std::mem::take(&mut self.0.borrow_mut().click_handlers);
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut node = self.0.borrow_mut();
        handlers.append(&mut node.click_handlers);
        node.click_handlers = handlers;
    }

    pub fn fire(&self, event: &str, trigger: Option<&FakeElement>) {
        let mut handlers = self
            .0
            .borrow_mut()
            .event_handlers
            .remove(event)
            .unwrap_or_default();
        for handler in handlers.iter_mut() {
            handler(trigger.cloned());
        }
        let mut node = self.0.borrow_mut();
        let slot = node.event_handlers.entry(event.to_string()).or_default();
        handlers.append(slot);
        *slot = handlers;
    }
}

impl PageElement for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), GlueError> {
        self.0.borrow_mut().classes.insert(class.to_string());
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> Result<bool, GlueError> {
        let mut node = self.0.borrow_mut();
        if node.classes.remove(class) {
            Ok(false)
        } else {
            node.classes.insert(class.to_string());
            Ok(true)
        }
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_href(&self, url: &str) -> Result<(), GlueError> {
        self.0
            .borrow_mut()
            .attributes
            .insert("href".to_string(), url.to_string());
        Ok(())
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.0.borrow().children.get(selector).cloned()
    }
}

impl EventSource for FakeElement {
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<(), GlueError> {
        self.0.borrow_mut().click_handlers.push(handler);
        Ok(())
    }

    fn on_trigger_event(&self, event: &str, handler: TriggerHandler) -> Result<(), GlueError> {
        self.0
            .borrow_mut()
            .event_handlers
            .entry(event.to_string())
            .or_default()
            .push(handler);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakePage {
    elements: HashMap<String, FakeElement>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, element: &FakeElement) -> Self {
        self.elements.insert(id.to_string(), element.clone());
        self
    }
}

impl Page for FakePage {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements.get(id).cloned()
    }
}

#[derive(Default)]
pub struct FakeStore {
    values: RefCell<HashMap<String, String>>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
}

impl FakeStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_value(key: &str, value: &str) -> Rc<Self> {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Rc::new(store)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for FakeStore {
    fn load(&self, key: &str) -> Result<Option<String>, GlueError> {
        if self.fail_reads.get() {
            return Err(GlueError::Storage("read refused".to_string()));
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), GlueError> {
        if self.fail_writes.get() {
            return Err(GlueError::Storage("quota exceeded".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Root container and toggle under the stock ids.
pub fn theme_page() -> (FakePage, FakeElement, FakeElement) {
    let root = FakeElement::new();
    let toggle = FakeElement::new();
    let page = FakePage::new().with("body", &root).with("dark-toggle", &toggle);
    (page, root, toggle)
}

/// Modal with its text region and download link under the stock ids.
pub fn modal_page() -> (FakePage, FakeElement, FakeElement, FakeElement) {
    let display = FakeElement::new();
    let modal = FakeElement::new().with_child(".modal-pre", &display);
    let download = FakeElement::new();
    let page = FakePage::new()
        .with("textModal", &modal)
        .with("modal-download", &download);
    (page, modal, display, download)
}
