//! `web_sys` implementations of the page traits.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::GlueError;
use crate::page::{EventSource, Page, PageElement, PreferenceStore};

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl PageElement for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), GlueError> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|e| GlueError::Dom(js_error(e)))
    }

    fn toggle_class(&self, class: &str) -> Result<bool, GlueError> {
        self.0
            .class_list()
            .toggle(class)
            .map_err(|e| GlueError::Dom(js_error(e)))
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_href(&self, url: &str) -> Result<(), GlueError> {
        match self.0.dyn_ref::<web_sys::HtmlAnchorElement>() {
            Some(anchor) => {
                anchor.set_href(url);
                Ok(())
            }
            None => self
                .0
                .set_attribute("href", url)
                .map_err(|e| GlueError::Dom(js_error(e))),
        }
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(Self)
    }
}

impl EventSource for WebElement {
    fn on_click(&self, mut handler: Box<dyn FnMut()>) -> Result<(), GlueError> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            handler();
        });
        self.0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| GlueError::Dom(js_error(e)))?;
        closure.forget();
        Ok(())
    }

    fn on_trigger_event(
        &self,
        event: &str,
        mut handler: Box<dyn FnMut(Option<Self>)>,
    ) -> Result<(), GlueError> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            // Bootstrap puts the trigger on a plain `relatedTarget` property
            // of its custom event.
            let trigger = js_sys::Reflect::get(&ev, &JsValue::from_str("relatedTarget"))
                .ok()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(WebElement);
            handler(trigger);
        });
        self.0
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| GlueError::Dom(js_error(e)))?;
        closure.forget();
        Ok(())
    }
}

pub struct WebPage(web_sys::Document);

impl WebPage {
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }
}

impl Page for WebPage {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }
}

/// `window.localStorage`. Browsers may refuse access (privacy modes,
/// sandboxed frames), in which case every read is empty and every write fails.
pub struct LocalStorage(Option<web_sys::Storage>);

impl LocalStorage {
    pub fn open(window: &web_sys::Window) -> Self {
        Self(window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, GlueError> {
        match &self.0 {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| GlueError::Storage(js_error(e))),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), GlueError> {
        match &self.0 {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| GlueError::Storage(js_error(e))),
            None => Err(GlueError::Storage("No local storage".to_string())),
        }
    }
}

/// Whether a document in `ready_state` is still being parsed.
pub fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Run `f` once the document has been parsed.
pub fn when_dom_ready<F>(document: &web_sys::Document, f: F) -> Result<(), GlueError>
where
    F: FnOnce() + 'static,
{
    if !still_parsing(&document.ready_state()) {
        f();
        return Ok(());
    }
    let callback = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|e| GlueError::Dom(js_error(e)))
}
