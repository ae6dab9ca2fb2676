//! Browser glue for the Scribe transcript pages.
//!
//! The server renders plain HTML; this crate, compiled to wasm, adds the
//! dark/light theme toggle and fills the transcript modal from whichever
//! link opened it.

pub mod config;
pub mod error;
pub mod logging;
pub mod modal;
pub mod page;
pub mod theme;
pub mod web;
pub mod wiring;

use std::rc::Rc;

use tracing::{info, warn};

pub use config::GlueConfig;
pub use error::GlueError;
pub use wiring::{wire_page, WiringReport};

/// Entry point for the browser: once the DOM is parsed, read the config,
/// start logging and wire the page.
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let page_document = document.clone();
    let ready = web::when_dom_ready(&document, move || boot(&window, page_document));
    if let Err(e) = ready {
        web_sys::console::error_1(&format!("Could not wait for DOMContentLoaded: {}", e).into());
    }
}

fn boot(window: &web_sys::Window, document: web_sys::Document) {
    let (config, config_error) = config::load(window);
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("Ignoring page config: {}", e);
    }

    let store = Rc::new(web::LocalStorage::open(window));
    let report = wire_page(&web::WebPage::new(document), store, &config);
    info!(
        "Scribe glue ready (theme: {:?}, modal: {})",
        report.theme, report.modal
    );
}
