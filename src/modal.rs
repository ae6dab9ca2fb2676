//! Transcript modal.
//!
//! Any element on the page can open the modal as long as it carries the
//! content and download attributes; the modal framework records it as the
//! trigger of the show event and we copy its payload across.

use tracing::{debug, warn};

use crate::config::ModalConfig;
use crate::error::GlueError;
use crate::page::{EventSource, Page, PageElement};

/// An attribute that is present but empty counts as missing.
fn non_empty_attribute<E: PageElement>(element: &E, name: &str) -> Option<String> {
    element.attribute(name).filter(|value| !value.is_empty())
}

/// What a trigger element asks the modal to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalPayload {
    pub text: String,
    pub download_url: String,
}

impl ModalPayload {
    pub fn from_trigger<E: PageElement>(trigger: &E, config: &ModalConfig) -> Self {
        Self {
            text: non_empty_attribute(trigger, &config.content_attribute).unwrap_or_default(),
            download_url: non_empty_attribute(trigger, &config.download_attribute)
                .unwrap_or_else(|| config.fallback_href.clone()),
        }
    }

    pub fn render_into<E: PageElement>(&self, display: &E, download: &E) -> Result<(), GlueError> {
        display.set_text(&self.text);
        download.set_href(&self.download_url)
    }
}

/// Wire the modal's show event. Returns `Ok(false)` when the page has no
/// modal, which is normal for pages without transcripts.
pub fn install<P: Page>(page: &P, config: &ModalConfig) -> Result<bool, GlueError> {
    let Some(modal) = page.element_by_id(&config.modal_id) else {
        debug!("No #{} on this page, skipping modal setup", config.modal_id);
        return Ok(false);
    };
    let display = modal
        .find(&config.display_selector)
        .ok_or_else(|| GlueError::MissingElement(config.display_selector.clone()))?;
    let download = page.require(&config.download_id)?;

    let config = config.clone();
    let event = config.show_event.clone();
    modal.on_trigger_event(
        &event,
        Box::new(move |trigger| {
            // Programmatic opens carry no trigger; the modal keeps its last content.
            let Some(trigger) = trigger else {
                return;
            };
            let payload = ModalPayload::from_trigger(&trigger, &config);
            debug!(
                "Showing {} chars, download {}",
                payload.text.chars().count(),
                payload.download_url
            );
            if let Err(e) = payload.render_into(&display, &download) {
                warn!("Failed to update modal: {}", e);
            }
        }),
    )?;

    Ok(true)
}
