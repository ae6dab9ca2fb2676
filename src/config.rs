//! Page configuration.
//!
//! Every id, selector and label the glue code relies on has a default that
//! matches the stock templates. A page can override any subset of them,
//! either through a `window.scribeConfig` object or an inline
//! `<script type="application/json" id="scribe-config">` block.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::GlueError;

/// Global holding a config object set by the page before the bundle loads.
pub const CONFIG_GLOBAL: &str = "scribeConfig";
/// Id of the inline JSON config block.
pub const CONFIG_SCRIPT_ID: &str = "scribe-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlueConfig {
    /// `EnvFilter` directive, e.g. "info" or "scribe_web=debug".
    pub log_level: String,
    pub theme: ThemeConfig,
    pub modal: ModalConfig,
}

impl Default for GlueConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            theme: ThemeConfig::default(),
            modal: ModalConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub root_id: String,
    pub toggle_id: String,
    pub storage_key: String,
    pub marker_class: String,
    pub dark_label: String,
    pub light_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            root_id: "body".to_string(),
            toggle_id: "dark-toggle".to_string(),
            storage_key: "darkMode".to_string(),
            marker_class: "dark".to_string(),
            dark_label: "Dark Mode".to_string(),
            light_label: "Light Mode".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    pub modal_id: String,
    /// Selector of the text region, looked up inside the modal.
    pub display_selector: String,
    pub download_id: String,
    pub show_event: String,
    pub content_attribute: String,
    pub download_attribute: String,
    pub fallback_href: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_id: "textModal".to_string(),
            display_selector: ".modal-pre".to_string(),
            download_id: "modal-download".to_string(),
            show_event: "show.bs.modal".to_string(),
            content_attribute: "data-content".to_string(),
            download_attribute: "data-download".to_string(),
            fallback_href: "#".to_string(),
        }
    }
}

impl GlueConfig {
    pub fn from_json(json: &str) -> Result<Self, GlueError> {
        serde_json::from_str(json).map_err(|e| GlueError::Config(e.to_string()))
    }

    pub fn from_js(value: JsValue) -> Result<Self, GlueError> {
        serde_wasm_bindgen::from_value(value).map_err(|e| GlueError::Config(e.to_string()))
    }
}

/// Resolve the page configuration. The `window` global wins over the inline
/// JSON block; with neither present the defaults apply.
///
/// The inline block may sit after the bundle's script tag, so this must run
/// once the document has been parsed. Logging is not up yet when it runs, so
/// a broken config is handed back alongside the defaults for the caller to
/// report.
pub fn load(window: &web_sys::Window) -> (GlueConfig, Option<GlueError>) {
    let global = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null());
    if let Some(value) = global {
        return match GlueConfig::from_js(value) {
            Ok(config) => (config, None),
            Err(e) => (GlueConfig::default(), Some(e)),
        };
    }

    let inline = window
        .document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content());
    resolve_inline(inline.as_deref())
}

/// Config from the text of the inline JSON block, if the page has one.
pub fn resolve_inline(inline: Option<&str>) -> (GlueConfig, Option<GlueError>) {
    match inline {
        Some(json) => match GlueConfig::from_json(json) {
            Ok(config) => (config, None),
            Err(e) => (GlueConfig::default(), Some(e)),
        },
        None => (GlueConfig::default(), None),
    }
}
