use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::config::ThemeConfig;
use crate::error::GlueError;
use crate::page::{EventSource, Page, PageElement, PreferenceStore};

/// Stored value meaning "dark mode off". Anything else, including no value
/// at all, means dark.
const DISABLED: &str = "0";
const ENABLED: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DISABLED) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn from_marker(present: bool) -> Self {
        if present {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            ThemeMode::Dark => ENABLED,
            ThemeMode::Light => DISABLED,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// The toggle names the mode a click would switch to.
    pub fn toggle_label(self, config: &ThemeConfig) -> &str {
        match self {
            ThemeMode::Dark => &config.light_label,
            ThemeMode::Light => &config.dark_label,
        }
    }
}

/// Apply the persisted theme to the root container and wire the toggle.
///
/// Both elements are looked up before anything is touched, so a page missing
/// either one is left exactly as it was.
pub fn install<P, S>(page: &P, store: Rc<S>, config: &ThemeConfig) -> Result<ThemeMode, GlueError>
where
    P: Page,
    S: PreferenceStore + 'static,
{
    let root = page.require(&config.root_id)?;
    let toggle = page.require(&config.toggle_id)?;

    let stored = store.load(&config.storage_key).unwrap_or_else(|e| {
        warn!("Failed to read theme preference: {}", e);
        None
    });
    debug!("Stored theme preference: {:?}", stored);

    if ThemeMode::from_stored(stored.as_deref()).is_dark() {
        root.add_class(&config.marker_class)?;
    }
    let mode = ThemeMode::from_marker(root.has_class(&config.marker_class));
    toggle.set_text(mode.toggle_label(config));

    let label_target = toggle.clone();
    let config = config.clone();
    toggle.on_click(Box::new(move || {
        let mode = match root.toggle_class(&config.marker_class) {
            Ok(present) => ThemeMode::from_marker(present),
            Err(e) => {
                warn!("Failed to toggle theme class: {}", e);
                return;
            }
        };
        if let Err(e) = store.save(&config.storage_key, mode.stored_value()) {
            warn!("Failed to save theme preference: {}", e);
        }
        label_target.set_text(mode.toggle_label(&config));
        info!("Theme switched to {:?}", mode);
    }))?;

    Ok(mode)
}
