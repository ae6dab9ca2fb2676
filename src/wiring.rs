use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::GlueConfig;
use crate::modal;
use crate::page::{Page, PreferenceStore};
use crate::theme::{self, ThemeMode};

/// What ended up attached to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WiringReport {
    /// Initial theme, or `None` if the toggle could not be wired.
    pub theme: Option<ThemeMode>,
    pub modal: bool,
}

/// Install every behavior on `page`. Failures are logged and skipped; one
/// behavior never prevents the other.
pub fn wire_page<P, S>(page: &P, store: Rc<S>, config: &GlueConfig) -> WiringReport
where
    P: Page,
    S: PreferenceStore + 'static,
{
    let theme = match theme::install(page, store, &config.theme) {
        Ok(mode) => Some(mode),
        Err(e) => {
            warn!("Theme toggle not installed: {}", e);
            None
        }
    };

    let modal = match modal::install(page, &config.modal) {
        Ok(installed) => installed,
        Err(e) => {
            warn!("Transcript modal not installed: {}", e);
            false
        }
    };

    let report = WiringReport { theme, modal };
    debug!("Page wired: {:?}", report);
    report
}
