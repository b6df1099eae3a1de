//! WASM entry point and the JS-facing exports.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DocumentReadyState;

use crate::config::{PageConfig, ToastConfig};
use crate::constants::CONFIG_ELEMENT_ID;
use crate::error::DomError;
use crate::{dom, lightbox, opener, toast};

thread_local! {
    /// Page config captured at startup - the JS-facing exports read it here
    static PAGE_CONFIG: RefCell<PageConfig> = RefCell::new(PageConfig::new());
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = load_page_config();
    log::set_max_level(config.log_level.to_level_filter());

    let toast_config = config.toast.clone();
    PAGE_CONFIG.with(|c| *c.borrow_mut() = config);

    if let Err(e) = wire_when_ready(toast_config) {
        log::error!("Failed to wire download toast: {}", e);
    }
}

/// Entry point for inline `onclick` handlers on project cards.
#[wasm_bindgen(js_name = openProject)]
pub fn open_project(url: String) {
    if let Err(e) = opener::open_project(&url) {
        log::error!("Failed to open project: {}", e);
    }
}

/// Entry point for inline `onclick` handlers on gallery images.
#[wasm_bindgen(js_name = openImage)]
pub fn open_image(src: String) {
    let lightbox_config = PAGE_CONFIG.with(|c| c.borrow().lightbox.clone());
    if let Err(e) = lightbox::open_image(&src, &lightbox_config) {
        log::error!("Failed to open lightbox: {}", e);
    }
}

/// Read the optional embedded JSON config block, falling back to defaults.
fn load_page_config() -> PageConfig {
    let Ok(document) = dom::document() else {
        return PageConfig::default();
    };
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        log::debug!("No embedded config, using defaults");
        return PageConfig::default();
    };

    let json = element.text_content().unwrap_or_default();
    match PageConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded embedded page config");
            config
        }
        Err(e) => {
            log::warn!("Ignoring embedded config: {}", e);
            PageConfig::default()
        }
    }
}

/// Wire the download toast now, or once `DOMContentLoaded` fires.
///
/// The wasm module may be instantiated on either side of that event, so
/// the readiness state is checked rather than assumed.
fn wire_when_ready(toast_config: ToastConfig) -> Result<(), DomError> {
    let document = dom::document()?;

    if document.ready_state() == DocumentReadyState::Loading {
        let onready = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Err(e) = toast::wire_download_toast(&toast_config) {
                log::error!("Failed to wire download toast: {}", e);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        document
            .add_event_listener_with_callback("DOMContentLoaded", onready.as_ref().unchecked_ref())
            .map_err(|e| DomError::listener(format!("{e:?}")))?;
        onready.forget(); // Leak the closure to keep it alive

        Ok(())
    } else {
        toast::wire_download_toast(&toast_config)
    }
}
