//! Transient download notification.
//!
//! Wired once after the document finishes loading. Every click on the
//! download control spawns an independent toast; overlapping toasts from
//! rapid clicks disappear on their own schedules.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use crate::config::ToastConfig;
use crate::dom;
use crate::error::DomError;
use crate::style;

/// Attach the toast behavior to the download control, if present.
///
/// A missing control disables the feature without error.
pub fn wire_download_toast(config: &ToastConfig) -> Result<(), DomError> {
    let document = dom::document()?;

    let Some(control) = document.get_element_by_id(&config.element_id) else {
        log::debug!("No #{} element, download toast disabled", config.element_id);
        return Ok(());
    };

    let element_id = config.element_id.clone();
    let config = config.clone();
    let onclick = Closure::wrap(Box::new(move |_event: Event| {
        if let Err(e) = show_toast(&config) {
            log::error!("Failed to show toast: {}", e);
        }
    }) as Box<dyn FnMut(Event)>);

    control
        .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        .map_err(|e| DomError::listener(format!("{e:?}")))?;
    onclick.forget(); // Leak the closure to keep it alive

    log::debug!("Download toast wired to #{}", element_id);
    Ok(())
}

/// Create a toast, append it to the body, and schedule its removal.
pub fn show_toast(config: &ToastConfig) -> Result<(), DomError> {
    let document = dom::document()?;
    let body = dom::body()?;

    let toast: HtmlElement = dom::create_element(&document, "div")?;
    toast.set_text_content(Some(&config.text));
    dom::apply_styles(&toast, &style::toast_styles())?;
    body.append_child(&toast)
        .map_err(|_| DomError::Append { node: "toast" })?;

    // One-shot removal; the timer handle is not retained and removal is
    // never cancelled.
    let target = toast.clone();
    let remove: js_sys::Function = Closure::once_into_js(move || {
        target.remove();
    })
    .unchecked_into();

    dom::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            &remove,
            config.duration_ms as i32,
        )
        .map_err(|e| DomError::timer(format!("{e:?}")))?;

    Ok(())
}
