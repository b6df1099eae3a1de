//! Full-viewport image lightbox.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlImageElement};

use crate::config::LightboxConfig;
use crate::dom;
use crate::error::DomError;
use crate::style;

/// Present `src` enlarged over a dimming backdrop appended to the body.
///
/// A click anywhere on the overlay removes the whole subtree. Clicks on
/// the image are not stopped from bubbling, so they dismiss too.
pub fn open_image(src: &str, config: &LightboxConfig) -> Result<(), DomError> {
    let document = dom::document()?;
    let body = dom::body()?;

    let overlay: HtmlElement = dom::create_element(&document, "div")?;
    dom::apply_styles(&overlay, &style::overlay_styles(config))?;

    let image: HtmlImageElement = dom::create_element(&document, "img")?;
    image.set_src(src);
    dom::apply_styles(&image, &style::image_styles(config))?;

    // Close on click
    let target = overlay.clone();
    let onclick = Closure::wrap(Box::new(move |_event: Event| {
        target.remove();
    }) as Box<dyn FnMut(Event)>);

    overlay
        .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        .map_err(|e| DomError::listener(format!("{e:?}")))?;
    onclick.forget(); // Leak the closure to keep it alive

    overlay
        .append_child(&image)
        .map_err(|_| DomError::Append { node: "image" })?;
    body.append_child(&overlay)
        .map_err(|_| DomError::Append { node: "overlay" })?;

    log::debug!("Lightbox opened for {}", src);
    Ok(())
}
