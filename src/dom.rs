//! Checked accessors and helpers over `web_sys`.
//!
//! Uses web_sys to interact with browser APIs. The global objects are
//! always present in a browser, but the bindings surface them as optional,
//! so everything here returns a `Result` and the callers propagate.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::DomError;
use crate::style::StyleDecl;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::WindowUnavailable)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::DocumentUnavailable)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::BodyUnavailable)
}

/// Create an element and downcast it to the requested concrete type.
pub fn create_element<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, DomError> {
    document
        .create_element(tag)
        .map_err(|_| DomError::ElementCreate { tag })?
        .dyn_into()
        .map_err(|_| DomError::ElementCreate { tag })
}

/// Apply a list of inline declarations to an element.
pub fn apply_styles(element: &HtmlElement, styles: &[StyleDecl]) -> Result<(), DomError> {
    let style = element.style();
    for (property, value) in styles {
        style
            .set_property(property, value)
            .map_err(|_| DomError::style(*property))?;
    }
    Ok(())
}
