//! Error types for the DOM plumbing.

use thiserror::Error;

/// Errors that can occur while manipulating the host document.
///
/// These cover the infrastructure failures the browser environment can
/// present; behavior the page deliberately leaves to the browser (blocked
/// popups, broken image sources) is not represented here.
#[derive(Error, Debug)]
pub enum DomError {
    /// The global `window` object is missing
    #[error("no global window object")]
    WindowUnavailable,

    /// The window has no associated document
    #[error("no document on window")]
    DocumentUnavailable,

    /// The document has no body to append to
    #[error("document has no body")]
    BodyUnavailable,

    /// Element creation or downcast to the concrete type failed
    #[error("failed to create <{tag}> element")]
    ElementCreate {
        /// Tag name of the element being created
        tag: &'static str,
    },

    /// Appending a node to its parent was rejected
    #[error("failed to append {node} to the document")]
    Append {
        /// Short description of the node being appended
        node: &'static str,
    },

    /// An inline style property was rejected
    #[error("failed to set style property '{property}'")]
    Style {
        /// The rejected CSS property name
        property: String,
    },

    /// Event listener registration was rejected
    #[error("failed to attach listener: {0}")]
    Listener(String),

    /// Timer scheduling was rejected
    #[error("failed to schedule timer: {0}")]
    Timer(String),
}

impl DomError {
    /// Create a style error for the given property.
    pub fn style(property: impl Into<String>) -> Self {
        Self::Style {
            property: property.into(),
        }
    }

    /// Create a listener error from a stringified browser value.
    pub fn listener(detail: impl Into<String>) -> Self {
        Self::Listener(detail.into())
    }

    /// Create a timer error from a stringified browser value.
    pub fn timer(detail: impl Into<String>) -> Self {
        Self::Timer(detail.into())
    }
}
