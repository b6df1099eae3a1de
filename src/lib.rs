//! folio - client-side interactions for a static portfolio page.
//!
//! Compiles to a wasm module that attaches three independent, stateless
//! behaviors to the host document:
//!
//! - `openProject(url)` opens a project link in a new tab and logs it,
//! - `openImage(src)` shows an image in a full-viewport lightbox overlay,
//! - a click on the `#download-cv` element shows a transient toast.
//!
//! The first two are exported for inline markup event attributes:
//!
//! ```html
//! <script type="module">
//!   import init, { openProject, openImage } from "./pkg/folio.js";
//!   await init();
//!   window.openProject = openProject;
//!   window.openImage = openImage;
//! </script>
//! ```
//!
//! The toast is wired automatically at module start. Defaults can be
//! overridden by embedding a JSON block with id `folio-config` in the
//! document.

pub mod config;
pub mod constants;
pub mod error;
pub mod style;

pub use config::{LightboxConfig, LogLevel, PageConfig, ToastConfig};
pub use error::DomError;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod lightbox;
#[cfg(target_arch = "wasm32")]
pub mod opener;
#[cfg(target_arch = "wasm32")]
pub mod toast;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
