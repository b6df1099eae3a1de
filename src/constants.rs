//! Global constants for the page behaviors.

/// Element id the download-toast feature binds to at load time.
pub const DOWNLOAD_CONTROL_ID: &str = "download-cv";

/// Default toast message.
pub const DEFAULT_TOAST_TEXT: &str = "Your CV download will start shortly.";

/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 2000;

/// Default lightbox backdrop color.
pub const DEFAULT_BACKDROP: &str = "rgba(0,0,0,0.8)";

/// Default maximum image extent inside the lightbox, in percent of the viewport.
pub const DEFAULT_IMAGE_MAX_PERCENT: u8 = 90;

/// Element id of the optional embedded JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Stacking order shared by the overlay and toast layers.
pub const LAYER_Z_INDEX: &str = "9999";
