//! Opens a project link in a new browsing context.

use crate::dom;
use crate::error::DomError;

/// Open `url` in a new tab and log the event.
///
/// The URL is handed to the browser untouched. A blocked or failed
/// navigation is not reported back; the popup handle is discarded.
pub fn open_project(url: &str) -> Result<(), DomError> {
    let window = dom::window()?;
    let _ = window.open_with_url_and_target(url, "_blank");
    log::info!("Open project: {}", url);
    Ok(())
}
