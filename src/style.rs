//! Inline style declarations for the generated DOM nodes.
//!
//! The declarations are built as plain data so they can be unit tested on
//! the host without a browser; applying them to an element happens in
//! `dom::apply_styles`.

use crate::config::LightboxConfig;
use crate::constants::LAYER_Z_INDEX;

/// A single inline `property: value` declaration.
pub type StyleDecl = (&'static str, String);

/// Full-viewport dimming backdrop for the lightbox.
pub fn overlay_styles(config: &LightboxConfig) -> Vec<StyleDecl> {
    vec![
        ("position", "fixed".into()),
        ("top", "0".into()),
        ("left", "0".into()),
        ("width", "100%".into()),
        ("height", "100%".into()),
        ("background", config.backdrop.clone()),
        ("display", "flex".into()),
        ("align-items", "center".into()),
        ("justify-content", "center".into()),
        ("z-index", LAYER_Z_INDEX.into()),
    ]
}

/// The enlarged image inside the overlay.
pub fn image_styles(config: &LightboxConfig) -> Vec<StyleDecl> {
    let extent = format!("{}%", config.image_max_percent);
    vec![
        ("max-width", extent.clone()),
        ("max-height", extent),
        ("border-radius", "10px".into()),
        ("box-shadow", "0 0 20px rgba(255,255,255,0.3)".into()),
    ]
}

/// Bottom-right notification card.
pub fn toast_styles() -> Vec<StyleDecl> {
    vec![
        ("position", "fixed".into()),
        ("right", "20px".into()),
        ("bottom", "20px".into()),
        ("background", "#111".into()),
        ("color", "#fff".into()),
        ("padding", "8px 12px".into()),
        ("border-radius", "8px".into()),
        ("opacity", "0.95".into()),
        ("z-index", LAYER_Z_INDEX.into()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(styles: &'a [StyleDecl], property: &str) -> Option<&'a str> {
        styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_overlay_covers_viewport() {
        let styles = overlay_styles(&LightboxConfig::default());

        assert_eq!(value_of(&styles, "position"), Some("fixed"));
        assert_eq!(value_of(&styles, "top"), Some("0"));
        assert_eq!(value_of(&styles, "left"), Some("0"));
        assert_eq!(value_of(&styles, "width"), Some("100%"));
        assert_eq!(value_of(&styles, "height"), Some("100%"));
    }

    #[test]
    fn test_overlay_centers_content_over_dim_backdrop() {
        let styles = overlay_styles(&LightboxConfig::default());

        assert_eq!(value_of(&styles, "display"), Some("flex"));
        assert_eq!(value_of(&styles, "align-items"), Some("center"));
        assert_eq!(value_of(&styles, "justify-content"), Some("center"));
        assert_eq!(value_of(&styles, "background"), Some("rgba(0,0,0,0.8)"));
        assert_eq!(value_of(&styles, "z-index"), Some("9999"));
    }

    #[test]
    fn test_image_constrained_to_ninety_percent_by_default() {
        let styles = image_styles(&LightboxConfig::default());

        assert_eq!(value_of(&styles, "max-width"), Some("90%"));
        assert_eq!(value_of(&styles, "max-height"), Some("90%"));
    }

    #[test]
    fn test_image_extent_follows_config() {
        let config = LightboxConfig {
            image_max_percent: 75,
            ..LightboxConfig::default()
        };
        let styles = image_styles(&config);

        assert_eq!(value_of(&styles, "max-width"), Some("75%"));
        assert_eq!(value_of(&styles, "max-height"), Some("75%"));
    }

    #[test]
    fn test_toast_sits_bottom_right() {
        let styles = toast_styles();

        assert_eq!(value_of(&styles, "position"), Some("fixed"));
        assert_eq!(value_of(&styles, "right"), Some("20px"));
        assert_eq!(value_of(&styles, "bottom"), Some("20px"));
        assert_eq!(value_of(&styles, "z-index"), Some("9999"));
    }

    #[test]
    fn test_toast_card_appearance() {
        let styles = toast_styles();

        assert_eq!(value_of(&styles, "background"), Some("#111"));
        assert_eq!(value_of(&styles, "color"), Some("#fff"));
        assert_eq!(value_of(&styles, "padding"), Some("8px 12px"));
        assert_eq!(value_of(&styles, "border-radius"), Some("8px"));
        assert_eq!(value_of(&styles, "opacity"), Some("0.95"));
    }
}
