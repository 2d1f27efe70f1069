//! Stylesheet emitter.
//!
//! One class rule per icon, positioning the shared sprite as a background
//! image via negative offsets.

use std::fmt::Write;

use crate::types::PlacedIcon;

/// Render the stylesheet for a planned icon sequence.
///
/// `sprite_name` is the sprite file's basename; the stylesheet is expected
/// to live alongside the sprite. Rules appear in icon (row-major) order.
pub fn render_stylesheet(icons: &[PlacedIcon], sprite_name: &str) -> String {
    let mut css = String::new();

    for icon in icons {
        let _ = writeln!(
            css,
            ".{} {{ background: url({}) -{}px -{}px; height: {}px; width: {}px; }}",
            icon.css_class,
            sprite_name,
            icon.offset_x,
            icon.offset_y,
            icon.descriptor.height,
            icon.descriptor.width,
        );
    }

    css
}
