//! HTML preview emitter.
//!
//! A single-page table for eyeballing the generated sprite: one row per
//! icon showing a swatch styled with the icon's class, the class name, and
//! the offsets the stylesheet uses.

use std::fmt::Write;

use crate::types::PlacedIcon;

/// Render the preview page for a planned icon sequence.
///
/// `stylesheet_href` is the link target for the generated stylesheet; when
/// no stylesheet was requested the link is emitted with an empty href and
/// the swatches render unstyled.
pub fn render_preview(icons: &[PlacedIcon], stylesheet_href: Option<&str>) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<html><head><title>CSS-Sprite test</title>\
         <link rel='stylesheet' type='text/css' href='{}'/>\
         </head><body><table>\n",
        stylesheet_href.unwrap_or("")
    );

    for icon in icons {
        let _ = writeln!(
            html,
            "<tr><td><div class='{}'></div></td>\
             <td>.{}</td><td>-{}px</td><td>-{}px</td></tr>",
            icon.css_class, icon.css_class, icon.offset_x, icon.offset_y,
        );
    }

    html.push_str("</table></body></html>\n");
    html
}
