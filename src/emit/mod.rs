//! Text artifact emitters.
//!
//! Both emitters walk the same planned icon sequence; neither recomputes
//! offsets, so the stylesheet and the preview page always agree with the
//! composed sprite.

mod preview;
mod stylesheet;

pub use preview::render_preview;
pub use stylesheet::render_stylesheet;
