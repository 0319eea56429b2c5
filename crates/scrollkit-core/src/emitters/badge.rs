//! Scroll-progress badge rotation.

use crate::config::BadgeConfig;
use crate::sample::ViewportSample;

/// Badge rotation in degrees, proportional to scroll progress through the
/// scrollable range. `None` when the document does not scroll at all, which
/// also guards the division.
pub fn rotation(viewport: &ViewportSample, cfg: &BadgeConfig) -> Option<f32> {
    let range = viewport.document_height - viewport.height;
    if range <= 0.0 {
        return None;
    }
    let progress = viewport.scroll_y / range;
    Some(progress * 360.0 * cfg.turns)
}
