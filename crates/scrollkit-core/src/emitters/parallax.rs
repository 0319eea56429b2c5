//! Hero translation and blob oscillation.

use crate::config::ParallaxConfig;
use crate::outputs::Visual;
use crate::sample::ViewportSample;

/// Hero transform while the hero is still on screen.
///
/// The translation is proportional to the scroll offset and combined with a
/// constant scale; past one viewport height the hero is fully covered and the
/// emitter goes quiet rather than keep pushing it down.
pub fn hero(viewport: &ViewportSample, cfg: &ParallaxConfig) -> Option<Visual> {
    if viewport.scroll_y >= viewport.height {
        return None;
    }
    Some(Visual::Transform {
        translate_x: 0.0,
        translate_y: viewport.scroll_y * cfg.hero_factor,
        rotate_deg: 0.0,
        scale: cfg.hero_scale,
    })
}

/// Vertical blob offset: a scroll-phased sinusoid, phase-shifted per index
/// so the blobs float out of step with each other.
#[inline]
pub fn blob_y(scroll_y: f32, index: u32, cfg: &ParallaxConfig) -> f32 {
    cfg.blob_amplitude * (scroll_y * cfg.blob_frequency + index as f32).sin()
}
