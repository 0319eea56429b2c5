//! Wave marquee character motion.

use crate::config::WaveConfig;

/// Vertical offset and rotation for one character.
///
/// phase = center_x / wavelength + time; offset = amplitude * sin(phase).
/// Rotation follows the cosine, so the tilt tracks the local slope of the
/// wave: a character at the crest sits level, one on the steepest section
/// leans hardest. At time 0 and x 0 this yields offset 0 and the full tilt.
#[inline]
pub fn char_offset(center_x: f32, time: f32, cfg: &WaveConfig) -> (f32, f32) {
    let phase = center_x / cfg.wavelength + time;
    let y = cfg.amplitude * phase.sin();
    let rotation = cfg.tilt_deg * phase.cos();
    (y, rotation)
}
