//! Horizontal marquee track motion.

use crate::config::MarqueeConfig;

/// Horizontal offset for track `index` after `elapsed_s` seconds.
///
/// Each track loops one full `total_width` per duration, rows slowing down
/// with index; the offset wraps so the loop is seamless. Always in
/// (-total_width, 0].
pub fn track_x(elapsed_s: f32, index: u32, total_width: f32, cfg: &MarqueeConfig) -> f32 {
    if total_width <= 0.0 {
        return 0.0;
    }
    let duration = cfg.base_duration_s + index as f32 * cfg.per_row_slowdown_s;
    let travelled = elapsed_s / duration * total_width;
    -(travelled % total_width)
}
