//! Header chrome state.

use crate::config::HeaderConfig;

/// Whether the header should carry transparent inline overrides.
///
/// Pure state reflection of the current viewport width; recomputed on every
/// throttled scroll/resize event, never accumulated. Narrow viewports clear
/// the overrides so the stylesheet's mobile styling takes over.
#[inline]
pub fn transparent(viewport_width: f32, cfg: &HeaderConfig) -> bool {
    viewport_width > cfg.desktop_min_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        let cfg = HeaderConfig::default();
        assert!(!transparent(768.0, &cfg));
        assert!(transparent(768.1, &cfg));
    }
}
