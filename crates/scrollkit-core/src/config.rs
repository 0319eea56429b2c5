//! Core configuration for scrollkit-core.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for every emitter plus the throttle windows.
/// Defaults reproduce the original page behavior; adapters may override any
/// field via JSON before constructing the [`Coordinator`](crate::Coordinator).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parallax: ParallaxConfig,
    pub header: HeaderConfig,
    pub sidenav: SideNavConfig,
    pub wave: WaveConfig,
    pub marquee: MarqueeConfig,
    pub pointer: PointerConfig,
    pub badge: BadgeConfig,
    pub throttle: ThrottleConfig,
}

impl Config {
    /// Check invariants that the emitters rely on (non-zero wavelengths and
    /// durations, at least-every-frame skip). Call once at construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wave.wavelength <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "wave.wavelength",
                value: f64::from(self.wave.wavelength),
            });
        }
        if self.marquee.base_duration_s <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "marquee.base_duration_s",
                value: f64::from(self.marquee.base_duration_s),
            });
        }
        if self.wave.frame_skip == 0 {
            return Err(ConfigError::ZeroFrameSkip);
        }
        for (field, value) in [
            ("throttle.nav_ms", self.throttle.nav_ms),
            ("throttle.header_scroll_ms", self.throttle.header_scroll_ms),
            ("throttle.header_resize_ms", self.throttle.header_resize_ms),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Hero translation and blob oscillation parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Fraction of the scroll offset applied as hero translateY.
    pub hero_factor: f32,
    /// Constant hero scale combined with the translation.
    pub hero_scale: f32,
    /// Peak blob offset in px.
    pub blob_amplitude: f32,
    /// Radians of blob phase per scrolled px.
    pub blob_frequency: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            hero_factor: 0.3,
            hero_scale: 1.1,
            blob_amplitude: 20.0,
            blob_frequency: 0.002,
        }
    }
}

/// Breakpoint for the transparent header chrome.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Viewport widths strictly above this get transparent chrome.
    pub desktop_min_width: f32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            desktop_min_width: 768.0,
        }
    }
}

/// The fixed label cycle for the side navigation indicators.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SideNavConfig {
    pub cycle: [String; 3],
}

impl Default for SideNavConfig {
    fn default() -> Self {
        Self {
            cycle: ["EAT".into(), "DRINK".into(), "PLAY".into()],
        }
    }
}

/// Wave marquee parameters (per-character sinusoid).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Peak vertical offset in px.
    pub amplitude: f32,
    /// Px of horizontal distance per radian of phase.
    pub wavelength: f32,
    /// Phase advance per active frame.
    pub speed: f32,
    /// Peak character rotation in degrees.
    pub tilt_deg: f32,
    /// Update every Nth active frame; 1 means every frame.
    pub frame_skip: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: 25.0,
            wavelength: 250.0,
            speed: 0.02,
            tilt_deg: 8.0,
            frame_skip: 2,
        }
    }
}

/// Horizontal marquee track motion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Seconds for row 0 to traverse one full track width.
    pub base_duration_s: f32,
    /// Extra seconds per row index.
    pub per_row_slowdown_s: f32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            base_duration_s: 25.0,
            per_row_slowdown_s: 5.0,
        }
    }
}

/// Pointer-driven blob drift (desktop only; the adapter decides mounting).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Px of drift per unit of normalized pointer offset for blob 0.
    pub base_intensity: f32,
    /// Additional px per blob index.
    pub per_blob_step: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            base_intensity: 20.0,
            per_blob_step: 10.0,
        }
    }
}

/// Scroll-progress badge rotation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    /// Full rotations across the whole scrollable range.
    pub turns: f32,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self { turns: 2.0 }
    }
}

/// Cool-down windows for the event-path emitters, in milliseconds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    pub nav_ms: f64,
    pub header_scroll_ms: f64,
    pub header_resize_ms: f64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            nav_ms: 100.0,
            header_scroll_ms: 50.0,
            header_resize_ms: 100.0,
        }
    }
}
