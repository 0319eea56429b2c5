//! Input snapshots built by adapters.
//!
//! Samples are plain read-only data: the adapter reads the document once per
//! event or frame and hands the result to the coordinator. Nothing here is
//! cached across frames, which keeps every emitter stateless with respect to
//! geometry. Absent elements simply do not appear in the sample (`None` /
//! missing entries) and every consumer no-ops on missing data.

use serde::{Deserialize, Serialize};

use crate::ids::TargetId;

/// Scroll offset and viewport/document metrics at one instant.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ViewportSample {
    /// Vertical scroll offset in px.
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
    /// Total document height in px; 0 when unknown.
    pub document_height: f32,
}

impl ViewportSample {
    /// The side-nav focus point: the vertical center of the viewport in
    /// document coordinates.
    #[inline]
    pub fn focus_point(&self) -> f32 {
        self.scroll_y + self.height / 2.0
    }
}

/// Pointer offset normalized to [-0.5, 0.5] about the viewport center.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// Horizontal center of one marquee character, viewport coordinates.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CharSample {
    pub target: TargetId,
    pub center_x: f32,
}

/// Everything the per-frame and event paths read.
///
/// `section_tops` is aligned with the registry's section order; `None` marks
/// a section whose element was missing or not yet laid out.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrameSample {
    pub viewport: ViewportSample,
    #[serde(default)]
    pub section_tops: Vec<Option<f32>>,
    #[serde(default)]
    pub chars: Vec<CharSample>,
    /// Width of one full marquee loop (double the single text width);
    /// `None` while the marquee markup is absent or unmeasured.
    #[serde(default)]
    pub marquee_width: Option<f32>,
}
