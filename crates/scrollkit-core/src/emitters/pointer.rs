//! Pointer-driven blob drift.

use crate::config::PointerConfig;
use crate::sample::PointerSample;

/// Planar drift for blob `index`: the normalized pointer offset scaled by a
/// per-blob intensity, so blobs further down the list drift wider.
#[inline]
pub fn blob_drift(pointer: &PointerSample, index: u32, cfg: &PointerConfig) -> (f32, f32) {
    let intensity = cfg.base_intensity + index as f32 * cfg.per_blob_step;
    (pointer.x * intensity, pointer.y * intensity)
}
