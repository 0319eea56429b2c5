//! Side-nav label selection.
//!
//! Scans the section list from last to first and picks the last section whose
//! top sits at or above the focus point (scroll offset plus half a viewport).
//! The inclusive `<=` boundary and the reverse scan mean the lowest qualifying
//! section wins. When nothing qualifies (scrolled above every section) the
//! caller leaves the previous labels in place.

use crate::registry::Section;

/// Index of the focused section, or `None` when no section top is at or
/// above `focus`. Sections with unmeasured tops are skipped.
pub fn select(sections: &[Section], tops: &[Option<f32>], focus: f32) -> Option<usize> {
    for i in (0..sections.len()).rev() {
        if let Some(top) = tops.get(i).copied().flatten() {
            if top <= focus {
                return Some(i);
            }
        }
    }
    None
}

/// The (left, right) label pair for a focused section: the section's own
/// label on the left, and the label two steps ahead in the fixed 3-cycle on
/// the right. With three distinct labels the pair can never degenerate.
pub fn pair(cycle: &[String; 3], label: usize) -> (String, String) {
    let left = label % 3;
    let right = (left + 2) % 3;
    (cycle[left].clone(), cycle[right].clone())
}
