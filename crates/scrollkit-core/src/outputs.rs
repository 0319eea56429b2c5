//! Output contracts from the coordinator.
//!
//! Outputs carry only the visual changes computed this tick, keyed by
//! [`TargetId`], plus a separate list of discrete events. The adapter applies
//! changes to the host document and may surface events for diagnostics.

use serde::{Deserialize, Serialize};

use crate::ids::TargetId;

/// The visual state an emitter computed for one target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Visual {
    /// Inline transform. Scale is applied before the translation, matching
    /// the original hero styling; identity components may be elided by the
    /// presenter.
    Transform {
        translate_x: f32,
        translate_y: f32,
        rotate_deg: f32,
        scale: f32,
    },
    /// Header chrome: transparent overrides on, or inline overrides cleared
    /// so the stylesheet takes over.
    HeaderChrome { transparent: bool },
    /// Replace the target's text content.
    Label { text: String },
}

impl Visual {
    /// A pure vertical translation.
    pub fn translate_y(y: f32) -> Self {
        Visual::Transform {
            translate_x: 0.0,
            translate_y: y,
            rotate_deg: 0.0,
            scale: 1.0,
        }
    }

    /// A planar translation (pointer drift).
    pub fn translate(x: f32, y: f32) -> Self {
        Visual::Transform {
            translate_x: x,
            translate_y: y,
            rotate_deg: 0.0,
            scale: 1.0,
        }
    }

    /// A pure rotation (badge).
    pub fn rotate(deg: f32) -> Self {
        Visual::Transform {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate_deg: deg,
            scale: 1.0,
        }
    }
}

/// One changed target this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub target: TargetId,
    pub visual: Visual,
}

/// Discrete signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Event {
    /// The side-nav focus moved to a different section.
    FocusChanged { section: String },
    /// The wave section left the viewport; the accumulator is frozen.
    WavePaused,
    /// The wave section re-entered the viewport.
    WaveResumed,
}

/// Outputs returned by the coordinator's entry points.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
