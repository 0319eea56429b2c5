//! The animated-element set.
//!
//! Targets are discovered once at mount and never change afterwards; the
//! registry maps each [`TargetId`] to the role the emitters animate it under.
//! Sections are kept separately in document order because the side-nav scan
//! depends on that order.

use serde::{Deserialize, Serialize};

use crate::ids::TargetId;

/// What an animated element is to the emitters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full-bleed hero image: scroll-proportional translate + constant scale.
    Hero,
    /// Decorative floating blob; `index` phase-shifts its oscillation.
    Blob { index: u32 },
    /// Fixed page header whose chrome flips at the desktop breakpoint.
    Header,
    /// Left side-nav label.
    NavLeft,
    /// Right side-nav label.
    NavRight,
    /// Rotating scroll-progress badge.
    Badge,
    /// One character of a marquee row.
    WaveChar { row: u32 },
    /// One horizontally traveling marquee track.
    MarqueeTrack { index: u32 },
}

/// One scroll section participating in side-nav label selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    /// Index into the configured 3-label cycle.
    pub label: usize,
}

#[derive(Default, Debug)]
pub struct Registry {
    targets: Vec<(TargetId, Role)>,
    sections: Vec<Section>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TargetId, role: Role) {
        self.targets.push((id, role));
    }

    pub fn role(&self, id: TargetId) -> Option<&Role> {
        self.targets
            .iter()
            .find_map(|(t, r)| if *t == id { Some(r) } else { None })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(TargetId, Role)> {
        self.targets.iter()
    }

    /// The first target registered under exactly `role`, if any.
    pub fn find(&self, role: &Role) -> Option<TargetId> {
        self.targets
            .iter()
            .find_map(|(t, r)| if r == role { Some(*t) } else { None })
    }

    /// All blob targets with their indices, in registration order.
    pub fn blobs(&self) -> impl Iterator<Item = (TargetId, u32)> + '_ {
        self.targets.iter().filter_map(|(t, r)| match r {
            Role::Blob { index } => Some((*t, *index)),
            _ => None,
        })
    }

    /// All marquee tracks with their indices, in registration order.
    pub fn marquee_tracks(&self) -> impl Iterator<Item = (TargetId, u32)> + '_ {
        self.targets.iter().filter_map(|(t, r)| match r {
            Role::MarqueeTrack { index } => Some((*t, *index)),
            _ => None,
        })
    }

    /// Append a section; returns its index in document order.
    pub fn push_section(&mut self, name: &str, label: usize) -> usize {
        self.sections.push(Section {
            name: name.to_string(),
            label,
        });
        self.sections.len() - 1
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
