//! Identifiers and simple allocators for core entities.

use serde::{Deserialize, Serialize};

/// Handle to one animated element slot in the adapter's presenter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

/// Handle to one visibility gate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GateId(pub u32);

/// Monotonic allocator for TargetId and GateId.
/// Dense indices double as presenter slot indices; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_target: u32,
    next_gate: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_target(&mut self) -> TargetId {
        let id = TargetId(self.next_target);
        self.next_target = self.next_target.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_gate(&mut self) -> GateId {
        let id = GateId(self.next_gate);
        self.next_gate = self.next_gate.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_target(), TargetId(0));
        assert_eq!(alloc.alloc_target(), TargetId(1));
        assert_eq!(alloc.alloc_gate(), GateId(0));
        assert_eq!(alloc.alloc_gate(), GateId(1));
    }
}
