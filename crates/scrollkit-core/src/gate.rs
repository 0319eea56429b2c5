//! Frame coalescing and visibility gating.

/// Coalesces event bursts into one pending paint frame.
///
/// Event handlers call [`request`](Self::request) and schedule a frame only
/// when it returns true; the frame callback must call
/// [`finish`](Self::finish) when done, so a grant is always eventually
/// cleared and the gate cannot wedge shut.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no frame is pending, claiming the slot.
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Clears the pending flag at the end of the frame callback.
    #[inline]
    pub fn finish(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Boolean visibility flag driven by intersection callbacks.
///
/// Purely event-driven: nothing polls it. While false, the wave time
/// accumulator is frozen so the phase resumes where it paused instead of
/// jumping when the section scrolls back into view.
#[derive(Debug)]
pub struct VisibilityGate {
    visible: bool,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Updates the flag; returns the new value when it actually changed.
    pub fn set(&mut self, visible: bool) -> Option<bool> {
        if self.visible == visible {
            None
        } else {
            self.visible = visible;
            Some(visible)
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new()
    }
}
