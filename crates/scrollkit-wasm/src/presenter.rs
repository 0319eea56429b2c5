//! Applies coordinator outputs to the document.
//!
//! The presenter owns one element slot per [`TargetId`] (dense indices double
//! as slot indices) and translates each [`Visual`] into inline style or text
//! mutations. Style writes are best-effort; a detached element is not an
//! error.

use scrollkit_core::{Change, Outputs, TargetId, Visual};
use web_sys::HtmlElement;

pub struct Presenter {
    slots: Vec<Option<HtmlElement>>,
}

impl Presenter {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Stores the element for a target, growing the slot table as needed.
    pub fn insert(&mut self, target: TargetId, el: HtmlElement) {
        let idx = target.0 as usize;
        if self.slots.len() <= idx {
            self.slots.resize_with(idx + 1, || None);
        }
        self.slots[idx] = Some(el);
    }

    fn get(&self, target: TargetId) -> Option<&HtmlElement> {
        self.slots
            .get(target.0 as usize)
            .and_then(|slot| slot.as_ref())
    }

    /// Applies every change of one tick.
    pub fn apply(&mut self, outputs: &Outputs) {
        for change in &outputs.changes {
            self.apply_change(change);
        }
    }

    fn apply_change(&self, change: &Change) {
        let Some(el) = self.get(change.target) else {
            return;
        };
        match &change.visual {
            Visual::Transform {
                translate_x,
                translate_y,
                rotate_deg,
                scale,
            } => {
                let css = transform_css(*translate_x, *translate_y, *rotate_deg, *scale);
                let _ = el.style().set_property("transform", &css);
            }
            Visual::HeaderChrome { transparent } => {
                let style = el.style();
                if *transparent {
                    let _ = style.set_property("background", "transparent");
                    let _ = style.set_property("backdrop-filter", "none");
                } else {
                    // Clear the inline overrides so the stylesheet takes over.
                    let _ = style.remove_property("background");
                    let _ = style.remove_property("backdrop-filter");
                }
            }
            Visual::Label { text } => {
                el.set_text_content(Some(text));
            }
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Composes an inline transform. Scale precedes the translation (the hero's
/// styling depends on that order); identity components are elided and the
/// 3d translation keeps the element on its own compositor layer.
fn transform_css(tx: f32, ty: f32, rot: f32, scale: f32) -> String {
    let mut css = String::new();
    if (scale - 1.0).abs() > f32::EPSILON {
        css.push_str(&format!("scale({scale}) "));
    }
    css.push_str(&format!("translate3d({tx}px, {ty}px, 0)"));
    if rot != 0.0 {
        css.push_str(&format!(" rotate({rot}deg)"));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_elides_identity_parts() {
        assert_eq!(transform_css(0.0, 12.0, 0.0, 1.0), "translate3d(0px, 12px, 0)");
        assert_eq!(
            transform_css(0.0, 90.0, 0.0, 1.1),
            "scale(1.1) translate3d(0px, 90px, 0)"
        );
        assert_eq!(
            transform_css(0.0, -3.5, 8.0, 1.0),
            "translate3d(0px, -3.5px, 0) rotate(8deg)"
        );
    }
}
