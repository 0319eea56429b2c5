//! Document reads.
//!
//! The sampler owns the element handles whose geometry the core consumes and
//! turns them into [`FrameSample`] snapshots. All reads are best-effort:
//! elements that are missing or not yet laid out are simply left out of the
//! sample and the core no-ops on them.

use scrollkit_core::{CharSample, FrameSample, TargetId, ViewportSample};
use web_sys::{Element, HtmlElement, Window};

pub struct Sampler {
    window: Window,
    body: Option<HtmlElement>,
    /// Aligned with the coordinator's section order.
    sections: Vec<Option<HtmlElement>>,
    chars: Vec<(TargetId, Element)>,
    /// One marquee text span; doubled width gives the seamless loop length.
    marquee_text: Option<HtmlElement>,
}

impl Sampler {
    pub fn new(window: Window, body: Option<HtmlElement>) -> Self {
        Self {
            window,
            body,
            sections: Vec::new(),
            chars: Vec::new(),
            marquee_text: None,
        }
    }

    pub fn push_section(&mut self, el: Option<HtmlElement>) {
        self.sections.push(el);
    }

    pub fn push_char(&mut self, target: TargetId, el: Element) {
        self.chars.push((target, el));
    }

    pub fn set_marquee_text(&mut self, el: HtmlElement) {
        self.marquee_text = Some(el);
    }

    /// Scroll offset plus viewport/document metrics.
    pub fn viewport(&self) -> ViewportSample {
        let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        ViewportSample {
            scroll_y: self.window.scroll_y().unwrap_or(0.0) as f32,
            width: dimension(self.window.inner_width()),
            height: dimension(self.window.inner_height()),
            document_height: self
                .body
                .as_ref()
                .map_or(0.0, |b| b.scroll_height() as f32),
        }
    }

    /// Full snapshot for the frame and event paths.
    pub fn frame_sample(&self) -> FrameSample {
        let section_tops = self
            .sections
            .iter()
            .map(|s| s.as_ref().map(|el| el.offset_top() as f32))
            .collect();

        let chars = self
            .chars
            .iter()
            .map(|(target, el)| {
                let rect = el.get_bounding_client_rect();
                CharSample {
                    target: *target,
                    center_x: (rect.left() + rect.width() / 2.0) as f32,
                }
            })
            .collect();

        let marquee_width = self.marquee_text.as_ref().and_then(|el| {
            let w = el.offset_width();
            if w > 0 {
                Some((w * 2) as f32)
            } else {
                None
            }
        });

        FrameSample {
            viewport: self.viewport(),
            section_tops,
            chars,
            marquee_width,
        }
    }
}
