//! Browser adapter for scrollkit.
//!
//! [`Stage`] discovers the page's animated elements once, wires the event and
//! observer surface, and shuttles [`FrameSample`]s into the core coordinator
//! and its [`Outputs`] back onto the document. Missing markup degrades to
//! no-ops throughout; the page stays usable with nothing mounted at all.
//!
//! [`FrameSample`]: scrollkit_core::FrameSample
//! [`Outputs`]: scrollkit_core::Outputs

use std::cell::RefCell;
use std::rc::Rc;

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use scrollkit_core::{Config, Coordinator, FrameGate, PointerSample, Role};

mod events;
mod menu;
mod observe;
mod presenter;
mod raf;
mod sampler;

use events::EventBindings;
use menu::Menu;
use observe::Observers;
use presenter::Presenter;
use raf::RafLoop;
use sampler::Sampler;

/// Sections in document order with their index into the label cycle.
const SECTIONS: [(&str, usize); 6] = [
    ("hero", 0),
    ("tagline", 0),
    ("about", 0),
    ("split", 1),
    ("ambiance", 1),
    ("reserve", 2),
];

/// Shared mutable state behind every event/frame callback.
pub(crate) struct Inner {
    pub(crate) core: Coordinator,
    pub(crate) sampler: Sampler,
    pub(crate) presenter: Presenter,
    pub(crate) scroll_gate: FrameGate,
    pub(crate) pointer_gate: FrameGate,
    pub(crate) pointer: PointerSample,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into().ok())
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .is_some_and(|m| m.matches())
}

#[wasm_bindgen]
pub struct Stage {
    inner: Rc<RefCell<Inner>>,
    raf: Option<RafLoop>,
    _events: EventBindings,
    _observers: Observers,
    _menu: Option<Menu>,
}

#[wasm_bindgen]
impl Stage {
    /// Mount against the current document. Pass a JSON config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new Stage({ wave: { amplitude: 40.0 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Stage, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let mut core =
            Coordinator::new(cfg).map_err(|e| JsError::new(&format!("config error: {e}")))?;

        let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("no document"))?;

        let reduced_motion = media_matches(&window, "(prefers-reduced-motion: reduce)");
        let track_pointer = !reduced_motion && media_matches(&window, "(min-width: 1024px)");

        let mut sampler = Sampler::new(window.clone(), document.body());
        let mut presenter = Presenter::new();

        // Fixed animated-element set, discovered once.
        if let Some(el) = query_html(&document, ".hero-image") {
            let id = core.register_target(Role::Hero);
            presenter.insert(id, el);
        }
        for (i, el) in query_all(&document, ".ambiance-blob").into_iter().enumerate() {
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                let id = core.register_target(Role::Blob { index: i as u32 });
                presenter.insert(id, el);
            }
        }
        if let Some(el) = query_html(&document, ".header") {
            let id = core.register_target(Role::Header);
            presenter.insert(id, el);
        }
        if let Some(el) = query_html(&document, ".side-nav-left .side-nav-text") {
            let id = core.register_target(Role::NavLeft);
            presenter.insert(id, el);
        }
        if let Some(el) = query_html(&document, ".side-nav-right .side-nav-text") {
            let id = core.register_target(Role::NavRight);
            presenter.insert(id, el);
        }
        if let Some(el) = query_html(&document, ".scroll-text") {
            let id = core.register_target(Role::Badge);
            presenter.insert(id, el);
        }

        for (name, label) in SECTIONS {
            core.register_section(name, label);
            sampler.push_section(
                document
                    .get_element_by_id(name)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            );
        }

        // Marquee: tracks translate horizontally, pre-split characters ride
        // the wave. Without this markup both emitters stay silent.
        for (i, el) in query_all(&document, ".marquee-track").into_iter().enumerate() {
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                let id = core.register_target(Role::MarqueeTrack { index: i as u32 });
                presenter.insert(id, el);
            }
        }
        for (row, row_el) in query_all(&document, ".marquee-row").into_iter().enumerate() {
            if let Ok(chars) = row_el.query_selector_all(".char") {
                for i in 0..chars.length() {
                    let Some(el) = chars.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                        continue;
                    };
                    let id = core.register_target(Role::WaveChar { row: row as u32 });
                    sampler.push_char(id, el.clone());
                    if let Ok(html) = el.dyn_into::<HtmlElement>() {
                        presenter.insert(id, html);
                    }
                }
            }
        }
        if let Some(el) = query_html(&document, ".marquee-track .marquee-text") {
            sampler.set_marquee_text(el);
        }

        let wave_gate = core.create_gate();
        core.bind_wave_gate(wave_gate);

        let inner = Rc::new(RefCell::new(Inner {
            core,
            sampler,
            presenter,
            scroll_gate: FrameGate::new(),
            pointer_gate: FrameGate::new(),
            pointer: PointerSample::default(),
        }));

        let observers = Observers::mount(&document, &inner, wave_gate, reduced_motion)
            .map_err(|e| JsError::new(&format!("observer mount error: {e:?}")))?;
        let events = EventBindings::mount(
            window.clone(),
            document.clone(),
            &inner,
            !reduced_motion,
            track_pointer,
        )
        .map_err(|e| JsError::new(&format!("event mount error: {e:?}")))?;
        let menu =
            Menu::mount(&document).map_err(|e| JsError::new(&format!("menu mount error: {e:?}")))?;

        // Initial paint so labels and header chrome are right before the
        // first scroll event arrives.
        {
            let inn = &mut *inner.borrow_mut();
            let now = raf::now_ms();
            let sample = inn.sampler.frame_sample();
            let out = inn.core.on_scroll_event(now, &sample);
            inn.presenter.apply(out);
            let out = inn.core.on_resize_event(now, &sample.viewport);
            inn.presenter.apply(out);
        }

        // Continuous tick for the marquee and the gated wave; not built at
        // all under reduced motion.
        let raf = if reduced_motion {
            None
        } else {
            let rc = Rc::clone(&inner);
            Some(RafLoop::new(move |_ts, dt| {
                let inn = &mut *rc.borrow_mut();
                let sample = inn.sampler.frame_sample();
                let out = inn.core.update(dt, &sample);
                inn.presenter.apply(out);
            }))
        };

        Ok(Stage {
            inner,
            raf,
            _events: events,
            _observers: observers,
            _menu: menu,
        })
    }

    /// Start the marquee/wave tick. No-op under reduced motion or when
    /// already running.
    pub fn start(&self) {
        if let Some(raf) = &self.raf {
            raf.start();
        }
    }

    /// Stop the tick; scroll-driven behavior stays live.
    pub fn stop(&self) {
        if let Some(raf) = &self.raf {
            raf.stop();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.raf.as_ref().is_some_and(|r| r.is_running())
    }

    /// Current wave phase; exposed for debugging and tests.
    #[wasm_bindgen(js_name = wave_time)]
    pub fn wave_time(&self) -> f32 {
        self.inner.borrow().core.wave_time()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
