//! Intersection observers.
//!
//! Four observers, all event-driven (no polling): reveal-on-scroll classes,
//! the wave visibility gate, hero-video pause/play, and logo recoloring per
//! section. Each is owned by [`Observers`] and disconnected on Drop.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use scrollkit_core::GateId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Document, HtmlElement, HtmlMediaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::Inner;

/// Elements that slide/fade in the first time they enter the viewport.
const REVEAL_SELECTORS: &str = ".tagline-text, .tagline-icon, .about-title, .about-right, \
     .split-panel, .ambiance-content, .reserve-title, .btn-reserve-large";

/// The section whose visibility gates the wave marquee.
const WAVE_SECTION: &str = ".about-section";

/// Logo tint per section id, applied when the section crosses mid-viewport.
const LOGO_COLORS: [(&str, &str); 6] = [
    ("hero", "#e6a23c"),
    ("tagline", "#e6a23c"),
    ("about", "#e6a23c"),
    ("split", "#1e2756"),
    ("ambiance", "#e6a23c"),
    ("reserve", "#e6a23c"),
];

type ObserverCallback = Closure<dyn FnMut(Array)>;

struct Handle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Handle {
    fn new(
        callback: ObserverCallback,
        threshold: f64,
        root_margin: &str,
    ) -> Result<Self, JsValue> {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from(threshold));
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn entries_of(list: &Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    list.iter()
        .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
}

pub struct Observers {
    _reveal: Option<Handle>,
    _wave: Option<Handle>,
    _video: Option<Handle>,
    _logo: Option<Handle>,
}

impl Observers {
    pub fn mount(
        document: &Document,
        inner: &Rc<RefCell<Inner>>,
        wave_gate: GateId,
        reduced_motion: bool,
    ) -> Result<Self, JsValue> {
        Ok(Self {
            _reveal: mount_reveal(document)?,
            _wave: if reduced_motion {
                None
            } else {
                mount_wave_gate(document, inner, wave_gate)?
            },
            _video: mount_video(document)?,
            _logo: mount_logo_colors(document)?,
        })
    }
}

/// Tags reveal elements and flips them `active` once they intersect.
fn mount_reveal(document: &Document) -> Result<Option<Handle>, JsValue> {
    let list = document.query_selector_all(REVEAL_SELECTORS)?;
    if list.length() == 0 {
        return Ok(None);
    }

    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries_of(&entries) {
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("active");
            }
        }
    }) as Box<dyn FnMut(Array)>);
    let handle = Handle::new(callback, 0.1, "0px")?;

    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            let _ = el.class_list().add_1("reveal");
            handle.observer.observe(&el);
        }
    }
    Ok(Some(handle))
}

/// Feeds intersection of the wave section into the coordinator's gate.
fn mount_wave_gate(
    document: &Document,
    inner: &Rc<RefCell<Inner>>,
    gate: GateId,
) -> Result<Option<Handle>, JsValue> {
    let Some(section) = document.query_selector(WAVE_SECTION)? else {
        return Ok(None);
    };

    let rc = Rc::clone(inner);
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries_of(&entries) {
            rc.borrow_mut().core.set_visible(gate, entry.is_intersecting());
        }
    }) as Box<dyn FnMut(Array)>);
    let handle = Handle::new(callback, 0.1, "0px")?;
    handle.observer.observe(&section);
    Ok(Some(handle))
}

/// Pauses the hero video off screen; playback rejections are logged, never
/// propagated.
fn mount_video(document: &Document) -> Result<Option<Handle>, JsValue> {
    let Some(video) = document
        .query_selector(".hero-video")?
        .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
    else {
        return Ok(None);
    };

    let on_rejected = Closure::<dyn FnMut(JsValue)>::wrap(Box::new(|err: JsValue| {
        console::log_2(&"video play failed:".into(), &err);
    }));
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries_of(&entries) {
            if entry.is_intersecting() {
                if let Ok(promise) = video.play() {
                    let _ = promise.catch(&on_rejected);
                }
            } else {
                let _ = video.pause();
            }
        }
    }) as Box<dyn FnMut(Array)>);
    let handle = Handle::new(callback, 0.25, "0px")?;

    if let Some(el) = document.query_selector(".hero-video")? {
        handle.observer.observe(&el);
    }
    Ok(Some(handle))
}

/// Retints the logo as sections cross the middle of the viewport.
fn mount_logo_colors(document: &Document) -> Result<Option<Handle>, JsValue> {
    let Some(logo) = document
        .query_selector(".logo-svg")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(None);
    };

    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries_of(&entries) {
            if !entry.is_intersecting() {
                continue;
            }
            let id = entry.target().id();
            if let Some((_, color)) = LOGO_COLORS.iter().find(|(section, _)| *section == id) {
                let _ = logo.style().set_property("color", color);
            }
        }
    }) as Box<dyn FnMut(Array)>);
    let handle = Handle::new(callback, 0.0, "-50% 0px")?;

    let sections = document.query_selector_all("section[id]")?;
    for i in 0..sections.length() {
        if let Some(el) = sections
            .get(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        {
            handle.observer.observe(&el);
        }
    }
    Ok(Some(handle))
}
