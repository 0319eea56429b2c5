//! Window/document event subscriptions.
//!
//! Every listener is an explicit subscription held by [`EventBindings`] and
//! removed again on Drop, so tearing down a [`Stage`](crate::Stage) leaves no
//! callbacks behind. Scroll and pointer bursts are coalesced through the
//! coordinator's frame gates into at most one scheduled frame each.

use std::cell::RefCell;
use std::rc::Rc;

use scrollkit_core::PointerSample;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::raf;
use crate::Inner;

pub struct EventBindings {
    window: Window,
    scroll: Closure<dyn FnMut()>,
    resize: Closure<dyn FnMut()>,
    mousemove: Option<Closure<dyn FnMut(MouseEvent)>>,
    load: Closure<dyn FnMut()>,
    anchors: Vec<(Element, Closure<dyn FnMut(Event)>)>,
}

fn passive() -> AddEventListenerOptions {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    opts
}

impl EventBindings {
    /// Wires scroll/resize/load (and optionally mousemove) listeners.
    ///
    /// `animate_frames` is false under reduced motion: the scroll event path
    /// (side-nav, header) stays live but no parallax frames are scheduled.
    /// `track_pointer` is only true on wide viewports.
    pub fn mount(
        window: Window,
        document: Document,
        inner: &Rc<RefCell<Inner>>,
        animate_frames: bool,
        track_pointer: bool,
    ) -> Result<Self, JsValue> {
        let scroll = {
            let rc = Rc::clone(inner);
            Closure::wrap(Box::new(move || {
                let now = raf::now_ms();
                {
                    let inn = &mut *rc.borrow_mut();
                    let sample = inn.sampler.frame_sample();
                    let out = inn.core.on_scroll_event(now, &sample);
                    inn.presenter.apply(out);
                }
                if animate_frames && rc.borrow_mut().scroll_gate.request() {
                    let rc = Rc::clone(&rc);
                    raf::request_frame(move |_ts| {
                        let inn = &mut *rc.borrow_mut();
                        let sample = inn.sampler.frame_sample();
                        let out = inn.core.on_scroll_frame(&sample);
                        inn.presenter.apply(out);
                        inn.scroll_gate.finish();
                    });
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            scroll.as_ref().unchecked_ref(),
            &passive(),
        )?;

        let resize = {
            let rc = Rc::clone(inner);
            Closure::wrap(Box::new(move || {
                let now = raf::now_ms();
                let inn = &mut *rc.borrow_mut();
                let viewport = inn.sampler.viewport();
                let out = inn.core.on_resize_event(now, &viewport);
                inn.presenter.apply(out);
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

        let mousemove = if track_pointer {
            let rc = Rc::clone(inner);
            let closure = Closure::wrap(Box::new(move |e: MouseEvent| {
                let schedule = {
                    let inn = &mut *rc.borrow_mut();
                    let viewport = inn.sampler.viewport();
                    if viewport.width <= 0.0 || viewport.height <= 0.0 {
                        return;
                    }
                    inn.pointer = PointerSample {
                        x: e.client_x() as f32 / viewport.width - 0.5,
                        y: e.client_y() as f32 / viewport.height - 0.5,
                    };
                    inn.pointer_gate.request()
                };
                if schedule {
                    let rc = Rc::clone(&rc);
                    raf::request_frame(move |_ts| {
                        let inn = &mut *rc.borrow_mut();
                        let pointer = inn.pointer;
                        let out = inn.core.on_pointer_frame(&pointer);
                        inn.presenter.apply(out);
                        inn.pointer_gate.finish();
                    });
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            document.add_event_listener_with_callback_and_add_event_listener_options(
                "mousemove",
                closure.as_ref().unchecked_ref(),
                &passive(),
            )?;
            Some(closure)
        } else {
            None
        };

        let load = {
            let doc = document.clone();
            Closure::wrap(Box::new(move || {
                if let Some(body) = doc.body() {
                    let _ = body.class_list().add_1("loaded");
                }
                // Let the preloader fade before the hero title lines start.
                let doc = doc.clone();
                let kick = Closure::once_into_js(move || {
                    if let Ok(lines) = doc.query_selector_all(".hero .title-line") {
                        for i in 0..lines.length() {
                            if let Some(el) =
                                lines.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
                            {
                                let _ = el.style().set_property("animation-play-state", "running");
                            }
                        }
                    }
                });
                if let Some(win) = web_sys::window() {
                    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                        kick.unchecked_ref(),
                        100,
                    );
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("load", load.as_ref().unchecked_ref())?;

        let anchors = mount_smooth_scroll(&document)?;

        Ok(Self {
            window,
            scroll,
            resize,
            mousemove,
            load,
            anchors,
        })
    }
}

/// Intercepts same-page anchor clicks and smooth-scrolls to the target.
fn mount_smooth_scroll(
    document: &Document,
) -> Result<Vec<(Element, Closure<dyn FnMut(Event)>)>, JsValue> {
    let mut anchors = Vec::new();
    let list = document.query_selector_all(r##"a[href^="#"]"##)?;
    for i in 0..list.length() {
        let Some(anchor) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let target_href = anchor.get_attribute("href").unwrap_or_default();
        let closure = Closure::wrap(Box::new(move |e: Event| {
            if target_href == "#" {
                return;
            }
            if let Ok(Some(target)) = doc.query_selector(&target_href) {
                e.prevent_default();
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(Event)>);
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        anchors.push((anchor, closure));
    }
    Ok(anchors)
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("load", self.load.as_ref().unchecked_ref());
        if let Some(mousemove) = &self.mousemove {
            if let Some(doc) = self.window.document() {
                let _ = doc.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove.as_ref().unchecked_ref(),
                );
            }
        }
        for (anchor, closure) in &self.anchors {
            let _ = anchor
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}
