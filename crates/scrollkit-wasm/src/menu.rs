//! Mobile menu overlay.
//!
//! Toggle button, overlay classes, body scroll lock, Escape-to-close, and
//! numbered menu links. All listeners are removed on Drop. The whole module
//! is a no-op when the menu markup is absent.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

pub struct Menu {
    document: Document,
    btn: HtmlElement,
    toggle: Closure<dyn FnMut()>,
    close_links: Vec<(Element, Closure<dyn FnMut()>)>,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

fn set_open(btn: &HtmlElement, overlay: &HtmlElement, body: Option<&HtmlElement>, open: bool) {
    let flip = |el: &HtmlElement| {
        let _ = if open {
            el.class_list().add_1("active")
        } else {
            el.class_list().remove_1("active")
        };
    };
    flip(btn);
    flip(overlay);
    if let Some(body) = body {
        let _ = if open {
            body.style().set_property("overflow", "hidden")
        } else {
            body.style().remove_property("overflow").map(|_| ())
        };
    }
}

impl Menu {
    /// Wires the menu if its markup exists; `None` otherwise.
    pub fn mount(document: &Document) -> Result<Option<Menu>, JsValue> {
        let Some(btn) = document
            .query_selector(".btn-menu")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return Ok(None);
        };
        let Some(overlay) = document
            .get_element_by_id("menuOverlay")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return Ok(None);
        };

        // Number the nav links for the overlay's counter styling.
        let nav_links = document.query_selector_all(".menu-nav a")?;
        for i in 0..nav_links.length() {
            if let Some(link) = nav_links.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = link.set_attribute("data-num", &format!("0{}", i + 1));
            }
        }

        let toggle = {
            let btn = btn.clone();
            let overlay = overlay.clone();
            let doc = document.clone();
            Closure::wrap(Box::new(move || {
                let open = !overlay.class_list().contains("active");
                set_open(&btn, &overlay, doc.body().as_ref(), open);
            }) as Box<dyn FnMut()>)
        };
        btn.add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref())?;

        // Any menu link closes the overlay.
        let mut close_links = Vec::new();
        let links = document.query_selector_all(".menu-nav a, .menu-reserve")?;
        for i in 0..links.length() {
            let Some(link) = links.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let btn = btn.clone();
            let overlay = overlay.clone();
            let doc = document.clone();
            let closure = Closure::wrap(Box::new(move || {
                set_open(&btn, &overlay, doc.body().as_ref(), false);
            }) as Box<dyn FnMut()>);
            link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            close_links.push((link, closure));
        }

        let keydown = {
            let btn = btn.clone();
            let overlay = overlay.clone();
            let doc = document.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" && overlay.class_list().contains("active") {
                    set_open(&btn, &overlay, doc.body().as_ref(), false);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

        Ok(Some(Menu {
            document: document.clone(),
            btn,
            toggle,
            close_links,
            keydown,
        }))
    }
}

impl Drop for Menu {
    fn drop(&mut self) {
        let _ = self
            .btn
            .remove_event_listener_with_callback("click", self.toggle.as_ref().unchecked_ref());
        for (link, closure) in &self.close_links {
            let _ = link
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
    }
}
