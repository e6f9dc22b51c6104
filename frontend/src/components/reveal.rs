use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;
use crate::error::Result;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Wraps an `IntersectionObserver` and the closure it calls. The observer is
/// disconnected on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_visible: F) -> Result<Self>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let callback: EntriesCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

/// Fades sections and cards in as they scroll into view.
pub fn observe_reveal_targets(document: &Document) -> Result<VisibilityObserver> {
    let observer = VisibilityObserver::new(
        config::REVEAL_THRESHOLD,
        Some(config::REVEAL_ROOT_MARGIN),
        |target, _| {
            if let Some(element) = target.dyn_ref::<HtmlElement>() {
                set_styles(element, &[("opacity", "1"), ("transform", "translateY(0)")]);
            }
        },
    )?;

    let nodes = document.query_selector_all(config::selectors::REVEAL_TARGETS)?;
    let mut count = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        set_styles(
            &element,
            &[
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                ("transition", "opacity 0.6s ease, transform 0.6s ease"),
            ],
        );
        observer.observe(&element);
        count += 1;
    }
    debug!("reveal: observing {} elements", count);

    Ok(observer)
}
