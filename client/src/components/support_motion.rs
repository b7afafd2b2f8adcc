//! Support page motion: scroll reveals, card tilt, and button ripples.
//!
//! Under reduced motion every revealable section is shown immediately and
//! neither tilt nor ripple is wired.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent};

use crate::state::support::{
    ANIMATION_CLASSES, LocalPoint, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, RIPPLE_CLASS,
    RIPPLE_LIFETIME_MS, RIPPLE_SELECTOR, TILT_SELECTOR, TILT_TRANSITION, Tilt, VISIBLE_CLASS, ripple_position,
};
use crate::util::dom;

pub fn mount() {
    for (selector, class) in ANIMATION_CLASSES {
        for el in dom::query_all(selector) {
            dom::set_class(&el, class, true);
        }
    }

    let revealable = dom::query_all(REVEAL_SELECTOR);
    if dom::prefers_reduced_motion() {
        for el in &revealable {
            dom::set_class(el, VISIBLE_CLASS, true);
        }
        return;
    }
    observe_reveals(&revealable);
    mount_tilt();
    mount_ripples();
}

fn observe_reveals(targets: &[Element]) {
    if targets.is_empty() {
        return;
    }
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_class(&target, VISIBLE_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("reveal observer unavailable, showing sections: {err:?}");
            for el in targets {
                dom::set_class(el, VISIBLE_CLASS, true);
            }
            return;
        }
    };
    callback.forget();
    for el in targets {
        observer.observe(el);
    }
}

fn local_point(el: &Element, event: &MouseEvent) -> (LocalPoint, f64, f64) {
    let rect = el.get_bounding_client_rect();
    let point = LocalPoint::from_client(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        rect.left(),
        rect.top(),
    );
    (point, rect.width(), rect.height())
}

fn mount_tilt() {
    for card in dom::query_all(TILT_SELECTOR) {
        let target = card.clone();
        dom::listen(card.as_ref(), "mouseenter", move |_| {
            dom::set_style(&target, "transition", TILT_TRANSITION);
        });

        let target = card.clone();
        dom::listen(card.as_ref(), "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (point, width, height) = local_point(&target, event);
            dom::set_style(&target, "transform", &Tilt::at(point, width, height).transform());
        });

        let target = card.clone();
        dom::listen(card.as_ref(), "mouseleave", move |_| {
            dom::clear_style(&target, "transform");
        });
    }
}

fn mount_ripples() {
    for button in dom::query_all(RIPPLE_SELECTOR) {
        let target = button.clone();
        dom::listen(button.as_ref(), "click", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Some(ripple) = dom::create("span", RIPPLE_CLASS) else {
                return;
            };
            let (point, _, _) = local_point(&target, event);
            let (left, top) = ripple_position(point);
            dom::set_style(&ripple, "left", &left);
            dom::set_style(&ripple, "top", &top);
            if target.append_child(&ripple).is_err() {
                return;
            }
            Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
        });
    }
}
