//! Quote banner and daily wellness tip.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Element, FocusEvent, Node};

use super::TranslationHub;
use crate::state::banner::{
    FADE_MS, QUOTES, QuoteRotation, RESUME_AFTER_MS, ROTATE_INTERVAL_MS, RotationCommand, dot_label, quote_view,
    tip_for_weekday,
};
use crate::util::debounce::TimerSlot;
use crate::util::dom;
use crate::util::i18n::Translations;

struct Banner {
    rotation: QuoteRotation,
    translations: Translations,
    text: Element,
    author: Element,
    dots: Vec<Element>,
    interval: Option<Interval>,
    resume: TimerSlot,
}

type Handle = Rc<RefCell<Banner>>;

/// Mount the banner and the tip; either may be absent from the page.
pub fn mount(hub: &TranslationHub) {
    let banner = mount_banner(hub);
    render_tip(&hub.current());
    hub.subscribe(move |table| {
        if let Some(handle) = &banner {
            handle.borrow_mut().translations = table.clone();
            show_current(handle, false);
        }
        render_tip(table);
    });
}

fn mount_banner(hub: &TranslationHub) -> Option<Handle> {
    let root = dom::query(".quote-banner")?;
    let text = dom::query_in(&root, ".quote-banner__text")?;
    let author = dom::query_in(&root, ".quote-banner__author")?;
    let controls = dom::query_in(&root, ".quote-banner__controls")?;

    controls.set_inner_html("");
    let mut dots = Vec::with_capacity(QUOTES.len());
    for index in 0..QUOTES.len() {
        let dot = dom::create("button", "quote-banner__dot")?;
        let _ = dot.set_attribute("aria-label", &dot_label(index));
        let _ = dot.set_attribute("tabindex", "0");
        let _ = controls.append_child(&dot);
        dots.push(dot);
    }

    let (rotation, command) = QuoteRotation::new(dom::prefers_reduced_motion());
    let handle: Handle = Rc::new(RefCell::new(Banner {
        rotation,
        translations: hub.current(),
        text,
        author,
        dots: dots.clone(),
        interval: None,
        resume: TimerSlot::default(),
    }));

    for (index, dot) in dots.iter().enumerate() {
        let handle = Rc::clone(&handle);
        dom::listen(dot.as_ref(), "click", move |_| {
            let result = handle.borrow_mut().rotation.go_to(index);
            match result {
                Ok(command) => {
                    show_current(&handle, false);
                    apply(&handle, command);
                }
                Err(err) => log::warn!("quote navigation ignored: {err}"),
            }
        });
    }

    {
        let handle = Rc::clone(&handle);
        dom::listen(root.as_ref(), "mouseenter", move |_| {
            let command = handle.borrow_mut().rotation.pointer_enter();
            apply(&handle, command);
        });
    }
    {
        let handle = Rc::clone(&handle);
        dom::listen(root.as_ref(), "mouseleave", move |_| {
            let command = handle.borrow_mut().rotation.pointer_leave();
            apply(&handle, command);
        });
    }
    {
        let handle = Rc::clone(&handle);
        dom::listen(root.as_ref(), "focusin", move |_| {
            let command = handle.borrow_mut().rotation.focus_in();
            apply(&handle, command);
        });
    }
    {
        let handle = Rc::clone(&handle);
        let banner_root = root.clone();
        dom::listen(root.as_ref(), "focusout", move |event| {
            let still_inside = event
                .dyn_ref::<FocusEvent>()
                .and_then(FocusEvent::related_target)
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|node| banner_root.contains(Some(&node)));
            let command = handle.borrow_mut().rotation.focus_out(still_inside);
            apply(&handle, command);
        });
    }

    show_current(&handle, false);
    apply(&handle, command);
    Some(handle)
}

fn apply(handle: &Handle, command: RotationCommand) {
    match command {
        RotationCommand::Keep => {}
        RotationCommand::Start => start(handle),
        RotationCommand::Stop => stop(handle),
        RotationCommand::StopThenResume => {
            stop(handle);
            let resume = Rc::clone(handle);
            handle.borrow_mut().resume.replace(RESUME_AFTER_MS, move || {
                let command = resume.borrow_mut().rotation.resume();
                apply(&resume, command);
            });
        }
    }
}

fn start(handle: &Handle) {
    let tick = Rc::clone(handle);
    let interval = Interval::new(ROTATE_INTERVAL_MS, move || {
        tick.borrow_mut().rotation.next();
        show_current(&tick, true);
    });
    // Dropping the previous interval cancels it.
    handle.borrow_mut().interval = Some(interval);
}

fn stop(handle: &Handle) {
    handle.borrow_mut().interval = None;
}

fn show_current(handle: &Handle, fade: bool) {
    let banner = handle.borrow();
    let index = banner.rotation.current();
    for (i, dot) in banner.dots.iter().enumerate() {
        dom::set_class(dot, "active", i == index);
    }
    let view = quote_view(index, &banner.translations);
    let (text, author) = (banner.text.clone(), banner.author.clone());
    if !fade || banner.rotation.reduced_motion() {
        dom::set_text(&text, &view.text);
        dom::set_text(&author, &view.author);
        return;
    }
    dom::set_class(&text, "fade-out", true);
    dom::set_class(&author, "fade-out", true);
    Timeout::new(FADE_MS, move || {
        dom::set_text(&text, &view.text);
        dom::set_text(&author, &view.author);
        dom::set_class(&text, "fade-out", false);
        dom::set_class(&author, "fade-out", false);
    })
    .forget();
}

fn render_tip(translations: &Translations) {
    let Some(section) = dom::query(".wellness-tip") else {
        return;
    };
    let (Some(title), Some(text)) = (
        dom::query_in(&section, ".wellness-tip__title"),
        dom::query_in(&section, ".wellness-tip__text"),
    ) else {
        return;
    };
    let tip = tip_for_weekday(js_sys::Date::new_0().get_day(), translations);
    dom::set_text(&title, &tip.title);
    dom::set_text(&text, &tip.text);
    if let Some(icon) = dom::query_in(&section, ".wellness-tip__icon") {
        dom::set_text(&icon, tip.icon);
    }
    if let Some(action) = dom::query_in(&section, ".wellness-tip__action") {
        let _ = action.set_attribute("href", tip.link);
    }
    if let Some(day) = dom::query_in(&section, ".wellness-tip__day") {
        dom::set_text(&day, &tip.day_label);
    }
}
