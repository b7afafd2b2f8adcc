//! Site footer: back-to-top, newsletter signup, accordions, and the
//! language/theme controls.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement};

use super::TranslationHub;
use crate::net::api;
use crate::state::footer::{
    BUTTON_RESET_MS, NewsletterForm, SCROLL_THROTTLE_MS, TOAST_MS, ToastKind, back_to_top_visible, toggled_expanded,
};
use crate::util::debounce::Throttle;
use crate::util::prefs::{PreferenceStore, read_language, set_language};
use crate::util::{dark_mode, dom};

const TOAST_CLASS: &str = "footer-toast";

pub fn mount(hub: &TranslationHub, prefs: Rc<dyn PreferenceStore>) {
    mount_back_to_top();
    mount_newsletter();
    mount_accordions();
    mount_language_select(hub, Rc::clone(&prefs));
    mount_theme_toggle(prefs);
}

fn mount_back_to_top() {
    let (Some(button), Some(window)) = (dom::query("#backToTop"), dom::window()) else {
        return;
    };
    let refresh = {
        let button = button.clone();
        move || dom::set_class(&button, "visible", back_to_top_visible(dom::scroll_y()))
    };
    refresh();

    let throttle = Rc::new(RefCell::new(Throttle::default()));
    dom::listen(window.as_ref(), "scroll", move |_| {
        if !throttle.borrow_mut().signal() {
            return;
        }
        let (throttle, refresh) = (Rc::clone(&throttle), refresh.clone());
        Timeout::new(SCROLL_THROTTLE_MS, move || {
            refresh();
            throttle.borrow_mut().complete();
        })
        .forget();
    });
    dom::listen(button.as_ref(), "click", move |_| dom::scroll_to_top(!dom::prefers_reduced_motion()));
}

// =============================================================================
// NEWSLETTER
// =============================================================================

fn mount_newsletter() {
    let Some(form_el) = dom::query("#newsletterForm") else {
        return;
    };
    let (Some(input), Some(button)) = (
        dom::query_in(&form_el, ".mb-footer__newsletter-input").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
        dom::query_in(&form_el, ".mb-footer__newsletter-btn").and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()),
    ) else {
        return;
    };
    let form = Rc::new(RefCell::new(NewsletterForm::new()));
    let original_label = button.inner_html();

    dom::listen(form_el.as_ref(), "submit", move |event| {
        event.prevent_default();
        let now = dom::now_ms();
        let request = form.borrow_mut().submit(&input.value());
        let request = match request {
            Ok(request) => request,
            Err(crate::error::ValidationError::MissingEmail) => return,
            Err(err) => {
                form.borrow_mut().reject(&err, now);
                show_toast(&form.borrow(), now);
                return;
            }
        };

        button.set_disabled(true);
        let (form, input, button, original_label) =
            (Rc::clone(&form), input.clone(), button.clone(), original_label.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::subscribe(&request).await;
            let now = dom::now_ms();
            let clear_input = form.borrow_mut().complete(result, now);
            show_toast(&form.borrow(), now);
            if !clear_input {
                button.set_disabled(false);
                return;
            }
            input.set_value("");
            button.set_inner_html("<ion-icon name=\"checkmark-outline\"></ion-icon> Subscribed!");
            dom::set_style(&button, "background", "linear-gradient(135deg, #10b981 0%, #059669 100%)");
            Timeout::new(BUTTON_RESET_MS, move || {
                form.borrow_mut().settle(dom::now_ms());
                button.set_inner_html(&original_label);
                dom::clear_style(&button, "background");
                button.set_disabled(false);
            })
            .forget();
        });
    });
}

fn show_toast(form: &NewsletterForm, now_ms: f64) {
    let Some(toast) = form.toast(now_ms) else {
        return;
    };
    let Some(el) = dom::query(&format!(".{TOAST_CLASS}")).or_else(create_toast) else {
        return;
    };
    dom::set_text(&el, &toast.message);
    dom::set_class(&el, "footer-toast--error", toast.kind == ToastKind::Error);
    dom::set_style(&el, "opacity", "1");
    dom::set_style(&el, "transform", "translateX(-50%) translateY(0)");
    Timeout::new(TOAST_MS, move || {
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", "translateX(-50%) translateY(20px)");
    })
    .forget();
}

fn create_toast() -> Option<Element> {
    let el = dom::create("div", TOAST_CLASS)?;
    let _ = el.set_attribute("role", "status");
    dom::set_style(&el, "opacity", "0");
    dom::document()?.body()?.append_child(&el).ok()?;
    Some(el)
}

// =============================================================================
// ACCORDION AND CONTROLS
// =============================================================================

fn mount_accordions() {
    for button in dom::query_all(".mb-footer__accordion-btn") {
        let target = button.clone();
        dom::listen(button.as_ref(), "click", move |_| {
            let expanded = toggled_expanded(target.get_attribute("aria-expanded").as_deref());
            let _ = target.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
        });
    }
}

fn mount_language_select(hub: &TranslationHub, prefs: Rc<dyn PreferenceStore>) {
    let Some(select) = dom::query("#footerLangSelect").and_then(|el| el.dyn_into::<HtmlSelectElement>().ok()) else {
        return;
    };
    select.set_value(&read_language(prefs.as_ref()));
    let hub = hub.clone();
    let target = select.clone();
    dom::listen(select.as_ref(), "change", move |_| {
        let lang = target.value();
        set_language(prefs.as_ref(), &lang);
        let header = dom::query("[data-language-select]").and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
        match header {
            // The header picker broadcasts `languageChanged`, which reloads
            // the shared table.
            Some(header) => {
                header.set_value(&lang);
                let init = web_sys::EventInit::new();
                init.set_bubbles(true);
                if let Ok(change) = web_sys::Event::new_with_event_init_dict("change", &init) {
                    let _ = header.dispatch_event(&change);
                }
            }
            None => hub.load(lang),
        }
    });
}

fn mount_theme_toggle(prefs: Rc<dyn PreferenceStore>) {
    let Some(toggle) = dom::query("#footerThemeToggle").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) else {
        return;
    };
    toggle.set_checked(dark_mode::read_preference(prefs.as_ref()));
    let target = toggle.clone();
    dom::listen(toggle.as_ref(), "change", move |_| {
        let enabled = target.checked();
        dark_mode::set(prefs.as_ref(), enabled);
        if let Some(header) =
            dom::query("[data-theme-toggle]").and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            if header.checked() != enabled {
                header.set_checked(enabled);
            }
        }
    });
}
