//! Browser-side widgets that apply `state` to the static page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site ships server-rendered HTML; each widget finds its root nodes,
//! attaches listeners, and renders from the matching `state` module. A
//! page without a widget's markup simply skips it. Widgets share one
//! [`TranslationHub`] so a `languageChanged` event triggers a single fetch
//! and every widget re-renders from the new table.

pub mod helpline_directory;
pub mod insights_panel;
pub mod quote_banner;
pub mod site_footer;
pub mod support_motion;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::net::api::fetch_translations;
use crate::util::dom;
use crate::util::i18n::Translations;
use crate::util::prefs::{PreferenceStore, read_language};

/// Window event fired by the site's language picker; `detail.language`
/// (or a bare string `detail`) carries the language code.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

type Listener = Rc<dyn Fn(&Translations)>;

struct HubInner {
    current: Translations,
    listeners: Vec<Listener>,
}

/// Current translation table plus the widgets that render from it.
#[derive(Clone)]
pub struct TranslationHub {
    inner: Rc<RefCell<HubInner>>,
}

impl TranslationHub {
    #[must_use]
    pub fn new(initial: Translations) -> Self {
        Self { inner: Rc::new(RefCell::new(HubInner { current: initial, listeners: Vec::new() })) }
    }

    #[must_use]
    pub fn current(&self) -> Translations {
        self.inner.borrow().current.clone()
    }

    pub fn subscribe(&self, f: impl Fn(&Translations) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(f));
    }

    /// Swap in a new table and notify every widget. Listeners run after the
    /// borrow is released so they may read the hub.
    pub fn replace(&self, table: Translations) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.current = table.clone();
            inner.listeners.clone()
        };
        for listener in listeners {
            listener(&table);
        }
    }

    /// Fetch `lang` in the background. On failure the previous table stays.
    pub fn load(&self, lang: String) {
        let hub = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_translations(&lang).await {
                Ok(table) => {
                    log::info!("translations loaded for {lang}");
                    hub.replace(table);
                }
                Err(err) => log::warn!("translations for {lang} unavailable: {err}"),
            }
        });
    }
}

/// Reload translations whenever the language changes.
pub fn watch_language(hub: &TranslationHub, prefs: Rc<dyn PreferenceStore>) {
    let Some(window) = dom::window() else {
        return;
    };
    let hub = hub.clone();
    dom::listen(window.as_ref(), LANGUAGE_CHANGED_EVENT, move |event| {
        let lang = event
            .dyn_ref::<web_sys::CustomEvent>()
            .map(web_sys::CustomEvent::detail)
            .and_then(|detail| {
                detail.as_string().or_else(|| {
                    js_sys::Reflect::get(&detail, &wasm_bindgen::JsValue::from_str("language"))
                        .ok()
                        .and_then(|v| v.as_string())
                })
            })
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| read_language(prefs.as_ref()));
        hub.load(lang);
    });
}
