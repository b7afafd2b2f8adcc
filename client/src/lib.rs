//! Browser behavior for the MindSpace wellness site.
//!
//! The site is static HTML served by the `server` crate. This crate compiles
//! to WebAssembly with the `hydrate` feature and attaches the interactive
//! widgets; without that feature only the pure state modules build, which is
//! how the unit tests run natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Widget state machines and lookup tables (directory, banner, footer, insights, support motion) |
//! | [`net`] | Wire types and the JSON endpoints the widgets call |
//! | [`util`] | Preferences, translations, timers, clipboard, and DOM glue |
//! | [`error`] | Validation, clipboard, and remote error types |
//! | `components` | Hydrate-only DOM wiring for each widget |

pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod components;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: restore preferences, start the translation load, and
/// mount every widget present on the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    use std::rc::Rc;

    use components::TranslationHub;
    use util::i18n::Translations;
    use util::prefs::{LocalStoragePrefs, PreferenceStore, read_language};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let prefs: Rc<dyn PreferenceStore> = Rc::new(LocalStoragePrefs);
    util::dark_mode::apply(util::dark_mode::read_preference(prefs.as_ref()));

    let lang = read_language(prefs.as_ref());
    let hub = TranslationHub::new(Translations::empty(&lang));
    hub.load(lang);
    components::watch_language(&hub, Rc::clone(&prefs));

    util::dom::on_ready(move || {
        components::helpline_directory::mount(&hub, Rc::clone(&prefs));
        components::quote_banner::mount(&hub);
        components::site_footer::mount(&hub, prefs);
        components::insights_panel::mount();
        components::support_motion::mount();
        log::info!("widgets mounted");
    });
}
