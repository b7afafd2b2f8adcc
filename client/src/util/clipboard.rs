//! Clipboard writes with a synchronous fallback.
//!
//! The primary path is the async Clipboard API. When it is missing, rejects,
//! or does not settle within the outbound timeout, the text is copied via a
//! hidden textarea and `execCommand("copy")`. Only when both fail does the
//! caller see a [`CopyError`].

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::error::CopyError;

/// Clipboard backend seam. The browser implementation lives behind
/// `hydrate`; tests supply recording fakes.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    /// Asynchronous primary write.
    async fn write_primary(&self, text: &str) -> Result<(), String>;
    /// Synchronous fallback write.
    fn write_fallback(&self, text: &str) -> Result<(), String>;
}

impl<T: Clipboard + ?Sized> Clipboard for &T {
    async fn write_primary(&self, text: &str) -> Result<(), String> {
        (**self).write_primary(text).await
    }

    fn write_fallback(&self, text: &str) -> Result<(), String> {
        (**self).write_fallback(text)
    }
}

/// Write `text`, falling back to the secondary mechanism on primary failure.
///
/// # Errors
///
/// Returns [`CopyError`] carrying both failure reasons when neither
/// mechanism succeeds.
pub async fn copy_with_fallback<C: Clipboard>(clipboard: &C, text: &str) -> Result<(), CopyError> {
    let Err(primary) = clipboard.write_primary(text).await else {
        return Ok(());
    };
    log::warn!("clipboard write failed, trying fallback: {primary}");
    clipboard
        .write_fallback(text)
        .map_err(|fallback| {
            log::error!("fallback copy failed: {fallback}");
            CopyError { primary, fallback }
        })
}

/// Browser clipboard: `navigator.clipboard.writeText`, then `execCommand`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

#[cfg(feature = "hydrate")]
fn js_err(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl Clipboard for BrowserClipboard {
    async fn write_primary(&self, text: &str) -> Result<(), String> {
        use futures::future::{Either, select};
        use std::pin::pin;
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or("no window")?;
        let navigator = window.navigator();
        let raw = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard")).map_err(|e| js_err(&e))?;
        if raw.is_undefined() || raw.is_null() {
            return Err("clipboard API unavailable".to_owned());
        }
        let clipboard: web_sys::Clipboard = raw.unchecked_into();

        let write = pin!(wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)));
        let timeout = pin!(gloo_timers::future::TimeoutFuture::new(crate::net::api::OUTBOUND_TIMEOUT_MS));
        match select(write, timeout).await {
            Either::Left((Ok(_), _)) => Ok(()),
            Either::Left((Err(e), _)) => Err(js_err(&e)),
            Either::Right(_) => Err("clipboard write timed out".to_owned()),
        }
    }

    fn write_fallback(&self, text: &str) -> Result<(), String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let body = document.body().ok_or("no body")?;
        let textarea: web_sys::HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(|e| js_err(&e))?
            .dyn_into()
            .map_err(|_| "textarea cast failed".to_owned())?;
        textarea.set_value(text);
        let style = textarea.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-9999px");
        body.append_child(&textarea).map_err(|e| js_err(&e))?;
        textarea.select();

        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .ok_or("document is not an HTML document")
            .map(|doc| doc.exec_command("copy"));
        let _ = body.remove_child(&textarea);

        match copied? {
            Ok(true) => Ok(()),
            Ok(false) => Err("execCommand(\"copy\") was refused".to_owned()),
            Err(e) => Err(js_err(&e)),
        }
    }
}
