//! Thin wrappers over blocking window dialogs and navigation.
//!
//! TRADE-OFFS
//! ==========
//! User-facing failures are reported with blocking `alert()` dialogs. Without
//! a window (native builds) the message goes to the log instead.

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
            return;
        }
    }
    log::info!("alert: {message}");
}

/// Show a prompt pre-filled with `value`, used as a copy-this-link dialog.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn prompt_copy(label: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.prompt_with_message_and_default(label, value) {
                log::warn!("prompt failed: {e:?}");
            }
        }
    }
}

/// Open `url` in a new tab.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("could not open {url}: {e:?}");
            }
        }
    }
}

/// Step back in session history.
pub fn history_back() {
    #[cfg(feature = "csr")]
    {
        let history = web_sys::window().and_then(|w| w.history().ok());
        if let Some(history) = history {
            if let Err(e) = history.back() {
                log::warn!("history.back failed: {e:?}");
            }
        }
    }
}

/// Absolute URL for an in-app path, for sharing.
pub fn absolute_url(path: &str) -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return format!("{origin}{path}");
        }
    }
    path.to_owned()
}

/// `(viewport height, scroll offset, content height)` of the document.
#[cfg(feature = "csr")]
pub fn document_scroll() -> Option<(i32, i32, i32)> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some((root.client_height(), root.scroll_top(), root.scroll_height()))
}

/// Object URL previewing the first file picked in an `<input type="file">`.
#[cfg(feature = "csr")]
pub fn picked_file_url(ev: &leptos::ev::Event) -> Option<String> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    web_sys::Url::create_object_url_with_blob(&file).ok()
}

/// Native builds never see file input events.
#[cfg(not(feature = "csr"))]
pub fn picked_file_url(_ev: &leptos::ev::Event) -> Option<String> {
    None
}
