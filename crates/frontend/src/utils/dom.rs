//! Small wrappers around browser APIs. Everything degrades to a no-op on
//! the native target so the component code stays testable off-wasm.

#[cfg(target_family = "wasm")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn scroll_into_view(id: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = id;
    }
}

pub fn hide_element(id: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let _ = el.set_attribute("style", "display: none;");
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = id;
    }
}

pub fn clear_element(id: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_inner_html("");
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = id;
    }
}

pub fn prompt(message: &str) -> Option<String> {
    #[cfg(target_family = "wasm")]
    {
        web_sys::window().and_then(|w| w.prompt_with_message(message).ok().flatten())
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = message;
        None
    }
}

pub fn confirm(message: &str) -> bool {
    #[cfg(target_family = "wasm")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = message;
        false
    }
}

pub fn open_in_new_tab(url: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(
                url,
                "_blank",
                "noopener,noreferrer",
            );
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = url;
    }
}

pub fn redirect(url: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = url;
    }
}

pub async fn copy_to_clipboard(text: String) -> bool {
    #[cfg(target_family = "wasm")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .is_ok()
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = text;
        false
    }
}
