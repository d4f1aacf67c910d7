//! Binding to the external anti-spam verification provider. The token is an
//! opaque credential; it is acquired per submission and forwarded to the
//! backend, which does the actual validation.

use kawara_api_client::errors::{FrontendError, FrontendResult};

#[cfg(target_family = "wasm")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = grecaptcha)]
        pub fn ready(callback: &js_sys::Function);

        #[wasm_bindgen(js_namespace = grecaptcha, catch)]
        pub fn execute(site_key: &str, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
    }
}

/// Waits for the provider to be ready, then requests a token scoped to
/// `action`. Slow or failing acquisition only blocks the submission that
/// asked for it, nothing else on the page.
pub async fn acquire_token(site_key: &str, action: &str) -> FrontendResult<String> {
    #[cfg(target_family = "wasm")]
    {
        use send_wrapper::SendWrapper;
        use wasm_bindgen_futures::JsFuture;

        let site_key = site_key.to_string();
        let action = action.to_string();
        SendWrapper::new(async move {
            let ready = js_sys::Promise::new(&mut |resolve, _reject| js::ready(&resolve));
            JsFuture::from(ready).await.map_err(js_error)?;

            let options = js_sys::Object::new();
            js_sys::Reflect::set(&options, &"action".into(), &action.as_str().into())
                .map_err(js_error)?;
            let token = JsFuture::from(js::execute(&site_key, &options).map_err(js_error)?)
                .await
                .map_err(js_error)?;
            token
                .as_string()
                .ok_or_else(|| FrontendError::new("verification token is not a string"))
        })
        .await
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = (site_key, action);
        Err(FrontendError::new(
            "spam verification is only available in the browser",
        ))
    }
}

#[cfg(target_family = "wasm")]
fn js_error(value: wasm_bindgen::JsValue) -> FrontendError {
    FrontendError::new(format!("spam verification failed: {value:?}"))
}

/// Injects the provider script once, keyed on the configured site key. Pages
/// without a comment form never load it.
pub fn ensure_loaded(site_key: &str) {
    #[cfg(target_family = "wasm")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let selector = "script[src^='https://www.google.com/recaptcha/api.js']";
        if let Ok(Some(_)) = document.query_selector(selector) {
            return;
        }
        let Ok(script) = document.create_element("script") else {
            return;
        };
        let src = format!("https://www.google.com/recaptcha/api.js?render={site_key}");
        let _ = script.set_attribute("src", &src);
        if let Some(head) = document.head() {
            let _ = head.append_child(&script);
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = site_key;
    }
}
