use crate::utils::dom;
use leptos::{prelude::*, task::spawn_local};
use leptos_use::{UseTimeoutFnReturn, use_timeout_fn};

const LABEL_RESET_MS: f64 = 2000.0;

/// Copy button appended to one highlighted code block. The code text is
/// captured at mount time; highlighted blocks are static content.
#[component]
pub fn CopyCodeButton(code: String) -> impl IntoView {
    let label = RwSignal::new("Copy");

    let UseTimeoutFnReturn { start: reset, .. } =
        use_timeout_fn(move |()| label.set("Copy"), LABEL_RESET_MS);
    Effect::new(move |_| {
        if label.get() != "Copy" {
            reset(());
        }
    });

    let copy = move |_| {
        let code = code.clone();
        spawn_local(async move {
            if dom::copy_to_clipboard(code).await {
                label.set("Copied!");
            }
        });
    };

    view! {
        <button type="button" class="copy-code-button" on:click=copy>
            {move || label.get()}
        </button>
    }
}
