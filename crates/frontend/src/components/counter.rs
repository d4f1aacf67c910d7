use kawara_api_client::ApiClient;
use kawara_common::counter::{format_count, pad_counter};
use leptos::prelude::*;

/// Retro hit counter. The POST both increments and reads the count; a failed
/// request renders the padded error text in the same digit boxes.
#[component]
pub fn VisitCounter(client: ApiClient) -> impl IntoView {
    let hit = Resource::new(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.hit_counter().await }
        },
    );

    view! {
        <div
            class="retro-counter"
            class=(
                "is-kiriban",
                move || hit.get().is_some_and(|res| res.is_ok_and(|r| r.is_kiriban)),
            )
        >
            <Transition fallback=|| view! { <span class="digit">"…"</span> }>
                {move || Suspend::new(async move {
                    let text = match hit.await {
                        Ok(res) => format_count(res.count),
                        Err(e) => {
                            log::error!("failed to hit counter: {e}");
                            pad_counter("ERROR")
                        }
                    };
                    text.chars()
                        .map(|c| view! { <span class="digit">{c.to_string()}</span> })
                        .collect::<Vec<_>>()
                })}
            </Transition>
        </div>
    }
}
