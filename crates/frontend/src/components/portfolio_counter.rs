use kawara_api_client::ApiClient;
use kawara_common::counter::{PORTFOLIO_OFFLINE_TEXT, portfolio_counter_line};
use leptos::{either::Either, prelude::*};

/// Text-only counter variant for the portfolio page, which has no digit
/// boxes. Same endpoint as the blog counter, different fields.
#[component]
pub fn PortfolioCounter(client: ApiClient) -> impl IntoView {
    let hit = Resource::new(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.hit_counter().await }
        },
    );

    view! {
        <Transition fallback=|| view! { <span>"VISITORS: ..."</span> }>
            {move || Suspend::new(async move {
                match hit.await {
                    Ok(res) => {
                        Either::Left(
                            view! { <span>{portfolio_counter_line(res.total, res.today)}</span> },
                        )
                    }
                    Err(e) => {
                        log::error!("failed to hit counter: {e}");
                        Either::Right(view! { <span>{PORTFOLIO_OFFLINE_TEXT}</span> })
                    }
                }
            })}
        </Transition>
    }
}
