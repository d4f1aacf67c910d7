use kawara_api_client::ApiClient;
use kawara_common::post::{SEARCH_RESULT_LIMIT, search_posts};
use leptos::prelude::*;

/// Client-side title and tag search over the static post index. The input is
/// disabled until the index has loaded; searching never talks to the server
/// again after that.
#[component]
pub fn SearchBar(client: ApiClient) -> impl IntoView {
    let index = Resource::new(
        || (),
        move |_| {
            let client = client.clone();
            async move {
                client.post_index().await.map_err(|e| {
                    log::error!("failed to load post index: {e}");
                    e
                })
            }
        },
    );
    let query = RwSignal::new(String::new());

    let placeholder = move || match index.get() {
        None => "読み込み中...",
        Some(Err(_)) => "検索が利用できません",
        Some(Ok(_)) => "タイトルまたはタグを入力",
    };
    let disabled = move || !matches!(index.get(), Some(Ok(_)));

    let results = move || {
        let query = query.get();
        index.get().and_then(|index| {
            let posts = index.ok()?;
            if query.trim().is_empty() {
                return None;
            }
            let matched = search_posts(&posts, query.trim());
            if matched.is_empty() {
                return Some(view! { <li class="no-results">"結果なし"</li> }.into_any());
            }
            let items = matched
                .into_iter()
                .take(SEARCH_RESULT_LIMIT)
                .map(|post| {
                    view! {
                        <li>
                            <a href=post.url.clone()>{post.title.clone()}</a>
                        </li>
                    }
                })
                .collect::<Vec<_>>();
            Some(items.into_any())
        })
    };

    view! {
        <div class="site-search">
            <input
                type="search"
                class="search-input"
                placeholder=placeholder
                prop:disabled=disabled
                bind:value=query
            />
            <ul class="search-results">{results}</ul>
        </div>
    }
}
