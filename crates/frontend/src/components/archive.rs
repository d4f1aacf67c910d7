use kawara_api_client::ApiClient;
use kawara_common::post::ArchiveFilter;
use leptos::{either::EitherOf3, prelude::*};

/// Replaces the server-rendered post listing with one filtered by the
/// `year`/`month`/`date` query parameters.
#[component]
pub fn ArchiveResults(client: ApiClient, filter: ArchiveFilter) -> impl IntoView {
    let posts = Resource::new(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.post_index().await }
        },
    );
    let heading = filter.heading();
    let render_filter = StoredValue::new(filter);

    view! {
        <section class="archive-results">
            <h2>{heading}</h2>
            <Transition fallback=|| view! { <p>"読み込み中..."</p> }>
                {move || Suspend::new(async move {
                    match posts.await {
                        Ok(posts) => {
                            let matched = render_filter
                                .with_value(|filter| {
                                    posts
                                        .iter()
                                        .filter(|post| filter.matches(post))
                                        .cloned()
                                        .collect::<Vec<_>>()
                                });
                            if matched.is_empty() {
                                EitherOf3::A(view! { <p>"該当する記事はありません。"</p> })
                            } else {
                                let articles = matched
                                    .into_iter()
                                    .map(|post| {
                                        view! {
                                            <article class="archive-post">
                                                <h3>
                                                    <a href=post.url.clone()>{post.title.clone()}</a>
                                                </h3>
                                                <p class="post-date">
                                                    {format!("公開日: {}", post.formatted_date)}
                                                </p>
                                                <p class="post-summary">{post.summary.clone()}</p>
                                            </article>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                EitherOf3::B(articles)
                            }
                        }
                        Err(e) => {
                            log::error!("failed to load post index: {e}");
                            EitherOf3::C(
                                view! { <p>"記事の読み込み中にエラーが発生しました。"</p> },
                            )
                        }
                    }
                })}
            </Transition>
        </section>
    }
}
