use kawara_api_client::{ApiClient, errors::FrontendError};
use kawara_common::{comment::comment_excerpt, post::PostMeta};
use leptos::{either::EitherOf3, prelude::*};
use std::collections::HashMap;

const EXCERPT_CHARS: usize = 20;

/// Sidebar list of the latest comments across all posts. The API only knows
/// slugs, so entries are joined against the static post index client-side;
/// comments on posts missing from the index are skipped.
#[component]
pub fn RecentComments(client: ApiClient) -> impl IntoView {
    let data = Resource::new(
        || (),
        move |_| {
            let client = client.clone();
            async move {
                let comments = client.recent_comments().await?;
                let posts = client.post_index().await?;
                Ok::<_, FrontendError>((comments, posts))
            }
        },
    );

    view! {
        <ul class="recent-comments">
            <Transition fallback=|| view! { <li>"読み込み中..."</li> }>
                {move || Suspend::new(async move {
                    match data.await {
                        Ok((comments, _)) if comments.is_empty() => {
                            EitherOf3::A(view! { <li>"まだコメントはありません。"</li> })
                        }
                        Ok((comments, posts)) => {
                            let by_slug: HashMap<&str, &PostMeta> =
                                posts.iter().map(|p| (p.slug.as_str(), p)).collect();
                            let items = comments
                                .iter()
                                .filter_map(|comment| {
                                    let post = by_slug.get(comment.post_slug.as_str())?;
                                    let href = format!("{}#comment-{}", post.url, comment.id);
                                    let excerpt = comment_excerpt(&comment.body, EXCERPT_CHARS);
                                    Some(view! {
                                        <li>
                                            <a href=href>
                                                <span class="comment-body">
                                                    {format!("「{excerpt}」")}
                                                </span>
                                                " "
                                                <span class="comment-meta">
                                                    {format!("on {}", post.title)}
                                                </span>
                                            </a>
                                        </li>
                                    })
                                })
                                .collect::<Vec<_>>();
                            EitherOf3::B(items)
                        }
                        Err(e) => {
                            log::error!("failed to load recent comments: {e}");
                            EitherOf3::C(
                                view! { <li>"コメントの読み込みに失敗しました。"</li> },
                            )
                        }
                    }
                })}
            </Transition>
        </ul>
    }
}
