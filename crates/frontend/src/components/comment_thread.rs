use crate::utils::formatting;
use kawara_api_client::errors::FrontendResult;
use kawara_common::{
    comment::{Comment, build_comment_tree},
    markup::comment_body_html,
    reply::ReplyTarget,
};
use leptos::{either::EitherOf3, prelude::*};

#[component]
pub fn CommentThread(
    comments: Resource<FrontendResult<Vec<Comment>>>,
    reply_target: RwSignal<ReplyTarget>,
) -> impl IntoView {
    view! {
        <div class="comments-list">
            <Transition fallback=|| view! { <p>"読み込み中..."</p> }>
                {move || Suspend::new(async move {
                    match comments.await {
                        Ok(comments) if comments.is_empty() => {
                            EitherOf3::A(view! { <p>"まだコメントはありません。"</p> })
                        }
                        Ok(comments) => {
                            let forest = build_comment_tree(comments);
                            let blocks = forest
                                .threads()
                                .map(|(depth, comment)| {
                                    comment_block(comment, depth, reply_target)
                                })
                                .collect::<Vec<_>>();
                            EitherOf3::B(view! { <div>{blocks}</div> })
                        }
                        Err(e) => {
                            log::error!("failed to load comments: {e}");
                            EitherOf3::C(
                                view! { <p>"コメントの読み込みに失敗しました。"</p> },
                            )
                        }
                    }
                })}
            </Transition>
        </div>
    }
}

/// A single comment. Reply depth is unbounded and shown as indentation; the
/// walk over the forest is iterative, so there is no render recursion to
/// blow the stack on hostile reply chains.
fn comment_block(
    comment: &Comment,
    depth: usize,
    reply_target: RwSignal<ReplyTarget>,
) -> impl IntoView {
    let indent = format!("margin-left: {}rem;", 2 * depth);
    let anchor = format!("comment-{}", comment.id);
    // The body is set through inner_html to keep line breaks, so it has to
    // be escaped here. The author renders as a text node.
    let body = comment_body_html(&comment.body);
    let time = formatting::comment_time(comment.created_at);
    let is_admin = comment.is_admin;
    let id = comment.id;
    let author = comment.author.clone();
    let reply_author = author.clone();

    view! {
        <div class="comment" id=anchor style=indent>
            <div class="comment-header">
                <strong>{author}</strong>
                <Show when=move || is_admin>
                    <span class="admin-badge">"管理人"</span>
                </Show>
                <time>{time}</time>
            </div>
            <p inner_html=body></p>
            <div class="comment-footer">
                <button
                    class="reply-btn"
                    on:click=move |_| {
                        reply_target.update(|target| target.select(id, reply_author.clone()));
                    }
                >
                    "返信する"
                </button>
            </div>
        </div>
    }
}
