use crate::utils::{dom, formatting};
use kawara_api_client::ApiClient;
use kawara_common::{comment::Comment, newtypes::CommentId};
use leptos::{either::EitherOf3, prelude::*};

/// Moderation table for all comments, approved or not. The page sits behind
/// the backend's auth cookie; a 401 sends the browser to the login page
/// instead of rendering an error.
#[component]
pub fn Dashboard(client: ApiClient, login_url: String) -> impl IntoView {
    let login_url = StoredValue::new(login_url);
    let comments = {
        let client = client.clone();
        Resource::new(
            || (),
            move |_| {
                let client = client.clone();
                async move { client.admin_comments().await }
            },
        )
    };

    let delete_action = Action::new(move |id: &CommentId| {
        let client = client.clone();
        let id = *id;
        async move {
            match client.delete_comment(id).await {
                Ok(()) => comments.refetch(),
                Err(e) => log::error!("failed to delete comment {id}: {e}"),
            }
        }
    });

    view! {
        <div class="dashboard">
            <Transition fallback=|| view! { <p>"読み込み中..."</p> }>
                {move || Suspend::new(async move {
                    match comments.await {
                        Ok(comments) if comments.is_empty() => {
                            EitherOf3::A(view! { <p>"コメントはまだありません。"</p> })
                        }
                        Ok(comments) => {
                            let rows = comments
                                .iter()
                                .map(|comment| comment_row(comment, delete_action))
                                .collect::<Vec<_>>();
                            EitherOf3::B(
                                view! {
                                    <table class="dashboard-table">
                                        <thead>
                                            <tr>
                                                <th>"ID"</th>
                                                <th>"投稿者"</th>
                                                <th>"コメント"</th>
                                                <th>"記事Slug"</th>
                                                <th>"状態"</th>
                                                <th>"投稿日時"</th>
                                                <th>"削除"</th>
                                            </tr>
                                        </thead>
                                        <tbody>{rows}</tbody>
                                    </table>
                                },
                            )
                        }
                        Err(e) if e.is_unauthorized() => {
                            login_url.with_value(|login_url| dom::redirect(login_url));
                            EitherOf3::C(view! { <p>"ログインページへ移動します..."</p> })
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

fn comment_row(comment: &Comment, delete_action: Action<CommentId, ()>) -> impl IntoView {
    let id = comment.id;
    let author = if comment.is_admin {
        format!("{} (管理人)", comment.author)
    } else {
        comment.author.clone()
    };
    let status = if comment.is_approved {
        "承認済み"
    } else {
        "未承認"
    };
    let delete = move |_| {
        if dom::confirm(&format!("コメントID: {id} を本当に削除しますか？")) {
            delete_action.dispatch(id);
        }
    };

    view! {
        <tr>
            <td>{id.0}</td>
            <td>{author}</td>
            <td class="comment-body">{comment.body.clone()}</td>
            <td>{comment.post_slug.clone()}</td>
            <td>{status}</td>
            <td>{formatting::admin_time(comment.created_at)}</td>
            <td>
                <button type="button" class="delete-btn" on:click=delete>
                    "削除"
                </button>
            </td>
        </tr>
    }
}
