use crate::utils::{antispam, dom};
use kawara_api_client::{ApiClient, comment::CreateCommentParams, errors::FrontendResult};
use kawara_common::{comment::Comment, reply::ReplyTarget, submission::SubmitGate};
use leptos::prelude::*;
use leptos_use::{UseTimeoutFnReturn, use_timeout_fn};

const STATUS_CLEAR_DELAY_MS: f64 = 5000.0;

#[derive(Clone, PartialEq, Eq)]
struct StatusLine {
    text: String,
    error: bool,
}

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }
}

#[component]
pub fn CommentForm(
    client: ApiClient,
    slug: String,
    sitekey: String,
    reply_target: RwSignal<ReplyTarget>,
    comments: Resource<FrontendResult<Vec<Comment>>>,
) -> impl IntoView {
    let author = signal(String::new());
    let body = signal(String::new());
    let honeypot = signal(String::new());
    let (status, set_status) = signal(None::<StatusLine>);
    let gate = StoredValue::new(SubmitGate::default());

    let submit_action = Action::new(move |(): &()| {
        let client = client.clone();
        let slug = slug.clone();
        let sitekey = sitekey.clone();
        async move {
            set_status.set(Some(StatusLine::info("送信中...")));
            let token = match antispam::acquire_token(&sitekey, "submit").await {
                Ok(token) => token,
                Err(e) => {
                    set_status.set(Some(StatusLine::error(format!("エラー: {e}"))));
                    gate.update_value(|gate| gate.finish());
                    return;
                }
            };
            let params = CreateCommentParams {
                author: author.0.get_untracked(),
                body: body.0.get_untracked(),
                slug,
                honeypot: honeypot.0.get_untracked(),
                token,
                parent_id: reply_target.with_untracked(|target| target.parent_id()),
            };
            match client.create_comment(&params).await {
                Ok(_) => {
                    set_status.set(Some(StatusLine::info("コメントが投稿されました！")));
                    author.1.set(String::new());
                    body.1.set(String::new());
                    honeypot.1.set(String::new());
                    reply_target.update(|target| target.cancel());
                    comments.refetch();
                }
                Err(e) => {
                    // Entered text stays in the form so the user can retry.
                    set_status.set(Some(StatusLine::error(format!("エラー: {e}"))));
                }
            }
            gate.update_value(|gate| gate.finish());
        }
    });
    let pending = submit_action.pending();

    // Duplicate submits while a request is in flight are dropped, not queued.
    let dispatch = move || {
        if gate.try_update_value(|gate| gate.try_begin()).unwrap_or(false) {
            submit_action.dispatch(());
        }
    };

    let UseTimeoutFnReturn {
        start: clear_status,
        ..
    } = use_timeout_fn(move |()| set_status.set(None), STATUS_CLEAR_DELAY_MS);
    Effect::new(move |_| {
        if status.get().is_some() && !pending.get() {
            clear_status(());
        }
    });

    Effect::new(move |_| {
        if reply_target.with(|target| target.is_targeting()) {
            dom::scroll_into_view("comment-form");
        }
    });

    view! {
        <form
            id="comment-form"
            on:submit=move |ev| {
                ev.prevent_default();
                dispatch();
            }
        >
            <Show when=move || reply_target.with(|target| target.is_targeting())>
                <p class="reply-to-indicator">
                    {move || {
                        reply_target
                            .with(|target| {
                                target.author().map(|author| format!("{author}さんへ返信中..."))
                            })
                    }}
                    <button
                        type="button"
                        class="cancel-reply"
                        on:click=move |_| reply_target.update(|target| target.cancel())
                    >
                        "返信をキャンセル"
                    </button>
                </p>
            </Show>
            <input
                type="text"
                name="author"
                placeholder="お名前"
                required
                bind:value=author
                prop:disabled=move || pending.get()
            />
            // Honeypot. The theme css hides it from humans; whatever ends up
            // in it is sent along unmodified and judged server-side.
            <input
                type="text"
                name="username"
                class="hp-field"
                autocomplete="off"
                tabindex="-1"
                aria-hidden="true"
                bind:value=honeypot
            />
            <textarea
                name="body"
                placeholder="コメントを入力"
                required
                prop:value=move || body.0.get()
                on:input=move |ev| body.1.set(event_target_value(&ev))
                prop:disabled=move || pending.get()
            ></textarea>
            <button type="submit" class="submit-comment" prop:disabled=move || pending.get()>
                "送信"
            </button>
            {move || {
                status
                    .get()
                    .map(|line| {
                        let class = if line.error {
                            "comment-status error"
                        } else {
                            "comment-status"
                        };
                        view! { <p class=class>{line.text}</p> }
                    })
            }}
        </form>
    }
}
