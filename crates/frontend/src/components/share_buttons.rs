use crate::utils::dom;
use kawara_common::share::instance_share_url;
use leptos::{prelude::*, task::spawn_local};
use leptos_use::{UseTimeoutFnReturn, use_timeout_fn};

const COPY_NOTICE_MS: f64 = 2000.0;

/// Fediverse share buttons plus a copy-URL button. There is no central share
/// endpoint for Mastodon or Misskey, so the user is asked for their own
/// instance's domain each time.
#[component]
pub fn ShareButtons(title: String, url: String, permalink: String) -> impl IntoView {
    let title = StoredValue::new(title);
    let url = StoredValue::new(url);
    let (copy_notice, set_copy_notice) = signal(None::<&'static str>);

    let UseTimeoutFnReturn {
        start: clear_notice,
        ..
    } = use_timeout_fn(move |()| set_copy_notice.set(None), COPY_NOTICE_MS);
    Effect::new(move |_| {
        if copy_notice.get().is_some() {
            clear_notice(());
        }
    });

    let share_to = move |service: &str, example: &str| {
        let message = format!(
            "あなたの{service}インスタンスのドメインを入力してください (例: {example})"
        );
        let Some(instance) = dom::prompt(&message) else {
            return;
        };
        let instance = instance.trim();
        if instance.is_empty() {
            return;
        }
        let share_url = title.with_value(|title| {
            url.with_value(|url| instance_share_url(instance, title, url))
        });
        match share_url {
            Ok(share_url) => dom::open_in_new_tab(share_url.as_str()),
            Err(e) => log::warn!("invalid share instance {instance}: {e}"),
        }
    };

    let copy = move |_| {
        let permalink = permalink.clone();
        spawn_local(async move {
            let notice = if dom::copy_to_clipboard(permalink).await {
                "URLをコピーしました！"
            } else {
                "コピーに失敗しました"
            };
            set_copy_notice.set(Some(notice));
        });
    };

    view! {
        <div class="share-buttons-inner">
            <button
                type="button"
                class="share-btn share-mastodon"
                on:click=move |_| share_to("Mastodon", "mastodon.social")
            >
                "Mastodonで共有"
            </button>
            <button
                type="button"
                class="share-btn share-misskey"
                on:click=move |_| share_to("Misskey", "misskey.io")
            >
                "Misskeyで共有"
            </button>
            <button type="button" class="share-btn share-copy" on:click=copy>
                "URLをコピー"
            </button>
            {move || {
                copy_notice.get().map(|notice| view! { <span class="copy-notice">{notice}</span> })
            }}
        </div>
    }
}
