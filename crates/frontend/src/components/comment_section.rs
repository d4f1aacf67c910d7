use crate::components::{comment_form::CommentForm, comment_thread::CommentThread};
use kawara_api_client::ApiClient;
use kawara_common::reply::ReplyTarget;
use leptos::prelude::*;

/// One comment widget instance: the thread, the submission form, and the
/// state they share. Scoped to a single article slug for its whole lifetime;
/// the resource is the only source of truth and is refetched after every
/// successful mutation instead of patching locally.
#[component]
pub fn CommentSection(client: ApiClient, slug: String, sitekey: String) -> impl IntoView {
    let reply_target = RwSignal::new(ReplyTarget::Idle);
    let comments = {
        let client = client.clone();
        let slug = slug.clone();
        Resource::new(
            || (),
            move |_| {
                let client = client.clone();
                let slug = slug.clone();
                async move { client.list_comments(&slug).await }
            },
        )
    };

    view! {
        <CommentThread comments=comments reply_target=reply_target />
        <CommentForm
            client=client
            slug=slug
            sitekey=sitekey
            reply_target=reply_target
            comments=comments
        />
    }
}
