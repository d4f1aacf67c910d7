//! Wires widgets onto the static pages. Every widget has a well-known mount
//! element; pages simply omit the elements for widgets they do not use.

use crate::components::{
    archive::ArchiveResults, calendar::Calendar, code_copy::CopyCodeButton,
    comment_section::CommentSection, counter::VisitCounter, dashboard::Dashboard,
    portfolio_counter::PortfolioCounter, recent_comments::RecentComments, search_bar::SearchBar,
    share_buttons::ShareButtons,
};
use crate::utils::{antispam, dom};
use kawara_api_client::ApiClient;
use kawara_common::{
    calendar::{CalendarConfig, CalendarEvent},
    post::ArchiveFilter,
};
use leptos::{mount::mount_to, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub fn mount_all() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    mount_comments(&document);
    mount_recent_comments(&document);
    mount_calendar(&document);
    mount_archive(&document);
    mount_search(&document);
    mount_counter(&document);
    mount_portfolio_counter(&document);
    mount_share_buttons(&document);
    mount_dashboard(&document);
    mount_code_copy(&document);
}

fn element(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn api_client(el: &HtmlElement) -> Option<ApiClient> {
    match el.get_attribute("data-api-base") {
        Some(base) => Some(ApiClient::new(&base)),
        None => {
            log::warn!("mount element #{} is missing data-api-base", el.id());
            None
        }
    }
}

fn mount_comments(document: &Document) {
    let Some(el) = element(document, "comments-section") else {
        return;
    };
    let Some(client) = api_client(&el) else {
        return;
    };
    let Some(slug) = el.get_attribute("data-post-slug") else {
        log::warn!("mount element #comments-section is missing data-post-slug");
        return;
    };
    let Some(sitekey) = el.get_attribute("data-sitekey") else {
        log::warn!("mount element #comments-section is missing data-sitekey");
        return;
    };
    antispam::ensure_loaded(&sitekey);
    mount_to(el, move || {
        view! { <CommentSection client=client slug=slug sitekey=sitekey /> }
    })
    .forget();
}

fn mount_recent_comments(document: &Document) {
    let Some(el) = element(document, "recent-comments") else {
        return;
    };
    let Some(client) = api_client(&el) else {
        return;
    };
    mount_to(el, move || view! { <RecentComments client=client /> }).forget();
}

/// Calendar data is embedded in the page as two JSON script tags, so the
/// widget needs no fetch at all.
fn mount_calendar(document: &Document) {
    let Some(el) = element(document, "calendar") else {
        return;
    };
    let events: Vec<CalendarEvent> = embedded_json(document, "calendar-events").unwrap_or_default();
    let config: CalendarConfig = embedded_json(document, "calendar-config").unwrap_or_default();
    mount_to(el, move || view! { <Calendar events=events config=config /> }).forget();
}

fn embedded_json<T: serde::de::DeserializeOwned>(document: &Document, id: &str) -> Option<T> {
    let text = document.get_element_by_id(id)?.text_content()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("invalid embedded json in #{id}: {e}");
            None
        }
    }
}

/// Only takes over the archive page when a date filter is present in the
/// query string; otherwise the server-rendered listing stays as-is.
fn mount_archive(document: &Document) {
    let Some(el) = element(document, "posts-container") else {
        return;
    };
    let Some(client) = api_client(&el) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(search) = window.location().search() else {
        return;
    };
    let params: Vec<(String, String)> =
        url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect();
    let Some(filter) =
        ArchiveFilter::from_query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    else {
        return;
    };
    dom::hide_element("archive-title");
    dom::clear_element("pagination-container");
    el.set_inner_html("");
    mount_to(el, move || {
        view! { <ArchiveResults client=client filter=filter /> }
    })
    .forget();
}

fn mount_search(document: &Document) {
    let Some(el) = element(document, "site-search") else {
        return;
    };
    let Some(client) = api_client(&el) else {
        return;
    };
    mount_to(el, move || view! { <SearchBar client=client /> }).forget();
}

fn mount_counter(document: &Document) {
    let Some(el) = element(document, "retro-counter-container") else {
        return;
    };
    let Some(client) = api_client(&el) else {
        return;
    };
    mount_to(el, move || view! { <VisitCounter client=client /> }).forget();
}

fn mount_portfolio_counter(document: &Document) {
    let Some(el) = element(document, "counter-display") else {
        return;
    };
    let Some(client) = api_client(&el) else {
        return;
    };
    mount_to(el, move || view! { <PortfolioCounter client=client /> }).forget();
}

/// Appends a copy button to every highlighted code block. Blocks without a
/// recognizable code element are left alone.
fn mount_code_copy(document: &Document) {
    let Ok(blocks) = document.query_selector_all(".highlight") else {
        return;
    };
    for i in 0..blocks.length() {
        let Some(block) = blocks
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let Some(code) = block
            .query_selector("code[data-lang]")
            .ok()
            .flatten()
            .and_then(|code| code.text_content())
        else {
            continue;
        };
        mount_to(block, move || view! { <CopyCodeButton code=code /> }).forget();
    }
}

fn mount_share_buttons(document: &Document) {
    let Some(el) = document
        .query_selector(".share-buttons")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let href = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let title = el.get_attribute("data-title").unwrap_or_else(|| document.title());
    let url = el.get_attribute("data-url").unwrap_or_else(|| href.clone());
    let permalink = el.get_attribute("data-permalink").unwrap_or(href);
    mount_to(el, move || {
        view! { <ShareButtons title=title url=url permalink=permalink /> }
    })
    .forget();
}

fn mount_dashboard(document: &Document) {
    let Some(el) = element(document, "comments-dashboard") else {
        return;
    };
    let Some(client) = api_client(&el) else {
        return;
    };
    let login_url = el
        .get_attribute("data-login-url")
        .unwrap_or_else(|| "/login/".to_string());
    mount_to(el, move || {
        view! { <Dashboard client=client login_url=login_url /> }
    })
    .forget();
}
