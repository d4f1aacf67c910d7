use url::Url;

/// Builds the share URL for a Mastodon/Misskey style instance. Both expose
/// the same `/share?text=` endpoint, so the instance domain the user entered
/// is all that differs.
pub fn instance_share_url(
    instance: &str,
    title: &str,
    page_url: &str,
) -> Result<Url, url::ParseError> {
    let text = format!("{title}\n{page_url}");
    Url::parse_with_params(&format!("https://{instance}/share"), &[("text", text)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn share_url_percent_encodes_the_text() {
        let url = instance_share_url(
            "mastodon.social",
            "A title & more",
            "https://blog.example.com/post/",
        )
        .expect("valid share url");
        assert_eq!(url.host_str(), Some("mastodon.social"));
        assert_eq!(url.path(), "/share");
        assert_eq!(
            url.query(),
            Some("text=A+title+%26+more%0Ahttps%3A%2F%2Fblog.example.com%2Fpost%2F")
        );
    }

    #[test]
    fn garbage_instance_domains_fail_to_parse() {
        assert!(instance_share_url("not a domain", "t", "u").is_err());
    }
}
