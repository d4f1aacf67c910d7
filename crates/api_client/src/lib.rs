use crate::errors::{FrontendError, FrontendResult};
use http::StatusCode;
use serde::{Serialize, de::DeserializeOwned};

pub mod comment;
pub mod counter;
pub mod errors;
pub mod post;

#[cfg(target_family = "wasm")]
use {
    gloo_net::http::{Request, Response},
    send_wrapper::SendWrapper,
    web_sys::RequestCredentials,
};

/// HTTP client for the blog API. Each widget instance owns one, configured
/// from its mount point, so several widgets with different bases can coexist
/// on a page. All requests carry credentials because the backend marks
/// comments from the logged-in admin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    api_base: String,
    #[cfg(not(target_family = "wasm"))]
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            #[cfg(not(target_family = "wasm"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn request_endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    fn query_url<P: Serialize>(&self, path: &str, params: Option<P>) -> FrontendResult<String> {
        let mut url = self.request_endpoint(path);
        if let Some(params) = params {
            let query = serde_urlencoded::to_string(&params)?;
            if !query.is_empty() {
                url = format!("{url}?{query}");
            }
        }
        Ok(url)
    }

    #[cfg(target_family = "wasm")]
    async fn get_query<T, P>(&self, path: &str, params: Option<P>) -> FrontendResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = self.query_url(path, params)?;
        SendWrapper::new(async move {
            let res = Request::get(&url)
                .credentials(RequestCredentials::Include)
                .send()
                .await?;
            handle_json_response(res).await
        })
        .await
    }

    #[cfg(not(target_family = "wasm"))]
    async fn get_query<T, P>(&self, path: &str, params: Option<P>) -> FrontendResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = self.query_url(path, params)?;
        let res = self.client.get(url).send().await?;
        handle_json_response(res).await
    }

    #[cfg(target_family = "wasm")]
    async fn post_json<T, P>(&self, path: &str, params: &P) -> FrontendResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = self.request_endpoint(path);
        let body = serde_json::to_string(params)
            .map_err(|e| FrontendError::new(format!("invalid request payload: {e}")))?;
        SendWrapper::new(async move {
            let res = Request::post(&url)
                .credentials(RequestCredentials::Include)
                .header("content-type", "application/json")
                .body(body)?
                .send()
                .await?;
            handle_json_response(res).await
        })
        .await
    }

    #[cfg(not(target_family = "wasm"))]
    async fn post_json<T, P>(&self, path: &str, params: &P) -> FrontendResult<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let url = self.request_endpoint(path);
        let res = self.client.post(url).json(params).send().await?;
        handle_json_response(res).await
    }

    #[cfg(target_family = "wasm")]
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> FrontendResult<T> {
        let url = self.request_endpoint(path);
        SendWrapper::new(async move {
            let res = Request::post(&url)
                .credentials(RequestCredentials::Include)
                .send()
                .await?;
            handle_json_response(res).await
        })
        .await
    }

    #[cfg(not(target_family = "wasm"))]
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> FrontendResult<T> {
        let url = self.request_endpoint(path);
        let res = self.client.post(url).send().await?;
        handle_json_response(res).await
    }

    #[cfg(target_family = "wasm")]
    async fn delete(&self, path: &str) -> FrontendResult<()> {
        let url = self.request_endpoint(path);
        SendWrapper::new(async move {
            let res = Request::delete(&url)
                .credentials(RequestCredentials::Include)
                .send()
                .await?;
            if res.ok() {
                Ok(())
            } else {
                let status = StatusCode::from_u16(res.status()).ok();
                let text = res.text().await.unwrap_or_default();
                Err(FrontendError::with_status(
                    status,
                    errors::server_error_message(&text),
                ))
            }
        })
        .await
    }

    #[cfg(not(target_family = "wasm"))]
    async fn delete(&self, path: &str) -> FrontendResult<()> {
        let url = self.request_endpoint(path);
        let res = self.client.delete(url).send().await?;
        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = res.text().await.unwrap_or_default();
            Err(FrontendError::with_status(
                Some(status),
                errors::server_error_message(&text),
            ))
        }
    }

    /// Fetches a static site file (the post index) rather than an API
    /// endpoint. In the browser the path is resolved against the page
    /// origin; natively it is resolved against the API base's origin.
    #[cfg(target_family = "wasm")]
    async fn get_site_json<T: DeserializeOwned>(&self, path: &str) -> FrontendResult<T> {
        let path = path.to_string();
        SendWrapper::new(async move {
            let res = Request::get(&path).send().await?;
            handle_json_response(res).await
        })
        .await
    }

    #[cfg(not(target_family = "wasm"))]
    async fn get_site_json<T: DeserializeOwned>(&self, path: &str) -> FrontendResult<T> {
        let url = url::Url::parse(&self.api_base)?.join(path)?;
        let res = self.client.get(url).send().await?;
        handle_json_response(res).await
    }
}

#[cfg(target_family = "wasm")]
async fn handle_json_response<T: DeserializeOwned>(res: Response) -> FrontendResult<T> {
    let status = StatusCode::from_u16(res.status()).ok();
    let ok = res.ok();
    let text = res.text().await?;
    if ok {
        // Malformed bodies count as fetch failures, same as transport errors.
        serde_json::from_str(&text)
            .map_err(|e| FrontendError::new(format!("invalid response body: {e}")))
    } else {
        Err(FrontendError::with_status(
            status,
            errors::server_error_message(&text),
        ))
    }
}

#[cfg(not(target_family = "wasm"))]
async fn handle_json_response<T: DeserializeOwned>(res: reqwest::Response) -> FrontendResult<T> {
    let status = res.status();
    let text = res.text().await?;
    if status.is_success() {
        serde_json::from_str(&text)
            .map_err(|e| FrontendError::new(format!("invalid response body: {e}")))
    } else {
        Err(FrontendError::with_status(
            Some(status),
            errors::server_error_message(&text),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_base_drops_trailing_slashes() {
        let client = ApiClient::new("https://api.example.com/blog/");
        assert_eq!(client.api_base(), "https://api.example.com/blog");
        assert_eq!(
            client.request_endpoint("/comments"),
            "https://api.example.com/blog/comments"
        );
    }

    #[test]
    fn query_url_appends_encoded_parameters() {
        let client = ApiClient::new("https://api.example.com/blog");
        let url = client
            .query_url("/comments", Some([("slug", "hello world")]))
            .expect("serializable params");
        assert_eq!(
            url,
            "https://api.example.com/blog/comments?slug=hello+world"
        );
        let bare = client
            .query_url::<()>("/comments/recent", None)
            .expect("no params");
        assert_eq!(bare, "https://api.example.com/blog/comments/recent");
    }
}
