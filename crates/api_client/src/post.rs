use super::ApiClient;
use crate::errors::FrontendResult;
use kawara_common::post::PostMeta;

/// Static index of all published posts, generated at site build time.
pub const POST_INDEX_PATH: &str = "/search.json";

impl ApiClient {
    pub async fn post_index(&self) -> FrontendResult<Vec<PostMeta>> {
        self.get_site_json(POST_INDEX_PATH).await
    }
}
