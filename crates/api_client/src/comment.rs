use super::ApiClient;
use crate::errors::FrontendResult;
use kawara_common::{comment::Comment, newtypes::CommentId};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ListCommentsParams {
    pub slug: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentParams {
    pub author: String,
    pub body: String,
    pub slug: String,
    /// Hidden form field. Sent to the server exactly as submitted, filled or
    /// not; spam enforcement happens server-side only.
    pub honeypot: String,
    /// Opaque anti-spam token, passed through unmodified.
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
}

/// The create endpoint's response body is not contractual beyond being JSON;
/// fields are decoded tolerantly and the caller refetches the list anyway.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SuccessResponse {
    #[serde(default)]
    pub success: bool,
}

impl ApiClient {
    pub async fn list_comments(&self, slug: &str) -> FrontendResult<Vec<Comment>> {
        let params = ListCommentsParams {
            slug: slug.to_string(),
        };
        self.get_query("/comments", Some(params)).await
    }

    pub async fn recent_comments(&self) -> FrontendResult<Vec<Comment>> {
        self.get_query::<_, ()>("/comments/recent", None).await
    }

    pub async fn create_comment(
        &self,
        params: &CreateCommentParams,
    ) -> FrontendResult<SuccessResponse> {
        self.post_json("/comments", params).await
    }

    /// Full list including unapproved comments; requires the admin session
    /// cookie, otherwise the backend answers 401.
    pub async fn admin_comments(&self) -> FrontendResult<Vec<Comment>> {
        self.get_query::<_, ()>("/admin/comments", None).await
    }

    pub async fn delete_comment(&self, id: CommentId) -> FrontendResult<()> {
        self.delete(&format!("/comments/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parent_id_is_absent_for_root_comments() {
        let params = CreateCommentParams {
            author: "Alice".to_string(),
            body: "hi".to_string(),
            slug: "first-post".to_string(),
            honeypot: String::new(),
            token: "tok".to_string(),
            parent_id: None,
        };
        let json = serde_json::to_value(&params).expect("serializable params");
        assert_eq!(json.get("parentId"), None);
        assert_eq!(
            json.get("honeypot").and_then(|v| v.as_str()),
            Some("")
        );
    }

    #[test]
    fn parent_id_is_sent_for_replies() {
        let params = CreateCommentParams {
            parent_id: Some(CommentId(5)),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).expect("serializable params");
        assert_eq!(
            json.get("parentId").and_then(|v| v.as_i64()),
            Some(5)
        );
    }

    #[test]
    fn populated_honeypot_is_not_filtered() {
        let params = CreateCommentParams {
            honeypot: "bot-filled".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).expect("serializable params");
        assert_eq!(
            json.get("honeypot").and_then(|v| v.as_str()),
            Some("bot-filled")
        );
    }
}
