use crate::newtypes::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single comment as returned by the API. The list endpoint returns these
/// flat and in server order; reply relations only exist through `parent_id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub parent_id: Option<CommentId>,
    #[serde(default)]
    pub author: String,
    pub body: String,
    pub post_slug: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    children: Vec<usize>,
}

/// Reply forest over an arena of nodes. Rebuilt from scratch on every fetch,
/// never patched incrementally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentForest {
    nodes: Vec<CommentNode>,
    roots: Vec<usize>,
    index_by_id: HashMap<CommentId, usize>,
}

/// Links a flat comment list into a forest in O(n). The arena is filled in
/// input order, then each comment is attached to its parent if that id exists
/// anywhere in the same fetch. A missing parent (deleted, rejected, or plain
/// inconsistent data) promotes the comment to a root instead of erroring.
pub fn build_comment_tree(comments: Vec<Comment>) -> CommentForest {
    let mut index_by_id = HashMap::with_capacity(comments.len());
    let mut nodes = Vec::with_capacity(comments.len());
    for comment in comments {
        index_by_id.insert(comment.id, nodes.len());
        nodes.push(CommentNode {
            comment,
            children: Vec::new(),
        });
    }

    let mut roots = Vec::new();
    for index in 0..nodes.len() {
        let parent = nodes[index]
            .comment
            .parent_id
            .and_then(|id| index_by_id.get(&id).copied());
        match parent {
            Some(parent) => nodes[parent].children.push(index),
            None => roots.push(index),
        }
    }

    CommentForest {
        nodes,
        roots,
        index_by_id,
    }
}

impl CommentForest {
    /// Total number of comments in the arena, including any that are
    /// unreachable from the roots (a comment claiming itself as parent).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_ids(&self) -> Vec<CommentId> {
        self.roots
            .iter()
            .map(|i| self.nodes[*i].comment.id)
            .collect()
    }

    pub fn children_of(&self, id: CommentId) -> Vec<CommentId> {
        self.index_by_id
            .get(&id)
            .map(|i| {
                self.nodes[*i]
                    .children
                    .iter()
                    .map(|c| self.nodes[*c].comment.id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Depth-first walk over the forest with an explicit work stack, so reply
    /// chains of untrusted depth cannot exhaust the call stack. Siblings keep
    /// their input order.
    pub fn threads(&self) -> Threads<'_> {
        let stack = self.roots.iter().rev().map(|i| (*i, 0)).collect();
        Threads {
            forest: self,
            stack,
        }
    }
}

pub struct Threads<'a> {
    forest: &'a CommentForest,
    stack: Vec<(usize, usize)>,
}

impl<'a> Iterator for Threads<'a> {
    type Item = (usize, &'a Comment);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, depth) = self.stack.pop()?;
        let node = &self.forest.nodes[index];
        for child in node.children.iter().rev() {
            self.stack.push((*child, depth + 1));
        }
        Some((depth, &node.comment))
    }
}

/// Shortened body for the recent-comments widget, counted in characters so
/// multibyte text doesn't get cut mid-codepoint.
pub fn comment_excerpt(body: &str, max_chars: usize) -> String {
    if body.chars().count() > max_chars {
        let truncated: String = body.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn comment(id: i32, parent_id: Option<i32>) -> Comment {
        Comment {
            id: CommentId(id),
            parent_id: parent_id.map(CommentId),
            author: format!("author-{id}"),
            body: format!("body-{id}"),
            post_slug: "some-post".to_string(),
            is_approved: true,
            is_admin: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single()
                .unwrap_or_default(),
        }
    }

    #[test]
    fn orphans_become_roots() {
        let forest =
            build_comment_tree(vec![comment(1, None), comment(2, Some(1)), comment(3, Some(99))]);
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.root_ids(), vec![CommentId(1), CommentId(3)]);
        assert_eq!(forest.children_of(CommentId(1)), vec![CommentId(2)]);
        assert_eq!(forest.children_of(CommentId(3)), vec![]);
        assert_eq!(forest.children_of(CommentId(99)), vec![]);
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        let forest = build_comment_tree(vec![]);
        assert!(forest.is_empty());
        assert_eq!(forest.threads().count(), 0);
    }

    #[test]
    fn node_count_matches_input_length() {
        let input = vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, Some(2)),
            comment(4, None),
            comment(5, Some(4)),
        ];
        let forest = build_comment_tree(input.clone());
        assert_eq!(forest.len(), input.len());
        assert_eq!(forest.threads().count(), input.len());
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let input = vec![comment(1, None), comment(2, Some(1)), comment(3, None)];
        assert_eq!(
            build_comment_tree(input.clone()),
            build_comment_tree(input)
        );
    }

    #[test]
    fn sibling_order_follows_input_order() {
        // Deliberately not sorted by id; the incoming order must win.
        let forest = build_comment_tree(vec![
            comment(5, None),
            comment(2, None),
            comment(9, Some(2)),
            comment(7, Some(2)),
        ]);
        assert_eq!(forest.root_ids(), vec![CommentId(5), CommentId(2)]);
        assert_eq!(
            forest.children_of(CommentId(2)),
            vec![CommentId(9), CommentId(7)]
        );
    }

    #[test]
    fn forward_reference_resolves_against_full_fetch() {
        // The parent appears after the child in the list; the lookup is built
        // over the whole fetch before linking, so this still nests.
        let forest = build_comment_tree(vec![comment(2, Some(1)), comment(1, None)]);
        assert_eq!(forest.root_ids(), vec![CommentId(1)]);
        assert_eq!(forest.children_of(CommentId(1)), vec![CommentId(2)]);
    }

    #[test]
    fn threads_walk_depth_first_with_depths() {
        let forest = build_comment_tree(vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, Some(2)),
            comment(4, Some(1)),
            comment(5, None),
        ]);
        let walk: Vec<_> = forest
            .threads()
            .map(|(depth, c)| (depth, c.id.0))
            .collect();
        assert_eq!(walk, vec![(0, 1), (1, 2), (2, 3), (1, 4), (0, 5)]);
    }

    #[test]
    fn self_referential_comment_is_counted_but_not_rendered() {
        let forest = build_comment_tree(vec![comment(1, None), comment(2, Some(2))]);
        assert_eq!(forest.len(), 2);
        let rendered: Vec<_> = forest.threads().map(|(_, c)| c.id.0).collect();
        assert_eq!(rendered, vec![1]);
    }

    #[test]
    fn excerpt_truncates_by_characters() {
        assert_eq!(comment_excerpt("short", 20), "short");
        assert_eq!(
            comment_excerpt("あいうえおかきくけこさしすせそたちつてとな", 20),
            "あいうえおかきくけこさしすせそたちつてと..."
        );
        let exactly = "x".repeat(20);
        assert_eq!(comment_excerpt(&exactly, 20), exactly);
    }

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "id": 7,
            "parentId": null,
            "author": "",
            "body": "hello",
            "postSlug": "first-post",
            "isApproved": true,
            "isAdmin": false,
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).expect("valid comment json");
        assert_eq!(comment.id, CommentId(7));
        assert_eq!(comment.parent_id, None);
        assert_eq!(comment.author, "");
    }
}
