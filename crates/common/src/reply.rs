use crate::newtypes::CommentId;

/// Which comment the next submission replies to. Owned by the comment form;
/// the thread view only ever calls `select`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReplyTarget {
    #[default]
    Idle,
    Targeting {
        id: CommentId,
        author: String,
    },
}

impl ReplyTarget {
    /// Valid from any state, including switching between reply targets.
    pub fn select(&mut self, id: CommentId, author: String) {
        *self = ReplyTarget::Targeting { id, author };
    }

    /// Cancel and successful submission both land back in `Idle`.
    pub fn cancel(&mut self) {
        *self = ReplyTarget::Idle;
    }

    pub fn is_targeting(&self) -> bool {
        matches!(self, ReplyTarget::Targeting { .. })
    }

    /// Parent reference for the submission payload; absent when idle, which
    /// makes the submission a root-level comment.
    pub fn parent_id(&self) -> Option<CommentId> {
        match self {
            ReplyTarget::Idle => None,
            ReplyTarget::Targeting { id, .. } => Some(*id),
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            ReplyTarget::Idle => None,
            ReplyTarget::Targeting { author, .. } => Some(author),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn select_then_cancel_returns_to_idle() {
        let mut target = ReplyTarget::default();
        target.select(CommentId(5), "Alice".to_string());
        assert!(target.is_targeting());
        assert_eq!(target.parent_id(), Some(CommentId(5)));
        assert_eq!(target.author(), Some("Alice"));

        target.cancel();
        assert_eq!(target, ReplyTarget::Idle);
        assert_eq!(target.parent_id(), None);
    }

    #[test]
    fn select_replaces_previous_target() {
        let mut target = ReplyTarget::default();
        target.select(CommentId(1), "Alice".to_string());
        target.select(CommentId(2), "Bob".to_string());
        assert_eq!(target.parent_id(), Some(CommentId(2)));
        assert_eq!(target.author(), Some("Bob"));
    }
}
