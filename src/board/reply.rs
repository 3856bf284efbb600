//! Reply model.

/// A reply attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Reply {
    /// Unique reply ID.
    pub id: i64,
    /// ID of the owning post.
    pub post_id: i64,
    /// Username of the author.
    pub username: String,
    /// Reply body.
    pub contents: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub modified_at: String,
}

/// Data for creating a new reply.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// ID of the owning post.
    pub post_id: i64,
    /// Username of the author.
    pub username: String,
    /// Reply body.
    pub contents: String,
}

impl NewReply {
    /// Create a new reply.
    pub fn new(post_id: i64, username: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            post_id,
            username: username.into(),
            contents: contents.into(),
        }
    }
}
