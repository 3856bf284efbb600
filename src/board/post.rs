//! Post model.

/// A free board post.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Username of the author.
    pub username: String,
    /// Post body.
    pub contents: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub modified_at: String,
}

impl Post {
    /// Check if the post was edited after creation.
    pub fn is_modified(&self) -> bool {
        self.modified_at != self.created_at
    }
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Username of the author.
    pub username: String,
    /// Post body.
    pub contents: String,
}

impl NewPost {
    /// Create a new post.
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            contents: contents.into(),
        }
    }
}
