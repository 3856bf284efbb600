//! Post repository.
//!
//! CRUD operations for free board posts.

use super::post::{NewPost, Post};
use crate::db::DbPool;
use crate::{FreeboardError, Result};

const POST_COLUMNS: &str = "id, title, username, contents, created_at, modified_at";

/// Repository for post CRUD operations.
pub struct PostRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new post.
    ///
    /// Returns the created post with the assigned ID.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (title, username, contents) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&new_post.title)
        .bind(&new_post.username)
        .bind(&new_post.contents)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| FreeboardError::NotFound("post".to_string()))
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    /// List all posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Replace the title and contents of a post.
    ///
    /// Returns the updated post, or None if not found.
    pub async fn update(&self, id: i64, title: &str, contents: &str) -> Result<Option<Post>> {
        let affected = sqlx::query(
            "UPDATE posts SET title = ?, contents = ?, modified_at = datetime('now') WHERE id = ?",
        )
        .bind(title)
        .bind(contents)
        .bind(id)
        .execute(self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a post by ID. Its replies are removed by cascade.
    ///
    /// Returns true if a post was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let affected = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }

    /// Count all posts.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
