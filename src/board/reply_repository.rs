//! Reply repository.

use super::reply::{NewReply, Reply};
use crate::db::DbPool;
use crate::{FreeboardError, Result};

const REPLY_COLUMNS: &str = "id, post_id, username, contents, created_at, modified_at";

/// Repository for reply CRUD operations.
pub struct ReplyRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ReplyRepository<'a> {
    /// Create a new ReplyRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new reply.
    ///
    /// Fails with a database error if the post does not exist.
    pub async fn create(&self, new_reply: &NewReply) -> Result<Reply> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO replies (post_id, username, contents) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(new_reply.post_id)
        .bind(&new_reply.username)
        .bind(&new_reply.contents)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| FreeboardError::NotFound("reply".to_string()))
    }

    /// Get a reply by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Reply>> {
        let reply = sqlx::query_as::<_, Reply>(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(reply)
    }

    /// List replies of a post, oldest first.
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE post_id = ? ORDER BY created_at ASC, id ASC"
        ))
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;

        Ok(replies)
    }

    /// Replace the contents of a reply. The owning post is left unchanged.
    ///
    /// Returns the updated reply, or None if not found.
    pub async fn update_contents(&self, id: i64, contents: &str) -> Result<Option<Reply>> {
        let affected = sqlx::query(
            "UPDATE replies SET contents = ?, modified_at = datetime('now') WHERE id = ?",
        )
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

    /// Delete a reply by ID.
    ///
    /// Returns true if a reply was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let affected = sqlx::query("DELETE FROM replies WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }

    /// Count replies of a post.
    pub async fn count_by_post(&self, post_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{NewPost, PostRepository};
    use crate::Database;

    async fn setup() -> (Database, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let post = PostRepository::new(db.pool())
            .create(&NewPost::new("Post", "alice", "body"))
            .await
            .unwrap();
        (db, post.id)
    }

    #[tokio::test]
    async fn test_create_reply() {
        let (db, post_id) = setup().await;
        let repo = ReplyRepository::new(db.pool());

        let reply = repo
            .create(&NewReply::new(post_id, "bob", "nice"))
            .await
            .unwrap();

        assert!(reply.id > 0);
        assert_eq!(reply.post_id, post_id);
        assert_eq!(reply.username, "bob");
        assert_eq!(reply.contents, "nice");
    }

    #[tokio::test]
    async fn test_create_reply_for_missing_post_fails() {
        let (db, _) = setup().await;
        let repo = ReplyRepository::new(db.pool());

        let result = repo.create(&NewReply::new(999, "bob", "orphan")).await;
        assert!(matches!(result, Err(FreeboardError::Database(_))));
    }

    #[tokio::test]
    async fn test_list_by_post_oldest_first() {
        let (db, post_id) = setup().await;
        let repo = ReplyRepository::new(db.pool());

        let first = repo.create(&NewReply::new(post_id, "bob", "1")).await.unwrap();
        let second = repo.create(&NewReply::new(post_id, "carol", "2")).await.unwrap();

        let ids: Vec<i64> = repo
            .list_by_post(post_id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert!(repo.list_by_post(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_contents() {
        let (db, post_id) = setup().await;
        let repo = ReplyRepository::new(db.pool());
        let reply = repo.create(&NewReply::new(post_id, "bob", "old")).await.unwrap();

        let updated = repo.update_contents(reply.id, "new").await.unwrap().unwrap();
        assert_eq!(updated.contents, "new");
        assert_eq!(updated.post_id, post_id);

        assert!(repo.update_contents(999, "x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reply() {
        let (db, post_id) = setup().await;
        let repo = ReplyRepository::new(db.pool());
        let reply = repo.create(&NewReply::new(post_id, "bob", "bye")).await.unwrap();

        assert!(repo.delete(reply.id).await.unwrap());
        assert!(!repo.delete(reply.id).await.unwrap());
        assert_eq!(repo.count_by_post(post_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_replies_cascade_with_post() {
        let (db, post_id) = setup().await;
        let repo = ReplyRepository::new(db.pool());
        repo.create(&NewReply::new(post_id, "bob", "1")).await.unwrap();
        repo.create(&NewReply::new(post_id, "carol", "2")).await.unwrap();

        PostRepository::new(db.pool()).delete(post_id).await.unwrap();

        assert_eq!(repo.count_by_post(post_id).await.unwrap(), 0);
    }
}
