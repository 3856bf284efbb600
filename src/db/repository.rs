//! Member repository.
//!
//! Identity lookup and member persistence.

use super::member::{Member, NewMember, Role};
use super::DbPool;
use crate::message;
use crate::{FreeboardError, Result};

/// Repository for member CRUD operations.
pub struct MemberRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> MemberRepository<'a> {
    /// Create a new MemberRepository with the given pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new member.
    ///
    /// Returns the created member with the assigned ID, or
    /// `FreeboardError::Duplicate` when the username is taken.
    pub async fn create(&self, new_member: &NewMember) -> Result<Member> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO members (username, password, role) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&new_member.username)
        .bind(&new_member.password)
        .bind(new_member.role.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                FreeboardError::Duplicate(message::DUPLICATE_USERNAME.to_string())
            }
            other => other.into(),
        })?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| FreeboardError::NotFound("member".to_string()))
    }

    /// Get a member by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Member>> {
        let row: Option<MemberRow> = sqlx::query_as(
            "SELECT id, username, password, role, created_at FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(MemberRow::into_member))
    }

    /// Get a member by username (the token subject).
    pub async fn get_by_username(&self, username: &str) -> Result<Option<Member>> {
        let row: Option<MemberRow> = sqlx::query_as(
            "SELECT id, username, password, role, created_at FROM members WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(MemberRow::into_member))
    }

    /// Check if a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE username = ?")
            .bind(username)
            .fetch_one(self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Count all members.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: i64,
    username: String,
    password: String,
    role: String,
    created_at: String,
}

impl MemberRow {
    fn into_member(self) -> Member {
        Member {
            id: self.id,
            username: self.username,
            password: self.password,
            role: self.role.parse().unwrap_or(Role::User),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_member() {
        let db = setup_db().await;
        let repo = MemberRepository::new(db.pool());

        let member = repo.create(&NewMember::new("alice", "hash")).await.unwrap();

        assert!(member.id > 0);
        assert_eq!(member.username, "alice");
        assert_eq!(member.password, "hash");
        assert_eq!(member.role, Role::User);
        assert!(!member.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_create_admin() {
        let db = setup_db().await;
        let repo = MemberRepository::new(db.pool());

        let member = repo
            .create(&NewMember::new("boss", "hash").with_role(Role::Admin))
            .await
            .unwrap();

        assert!(member.is_admin());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_reported() {
        let db = setup_db().await;
        let repo = MemberRepository::new(db.pool());

        repo.create(&NewMember::new("alice", "hash")).await.unwrap();
        let result = repo.create(&NewMember::new("alice", "other")).await;

        assert!(matches!(result, Err(FreeboardError::Duplicate(ref msg)) if msg == message::DUPLICATE_USERNAME));
    }

    #[tokio::test]
    async fn test_get_by_username() {
        let db = setup_db().await;
        let repo = MemberRepository::new(db.pool());
        let created = repo.create(&NewMember::new("alice", "hash")).await.unwrap();

        let found = repo.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);

        assert!(repo.get_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = setup_db().await;
        let repo = MemberRepository::new(db.pool());

        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_username_exists_and_count() {
        let db = setup_db().await;
        let repo = MemberRepository::new(db.pool());

        assert!(!repo.username_exists("alice").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(&NewMember::new("alice", "hash")).await.unwrap();
        repo.create(&NewMember::new("bob", "hash")).await.unwrap();

        assert!(repo.username_exists("alice").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
