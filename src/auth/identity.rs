//! Request authentication.
//!
//! Resolves the acting member of a request: bearer token → validation →
//! claims → member lookup by subject.

use axum::http::HeaderMap;
use tracing::{debug, warn};

use super::token::TokenService;
use crate::db::{Member, MemberRepository};
use crate::Result;

/// Resolve the member acting on a request.
///
/// Returns `Ok(None)` when the token is missing, fails validation, or names a
/// subject with no member record. Callers answer all three the same way so
/// the reason is not revealed.
pub async fn authenticate(
    tokens: &TokenService,
    members: &MemberRepository<'_>,
    headers: &HeaderMap,
) -> Result<Option<Member>> {
    let Some(token) = tokens.resolve_token(headers) else {
        debug!("request carries no bearer token");
        return Ok(None);
    };

    if !tokens.validate_token(&token) {
        return Ok(None);
    }

    let claims = tokens.get_claims(&token)?;
    let member = members.get_by_username(&claims.sub).await?;
    if member.is_none() {
        warn!(subject = %claims.sub, "token subject has no member record");
    }

    Ok(member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewMember, Role};
    use crate::Database;
    use axum::http::header::AUTHORIZATION;
    use axum::http::HeaderValue;

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&TokenService::bearer(token)).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn test_authenticate_known_member() {
        let db = Database::open_in_memory().await.unwrap();
        let members = MemberRepository::new(db.pool());
        members.create(&NewMember::new("alice", "hash")).await.unwrap();
        let tokens = TokenService::new("secret", 3600);

        let token = tokens.create_token("alice", Role::User).unwrap();
        let member = authenticate(&tokens, &members, &bearer_headers(&token))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(member.username, "alice");
    }

    #[tokio::test]
    async fn test_authenticate_uses_stored_role() {
        let db = Database::open_in_memory().await.unwrap();
        let members = MemberRepository::new(db.pool());
        members
            .create(&NewMember::new("boss", "hash").with_role(Role::Admin))
            .await
            .unwrap();
        let tokens = TokenService::new("secret", 3600);

        // Role claim says USER, but the stored member is the source of truth.
        let token = tokens.create_token("boss", Role::User).unwrap();
        let member = authenticate(&tokens, &members, &bearer_headers(&token))
            .await
            .unwrap()
            .unwrap();

        assert!(member.is_admin());
    }

    #[tokio::test]
    async fn test_authenticate_missing_token() {
        let db = Database::open_in_memory().await.unwrap();
        let members = MemberRepository::new(db.pool());
        let tokens = TokenService::new("secret", 3600);

        let result = authenticate(&tokens, &members, &HeaderMap::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let db = Database::open_in_memory().await.unwrap();
        let members = MemberRepository::new(db.pool());
        members.create(&NewMember::new("alice", "hash")).await.unwrap();
        let tokens = TokenService::new("secret", 3600);
        let forged = TokenService::new("other", 3600)
            .create_token("alice", Role::User)
            .unwrap();

        let result = authenticate(&tokens, &members, &bearer_headers(&forged))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_subject() {
        let db = Database::open_in_memory().await.unwrap();
        let members = MemberRepository::new(db.pool());
        let tokens = TokenService::new("secret", 3600);

        let token = tokens.create_token("ghost", Role::User).unwrap();
        let result = authenticate(&tokens, &members, &bearer_headers(&token))
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
