//! Member login.

use tracing::{debug, info};

use super::token::TokenService;
use super::verify_password;
use crate::db::MemberRepository;
use crate::message::{self, MsgResponse};
use crate::Result;

/// Result of a login attempt.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Message body.
    pub response: MsgResponse,
    /// Issued access token, present only on success.
    pub token: Option<String>,
}

impl LoginOutcome {
    fn rejected(message: &str) -> Self {
        Self {
            response: MsgResponse::bad_request(message),
            token: None,
        }
    }
}

/// Check credentials and issue an access token.
pub async fn login(
    members: &MemberRepository<'_>,
    tokens: &TokenService,
    username: &str,
    password: &str,
) -> Result<LoginOutcome> {
    let Some(member) = members.get_by_username(username).await? else {
        debug!(username, "login for unknown member");
        return Ok(LoginOutcome::rejected(message::MEMBER_NOT_FOUND));
    };

    if verify_password(password, &member.password).is_err() {
        debug!(username, "login with wrong password");
        return Ok(LoginOutcome::rejected(message::PASSWORD_MISMATCH));
    }

    let token = tokens.create_token(&member.username, member.role)?;
    info!(username = %member.username, "member logged in");

    Ok(LoginOutcome {
        response: MsgResponse::ok(message::LOGIN_SUCCESS),
        token: Some(token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use crate::db::{NewMember, Role};
    use crate::Database;

    async fn setup() -> (Database, TokenService) {
        let db = Database::open_in_memory().await.unwrap();
        let hash = hash_password("password1").unwrap();
        MemberRepository::new(db.pool())
            .create(&NewMember::new("alice", hash).with_role(Role::Admin))
            .await
            .unwrap();
        (db, TokenService::new("secret", 3600))
    }

    #[tokio::test]
    async fn test_login_success() {
        let (db, tokens) = setup().await;
        let members = MemberRepository::new(db.pool());

        let outcome = login(&members, &tokens, "alice", "password1").await.unwrap();
        assert_eq!(outcome.response, MsgResponse::ok(message::LOGIN_SUCCESS));

        let token = outcome.token.unwrap();
        let claims = tokens.get_claims(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.auth, "ADMIN");
    }

    #[tokio::test]
    async fn test_login_unknown_member() {
        let (db, tokens) = setup().await;
        let members = MemberRepository::new(db.pool());

        let outcome = login(&members, &tokens, "bob", "password1").await.unwrap();
        assert_eq!(
            outcome.response,
            MsgResponse::bad_request(message::MEMBER_NOT_FOUND)
        );
        assert!(outcome.token.is_none());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (db, tokens) = setup().await;
        let members = MemberRepository::new(db.pool());

        let outcome = login(&members, &tokens, "alice", "password2").await.unwrap();
        assert_eq!(
            outcome.response,
            MsgResponse::bad_request(message::PASSWORD_MISMATCH)
        );
        assert!(outcome.token.is_none());
    }
}
