//! Member signup.
//!
//! Validates the request, rejects duplicate usernames, checks the admin
//! token for admin signups, hashes the password, and stores the member.

use tracing::{info, warn};

use crate::auth::hash_password;
use crate::auth::validation::{validate_password, validate_username};
use crate::db::{MemberRepository, NewMember, Role};
use crate::message::{self, MsgResponse};
use crate::{FreeboardError, Result};

/// Signup request data.
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    /// Desired username.
    pub username: String,
    /// Plain-text password.
    pub password: String,
    /// Request the ADMIN role.
    pub admin: bool,
    /// Admin token, required when `admin` is set.
    pub admin_token: String,
}

impl SignupRequest {
    /// Create a regular member signup request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            admin: false,
            admin_token: String::new(),
        }
    }

    /// Request the ADMIN role with the given admin token.
    pub fn as_admin(mut self, admin_token: impl Into<String>) -> Self {
        self.admin = true;
        self.admin_token = admin_token.into();
        self
    }
}

/// Register a new member.
///
/// `admin_token` is the server-side secret. When it is empty, admin signup
/// is disabled.
///
/// Rejections are returned as 400 messages; only storage and hashing
/// failures surface as errors.
pub async fn signup(
    members: &MemberRepository<'_>,
    request: &SignupRequest,
    admin_token: &str,
) -> Result<MsgResponse> {
    if let Err(e) = validate_username(&request.username)
        .and_then(|_| validate_password(&request.password))
    {
        return Ok(MsgResponse::bad_request(e.to_string()));
    }

    if members.username_exists(&request.username).await? {
        return Ok(MsgResponse::bad_request(message::DUPLICATE_USERNAME));
    }

    let role = if request.admin {
        if admin_token.is_empty() || request.admin_token != admin_token {
            warn!(username = %request.username, "admin signup with wrong admin token");
            return Ok(MsgResponse::bad_request(message::ADMIN_TOKEN_MISMATCH));
        }
        Role::Admin
    } else {
        Role::User
    };

    let password_hash =
        hash_password(&request.password).map_err(|e| FreeboardError::Internal(e.to_string()))?;

    let new_member = NewMember::new(&request.username, password_hash).with_role(role);
    let member = match members.create(&new_member).await {
        Ok(member) => member,
        Err(FreeboardError::Duplicate(_)) => {
            // lost a race with a concurrent signup for the same name
            return Ok(MsgResponse::bad_request(message::DUPLICATE_USERNAME));
        }
        Err(e) => return Err(e),
    };
    info!(username = %member.username, role = %member.role, "member registered");

    Ok(MsgResponse::ok(message::SIGNUP_SUCCESS))
}
