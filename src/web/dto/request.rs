//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::not_empty_trimmed;
use crate::auth::SignupRequest as SignupData;

/// Signup request.
///
/// Username and password rules are checked by the signup service so that
/// rejections carry the signup message.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Username.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub username: String,
    /// Password.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub password: String,
    /// Request the ADMIN role.
    #[serde(default)]
    pub admin: bool,
    /// Admin token, required when `admin` is set.
    #[serde(default)]
    pub admin_token: String,
}

impl From<SignupRequest> for SignupData {
    fn from(req: SignupRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            admin: req.admin,
            admin_token: req.admin_token,
        }
    }
}

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub username: String,
    /// Password.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub password: String,
}

/// Create or edit a post.
///
/// Missing fields read as empty. Contents are checked by the post service
/// once the caller is authenticated and authorized.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    /// Title.
    pub title: String,
    /// Body.
    pub contents: String,
}

/// Create or edit a reply.
///
/// Checked by the reply service after the token and ownership checks.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReplyRequest {
    /// Body.
    pub contents: String,
}
