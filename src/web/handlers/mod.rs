//! API handlers.

pub mod member;
pub mod post;
pub mod reply;

pub use member::*;
pub use post::*;
pub use reply::*;

use axum::{extract::rejection::JsonRejection, http::HeaderMap, Json};

use crate::auth::{authenticate, TokenService};
use crate::board::{PostRepository, PostService, ReplyRepository, ReplyService};
use crate::config::WebConfig;
use crate::db::MemberRepository;
use crate::message;
use crate::web::error::ApiError;
use crate::Database;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database pool.
    pub db: Database,
    /// Token issuer and verifier.
    pub tokens: TokenService,
    /// Secret required for admin signup; empty disables it.
    pub admin_token: String,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, access_expiry: u64, admin_token: &str) -> Self {
        Self {
            db,
            tokens: TokenService::new(jwt_secret, access_expiry),
            admin_token: admin_token.to_string(),
        }
    }

    /// Create the application state from the web configuration.
    pub fn from_config(db: Database, config: &WebConfig) -> Self {
        Self::new(
            db,
            &config.jwt_secret,
            config.jwt_access_token_expiry_secs,
            &config.admin_token,
        )
    }

    /// Member repository over the shared pool.
    pub fn members(&self) -> MemberRepository<'_> {
        MemberRepository::new(self.db.pool())
    }

    /// Post service bound to this state.
    pub fn post_service(&self) -> PostService<'_> {
        PostService::new(
            &self.tokens,
            self.members(),
            PostRepository::new(self.db.pool()),
            ReplyRepository::new(self.db.pool()),
        )
    }

    /// Reply service bound to this state.
    pub fn reply_service(&self) -> ReplyService<'_> {
        ReplyService::new(
            &self.tokens,
            self.members(),
            PostRepository::new(self.db.pool()),
            ReplyRepository::new(self.db.pool()),
        )
    }

    /// Unwrap the JSON body of an authenticated request.
    ///
    /// A body that cannot be parsed is reported only to a caller whose token
    /// resolves to a member; everyone else gets the invalid-token message.
    pub async fn accept_body<T>(
        &self,
        headers: &HeaderMap,
        payload: std::result::Result<Json<T>, JsonRejection>,
    ) -> Result<T, ApiError> {
        match payload {
            Ok(Json(body)) => Ok(body),
            Err(rejection) => {
                if authenticate(&self.tokens, &self.members(), headers)
                    .await?
                    .is_none()
                {
                    return Err(ApiError::bad_request(message::INVALID_TOKEN));
                }
                Err(ApiError::bad_request(format!(
                    "잘못된 요청 형식입니다: {}",
                    rejection.body_text()
                )))
            }
        }
    }
}
