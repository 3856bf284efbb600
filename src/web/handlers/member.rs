//! Member handlers for the Web API.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderValue},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::auth::{self, SignupRequest as SignupData, TokenService};
use crate::message::MsgResponse;
use crate::web::dto::{LoginRequest, SignupRequest, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/members/signup - Register a member.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<MsgResponse, ApiError> {
    let data = SignupData::from(req);
    let response = auth::signup(&state.members(), &data, &state.admin_token).await?;
    Ok(response)
}

/// POST /api/members/login - Log in and receive a bearer token.
///
/// The token is returned in the `Authorization` response header.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Response, ApiError> {
    let outcome = auth::login(&state.members(), &state.tokens, &req.username, &req.password).await?;

    let mut response = outcome.response.into_response();
    if let Some(token) = outcome.token {
        let value = HeaderValue::from_str(&TokenService::bearer(&token))
            .map_err(|e| ApiError::internal(format!("invalid token header: {e}")))?;
        response.headers_mut().insert(AUTHORIZATION, value);
    }

    Ok(response)
}
