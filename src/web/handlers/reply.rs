//! Reply handlers for the Web API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use crate::message::MsgResponse;
use crate::web::dto::ReplyRequest;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/posts/:id/replies - Reply to a post.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<MsgResponse, ApiError> {
    let req = state.accept_body(&headers, payload).await?;
    let response = state
        .reply_service()
        .create_reply(post_id, &req.contents, &headers)
        .await?;
    Ok(response)
}

/// PUT /api/replies/:id - Edit a reply.
pub async fn update_reply(
    State(state): State<Arc<AppState>>,
    Path(reply_id): Path<i64>,
    headers: HeaderMap,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<MsgResponse, ApiError> {
    let req = state.accept_body(&headers, payload).await?;
    let response = state
        .reply_service()
        .edit_reply(reply_id, &req.contents, &headers)
        .await?;
    Ok(response)
}

/// DELETE /api/replies/:id - Delete a reply.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(reply_id): Path<i64>,
    headers: HeaderMap,
) -> Result<MsgResponse, ApiError> {
    let response = state.reply_service().delete_reply(reply_id, &headers).await?;
    Ok(response)
}
