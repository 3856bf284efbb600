//! Post handlers for the Web API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use crate::message::MsgResponse;
use crate::web::dto::{ApiResponse, PostDetailResponse, PostRequest, PostResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/posts - List posts, newest first.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    let posts = state.post_service().list_posts().await?;
    let responses = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(ApiResponse::new(responses)))
}

/// GET /api/posts/:id - Get a post with its replies.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<PostDetailResponse>>, ApiError> {
    let detail = state.post_service().get_post(post_id).await?;
    Ok(Json(ApiResponse::new(detail.into())))
}

/// POST /api/posts - Create a post.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<MsgResponse, ApiError> {
    let req = state.accept_body(&headers, payload).await?;
    let response = state
        .post_service()
        .create_post(&req.title, &req.contents, &headers)
        .await?;
    Ok(response)
}

/// PUT /api/posts/:id - Edit a post.
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<MsgResponse, ApiError> {
    let req = state.accept_body(&headers, payload).await?;
    let response = state
        .post_service()
        .edit_post(post_id, &req.title, &req.contents, &headers)
        .await?;
    Ok(response)
}

/// DELETE /api/posts/:id - Delete a post and its replies.
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    headers: HeaderMap,
) -> Result<MsgResponse, ApiError> {
    let response = state.post_service().delete_post(post_id, &headers).await?;
    Ok(response)
}
