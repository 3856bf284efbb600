//! Response DTOs for the Web API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::board::{Post, PostDetail, Reply};
use crate::message::MsgResponse;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl IntoResponse for MsgResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Post in list and detail responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    /// Post ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Author username.
    pub username: String,
    /// Body.
    pub contents: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub modified_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            username: post.username,
            contents: post.contents,
            created_at: post.created_at,
            modified_at: post.modified_at,
        }
    }
}

/// Reply in detail responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    /// Reply ID.
    pub id: i64,
    /// Owning post ID.
    pub post_id: i64,
    /// Author username.
    pub username: String,
    /// Body.
    pub contents: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub modified_at: String,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            post_id: reply.post_id,
            username: reply.username,
            contents: reply.contents,
            created_at: reply.created_at,
            modified_at: reply.modified_at,
        }
    }
}

/// Post with its replies.
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    /// The post.
    #[serde(flatten)]
    pub post: PostResponse,
    /// Replies, oldest first.
    pub replies: Vec<ReplyResponse>,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            post: detail.post.into(),
            replies: detail.replies.into_iter().map(Into::into).collect(),
        }
    }
}
