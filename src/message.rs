//! Response message container.
//!
//! Every mutation answers with a `{message, httpStatus}` body. The HTTP
//! status line of the response equals `httpStatus`.

use serde::{Deserialize, Serialize};

/// Missing or invalid bearer token.
pub const INVALID_TOKEN: &str = "토큰이 유효하지 않습니다.";
/// Post lookup failed.
pub const POST_NOT_FOUND: &str = "해당 게시글이 존재하지 않습니다.";
/// Reply lookup failed.
pub const REPLY_NOT_FOUND: &str = "해당 댓글이 존재하지 않습니다.";
/// Reply created.
pub const REPLY_CREATED: &str = "댓글을 등록하였습니다.";
/// Post created.
pub const POST_CREATED: &str = "게시글을 등록하였습니다.";
/// Post or reply edited.
pub const EDITED: &str = "수정하였습니다.";
/// Edit attempted by someone other than the author.
pub const EDIT_FORBIDDEN: &str = "본인이 작성한 글만 수정할 수 있습니다.";
/// Post or reply deleted.
pub const DELETED: &str = "삭제하였습니다.";
/// Reply delete attempted by someone other than the author.
pub const REPLY_DELETE_FORBIDDEN: &str = "본인이 작성한 댓글만 삭제할 수 있습니다.";
/// Post delete attempted by someone other than the author.
pub const POST_DELETE_FORBIDDEN: &str = "본인이 작성한 글만 삭제할 수 있습니다.";
/// Signup succeeded.
pub const SIGNUP_SUCCESS: &str = "회원가입 성공";
/// Username already taken.
pub const DUPLICATE_USERNAME: &str = "중복된 사용자가 존재합니다.";
/// Admin signup with a wrong admin token.
pub const ADMIN_TOKEN_MISMATCH: &str = "관리자 암호가 틀려 등록이 불가능합니다.";
/// Login with an unknown username.
pub const MEMBER_NOT_FOUND: &str = "등록된 사용자가 없습니다.";
/// Login with a wrong password.
pub const PASSWORD_MISMATCH: &str = "비밀번호가 일치하지 않습니다.";
/// Login succeeded.
pub const LOGIN_SUCCESS: &str = "로그인 성공";

/// Message body returned by every mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgResponse {
    /// User-facing message.
    pub message: String,
    /// HTTP status code mirrored in the body.
    pub http_status: u16,
}

impl MsgResponse {
    /// Create a message with an arbitrary status.
    pub fn new(message: impl Into<String>, http_status: u16) -> Self {
        Self {
            message: message.into(),
            http_status,
        }
    }

    /// 200 response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(message, 200)
    }

    /// 400 response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, 400)
    }

    /// 400 response for a missing or invalid token.
    pub fn invalid_token() -> Self {
        Self::bad_request(INVALID_TOKEN)
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.http_status)
    }
}
