//! Input validation for posts and replies.

use crate::{FreeboardError, Result};

/// Maximum post title length in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum post contents length in characters.
pub const MAX_POST_CONTENTS_LENGTH: usize = 5_000;

/// Maximum reply contents length in characters.
pub const MAX_REPLY_CONTENTS_LENGTH: usize = 1_000;

fn has_forbidden_control(text: &str) -> bool {
    text.chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
}

/// Validate a post title.
///
/// Titles are a single line, so every control character is rejected.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(FreeboardError::Validation(
            "제목을 입력해주세요.".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(FreeboardError::Validation(format!(
            "제목이 너무 깁니다. ({MAX_TITLE_LENGTH}자 이내)"
        )));
    }
    if title.chars().any(char::is_control) {
        return Err(FreeboardError::Validation(
            "제목에 사용할 수 없는 문자가 포함되어 있습니다.".to_string(),
        ));
    }
    Ok(())
}

/// Validate post or reply contents against a length limit.
pub fn validate_contents(contents: &str, max_length: usize) -> Result<()> {
    if contents.trim().is_empty() {
        return Err(FreeboardError::Validation(
            "내용을 입력해주세요.".to_string(),
        ));
    }
    if contents.chars().count() > max_length {
        return Err(FreeboardError::Validation(format!(
            "내용이 너무 깁니다. ({max_length}자 이내)"
        )));
    }
    if has_forbidden_control(contents) {
        return Err(FreeboardError::Validation(
            "내용에 사용할 수 없는 문자가 포함되어 있습니다.".to_string(),
        ));
    }
    Ok(())
}
