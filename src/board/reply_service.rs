//! Reply service.
//!
//! Every mutation follows the same sequence: resolve the acting member from
//! the bearer token, fetch the target, decide ownership, validate input,
//! then mutate. A rejected request never reaches the repository's write
//! path.

use axum::http::HeaderMap;
use tracing::{debug, info};

use super::reply::NewReply;
use super::validation::{validate_contents, MAX_REPLY_CONTENTS_LENGTH};
use super::{PostRepository, ReplyRepository};
use crate::auth::{authenticate, resolve_access, TokenService};
use crate::db::MemberRepository;
use crate::message::{self, MsgResponse};
use crate::{FreeboardError, Result};

/// Reply create/edit/delete with ownership enforcement.
pub struct ReplyService<'a> {
    tokens: &'a TokenService,
    members: MemberRepository<'a>,
    posts: PostRepository<'a>,
    replies: ReplyRepository<'a>,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService.
    pub fn new(
        tokens: &'a TokenService,
        members: MemberRepository<'a>,
        posts: PostRepository<'a>,
        replies: ReplyRepository<'a>,
    ) -> Self {
        Self {
            tokens,
            members,
            posts,
            replies,
        }
    }

    /// Add a reply to a post as the requesting member.
    pub async fn create_reply(
        &self,
        post_id: i64,
        contents: &str,
        headers: &HeaderMap,
    ) -> Result<MsgResponse> {
        let Some(member) = authenticate(self.tokens, &self.members, headers).await? else {
            return Ok(MsgResponse::invalid_token());
        };

        let post = self
            .posts
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| FreeboardError::NotFound(message::POST_NOT_FOUND.to_string()))?;

        validate_contents(contents, MAX_REPLY_CONTENTS_LENGTH)?;

        let reply = self
            .replies
            .create(&NewReply::new(post.id, &member.username, contents))
            .await?;
        info!(reply_id = reply.id, post_id = post.id, username = %member.username, "reply created");

        Ok(MsgResponse::ok(message::REPLY_CREATED))
    }

    /// Replace the contents of a reply.
    ///
    /// Allowed for the author and for admins. The owning post is unchanged.
    pub async fn edit_reply(
        &self,
        reply_id: i64,
        contents: &str,
        headers: &HeaderMap,
    ) -> Result<MsgResponse> {
        let Some(member) = authenticate(self.tokens, &self.members, headers).await? else {
            return Ok(MsgResponse::invalid_token());
        };

        let reply = self.find_reply(reply_id).await?;

        let access = resolve_access(&member, &reply.username);
        debug!(reply_id, username = %member.username, ?access, "reply edit access");
        if !access.is_granted() {
            return Ok(MsgResponse::bad_request(message::EDIT_FORBIDDEN));
        }

        validate_contents(contents, MAX_REPLY_CONTENTS_LENGTH)?;

        self.replies
            .update_contents(reply.id, contents)
            .await?
            .ok_or_else(|| FreeboardError::NotFound(message::REPLY_NOT_FOUND.to_string()))?;
        info!(reply_id, username = %member.username, "reply edited");

        Ok(MsgResponse::ok(message::EDITED))
    }

    /// Delete a reply.
    ///
    /// Allowed for the author and for admins.
    pub async fn delete_reply(&self, reply_id: i64, headers: &HeaderMap) -> Result<MsgResponse> {
        let Some(member) = authenticate(self.tokens, &self.members, headers).await? else {
            return Ok(MsgResponse::invalid_token());
        };

        let reply = self.find_reply(reply_id).await?;

        let access = resolve_access(&member, &reply.username);
        debug!(reply_id, username = %member.username, ?access, "reply delete access");
        if !access.is_granted() {
            return Ok(MsgResponse::bad_request(message::REPLY_DELETE_FORBIDDEN));
        }

        if !self.replies.delete(reply.id).await? {
            return Err(FreeboardError::NotFound(message::REPLY_NOT_FOUND.to_string()));
        }
        info!(reply_id, username = %member.username, "reply deleted");

        Ok(MsgResponse::ok(message::DELETED))
    }

    async fn find_reply(&self, reply_id: i64) -> Result<super::Reply> {
        self.replies
            .get_by_id(reply_id)
            .await?
            .ok_or_else(|| FreeboardError::NotFound(message::REPLY_NOT_FOUND.to_string()))
    }
}
