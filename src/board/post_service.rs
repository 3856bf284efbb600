//! Post service.
//!
//! Public reads plus authenticated create/edit/delete. Edits and deletes
//! follow the same ownership rule as replies.

use axum::http::HeaderMap;
use tracing::{debug, info};

use super::post::{NewPost, Post};
use super::reply::Reply;
use super::validation::{validate_contents, validate_title, MAX_POST_CONTENTS_LENGTH};
use super::{PostRepository, ReplyRepository};
use crate::auth::{authenticate, resolve_access, TokenService};
use crate::db::MemberRepository;
use crate::message::{self, MsgResponse};
use crate::{FreeboardError, Result};

/// A post together with its replies, oldest reply first.
#[derive(Debug, Clone)]
pub struct PostDetail {
    /// The post.
    pub post: Post,
    /// Replies in creation order.
    pub replies: Vec<Reply>,
}

/// Post operations.
pub struct PostService<'a> {
    tokens: &'a TokenService,
    members: MemberRepository<'a>,
    posts: PostRepository<'a>,
    replies: ReplyRepository<'a>,
}

impl<'a> PostService<'a> {
    /// Create a new PostService.
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

    /// Publish a post as the requesting member.
    pub async fn create_post(
        &self,
        title: &str,
        contents: &str,
        headers: &HeaderMap,
    ) -> Result<MsgResponse> {
        let Some(member) = authenticate(self.tokens, &self.members, headers).await? else {
            return Ok(MsgResponse::invalid_token());
        };

        validate_title(title)?;
        validate_contents(contents, MAX_POST_CONTENTS_LENGTH)?;

        let post = self
            .posts
            .create(&NewPost::new(title, &member.username, contents))
            .await?;
        info!(post_id = post.id, username = %member.username, "post created");

        Ok(MsgResponse::ok(message::POST_CREATED))
    }

    /// List all posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.posts.list_all().await
    }

    /// Get a post with its replies.
    pub async fn get_post(&self, post_id: i64) -> Result<PostDetail> {
        let post = self.find_post(post_id).await?;
        let replies = self.replies.list_by_post(post.id).await?;
        Ok(PostDetail { post, replies })
    }

    /// Replace the title and contents of a post.
    pub async fn edit_post(
        &self,
        post_id: i64,
        title: &str,
        contents: &str,
        headers: &HeaderMap,
    ) -> Result<MsgResponse> {
        let Some(member) = authenticate(self.tokens, &self.members, headers).await? else {
            return Ok(MsgResponse::invalid_token());
        };

        let post = self.find_post(post_id).await?;

        let access = resolve_access(&member, &post.username);
        debug!(post_id, username = %member.username, ?access, "post edit access");
        if !access.is_granted() {
            return Ok(MsgResponse::bad_request(message::EDIT_FORBIDDEN));
        }

        validate_title(title)?;
        validate_contents(contents, MAX_POST_CONTENTS_LENGTH)?;

        self.posts
            .update(post.id, title, contents)
            .await?
            .ok_or_else(|| FreeboardError::NotFound(message::POST_NOT_FOUND.to_string()))?;
        info!(post_id, username = %member.username, "post edited");

        Ok(MsgResponse::ok(message::EDITED))
    }

    /// Delete a post and its replies.
    pub async fn delete_post(&self, post_id: i64, headers: &HeaderMap) -> Result<MsgResponse> {
        let Some(member) = authenticate(self.tokens, &self.members, headers).await? else {
            return Ok(MsgResponse::invalid_token());
        };

        let post = self.find_post(post_id).await?;

        let access = resolve_access(&member, &post.username);
        debug!(post_id, username = %member.username, ?access, "post delete access");
        if !access.is_granted() {
            return Ok(MsgResponse::bad_request(message::POST_DELETE_FORBIDDEN));
        }

        if !self.posts.delete(post.id).await? {
            return Err(FreeboardError::NotFound(message::POST_NOT_FOUND.to_string()));
        }
        info!(post_id, username = %member.username, "post deleted");

        Ok(MsgResponse::ok(message::DELETED))
    }

    async fn find_post(&self, post_id: i64) -> Result<Post> {
        self.posts
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| FreeboardError::NotFound(message::POST_NOT_FOUND.to_string()))
    }
}
