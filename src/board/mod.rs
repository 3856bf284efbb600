//! Free board module.
//!
//! This module provides:
//! - Post and reply models and repositories
//! - Input validation for titles and contents
//! - Services enforcing the author-or-admin rule on mutations

mod post;
mod post_repository;
pub mod post_service;
mod reply;
mod reply_repository;
pub mod reply_service;
pub mod validation;

pub use post::{NewPost, Post};
pub use post_repository::PostRepository;
pub use post_service::{PostDetail, PostService};
pub use reply::{NewReply, Reply};
pub use reply_repository::ReplyRepository;
pub use reply_service::ReplyService;
