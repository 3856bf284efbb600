//! freeboard - a free board web backend
//!
//! Members, posts and replies behind JWT bearer authentication. Posts and
//! replies can be modified by their author or by an admin.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod message;
pub mod web;

pub use auth::{
    authenticate, hash_password, login, signup, verify_password, AuthClaims, LoginOutcome,
    PasswordError, SignupRequest, TokenService,
};
pub use board::{
    NewPost, NewReply, Post, PostDetail, PostRepository, PostService, Reply, ReplyRepository,
    ReplyService,
};
pub use config::Config;
pub use db::{Database, Member, MemberRepository, NewMember, Role};
pub use error::{FreeboardError, Result};
pub use message::MsgResponse;
pub use web::WebServer;
