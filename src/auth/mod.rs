//! Authentication module.
//!
//! Bearer tokens, password hashing, signup, login and the ownership rule
//! shared by post and reply mutations.

pub mod identity;
pub mod login;
mod password;
pub mod permission;
pub mod registration;
pub mod token;
pub mod validation;

pub use identity::authenticate;
pub use login::{login, LoginOutcome};
pub use password::{hash_password, verify_password, PasswordError};
pub use permission::{resolve_access, Access};
pub use registration::{signup, SignupRequest};
pub use token::{AuthClaims, TokenService, BEARER_PREFIX};
pub use validation::ValidationError;
