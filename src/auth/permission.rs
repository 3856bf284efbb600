//! Ownership checks.
//!
//! A post or reply may be modified by its author, or by any admin.

use crate::db::Member;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Acting member is an admin; authorship is not checked.
    AdminOverride,
    /// Acting member wrote the resource.
    Owner,
    /// Neither admin nor author.
    Denied,
}

impl Access {
    /// Whether the mutation may proceed.
    pub fn is_granted(self) -> bool {
        !matches!(self, Access::Denied)
    }
}

/// Decide whether `actor` may modify a resource written by `author_username`.
///
/// # Examples
///
/// ```
/// use freeboard::auth::permission::{resolve_access, Access};
/// use freeboard::db::{Member, Role};
///
/// let alice = Member {
///     id: 1,
///     username: "alice".to_string(),
///     password: String::new(),
///     role: Role::User,
///     created_at: String::new(),
/// };
/// assert_eq!(resolve_access(&alice, "alice"), Access::Owner);
/// assert_eq!(resolve_access(&alice, "bob"), Access::Denied);
/// ```
pub fn resolve_access(actor: &Member, author_username: &str) -> Access {
    if actor.is_admin() {
        Access::AdminOverride
    } else if actor.username == author_username {
        Access::Owner
    } else {
        Access::Denied
    }
}
