//! Member model.
//!
//! Defines the Member struct and the two-tier Role enum.

use std::fmt;
use std::str::FromStr;

/// Member role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Regular member.
    #[default]
    User,
    /// Administrator; may modify anything.
    Admin,
}

impl Role {
    /// Convert role to database/claim string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// A registered member.
#[derive(Debug, Clone)]
pub struct Member {
    /// Unique member ID.
    pub id: i64,
    /// Login username (unique).
    pub username: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Member role.
    pub role: Role,
    /// Signup timestamp.
    pub created_at: String,
}

impl Member {
    /// Check if this member is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Data for creating a new member.
#[derive(Debug, Clone)]
pub struct NewMember {
    /// Login username.
    pub username: String,
    /// Password hash (already hashed).
    pub password: String,
    /// Role, `User` unless set.
    pub role: Role,
}

impl NewMember {
    /// Create a new regular member.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: Role::User,
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
