//! Database schema and migrations.
//!
//! Migrations are applied in order; the `schema_version` table records
//! which ones have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: members
    r#"
CREATE TABLE members (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    username    TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,                  -- Argon2 hash
    role        TEXT NOT NULL DEFAULT 'USER',   -- 'USER' or 'ADMIN'
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
    // v2: free board posts
    r#"
CREATE TABLE posts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    username    TEXT NOT NULL,                  -- author
    contents    TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    modified_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_posts_username ON posts(username);
"#,
    // v3: replies, removed together with their post
    r#"
CREATE TABLE replies (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id     INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    username    TEXT NOT NULL,                  -- author
    contents    TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    modified_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_replies_post_id ON replies(post_id);
"#,
];
