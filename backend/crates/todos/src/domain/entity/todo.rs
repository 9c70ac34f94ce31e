//! Todo Entity
//!
//! A single list item owned by exactly one user. Content is free text;
//! the only domain rule is that it must not be empty or whitespace.

use chrono::{DateTime, Utc};
use kernel::id::{TodoId, UserId};

use crate::error::{TodoError, TodoResult};

/// Persisted todo record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Store-assigned id
    pub id: TodoId,
    /// Item text
    pub content: String,
    /// Owning user
    pub user_id: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Todo record about to be inserted (no id yet)
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub content: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewTodo {
    /// Validate and build a new todo for the given owner.
    pub fn new(content: &str, user_id: UserId) -> TodoResult<Self> {
        let content = validate_content(content)?;
        Ok(Self {
            content,
            user_id,
            created_at: Utc::now(),
        })
    }
}

/// Shared content rule for create and update.
pub fn validate_content(content: &str) -> TodoResult<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(TodoError::EmptyContent);
    }
    Ok(trimmed.to_string())
}
