use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::goal::errors::GoalIdError;
use crate::domain::goal::errors::GoalTextError;
use crate::domain::user::models::UserId;

/// A goal recorded by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: GoalId,
    pub owner_id: UserId,
    pub text: GoalText,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }
}

/// Goal unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoalId(pub Uuid);

impl GoalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a goal ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, GoalIdError> {
        Uuid::parse_str(s)
            .map(GoalId)
            .map_err(|e| GoalIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for GoalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Goal content.
///
/// Trimmed, non-empty and at most 1000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalText(String);

impl GoalText {
    const MAX_LENGTH: usize = 1000;

    /// # Errors
    /// * `Empty` - Text is empty or whitespace only
    /// * `TooLong` - Text exceeds 1000 characters
    pub fn new(text: String) -> Result<Self, GoalTextError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GoalTextError::Empty);
        }

        let length = text.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(GoalTextError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
