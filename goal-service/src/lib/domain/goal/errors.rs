use thiserror::Error;

use crate::domain::goal::models::GoalId;
use crate::domain::user::models::UserId;

/// Error type for GoalId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GoalIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for GoalText validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GoalTextError {
    #[error("Goal text is empty")]
    Empty,

    #[error("Goal text too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for all goal-related operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GoalError {
    #[error("Invalid goal ID: {0}")]
    InvalidGoalId(#[from] GoalIdError),

    #[error("Invalid goal: {0}")]
    InvalidGoalText(#[from] GoalTextError),

    #[error("Goal not found: {0}")]
    NotFound(GoalId),

    #[error("User {user_id} does not own goal {goal_id}")]
    Forbidden { user_id: UserId, goal_id: GoalId },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
