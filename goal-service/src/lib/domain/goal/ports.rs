use async_trait::async_trait;

use super::errors::GoalError;
use super::models::Goal;
use super::models::GoalId;
use super::models::GoalText;
use crate::domain::user::models::UserId;

/// Port for goal operations.
///
/// Every operation takes the requester's resolved identity; nothing here
/// reads or changes a goal on behalf of anyone but its owner.
#[async_trait]
pub trait GoalServicePort: Send + Sync + 'static {
    /// List the requester's goals in creation order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_goals(&self, owner_id: UserId) -> Result<Vec<Goal>, GoalError>;

    /// Create a goal owned by the requester.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_goal(&self, owner_id: UserId, text: GoalText) -> Result<Goal, GoalError>;

    /// Fetch one of the requester's goals.
    ///
    /// # Errors
    /// * `NotFound` - Goal does not exist
    /// * `Forbidden` - Goal belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get_goal(&self, requester: UserId, goal_id: GoalId) -> Result<Goal, GoalError>;

    /// Delete one of the requester's goals.
    ///
    /// # Errors
    /// * `NotFound` - Goal does not exist
    /// * `Forbidden` - Goal belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_goal(&self, requester: UserId, goal_id: GoalId) -> Result<(), GoalError>;
}

/// Persistence operations for goals.
#[async_trait]
pub trait GoalRepository: Send + Sync + 'static {
    /// Persist a new goal.
    async fn create(&self, goal: Goal) -> Result<Goal, GoalError>;

    /// Retrieve a goal by identifier (None if not found).
    async fn find_by_id(&self, id: GoalId) -> Result<Option<Goal>, GoalError>;

    /// Retrieve all goals of an owner in insertion order.
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Goal>, GoalError>;

    /// Remove a goal.
    ///
    /// # Errors
    /// * `NotFound` - Goal does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: GoalId) -> Result<(), GoalError>;
}
