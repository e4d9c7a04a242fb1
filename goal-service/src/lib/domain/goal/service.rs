use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::GoalError;
use super::models::Goal;
use super::models::GoalId;
use super::models::GoalText;
use super::ports::GoalRepository;
use super::ports::GoalServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of GoalServicePort.
///
/// Scopes every read and write to the requesting user.
/// Generic over repository for testability.
pub struct GoalService<GR>
where
    GR: GoalRepository,
{
    goal_repository: Arc<GR>,
}

impl<GR> GoalService<GR>
where
    GR: GoalRepository,
{
    pub fn new(goal_repository: Arc<GR>) -> Self {
        Self { goal_repository }
    }

    async fn find_owned(&self, requester: UserId, goal_id: GoalId) -> Result<Goal, GoalError> {
        let goal = self
            .goal_repository
            .find_by_id(goal_id)
            .await?
            .ok_or(GoalError::NotFound(goal_id))?;

        if !goal.is_owned_by(&requester) {
            tracing::warn!(
                user_id = %requester,
                goal_id = %goal_id,
                "Rejected access to goal owned by another user"
            );
            return Err(GoalError::Forbidden {
                user_id: requester,
                goal_id,
            });
        }

        Ok(goal)
    }
}

#[async_trait]
impl<GR> GoalServicePort for GoalService<GR>
where
    GR: GoalRepository + 'static,
{
    async fn list_goals(&self, owner_id: UserId) -> Result<Vec<Goal>, GoalError> {
        self.goal_repository.find_by_owner(owner_id).await
    }

    async fn create_goal(&self, owner_id: UserId, text: GoalText) -> Result<Goal, GoalError> {
        let goal = Goal {
            id: GoalId::new(),
            owner_id,
            text,
            created_at: Utc::now(),
        };

        self.goal_repository.create(goal).await
    }

    async fn get_goal(&self, requester: UserId, goal_id: GoalId) -> Result<Goal, GoalError> {
        self.find_owned(requester, goal_id).await
    }

    async fn delete_goal(&self, requester: UserId, goal_id: GoalId) -> Result<(), GoalError> {
        let goal = self.find_owned(requester, goal_id).await?;
        self.goal_repository.delete(goal.id).await
    }
}
