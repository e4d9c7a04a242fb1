use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::goal::errors::GoalError;
use crate::domain::goal::models::Goal;
use crate::domain::goal::models::GoalId;
use crate::domain::goal::ports::GoalRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Email uniqueness is checked under the write lock, so it holds across
/// concurrent registrations just like a unique index would.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn email_taken(users: &HashMap<UserId, User>, email: &EmailAddress, except: UserId) -> bool {
    users
        .values()
        .any(|user| user.id != except && user.email == *email)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if email_taken(&users, &user.email, user.id) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email == *email)
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        if email_taken(&users, &user.email, user.id) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// Process-local goal store keeping insertion order.
#[derive(Default)]
pub struct InMemoryGoalRepository {
    goals: RwLock<Vec<Goal>>,
}

impl InMemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.goals.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.goals.read().await.is_empty()
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn create(&self, goal: Goal) -> Result<Goal, GoalError> {
        self.goals.write().await.push(goal.clone());
        Ok(goal)
    }

    async fn find_by_id(&self, id: GoalId) -> Result<Option<Goal>, GoalError> {
        Ok(self
            .goals
            .read()
            .await
            .iter()
            .find(|goal| goal.id == id)
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Goal>, GoalError> {
        Ok(self
            .goals
            .read()
            .await
            .iter()
            .filter(|goal| goal.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: GoalId) -> Result<(), GoalError> {
        let mut goals = self.goals.write().await;

        let position = goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(GoalError::NotFound(id))?;
        goals.remove(position);

        Ok(())
    }
}
