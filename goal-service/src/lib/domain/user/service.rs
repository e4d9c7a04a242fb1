use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AccountServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for account operations.
///
/// Argon2 work is CPU-bound, so hashing and verification run on the
/// blocking pool instead of the async workers.
pub struct AccountService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AccountService<UR>
where
    UR: UserRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token codec
    ///
    /// # Returns
    /// Configured account service instance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: Password) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| UserError::Hashing(e.to_string()))
    }

    async fn authenticate(&self, user: &User, password: &str) -> Result<Session, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let subject = user.id.to_string();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &password_hash, &subject)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
            AuthenticationError::TokenError(err) => UserError::Token(err.to_string()),
        })?;

        Ok(Session {
            user_id: user.id,
            access_token: result.access_token,
            expires_at: result.expires_at,
        })
    }
}

#[async_trait]
impl<UR> AccountServicePort for AccountService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, UserError> {
        // No account can exist under an address that does not parse
        let email = EmailAddress::new(email.to_string())
            .map_err(|_| UserError::NotFoundByEmail(email.to_string()))?;

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(email.to_string()))?;

        let session = self.authenticate(&user, password).await?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(session)
    }

    async fn get_profile(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        let Some(new_email) = command.email else {
            return Ok(user);
        };

        user.email = new_email;
        self.repository.update(user).await
    }
}
