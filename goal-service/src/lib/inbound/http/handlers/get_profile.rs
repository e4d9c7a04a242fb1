use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    state
        .account_service
        .get_profile(&identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// Public view of a user. The password digest is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for ProfileData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;

    #[test]
    fn test_profile_omits_password_hash() {
        let user = User {
            id: UserId::new(),
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(ProfileData::from(&user)).unwrap();

        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("argon2id"));
    }
}
