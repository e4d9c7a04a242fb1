use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::get_profile::ProfileData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateProfileCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<ApiSuccess<UpdateProfileResponseData>, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_command()?;

    state
        .account_service
        .update_profile(&identity.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::OK,
                UpdateProfileResponseData {
                    message: "Profile updated successfully".to_string(),
                    user: user.into(),
                },
            )
        })
}

/// Only non-credential fields are accepted; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UpdateProfileRequest {
    email: Option<String>,
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateProfileCommand, UserError> {
        let email = self.email.map(EmailAddress::new).transpose()?;
        Ok(UpdateProfileCommand { email })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateProfileResponseData {
    pub message: String,
    pub user: ProfileData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_field_is_ignored() {
        let body: UpdateProfileRequest =
            serde_json::from_str(r#"{"password":"new","password_hash":"x"}"#).unwrap();

        let command = body.try_into_command().unwrap();
        assert!(command.email.is_none());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let body = UpdateProfileRequest {
            email: Some("not-an-email".to_string()),
        };

        assert!(matches!(
            body.try_into_command(),
            Err(UserError::InvalidEmail(_))
        ));
    }
}
