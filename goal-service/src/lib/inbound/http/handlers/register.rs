use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_command()?;

    state
        .account_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageData::new("User registered successfully"),
            )
        })
}

/// HTTP request body for registration (raw JSON).
///
/// Missing or null fields are treated as empty and fail validation with 400.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, UserError> {
        let email = EmailAddress::new(self.email.unwrap_or_default())?;
        let password = Password::new(self.password.unwrap_or_default())?;
        Ok(RegisterUserCommand::new(email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_valid_request_builds_command() {
        let command = request("a@x.com", "pw1").try_into_command().unwrap();
        assert_eq!(command.email.as_str(), "a@x.com");
        assert_eq!(command.password.expose(), "pw1");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            request("", "pw1").try_into_command(),
            Err(UserError::InvalidEmail(_))
        ));
        assert!(matches!(
            request("a@x.com", "").try_into_command(),
            Err(UserError::InvalidPassword(_))
        ));
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let body: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(matches!(
            body.try_into_command(),
            Err(UserError::InvalidPassword(_))
        ));
    }

    #[test]
    fn test_null_fields_deserialize_as_empty() {
        let body: RegisterRequest =
            serde_json::from_str(r#"{"email":null,"password":"pw1"}"#).unwrap();
        assert!(matches!(
            body.try_into_command(),
            Err(UserError::InvalidEmail(_))
        ));
    }
}
