use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::goal::errors::GoalError;
use crate::domain::goal::models::Goal;
use crate::user::errors::UserError;

pub mod create_goal;
pub mod delete_goal;
pub mod get_goal;
pub mod get_profile;
pub mod list_goals;
pub mod login;
pub mod register;
pub mod update_profile;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                // Detail stays in the logs
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

/// Undecodable bodies are validation failures like any other bad input.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFoundByEmail(_) => ApiError::NotFound(err.to_string()),
            UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::NotFound(_)
            | UserError::EmailAlreadyExists(_)
            | UserError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            UserError::Hashing(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<GoalError> for ApiError {
    fn from(err: GoalError) -> Self {
        match err {
            GoalError::InvalidGoalId(_) | GoalError::InvalidGoalText(_) => {
                ApiError::BadRequest(err.to_string())
            }
            GoalError::NotFound(_) => ApiError::NotFound(err.to_string()),
            GoalError::Forbidden { .. } => ApiError::Forbidden(err.to_string()),
            GoalError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Plain confirmation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalData {
    pub id: String,
    pub owner_id: String,
    pub goal: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Goal> for GoalData {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id.to_string(),
            owner_id: goal.owner_id.to_string(),
            goal: goal.text.as_str().to_string(),
            created_at: goal.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;

    use super::*;
    use crate::domain::goal::models::GoalId;
    use crate::domain::user::models::UserId;

    #[test]
    fn test_user_errors_map_to_statuses() {
        assert!(matches!(
            ApiError::from(UserError::NotFoundByEmail("a@x.com".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::InvalidCredentials),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::EmailAlreadyExists("a@x.com".to_string())),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::DatabaseError("connection reset".to_string())),
            ApiError::InternalServerError(_)
        ));
    }

    #[test]
    fn test_goal_errors_map_to_statuses() {
        let goal_id = GoalId::new();

        assert_eq!(
            ApiError::from(GoalError::NotFound(goal_id)),
            ApiError::NotFound(format!("Goal not found: {}", goal_id))
        );
        assert!(matches!(
            ApiError::from(GoalError::Forbidden {
                user_id: UserId::new(),
                goal_id
            }),
            ApiError::Forbidden(_)
        ));
    }

    async fn json_rejection(request: Request<Body>) -> JsonRejection {
        match Json::<serde_json::Value>::from_request(request, &()).await {
            Ok(_) => panic!("body should have been rejected"),
            Err(rejection) => rejection,
        }
    }

    #[tokio::test]
    async fn test_json_rejections_are_bad_requests() {
        let without_content_type = Request::builder()
            .method("POST")
            .body(Body::empty())
            .unwrap();
        let truncated = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"email":"#))
            .unwrap();

        for request in [without_content_type, truncated] {
            let response = ApiError::from(json_rejection(request).await).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_internal_error_detail_is_not_returned() {
        let response =
            ApiError::InternalServerError("password authentication failed for user".to_string())
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
