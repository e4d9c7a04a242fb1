use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::GoalData;
use crate::domain::goal::errors::GoalError;
use crate::domain::goal::models::GoalText;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_goal(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    payload: Result<Json<CreateGoalRequest>, JsonRejection>,
) -> Result<ApiSuccess<GoalData>, ApiError> {
    let Json(body) = payload?;
    let text = GoalText::new(body.goal.unwrap_or_default()).map_err(GoalError::from)?;

    state
        .goal_service
        .create_goal(identity.user_id, text)
        .await
        .map_err(ApiError::from)
        .map(|ref goal| ApiSuccess::new(StatusCode::CREATED, goal.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateGoalRequest {
    #[serde(default)]
    goal: Option<String>,
}
