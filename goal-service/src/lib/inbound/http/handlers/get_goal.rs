use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::GoalData;
use crate::domain::goal::errors::GoalError;
use crate::domain::goal::models::GoalId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_goal(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(goal_id): Path<String>,
) -> Result<ApiSuccess<GoalData>, ApiError> {
    let goal_id = GoalId::from_string(&goal_id).map_err(GoalError::from)?;

    state
        .goal_service
        .get_goal(identity.user_id, goal_id)
        .await
        .map_err(ApiError::from)
        .map(|ref goal| ApiSuccess::new(StatusCode::OK, goal.into()))
}
