use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::GoalData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_goals(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<GoalData>>, ApiError> {
    state
        .goal_service
        .list_goals(identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|goals| ApiSuccess::new(StatusCode::OK, goals.iter().map(GoalData::from).collect()))
}
