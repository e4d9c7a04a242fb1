use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::goal::errors::GoalError;
use crate::domain::goal::models::GoalId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_goal(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(goal_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let goal_id = GoalId::from_string(&goal_id).map_err(GoalError::from)?;

    state
        .goal_service
        .delete_goal(identity.user_id, goal_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::new("Goal deleted successfully")))
}
