use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_goal::create_goal;
use super::handlers::delete_goal::delete_goal;
use super::handlers::get_goal::get_goal;
use super::handlers::get_profile::get_profile;
use super::handlers::list_goals::list_goals;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_profile::update_profile;
use super::middleware::authenticate as auth_middleware;
use crate::domain::goal::ports::GoalServicePort;
use crate::domain::user::ports::AccountServicePort;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub goal_service: Arc<dyn GoalServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    account_service: Arc<dyn AccountServicePort>,
    goal_service: Arc<dyn GoalServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        account_service,
        goal_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/:goal_id", get(get_goal).delete(delete_goal))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers stay out of the span since they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let route = request
                .extensions()
                .get::<MatchedPath>()
                .map(MatchedPath::as_str)
                .unwrap_or("unmatched");

            tracing::info_span!(
                "http_request",
                method = %request.method(),
                route = route,
                uri = %request.uri(),
            )
        })
        .on_request(|_request: &Request<Body>, _span: &Span| {
            tracing::debug!("Request started");
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        )
        .on_failure(
            |failure: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                tracing::error!(
                    failure = %failure,
                    latency_ms = latency.as_millis(),
                    "Request failed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
