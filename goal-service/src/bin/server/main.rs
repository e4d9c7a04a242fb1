use std::sync::Arc;

use auth::Authenticator;
use goal_service::config::Config;
use goal_service::config::StorageBackend;
use goal_service::domain::goal::ports::GoalServicePort;
use goal_service::domain::goal::service::GoalService;
use goal_service::domain::user::ports::AccountServicePort;
use goal_service::domain::user::service::AccountService;
use goal_service::inbound::http::router::create_router;
use goal_service::outbound::repositories::InMemoryGoalRepository;
use goal_service::outbound::repositories::InMemoryUserRepository;
use goal_service::outbound::repositories::PostgresGoalRepository;
use goal_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MAX_DB_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goal_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "goal-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        backend = ?config.database.backend,
        http_port = config.server.http_port,
        jwt_expiration_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.ttl(),
    ));

    let (account_service, goal_service): (Arc<dyn AccountServicePort>, Arc<dyn GoalServicePort>) =
        match config.database.backend {
            StorageBackend::Postgres => {
                let pg_pool = PgPoolOptions::new()
                    .max_connections(MAX_DB_CONNECTIONS)
                    .connect(&config.database.url)
                    .await?;
                tracing::info!(
                    max_connections = MAX_DB_CONNECTIONS,
                    database = "postgresql",
                    "Database connection pool created"
                );

                sqlx::migrate!("./migrations").run(&pg_pool).await?;
                tracing::info!(database = "postgresql", "Database migrations completed");

                let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
                let goal_repository = Arc::new(PostgresGoalRepository::new(pg_pool));

                let account_service: Arc<dyn AccountServicePort> = Arc::new(AccountService::new(
                    user_repository,
                    Arc::clone(&authenticator),
                ));
                let goal_service: Arc<dyn GoalServicePort> =
                    Arc::new(GoalService::new(goal_repository));

                (account_service, goal_service)
            }
            StorageBackend::Memory => {
                tracing::warn!(
                    database = "memory",
                    "Using in-memory storage; data is lost on shutdown"
                );

                let account_service: Arc<dyn AccountServicePort> = Arc::new(AccountService::new(
                    Arc::new(InMemoryUserRepository::new()),
                    Arc::clone(&authenticator),
                ));
                let goal_service: Arc<dyn GoalServicePort> =
                    Arc::new(GoalService::new(Arc::new(InMemoryGoalRepository::new())));

                (account_service, goal_service)
            }
        };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(account_service, goal_service, authenticator);

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
