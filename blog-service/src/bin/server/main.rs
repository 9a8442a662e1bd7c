use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use auth::PasswordHasher;
use blog_service::config::Config;
use blog_service::config::DatabaseBackend;
use blog_service::domain::blog::ports::BlogServicePort;
use blog_service::domain::blog::service::BlogService;
use blog_service::domain::user::ports::UserServicePort;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::outbound::repositories::InMemoryStore;
use blog_service::outbound::repositories::PostgresBlogRepository;
use blog_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        backend = ?config.database.backend,
        http_port = config.server.http_port,
        testing_routes = config.server.testing_routes,
        token_lifetime_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let password_hasher = PasswordHasher::with_cost(
        config.hashing.memory_kib,
        config.hashing.iterations,
        config.hashing.parallelism,
    )?;
    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes(), config.jwt.token_lifetime()?)
            .with_password_hasher(password_hasher.clone()),
    );

    let (blog_service, user_service) = build_services(&config, password_hasher).await?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        blog_service,
        user_service,
        authenticator,
        config.server.testing_routes,
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn build_services(
    config: &Config,
    password_hasher: PasswordHasher,
) -> Result<(Arc<dyn BlogServicePort>, Arc<dyn UserServicePort>), anyhow::Error> {
    match config.database.backend {
        DatabaseBackend::Postgres => {
            let url = config
                .database
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;

            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
            let blog_repository = Arc::new(PostgresBlogRepository::new(pg_pool));

            let blog_service: Arc<dyn BlogServicePort> = Arc::new(BlogService::new(
                Arc::clone(&blog_repository),
                Arc::clone(&user_repository),
            ));
            let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(
                user_repository,
                blog_repository,
                password_hasher,
            ));

            Ok((blog_service, user_service))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");

            let store = Arc::new(InMemoryStore::new());

            let blog_service: Arc<dyn BlogServicePort> =
                Arc::new(BlogService::new(Arc::clone(&store), Arc::clone(&store)));
            let user_service: Arc<dyn UserServicePort> =
                Arc::new(UserService::new(Arc::clone(&store), store, password_hasher));

            Ok((blog_service, user_service))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
