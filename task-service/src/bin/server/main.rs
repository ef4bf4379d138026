use std::fs::OpenOptions;
use std::future::Future;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use task_service::config::Config;
use task_service::config::LogConfig;
use task_service::config::LogFormat;
use task_service::domain::auth::service::TokenService;
use task_service::domain::task::service::TaskService;
use task_service::domain::user::service::UserService;
use task_service::inbound::http::router::create_router;
use task_service::inbound::http::router::AppState;
use task_service::outbound::repositories::PostgresTaskRepository;
use task_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load().context("Failed to load configuration")?;

    init_tracing(&config.log)?;

    tracing::info!(
        service = "task-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = auth::PasswordHasher::new(config.hasher.secret.as_bytes());
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let task_repository = Arc::new(PostgresTaskRepository::new(pg_pool.clone()));

    let state = AppState {
        user_service: Arc::new(UserService::new(user_repository, password_hasher)),
        task_service: Arc::new(TaskService::new(task_repository)),
        auth_service: Arc::new(TokenService::new(
            config.jwt.secret.as_bytes(),
            chrono::Duration::minutes(config.jwt.expiration_minutes),
        )),
    };

    let http_application = create_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pg_pool.close().await;
    tracing::info!("Server exited successfully");

    Ok(())
}

fn init_tracing(log: &LogConfig) -> Result<(), anyhow::Error> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.level))?;

    let writer = if log.output == "stdout" {
        BoxMakeWriter::new(std::io::stdout)
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log.output)
            .with_context(|| format!("Failed to open log output {}", log.output))?;
        BoxMakeWriter::new(Mutex::new(file))
    };

    let fmt_layer = match log.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = until_signal("ctrl-c", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = until_signal("SIGTERM", async {
        let mut signal =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        signal.recv().await;
        Ok::<_, std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

/// Resolves once `signal` fires. A listener that cannot be installed never
/// resolves, so it cannot trigger shutdown on its own.
async fn until_signal<F>(name: &'static str, signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, signal = name, "Failed to listen for signal");
        std::future::pending::<()>().await;
    }
}
