//! # miniblogd — miniblog daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use config::Config;
use miniblog_adapter_http_axum::router;
use miniblog_adapter_http_axum::state::AppState;
use miniblog_adapter_storage_sqlite_sqlx::{
    SqliteCategoryRepository, SqlitePostRepository, SqliteUserRepository,
};
use miniblog_app::services::category_service::CategoryService;
use miniblog_app::services::post_service::PostService;
use miniblog_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // A store that cannot be opened would make every request fail later,
    // so bail out now with the cause.
    let db = miniblog_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let post_repo = SqlitePostRepository::new(pool.clone());
    let user_repo = SqliteUserRepository::new(pool.clone());
    let category_repo = SqliteCategoryRepository::new(pool);

    // HTTP
    let state = AppState::new(
        PostService::new(post_repo),
        UserService::new(user_repo),
        CategoryService::new(category_repo),
    );
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "miniblogd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
