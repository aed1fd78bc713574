use anyhow::Result;
use axum::{
    routing::{get, put},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db;
use crate::handlers;
use crate::persistence::{SeaOrmNotificationSender, SeaOrmProductCatalog, SeaOrmUserStore};
use crate::scheduler::{CronRegistry, DailyTrigger};
use crate::services::UserService;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) users: UserService,
}

impl State {
    /// Attempt to create a new State instance
    pub(crate) async fn try_new(config: &Config) -> Result<State> {
        let db = db::connect(&config.database_url).await?;

        let users = UserService::new(
            Arc::new(SeaOrmUserStore::new(db.clone())),
            Arc::new(SeaOrmProductCatalog::new(db.clone())),
            Arc::new(CronRegistry::default()),
            Arc::new(SeaOrmNotificationSender::new(db)),
            DailyTrigger::new(config.reminder_time),
        );

        Ok(State { users })
    }
}

/// Build the router with every endpoint and middleware attached.
pub(crate) fn app(state: Arc<State>) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/:username",
            get(handlers::get_user)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route(
            "/users/id/:id/cart",
            get(handlers::get_cart).post(handlers::add_to_cart),
        )
        .route("/users/id/:id/notify", put(handlers::notify_user))
        .route("/", get(|| async { "Hello, world!" }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

/// Run the server.
pub(crate) async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(State::try_new(&config).await?);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("Listening on {}", config.addr);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
