/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use crate::services::{TaskService, UserService};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use taskboard_shared::store::{PgTaskStore, PgUserStore, TaskStore, UserStore};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks only; stores hold their own
    /// handle)
    pub db: PgPool,

    /// Task operations
    pub tasks: Arc<TaskService>,

    /// User operations
    pub users: Arc<UserService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates application state backed by the PostgreSQL stores
    pub fn new(db: PgPool, config: Config) -> Self {
        let task_store = Arc::new(PgTaskStore::new(db.clone()));
        let user_store = Arc::new(PgUserStore::new(db.clone()));
        Self::with_stores(db, config, task_store, user_store)
    }

    /// Creates application state over explicit store implementations
    ///
    /// Tests use this to wire the services to in-memory doubles.
    pub fn with_stores(
        db: PgPool,
        config: Config,
        task_store: Arc<dyn TaskStore>,
        user_store: Arc<dyn UserStore>,
    ) -> Self {
        let users = Arc::new(UserService::new(user_store));
        let tasks = Arc::new(TaskService::new(task_store, users.clone()));

        Self {
            db,
            tasks,
            users,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health              # Health check
/// ├── /task                # POST (create), GET (list)
/// ├── /task/:id            # GET, PUT, DELETE
/// ├── /user                # POST (create)
/// └── /user/:id            # GET
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let task_routes = Router::new()
        .route(
            "/task",
            axum::routing::post(routes::tasks::create_task).get(routes::tasks::list_tasks),
        )
        .route(
            "/task/:id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        );

    let user_routes = Router::new()
        .route("/user", axum::routing::post(routes::users::create_user))
        .route("/user/:id", get(routes::users::get_user));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(task_routes)
        .merge(user_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
