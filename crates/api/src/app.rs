use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::{LifecycleEngine, TaxonomyService};
use domain::store::JobStore;

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, security_headers_middleware, trace_id,
};
use crate::routes::{auth, catalog, export, health, industries, jobs};
use crate::services::{CookieHelper, LoginRateLimiter, SessionGuard};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn JobStore>,
    pub lifecycle: Arc<LifecycleEngine>,
    pub taxonomy: Arc<TaxonomyService>,
    pub session: Arc<SessionGuard>,
    pub cookies: CookieHelper,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn JobStore>) -> Self {
        let lifecycle = Arc::new(LifecycleEngine::new(store.clone()));
        let taxonomy = Arc::new(TaxonomyService::new(store.clone()));

        let limiter = LoginRateLimiter::new(
            config.rate_limit.window_secs,
            config.rate_limit.max_attempts,
        );
        let session = Arc::new(SessionGuard::new(
            config.security.admin_password.clone(),
            limiter,
        ));
        let cookies = CookieHelper::new(
            config.session.cookie_name.clone(),
            config.session.max_age_secs,
            config.security.secure_cookies,
        );

        Self {
            config,
            store,
            lifecycle,
            taxonomy,
            session,
            cookies,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Session endpoints stay outside the admin gate; login has to be
    // reachable without a session and logout/me behave sensibly without one.
    let session_routes = Router::new()
        .route("/api/admin/login", post(auth::login))
        .route("/api/admin/logout", post(auth::logout))
        .route("/api/admin/me", get(auth::me));

    // Admin routes (require the session cookie)
    let admin_routes = Router::new()
        .route(
            "/api/admin/jobs",
            get(jobs::list_jobs).post(jobs::create_job),
        )
        .route("/api/admin/jobs/sweep", post(jobs::sweep_jobs))
        .route(
            "/api/admin/jobs/:id",
            put(jobs::update_job).delete(jobs::delete_job),
        )
        .route("/api/admin/jobs/:id/archive", post(jobs::toggle_archive))
        .route(
            "/api/admin/industries",
            get(industries::list_industries).post(industries::add_industry),
        )
        .route(
            "/api/admin/industries/:label",
            delete(industries::remove_industry),
        )
        .route("/api/admin/export", get(export::export))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/api/jobs", get(catalog::list_catalog))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware)) // Security headers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
