//! # fze-api: HTTP Adapter for the Formation Estimator
//!
//! Exposes the estimation engine and the catalog to the formation wizard.
//!
//! ## API Surface
//!
//! | Route                                   | Module                | Purpose                      |
//! |-----------------------------------------|-----------------------|------------------------------|
//! | `GET /v1/catalog`                       | [`routes::catalog`]   | Counts, zones, digest        |
//! | `GET /v1/catalog/packages?zone=`        | [`routes::catalog`]   | Package listing              |
//! | `GET /v1/catalog/packages/{package_id}` | [`routes::catalog`]   | One package                  |
//! | `GET /v1/catalog/activities?category=`  | [`routes::catalog`]   | Activity listing             |
//! | `GET /v1/catalog/visa-types`            | [`routes::catalog`]   | Visa type listing            |
//! | `POST /v1/estimate`                     | [`routes::estimate`]  | Recommended package estimate |
//! | `POST /v1/estimate/{package_id}`        | [`routes::estimate`]  | Chosen package estimate      |
//!
//! ## Middleware Stack
//!
//! ```text
//! TraceLayer → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::catalog::router())
        .merge(routes::estimate::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the catalog is loaded before the router exists, so a
/// serving process is ready.
async fn readiness() -> &'static str {
    "ready"
}
