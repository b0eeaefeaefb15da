//! # Estimate API
//!
//! Prices a [`Selection`]. Every engine outcome, including ineligible and
//! invalid selections, is a 200 carrying the [`CostBreakdown`]; the
//! `status` field tells them apart. Only bodies that are not a selection at
//! all are rejected with 400/422.
//!
//! Responses carry the catalog digest in `x-catalog-digest`, identifying
//! the snapshot the estimate was priced against.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use fze_engine::{CostBreakdown, Selection};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Response header carrying the catalog digest.
pub const CATALOG_DIGEST_HEADER: &str = "x-catalog-digest";

/// Build the estimate router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/estimate", post(estimate))
        .route("/v1/estimate/{package_id}", post(estimate_for_package))
}

fn respond(state: &AppState, breakdown: CostBreakdown) -> Response {
    let mut response = Json(breakdown).into_response();
    if let Ok(value) = HeaderValue::from_str(&state.catalog_digest) {
        response.headers_mut().insert(CATALOG_DIGEST_HEADER, value);
    }
    response
}

/// POST /v1/estimate: Recommend a package and price the selection.
async fn estimate(
    State(state): State<AppState>,
    body: Result<Json<Selection>, JsonRejection>,
) -> Result<Response, AppError> {
    let selection = extract_json(body)?;
    let breakdown = state.estimator.estimate(&selection);
    Ok(respond(&state, breakdown))
}

/// POST /v1/estimate/{package_id}: Price the selection on a chosen package.
async fn estimate_for_package(
    State(state): State<AppState>,
    Path(package_id): Path<String>,
    body: Result<Json<Selection>, JsonRejection>,
) -> Result<Response, AppError> {
    let selection = extract_json(body)?;
    let breakdown = state.estimator.estimate_for_package(&selection, &package_id);
    Ok(respond(&state, breakdown))
}
