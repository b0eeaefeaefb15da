//! # Catalog API
//!
//! Read-only views of the catalog snapshot the server prices against.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use fze_catalog::{Activity, CatalogProvider, Package, VisaType};
use fze_core::{PackageId, ZoneName};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Catalog summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub package_count: usize,
    pub activity_count: usize,
    pub visa_type_count: usize,
    pub zones: Vec<String>,
    pub categories: Vec<String>,
    pub currency: String,
    /// SHA-256 of the canonical catalog snapshot.
    pub digest: String,
}

/// `?zone=` filter for package listings.
#[derive(Debug, Deserialize)]
pub struct PackageQuery {
    #[serde(default)]
    pub zone: Option<String>,
}

/// `?category=` filter for activity listings.
#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// Build the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/catalog", get(summary))
        .route("/v1/catalog/packages", get(list_packages))
        .route("/v1/catalog/packages/{package_id}", get(get_package))
        .route("/v1/catalog/activities", get(list_activities))
        .route("/v1/catalog/visa-types", get(list_visa_types))
}

/// GET /v1/catalog: Counts, zones, categories and digest.
async fn summary(State(state): State<AppState>) -> Json<CatalogSummary> {
    let catalog = state.estimator.catalog();
    Json(CatalogSummary {
        package_count: catalog.package_count(),
        activity_count: catalog.activity_count(),
        visa_type_count: catalog.visa_types().len(),
        zones: catalog.zones().iter().map(|z| z.to_string()).collect(),
        categories: catalog.categories().iter().map(|c| c.to_string()).collect(),
        currency: state.estimator.schedule().currency.clone(),
        digest: state.catalog_digest.to_string(),
    })
}

/// GET /v1/catalog/packages: Packages, optionally for one zone.
async fn list_packages(
    State(state): State<AppState>,
    Query(params): Query<PackageQuery>,
) -> Json<Vec<Package>> {
    let zone = params.zone.and_then(|z| ZoneName::new(z).ok());
    let packages = state.estimator.catalog().packages(zone.as_ref());
    Json(packages.into_iter().cloned().collect())
}

/// GET /v1/catalog/packages/{package_id}: One package.
async fn get_package(
    State(state): State<AppState>,
    Path(package_id): Path<String>,
) -> Result<Json<Package>, AppError> {
    let id = PackageId::new(package_id)?;
    state
        .estimator
        .catalog()
        .package(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("package \"{id}\"")))
}

/// GET /v1/catalog/activities: Activities, optionally for one category.
async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<ActivityQuery>,
) -> Json<Vec<Activity>> {
    let category = params.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let activities = state.estimator.catalog().activities(category);
    Json(activities.into_iter().cloned().collect())
}

/// GET /v1/catalog/visa-types: All visa types.
async fn list_visa_types(State(state): State<AppState>) -> Json<Vec<VisaType>> {
    Json(state.estimator.catalog().visa_types().into_iter().cloned().collect())
}
