//! # Estimation Facade
//!
//! The single entry point callers use. [`estimate`] composes the
//! eligibility filter, the ranker and the cost calculator into one total,
//! synchronous, side-effect-free function:
//!
//! ```text
//! Selection ─▶ idle? ─▶ validate ─▶ filter ─▶ rank ─▶ compute_cost ─▶ CostBreakdown
//!                │          │           │
//!                ▼          ▼           ▼
//!              Idle      Invalid    Ineligible
//! ```
//!
//! Every call is independent. Calling twice with the same selection and an
//! unchanged catalog yields identical breakdowns.

use std::sync::Arc;

use fze_catalog::{Catalog, CatalogProvider};
use fze_core::PackageId;

use crate::breakdown::{BlockingConstraint, CostBreakdown, EligibilityError, PackageRef};
use crate::config::FeeSchedule;
use crate::cost::compute_cost;
use crate::eligibility::{check_package, filter_validated, is_eligible};
use crate::ranker::rank;
use crate::selection::{Selection, ValidatedSelection};

fn log_outcome(selection: &Selection, breakdown: &CostBreakdown) {
    match &breakdown.eligibility_error {
        Some(err) => tracing::warn!(
            status = %breakdown.status,
            code = %err.code,
            entity_type = %selection.entity_type,
            shareholders = selection.shareholders,
            visas = selection.visas,
            "estimate rejected: {}", err.message
        ),
        None => tracing::debug!(
            status = %breakdown.status,
            package = breakdown.package.as_ref().map(|p| p.id.as_str()),
            total = %breakdown.total_cost,
            activities = breakdown.activity_lines.len(),
            "estimate computed"
        ),
    }
}

/// Validate, or produce the breakdown the facade returns instead.
fn prepare(
    catalog: &dyn CatalogProvider,
    schedule: &FeeSchedule,
    selection: &Selection,
) -> Result<ValidatedSelection, CostBreakdown> {
    if selection.is_idle() {
        return Err(CostBreakdown::idle(
            schedule.currency.clone(),
            selection.tenure_years,
        ));
    }
    selection.validate(catalog).map_err(|err| {
        CostBreakdown::failed(schedule.currency.clone(), selection.tenure_years, err)
    })
}

/// Estimate the cost of `selection`, recommending the cheapest eligible
/// package.
pub fn estimate(
    catalog: &dyn CatalogProvider,
    schedule: &FeeSchedule,
    selection: &Selection,
) -> CostBreakdown {
    let breakdown = match prepare(catalog, schedule, selection) {
        Ok(validated) => resolve(catalog, schedule, selection, &validated),
        Err(early) => early,
    };
    log_outcome(selection, &breakdown);
    breakdown
}

fn resolve(
    catalog: &dyn CatalogProvider,
    schedule: &FeeSchedule,
    selection: &Selection,
    validated: &ValidatedSelection,
) -> CostBreakdown {
    let eligibility = filter_validated(catalog, validated);
    if let Some(err) = eligibility.error {
        return CostBreakdown::failed(schedule.currency.clone(), selection.tenure_years, err);
    }
    let Some(ranking) = rank(eligibility.eligible) else {
        return CostBreakdown::failed(
            schedule.currency.clone(),
            selection.tenure_years,
            EligibilityError::no_eligible_package(
                BlockingConstraint::EmptyCatalog,
                "no eligible package",
            ),
        );
    };
    let mut breakdown = compute_cost(validated, ranking.recommended, schedule);
    if breakdown.is_resolved() {
        breakdown.alternatives = ranking.alternatives.into_iter().map(PackageRef::from).collect();
    }
    breakdown
}

/// Estimate the cost of `selection` on a package the founder chose.
///
/// The package must exist (`InvalidInput` otherwise) and admit the
/// selection (`NoEligiblePackage` naming the violated limit otherwise). The
/// other eligible packages are reported as alternatives.
pub fn estimate_for_package(
    catalog: &dyn CatalogProvider,
    schedule: &FeeSchedule,
    selection: &Selection,
    package_id: &str,
) -> CostBreakdown {
    let breakdown = match prepare(catalog, schedule, selection) {
        Ok(validated) => resolve_chosen(catalog, schedule, selection, &validated, package_id),
        Err(early) => early,
    };
    log_outcome(selection, &breakdown);
    breakdown
}

fn resolve_chosen(
    catalog: &dyn CatalogProvider,
    schedule: &FeeSchedule,
    selection: &Selection,
    validated: &ValidatedSelection,
    package_id: &str,
) -> CostBreakdown {
    let fail = |err| CostBreakdown::failed(schedule.currency.clone(), selection.tenure_years, err);

    let package = match PackageId::new(package_id) {
        Ok(id) => match catalog.package(&id) {
            Some(p) => p,
            None => {
                return fail(EligibilityError::invalid_input(format!(
                    "unknown package: \"{id}\""
                )))
            }
        },
        Err(e) => return fail(EligibilityError::invalid_input(e.to_string())),
    };
    if let Err(err) = check_package(package, validated) {
        return fail(err);
    }

    let mut breakdown = compute_cost(validated, package, schedule);
    if breakdown.is_resolved() {
        let others: Vec<_> = catalog
            .packages(None)
            .into_iter()
            .filter(|p| p.id != package.id && is_eligible(p, validated))
            .collect();
        if let Some(ranking) = rank(others) {
            breakdown.alternatives = std::iter::once(ranking.recommended)
                .chain(ranking.alternatives)
                .map(PackageRef::from)
                .collect();
        }
    }
    breakdown
}

/// A catalog snapshot paired with a fee schedule.
///
/// Cheap to clone; the catalog is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Estimator {
    catalog: Arc<Catalog>,
    schedule: FeeSchedule,
}

impl Estimator {
    /// Create an estimator over `catalog`.
    pub fn new(catalog: Arc<Catalog>, schedule: FeeSchedule) -> Self {
        Self { catalog, schedule }
    }

    /// The catalog snapshot.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The fee schedule.
    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// See [`estimate`].
    pub fn estimate(&self, selection: &Selection) -> CostBreakdown {
        estimate(self.catalog.as_ref(), &self.schedule, selection)
    }

    /// See [`estimate_for_package`].
    pub fn estimate_for_package(&self, selection: &Selection, package_id: &str) -> CostBreakdown {
        estimate_for_package(self.catalog.as_ref(), &self.schedule, selection, package_id)
    }
}
