//! # Cost Breakdown Calculator
//!
//! Prices a validated selection against one package.
//!
//! ## Components
//!
//! | Component             | Unscaled amount                                           |
//! |-----------------------|-----------------------------------------------------------|
//! | `base_license_fee`    | `package.base_cost`                                       |
//! | `activity_extra_cost` | standard price of each activity past `activities_allowed` |
//! | `shareholder_fee`     | `(shareholders - 1) × shareholder_unit_fee`               |
//! | `visa_fee`            | `visas × (per_visa_cost ?? default_visa_unit_fee)`        |
//!
//! Every component is a recurring annual cost, so each one is scaled by the
//! tenure multiplier (1 year ×1.0, 3 years ×2.8, 5 years ×4.5) and the total
//! is the sum of the scaled components. Scaling each component (rather than
//! the sum) keeps the itemized lines adding up to the total exactly.
//!
//! Activities are split in selection order: the first `activities_allowed`
//! are included, the rest are extra.
//!
//! ## Failure
//!
//! The calculator never panics. Arithmetic is checked, and an overflow
//! produces an `InvalidInput` breakdown with every amount zeroed.

use fze_catalog::Package;
use fze_core::Amount;

use crate::breakdown::{ActivityFeeLine, CostBreakdown, EligibilityError, EstimateStatus, PackageRef};
use crate::config::FeeSchedule;
use crate::selection::ValidatedSelection;

struct Priced {
    base_license_fee: Amount,
    activity_extra_cost: Amount,
    shareholder_fee: Amount,
    visa_fee: Amount,
    total_cost: Amount,
    lines: Vec<ActivityFeeLine>,
}

fn price(
    selection: &ValidatedSelection,
    package: &Package,
    schedule: &FeeSchedule,
) -> Option<Priced> {
    let bps = selection.tenure.multiplier_bps();
    let included = usize::try_from(package.activities_allowed).unwrap_or(usize::MAX);

    let base_license_fee = package.base_cost.scale_bps(bps)?;

    let lines = selection
        .activities
        .iter()
        .enumerate()
        .map(|(index, activity)| {
            let is_extra = index >= included;
            let charged = if is_extra {
                activity.standard_price.scale_bps(bps)?
            } else {
                Amount::ZERO
            };
            Some(ActivityFeeLine {
                activity_id: activity.id.clone(),
                name: activity.name.clone(),
                category: activity.category.clone(),
                standard_price: activity.standard_price,
                is_extra,
                charged,
            })
        })
        .collect::<Option<Vec<_>>>()?;
    let activity_extra_cost = Amount::checked_sum(lines.iter().map(|l| l.charged))?;

    let chargeable_shareholders = selection.shareholders.saturating_sub(1);
    let shareholder_fee = schedule
        .shareholder_unit_fee
        .checked_mul(chargeable_shareholders)?
        .scale_bps(bps)?;

    let visa_unit = package.per_visa_cost.unwrap_or(schedule.default_visa_unit_fee);
    let visa_fee = visa_unit.checked_mul(selection.visas)?.scale_bps(bps)?;

    let total_cost = Amount::checked_sum([
        base_license_fee,
        activity_extra_cost,
        shareholder_fee,
        visa_fee,
    ])?;

    Some(Priced {
        base_license_fee,
        activity_extra_cost,
        shareholder_fee,
        visa_fee,
        total_cost,
        lines,
    })
}

/// Compute the itemized cost of `selection` on `package`.
///
/// The caller has already established eligibility. Alternatives are left
/// empty for the facade to fill in.
pub fn compute_cost(
    selection: &ValidatedSelection,
    package: &Package,
    schedule: &FeeSchedule,
) -> CostBreakdown {
    let tenure_years = selection.tenure.years();
    let Some(priced) = price(selection, package, schedule) else {
        tracing::warn!(package = %package.id, "cost computation overflowed");
        return CostBreakdown::failed(
            schedule.currency.clone(),
            tenure_years,
            EligibilityError::invalid_input(format!(
                "cost of package \"{}\" exceeds the representable range",
                package.id
            )),
        );
    };

    let within_limit = u32::try_from(selection.activity_count())
        .map_or(false, |n| n <= package.activities_allowed);

    CostBreakdown {
        status: EstimateStatus::Resolved,
        currency: schedule.currency.clone(),
        tenure_years,
        total_cost: priced.total_cost,
        base_license_fee: priced.base_license_fee,
        visa_fee: priced.visa_fee,
        shareholder_fee: priced.shareholder_fee,
        activity_extra_cost: priced.activity_extra_cost,
        package: Some(PackageRef::from(package)),
        alternatives: Vec::new(),
        package_activity_limit: package.activities_allowed,
        is_within_limit: within_limit,
        activity_lines: priced.lines,
        eligibility_error: None,
    }
}
