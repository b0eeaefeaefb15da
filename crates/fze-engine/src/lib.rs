//! # fze-engine: Package Eligibility & Cost Estimation
//!
//! Given a founder's [`Selection`] and a read-only catalog, the engine
//!
//! 1. filters the catalog to the packages the selection qualifies for
//!    ([`eligibility`]),
//! 2. reports a precise reason when none qualify,
//! 3. otherwise picks the cheapest package ([`ranker`]) and computes an
//!    itemized, reproducible cost ([`cost`]).
//!
//! [`estimator::estimate`] is the entry point. It is a pure function of its
//! inputs: no I/O, no shared mutable state, no suspension points. Problems
//! with the selection come back as data inside the [`CostBreakdown`].
//!
//! ## Money
//!
//! Amounts are integer minor units ([`fze_core::Amount`]); tenure multipliers
//! are basis points. No floating point is involved anywhere in pricing.

pub mod breakdown;
pub mod config;
pub mod cost;
pub mod eligibility;
pub mod estimator;
pub mod ranker;
pub mod selection;

#[cfg(test)]
mod fixtures;

pub use breakdown::{
    ActivityFeeLine, BlockingConstraint, CostBreakdown, EligibilityError, ErrorCode,
    EstimateStatus, PackageRef,
};
pub use config::{ConfigError, FeeSchedule};
pub use cost::compute_cost;
pub use eligibility::{check_package, filter_eligible, filter_validated, is_eligible, Eligibility};
pub use estimator::{estimate, estimate_for_package, Estimator};
pub use ranker::{rank, Ranking};
pub use selection::{Selection, ValidatedSelection};
