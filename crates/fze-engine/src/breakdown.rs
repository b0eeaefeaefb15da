//! # Estimate Results
//!
//! [`CostBreakdown`] is the single shape every estimate returns, whatever
//! the outcome. Eligibility and input problems travel inside it as an
//! [`EligibilityError`]; they are data, not Rust errors, so a caller always
//! has one structure to render.
//!
//! ## Invariants
//!
//! - `status == Resolved` iff `package` is present and `eligibility_error`
//!   is absent.
//! - When `eligibility_error` is present every monetary field is zero and
//!   no package is resolved.
//! - `total_cost == base_license_fee + activity_extra_cost + shareholder_fee
//!   + visa_fee`, exactly, in minor units.

use fze_catalog::Package;
use fze_core::{ActivityId, Amount, PackageId, PackageType, ZoneName};
use serde::{Deserialize, Serialize};

/// Terminal state of one estimate.
///
/// The facade moves from idle through computing to one of the other
/// three states on every call. Computing is never observable because the
/// computation is synchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateStatus {
    /// Not enough selection yet: no activities or zero shareholders.
    Idle,
    /// A package was resolved and priced.
    Resolved,
    /// No package admits the selection.
    Ineligible,
    /// The selection itself is malformed.
    Invalid,
}

impl EstimateStatus {
    /// The wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Resolved => "resolved",
            Self::Ineligible => "ineligible",
            Self::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for EstimateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason code carried by an [`EligibilityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No package satisfies the shareholder, visa, entity-type or zone constraints.
    NoEligiblePackage,
    /// Unsupported tenure or entity type, unknown activity or package,
    /// non-positive shareholder count, or arithmetic overflow.
    InvalidInput,
    /// No activities selected.
    EmptySelection,
}

impl ErrorCode {
    /// The wire name of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoEligiblePackage => "no_eligible_package",
            Self::InvalidInput => "invalid_input",
            Self::EmptySelection => "empty_selection",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selection field that blocked eligibility, for highlighting in a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockingConstraint {
    /// Too many shareholders for every candidate package.
    Shareholders,
    /// Too many visas for every candidate package.
    Visas,
    /// Shareholders and visas each fit somewhere, but never together.
    ShareholdersAndVisas,
    /// No package accepts the entity type.
    EntityType,
    /// Compatible packages exist, only outside the requested zone.
    Zone,
    /// The catalog offers no packages at all.
    EmptyCatalog,
}

/// Why an estimate could not be priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityError {
    /// Machine-readable reason.
    pub code: ErrorCode,
    /// Human-readable, actionable message.
    pub message: String,
    /// Structured blocking constraint, for `NoEligiblePackage`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking: Option<BlockingConstraint>,
}

impl EligibilityError {
    /// A `NoEligiblePackage` error naming the blocking constraint.
    pub fn no_eligible_package(blocking: BlockingConstraint, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NoEligiblePackage,
            message: message.into(),
            blocking: Some(blocking),
        }
    }

    /// An `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidInput,
            message: message.into(),
            blocking: None,
        }
    }

    /// An `EmptySelection` error.
    pub fn empty_selection() -> Self {
        Self {
            code: ErrorCode::EmptySelection,
            message: "select at least one business activity".to_string(),
            blocking: None,
        }
    }
}

impl std::fmt::Display for EligibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for EligibilityError {}

/// Display reference to a catalog package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    /// Package identifier.
    pub id: PackageId,
    /// Owning zone.
    pub zone: ZoneName,
    /// Package name.
    pub name: String,
    /// Package type.
    pub package_type: PackageType,
    /// Advertised list price, unscaled.
    pub list_price: Amount,
}

impl From<&Package> for PackageRef {
    fn from(p: &Package) -> Self {
        Self {
            id: p.id.clone(),
            zone: p.zone.clone(),
            name: p.name.clone(),
            package_type: p.package_type,
            list_price: p.list_price,
        }
    }
}

/// One selected activity, itemized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFeeLine {
    /// Activity identifier.
    pub activity_id: ActivityId,
    /// Activity name.
    pub name: String,
    /// Activity category.
    pub category: String,
    /// Catalog standard price, unscaled.
    pub standard_price: Amount,
    /// Whether the activity exceeds the package's included count.
    pub is_extra: bool,
    /// Amount added to the total: the tenure-scaled standard price for
    /// extra activities, zero for included ones.
    pub charged: Amount,
}

/// The itemized result of one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Terminal state of the estimate.
    pub status: EstimateStatus,
    /// Currency code every amount is denominated in.
    pub currency: String,
    /// Tenure the amounts cover, in years, as requested.
    pub tenure_years: u32,
    /// Sum of every component below.
    pub total_cost: Amount,
    /// Package base cost scaled by tenure.
    pub base_license_fee: Amount,
    /// Visa count times the visa unit fee, scaled by tenure.
    pub visa_fee: Amount,
    /// Chargeable shareholders times the shareholder unit fee, scaled by tenure.
    pub shareholder_fee: Amount,
    /// Sum of the charged amounts of extra activities.
    pub activity_extra_cost: Amount,
    /// The recommended (or chosen) package.
    pub package: Option<PackageRef>,
    /// Other eligible packages, ascending by base cost.
    pub alternatives: Vec<PackageRef>,
    /// Activities the package includes in its base cost.
    pub package_activity_limit: u32,
    /// Whether the selected activity count fits the package limit.
    pub is_within_limit: bool,
    /// Per-activity lines in selection order.
    pub activity_lines: Vec<ActivityFeeLine>,
    /// Why no package was priced, when applicable.
    pub eligibility_error: Option<EligibilityError>,
}

impl CostBreakdown {
    /// A breakdown with every monetary field zero and no package.
    pub fn zeroed(
        status: EstimateStatus,
        currency: impl Into<String>,
        tenure_years: u32,
        eligibility_error: Option<EligibilityError>,
    ) -> Self {
        Self {
            status,
            currency: currency.into(),
            tenure_years,
            total_cost: Amount::ZERO,
            base_license_fee: Amount::ZERO,
            visa_fee: Amount::ZERO,
            shareholder_fee: Amount::ZERO,
            activity_extra_cost: Amount::ZERO,
            package: None,
            alternatives: Vec::new(),
            package_activity_limit: 0,
            is_within_limit: true,
            activity_lines: Vec::new(),
            eligibility_error,
        }
    }

    /// The idle result: nothing to price yet.
    pub fn idle(currency: impl Into<String>, tenure_years: u32) -> Self {
        Self::zeroed(EstimateStatus::Idle, currency, tenure_years, None)
    }

    /// A zeroed result carrying `error`, with status derived from its code.
    pub fn failed(currency: impl Into<String>, tenure_years: u32, error: EligibilityError) -> Self {
        let status = match error.code {
            ErrorCode::NoEligiblePackage => EstimateStatus::Ineligible,
            ErrorCode::InvalidInput => EstimateStatus::Invalid,
            ErrorCode::EmptySelection => EstimateStatus::Idle,
        };
        Self::zeroed(status, currency, tenure_years, Some(error))
    }

    /// Whether a package was resolved and priced.
    pub fn is_resolved(&self) -> bool {
        self.status == EstimateStatus::Resolved
    }

    /// Number of activity lines flagged extra.
    pub fn extra_activity_count(&self) -> usize {
        self.activity_lines.iter().filter(|l| l.is_extra).count()
    }
}
