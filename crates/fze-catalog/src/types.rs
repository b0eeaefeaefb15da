//! # Catalog Records
//!
//! Read-only catalog data: formation [`Package`]s offered by free zones,
//! business [`Activity`] entries a founder can select, and residence
//! [`VisaType`]s.
//!
//! Catalog files describe packages with [`PackageRecord`], where `base_cost`
//! and `list_price` may be omitted. Records are resolved into [`Package`]
//! values exactly once, when the [`Catalog`](crate::Catalog) is built: a
//! missing base cost takes the default for the package type, a missing list
//! price takes the resolved base cost. Past that point no call site deals
//! with absent costs, except `per_visa_cost`, whose absence is meaningful
//! (the package does not price visas itself).

use fze_core::{ActivityId, Amount, PackageId, PackageType, Tenure, VisaTypeId, ZoneName};
use serde::{Deserialize, Serialize};

/// A business activity (or service) a founder can add to a license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Activity {
    /// Catalog identifier.
    pub id: ActivityId,
    /// Display name.
    pub name: String,
    /// Category identifier, e.g. `"consultancy"`.
    pub category: String,
    /// Standard-tier price, used for extra-activity surcharges.
    pub standard_price: Amount,
    /// Premium-tier price.
    pub premium_price: Amount,
    /// Free-text processing timeline, e.g. `"3-5 working days"`.
    #[serde(default)]
    pub timeline: String,
    /// Documents the authority requires for this activity.
    #[serde(default)]
    pub required_documents: Vec<String>,
    /// Whether the activity is mandatory in its category.
    #[serde(default)]
    pub is_required: bool,
}

/// A residence visa type offered alongside a license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisaType {
    /// Catalog identifier.
    pub id: VisaTypeId,
    /// Display name.
    pub name: String,
    /// Description shown to the founder.
    #[serde(default)]
    pub description: String,
    /// Flat price.
    pub price: Amount,
    /// Free-text processing time, e.g. `"10-15 working days"`.
    #[serde(default)]
    pub processing_time: String,
}

/// A formation package as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageRecord {
    /// Catalog identifier.
    pub id: PackageId,
    /// Owning free zone.
    pub zone: ZoneName,
    /// Display name.
    pub name: String,
    /// Entity class the package is sold for.
    pub package_type: PackageType,
    /// Number of activities included in the base cost.
    pub activities_allowed: u32,
    /// Maximum number of shareholders.
    pub shareholders_allowed: u32,
    /// Maximum number of visas.
    pub max_visas: u32,
    /// License tenure the package is quoted for.
    #[serde(default = "default_tenure")]
    pub tenure_years: Tenure,
    /// Annual base cost. Defaults by package type when omitted.
    #[serde(default)]
    pub base_cost: Option<Amount>,
    /// Price per visa. Absent means the package does not price visas.
    #[serde(default)]
    pub per_visa_cost: Option<Amount>,
    /// Advertised list price. Defaults to the base cost when omitted.
    #[serde(default)]
    pub list_price: Option<Amount>,
}

fn default_tenure() -> Tenure {
    Tenure::OneYear
}

/// A formation package with every fallback resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Catalog identifier.
    pub id: PackageId,
    /// Owning free zone.
    pub zone: ZoneName,
    /// Display name.
    pub name: String,
    /// Entity class the package is sold for.
    pub package_type: PackageType,
    /// Number of activities included in the base cost.
    pub activities_allowed: u32,
    /// Maximum number of shareholders.
    pub shareholders_allowed: u32,
    /// Maximum number of visas.
    pub max_visas: u32,
    /// License tenure the package is quoted for.
    pub tenure_years: Tenure,
    /// Annual base cost.
    pub base_cost: Amount,
    /// Price per visa. Absent means the global default visa fee applies.
    pub per_visa_cost: Option<Amount>,
    /// Advertised list price, distinct from the computed base cost.
    pub list_price: Amount,
}

/// Default annual base cost for packages that omit one.
pub fn default_base_cost(package_type: PackageType) -> Amount {
    let major = match package_type {
        PackageType::Company => 12_500,
        PackageType::Establishment => 11_000,
        PackageType::Branch => 15_000,
        PackageType::Freelance => 7_500,
    };
    Amount::from_minor(major * fze_core::MINOR_UNITS)
}

impl PackageRecord {
    /// Resolve optional costs into a [`Package`].
    pub fn resolve(self) -> Package {
        let base_cost = self
            .base_cost
            .unwrap_or_else(|| default_base_cost(self.package_type));
        Package {
            list_price: self.list_price.unwrap_or(base_cost),
            id: self.id,
            zone: self.zone,
            name: self.name,
            package_type: self.package_type,
            activities_allowed: self.activities_allowed,
            shareholders_allowed: self.shareholders_allowed,
            max_visas: self.max_visas,
            tenure_years: self.tenure_years,
            base_cost,
            per_visa_cost: self.per_visa_cost,
        }
    }
}

impl From<Package> for PackageRecord {
    fn from(p: Package) -> Self {
        Self {
            id: p.id,
            zone: p.zone,
            name: p.name,
            package_type: p.package_type,
            activities_allowed: p.activities_allowed,
            shareholders_allowed: p.shareholders_allowed,
            max_visas: p.max_visas,
            tenure_years: p.tenure_years,
            base_cost: Some(p.base_cost),
            per_visa_cost: p.per_visa_cost,
            list_price: Some(p.list_price),
        }
    }
}

/// The on-disk shape of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Formation packages.
    #[serde(default)]
    pub packages: Vec<PackageRecord>,
    /// Selectable business activities.
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Residence visa types.
    #[serde(default)]
    pub visa_types: Vec<VisaType>,
}
