//! # Catalog Snapshot
//!
//! [`Catalog`] is the immutable, validated snapshot the engine reads from.
//! It is built once from a [`CatalogDocument`] (a file or the built-in seed)
//! and then shared read-only, typically behind an `Arc`. Nothing mutates it
//! after construction.
//!
//! ## Validation
//!
//! - Identifiers are unique per record kind.
//! - Every monetary field is non-negative.
//! - Activity and package names are non-empty.
//!
//! ## Ordering
//!
//! All listings are returned in ascending identifier order, so any two reads
//! of the same snapshot return the same sequence.
//!
//! ## Digest
//!
//! [`Catalog::digest`] is a SHA-256 over the canonical JSON of the resolved
//! snapshot (records sorted by id, struct fields in declaration order). Two
//! catalogs with the same digest price every selection identically.

use std::collections::{BTreeMap, BTreeSet};

use fze_core::{ActivityId, Amount, PackageId, ZoneName};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Activity, CatalogDocument, Package, PackageRecord, VisaType};

/// Read-only access to catalog data.
///
/// The estimation engine only depends on this trait, so a caller can front
/// any data source with it. [`Catalog`] is the standard implementation.
pub trait CatalogProvider {
    /// Packages, optionally restricted to one zone (case-insensitive).
    fn packages(&self, zone: Option<&ZoneName>) -> Vec<&Package>;

    /// Activities, optionally restricted to one category.
    fn activities(&self, category: Option<&str>) -> Vec<&Activity>;

    /// All visa types.
    fn visa_types(&self) -> Vec<&VisaType>;

    /// Look up a package by id.
    fn package(&self, id: &PackageId) -> Option<&Package>;

    /// Look up an activity by id.
    fn activity(&self, id: &ActivityId) -> Option<&Activity>;
}

/// An immutable, validated catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    packages: BTreeMap<PackageId, Package>,
    activities: BTreeMap<ActivityId, Activity>,
    visa_types: Vec<VisaType>,
}

#[derive(Serialize)]
struct CanonicalCatalog<'a> {
    packages: Vec<&'a Package>,
    activities: Vec<&'a Activity>,
    visa_types: &'a [VisaType],
}

fn ensure_non_negative(
    kind: &'static str,
    id: &str,
    field: &'static str,
    value: Amount,
) -> CatalogResult<()> {
    if value.is_negative() {
        return Err(CatalogError::NegativeAmount {
            kind,
            id: id.to_string(),
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn ensure_named(kind: &'static str, id: &str, name: &str) -> CatalogResult<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidRecord {
            kind,
            id: id.to_string(),
            detail: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

fn validate_package_record(r: &PackageRecord) -> CatalogResult<()> {
    let id = r.id.as_str();
    ensure_named("package", id, &r.name)?;
    if let Some(v) = r.base_cost {
        ensure_non_negative("package", id, "base_cost", v)?;
    }
    if let Some(v) = r.per_visa_cost {
        ensure_non_negative("package", id, "per_visa_cost", v)?;
    }
    if let Some(v) = r.list_price {
        ensure_non_negative("package", id, "list_price", v)?;
    }
    Ok(())
}

impl Catalog {
    /// Validate a document and resolve it into a snapshot.
    pub fn from_document(document: CatalogDocument) -> CatalogResult<Self> {
        let mut packages = BTreeMap::new();
        for record in document.packages {
            validate_package_record(&record)?;
            let package = record.resolve();
            let id = package.id.clone();
            if packages.insert(id.clone(), package).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "package",
                    id: id.to_string(),
                });
            }
        }

        let mut activities = BTreeMap::new();
        for activity in document.activities {
            let id = activity.id.as_str();
            ensure_named("activity", id, &activity.name)?;
            ensure_non_negative("activity", id, "standard_price", activity.standard_price)?;
            ensure_non_negative("activity", id, "premium_price", activity.premium_price)?;
            let key = activity.id.clone();
            if activities.insert(key.clone(), activity).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "activity",
                    id: key.to_string(),
                });
            }
        }

        let mut seen_visas = BTreeSet::new();
        let mut visa_types = document.visa_types;
        for visa in &visa_types {
            let id = visa.id.as_str();
            ensure_named("visa type", id, &visa.name)?;
            ensure_non_negative("visa type", id, "price", visa.price)?;
            if !seen_visas.insert(visa.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    kind: "visa type",
                    id: id.to_string(),
                });
            }
        }
        visa_types.sort_by(|a, b| a.id.cmp(&b.id));

        let catalog = Self {
            packages,
            activities,
            visa_types,
        };
        tracing::debug!(
            packages = catalog.packages.len(),
            activities = catalog.activities.len(),
            visa_types = catalog.visa_types.len(),
            "catalog snapshot built"
        );
        Ok(catalog)
    }

    /// Assemble a snapshot from records already known to be valid.
    ///
    /// Used by the built-in seed; duplicates keep the last record.
    pub(crate) fn from_parts(
        packages: Vec<Package>,
        activities: Vec<Activity>,
        mut visa_types: Vec<VisaType>,
    ) -> Self {
        visa_types.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            packages: packages.into_iter().map(|p| (p.id.clone(), p)).collect(),
            activities: activities.into_iter().map(|a| (a.id.clone(), a)).collect(),
            visa_types,
        }
    }

    /// Load, validate and resolve a catalog file.
    pub fn load(path: &std::path::Path) -> CatalogResult<Self> {
        let document = crate::parser::load_document(path)?;
        Self::from_document(document)
    }

    /// The built-in free-zone catalog.
    pub fn builtin() -> Self {
        crate::seed::builtin_catalog()
    }

    /// Distinct zone names, sorted.
    pub fn zones(&self) -> Vec<&ZoneName> {
        let zones: BTreeSet<&ZoneName> = self.packages.values().map(|p| &p.zone).collect();
        zones.into_iter().collect()
    }

    /// Distinct activity categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let categories: BTreeSet<&str> = self
            .activities
            .values()
            .map(|a| a.category.as_str())
            .collect();
        categories.into_iter().collect()
    }

    /// Number of packages.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Number of activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Convert back into a document with every fallback made explicit.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            packages: self.packages.values().cloned().map(PackageRecord::from).collect(),
            activities: self.activities.values().cloned().collect(),
            visa_types: self.visa_types.clone(),
        }
    }

    /// Canonical JSON bytes of the resolved snapshot.
    pub fn canonical_bytes(&self) -> CatalogResult<Vec<u8>> {
        let canonical = CanonicalCatalog {
            packages: self.packages.values().collect(),
            activities: self.activities.values().collect(),
            visa_types: &self.visa_types,
        };
        Ok(serde_json::to_vec(&canonical)?)
    }

    /// Lowercase hex SHA-256 of [`canonical_bytes`](Self::canonical_bytes).
    pub fn digest(&self) -> CatalogResult<String> {
        let bytes = self.canonical_bytes()?;
        let hash = Sha256::digest(&bytes);
        Ok(hash.iter().map(|b| format!("{b:02x}")).collect())
    }
}

impl CatalogProvider for Catalog {
    fn packages(&self, zone: Option<&ZoneName>) -> Vec<&Package> {
        self.packages
            .values()
            .filter(|p| zone.map_or(true, |z| p.zone == *z))
            .collect()
    }

    fn activities(&self, category: Option<&str>) -> Vec<&Activity> {
        self.activities
            .values()
            .filter(|a| category.map_or(true, |c| a.category.eq_ignore_ascii_case(c.trim())))
            .collect()
    }

    fn visa_types(&self) -> Vec<&VisaType> {
        self.visa_types.iter().collect()
    }

    fn package(&self, id: &PackageId) -> Option<&Package> {
        self.packages.get(id)
    }

    fn activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_document, CatalogFormat};

    const DOC: &str = r#"
packages:
  - id: b-pkg
    zone: DMCC
    name: DMCC Flexi
    package_type: company
    activities_allowed: 3
    shareholders_allowed: 50
    max_visas: 6
    base_cost: 20000
  - id: a-pkg
    zone: IFZA
    name: IFZA Starter
    package_type: company
    activities_allowed: 3
    shareholders_allowed: 5
    max_visas: 2
activities:
  - id: trading
    name: General Trading
    category: trading
    standard_price: 2000
    premium_price: 3000
  - id: consulting
    name: Management Consulting
    category: Consultancy
    standard_price: 1000
    premium_price: 1500
visa_types:
  - id: partner
    name: Partner Visa
    price: 4750
  - id: employee
    name: Employee Visa
    price: 3750
"#;

    fn catalog() -> Catalog {
        let doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        Catalog::from_document(doc).unwrap()
    }

    #[test]
    fn packages_listed_in_id_order() {
        let c = catalog();
        let ids: Vec<&str> = c.packages(None).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a-pkg", "b-pkg"]);
    }

    #[test]
    fn packages_filtered_by_zone_case_insensitively() {
        let c = catalog();
        let zone = ZoneName::new("dmcc").unwrap();
        let pkgs = c.packages(Some(&zone));
        assert_eq!(pkgs.len(), 1);
        assert_eq!(pkgs[0].id.as_str(), "b-pkg");
    }

    #[test]
    fn activities_filtered_by_category() {
        let c = catalog();
        assert_eq!(c.activities(None).len(), 2);
        let consultancy = c.activities(Some("consultancy"));
        assert_eq!(consultancy.len(), 1);
        assert_eq!(consultancy[0].id.as_str(), "consulting");
        assert!(c.activities(Some("manufacturing")).is_empty());
    }

    #[test]
    fn visa_types_sorted() {
        let c = catalog();
        let ids: Vec<&str> = c.visa_types().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["employee", "partner"]);
    }

    #[test]
    fn fallback_base_cost_resolved_at_load() {
        let c = catalog();
        let p = c.package(&PackageId::new("a-pkg").unwrap()).unwrap();
        assert_eq!(p.base_cost.to_string(), "12500.00");
    }

    #[test]
    fn zones_and_categories_distinct() {
        let c = catalog();
        let zones: Vec<&str> = c.zones().iter().map(|z| z.as_str()).collect();
        assert_eq!(zones, vec!["DMCC", "IFZA"]);
        assert_eq!(c.categories(), vec!["Consultancy", "trading"]);
    }

    #[test]
    fn duplicate_package_rejected() {
        let mut doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        let dup = doc.packages[0].clone();
        doc.packages.push(dup);
        let err = Catalog::from_document(doc).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "package", .. }));
    }

    #[test]
    fn duplicate_activity_rejected() {
        let mut doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        let dup = doc.activities[1].clone();
        doc.activities.push(dup);
        let err = Catalog::from_document(doc).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "activity", .. }));
    }

    #[test]
    fn duplicate_visa_type_rejected() {
        let mut doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        let dup = doc.visa_types[0].clone();
        doc.visa_types.push(dup);
        assert!(Catalog::from_document(doc).is_err());
    }

    #[test]
    fn negative_amounts_rejected() {
        let mut doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        doc.activities[0].standard_price = Amount::from_minor(-100);
        let err = Catalog::from_document(doc).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NegativeAmount { field: "standard_price", .. }
        ));

        let mut doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        doc.packages[0].per_visa_cost = Some(Amount::from_minor(-1));
        assert!(Catalog::from_document(doc).is_err());
    }

    #[test]
    fn blank_names_rejected() {
        let mut doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        doc.packages[0].name = "  ".into();
        let err = Catalog::from_document(doc).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { .. }));
    }

    #[test]
    fn digest_is_stable_and_content_sensitive() {
        let a = catalog();
        let b = catalog();
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
        assert_eq!(a.digest().unwrap().len(), 64);

        let mut doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        doc.packages[0].max_visas = 7;
        let c = Catalog::from_document(doc).unwrap();
        assert_ne!(a.digest().unwrap(), c.digest().unwrap());
    }

    #[test]
    fn digest_ignores_record_order_in_source() {
        let mut doc = parse_document(DOC, CatalogFormat::Yaml).unwrap();
        doc.packages.reverse();
        doc.visa_types.reverse();
        let shuffled = Catalog::from_document(doc).unwrap();
        assert_eq!(shuffled.digest().unwrap(), catalog().digest().unwrap());
    }

    #[test]
    fn document_roundtrip_preserves_snapshot() {
        let c = catalog();
        let rebuilt = Catalog::from_document(c.to_document()).unwrap();
        assert_eq!(rebuilt, c);
    }
}
