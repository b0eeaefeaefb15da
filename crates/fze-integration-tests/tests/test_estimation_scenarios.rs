//! # Estimation Scenarios
//!
//! End-to-end scenarios through the public facade: catalog file on disk,
//! loaded and validated, then estimated with the default fee schedule.

use std::io::Write;
use std::sync::Arc;

use fze_catalog::Catalog;
use fze_core::Amount;
use fze_engine::{
    filter_eligible, rank, BlockingConstraint, ErrorCode, EstimateStatus, Estimator, FeeSchedule,
    Selection,
};

fn load(yaml: &str) -> Catalog {
    let mut f = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    f.write_all(yaml.as_bytes()).unwrap();
    Catalog::load(f.path()).unwrap()
}

fn estimator(yaml: &str) -> Estimator {
    Estimator::new(Arc::new(load(yaml)), FeeSchedule::default())
}

fn major(n: i64) -> Amount {
    Amount::from_major(n).unwrap()
}

const ONE_ACTIVITY: &str = r#"
activities:
  - { id: consulting, name: Consulting, category: consultancy, standard_price: "1000", premium_price: "1500" }
"#;

// ---------------------------------------------------------------------------
// No eligible package
// ---------------------------------------------------------------------------

#[test]
fn six_shareholders_against_caps_of_five() {
    let e = estimator(&format!(
        r#"
packages:
  - {{ id: a, zone: IFZA, name: A, package_type: company, activities_allowed: 3, shareholders_allowed: 5, max_visas: 3, base_cost: "9000" }}
  - {{ id: b, zone: DMCC, name: B, package_type: company, activities_allowed: 3, shareholders_allowed: 2, max_visas: 3, base_cost: "8000" }}
{ONE_ACTIVITY}"#
    ));
    let b = e.estimate(&Selection::new(["consulting"], "llc", 6, 0, 1));
    assert_eq!(b.status, EstimateStatus::Ineligible);
    let err = b.eligibility_error.unwrap();
    assert_eq!(err.code, ErrorCode::NoEligiblePackage);
    assert_eq!(err.blocking, Some(BlockingConstraint::Shareholders));
    assert_eq!(b.total_cost, Amount::ZERO);
    assert!(b.package.is_none());
}

// ---------------------------------------------------------------------------
// Tenure multiplier
// ---------------------------------------------------------------------------

#[test]
fn three_year_tenure_on_ten_thousand_base() {
    let e = estimator(&format!(
        r#"
packages:
  - {{ id: p, zone: IFZA, name: P, package_type: company, activities_allowed: 1, shareholders_allowed: 1, max_visas: 0, base_cost: "10000" }}
{ONE_ACTIVITY}"#
    ));
    let b = e.estimate(&Selection::new(["consulting"], "llc", 1, 0, 3));
    assert_eq!(b.status, EstimateStatus::Resolved);
    assert_eq!(b.base_license_fee, major(28_000));
    assert_eq!(b.total_cost, major(28_000));
    assert_eq!(b.activity_extra_cost, Amount::ZERO);
    assert_eq!(b.shareholder_fee, Amount::ZERO);
    assert_eq!(b.visa_fee, Amount::ZERO);
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn tie_on_base_cost_recommends_lower_id() {
    let yaml = format!(
        r#"
packages:
  - {{ id: b, zone: IFZA, name: B, package_type: company, activities_allowed: 1, shareholders_allowed: 1, max_visas: 0, base_cost: "5000" }}
  - {{ id: a, zone: IFZA, name: A, package_type: company, activities_allowed: 1, shareholders_allowed: 1, max_visas: 0, base_cost: "5000" }}
{ONE_ACTIVITY}"#
    );
    let catalog = load(&yaml);
    let eligibility = filter_eligible(&catalog, &Selection::new(["consulting"], "llc", 1, 0, 1));
    let ranking = rank(eligibility.eligible).unwrap();
    assert_eq!(ranking.recommended.id.as_str(), "a");
    assert_eq!(ranking.alternatives[0].id.as_str(), "b");

    let b = estimator(&yaml).estimate(&Selection::new(["consulting"], "llc", 1, 0, 1));
    assert_eq!(b.package.unwrap().id.as_str(), "a");
}

#[test]
fn single_eligible_package_has_no_alternatives() {
    let e = estimator(&format!(
        r#"
packages:
  - {{ id: only, zone: IFZA, name: Only, package_type: company, activities_allowed: 1, shareholders_allowed: 3, max_visas: 2 }}
  - {{ id: small, zone: IFZA, name: Small, package_type: company, activities_allowed: 1, shareholders_allowed: 1, max_visas: 0 }}
{ONE_ACTIVITY}"#
    ));
    let b = e.estimate(&Selection::new(["consulting"], "llc", 2, 1, 1));
    assert_eq!(b.package.as_ref().unwrap().id.as_str(), "only");
    assert!(b.alternatives.is_empty());
}

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

#[test]
fn builtin_freelance_recommends_cheapest_permit() {
    let e = Estimator::new(Arc::new(Catalog::builtin()), FeeSchedule::default());
    let b = e.estimate(&Selection::new(["content-creation"], "freelancer", 1, 1, 1));
    assert_eq!(b.status, EstimateStatus::Resolved);
    // shams-freelance (7,500) + one visa at the default fee (3,750).
    assert_eq!(b.package.as_ref().unwrap().id.as_str(), "shams-freelance");
    assert_eq!(b.visa_fee, major(3_750));
    assert_eq!(b.total_cost, major(11_250));
    assert_eq!(b.alternatives.len(), 1);
}

#[test]
fn builtin_branch_in_wrong_zone_points_elsewhere() {
    let e = Estimator::new(Arc::new(Catalog::builtin()), FeeSchedule::default());
    let b = e.estimate(&Selection::new(["import-export"], "branch", 1, 0, 1).with_zone("IFZA"));
    let err = b.eligibility_error.unwrap();
    assert_eq!(err.blocking, Some(BlockingConstraint::Zone));
    assert!(err.message.contains("DMCC") && err.message.contains("RAKEZ"), "{}", err.message);
}

#[test]
fn file_catalog_digest_matches_builtin_dump() {
    let builtin = Catalog::builtin();
    let yaml = serde_yaml::to_string(&builtin.to_document()).unwrap();
    let reloaded = load(&yaml);
    assert_eq!(reloaded.digest().unwrap(), builtin.digest().unwrap());
}
