//! # Estimation Properties
//!
//! Property tests over the built-in catalog:
//!
//! - monotonicity: more shareholders, visas or activities never lower the
//!   total on a fixed package;
//! - idempotence: identical inputs give identical breakdowns;
//! - exclusion: over-capacity packages never appear as eligible;
//! - extra-activity count: `k` activities past the limit give exactly `k`
//!   extra lines.

use std::sync::{Arc, OnceLock};

use fze_catalog::{Catalog, CatalogProvider};
use fze_core::{Amount, PackageId};
use fze_engine::{filter_eligible, EstimateStatus, Estimator, FeeSchedule, Selection};
use proptest::prelude::*;

fn estimator() -> &'static Estimator {
    static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();
    ESTIMATOR.get_or_init(|| Estimator::new(Arc::new(Catalog::builtin()), FeeSchedule::default()))
}

fn activity_ids() -> Vec<String> {
    estimator()
        .catalog()
        .activities(None)
        .into_iter()
        .map(|a| a.id.to_string())
        .collect()
}

/// DMCC Flexi: 50 shareholders, 6 visas, 3 included activities.
const FIXED_PACKAGE: &str = "dmcc-flexi";

fn total_on_fixed(n_activities: usize, shareholders: u32, visas: u32, tenure: u32) -> Amount {
    let ids = activity_ids();
    let selection = Selection::new(ids[..n_activities].iter().cloned(), "fzco", shareholders, visas, tenure);
    let b = estimator().estimate_for_package(&selection, FIXED_PACKAGE);
    assert_eq!(b.status, EstimateStatus::Resolved, "{:?}", b.eligibility_error);
    b.total_cost
}

fn tenure() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![1u32, 3, 5])
}

proptest! {
    #[test]
    fn more_shareholders_never_cheaper(
        n in 1usize..=12, shareholders in 1u32..50, visas in 0u32..=6, t in tenure(),
    ) {
        prop_assert!(total_on_fixed(n, shareholders + 1, visas, t) >= total_on_fixed(n, shareholders, visas, t));
    }

    #[test]
    fn more_visas_never_cheaper(
        n in 1usize..=12, shareholders in 1u32..=50, visas in 0u32..6, t in tenure(),
    ) {
        prop_assert!(total_on_fixed(n, shareholders, visas + 1, t) >= total_on_fixed(n, shareholders, visas, t));
    }

    #[test]
    fn more_activities_never_cheaper(
        n in 1usize..12, shareholders in 1u32..=50, visas in 0u32..=6, t in tenure(),
    ) {
        prop_assert!(total_on_fixed(n + 1, shareholders, visas, t) >= total_on_fixed(n, shareholders, visas, t));
    }

    #[test]
    fn estimate_is_idempotent(
        picks in prop::collection::vec(0usize..12, 0..6),
        entity in prop::sample::select(vec!["llc", "fze", "fzco", "branch", "freelance", "trust"]),
        shareholders in 0u32..60,
        visas in 0u32..10,
        t in 0u32..6,
        zone in prop::option::of(prop::sample::select(vec!["IFZA", "dmcc", "RAKEZ", "Nowhere"])),
    ) {
        let ids = activity_ids();
        let mut selection = Selection::new(picks.iter().map(|&i| ids[i].clone()), entity, shareholders, visas, t);
        selection.requested_zone = zone.map(str::to_string);
        let first = estimator().estimate(&selection);
        let second = estimator().estimate(&selection);
        prop_assert_eq!(serde_json::to_vec(&first).unwrap(), serde_json::to_vec(&second).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn over_capacity_packages_are_never_eligible(
        shareholders in 1u32..60,
        visas in 0u32..10,
        entity in prop::sample::select(vec!["llc", "fze", "fzco", "branch", "freelance"]),
    ) {
        let catalog = estimator().catalog();
        let e = filter_eligible(catalog, &Selection::new(["it-consultancy"], entity, shareholders, visas, 1));
        for p in catalog.packages(None) {
            if shareholders > p.shareholders_allowed || visas > p.max_visas {
                prop_assert!(!e.eligible.iter().any(|q| q.id == p.id), "{} should be excluded", p.id);
            }
        }
    }

    #[test]
    fn k_extra_activities_give_k_extra_lines(k in 1usize..=9) {
        let catalog = estimator().catalog();
        let package = catalog.package(&PackageId::new(FIXED_PACKAGE).unwrap()).unwrap();
        let limit = package.activities_allowed as usize;
        let ids = activity_ids();
        let selection = Selection::new(ids[..limit + k].iter().cloned(), "fzco", 1, 0, 1);
        let b = estimator().estimate_for_package(&selection, FIXED_PACKAGE);
        prop_assert_eq!(b.extra_activity_count(), k);
        prop_assert!(!b.is_within_limit);
    }
}

#[test]
fn resolved_components_always_sum_to_total() {
    let ids = activity_ids();
    for n in 1..=ids.len() {
        for t in [1, 3, 5] {
            let b = estimator().estimate(&Selection::new(ids[..n].iter().cloned(), "llc", 3, 2, t));
            assert_eq!(b.status, EstimateStatus::Resolved);
            let sum = Amount::checked_sum([
                b.base_license_fee,
                b.activity_extra_cost,
                b.shareholder_fee,
                b.visa_fee,
            ])
            .unwrap();
            assert_eq!(sum, b.total_cost);
        }
    }
}
