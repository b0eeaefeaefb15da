//! # Eligibility Filter
//!
//! Narrows the catalog to the packages a selection legally qualifies for.
//!
//! A package is eligible when:
//!
//! 1. its zone matches the requested zone, if one was given;
//! 2. its package type accepts the selection's entity type;
//! 3. the shareholder count is within `shareholders_allowed`;
//! 4. the visa count is within `max_visas`.
//!
//! The activity count is deliberately not a gate. Activities beyond a
//! package's included count are priced as surcharges by the calculator, so
//! a package stays eligible however many activities are selected.
//!
//! ## Diagnostics
//!
//! When nothing qualifies, the error names the blocking constraint. The
//! diagnosis looks at the packages the founder was aiming for (zone and
//! entity type, else entity type alone, else everything) and reports
//! capacity mismatches before structural ones, since shareholder and visa
//! counts are what the founder can most easily change.

use std::collections::BTreeSet;

use fze_catalog::{CatalogProvider, Package};

use crate::breakdown::{BlockingConstraint, EligibilityError};
use crate::selection::{Selection, ValidatedSelection};

/// Result of the eligibility filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility<'a> {
    /// Eligible packages in catalog (id) order.
    pub eligible: Vec<&'a Package>,
    /// Why nothing is eligible; present iff `eligible` is empty.
    pub error: Option<EligibilityError>,
}

fn zone_ok(p: &Package, sel: &ValidatedSelection) -> bool {
    sel.zone.as_ref().map_or(true, |z| p.zone == *z)
}

fn type_ok(p: &Package, sel: &ValidatedSelection) -> bool {
    p.package_type.accepts(sel.entity_type)
}

fn fits_shareholders(p: &Package, sel: &ValidatedSelection) -> bool {
    sel.shareholders <= p.shareholders_allowed
}

fn fits_visas(p: &Package, sel: &ValidatedSelection) -> bool {
    sel.visas <= p.max_visas
}

/// Whether `package` admits `selection`.
pub fn is_eligible(package: &Package, selection: &ValidatedSelection) -> bool {
    zone_ok(package, selection)
        && type_ok(package, selection)
        && fits_shareholders(package, selection)
        && fits_visas(package, selection)
}

/// Filter a raw selection, validating it first.
///
/// Empty activities report `EmptySelection`; a zero shareholder count,
/// unknown entity type, tenure or activity report `InvalidInput`.
pub fn filter_eligible<'a>(catalog: &'a dyn CatalogProvider, selection: &Selection) -> Eligibility<'a> {
    match selection.validate(catalog) {
        Ok(validated) => filter_validated(catalog, &validated),
        Err(error) => Eligibility {
            eligible: Vec::new(),
            error: Some(error),
        },
    }
}

/// Filter a validated selection.
pub fn filter_validated<'a>(
    catalog: &'a dyn CatalogProvider,
    selection: &ValidatedSelection,
) -> Eligibility<'a> {
    let all = catalog.packages(None);
    let eligible: Vec<&Package> = all
        .iter()
        .copied()
        .filter(|p| is_eligible(p, selection))
        .collect();
    let error = eligible.is_empty().then(|| diagnose(&all, selection));
    Eligibility { eligible, error }
}

/// Explain why one specific package does not admit the selection.
pub fn check_package(package: &Package, selection: &ValidatedSelection) -> Result<(), EligibilityError> {
    if !type_ok(package, selection) {
        return Err(EligibilityError::no_eligible_package(
            BlockingConstraint::EntityType,
            format!(
                "package \"{}\" is a {} package and does not accept entity type {}",
                package.id, package.package_type, selection.entity_type
            ),
        ));
    }
    if !zone_ok(package, selection) {
        return Err(EligibilityError::no_eligible_package(
            BlockingConstraint::Zone,
            format!(
                "package \"{}\" belongs to {}, not the requested zone",
                package.id, package.zone
            ),
        ));
    }
    match (fits_shareholders(package, selection), fits_visas(package, selection)) {
        (true, true) => Ok(()),
        (false, true) => Err(EligibilityError::no_eligible_package(
            BlockingConstraint::Shareholders,
            format!(
                "package \"{}\" allows at most {} shareholder(s), {} requested",
                package.id, package.shareholders_allowed, selection.shareholders
            ),
        )),
        (true, false) => Err(EligibilityError::no_eligible_package(
            BlockingConstraint::Visas,
            format!(
                "package \"{}\" allows at most {} visa(s), {} requested",
                package.id, package.max_visas, selection.visas
            ),
        )),
        (false, false) => Err(EligibilityError::no_eligible_package(
            BlockingConstraint::ShareholdersAndVisas,
            format!(
                "package \"{}\" allows at most {} shareholder(s) and {} visa(s), {} and {} requested",
                package.id,
                package.shareholders_allowed,
                package.max_visas,
                selection.shareholders,
                selection.visas
            ),
        )),
    }
}

fn scope_label(sel: &ValidatedSelection) -> String {
    match &sel.zone {
        Some(z) => format!("{} package in {}", sel.entity_type, z),
        None => format!("{} package", sel.entity_type),
    }
}

fn diagnose(all: &[&Package], sel: &ValidatedSelection) -> EligibilityError {
    if all.is_empty() {
        return EligibilityError::no_eligible_package(
            BlockingConstraint::EmptyCatalog,
            "the catalog offers no packages",
        );
    }

    let targeted: Vec<&Package> = all
        .iter()
        .copied()
        .filter(|p| zone_ok(p, sel) && type_ok(p, sel))
        .collect();
    let by_type: Vec<&Package> = all.iter().copied().filter(|p| type_ok(p, sel)).collect();
    let scope: &[&Package] = if !targeted.is_empty() {
        &targeted
    } else if !by_type.is_empty() {
        &by_type
    } else {
        all
    };
    let label = scope_label(sel);

    if !scope.iter().any(|p| fits_shareholders(p, sel)) {
        let cap = scope.iter().map(|p| p.shareholders_allowed).max().unwrap_or(0);
        return EligibilityError::no_eligible_package(
            BlockingConstraint::Shareholders,
            format!(
                "{} shareholder(s) requested, but no {} allows more than {}",
                sel.shareholders, label, cap
            ),
        );
    }
    if !scope.iter().any(|p| fits_visas(p, sel)) {
        let cap = scope.iter().map(|p| p.max_visas).max().unwrap_or(0);
        return EligibilityError::no_eligible_package(
            BlockingConstraint::Visas,
            format!(
                "{} visa(s) requested, but no {} allows more than {}",
                sel.visas, label, cap
            ),
        );
    }
    if !scope
        .iter()
        .any(|p| fits_shareholders(p, sel) && fits_visas(p, sel))
    {
        return EligibilityError::no_eligible_package(
            BlockingConstraint::ShareholdersAndVisas,
            format!(
                "no {} allows both {} shareholder(s) and {} visa(s)",
                label, sel.shareholders, sel.visas
            ),
        );
    }

    // Capacity fits somewhere in scope, so the scope had to fall back.
    if sel.zone.is_some() && !by_type.is_empty() {
        let zones: BTreeSet<&str> = by_type.iter().map(|p| p.zone.as_str()).collect();
        let zones: Vec<&str> = zones.into_iter().collect();
        return EligibilityError::no_eligible_package(
            BlockingConstraint::Zone,
            format!(
                "no {} is offered; {} packages are available in: {}",
                label,
                sel.entity_type,
                zones.join(", ")
            ),
        );
    }
    EligibilityError::no_eligible_package(
        BlockingConstraint::EntityType,
        format!("no package accepts entity type {}", sel.entity_type),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakdown::ErrorCode;
    use crate::fixtures::{catalog_from_yaml, mixed_catalog, ACTIVITIES};
    use fze_catalog::Catalog;
    use fze_core::PackageId;
    use proptest::prelude::*;

    fn ids(e: &Eligibility<'_>) -> Vec<String> {
        e.eligible.iter().map(|p| p.id.to_string()).collect()
    }

    fn blocking(e: &Eligibility<'_>) -> Option<BlockingConstraint> {
        e.error.as_ref().and_then(|err| err.blocking)
    }

    #[test]
    fn filters_by_capacity_and_type() {
        let c = mixed_catalog();
        let e = filter_eligible(&c, &Selection::new(["a1"], "llc", 2, 1, 1));
        assert_eq!(ids(&e), vec!["dmcc-wide", "ifza-large", "ifza-small"]);
        assert!(e.error.is_none());

        let e = filter_eligible(&c, &Selection::new(["a1"], "llc", 4, 1, 1));
        assert_eq!(ids(&e), vec!["dmcc-wide", "ifza-large"]);
    }

    #[test]
    fn zone_restricts_case_insensitively() {
        let c = mixed_catalog();
        let e = filter_eligible(&c, &Selection::new(["a1"], "fzco", 1, 0, 1).with_zone("ifza"));
        assert_eq!(ids(&e), vec!["ifza-large", "ifza-small"]);
    }

    #[test]
    fn activity_count_is_not_a_gate() {
        let c = mixed_catalog();
        let s = Selection::new(["a1", "a2", "a3", "a4", "a5", "a6"], "llc", 1, 0, 1);
        let e = filter_eligible(&c, &s);
        assert!(ids(&e).contains(&"ifza-small".to_string()));
    }

    #[test]
    fn too_many_shareholders_names_highest_cap() {
        let c = mixed_catalog();
        let e = filter_eligible(&c, &Selection::new(["a1"], "llc", 6, 0, 1).with_zone("IFZA"));
        assert!(e.eligible.is_empty());
        let err = e.error.unwrap();
        assert_eq!(err.code, ErrorCode::NoEligiblePackage);
        assert_eq!(err.blocking, Some(BlockingConstraint::Shareholders));
        assert!(err.message.contains("more than 5"), "{}", err.message);
    }

    #[test]
    fn too_many_visas() {
        let c = mixed_catalog();
        let e = filter_eligible(&c, &Selection::new(["a1"], "llc", 1, 7, 1));
        assert_eq!(blocking(&e), Some(BlockingConstraint::Visas));
        assert!(e.error.unwrap().message.contains("more than 6"));
    }

    #[test]
    fn shareholders_and_visas_never_together() {
        let c = mixed_catalog();
        // 10 shareholders only fit dmcc-wide (2 visas); 4 visas only fit ifza-large (5 shareholders).
        let e = filter_eligible(&c, &Selection::new(["a1"], "llc", 10, 4, 1));
        assert_eq!(blocking(&e), Some(BlockingConstraint::ShareholdersAndVisas));
    }

    #[test]
    fn capacity_reported_before_zone() {
        let c = mixed_catalog();
        // SHAMS offers nothing; scope falls back to all company packages.
        let e = filter_eligible(&c, &Selection::new(["a1"], "llc", 60, 0, 1).with_zone("SHAMS"));
        assert_eq!(blocking(&e), Some(BlockingConstraint::Shareholders));
    }

    #[test]
    fn zone_mismatch_lists_other_zones() {
        let c = mixed_catalog();
        let e = filter_eligible(&c, &Selection::new(["a1"], "branch", 1, 0, 1).with_zone("IFZA"));
        let err = e.error.unwrap();
        assert_eq!(err.blocking, Some(BlockingConstraint::Zone));
        assert!(err.message.contains("RAKEZ"), "{}", err.message);
    }

    #[test]
    fn entity_type_mismatch() {
        let c = mixed_catalog();
        let e = filter_eligible(&c, &Selection::new(["a1"], "freelance", 1, 0, 1));
        assert_eq!(blocking(&e), Some(BlockingConstraint::EntityType));
    }

    #[test]
    fn empty_catalog() {
        let c = catalog_from_yaml(ACTIVITIES);
        let e = filter_eligible(&c, &Selection::new(["a1"], "llc", 1, 0, 1));
        assert_eq!(blocking(&e), Some(BlockingConstraint::EmptyCatalog));
    }

    #[test]
    fn invalid_selection_short_circuits() {
        let c = mixed_catalog();
        let e = filter_eligible(&c, &Selection::new(Vec::<String>::new(), "llc", 1, 0, 1));
        assert_eq!(e.error.unwrap().code, ErrorCode::EmptySelection);

        let e = filter_eligible(&c, &Selection::new(["a1"], "llc", 0, 0, 1));
        assert_eq!(e.error.unwrap().code, ErrorCode::InvalidInput);
    }

    #[test]
    fn check_package_names_violated_limit() {
        let c = mixed_catalog();
        let sel = Selection::new(["a1"], "llc", 4, 2, 1).validate(&c).unwrap();
        let small = c.package(&PackageId::new("ifza-small").unwrap()).unwrap();
        let err = check_package(small, &sel).unwrap_err();
        assert_eq!(err.blocking, Some(BlockingConstraint::ShareholdersAndVisas));

        let branch = c.package(&PackageId::new("rakez-branch").unwrap()).unwrap();
        let err = check_package(branch, &sel).unwrap_err();
        assert_eq!(err.blocking, Some(BlockingConstraint::EntityType));

        let large = c.package(&PackageId::new("ifza-large").unwrap()).unwrap();
        assert!(check_package(large, &sel).is_ok());
    }

    fn builtin() -> &'static Catalog {
        static CATALOG: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
        CATALOG.get_or_init(Catalog::builtin)
    }

    proptest! {
        #[test]
        fn over_capacity_packages_are_excluded(
            shareholders in 1u32..60,
            visas in 0u32..10,
            entity in prop::sample::select(vec!["llc", "fze", "fzco", "branch", "freelance"]),
        ) {
            let c = builtin();
            let e = filter_eligible(c, &Selection::new(["it-consultancy"], entity, shareholders, visas, 1));
            for p in &e.eligible {
                prop_assert!(shareholders <= p.shareholders_allowed);
                prop_assert!(visas <= p.max_visas);
            }
            prop_assert_eq!(e.eligible.is_empty(), e.error.is_some());
        }
    }
}
