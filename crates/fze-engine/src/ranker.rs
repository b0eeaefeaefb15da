//! # Package Ranker
//!
//! Orders eligible packages ascending by base cost, breaking ties by
//! ascending package id, so repeated calls with the same input always pick
//! the same recommendation.

use std::cmp::Ordering;

use fze_catalog::Package;

/// A recommendation plus the remaining candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking<'a> {
    /// The cheapest eligible package.
    pub recommended: &'a Package,
    /// Every other eligible package, still ascending.
    pub alternatives: Vec<&'a Package>,
}

fn by_cost_then_id(a: &&Package, b: &&Package) -> Ordering {
    a.base_cost.cmp(&b.base_cost).then_with(|| a.id.cmp(&b.id))
}

/// Rank eligible packages. Returns `None` when `eligible` is empty.
pub fn rank(mut eligible: Vec<&Package>) -> Option<Ranking<'_>> {
    eligible.sort_by(by_cost_then_id);
    let mut ordered = eligible.into_iter();
    let recommended = ordered.next()?;
    Some(Ranking {
        recommended,
        alternatives: ordered.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fze_core::{Amount, PackageId, PackageType, Tenure, ZoneName};

    fn pkg(id: &str, base: i64) -> Package {
        Package {
            id: PackageId::new(id).unwrap(),
            zone: ZoneName::new("IFZA").unwrap(),
            name: id.to_uppercase(),
            package_type: PackageType::Company,
            activities_allowed: 3,
            shareholders_allowed: 5,
            max_visas: 2,
            tenure_years: Tenure::OneYear,
            base_cost: Amount::from_major(base).unwrap(),
            per_visa_cost: None,
            list_price: Amount::from_major(base).unwrap(),
        }
    }

    fn ids(r: &Ranking<'_>) -> (String, Vec<String>) {
        (
            r.recommended.id.to_string(),
            r.alternatives.iter().map(|p| p.id.to_string()).collect(),
        )
    }

    #[test]
    fn cheapest_first() {
        let (a, b, c) = (pkg("x", 9000), pkg("y", 7000), pkg("z", 8000));
        let r = rank(vec![&a, &b, &c]).unwrap();
        assert_eq!(ids(&r), ("y".into(), vec!["z".into(), "x".into()]));
    }

    #[test]
    fn ties_broken_by_id() {
        let (a, b) = (pkg("a", 5000), pkg("b", 5000));
        assert_eq!(rank(vec![&b, &a]).unwrap().recommended.id.as_str(), "a");
        assert_eq!(rank(vec![&a, &b]).unwrap().recommended.id.as_str(), "a");
    }

    #[test]
    fn single_package_has_no_alternatives() {
        let a = pkg("only", 1000);
        let r = rank(vec![&a]).unwrap();
        assert!(r.alternatives.is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new()).is_none());
    }
}
