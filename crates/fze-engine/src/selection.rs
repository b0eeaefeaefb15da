//! # Selection
//!
//! A [`Selection`] is the caller's snapshot of what the founder picked so
//! far. It arrives loosely typed (plain strings and counts, as a wizard or
//! an HTTP body would send it) and is checked once against the catalog into
//! a [`ValidatedSelection`], which the eligibility filter and the cost
//! calculator consume.
//!
//! Validation order matters for the reported error: empty activities first,
//! then the shareholder count, entity type, tenure, zone and finally each
//! activity id.

use std::collections::HashSet;

use fze_catalog::{Activity, CatalogProvider};
use fze_core::{ActivityId, EntityType, Tenure, ZoneName};
use serde::{Deserialize, Serialize};

use crate::breakdown::EligibilityError;

/// What the founder selected, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected activity ids, in selection order.
    #[serde(default)]
    pub activities: Vec<String>,
    /// Legal structure, e.g. `"llc"` or `"branch"`.
    #[serde(default)]
    pub entity_type: String,
    /// Shareholder count; zero means not chosen yet.
    #[serde(default)]
    pub shareholders: u32,
    /// Visa count.
    #[serde(default)]
    pub visas: u32,
    /// License tenure in years.
    #[serde(default = "default_tenure_years", alias = "tenure")]
    pub tenure_years: u32,
    /// Preferred zone; absent or blank means any zone.
    #[serde(default, alias = "zone", skip_serializing_if = "Option::is_none")]
    pub requested_zone: Option<String>,
}

fn default_tenure_years() -> u32 {
    1
}

impl Selection {
    /// A selection without a zone preference.
    pub fn new<I, S>(
        activities: I,
        entity_type: impl Into<String>,
        shareholders: u32,
        visas: u32,
        tenure_years: u32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            activities: activities.into_iter().map(Into::into).collect(),
            entity_type: entity_type.into(),
            shareholders,
            visas,
            tenure_years,
            requested_zone: None,
        }
    }

    /// Restrict the selection to one zone.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.requested_zone = Some(zone.into());
        self
    }

    /// Whether the selection is still incomplete: the facade reports idle
    /// rather than an error.
    pub fn is_idle(&self) -> bool {
        self.activities.is_empty() || self.shareholders == 0
    }

    /// Check the selection against `catalog`.
    pub fn validate(
        &self,
        catalog: &dyn CatalogProvider,
    ) -> Result<ValidatedSelection, EligibilityError> {
        if self.activities.is_empty() {
            return Err(EligibilityError::empty_selection());
        }
        if self.shareholders == 0 {
            return Err(EligibilityError::invalid_input(
                "shareholder count must be at least 1",
            ));
        }
        let entity_type = EntityType::parse(&self.entity_type)
            .map_err(|e| EligibilityError::invalid_input(e.to_string()))?;
        let tenure = Tenure::from_years(self.tenure_years)
            .map_err(|e| EligibilityError::invalid_input(e.to_string()))?;
        let zone = match self.requested_zone.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                ZoneName::new(raw).map_err(|e| EligibilityError::invalid_input(e.to_string()))?,
            ),
        };

        let mut seen = HashSet::new();
        let mut activities = Vec::with_capacity(self.activities.len());
        for raw in &self.activities {
            let id = ActivityId::new(raw.as_str())
                .map_err(|e| EligibilityError::invalid_input(e.to_string()))?;
            if !seen.insert(id.clone()) {
                continue;
            }
            let activity = catalog.activity(&id).ok_or_else(|| {
                EligibilityError::invalid_input(format!("unknown activity: \"{id}\""))
            })?;
            activities.push(activity.clone());
        }

        Ok(ValidatedSelection {
            activities,
            entity_type,
            shareholders: self.shareholders,
            visas: self.visas,
            tenure,
            zone,
        })
    }
}

/// A selection checked against the catalog.
///
/// Activities are resolved to their catalog records, de-duplicated keeping
/// the first occurrence, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSelection {
    /// Resolved activities.
    pub activities: Vec<Activity>,
    /// Parsed entity type.
    pub entity_type: EntityType,
    /// Shareholder count, at least 1.
    pub shareholders: u32,
    /// Visa count.
    pub visas: u32,
    /// Supported tenure bucket.
    pub tenure: Tenure,
    /// Zone preference, if any.
    pub zone: Option<ZoneName>,
}

impl ValidatedSelection {
    /// Number of distinct selected activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakdown::ErrorCode;
    use fze_catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn valid_selection_resolves_activities_in_order() {
        let s = Selection::new(["it-consultancy", "general-trading"], "LLC", 2, 1, 3);
        let v = s.validate(&catalog()).unwrap();
        assert_eq!(v.entity_type, EntityType::Llc);
        assert_eq!(v.tenure, Tenure::ThreeYears);
        let ids: Vec<&str> = v.activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["it-consultancy", "general-trading"]);
        assert!(v.zone.is_none());
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let s = Selection::new(
            ["general-trading", "it-consultancy", "general-trading"],
            "fzco",
            1,
            0,
            1,
        );
        let v = s.validate(&catalog()).unwrap();
        assert_eq!(v.activity_count(), 2);
        assert_eq!(v.activities[0].id.as_str(), "general-trading");
    }

    #[test]
    fn empty_activities_is_empty_selection() {
        let s = Selection::new(Vec::<String>::new(), "llc", 1, 0, 1);
        assert_eq!(s.validate(&catalog()).unwrap_err().code, ErrorCode::EmptySelection);
        assert!(s.is_idle());
    }

    #[test]
    fn zero_shareholders_is_invalid_input() {
        let s = Selection::new(["it-consultancy"], "llc", 0, 0, 1);
        assert_eq!(s.validate(&catalog()).unwrap_err().code, ErrorCode::InvalidInput);
        assert!(s.is_idle());
    }

    #[test]
    fn unknown_entity_type_is_invalid_input() {
        let s = Selection::new(["it-consultancy"], "trust", 1, 0, 1);
        let err = s.validate(&catalog()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("trust"));
    }

    #[test]
    fn unsupported_tenure_is_invalid_input() {
        let s = Selection::new(["it-consultancy"], "llc", 1, 0, 2);
        let err = s.validate(&catalog()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("2 years"));
    }

    #[test]
    fn unknown_activity_is_invalid_input() {
        let s = Selection::new(["it-consultancy", "space-mining"], "llc", 1, 0, 1);
        let err = s.validate(&catalog()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("space-mining"));
    }

    #[test]
    fn blank_zone_means_any_zone() {
        let s = Selection::new(["it-consultancy"], "llc", 1, 0, 1).with_zone("  ");
        assert!(s.validate(&catalog()).unwrap().zone.is_none());
    }

    #[test]
    fn deserializes_with_aliases_and_defaults() {
        let s: Selection = serde_json::from_str(
            r#"{"activities":["it-consultancy"],"entity_type":"fze","shareholders":1,"zone":"rakez"}"#,
        )
        .unwrap();
        assert_eq!(s.tenure_years, 1);
        assert_eq!(s.visas, 0);
        assert_eq!(s.requested_zone.as_deref(), Some("rakez"));
    }
}
