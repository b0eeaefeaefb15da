//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the identifiers that flow through the
//! estimator. Each identifier is a distinct type: you cannot pass an
//! [`ActivityId`] where a [`PackageId`] is expected.
//!
//! ## Validation
//!
//! All identifiers are string-based and validated to be non-empty at
//! construction time. Deserialization goes through the same constructor, so
//! a catalog file cannot smuggle in an empty identifier.
//!
//! [`PackageId`] is totally ordered; the package ranker relies on that order
//! to break ties between packages with identical base cost.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $err:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create the identifier, validating non-emptiness.
            ///
            /// Surrounding whitespace is trimmed.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err($err);
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Access the identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a business activity (or service) in the catalog,
    /// e.g. `"it-consultancy"`.
    ActivityId,
    ValidationError::InvalidActivityId
);

string_id!(
    /// Identifier of a formation package, e.g. `"ifza-starter-1"`.
    PackageId,
    ValidationError::InvalidPackageId
);

string_id!(
    /// Identifier of a residence visa type, e.g. `"investor"`.
    VisaTypeId,
    ValidationError::InvalidVisaTypeId
);

/// Name of a free zone offering its own catalog of packages (e.g. "IFZA").
///
/// Zone names are compared case-insensitively: a selection asking for
/// `"ifza"` matches packages owned by `"IFZA"`. The original spelling is
/// preserved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneName(String);

impl ZoneName {
    /// Create a zone name, validating non-emptiness. Whitespace is trimmed.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidZoneName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the zone name as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw zone name.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl PartialEq for ZoneName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ZoneName {}

impl std::hash::Hash for ZoneName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl PartialOrd for ZoneName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZoneName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .to_ascii_lowercase()
            .cmp(&other.0.to_ascii_lowercase())
    }
}

impl TryFrom<String> for ZoneName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoneName> for String {
    fn from(zone: ZoneName) -> Self {
        zone.0
    }
}

impl std::fmt::Display for ZoneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
