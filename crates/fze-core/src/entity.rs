//! # Entity Types and Package Types
//!
//! An [`EntityType`] is the legal structure a founder wants to form. A
//! [`PackageType`] is the class of entity a package is sold for. The
//! compatibility table between the two lives here, in one place, so the
//! eligibility filter and the catalog loader can never disagree about it:
//!
//! | Package type    | Accepts                 |
//! |-----------------|-------------------------|
//! | `company`       | `llc`, `fze`, `fzco`    |
//! | `establishment` | `fze`                   |
//! | `branch`        | `branch`                |
//! | `freelance`     | `freelance`             |

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The legal structure of the company being formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Free-zone limited liability company.
    Llc,
    /// Free-zone establishment (single shareholder).
    Fze,
    /// Free-zone company (multiple shareholders).
    Fzco,
    /// Branch of an existing foreign or local company.
    Branch,
    /// Freelance permit for an individual.
    Freelance,
}

impl EntityType {
    /// Parse from user input, case-insensitively, accepting common aliases.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "llc" | "fz-llc" | "fzllc" | "fz_llc" => Ok(Self::Llc),
            "fze" => Ok(Self::Fze),
            "fzco" | "fz-co" => Ok(Self::Fzco),
            "branch" | "branch-office" | "branch_office" => Ok(Self::Branch),
            "freelance" | "freelancer" => Ok(Self::Freelance),
            _ => Err(ValidationError::UnknownEntityType(s.to_string())),
        }
    }

    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Llc => "llc",
            Self::Fze => "fze",
            Self::Fzco => "fzco",
            Self::Branch => "branch",
            Self::Freelance => "freelance",
        }
    }

    /// All supported entity types.
    pub fn all() -> &'static [EntityType] {
        &[
            Self::Llc,
            Self::Fze,
            Self::Fzco,
            Self::Branch,
            Self::Freelance,
        ]
    }
}

impl std::str::FromStr for EntityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The class of entity a package is sold for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    /// General company package (LLC / FZE / FZCO).
    Company,
    /// Single-owner establishment package.
    Establishment,
    /// Branch registration package.
    Branch,
    /// Freelance permit package.
    Freelance,
}

impl PackageType {
    /// Parse from catalog input, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "company" => Ok(Self::Company),
            "establishment" => Ok(Self::Establishment),
            "branch" => Ok(Self::Branch),
            "freelance" => Ok(Self::Freelance),
            _ => Err(ValidationError::UnknownPackageType(s.to_string())),
        }
    }

    /// Canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Establishment => "establishment",
            Self::Branch => "branch",
            Self::Freelance => "freelance",
        }
    }

    /// Whether a package of this type can be used to form `entity`.
    pub fn accepts(&self, entity: EntityType) -> bool {
        match self {
            Self::Company => matches!(
                entity,
                EntityType::Llc | EntityType::Fze | EntityType::Fzco
            ),
            Self::Establishment => entity == EntityType::Fze,
            Self::Branch => entity == EntityType::Branch,
            Self::Freelance => entity == EntityType::Freelance,
        }
    }

    /// All package types.
    pub fn all() -> &'static [PackageType] {
        &[
            Self::Company,
            Self::Establishment,
            Self::Branch,
            Self::Freelance,
        ]
    }
}

impl std::str::FromStr for PackageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
