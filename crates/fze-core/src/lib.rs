#![deny(missing_docs)]

//! # fze-core: Foundational Types for the Formation Estimator
//!
//! This crate defines the value types every other crate in the workspace
//! depends on. It has no internal crate dependencies.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** [`ActivityId`], [`PackageId`],
//!    [`VisaTypeId`] and [`ZoneName`] are distinct types, validated non-empty
//!    at construction and at deserialization.
//!
//! 2. **Fixed-point money.** [`Amount`] counts minor units in an `i64`;
//!    multipliers are basis points. No floats in any cost path, so the same
//!    selection always prices to the same bytes.
//!
//! 3. **Closed tables.** [`Tenure`] and [`EntityType`]/[`PackageType`] are
//!    enums with exhaustive `match`: the tenure multiplier table and the
//!    entity-type compatibility table each have exactly one definition.
//!
//! 4. **Structured errors.** [`ValidationError`] via `thiserror`, no
//!    `.unwrap()` outside tests.

pub mod entity;
pub mod error;
pub mod identity;
pub mod money;
pub mod tenure;

// Re-export primary types at crate root for ergonomic imports.
pub use entity::{EntityType, PackageType};
pub use error::{FzeError, ValidationError};
pub use identity::{ActivityId, PackageId, VisaTypeId, ZoneName};
pub use money::{Amount, BPS_ONE, MINOR_UNITS};
pub use tenure::Tenure;
