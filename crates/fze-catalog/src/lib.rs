//! # fze-catalog: Free-Zone Catalog
//!
//! Loads, validates and serves the read-only catalog the estimator prices
//! against: formation packages, business activities and visa types.
//!
//! A catalog comes from one of two places:
//!
//! - a YAML or JSON file, via [`Catalog::load`];
//! - the built-in seed, via [`Catalog::builtin`].
//!
//! Either way the result is an immutable [`Catalog`] snapshot. Consumers
//! read through the [`CatalogProvider`] trait.

pub mod catalog;
pub mod error;
pub mod parser;
pub mod seed;
pub mod types;

pub use catalog::{Catalog, CatalogProvider};
pub use error::{CatalogError, CatalogResult};
pub use parser::{load_document, parse_document, CatalogFormat, ParseFailure};
pub use types::{default_base_cost, Activity, CatalogDocument, Package, PackageRecord, VisaType};
