//! # API Route Modules
//!
//! - `catalog`: read-only catalog listings and the catalog summary.
//! - `estimate`: cost estimates for a selection, recommended or against a
//!   chosen package.

pub mod catalog;
pub mod estimate;
