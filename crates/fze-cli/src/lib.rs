//! # fze-cli: CLI Tool for the Formation Estimator
//!
//! Provides the `fze` command-line interface.
//!
//! ## Subcommands
//!
//! - `fze estimate`: price a selection, recommending a package or against
//!   a chosen one.
//! - `fze catalog`: list packages, activities and visa types; validate a
//!   catalog file; print the catalog digest.
//!
//! ```bash
//! fze estimate --activity it-consultancy --entity-type llc --shareholders 2 --visas 1 --tenure 3
//! fze --catalog catalog.yaml catalog packages --zone IFZA
//! fze catalog validate catalog.yaml
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning                                             |
//! |------|-----------------------------------------------------|
//! | 0    | Success (estimate resolved or idle)                 |
//! | 1    | Runtime error, or a catalog file failed validation  |
//! | 2    | Estimate ineligible or invalid                      |

pub mod catalog;
pub mod estimate;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use fze_catalog::Catalog;
use fze_core::Amount;
use fze_engine::{Estimator, FeeSchedule};

/// Load the catalog file at `path`, or the built-in catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => {
            Catalog::load(p).with_context(|| format!("failed to load catalog {}", p.display()))
        }
        None => {
            tracing::debug!("using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

/// Build an estimator from an optional catalog file and fee schedule file.
pub fn load_estimator(catalog: Option<&Path>, config: Option<&Path>) -> Result<Estimator> {
    let catalog = load_catalog(catalog)?;
    let schedule = FeeSchedule::resolve(config).context("failed to load fee schedule")?;
    tracing::info!(
        packages = catalog.package_count(),
        activities = catalog.activity_count(),
        currency = %schedule.currency,
        "estimator ready"
    );
    Ok(Estimator::new(Arc::new(catalog), schedule))
}

/// Render an amount with its currency: `AED 12,500.00`.
pub fn money(currency: &str, amount: Amount) -> String {
    format!("{currency} {}", amount.to_grouped_string())
}
