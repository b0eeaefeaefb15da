//! # Catalog Subcommand
//!
//! Lists catalog contents, validates catalog files and prints the catalog
//! digest.
//!
//! `fze catalog validate FILE` checks a file on its own; the other
//! subcommands read the catalog selected with `--catalog` (or the built-in
//! one).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};
use fze_catalog::{Catalog, CatalogProvider};
use fze_core::ZoneName;

use crate::load_catalog;

/// Arguments for the `fze catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog operations.
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List packages, optionally for one zone.
    Packages {
        /// Zone name (case-insensitive).
        #[arg(long)]
        zone: Option<String>,
    },
    /// List activities, optionally for one category.
    Activities {
        /// Category id.
        #[arg(long)]
        category: Option<String>,
    },
    /// List visa types.
    Visas,
    /// Validate a catalog file.
    Validate {
        /// YAML or JSON catalog file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Print the SHA-256 digest of the catalog.
    Digest,
}

/// Execute the catalog subcommand.
///
/// Returns exit code: 0 on success, 1 when a validated file is rejected.
pub fn run_catalog(args: &CatalogArgs, catalog_path: Option<&Path>) -> Result<u8> {
    if let CatalogCommand::Validate { path } = &args.command {
        return Ok(validate_file(path));
    }

    let catalog = load_catalog(catalog_path)?;
    let output = match &args.command {
        CatalogCommand::Packages { zone } => {
            let zone = zone.as_deref().and_then(|z| ZoneName::new(z).ok());
            render_packages(&catalog, zone.as_ref())
        }
        CatalogCommand::Activities { category } => render_activities(&catalog, category.as_deref()),
        CatalogCommand::Visas => render_visas(&catalog),
        CatalogCommand::Digest => format!("{}\n", catalog.digest()?),
        CatalogCommand::Validate { .. } => String::new(),
    };
    print!("{output}");
    Ok(0)
}

fn validate_file(path: &Path) -> u8 {
    match Catalog::load(path).and_then(|c| c.digest().map(|d| (c, d))) {
        Ok((catalog, digest)) => {
            println!(
                "OK: {} ({} packages, {} activities, {} visa types)",
                path.display(),
                catalog.package_count(),
                catalog.activity_count(),
                catalog.visa_types().len()
            );
            println!("digest: {digest}");
            0
        }
        Err(e) => {
            println!("FAIL: {e}");
            1
        }
    }
}

/// Render the package table.
pub fn render_packages(catalog: &Catalog, zone: Option<&ZoneName>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:<10} {:<14} {:>5} {:>5} {:>5} {:>16}",
        "ID", "ZONE", "TYPE", "ACTS", "SHRS", "VISAS", "BASE COST"
    );
    for p in catalog.packages(zone) {
        let _ = writeln!(
            out,
            "{:<20} {:<10} {:<14} {:>5} {:>5} {:>5} {:>16}",
            p.id.as_str(),
            p.zone.as_str(),
            p.package_type.as_str(),
            p.activities_allowed,
            p.shareholders_allowed,
            p.max_visas,
            p.base_cost.to_grouped_string()
        );
    }
    out
}

/// Render the activity table.
pub fn render_activities(catalog: &Catalog, category: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<14} {:>12} {:>12}  {}",
        "ID", "CATEGORY", "STANDARD", "PREMIUM", "NAME"
    );
    for a in catalog.activities(category) {
        let _ = writeln!(
            out,
            "{:<24} {:<14} {:>12} {:>12}  {}",
            a.id.as_str(),
            a.category,
            a.standard_price.to_grouped_string(),
            a.premium_price.to_grouped_string(),
            a.name
        );
    }
    out
}

/// Render the visa type list.
pub fn render_visas(catalog: &Catalog) -> String {
    let mut out = String::new();
    for v in catalog.visa_types() {
        let _ = writeln!(
            out,
            "{:<12} {:<18} {:>14}  {}",
            v.id.as_str(),
            v.name,
            v.price.to_grouped_string(),
            v.processing_time
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packages_filtered_by_zone() {
        let c = Catalog::builtin();
        let zone = ZoneName::new("rakez").unwrap();
        let table = render_packages(&c, Some(&zone));
        assert!(table.contains("rakez-fze"));
        assert!(!table.contains("ifza-"));
        assert!(table.starts_with("ID"));
    }

    #[test]
    fn activities_filtered_by_category() {
        let table = render_activities(&Catalog::builtin(), Some("trading"));
        assert!(table.contains("general-trading"));
        assert!(!table.contains("it-consultancy"));
    }

    #[test]
    fn visas_listed() {
        let list = render_visas(&Catalog::builtin());
        assert_eq!(list.lines().count(), 3);
        assert!(list.contains("4,750.00"));
    }

    #[test]
    fn validate_accepts_good_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"packages":[{"id":"p","zone":"Z","name":"P","package_type":"branch","activities_allowed":1,"shareholders_allowed":1,"max_visas":1}]}"#,
        )
        .unwrap();
        let args = CatalogArgs {
            command: CatalogCommand::Validate { path },
        };
        assert_eq!(run_catalog(&args, None).unwrap(), 0);
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(
            &path,
            "activities:\n  - { id: x, name: X, category: c, standard_price: 1, premium_price: 1 }\n  - { id: x, name: Y, category: c, standard_price: 1, premium_price: 1 }\n",
        )
        .unwrap();
        let args = CatalogArgs {
            command: CatalogCommand::Validate { path },
        };
        assert_eq!(run_catalog(&args, None).unwrap(), 1);
    }

    #[test]
    fn listing_with_missing_catalog_is_an_error() {
        let args = CatalogArgs {
            command: CatalogCommand::Digest,
        };
        assert!(run_catalog(&args, Some(Path::new("/nonexistent/catalog.yaml"))).is_err());
    }
}
