//! # Estimate Subcommand
//!
//! Prices a selection given on the command line and prints the itemized
//! breakdown, as a table or as JSON.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use fze_engine::{CostBreakdown, Estimator, EstimateStatus, Selection};

use crate::money;

/// Arguments for the `fze estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Activity id to include; repeat for several, in selection order.
    #[arg(short, long = "activity", value_name = "ID")]
    pub activities: Vec<String>,

    /// Entity type: llc, fze, fzco, branch or freelance.
    #[arg(long, default_value = "llc")]
    pub entity_type: String,

    /// Number of shareholders.
    #[arg(long, default_value_t = 1)]
    pub shareholders: u32,

    /// Number of residence visas.
    #[arg(long, default_value_t = 0)]
    pub visas: u32,

    /// License tenure in years: 1, 3 or 5.
    #[arg(long, default_value_t = 1)]
    pub tenure: u32,

    /// Restrict to one free zone.
    #[arg(long)]
    pub zone: Option<String>,

    /// Price against this package instead of the recommended one.
    #[arg(long, value_name = "ID")]
    pub package: Option<String>,

    /// Print the breakdown as JSON.
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    /// The selection these arguments describe.
    pub fn selection(&self) -> Selection {
        let selection = Selection::new(
            self.activities.iter().cloned(),
            self.entity_type.clone(),
            self.shareholders,
            self.visas,
            self.tenure,
        );
        match &self.zone {
            Some(zone) => selection.with_zone(zone.clone()),
            None => selection,
        }
    }
}

/// Exit code for an estimate outcome.
pub fn exit_code(status: EstimateStatus) -> u8 {
    match status {
        EstimateStatus::Resolved | EstimateStatus::Idle => 0,
        EstimateStatus::Ineligible | EstimateStatus::Invalid => 2,
    }
}

/// Execute the estimate subcommand.
pub fn run_estimate(args: &EstimateArgs, estimator: &Estimator) -> Result<u8> {
    let selection = args.selection();
    let breakdown = match &args.package {
        Some(id) => estimator.estimate_for_package(&selection, id),
        None => estimator.estimate(&selection),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", render_breakdown(&breakdown));
    }
    Ok(exit_code(breakdown.status))
}

/// Render a breakdown as a human-readable report.
pub fn render_breakdown(b: &CostBreakdown) -> String {
    let mut out = String::new();
    let cur = b.currency.as_str();
    let years = if b.tenure_years == 1 { "year" } else { "years" };

    let _ = writeln!(out, "Status:  {}", b.status);
    if let Some(err) = &b.eligibility_error {
        let _ = writeln!(out, "Error:   {}", err.message);
        return out;
    }
    if b.status == EstimateStatus::Idle {
        let _ = writeln!(out, "Select at least one activity and one shareholder.");
        return out;
    }
    if let Some(p) = &b.package {
        let _ = writeln!(out, "Package: {} ({}, {})", p.name, p.id, p.zone);
    }
    let _ = writeln!(out, "Tenure:  {} {years}", b.tenure_years);
    let _ = writeln!(out);

    for (label, amount) in [
        ("Base license fee", b.base_license_fee),
        ("Extra activities", b.activity_extra_cost),
        ("Shareholder fee", b.shareholder_fee),
        ("Visa fee", b.visa_fee),
    ] {
        let _ = writeln!(out, "  {label:<20} {:>20}", money(cur, amount));
    }
    let _ = writeln!(out, "  {:<20} {:>20}", "Total", money(cur, b.total_cost));

    let _ = writeln!(out);
    let _ = writeln!(out, "Activities (package includes {}):", b.package_activity_limit);
    for line in &b.activity_lines {
        let charge = if line.is_extra {
            format!("extra  {}", money(cur, line.charged))
        } else {
            "included".to_string()
        };
        let _ = writeln!(out, "  {:<24} {:<32} {charge}", line.activity_id.as_str(), line.name);
    }
    if !b.is_within_limit {
        let _ = writeln!(
            out,
            "WARNING: {} activities selected, package includes {}; extras are surcharged.",
            b.activity_lines.len(),
            b.package_activity_limit
        );
    }

    if !b.alternatives.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Alternatives:");
        for alt in &b.alternatives {
            let _ = writeln!(
                out,
                "  {:<24} {:<12} list {}",
                alt.id.as_str(),
                alt.zone.as_str(),
                money(cur, alt.list_price)
            );
        }
    }
    out
}
