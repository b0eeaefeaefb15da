//! # Built-in Free-Zone Catalog
//!
//! Seed data for UAE free zones, used when no catalog file is supplied:
//!
//! - **IFZA** (International Free Zone Authority, Dubai)
//! - **DMCC** (Dubai Multi Commodities Centre)
//! - **RAKEZ** (Ras Al Khaimah Economic Zone)
//! - **SHAMS** (Sharjah Media City)
//! - **Meydan FZ** (Meydan Free Zone, Dubai)
//!
//! All prices are annual AED figures. Packages without `per_visa_cost` fall
//! back to the fee schedule's default visa fee.

use fze_core::{ActivityId, Amount, PackageId, PackageType, Tenure, VisaTypeId, ZoneName};

use crate::catalog::Catalog;
use crate::types::{Activity, Package, VisaType};

fn aed(major: i64) -> Amount {
    Amount::from_minor(major * fze_core::MINOR_UNITS)
}

// Seed literals are non-empty, so construction cannot fail; the fallback
// keeps the constructors total without unwrapping.
fn zone(name: &str) -> ZoneName {
    ZoneName::new(name).unwrap_or_else(|_| unreachable!("seed zone names are non-empty"))
}

#[allow(clippy::too_many_arguments)]
fn pkg(
    id: &str, zone_name: &str, name: &str, package_type: PackageType,
    activities: u32, shareholders: u32, visas: u32,
    base: i64, per_visa: Option<i64>, list: i64,
) -> Package {
    Package {
        id: PackageId::new(id).unwrap_or_else(|_| unreachable!("seed package ids are non-empty")),
        zone: zone(zone_name),
        name: name.to_string(),
        package_type,
        activities_allowed: activities,
        shareholders_allowed: shareholders,
        max_visas: visas,
        tenure_years: Tenure::OneYear,
        base_cost: aed(base),
        per_visa_cost: per_visa.map(aed),
        list_price: aed(list),
    }
}

#[allow(clippy::too_many_arguments)]
fn act(
    id: &str, name: &str, category: &str, standard: i64, premium: i64,
    timeline: &str, docs: &[&str], required: bool,
) -> Activity {
    Activity {
        id: ActivityId::new(id).unwrap_or_else(|_| unreachable!("seed activity ids are non-empty")),
        name: name.to_string(),
        category: category.to_string(),
        standard_price: aed(standard),
        premium_price: aed(premium),
        timeline: timeline.to_string(),
        required_documents: docs.iter().map(|s| s.to_string()).collect(),
        is_required: required,
    }
}

fn visa(id: &str, name: &str, desc: &str, price: i64, processing: &str) -> VisaType {
    VisaType {
        id: VisaTypeId::new(id).unwrap_or_else(|_| unreachable!("seed visa ids are non-empty")),
        name: name.to_string(),
        description: desc.to_string(),
        price: aed(price),
        processing_time: processing.to_string(),
    }
}

// ── Packages ────────────────────────────────────────────────────────────────

/// Seed formation packages.
pub fn seed_packages() -> Vec<Package> {
    use PackageType::*;
    vec![
        // IFZA
        pkg("ifza-freelance", "IFZA", "IFZA Freelance Permit", Freelance, 1, 1, 1, 7_900, Some(3_750), 8_500),
        pkg("ifza-starter-0", "IFZA", "IFZA Zero Visa License", Company, 3, 5, 0, 12_900, None, 12_900),
        pkg("ifza-starter-2", "IFZA", "IFZA Two Visa License", Company, 3, 5, 2, 15_900, Some(3_500), 16_900),
        // DMCC
        pkg("dmcc-flexi", "DMCC", "DMCC Flexi Desk", Company, 3, 50, 6, 35_000, Some(4_500), 38_000),
        pkg("dmcc-branch", "DMCC", "DMCC Branch Registration", Branch, 3, 1, 6, 32_000, Some(4_500), 34_500),
        // RAKEZ
        pkg("rakez-fze", "RAKEZ", "RAKEZ Establishment Starter", Establishment, 3, 1, 3, 11_500, Some(3_200), 11_500),
        pkg("rakez-company", "RAKEZ", "RAKEZ Company Package", Company, 5, 5, 3, 13_900, Some(3_200), 14_500),
        pkg("rakez-branch", "RAKEZ", "RAKEZ Branch Package", Branch, 5, 1, 3, 15_000, None, 15_000),
        // SHAMS
        pkg("shams-media", "SHAMS", "SHAMS Media License", Company, 5, 5, 6, 14_500, None, 14_500),
        pkg("shams-freelance", "SHAMS", "SHAMS Freelance Permit", Freelance, 1, 1, 1, 7_500, None, 7_500),
        // Meydan FZ
        pkg("meydan-starter", "Meydan FZ", "Meydan Starter Package", Company, 3, 50, 3, 12_500, Some(3_750), 13_250),
    ]
}

// ── Activities ──────────────────────────────────────────────────────────────

/// Seed business activities.
pub fn seed_activities() -> Vec<Activity> {
    const PASSPORT: &str = "Passport copy";
    const PHOTO: &str = "Passport photo";
    const NOC: &str = "No-objection certificate";
    vec![
        act("management-consultancy", "Management Consultancy", "consultancy", 1_000, 1_500,
            "3-5 working days", &[PASSPORT, PHOTO], false),
        act("it-consultancy", "IT Consultancy", "consultancy", 1_000, 1_500,
            "3-5 working days", &[PASSPORT, PHOTO], false),
        act("marketing-consultancy", "Marketing Consultancy", "consultancy", 1_000, 1_500,
            "3-5 working days", &[PASSPORT, PHOTO], false),
        act("general-trading", "General Trading", "trading", 3_000, 4_500,
            "5-7 working days", &[PASSPORT, PHOTO, "Business plan"], false),
        act("e-commerce", "E-Commerce Trading", "trading", 2_000, 3_000,
            "5-7 working days", &[PASSPORT, PHOTO, "Website or platform details"], false),
        act("import-export", "Import and Export", "trading", 2_500, 3_750,
            "5-7 working days", &[PASSPORT, PHOTO, "Customs registration"], false),
        act("content-creation", "Content Creation", "media", 1_500, 2_250,
            "7-10 working days", &[PASSPORT, PHOTO, "Portfolio"], false),
        act("advertising", "Advertising Services", "media", 1_500, 2_250,
            "7-10 working days", &[PASSPORT, PHOTO, "Portfolio"], false),
        act("event-management", "Event Management", "media", 2_000, 3_000,
            "7-10 working days", &[PASSPORT, PHOTO], false),
        act("software-development", "Software Development", "technology", 1_200, 1_800,
            "3-5 working days", &[PASSPORT, PHOTO], false),
        act("it-services", "IT Services and Support", "technology", 1_200, 1_800,
            "3-5 working days", &[PASSPORT, PHOTO], false),
        act("accounting", "Accounting and Bookkeeping", "professional", 2_500, 3_750,
            "10-15 working days", &[PASSPORT, PHOTO, "Professional certificate", NOC], true),
    ]
}

// ── Visa Types ──────────────────────────────────────────────────────────────

/// Seed residence visa types.
pub fn seed_visa_types() -> Vec<VisaType> {
    vec![
        visa("investor", "Investor Visa", "Two-year residence visa for shareholders", 4_750, "10-15 working days"),
        visa("employee", "Employment Visa", "Two-year residence visa for staff", 3_750, "10-15 working days"),
        visa("dependent", "Dependent Visa", "Residence visa for a spouse, child or parent", 3_200, "7-10 working days"),
    ]
}

/// Assemble the built-in catalog snapshot.
pub fn builtin_catalog() -> Catalog {
    Catalog::from_parts(seed_packages(), seed_activities(), seed_visa_types())
}
