//! Shared test catalogs.

use fze_catalog::{parse_document, Catalog, CatalogFormat};

/// Build a catalog from a YAML document.
pub(crate) fn catalog_from_yaml(yaml: &str) -> Catalog {
    let doc = parse_document(yaml, CatalogFormat::Yaml).unwrap();
    Catalog::from_document(doc).unwrap()
}

/// Activities shared by the test catalogs: `a1`..`a6` priced 1000..6000.
pub(crate) const ACTIVITIES: &str = r#"
activities:
  - { id: a1, name: Activity 1, category: consultancy, standard_price: "1000", premium_price: "1500" }
  - { id: a2, name: Activity 2, category: consultancy, standard_price: "2000", premium_price: "2500" }
  - { id: a3, name: Activity 3, category: trading, standard_price: "3000", premium_price: "3500" }
  - { id: a4, name: Activity 4, category: trading, standard_price: "4000", premium_price: "4500" }
  - { id: a5, name: Activity 5, category: media, standard_price: "5000", premium_price: "5500" }
  - { id: a6, name: Activity 6, category: media, standard_price: "6000", premium_price: "6500" }
"#;

/// Three company packages across two zones, plus one branch package.
pub(crate) fn mixed_catalog() -> Catalog {
    catalog_from_yaml(&format!(
        r#"
packages:
  - {{ id: ifza-small, zone: IFZA, name: Small, package_type: company,
      activities_allowed: 2, shareholders_allowed: 3, max_visas: 1,
      base_cost: "12000", per_visa_cost: "3000" }}
  - {{ id: ifza-large, zone: IFZA, name: Large, package_type: company,
      activities_allowed: 5, shareholders_allowed: 5, max_visas: 6,
      base_cost: "20000" }}
  - {{ id: dmcc-wide, zone: DMCC, name: Wide, package_type: company,
      activities_allowed: 3, shareholders_allowed: 50, max_visas: 2,
      base_cost: "30000", per_visa_cost: "4000" }}
  - {{ id: rakez-branch, zone: RAKEZ, name: Branch, package_type: branch,
      activities_allowed: 3, shareholders_allowed: 1, max_visas: 3,
      base_cost: "15000" }}
{ACTIVITIES}"#
    ))
}
