//! Catalog loading from fixture files

use approx::assert_relative_eq;
use nutrisol::data::{CatalogError, FormulaCatalog, Macronutrient};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_load_json_catalog_with_mixed_keys() {
    let catalog = FormulaCatalog::from_json_path(fixture("formulas.json")).unwrap();
    assert_eq!(catalog.len(), 3);

    let ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["std-15", "fib-10", "peptide-12"]);

    // Legacy keys
    let std = catalog.get("std-15").unwrap();
    assert_eq!(std.name, "Standard 1.5");
    assert_eq!(std.laboratory.as_deref(), Some("Lab A"));
    assert_eq!(std.formula_type.as_deref(), Some("polymeric"));
    assert_eq!(std.kcal_per_ml(), Some(1.5));
    assert_eq!(std.osmolarity, Some(450.0));

    // English keys
    let fib = catalog.get("fib-10").unwrap();
    assert_relative_eq!(
        fib.grams_per_ml(Macronutrient::Fiber).unwrap(),
        0.015,
        epsilon = 1e-12
    );

    // Sparse entry
    let peptide = catalog.get("peptide-12").unwrap();
    assert_eq!(peptide.laboratory, None);
    assert_eq!(peptide.fat_g, None);
    assert_relative_eq!(peptide.kcal_per_ml().unwrap(), 1.2, epsilon = 1e-12);
}

#[test]
fn test_load_csv_catalog() {
    let catalog = FormulaCatalog::from_csv_path(fixture("formulas.csv")).unwrap();
    assert_eq!(catalog.len(), 2);

    let std = catalog.get("std-15").unwrap();
    assert_eq!(std.fiber_g, None);
    assert_eq!(std.protein_g, Some(6.0));

    let fib = catalog.get("fib-10").unwrap();
    assert_eq!(fib.fiber_g, Some(3.75));
    assert_eq!(fib.formula_type.as_deref(), Some("polymeric with fiber"));
}

#[test]
fn test_json_and_csv_agree() {
    let json = FormulaCatalog::from_json_path(fixture("formulas.json")).unwrap();
    let csv = FormulaCatalog::from_csv_path(fixture("formulas.csv")).unwrap();

    for formula in csv.iter() {
        assert_eq!(Some(formula), json.get(&formula.id));
    }
}

#[test]
fn test_missing_file() {
    let err = FormulaCatalog::from_json_path(fixture("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
