//! End-to-end tests for whole-canon loading
//!
//! Builds fixture canons in temporary directories and verifies aggregation
//! behavior: determinism, the unset-root short circuit, partial directory
//! results, independent category failure, and the full success path.

use std::fs;
use std::path::Path;

use canonry::{Bucket, CanonError, CanonLoader, Category, LoadError};
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, contents).expect("Failed to write fixture file");
}

/// Build a complete, well-formed canon under a temporary root.
fn full_canon() -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    let base = root.path();

    write_file(
        &base.join("canon/core/primitives.toml"),
        "[alpha]\nvalue = 1\n\n[beta]\nvalue = 2\n",
    );
    write_file(
        &base.join("canon/core/types.toml"),
        "[gamma]\nkind = \"composite\"\n",
    );
    write_file(
        &base.join("canon/core/schemas/node.toml"),
        "[node]\nfields = [\"id\", \"payload\"]\n",
    );
    write_file(
        &base.join("canon/core/contracts/health.toml"),
        "[health]\nprovides = \"score\"\n",
    );
    write_file(
        &base.join("canon/core/bible/rail.toml"),
        "[rail]\nbooks = 66\n",
    );
    write_file(
        &base.join("canon/constants/math.toml"),
        "[powers]\nbase = 3\n",
    );

    root
}

#[test]
fn test_full_canon_loads_cleanly() {
    let root = full_canon();
    let report = CanonLoader::new(root.path()).load_all();

    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert_eq!(report.document_count(), 6);

    assert_eq!(report.summary[&Category::Primitives], ["alpha", "beta"]);
    assert_eq!(report.summary[&Category::Types], ["gamma"]);
    assert_eq!(report.summary[&Category::Schemas], ["node.toml"]);
    assert_eq!(report.summary[&Category::Contracts], ["health.toml"]);
    assert_eq!(report.summary[&Category::Bible], ["rail.toml"]);
    assert_eq!(report.summary[&Category::Constants], ["math.toml"]);

    // The two single-file categories share the core bucket, in load order.
    let core: Vec<&str> = report.documents[&Bucket::Core]
        .iter()
        .map(|d| d.name())
        .collect();
    assert_eq!(core, ["primitives.toml", "types.toml"]);
    assert_eq!(report.documents[&Bucket::Schemas].len(), 1);
    assert_eq!(report.documents[&Bucket::Contracts].len(), 1);
    assert_eq!(report.documents[&Bucket::Bible].len(), 1);
    assert_eq!(report.documents[&Bucket::Constants].len(), 1);
}

#[test]
fn test_unset_root_short_circuits() {
    let report = CanonLoader::default().load_all();

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(matches!(report.errors[0], CanonError::RootNotSet));
    assert!(report.errors[0].category().is_none());
    assert!(report.documents.is_empty());
    assert!(report.summary.is_empty());
}

#[test]
fn test_missing_category_leaves_others_loaded() {
    let root = full_canon();
    fs::remove_dir_all(root.path().join("canon/core/schemas"))
        .expect("Failed to remove schemas dir");

    let report = CanonLoader::new(root.path()).load_all();

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].category(), Some(Category::Schemas));
    assert!(matches!(
        report.errors[0],
        CanonError::Category {
            source: LoadError::DirRead { .. },
            ..
        }
    ));

    // The failed category contributes nothing.
    assert!(!report.documents.contains_key(&Bucket::Schemas));
    assert!(!report.summary.contains_key(&Category::Schemas));

    // Every other category is untouched by the failure.
    assert_eq!(report.summary[&Category::Contracts], ["health.toml"]);
    assert_eq!(report.documents[&Bucket::Contracts].len(), 1);
    assert_eq!(report.documents[&Bucket::Core].len(), 2);
    assert_eq!(report.summary[&Category::Constants], ["math.toml"]);
}

#[test]
fn test_malformed_single_file_still_loads_the_rest() {
    let root = full_canon();
    write_file(
        &root.path().join("canon/core/primitives.toml"),
        "broken = [unclosed\n",
    );

    let report = CanonLoader::new(root.path()).load_all();

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].category(), Some(Category::Primitives));
    assert!(matches!(
        report.errors[0],
        CanonError::Category {
            source: LoadError::Parse { .. },
            ..
        }
    ));

    // The core bucket still holds the types document.
    let core: Vec<&str> = report.documents[&Bucket::Core]
        .iter()
        .map(|d| d.name())
        .collect();
    assert_eq!(core, ["types.toml"]);
    assert!(!report.summary.contains_key(&Category::Primitives));
    assert_eq!(report.summary[&Category::Types], ["gamma"]);
}

#[test]
fn test_partial_directory_keeps_earlier_documents() {
    let root = full_canon();
    let schemas = root.path().join("canon/core/schemas");
    write_file(&schemas.join("a.toml"), "[a]\n");
    write_file(&schemas.join("b.toml"), "broken [\n");
    write_file(&schemas.join("c.toml"), "[c]\n");

    let loader = CanonLoader::new(root.path());
    let loaded = loader.load_schemas();

    // a.toml made it, b.toml failed, c.toml was never attempted.
    let names: Vec<&str> = loaded.documents.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["a.toml"]);
    let error = loaded.error.expect("expected a parse error");
    assert!(error.to_string().contains("b.toml"));

    // The aggregate pass records only the error and drops the partials.
    let report = loader.load_all();
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].category(), Some(Category::Schemas));
    assert!(!report.documents.contains_key(&Bucket::Schemas));
}

#[test]
fn test_empty_directory_category_is_valid() {
    let root = full_canon();
    let bible = root.path().join("canon/core/bible");
    fs::remove_dir_all(&bible).expect("Failed to clear bible dir");
    fs::create_dir_all(&bible).expect("Failed to recreate bible dir");

    let report = CanonLoader::new(root.path()).load_all();

    assert!(report.valid);
    assert!(report.documents.contains_key(&Bucket::Bible));
    assert!(report.documents[&Bucket::Bible].is_empty());
    assert_eq!(report.summary[&Category::Bible], Vec::<String>::new());
}

#[test]
fn test_repeated_loads_are_identical() {
    let root = full_canon();
    let schemas = root.path().join("canon/core/schemas");
    write_file(&schemas.join("zz.toml"), "[z]\n");
    write_file(&schemas.join("aa.toml"), "[a]\n");

    let loader = CanonLoader::new(root.path());
    let first = loader.load_all();
    let second = loader.load_all();

    assert_eq!(first.valid, second.valid);
    assert_eq!(first.summary, second.summary);
    assert_eq!(
        first.summary[&Category::Schemas],
        ["aa.toml", "node.toml", "zz.toml"]
    );

    let names = |report: &canonry::LoadReport, bucket: Bucket| -> Vec<String> {
        report.documents[&bucket]
            .iter()
            .map(|d| d.name().to_string())
            .collect()
    };
    for bucket in [
        Bucket::Core,
        Bucket::Schemas,
        Bucket::Contracts,
        Bucket::Bible,
        Bucket::Constants,
    ] {
        assert_eq!(names(&first, bucket), names(&second, bucket));
    }
}

#[test]
fn test_individual_loaders_resolve_against_root() {
    let root = full_canon();
    let loader = CanonLoader::new(root.path());

    let primitives = loader.load_primitives().expect("primitives should load");
    assert_eq!(primitives.keys(), ["alpha", "beta"]);

    let types = loader.load_types().expect("types should load");
    assert_eq!(types.keys(), ["gamma"]);

    assert_eq!(loader.load_contracts().documents.len(), 1);
    assert_eq!(loader.load_bible().documents.len(), 1);
    assert_eq!(loader.load_constants().documents.len(), 1);
}

#[test]
fn test_load_canon_convenience_entry_point() {
    let root = full_canon();
    let report = canonry::load_canon(root.path());
    assert!(report.valid);
    assert_eq!(report.document_count(), 6);
}
