//! Loaded document representation and key extraction.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One successfully loaded TOML document from the canon.
///
/// The parsed tree is carried as opaque data; nothing beyond its top-level
/// keys is ever interpreted. A document is immutable once constructed, and
/// `keys` is always exactly the sorted set of the tree's direct keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    name: String,
    path: PathBuf,
    data: toml::Table,
    keys: Vec<String>,
}

impl Document {
    /// Create a document from a parsed table, extracting its top-level keys.
    pub fn new(path: impl Into<PathBuf>, data: toml::Table) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let keys = extract_keys(&data);
        Self {
            name,
            path,
            data,
            keys,
        }
    }

    /// Base file name (e.g. `"primitives.toml"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed TOML tree.
    pub fn data(&self) -> &toml::Table {
        &self.data
    }

    /// Top-level key names, sorted ascending, no duplicates.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Return the top-level keys of a parsed TOML table, sorted ascending.
///
/// Sorting is byte-wise string comparison so the same table always yields
/// the same order. An empty table yields an empty vec.
pub fn extract_keys(data: &toml::Table) -> Vec<String> {
    let mut keys: Vec<String> = data.keys().cloned().collect();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(input: &str) -> toml::Table {
        toml::from_str(input).unwrap()
    }

    #[test]
    fn test_extract_keys_sorted() {
        let data = table("[zeta]\nx = 1\n\n[alpha]\ny = 2\n\n[mid]\nz = 3\n");
        assert_eq!(extract_keys(&data), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_extract_keys_empty_table() {
        let data = toml::Table::new();
        assert!(extract_keys(&data).is_empty());
    }

    #[test]
    fn test_extract_keys_includes_scalar_keys() {
        let data = table("title = \"canon\"\n\n[section]\nvalue = 1\n");
        assert_eq!(extract_keys(&data), vec!["section", "title"]);
    }

    #[test]
    fn test_extract_keys_byte_wise_order() {
        // Uppercase sorts before lowercase under byte-wise comparison.
        let data = table("[alpha]\n\n[Zulu]\n");
        assert_eq!(extract_keys(&data), vec!["Zulu", "alpha"]);
    }

    #[test]
    fn test_document_construction() {
        let data = table("[beta]\nv = 1\n\n[alpha]\nv = 2\n");
        let doc = Document::new("canon/core/primitives.toml", data);

        assert_eq!(doc.name(), "primitives.toml");
        assert_eq!(doc.path(), Path::new("canon/core/primitives.toml"));
        assert_eq!(doc.keys(), ["alpha", "beta"]);
        assert!(doc.data().contains_key("alpha"));
    }

    #[test]
    fn test_document_serializes_to_json() {
        let doc = Document::new("types.toml", table("[gamma]\nkind = \"composite\"\n"));
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["name"], "types.toml");
        assert_eq!(value["keys"][0], "gamma");
        assert_eq!(value["data"]["gamma"]["kind"], "composite");
    }
}
