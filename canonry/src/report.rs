//! Outcome types for canon loads.
//!
//! Two error policies meet here, and they are deliberately different:
//! a directory load stops at the first failing file but keeps what it had
//! already loaded, while the whole-canon report collects every category
//! failure and never short-circuits the remaining categories.

use std::collections::BTreeMap;

use crate::category::{Bucket, Category};
use crate::document::Document;
use crate::error::{CanonError, LoadError};

/// Outcome of a directory batch load.
#[derive(Debug, Default)]
pub struct DirectoryLoad {
    /// Documents loaded before the first failure, in file-name order.
    pub documents: Vec<Document>,
    /// The first error encountered, if any. Files after it were not attempted.
    pub error: Option<LoadError>,
}

impl DirectoryLoad {
    /// True if every matched file in the directory loaded.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a Result, dropping any partial documents on error.
    pub fn into_result(self) -> Result<Vec<Document>, LoadError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.documents),
        }
    }
}

/// Aggregated outcome of loading the whole canon.
///
/// Built fresh on every `load_all` call and handed to the caller as a plain
/// value. `valid` starts true and is flipped false by the first recorded
/// error, never back.
#[derive(Debug)]
pub struct LoadReport {
    /// True only if every category loaded without error.
    pub valid: bool,
    /// Loaded documents by bucket. A bucket key is present only if a
    /// category feeding it loaded without error; a directory category with
    /// zero matches is present with an empty vec.
    pub documents: BTreeMap<Bucket, Vec<Document>>,
    /// Every error recorded during the load, in category order.
    pub errors: Vec<CanonError>,
    /// Quick reference per category: top-level keys for single-file
    /// categories, loaded file names for directory categories.
    pub summary: BTreeMap<Category, Vec<String>>,
}

impl LoadReport {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            documents: BTreeMap::new(),
            errors: Vec::new(),
            summary: BTreeMap::new(),
        }
    }

    pub(crate) fn record_error(&mut self, error: CanonError) {
        self.valid = false;
        self.errors.push(error);
    }

    pub(crate) fn record_document(&mut self, category: Category, document: Document) {
        self.summary.insert(category, document.keys().to_vec());
        self.documents
            .entry(category.bucket())
            .or_default()
            .push(document);
    }

    pub(crate) fn record_directory(&mut self, category: Category, documents: Vec<Document>) {
        let names = documents.iter().map(|d| d.name().to_string()).collect();
        self.summary.insert(category, names);
        self.documents
            .entry(category.bucket())
            .or_default()
            .extend(documents);
    }

    /// True if any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Total number of loaded documents across all buckets.
    pub fn document_count(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }
}
