//! Canon loading: single files, directory batches, and the aggregate pass.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::category::{Category, CategoryKind};
use crate::document::Document;
use crate::error::{CanonError, LoadError, Result};
use crate::report::{DirectoryLoad, LoadReport};

/// Loads canon documents from a directory tree rooted at a fixed path.
///
/// The root is plain instance state: construct a loader per root, no shared
/// configuration anywhere. The root is stored as given with no existence
/// check; problems surface at load time. An empty root means "unset", and
/// `load_all` reports it instead of touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct CanonLoader {
    root: PathBuf,
}

impl CanonLoader {
    /// Create a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root path. Empty if unset.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load and parse a single TOML file into a [`Document`].
    ///
    /// The path is used as given; it is not resolved against the root.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the path is not an existing file, `Read` if the
    /// file cannot be read, and `Parse` if the content is not valid TOML.
    pub fn load_file(&self, path: &Path) -> Result<Document> {
        if !path.is_file() {
            return Err(LoadError::not_found(path));
        }

        let contents = fs::read_to_string(path).map_err(|source| LoadError::read(path, source))?;
        let data: toml::Table =
            toml::from_str(&contents).map_err(|source| LoadError::parse(path, source))?;

        trace!("Loaded {}", path.display());
        Ok(Document::new(path, data))
    }

    /// Load every `.toml` file directly inside `dir`, in file-name order.
    ///
    /// Does not recurse. Loading stops at the first file that fails, but the
    /// documents loaded before it are kept in the returned [`DirectoryLoad`]
    /// alongside that one error. A directory with zero `.toml` files is a
    /// complete, empty load; a directory that cannot be enumerated is a
    /// `DirRead` error with nothing attempted.
    pub fn load_directory(&self, dir: &Path) -> DirectoryLoad {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                return DirectoryLoad {
                    documents: Vec::new(),
                    error: Some(LoadError::dir_read(dir, source)),
                }
            }
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && path.extension() == Some(OsStr::new("toml")) {
                        paths.push(path);
                    }
                }
                Err(source) => {
                    return DirectoryLoad {
                        documents: Vec::new(),
                        error: Some(LoadError::dir_read(dir, source)),
                    }
                }
            }
        }
        // Same parent for every path, so this is file-name order.
        paths.sort();

        debug!("Found {} TOML files in {}", paths.len(), dir.display());

        let mut documents = Vec::new();
        for path in paths {
            match self.load_file(&path) {
                Ok(document) => documents.push(document),
                Err(error) => {
                    return DirectoryLoad {
                        documents,
                        error: Some(error),
                    }
                }
            }
        }

        DirectoryLoad {
            documents,
            error: None,
        }
    }

    /// Load the primitives document (`canon/core/primitives.toml`).
    pub fn load_primitives(&self) -> Result<Document> {
        self.load_file(&self.category_path(Category::Primitives))
    }

    /// Load the types document (`canon/core/types.toml`).
    pub fn load_types(&self) -> Result<Document> {
        self.load_file(&self.category_path(Category::Types))
    }

    /// Load every schema document (`canon/core/schemas/*.toml`).
    pub fn load_schemas(&self) -> DirectoryLoad {
        self.load_directory(&self.category_path(Category::Schemas))
    }

    /// Load every contract document (`canon/core/contracts/*.toml`).
    pub fn load_contracts(&self) -> DirectoryLoad {
        self.load_directory(&self.category_path(Category::Contracts))
    }

    /// Load every bible rail document (`canon/core/bible/*.toml`).
    pub fn load_bible(&self) -> DirectoryLoad {
        self.load_directory(&self.category_path(Category::Bible))
    }

    /// Load every constants document (`canon/constants/*.toml`).
    pub fn load_constants(&self) -> DirectoryLoad {
        self.load_directory(&self.category_path(Category::Constants))
    }

    /// Load every category of the canon and aggregate the outcomes.
    ///
    /// Never fails as a call: every error is collected into the returned
    /// [`LoadReport`] and the remaining categories are still attempted. The
    /// one exception is an unset root, which is recorded and returned before
    /// any category is tried. A directory category that partially loaded
    /// contributes only its error here; its partial documents are visible
    /// through the individual `load_*` entry points instead.
    pub fn load_all(&self) -> LoadReport {
        let mut report = LoadReport::new();

        if self.root.as_os_str().is_empty() {
            warn!("Canon root not set, nothing loaded");
            report.record_error(CanonError::RootNotSet);
            return report;
        }

        debug!("Loading canon from {}", self.root.display());

        for category in Category::ALL {
            let path = self.category_path(category);
            match category.kind() {
                CategoryKind::SingleFile => match self.load_file(&path) {
                    Ok(document) => report.record_document(category, document),
                    Err(source) => {
                        warn!("Failed to load {}: {}", category, source);
                        report.record_error(CanonError::Category { category, source });
                    }
                },
                CategoryKind::Directory => match self.load_directory(&path).into_result() {
                    Ok(documents) => report.record_directory(category, documents),
                    Err(source) => {
                        warn!("Failed to load {}: {}", category, source);
                        report.record_error(CanonError::Category { category, source });
                    }
                },
            }
        }

        debug!(
            "Canon load complete: {} documents, {} errors",
            report.document_count(),
            report.errors.len()
        );

        report
    }

    /// Resolve a category's fixed relative path against the root.
    fn category_path(&self, category: Category) -> PathBuf {
        self.root.join(category.relative_path())
    }
}
