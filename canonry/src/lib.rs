//! Canon loading and validation for TOML specification documents
//!
//! This crate loads a fixed canon of TOML documents from a directory tree
//! rooted at a configurable path, parses each into an in-memory [`Document`],
//! extracts the top-level section names, and aggregates the outcomes across
//! all files into one [`LoadReport`] that distinguishes "fully succeeded"
//! from "partially or fully failed" without aborting on the first failure.
//!
//! # Features
//!
//! - **Fixed category table**: six named categories, each with a fixed
//!   location and a single-file or directory loading strategy
//! - **Aggregate reporting**: one report with a validity flag, loaded
//!   documents by bucket, every collected error, and per-category summaries
//! - **Partial directory results**: a failing directory load keeps the
//!   documents loaded before the failure
//! - **Deterministic output**: sorted top-level keys and file-name ordered
//!   directory loads, so repeated runs compare equal
//! - **Opaque content**: parsed trees are carried as data, never interpreted
//!   beyond their top-level keys
//!
//! # Canon Layout
//!
//! All locations are fixed relative to the canon root:
//!
//! - `canon/core/primitives.toml` - primitives (single file)
//! - `canon/core/types.toml` - types (single file)
//! - `canon/core/schemas/` - schemas (directory)
//! - `canon/core/contracts/` - contracts (directory)
//! - `canon/core/bible/` - bible (directory)
//! - `canon/constants/` - constants (directory)
//!
//! # Quick Start
//!
//! ```no_run
//! use canonry::CanonLoader;
//!
//! let report = CanonLoader::new("/path/to/canon").load_all();
//! if report.valid {
//!     println!("loaded {} documents", report.document_count());
//! } else {
//!     for error in &report.errors {
//!         eprintln!("{error}");
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! `load_all` never fails as a call; everything that went wrong is collected
//! in `LoadReport::errors`, each entry tagged with the category it belongs
//! to. The individual entry points (`load_primitives`, `load_schemas`, ...)
//! surface their errors directly instead, including partial results for
//! directory loads:
//!
//! ```no_run
//! use canonry::CanonLoader;
//!
//! let loader = CanonLoader::new("/path/to/canon");
//! let schemas = loader.load_schemas();
//! if let Some(error) = &schemas.error {
//!     eprintln!("stopped after {} documents: {error}", schemas.documents.len());
//! }
//! ```

use std::path::PathBuf;

pub mod category;
pub mod document;
pub mod error;
pub mod loader;
pub mod report;

pub use category::{Bucket, Category, CategoryKind};
pub use document::{extract_keys, Document};
pub use error::{CanonError, LoadError, Result};
pub use loader::CanonLoader;
pub use report::{DirectoryLoad, LoadReport};

/// Load the complete canon from `root` and aggregate the outcome.
///
/// Convenience wrapper over [`CanonLoader::new`] followed by
/// [`CanonLoader::load_all`].
///
/// # Examples
///
/// ```no_run
/// let report = canonry::load_canon("/path/to/canon");
/// println!("valid: {}", report.valid);
/// ```
pub fn load_canon(root: impl Into<PathBuf>) -> LoadReport {
    CanonLoader::new(root).load_all()
}
