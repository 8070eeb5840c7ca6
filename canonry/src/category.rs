//! The fixed category table of the canon.
//!
//! Every canon lives under one root directory with the same shape: two
//! required core documents plus four directories of documents. Each category
//! knows its loading strategy, the bucket its documents land in, and its
//! location relative to the root. The table is fixed; it is not configurable
//! at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named group of canon content with a fixed location and loading strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Foundational building-block definitions (`canon/core/primitives.toml`).
    Primitives,
    /// Composite type definitions (`canon/core/types.toml`).
    Types,
    /// Data structure definitions (`canon/core/schemas/`).
    Schemas,
    /// Interface contract definitions (`canon/core/contracts/`).
    Contracts,
    /// Scripture rail configuration (`canon/core/bible/`).
    Bible,
    /// Mathematical constants (`canon/constants/`).
    Constants,
}

/// The key under which a category's documents are stored in a load report.
///
/// The two single-file categories share the `Core` bucket; each directory
/// category owns the bucket of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Core,
    Schemas,
    Contracts,
    Bible,
    Constants,
}

/// Whether a category is backed by one required file or a directory of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// One required `.toml` file at a fixed relative path.
    SingleFile,
    /// Every `.toml` file directly inside a fixed relative directory.
    Directory,
}

impl Category {
    /// All categories in load order.
    pub const ALL: [Category; 6] = [
        Category::Primitives,
        Category::Types,
        Category::Schemas,
        Category::Contracts,
        Category::Bible,
        Category::Constants,
    ];

    /// Loading strategy for this category.
    pub fn kind(self) -> CategoryKind {
        match self {
            Self::Primitives | Self::Types => CategoryKind::SingleFile,
            Self::Schemas | Self::Contracts | Self::Bible | Self::Constants => {
                CategoryKind::Directory
            }
        }
    }

    /// The bucket this category's documents are stored under.
    pub fn bucket(self) -> Bucket {
        match self {
            Self::Primitives | Self::Types => Bucket::Core,
            Self::Schemas => Bucket::Schemas,
            Self::Contracts => Bucket::Contracts,
            Self::Bible => Bucket::Bible,
            Self::Constants => Bucket::Constants,
        }
    }

    /// Location of this category relative to the canon root.
    ///
    /// A file path for single-file categories, a directory path otherwise.
    pub fn relative_path(self) -> &'static str {
        match self {
            Self::Primitives => "canon/core/primitives.toml",
            Self::Types => "canon/core/types.toml",
            Self::Schemas => "canon/core/schemas",
            Self::Contracts => "canon/core/contracts",
            Self::Bible => "canon/core/bible",
            Self::Constants => "canon/constants",
        }
    }

    /// Lowercase display name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primitives => "primitives",
            Self::Types => "types",
            Self::Schemas => "schemas",
            Self::Contracts => "contracts",
            Self::Bible => "bible",
            Self::Constants => "constants",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Bucket {
    /// Lowercase display name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Schemas => "schemas",
            Self::Contracts => "contracts",
            Self::Bible => "bible",
            Self::Constants => "constants",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
