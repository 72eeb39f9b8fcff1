//! Template data types.
//!
//! A [`Template`] is a named unit of distribution: a description document plus
//! one [`ProviderSubtree`] per provider directory found on disk. Every valid
//! template carries a `default` subtree.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LauError, Result};
use crate::registry::provider::ProviderKey;

/// Identifier of a template: `name` or `category/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId {
    /// Category directory, if the template is not at the corpus root.
    pub category: Option<String>,
    /// Template directory name.
    pub name: String,
}

impl TemplateId {
    /// Create an identifier for a template at the corpus root.
    pub fn bare(name: &str) -> Self {
        Self {
            category: None,
            name: name.to_string(),
        }
    }

    /// Create a category-qualified identifier.
    pub fn qualified(category: &str, name: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            name: name.to_string(),
        }
    }

    /// Parse user input into an identifier.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |message: &str| LauError::InvalidIdentifier {
            identifier: input.to_string(),
            message: message.to_string(),
        };

        let trimmed = input.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(invalid("identifier is empty"));
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        for segment in &segments {
            if segment.is_empty() || *segment == "." || *segment == ".." {
                return Err(invalid("segments must be non-empty directory names"));
            }
            if segment.contains('\\') {
                return Err(invalid("backslashes are not allowed"));
            }
        }

        match segments.as_slice() {
            [name] => Ok(Self::bare(name)),
            [category, name] => Ok(Self::qualified(category, name)),
            _ => Err(invalid("expected 'name' or 'category/name'")),
        }
    }

    /// Whether the identifier carries a category.
    pub fn is_qualified(&self) -> bool {
        self.category.is_some()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{}/{}", category, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl Serialize for TemplateId {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One file in a provider subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the subtree root (and to the destination root).
    pub relative: PathBuf,
    /// Absolute path of the content in the corpus.
    pub source: PathBuf,
}

/// The files a template ships for one provider.
#[derive(Debug, Clone)]
pub struct ProviderSubtree {
    key: ProviderKey,
    root: PathBuf,
    files: Vec<FileEntry>,
}

impl ProviderSubtree {
    /// Build a subtree from explicit entries.
    ///
    /// Entries are sorted by relative path and duplicates are dropped, keeping
    /// the first. Returns `None` for an empty entry list: an empty subtree is
    /// the same as an absent one.
    pub fn from_entries(key: ProviderKey, root: &Path, entries: Vec<FileEntry>) -> Option<Self> {
        let mut files: Vec<FileEntry> = Vec::with_capacity(entries.len());
        let mut seen = BTreeSet::new();
        for entry in entries {
            if seen.insert(entry.relative.clone()) {
                files.push(entry);
            }
        }
        if files.is_empty() {
            return None;
        }
        files.sort_by(|a, b| a.relative.cmp(&b.relative));

        Some(Self {
            key,
            root: root.to_path_buf(),
            files,
        })
    }

    /// Scan a provider directory on disk.
    ///
    /// Regular files are collected recursively, hidden files included.
    /// Symlinks are not followed. Returns `None` when no files are found.
    pub fn scan(key: ProviderKey, dir: &Path) -> Result<Option<Self>> {
        let mut entries = Vec::new();
        collect_files(dir, Path::new(""), &mut entries)?;
        Ok(Self::from_entries(key, dir, entries))
    }

    /// The provider this subtree belongs to.
    pub fn key(&self) -> &ProviderKey {
        &self.key
    }

    /// Directory the subtree was scanned from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files in relative-path order.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }
}

fn collect_files(dir: &Path, prefix: &Path, out: &mut Vec<FileEntry>) -> Result<()> {
    let mut children: Vec<_> = fs::read_dir(dir)
        .map_err(|e| LauError::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| LauError::io(dir, e))?;
    children.sort_by_key(|entry| entry.file_name());

    for entry in children {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| LauError::io(&path, e))?;
        let relative = prefix.join(entry.file_name());

        if file_type.is_dir() {
            collect_files(&path, &relative, out)?;
        } else if file_type.is_file() {
            out.push(FileEntry {
                relative,
                source: path,
            });
        } else {
            tracing::warn!("Skipping non-regular file in template: {}", path.display());
        }
    }

    Ok(())
}

/// A template in the corpus.
#[derive(Debug, Clone)]
pub struct Template {
    /// Unique identifier.
    pub id: TemplateId,
    /// Summary taken from the description document.
    pub description: String,
    /// Template directory.
    pub root: PathBuf,
    providers: BTreeMap<ProviderKey, ProviderSubtree>,
}

impl Template {
    /// Assemble a template from its parts.
    ///
    /// No validation happens here; the registry rejects templates without a
    /// `default` subtree before handing them out.
    pub fn new(
        id: TemplateId,
        description: impl Into<String>,
        root: impl Into<PathBuf>,
        subtrees: Vec<ProviderSubtree>,
    ) -> Self {
        let providers = subtrees
            .into_iter()
            .map(|subtree| (subtree.key.clone(), subtree))
            .collect();

        Self {
            id,
            description: description.into(),
            root: root.into(),
            providers,
        }
    }

    /// Providers physically present, in name order.
    pub fn providers(&self) -> BTreeSet<ProviderKey> {
        self.providers.keys().cloned().collect()
    }

    /// Subtree for a provider, if present.
    pub fn subtree(&self, key: &ProviderKey) -> Option<&ProviderSubtree> {
        self.providers.get(key)
    }

    /// All subtrees, in provider name order.
    pub fn subtrees(&self) -> impl Iterator<Item = &ProviderSubtree> {
        self.providers.values()
    }

    /// Whether the mandatory `default` subtree is present.
    pub fn has_default(&self) -> bool {
        self.providers.contains_key(&ProviderKey::Default)
    }
}

/// Extract a one-line description from a README document.
///
/// Uses the first non-empty line that is not a heading; falls back to the
/// text of the first heading, then to an empty string.
pub fn describe(readme: &str) -> String {
    let mut first_heading = None;

    for line in readme.lines().map(str::trim) {
        if line.is_empty() || line.starts_with("<!--") {
            continue;
        }
        if line.starts_with('#') {
            if first_heading.is_none() {
                first_heading = Some(line.trim_start_matches('#').trim().to_string());
            }
            continue;
        }
        return line.to_string();
    }

    first_heading.unwrap_or_default()
}
