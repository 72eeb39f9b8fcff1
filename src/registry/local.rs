//! Corpus scanning.
//!
//! The corpus root holds template directories directly, or category
//! directories that each hold template directories (one level only). A
//! directory is a template when it has a description document or any
//! directory named after a known provider; otherwise it is a category.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LauError, Result};
use crate::registry::provider::ProviderKey;
use crate::registry::template::{describe, ProviderSubtree, Template, TemplateId};

/// File name of the description document every template must carry.
pub const DESCRIPTION_DOCUMENT: &str = "README.md";

/// A directory in the corpus that may hold a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: TemplateId,
    pub dir: PathBuf,
}

/// Why a template candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateWarning {
    pub id: TemplateId,
    pub dir: PathBuf,
    pub reason: String,
}

impl fmt::Display for TemplateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping template '{}': {}", self.id, self.reason)
    }
}

/// Enumerate template candidates under a corpus root, sorted by identifier.
///
/// Only a failure to read the root itself is an error. A top-level directory
/// that cannot be read is kept as a bare candidate, so loading it reports the
/// failure as a [`TemplateWarning`] and the rest of the corpus is unaffected.
pub fn discover_candidates(corpus_root: &Path) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for (name, dir) in visible_subdirs(corpus_root)? {
        let nested = looks_like_template(&dir).and_then(|is_template| {
            if is_template {
                Ok(None)
            } else {
                visible_subdirs(&dir).map(Some)
            }
        });
        candidates.extend(classify(&name, dir, nested));
    }

    candidates.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(
        "Discovered {} template candidate(s) under {}",
        candidates.len(),
        corpus_root.display()
    );
    Ok(candidates)
}

/// Load and validate one candidate.
///
/// I/O errors while reading the candidate are folded into the warning so a
/// single unreadable template never aborts a listing.
pub fn load_candidate(candidate: &Candidate) -> std::result::Result<Template, TemplateWarning> {
    let warn = |reason: String| TemplateWarning {
        id: candidate.id.clone(),
        dir: candidate.dir.clone(),
        reason,
    };

    let readme = find_description(&candidate.dir)
        .map_err(|e| warn(e.to_string()))?
        .ok_or_else(|| warn(format!("missing {}", DESCRIPTION_DOCUMENT)))?;
    let content = fs::read(&readme)
        .map_err(|e| warn(format!("unreadable {}: {}", DESCRIPTION_DOCUMENT, e)))?;
    let description = describe(&String::from_utf8_lossy(&content));

    let mut subtrees = Vec::new();
    let dirs = visible_subdirs(&candidate.dir).map_err(|e| warn(e.to_string()))?;
    for (name, dir) in dirs {
        let key = ProviderKey::from_dir_name(&name);
        match ProviderSubtree::scan(key, &dir).map_err(|e| warn(e.to_string()))? {
            Some(subtree) => subtrees.push(subtree),
            None => tracing::debug!("Ignoring empty provider directory {}", dir.display()),
        }
    }

    let template = Template::new(candidate.id.clone(), description, &candidate.dir, subtrees);
    if !template.has_default() {
        return Err(warn("missing non-empty 'default' provider directory".to_string()));
    }

    Ok(template)
}

/// Lazy iterator over the templates of a corpus.
///
/// Candidates are enumerated up front; each template is read from disk only
/// when the iterator reaches it.
#[derive(Debug, Clone)]
pub struct Templates {
    candidates: std::vec::IntoIter<Candidate>,
}

impl Templates {
    pub(crate) fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: candidates.into_iter(),
        }
    }
}

impl Iterator for Templates {
    type Item = std::result::Result<Template, TemplateWarning>;

    fn next(&mut self) -> Option<Self::Item> {
        self.candidates.next().map(|c| load_candidate(&c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.candidates.size_hint()
    }
}

/// Candidates for one top-level directory, given the outcome of scanning it.
fn classify(
    name: &str,
    dir: PathBuf,
    nested: Result<Option<Vec<(String, PathBuf)>>>,
) -> Vec<Candidate> {
    match nested {
        Ok(Some(templates)) => templates
            .into_iter()
            .map(|(template_name, template_dir)| Candidate {
                id: TemplateId::qualified(name, &template_name),
                dir: template_dir,
            })
            .collect(),
        Ok(None) => vec![Candidate {
            id: TemplateId::bare(name),
            dir,
        }],
        Err(e) => {
            tracing::debug!("Could not scan {}: {}", dir.display(), e);
            vec![Candidate {
                id: TemplateId::bare(name),
                dir,
            }]
        }
    }
}

fn looks_like_template(dir: &Path) -> Result<bool> {
    if find_description(dir)?.is_some() {
        return Ok(true);
    }
    Ok(visible_subdirs(dir)?
        .iter()
        .any(|(name, _)| ProviderKey::from_dir_name(name).is_known()))
}

fn find_description(dir: &Path) -> Result<Option<PathBuf>> {
    for entry in fs::read_dir(dir).map_err(|e| LauError::io(dir, e))? {
        let entry = entry.map_err(|e| LauError::io(dir, e))?;
        let is_named = entry
            .file_name()
            .to_str()
            .map(|n| n.eq_ignore_ascii_case(DESCRIPTION_DOCUMENT))
            .unwrap_or(false);
        if is_named && entry.path().is_file() {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}

/// Non-hidden subdirectories with UTF-8 names, sorted by name.
fn visible_subdirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| LauError::io(dir, e))? {
        let entry = entry.map_err(|e| LauError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| LauError::io(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!("Skipping non UTF-8 directory {}", entry.path().display());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        dirs.push((name, entry.path()));
    }

    dirs.sort();
    Ok(dirs)
}
