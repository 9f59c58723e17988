//! The template files gotemplate ships with.
//!
//! Each file under `template/` is pulled in with [`include_str!`] so the
//! binary carries everything it needs. The release config is stored as
//! `goreleaser.yaml`, without the leading dot, and gets its dot back when a
//! project is made.

use std::collections::{BTreeMap, BTreeSet};

use crate::gotemplate_error::{GoTemplateError, Result};

pub const RELEASE_CONFIG: &str = include_str!("../template/goreleaser.yaml");
pub const README: &str = include_str!("../template/README.md");
pub const GO_MOD: &str = include_str!("../template/go.mod");
pub const GO_SUM: &str = include_str!("../template/go.sum");
pub const MAKEFILE: &str = include_str!("../template/Makefile");
pub const LICENSE: &str = include_str!("../template/LICENSE");

const EMBEDDED_FILES: &[(&str, &str)] = &[
    ("goreleaser.yaml", RELEASE_CONFIG),
    ("README.md", README),
    ("go.mod", GO_MOD),
    ("go.sum", GO_SUM),
    ("Makefile", MAKEFILE),
    ("LICENSE", LICENSE),
];

/// one step of a walk over the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleEntry<'a> {
    /// a directory, the bundle root is the empty path
    Dir(String),
    File { path: String, content: &'a str },
}

impl<'a> BundleEntry<'a> {
    pub fn path(&self) -> &str {
        match self {
            BundleEntry::Dir(path) => path,
            BundleEntry::File { path, .. } => path,
        }
    }
}

/// A read only mapping of relative path to file content.
///
/// Paths use `/` as the separator and never leave the bundle root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBundle {
    files: BTreeMap<String, String>,
}

impl TemplateBundle {
    /// make a bundle from path and content pairs, every path is checked
    pub fn new<I, P, C>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let mut checked = BTreeMap::new();

        for (path, content) in files {
            let path = path.into();

            check_bundle_path(&path)?;

            checked.insert(path, content.into());
        }

        // a path cant be a file and the parent of another file
        for path in checked.keys() {
            for dir in parent_dirs(path) {
                if checked.contains_key(dir) {
                    return Err(GoTemplateError::InvalidBundlePath(format!(
                        "{} is both a file and a directory",
                        dir
                    )));
                }
            }
        }

        Ok(Self { files: checked })
    }

    /// the bundle compiled in to the binary
    pub fn embedded() -> Self {
        let files = EMBEDDED_FILES
            .iter()
            .map(|(path, content)| (path.to_string(), content.to_string()))
            .collect();

        Self { files }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn file_paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Walk the bundle depth first, the way a directory walk would.
    ///
    /// The root comes first, siblings are in lexical order and the contents
    /// of a directory follow right after it.
    pub fn walk(&self) -> Vec<BundleEntry<'_>> {
        let mut dirs = BTreeSet::new();
        dirs.insert("");

        for path in self.files.keys() {
            dirs.extend(parent_dirs(path));
        }

        let mut entries: Vec<BundleEntry> = dirs
            .into_iter()
            .map(|dir| BundleEntry::Dir(dir.to_owned()))
            .chain(self.files.iter().map(|(path, content)| BundleEntry::File {
                path: path.clone(),
                content: content.as_str(),
            }))
            .collect();

        entries.sort_by(|a, b| segments(a.path()).cmp(&segments(b.path())));

        entries
    }
}

fn segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        vec![]
    } else {
        path.split('/').collect()
    }
}

// every proper parent of a path, not including the root
fn parent_dirs(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(idx, _)| &path[..idx])
}

fn check_bundle_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GoTemplateError::InvalidBundlePath(String::from(
            "empty path",
        )));
    }

    if path.starts_with('/') || path.contains('\\') {
        return Err(GoTemplateError::InvalidBundlePath(path.to_owned()));
    }

    let bad_segment = path
        .split('/')
        .any(|seg| seg.is_empty() || seg == "." || seg == "..");

    if bad_segment {
        Err(GoTemplateError::InvalidBundlePath(path.to_owned()))
    } else {
        Ok(())
    }
}
