//! Structural validation for learning trees

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A single structural problem found under a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The root itself does not exist as a directory
    RootMissing { root: PathBuf },
    /// A module directory has no README.md
    MissingReadme { module: String },
    /// A module directory has no exercises/ subdirectory
    MissingExercises { module: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RootMissing { root } => {
                write!(f, "Path does not exist: {}", root.display())
            }
            Violation::MissingReadme { module } => {
                write!(f, "Missing README.md in module: {}", module)
            }
            Violation::MissingExercises { module } => {
                write!(f, "Missing exercises/ in module: {}", module)
            }
        }
    }
}

/// Check every module under `root` against the structural convention.
///
/// Returns all violations found; an empty list means the tree is valid.
/// Directory children are visited in lexicographic name order and every
/// missing requirement is reported, never just the first. Entries under
/// the root that are not directories are ignored. A missing root yields a
/// single [`Violation::RootMissing`] with no further checks. Read-only.
pub fn validate_structure(root: &Path) -> Result<Vec<Violation>> {
    if !root.is_dir() {
        return Ok(vec![Violation::RootMissing {
            root: root.to_path_buf(),
        }]);
    }

    let mut children: Vec<PathBuf> = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory {}", root.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to list directory {}", root.display()))?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    children.sort();

    let mut violations = Vec::new();
    for child in children {
        if !child.is_dir() {
            continue;
        }
        let module = child
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        if !child.join("README.md").exists() {
            violations.push(Violation::MissingReadme {
                module: module.clone(),
            });
        }
        if !child.join("exercises").is_dir() {
            violations.push(Violation::MissingExercises { module });
        }
    }

    Ok(violations)
}
