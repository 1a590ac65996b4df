//! Data models for learning trees
//!
//! A module is a named unit of learning content. On disk it is a directory
//! holding a README, an `exercises/` subdirectory with its own README, and
//! a `resources/` subdirectory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A module to create: a filesystem-safe name plus an optional human title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleSpec {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl ModuleSpec {
    pub fn new(name: impl Into<String>, title: Option<String>) -> Self {
        Self {
            name: name.into(),
            title,
        }
    }

    /// Effective title: the explicit title if given, otherwise the name
    /// with `-` replaced by spaces and surrounding whitespace trimmed
    pub fn title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => self.name.replace('-', " ").trim().to_string(),
        }
    }
}

/// Paths that make up a module's on-disk representation
#[derive(Debug, Clone)]
pub struct ModulePaths {
    pub dir: PathBuf,
    pub readme: PathBuf,
    pub exercises: PathBuf,
    pub exercises_readme: PathBuf,
    pub resources: PathBuf,
}

impl ModulePaths {
    pub fn new(root: &Path, name: &str) -> Self {
        let dir = root.join(name);
        Self {
            readme: dir.join("README.md"),
            exercises: dir.join("exercises"),
            exercises_readme: dir.join("exercises").join("README.md"),
            resources: dir.join("resources"),
            dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_title_wins() {
        let spec = ModuleSpec::new("05-ml-deployment", Some("ML Deployment".to_string()));
        assert_eq!(spec.title(), "ML Deployment");
    }

    #[test]
    fn test_title_derived_from_name() {
        let spec = ModuleSpec::new("05-ml-deployment", None);
        assert_eq!(spec.title(), "05 ml deployment");
    }

    #[test]
    fn test_derived_title_is_trimmed() {
        let spec = ModuleSpec::new("-fundamentals-", None);
        assert_eq!(spec.title(), "fundamentals");
    }

    #[test]
    fn test_module_paths_fan_out() {
        let paths = ModulePaths::new(Path::new("/tmp/learning"), "01-fundamentals");
        assert_eq!(paths.dir, Path::new("/tmp/learning/01-fundamentals"));
        assert_eq!(paths.readme, paths.dir.join("README.md"));
        assert_eq!(paths.exercises_readme, paths.dir.join("exercises/README.md"));
        assert_eq!(paths.resources, paths.dir.join("resources"));
    }
}
