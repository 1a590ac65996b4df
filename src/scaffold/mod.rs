//! Module skeleton creation
//!
//! Materializes the module convention on disk. Creation is idempotent:
//! existing directories are left alone and existing READMEs are never
//! overwritten, so a partially created module is repaired by re-running.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::models::{ModulePaths, ModuleSpec};

const MODULE_README_TEMPLATE: &str = include_str!("../../templates/module_readme.md");
const EXERCISES_README: &str = include_str!("../../templates/exercises_readme.md");

/// Failure while materializing a module path
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Invalid module name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Failed to create directory {path}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}")]
    WriteFile { path: PathBuf, source: io::Error },
}

/// What happened to a single directory or file during creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreatedDir(PathBuf),
    CreatedFile(PathBuf),
    AlreadyPresent(PathBuf),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CreatedDir(path) => write!(f, "Created directory: {}", path.display()),
            Action::CreatedFile(path) => write!(f, "Created file: {}", path.display()),
            Action::AlreadyPresent(path) => write!(f, "Already present: {}", path.display()),
        }
    }
}

/// Result of a create operation
#[derive(Debug)]
pub struct CreateOutcome {
    /// The module directory, whether newly created or already existing
    pub path: PathBuf,
    /// Per-entry record of what was created versus already present
    pub actions: Vec<Action>,
    /// True when no filesystem mutation was performed
    pub dry_run: bool,
}

/// Create a module skeleton under `root`.
///
/// Ensures the module directory with its `exercises/` and `resources/`
/// subdirectories exists and seeds both READMEs from the fixed templates.
/// Parent directories (including `root` itself) are created as needed.
pub fn create_module(
    root: &Path,
    spec: &ModuleSpec,
    dry_run: bool,
) -> Result<CreateOutcome, PathError> {
    check_name(&spec.name)?;
    let paths = ModulePaths::new(root, &spec.name);

    if dry_run {
        return Ok(CreateOutcome {
            path: paths.dir,
            actions: Vec::new(),
            dry_run: true,
        });
    }

    let mut actions = Vec::new();
    for dir in [&paths.dir, &paths.exercises, &paths.resources] {
        actions.push(ensure_dir(dir)?);
    }
    actions.push(write_if_absent(
        &paths.readme,
        &render_module_readme(&spec.title()),
    )?);
    actions.push(write_if_absent(&paths.exercises_readme, EXERCISES_README)?);

    Ok(CreateOutcome {
        path: paths.dir,
        actions,
        dry_run: false,
    })
}

/// Apply [`create_module`] over an ordered list of modules
pub fn init_all(
    root: &Path,
    modules: &[ModuleSpec],
    dry_run: bool,
) -> Result<Vec<CreateOutcome>, PathError> {
    modules
        .iter()
        .map(|module| create_module(root, module, dry_run))
        .collect()
}

fn render_module_readme(title: &str) -> String {
    MODULE_README_TEMPLATE.replace("{title}", title)
}

fn ensure_dir(path: &Path) -> Result<Action, PathError> {
    if path.is_dir() {
        return Ok(Action::AlreadyPresent(path.to_path_buf()));
    }
    fs::create_dir_all(path).map_err(|source| PathError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Action::CreatedDir(path.to_path_buf()))
}

fn write_if_absent(path: &Path, content: &str) -> Result<Action, PathError> {
    if path.exists() {
        return Ok(Action::AlreadyPresent(path.to_path_buf()));
    }
    fs::write(path, content).map_err(|source| PathError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Action::CreatedFile(path.to_path_buf()))
}

/// A module name must be a single normal path component: not empty, not
/// absolute, no separators, no `.` or `..` segments
fn check_name(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::InvalidName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(PathError::InvalidName {
            name: name.to_string(),
            reason: "must be a single path segment".to_string(),
        }),
    }
}
