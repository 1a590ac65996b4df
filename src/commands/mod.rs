//! CLI commands for learntree
//!
//! Thin glue between the argument surface and the scaffold/validation
//! layers; all diagnostics go to stdout

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::ModuleSpec;
use crate::scaffold::{self, CreateOutcome};
use crate::validation::{self, Violation};

/// Create every module in `modules` under `root`, in order
pub fn init_all(root: &Path, modules: &[ModuleSpec], dry_run: bool) -> Result<()> {
    let outcomes = scaffold::init_all(root, modules, dry_run)
        .with_context(|| format!("Failed to initialize {}", root.display()))?;
    for outcome in &outcomes {
        report_outcome(outcome);
    }
    if !dry_run {
        println!();
        println!(
            "Initialized {} module(s) under {}",
            outcomes.len(),
            root.display()
        );
    }
    Ok(())
}

/// Create a single module under `root`
pub fn add_module(root: &Path, name: &str, title: Option<&str>, dry_run: bool) -> Result<()> {
    let spec = ModuleSpec::new(name, title.map(str::to_string));
    let outcome = scaffold::create_module(root, &spec, dry_run)
        .with_context(|| format!("Failed to create module {}", name))?;
    report_outcome(&outcome);
    Ok(())
}

/// Check the structure under `root`; returns true when no violations
/// were found
pub fn validate(root: &Path) -> Result<bool> {
    let violations = validation::validate_structure(root)?;

    // A missing root is reported as a single line with no summary
    if matches!(violations.as_slice(), [Violation::RootMissing { .. }]) {
        println!("{}", violations[0]);
        return Ok(false);
    }

    for violation in &violations {
        println!("{}", violation);
    }
    if violations.is_empty() {
        println!("Validation passed: structure looks good.");
        Ok(true)
    } else {
        println!("Validation failed: see messages above.");
        Ok(false)
    }
}

fn report_outcome(outcome: &CreateOutcome) {
    if outcome.dry_run {
        println!("[dry-run] Would create: {}", outcome.path.display());
        return;
    }
    for action in &outcome.actions {
        println!("{}", action);
    }
}
