use std::{fs, path::PathBuf};

use crate::organize::{self, OrganizeError};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum OpruimError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Organize(#[from] OrganizeError),
}

/// Tidies the repository rooted at `project_root` by running every cleanup
/// step in order: purging stale virtual environments, standardizing the
/// analysis folder, collecting documentation under `docs/`, filling in the
/// backend directory skeleton, and materializing the helper scripts.
///
/// When `dry_run` is set, every step narrates the actions it would take and
/// leaves the tree untouched.
///
/// # Errors
///
/// Returns an [`OpruimError`] if:
///
/// - A directory cannot be removed, created, or renamed.
/// - A file cannot be moved or written.
/// - Permission bits cannot be set on a generated script.
///
/// Missing inputs are not errors: a step whose subject is absent logs a skip
/// and moves on. A failure partway leaves earlier steps' effects in place.
pub fn run(project_root: &str, dry_run: bool) -> Result<(), OpruimError> {
    // Resolve to an absolute path when possible; a root that does not exist
    // yet is kept verbatim so every step reports "not found" and skips.
    let root = fs::canonicalize(project_root).unwrap_or_else(|_| PathBuf::from(project_root));

    log::debug!("resolved project root: {}", root.display());

    println!("Cleaning up repository at: {}", root.display());

    if dry_run {
        println!("DRY RUN MODE - No changes will be made");
        println!("{}", "=".repeat(50));
    }

    organize::purge_virtual_environments(&root, dry_run)?;
    organize::organize_analysis_folder(&root, dry_run)?;
    organize::organize_documentation(&root, dry_run)?;
    organize::ensure_backend_layout(&root, dry_run)?;
    organize::materialize_scripts(&root, dry_run)?;

    println!("\n{}", "=".repeat(50));
    println!("Repository cleanup completed!");

    Ok(())
}
