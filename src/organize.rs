//! The cleanup steps. Each step is a single linear pass of
//! existence-guarded actions: missing inputs are narrated skips, and a
//! second run finds nothing left to do.

use crate::errors::IoError;
use crate::fsops;
use crate::layout;
use crate::utils::normalize_file_name;
use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum OrganizeError {
    #[error("I/O error while reorganizing the repository")]
    #[diagnostic(code(opruim::organize::io))]
    Io(#[from] IoError),
}

/// Removes stale virtual environment directories under `backend/`. A missing
/// backend directory skips the whole step.
pub fn purge_virtual_environments(root: &Path, dry_run: bool) -> Result<(), OrganizeError> {
    println!("\n1. Cleaning up virtual environments...");

    let backend_dir = root.join(layout::BACKEND_DIR);
    if !backend_dir.exists() {
        println!("   Backend directory not found, skipping...");
        return Ok(());
    }

    for name in layout::VENV_DIRS {
        let venv_dir = backend_dir.join(name);
        if venv_dir.exists() {
            fsops::remove_dir_all(root, &venv_dir, dry_run)?;
        } else {
            log::debug!("no virtual environment at {}", venv_dir.display());
        }
    }

    println!("   ✓ Virtual environment cleanup completed");

    Ok(())
}

/// Renames the legacy analysis folder to its standardized name, then
/// normalizes the model file names inside it.
pub fn organize_analysis_folder(root: &Path, dry_run: bool) -> Result<(), OrganizeError> {
    println!("\n2. Organizing data analysis folder...");

    let legacy_dir = root.join(layout::LEGACY_ANALYSIS_DIR);
    let analysis_dir = root.join(layout::ANALYSIS_DIR);

    // The rename only happens when it cannot clobber an existing target.
    if legacy_dir.exists() && !analysis_dir.exists() {
        fsops::rename(root, &legacy_dir, &analysis_dir, dry_run)?;
    }

    // Under dry run the rename above did not happen, so this pass may find
    // nothing under the standardized name.
    if analysis_dir.exists() {
        for file_name in layout::ANALYSIS_FILES {
            let old_file = analysis_dir.join(file_name);
            if old_file.exists() && file_name.contains(' ') {
                let new_file = analysis_dir.join(normalize_file_name(file_name));
                fsops::rename(root, &old_file, &new_file, dry_run)?;
            }
        }
    }

    println!("   ✓ Data analysis folder organized");

    Ok(())
}

/// Collects the known documentation files from the project root into `docs/`.
pub fn organize_documentation(root: &Path, dry_run: bool) -> Result<(), OrganizeError> {
    println!("\n3. Organizing documentation...");

    let docs_dir = root.join(layout::DOCS_DIR);
    if !docs_dir.exists() {
        fsops::create_dir_all(root, &docs_dir, dry_run)?;
    }

    for doc_file in layout::DOC_FILES {
        let old_path = root.join(doc_file);
        let new_path = docs_dir.join(doc_file);

        if old_path.exists() && !new_path.exists() {
            fsops::move_file(root, &old_path, &new_path, dry_run)?;
        } else {
            log::debug!("nothing to move for {}", doc_file);
        }
    }

    println!("   ✓ Documentation organized");

    Ok(())
}

/// Fills in the backend directory skeleton. A missing backend directory
/// skips the whole step.
pub fn ensure_backend_layout(root: &Path, dry_run: bool) -> Result<(), OrganizeError> {
    println!("\n4. Setting up backend structure...");

    let backend_dir = root.join(layout::BACKEND_DIR);
    if !backend_dir.exists() {
        println!("   Backend directory not found, skipping...");
        return Ok(());
    }

    for subdir in layout::BACKEND_SUBDIRS {
        let dir_path = backend_dir.join(subdir);
        if !dir_path.exists() {
            fsops::create_dir_all(root, &dir_path, dry_run)?;
        }
    }

    println!("   ✓ Backend structure verified");

    Ok(())
}

/// Ensures `scripts/` exists and writes each missing helper script with its
/// executable bits set. Existing files are never overwritten.
pub fn materialize_scripts(root: &Path, dry_run: bool) -> Result<(), OrganizeError> {
    println!("\n5. Creating scripts directory...");

    let scripts_dir = root.join(layout::SCRIPTS_DIR);
    if !scripts_dir.exists() {
        fsops::create_dir_all(root, &scripts_dir, dry_run)?;
    }

    for (script_name, template) in layout::script_templates() {
        let script_path = scripts_dir.join(script_name);
        if !script_path.exists() {
            fsops::write_executable(root, &script_path, template, dry_run)?;
        } else {
            log::debug!("script already present, leaving untouched: {}", script_name);
        }
    }

    println!("   ✓ Scripts directory created");

    Ok(())
}
