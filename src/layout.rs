//! The target repository layout: fixed path tables and embedded script
//! payloads. Everything the organizer touches is named here.

use indexmap::IndexMap;

pub const BACKEND_DIR: &str = "backend";

/// Stale virtual environment directories purged from `backend/`.
pub const VENV_DIRS: [&str; 2] = ["venv", ".venv"];

/// The loosely named analysis folder and its standardized replacement.
pub const LEGACY_ANALYSIS_DIR: &str = "Data Analysis";
pub const ANALYSIS_DIR: &str = "data_analysis";

/// Model files inside the analysis folder whose names may need normalizing.
pub const ANALYSIS_FILES: [&str; 2] = [
    "josh's model.py",
    "bcoefficient_production_level_code_patched.py",
];

pub const DOCS_DIR: &str = "docs";

/// Documentation files collected from the project root into `docs/`.
pub const DOC_FILES: [&str; 6] = [
    "CLIENT_MEETING_GUIDE.md",
    "DOCUMENTATION.md",
    "DUAL_MODEL_ARCHITECTURE.md",
    "FAQ_TROUBLESHOOTING.md",
    "IMPLEMENTATION_COMPLETE.md",
    "TECHNICAL_GUIDE.md",
];

/// Subdirectories that must exist under `backend/`, parents included.
pub const BACKEND_SUBDIRS: [&str; 5] = [
    "webapp/management",
    "webapp/management/commands",
    "static",
    "media",
    "logs",
];

pub const SCRIPTS_DIR: &str = "scripts";

/// Helper scripts written into `scripts/`, in narration order. Payloads are
/// written verbatim, trailing whitespace included; an existing file of the
/// same name is never overwritten.
pub fn script_templates() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        ("run_beta_model.py", RUN_BETA_MODEL),
        ("setup_environment.py", SETUP_ENVIRONMENT),
        ("deploy.py", DEPLOY),
    ])
}

const RUN_BETA_MODEL: &str = r##"#!/usr/bin/env python3
"""
Script to run beta coefficient model and update database.
"""
import os
import sys
import subprocess
from pathlib import Path

def main():
    project_root = Path(__file__).parent.parent
    data_analysis_dir = project_root / "data_analysis"
    backend_dir = project_root / "backend"
    
    # Run the beta coefficient model
    print("Running beta coefficient model...")
    model_script = data_analysis_dir / "bcoefficient_production_level_code_patched.py"
    
    if model_script.exists():
        subprocess.run([sys.executable, str(model_script)], cwd=data_analysis_dir)
        print("Model execution completed.")
        
        # Import results to database
        print("Importing results to database...")
        os.chdir(backend_dir)
        subprocess.run([sys.executable, "manage.py", "import_beta_data"])
        print("Database import completed.")
    else:
        print(f"Model script not found: {model_script}")

if __name__ == "__main__":
    main()
"##;

const SETUP_ENVIRONMENT: &str = r##"#!/usr/bin/env python3
"""
Setup script for development environment.
"""
import subprocess
import sys
from pathlib import Path

def main():
    project_root = Path(__file__).parent.parent
    backend_dir = project_root / "backend"
    frontend_dir = project_root / "frontend"
    
    print("Setting up development environment...")
    
    # Backend setup
    if backend_dir.exists():
        print("Setting up backend...")
        subprocess.run([sys.executable, "-m", "pip", "install", "-r", "requirements.txt"], 
                      cwd=backend_dir)
        subprocess.run([sys.executable, "manage.py", "migrate"], cwd=backend_dir)
    
    # Frontend setup
    if frontend_dir.exists():
        print("Setting up frontend...")
        subprocess.run(["npm", "install"], cwd=frontend_dir)
    
    print("Environment setup completed!")

if __name__ == "__main__":
    main()
"##;

const DEPLOY: &str = r##"#!/usr/bin/env python3
"""
Deployment script for the beta coefficient application.
"""
import subprocess
import sys
from pathlib import Path

def main():
    project_root = Path(__file__).parent.parent
    
    print("Deploying application...")
    
    # Build frontend
    print("Building frontend...")
    subprocess.run(["npm", "run", "build"], cwd=project_root / "frontend")
    
    # Collect static files for backend
    print("Collecting static files...")
    subprocess.run([sys.executable, "manage.py", "collectstatic", "--noinput"], 
                  cwd=project_root / "backend")
    
    print("Deployment completed!")

if __name__ == "__main__":
    main()
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_script_has_a_shebang() {
        for (name, payload) in script_templates() {
            assert!(
                payload.starts_with("#!/usr/bin/env python3\n"),
                "{name} is missing its shebang"
            );
        }
    }

    #[test]
    fn script_table_is_in_narration_order() {
        let names: Vec<&str> = script_templates().keys().copied().collect();
        assert_eq!(
            names,
            ["run_beta_model.py", "setup_environment.py", "deploy.py"]
        );
    }

    #[test]
    fn payloads_end_with_a_main_guard() {
        for (_, payload) in script_templates() {
            assert!(payload.ends_with("if __name__ == \"__main__\":\n    main()\n"));
        }
    }
}
