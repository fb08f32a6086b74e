use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::CommandContext;
use crate::models::project::Project;
use crate::services::generator::{module_name_from_go_mod, Generator};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::fs_utils::ensure_directory_exists;

/// Initialize a Cobra application
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory of the application (default: current directory)
    pub path: Option<PathBuf>,

    /// Go module path of the application (default: read from go.mod)
    #[arg(long)]
    pub pkg_name: Option<String>,

    /// Overwrite an existing cmd/root.go
    #[arg(long)]
    pub force: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for init command
#[derive(Debug, Serialize, Deserialize)]
pub struct InitResponse {
    pub status: String,
    pub path: String,
    pub pkg_name: String,
    pub license: String,
    pub files: Vec<String>,
}

impl InitCommand {
    /// Execute the init command relative to the current directory
    pub fn run(&self, context: &CommandContext) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        let response = self.run_in(context, &current_dir)?;

        if self.json {
            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                ScaffoldError::Validation(format!("Failed to serialize JSON response: {e}"))
            })?;
            println!("{json_output}");
        } else {
            println!("Your Cobra application is ready at\n{}", response.path);
        }

        Ok(())
    }

    /// Generate the application, resolving a relative `path` against `base_dir`
    pub fn run_in(&self, context: &CommandContext, base_dir: &Path) -> Result<InitResponse> {
        let project_dir = match &self.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base_dir.join(path),
            None => base_dir.to_path_buf(),
        };

        let pkg_name = match self.pkg_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => module_name_from_go_mod(&project_dir)?.ok_or_else(|| {
                ScaffoldError::Validation(
                    "no go.mod found (run `go mod init <MODNAME>` first or pass --pkg-name)"
                        .to_string(),
                )
            })?,
        };

        // Resolve before touching the disk so an unknown license leaves nothing behind
        let legal = context.resolve_license()?;
        ensure_directory_exists(&project_dir)?;

        let license_name = legal.to_string();
        let project = Project::new(project_dir, legal, context.copyright_line())
            .with_pkg_name(pkg_name);
        let files = Generator::create_project(&project, self.force)?;

        Ok(InitResponse {
            status: "success".to_string(),
            path: project.absolute_path.display().to_string(),
            pkg_name: project.pkg_name,
            license: license_name,
            files: files.iter().map(|f| f.display().to_string()).collect(),
        })
    }
}
