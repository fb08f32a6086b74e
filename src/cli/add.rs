use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::cli::CommandContext;
use crate::models::project::{Command, Project};
use crate::services::generator::Generator;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::identifier::normalize_command_name;

/// Add a command to a Cobra application
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Name of the new command
    pub name: Option<String>,

    /// Variable name of parent command for this command
    #[arg(short, long, default_value = "rootCmd")]
    pub parent: String,

    /// Target package name (deprecated, this operation has been removed)
    #[arg(short = 't', long, hide = true)]
    pub package: Option<String>,

    /// Overwrite an existing command file
    #[arg(long)]
    pub force: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for add command
#[derive(Debug, Serialize, Deserialize)]
pub struct AddResponse {
    pub status: String,
    pub command: String,
    pub parent: String,
    pub path: String,
    pub license: String,
}

impl AddCommand {
    /// Execute the add command in the current directory
    pub fn run(&self, context: &CommandContext) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        let response = self.run_in(context, &current_dir)?;

        if self.json {
            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                ScaffoldError::Validation(format!("Failed to serialize JSON response: {e}"))
            })?;
            println!("{json_output}");
        } else {
            println!("{} created at {}", response.command, response.path);
        }

        Ok(())
    }

    /// Generate the command file inside `project_dir`
    pub fn run_in(&self, context: &CommandContext, project_dir: &Path) -> Result<AddResponse> {
        if self.package.is_some() {
            warn!("Flag --package has been deprecated, this operation has been removed.");
        }

        let raw_name = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ScaffoldError::MissingCommandName)?;

        let cmd_name = normalize_command_name(raw_name);
        if cmd_name.is_empty() {
            return Err(ScaffoldError::InvalidCommandName(raw_name.to_string()));
        }

        let legal = context.resolve_license()?;
        let license_name = legal.to_string();
        let project = Project::new(
            project_dir.to_path_buf(),
            legal,
            context.copyright_line(),
        );
        let command = Command::new(cmd_name, self.parent.clone(), project);

        Generator::create_command(&command, self.force)?;

        Ok(AddResponse {
            status: "success".to_string(),
            command: command.cmd_name,
            parent: command.cmd_parent,
            path: project_dir.display().to_string(),
            license: license_name,
        })
    }
}
