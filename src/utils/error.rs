// Common error types for cobra-scaffold

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("unknown license: {name}")]
    UnknownLicense { name: String },

    #[error("add needs a name for the command")]
    MissingCommandName,

    #[error("'{0}' does not contain any identifier characters")]
    InvalidCommandName(String),

    #[error("license alias '{alias}' of '{incoming}' is already registered by '{existing}'")]
    AliasCollision {
        alias: String,
        existing: String,
        incoming: String,
    },

    #[error("license '{0}' must have at least one alias")]
    EmptyAliases(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Error ready to be shown to the user at the process boundary
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        let (hint, exit_code) = match err {
            ScaffoldError::UnknownLicense { .. } => (
                Some("Known licenses: none, MIT, Apache-2.0, BSD-2-Clause, BSD-3-Clause, GPL-2.0, GPL-3.0, LGPL-3.0, AGPL-3.0".to_string()),
                1,
            ),
            ScaffoldError::MissingCommandName => {
                (Some("Usage: cobra-scaffold add <command name>".to_string()), 1)
            }
            ScaffoldError::Config(_) => (None, 2),
            ScaffoldError::Io(_) => (None, 74),
            _ => (None, 1),
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    /// Print the error (and hint, if any) to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("{hint}");
        }
    }
}
