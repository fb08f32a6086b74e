use std::path::{Path, PathBuf};

use crate::models::license::License;

/// Directory holding generated command files, relative to the project root
pub const CMD_DIR: &str = "cmd";

/// A Cobra application on disk that commands are generated into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Absolute path of the project root
    pub absolute_path: PathBuf,
    /// Go module path (e.g. github.com/spf13/hugo), needed by `init`
    pub pkg_name: String,
    /// License stamped onto generated files
    pub legal: License,
    /// Copyright line placed above the license header
    pub copyright: String,
}

impl Project {
    pub fn new(absolute_path: PathBuf, legal: License, copyright: String) -> Self {
        Self {
            absolute_path,
            pkg_name: String::new(),
            legal,
            copyright,
        }
    }

    /// Set the Go module path
    #[must_use]
    pub fn with_pkg_name(mut self, pkg_name: impl Into<String>) -> Self {
        self.pkg_name = pkg_name.into();
        self
    }

    /// Last element of the module path, used as the root command name
    pub fn app_name(&self) -> &str {
        let pkg_name = self.pkg_name.trim_end_matches('/');
        if let Some(last) = pkg_name.rsplit('/').next().filter(|last| !last.is_empty()) {
            return last;
        }

        self.absolute_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("app")
    }

    pub fn cmd_dir(&self) -> PathBuf {
        self.absolute_path.join(CMD_DIR)
    }

    pub fn path(&self) -> &Path {
        &self.absolute_path
    }
}

/// A sub-command to be generated inside a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Normalized identifier of the command
    pub cmd_name: String,
    /// Variable name of the parent command it registers under
    pub cmd_parent: String,
    pub project: Project,
}

impl Command {
    pub fn new(cmd_name: String, cmd_parent: String, project: Project) -> Self {
        Self {
            cmd_name,
            cmd_parent,
            project,
        }
    }

    /// Path of the generated Go file
    pub fn file_path(&self) -> PathBuf {
        self.project.cmd_dir().join(format!("{}.go", self.cmd_name))
    }
}
