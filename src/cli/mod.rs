// CLI module for command-line interface

pub mod add;
pub mod init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::models::license::{License, LicenseRegistry};
use crate::services::license_resolver::{copyright_line, LicenseResolver};
use crate::utils::config::{Config, ConfigParser};
use crate::utils::error::Result;

use self::add::AddCommand;
use self::init::InitCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "cobra-scaffold")]
#[command(about = "Scaffolding generator for Cobra-based Go applications")]
#[command(long_about = r#"cobra-scaffold generates the boilerplate of Cobra command-line
applications: the root command, the main package and one file per
sub-command, each stamped with a copyright line and license header.

The license comes from --license, then from the config file
($HOME/.cobra-scaffold.toml), and defaults to none.

Examples:
  cobra-scaffold init --pkg-name github.com/jane/app   Create a new application
  cobra-scaffold add serve                             Add cmd/serve.go
  cobra-scaffold add add-user -p configCmd             Add cmd/addUser.go under configCmd
  cobra-scaffold -l mit add serve                      Use the MIT license header"#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Config file (default is $HOME/.cobra-scaffold.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Author name for copyright attribution
    #[arg(short, long, global = true)]
    pub author: Option<String>,

    /// Name of license for the project
    #[arg(short, long, global = true)]
    pub license: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a command to a Cobra application
    #[command(visible_alias = "command")]
    #[command(long_about = r#"Add a new command, with a license header and the structure of a
Cobra command, and register it to its parent (default rootCmd).

Dashes and underscores in the name are removed and the following letter
is uppercased. If you want your command to be public, pass in the command
name with an initial uppercase letter.

Examples:
  cobra-scaffold add server       Creates cmd/server.go
  cobra-scaffold add add-user     Creates cmd/addUser.go"#)]
    Add(AddCommand),

    /// Initialize a Cobra application
    #[command(long_about = r#"Initialize a Cobra application in the given directory (default: the
current one). Creates main.go, cmd/root.go and, when the selected license
has a full text, a LICENSE file.

The Go module path is read from go.mod unless --pkg-name is given.

Examples:
  cobra-scaffold init                              Use the module from ./go.mod
  cobra-scaffold init app --pkg-name example.com/app
  cobra-scaffold -l apache init                    Also write an Apache 2.0 LICENSE"#)]
    Init(InitCommand),
}

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    pub config: Config,
    /// License named with `--license`
    pub license: Option<String>,
    pub registry: LicenseRegistry,
}

impl CommandContext {
    pub fn new(config: Config, license: Option<String>) -> Self {
        Self {
            config,
            license,
            registry: LicenseRegistry::builtin(),
        }
    }

    /// Load the config file and apply flag overrides
    pub fn from_global(global: &GlobalArgs) -> Result<Self> {
        let config = ConfigParser::load(global.config.as_deref())?.with_author(global.author.clone());
        Ok(Self::new(config, global.license.clone()))
    }

    pub fn resolve_license(&self) -> Result<License> {
        let sources = self.config.license_sources(self.license.as_deref());
        let license = LicenseResolver::new(&self.registry).resolve(&sources)?;
        debug!(license = %license, "resolved license");
        Ok(license)
    }

    pub fn copyright_line(&self) -> String {
        copyright_line(&self.config.author, self.config.year.as_deref())
    }
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(cli: Cli) -> Result<()> {
        let context = CommandContext::from_global(&cli.global)?;

        match cli.command {
            Commands::Add(cmd) => cmd.run(&context),
            Commands::Init(cmd) => cmd.run(&context),
        }
    }
}
