use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::project::{Command, Project, CMD_DIR};
use crate::utils::error::Result;
use crate::utils::fs_utils::write_generated_file;

/// Renders and writes the Go sources of a Cobra application
pub struct Generator;

impl Generator {
    /// Write `cmd/<name>.go` for a new sub-command
    pub fn create_command(command: &Command, force: bool) -> Result<PathBuf> {
        let path = command.file_path();
        write_generated_file(&path, &render_command(command), force)?;
        Ok(path)
    }

    /// Write `main.go`, `cmd/root.go` and, if the license has text, `LICENSE`.
    /// Returns the paths written.
    pub fn create_project(project: &Project, force: bool) -> Result<Vec<PathBuf>> {
        let root = project.path();

        // root.go goes first so an existing project is detected before
        // anything else is touched
        let root_cmd = root.join(CMD_DIR).join("root.go");
        write_generated_file(&root_cmd, &render_root(project), force)?;

        let main = root.join("main.go");
        write_generated_file(&main, &render_main(project), true)?;

        let mut written = vec![root_cmd, main];

        if let Some(text) = render_license(project) {
            let license = root.join("LICENSE");
            write_generated_file(&license, &text, true)?;
            written.push(license);
        } else {
            debug!("license has no text, skipping LICENSE");
        }

        Ok(written)
    }
}

/// Comment block with the copyright line and license header
pub fn file_header(project: &Project) -> String {
    let mut header = String::new();
    header.push_str("/*\n");
    header.push_str(&project.copyright);
    header.push('\n');
    if !project.legal.header.is_empty() {
        header.push('\n');
        header.push_str(&project.legal.header);
        header.push('\n');
    }
    header.push_str("*/\n");
    header
}

pub fn render_command(command: &Command) -> String {
    let name = &command.cmd_name;
    let mut content = file_header(&command.project);

    content.push_str("package cmd\n\n");
    content.push_str("import (\n\t\"fmt\"\n\n\t\"github.com/spf13/cobra\"\n)\n\n");
    content.push_str(&format!("// {name}Cmd represents the {name} command\n"));
    content.push_str(&format!("var {name}Cmd = &cobra.Command{{\n"));
    content.push_str(&format!("\tUse:   \"{name}\",\n"));
    content.push_str("\tShort: \"A brief description of your command\",\n");
    content.push_str("\tLong: `A longer description of your command, with examples of how to use it.`,\n");
    content.push_str("\tRun: func(cmd *cobra.Command, args []string) {\n");
    content.push_str(&format!("\t\tfmt.Println(\"{name} called\")\n"));
    content.push_str("\t},\n}\n\n");
    content.push_str("func init() {\n");
    content.push_str(&format!("\t{}.AddCommand({name}Cmd)\n\n", command.cmd_parent));
    content.push_str("\t// Persistent flags work for this command and all its subcommands:\n");
    content.push_str(&format!("\t// {name}Cmd.PersistentFlags().String(\"foo\", \"\", \"A help for foo\")\n\n"));
    content.push_str("\t// Local flags only run when this command is called directly:\n");
    content.push_str(&format!("\t// {name}Cmd.Flags().BoolP(\"toggle\", \"t\", false, \"Help message for toggle\")\n"));
    content.push_str("}\n");

    content
}

pub fn render_root(project: &Project) -> String {
    let app_name = project.app_name();
    let mut content = file_header(project);

    content.push_str("package cmd\n\n");
    content.push_str("import (\n\t\"os\"\n\n\t\"github.com/spf13/cobra\"\n)\n\n");
    content.push_str("// rootCmd is the base command when called without any subcommands\n");
    content.push_str("var rootCmd = &cobra.Command{\n");
    content.push_str(&format!("\tUse:   \"{app_name}\",\n"));
    content.push_str("\tShort: \"A brief description of your application\",\n");
    content.push_str("\tLong: `A longer description of your application, with examples of how to use it.`,\n");
    content.push_str("}\n\n");
    content.push_str("// Execute adds all child commands to the root command and runs it.\n");
    content.push_str("// It is called once by main.main().\n");
    content.push_str("func Execute() {\n");
    content.push_str("\tif err := rootCmd.Execute(); err != nil {\n");
    content.push_str("\t\tos.Exit(1)\n\t}\n}\n\n");
    content.push_str("func init() {\n");
    content.push_str("\trootCmd.Flags().BoolP(\"toggle\", \"t\", false, \"Help message for toggle\")\n");
    content.push_str("}\n");

    content
}

pub fn render_main(project: &Project) -> String {
    let mut content = file_header(project);

    content.push_str("package main\n\n");
    content.push_str(&format!("import \"{}/cmd\"\n\n", project.pkg_name));
    content.push_str("func main() {\n\tcmd.Execute()\n}\n");

    content
}

/// Full license text for `LICENSE`, or `None` when there is nothing to write
pub fn render_license(project: &Project) -> Option<String> {
    if project.legal.text.is_empty() {
        return None;
    }
    Some(project.legal.render_text(&project.copyright))
}

/// Module path declared in `<dir>/go.mod`, if the file exists and has one
pub fn module_name_from_go_mod(dir: &Path) -> Result<Option<String>> {
    let go_mod = dir.join("go.mod");
    if !go_mod.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&go_mod)?;
    Ok(content.lines().find_map(|line| {
        let mut words = line.split_whitespace();
        if words.next() != Some("module") {
            return None;
        }
        words
            .next()
            .map(|name| name.trim_matches('"'))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }))
}
