//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "quill", version, about = "Write, list and manage short posts")]
pub struct Cli {
    /// Key-value store file (overrides QUILL_DATA_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Key the posts are stored under (overrides QUILL_STORAGE_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub storage_key: Option<String>,

    /// Fail instead of starting empty when stored posts are malformed
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show post counts and the latest posts (default)
    Dashboard,
    /// List all posts, newest first
    List,
    /// Publish a new post
    New {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Edit a post; with no changes given, show it in the editor
    Edit {
        /// Post id or unique id prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a post after confirmation
    Delete {
        /// Post id or unique id prefix
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive session
    Shell,
}

impl Command {
    /// Whether this command may ask the user to confirm a deletion.
    pub fn prompts(&self) -> bool {
        matches!(self, Command::Shell | Command::Delete { yes: false, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["quill", "list", "--json", "--data-file", "x.json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.data_file, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn test_delete_prompts_unless_yes() {
        let cli = Cli::try_parse_from(["quill", "delete", "abc"]).unwrap();
        assert!(cli.command.unwrap().prompts());

        let cli = Cli::try_parse_from(["quill", "delete", "abc", "-y"]).unwrap();
        assert!(!cli.command.unwrap().prompts());
    }
}
