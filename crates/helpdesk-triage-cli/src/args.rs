use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "helpdesk-triage")]
#[command(about = "Classify helpdesk tickets into a category and priority")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.helpdesk-triage)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Ticket description. Prompts on stdin when omitted.
    pub description: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List category rules and priority signals in evaluation order
    Categories,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show config file path
    Path,

    /// Create config file with a commented template
    Init,

    /// Show the loaded configuration
    Show,
}
