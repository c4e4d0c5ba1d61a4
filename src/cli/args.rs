//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Footer shown under the top-level help.
const AFTER_HELP: &str = "You can run `stencil <command> -h` to check out command detail.";

/// Footer shown under `stencil create --help`.
const CREATE_AFTER_HELP: &str = "\
Template forms:
  A template name, a shorthand repository string, or a direct url.
    - To check all available template names: stencil list
    - `owner/name` for github
    - `gitlab:owner/name` for gitlab
    - `gitlab:custom.com:owner/name` for custom gitlab
    - `bitbucket:owner/name` for bitbucket
    - `direct:url` for direct url
    - `owner/name#my-branch` to specify a branch
  Directory defaults to the current directory.";

/// stencil - Bootstrap new projects from template repositories.
#[derive(Debug, Parser)]
#[command(name = "stencil")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Read templates from this registry file instead of the built-in list
    #[arg(long, global = true, env = "STENCIL_REGISTRY", value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Download timeout in seconds
    #[arg(
        long,
        global = true,
        env = "STENCIL_TIMEOUT",
        default_value_t = 30,
        value_name = "SECS"
    )]
    pub timeout: u64,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a template
    #[command(after_help = CREATE_AFTER_HELP)]
    Create(CreateArgs),

    /// Show all built-in templates
    List(ListArgs),

    /// Anything else prints help and an unknown-command notice
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Template name, shorthand repository string, or direct url
    pub template: String,

    /// Directory for your project
    #[arg(default_value = "./")]
    pub directory: PathBuf,

    /// Use git clone instead of an http download
    #[arg(short, long)]
    pub clone: bool,
}

impl CreateArgs {
    /// Arguments for `create <template>` with defaults for everything else.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            directory: PathBuf::from("./"),
            clone: false,
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Show repository and relations for each template
    #[arg(short, long)]
    pub verbose: bool,
}
