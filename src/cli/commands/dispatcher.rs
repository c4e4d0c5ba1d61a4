//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::fetch::{RepoFetcher, DEFAULT_TIMEOUT};
use crate::registry::Registry;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    registry_path: Option<PathBuf>,
    timeout: Duration,
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDispatcher {
    /// Create a dispatcher using the built-in registry and default timeout.
    pub fn new() -> Self {
        Self {
            registry_path: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a dispatcher configured from global CLI options.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut dispatcher = Self::new().with_timeout(Duration::from_secs(cli.timeout));
        if let Some(path) = &cli.registry {
            dispatcher = dispatcher.with_registry_path(path);
        }
        dispatcher
    }

    /// Read templates from a manifest file instead of the built-in list.
    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = Some(path.into());
        self
    }

    /// Set the archive download timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the registry file override, if any.
    pub fn registry_path(&self) -> Option<&Path> {
        self.registry_path.as_deref()
    }

    /// Get the download timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Load the registry this dispatcher was configured with.
    pub fn load_registry(&self) -> Result<Registry> {
        match &self.registry_path {
            Some(path) => Registry::from_file(path),
            None => Registry::builtin(),
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Create(args)) => {
                let registry = self.load_registry()?;
                let fetcher = RepoFetcher::with_timeout(self.timeout);
                let cmd = super::create::CreateCommand::new(&registry, &fetcher, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let registry = self.load_registry()?;
                let cmd = super::list::ListCommand::new(&registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Unknown(tokens)) => {
                let name = tokens.first().cloned().unwrap_or_default();
                let cmd = super::help::UnknownCommand::new(name);
                cmd.execute(ui)
            }
            None => super::help::HelpCommand::new().execute(ui),
        }
    }
}
