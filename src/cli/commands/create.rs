//! Create command implementation.
//!
//! The `stencil create <template> [directory]` command resolves a template
//! and fetches it into the target directory.

use crate::cli::args::CreateArgs;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::registry::{Registry, ResolvedTarget};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand<'a> {
    registry: &'a Registry,
    fetcher: &'a dyn Fetcher,
    args: CreateArgs,
}

impl<'a> CreateCommand<'a> {
    /// Create a new create command.
    pub fn new(registry: &'a Registry, fetcher: &'a dyn Fetcher, args: CreateArgs) -> Self {
        Self {
            registry,
            fetcher,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CreateArgs {
        &self.args
    }

    /// Build the fetch target for this invocation.
    pub fn target(&self) -> ResolvedTarget {
        ResolvedTarget::new(
            self.registry.resolve(&self.args.template),
            &self.args.directory,
            self.args.clone,
        )
    }
}

impl Command for CreateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.target();

        let mut spinner = ui.start_spinner("Downloading...");
        match self.fetcher.fetch(&target) {
            Ok(()) => {
                spinner.finish_success("Download finished.");
                ui.message(&format!("1. cd {}", self.args.directory.display()));
                ui.message("2. Run `npm i` or `yarn`");
                ui.message("3. Read 'README.md' to get started");
                Ok(CommandResult::success())
            }
            Err(e) => {
                tracing::debug!("{}", e);
                spinner.clear();
                ui.error(&format!("Unable to connect to: {}", target.reference));
                // Reported to the user, not escalated to the exit code.
                Ok(CommandResult::failure(0))
            }
        }
    }
}
