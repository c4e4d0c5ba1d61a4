//! List command implementation.
//!
//! The `stencil list` command shows the templates in the registry.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::Registry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    registry: &'a Registry,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(registry: &'a Registry, args: ListArgs) -> Self {
        Self { registry, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("");

        for entry in self.registry.entries() {
            ui.message(&format!("{} - {}", entry.name, entry.description));

            if self.args.verbose {
                ui.message(&format!("  repository: {}", entry.repository));
                ui.message(&format!("  relations: {}", entry.relations_display()));
                ui.message("");
            }
        }

        ui.message("");
        Ok(CommandResult::success())
    }
}
