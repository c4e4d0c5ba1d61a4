//! Help output and the unknown-command handler.
//!
//! Running `stencil` with no arguments prints exactly what `stencil --help`
//! prints. Any unrecognized command prints the help followed by a notice
//! naming the token; neither is treated as an error.

use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::{should_use_colors, StencilTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Render the top-level help text.
pub fn render_help() -> String {
    Cli::command().render_help().to_string()
}

/// Prints top-level help to stdout.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Create a new help command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Same renderer clap uses for `--help`, so the two outputs match.
        Cli::command().print_help()?;
        Ok(CommandResult::success())
    }
}

/// Handles any command that is not `create` or `list`.
pub struct UnknownCommand {
    name: String,
    theme: StencilTheme,
}

impl UnknownCommand {
    /// Create a handler for the given command token.
    pub fn new(name: impl Into<String>) -> Self {
        let theme = if should_use_colors() {
            StencilTheme::new()
        } else {
            StencilTheme::plain()
        };
        Self::with_theme(name, theme)
    }

    /// Create a handler with an explicit theme.
    pub fn with_theme(name: impl Into<String>, theme: StencilTheme) -> Self {
        Self {
            name: name.into(),
            theme,
        }
    }

    /// The unrecognized command token.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Command for UnknownCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Unknown command: {}", self.name);
        ui.message(render_help().trim_end());
        ui.message(&self.theme.format_unknown_command(&self.name));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn render_help_mentions_commands() {
        let help = render_help();
        assert!(help.contains("create"));
        assert!(help.contains("list"));
        assert!(help.contains("Usage:"));
    }

    #[test]
    fn unknown_command_prints_help_then_notice() {
        let cmd = UnknownCommand::with_theme("frobnicate", StencilTheme::plain());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.messages().len(), 2);
        assert!(ui.messages()[0].contains("Usage:"));
        assert_eq!(ui.messages()[1], "  Unknown command frobnicate.");
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn unknown_command_keeps_name() {
        let cmd = UnknownCommand::new("deploy");
        assert_eq!(cmd.name(), "deploy");
    }
}
