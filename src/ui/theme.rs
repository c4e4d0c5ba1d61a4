//! Visual theme and styling.

use console::Style;

/// stencil's visual theme.
#[derive(Debug, Clone)]
pub struct StencilTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for highlighted tokens (yellow).
    pub highlight: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for StencilTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StencilTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            highlight: Style::new().yellow(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            highlight: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format the unknown-command diagnostic, with the token highlighted.
    pub fn format_unknown_command(&self, command: &str) -> String {
        format!(
            "  {}{}{}",
            self.error.apply_to("Unknown command "),
            self.highlight.apply_to(command),
            self.error.apply_to(".")
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
