//! Non-interactive UI for pipes, CI and other headless environments.
//!
//! Everything is plain text. Status goes to stdout, errors go to stderr, and spinners degrade to a single line.

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let visible = self.mode.shows_spinners();
        if visible {
            println!("{}", message);
        }
        Box::new(LineSpinner { visible })
    }
}

/// Spinner stand-in: the start line was already printed, finishes print a line.
struct LineSpinner {
    visible: bool,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.visible {
            println!("{}", msg);
        }
    }

    fn clear(&mut self) {}
}
