//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use stencil::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("1. cd my-app");
//! ui.error("Unable to connect to: owner/name");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("my-app"));
//! assert_eq!(ui.errors(), &["Unable to connect to: owner/name"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    spinner_results: Vec<Rc<RefCell<Option<SpinnerStatus>>>>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Final status of each started spinner, in start order.
    pub fn spinner_statuses(&self) -> Vec<Option<SpinnerStatus>> {
        self.spinner_results.iter().map(|s| *s.borrow()).collect()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        let spinner = MockSpinner::default();
        self.spinner_results.push(Rc::clone(&spinner.status));
        Box::new(spinner)
    }
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Cleared without a final line.
    Cleared,
}

/// Mock spinner that records how it finished.
#[derive(Debug, Default)]
struct MockSpinner {
    status: Rc<RefCell<Option<SpinnerStatus>>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, _msg: &str) {
        *self.status.borrow_mut() = Some(SpinnerStatus::Success);
    }

    fn clear(&mut self) {
        *self.status.borrow_mut() = Some(SpinnerStatus::Cleared);
    }
}
