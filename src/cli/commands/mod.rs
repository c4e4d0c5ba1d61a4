//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`stencil create`, `stencil list`)
//! - Shared registry loading
//! - Consistent global flag handling

pub mod create;
pub mod dispatcher;
pub mod help;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
