//! stencil - Bootstrap new projects from template repositories.
//!
//! stencil resolves a template name (a built-in alias, a shorthand
//! repository reference, or a direct URL) to a remote repository, retrieves
//! it, and unpacks it into a target directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Archive download and git clone transports
//! - [`registry`] - Template registry, resolution and reference grammar
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use stencil::registry::{Registry, RepoReference};
//!
//! let registry = Registry::builtin().unwrap();
//! let reference = registry.resolve("owner/name#dev");
//! let parsed = RepoReference::parse(&reference).unwrap();
//!
//! assert_eq!(
//!     parsed.archive_url(),
//!     "https://github.com/owner/name/archive/dev.tar.gz"
//! );
//! ```

pub mod cli;
pub mod error;
pub mod fetch;
pub mod registry;
pub mod ui;

pub use error::{Result, StencilError};
