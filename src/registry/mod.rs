//! Template registry for stencil.
//!
//! The registry maps short template names to repository references. It is
//! loaded once at startup, either from the table embedded in the binary or
//! from a manifest file passed with `--registry`, and never changes
//! afterwards.
//!
//! # Example
//!
//! ```
//! use stencil::registry::Registry;
//!
//! let registry = Registry::builtin().unwrap();
//!
//! // Registered names map to their repository
//! assert_eq!(registry.resolve("webpack-vue"), "vuejs-templates/webpack");
//!
//! // Anything else is passed through unchanged
//! assert_eq!(registry.resolve("some/other-repo"), "some/other-repo");
//! ```

pub mod builtin;
pub mod local;
pub mod manifest;
pub mod reference;
pub mod resolver;
pub mod template;

// Re-exports
pub use manifest::RegistryManifest;
pub use reference::{Host, RepoReference};
pub use resolver::{resolve, Registry, ResolvedTarget};
pub use template::TemplateEntry;
