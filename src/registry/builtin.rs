//! Built-in template table embedded at compile time.

use crate::error::{Result, StencilError};
use crate::registry::manifest::RegistryManifest;
use include_dir::{include_dir, Dir};
use std::path::Path;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

const MANIFEST_PATH: &str = "templates/registry.yml";

/// Load the built-in registry manifest.
pub fn load_manifest() -> Result<RegistryManifest> {
    let manifest_file =
        TEMPLATES_DIR
            .get_file("registry.yml")
            .ok_or_else(|| StencilError::RegistryNotFound {
                path: MANIFEST_PATH.into(),
            })?;

    let content = manifest_file
        .contents_utf8()
        .ok_or_else(|| StencilError::RegistryParseError {
            path: MANIFEST_PATH.into(),
            message: "Invalid UTF-8".to_string(),
        })?;

    RegistryManifest::parse(content, Path::new(MANIFEST_PATH))
}
