//! Registry manifests loaded from disk.
//!
//! Used when `--registry` (or `STENCIL_REGISTRY`) points at a YAML file that
//! replaces the built-in table.

use crate::error::{Result, StencilError};
use crate::registry::manifest::RegistryManifest;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a registry manifest from a file.
pub fn load_manifest_file(path: &Path) -> Result<RegistryManifest> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StencilError::RegistryNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!("Loaded registry manifest from {}", path.display());
    RegistryManifest::parse(&content, path)
}
