//! Registry manifest definitions.
//!
//! The manifest is the YAML document listing templates in the order
//! `stencil list` shows them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StencilError};
use crate::registry::template::TemplateEntry;

/// Registry manifest defining available templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryManifest {
    /// Manifest version.
    #[serde(default = "default_manifest_version")]
    pub version: u32,

    /// Templates in configuration order.
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

fn default_manifest_version() -> u32 {
    1
}

impl RegistryManifest {
    /// Parse a manifest from YAML.
    ///
    /// `origin` is only used to label parse errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        // An empty document is an empty registry, not a parse error.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| StencilError::RegistryParseError {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get all template names in configuration order.
    pub fn template_names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_registry_manifest() {
        let yaml = r#"
version: 1
templates:
  - name: one
    repository: owner/one
  - name: two
    repository: gitlab:owner/two
    description: Second
"#;
        let manifest = RegistryManifest::parse(yaml, Path::new("registry.yml")).unwrap();
        assert_eq!(manifest.version, 1);
        assert_eq!(manifest.template_names(), vec!["one", "two"]);
    }

    #[test]
    fn version_defaults_to_one() {
        let yaml = "templates: []\n";
        let manifest = RegistryManifest::parse(yaml, Path::new("registry.yml")).unwrap();
        assert_eq!(manifest.version, 1);
        assert!(manifest.templates.is_empty());
    }

    #[test]
    fn empty_document_is_empty_manifest() {
        let manifest = RegistryManifest::parse("  \n", Path::new("registry.yml")).unwrap();
        assert!(manifest.templates.is_empty());
    }

    #[test]
    fn invalid_yaml_reports_origin() {
        let err = RegistryManifest::parse("templates: [", Path::new("/tmp/bad.yml")).unwrap_err();
        assert!(matches!(err, StencilError::RegistryParseError { .. }));
        assert!(err.to_string().contains("/tmp/bad.yml"));
    }
}
