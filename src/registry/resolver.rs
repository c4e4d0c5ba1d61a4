//! Template registry and repository resolution.
//!
//! A template argument resolves to the mapped repository reference when it
//! names a registry entry, and to itself otherwise. Whether the result is a
//! usable reference is left entirely to the fetcher.

use crate::error::{Result, StencilError};
use crate::registry::builtin;
use crate::registry::local;
use crate::registry::manifest::RegistryManifest;
use crate::registry::template::TemplateEntry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Read-only mapping from template name to repository reference.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<TemplateEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Load the built-in registry.
    pub fn builtin() -> Result<Self> {
        Self::from_manifest(builtin::load_manifest()?)
    }

    /// Load a registry from a manifest file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_manifest(local::load_manifest_file(path)?)
    }

    /// Parse a registry from YAML. `origin` labels parse errors.
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self> {
        Self::from_manifest(RegistryManifest::parse(content, origin)?)
    }

    /// Build a registry from a parsed manifest.
    pub fn from_manifest(manifest: RegistryManifest) -> Result<Self> {
        Self::from_entries(manifest.templates)
    }

    /// Build a registry from entries, preserving their order.
    ///
    /// Fails on the first duplicated name.
    pub fn from_entries(entries: Vec<TemplateEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(StencilError::DuplicateTemplate {
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self { entries, index })
    }

    /// Look up the repository reference for a template name.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(|e| e.repository.as_str())
    }

    /// Get a template entry by name.
    pub fn get(&self, name: &str) -> Option<&TemplateEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Check if a template exists.
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in configuration order.
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// All template names in configuration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no templates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a template argument to a repository reference.
    pub fn resolve(&self, template: &str) -> String {
        resolve(self, template)
    }
}

/// Resolve a template argument against a registry.
///
/// Registered names map to their repository; anything else is returned
/// unchanged and treated as a direct repository reference.
pub fn resolve(registry: &Registry, template: &str) -> String {
    match registry.lookup(template) {
        Some(repository) => {
            tracing::debug!("Resolved template '{}' to {}", template, repository);
            repository.to_string()
        }
        None => {
            tracing::debug!("'{}' is not a registered template, using as-is", template);
            template.to_string()
        }
    }
}

/// What `create` hands to the fetcher for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Repository reference to retrieve.
    pub reference: String,
    /// Directory the content lands in.
    pub destination: PathBuf,
    /// Use a git clone instead of an archive download.
    pub clone: bool,
}

impl ResolvedTarget {
    /// Create a new target.
    pub fn new(reference: impl Into<String>, destination: impl Into<PathBuf>, clone: bool) -> Self {
        Self {
            reference: reference.into(),
            destination: destination.into(),
            clone,
        }
    }
}
