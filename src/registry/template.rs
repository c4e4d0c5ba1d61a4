//! Template entry definitions.
//!
//! A template is a named pointer to a remote repository that serves as the
//! starting point for a new project.

use serde::{Deserialize, Serialize};

/// A single entry in the template registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Template name (must be unique within a registry)
    pub name: String,

    /// Repository reference handed to the fetcher, e.g. `owner/name`
    pub repository: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Related technologies, shown by `stencil list --verbose`
    #[serde(default)]
    pub relations: Vec<String>,
}

impl TemplateEntry {
    /// Create an entry with no description or relations.
    pub fn new(name: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
            description: String::new(),
            relations: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the relations.
    pub fn with_relations<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relations = relations.into_iter().map(Into::into).collect();
        self
    }

    /// Relations joined for display.
    pub fn relations_display(&self) -> String {
        self.relations.join(", ")
    }
}
