//! Git clone transport.
//!
//! Shells out to the `git` binary on PATH, the same way a user would clone
//! by hand, so SSH keys and credential helpers keep working.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Clones repositories with `git`.
#[derive(Debug, Clone, Default)]
pub struct GitFetcher;

impl GitFetcher {
    /// Create a fetcher that runs `git` from PATH.
    pub fn new() -> Self {
        Self
    }

    /// Shallow-clone `url` into `dest`, optionally at a branch or tag.
    ///
    /// The template's history is dropped: `dest` ends up without a `.git`
    /// directory, just like an unpacked archive.
    pub fn clone_into(&self, url: &str, dest: &Path, checkout: Option<&str>) -> Result<()> {
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut cmd = Command::new("git");
        cmd.args(["clone", "--depth", "1"]);

        if let Some(r) = checkout {
            cmd.args(["--branch", r]);
        }

        cmd.arg(url).arg(dest);

        tracing::debug!("Running {:?}", cmd);
        let output = cmd.output().context("Failed to run git")?;
        if !output.status.success() {
            bail!(
                "Git clone failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let git_dir = dest.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir)
                .with_context(|| format!("Failed to remove {}", git_dir.display()))?;
        }

        Ok(())
    }
}
