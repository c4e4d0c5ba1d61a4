//! Repository retrieval.
//!
//! The [`Fetcher`] trait is the single seam between the command surface and
//! the network. [`RepoFetcher`] is the real implementation: it parses the
//! repository reference and either downloads an archive or runs `git clone`.
//!
//! One fetch runs per process. There are no retries and nothing is rolled
//! back on failure; the destination is left as the transport left it.

pub mod git;
pub mod http;

pub use git::GitFetcher;
pub use http::{extract_tarball, ArchiveFetcher, DEFAULT_TIMEOUT};

use std::time::Duration;

use crate::error::{Result, StencilError};
use crate::registry::{RepoReference, ResolvedTarget};

/// Retrieves a resolved repository into its destination directory.
pub trait Fetcher {
    /// Fetch the target. Any failure is reported as a single error.
    fn fetch(&self, target: &ResolvedTarget) -> Result<()>;
}

/// Default fetcher: archive download, or `git clone` in clone mode.
pub struct RepoFetcher {
    archive: ArchiveFetcher,
    git: GitFetcher,
}

impl RepoFetcher {
    /// Create a fetcher with the default download timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom download timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            archive: ArchiveFetcher::with_timeout(timeout),
            git: GitFetcher::new(),
        }
    }

    /// Get the archive download timeout.
    pub fn timeout(&self) -> Duration {
        self.archive.timeout()
    }

    fn fetch_reference(&self, target: &ResolvedTarget) -> anyhow::Result<()> {
        let reference = RepoReference::parse(&target.reference)?;

        if target.clone {
            let url = reference.clone_url();
            tracing::debug!("Cloning {} into {}", url, target.destination.display());
            self.git
                .clone_into(&url, &target.destination, reference.checkout())
        } else {
            let url = reference.archive_url();
            self.archive.fetch_into(&url, &target.destination)?;
            Ok(())
        }
    }
}

impl Default for RepoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for RepoFetcher {
    fn fetch(&self, target: &ResolvedTarget) -> Result<()> {
        self.fetch_reference(target)
            .map_err(|e| StencilError::FetchFailed {
                reference: target.reference.clone(),
                message: format!("{:#}", e),
            })
    }
}
