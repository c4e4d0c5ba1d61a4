//! Repository reference grammar.
//!
//! Accepted forms:
//!
//! - `owner/name` (GitHub)
//! - `github:owner/name`, `gitlab:owner/name`, `bitbucket:owner/name`
//! - `gitlab:custom.com:owner/name` (self-hosted origin)
//! - `direct:https://example.com/archive.tar.gz`
//! - any of the above suffixed with `#branch`
//!
//! The resolver never parses references. Only the fetcher does, so a
//! malformed reference surfaces as a fetch failure.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Result, StencilError};

static DIRECT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^direct:([^#]+)(?:#(.+))?$").expect("DIRECT_REGEX must compile")
});

static HOSTED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(github|gitlab|bitbucket):)?(?:(.+):)?([^/:]+)/([^#]+)(?:#(.+))?$")
        .expect("HOSTED_REGEX must compile")
});

/// Hosting service for a shorthand reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    GitHub,
    GitLab,
    Bitbucket,
}

impl Host {
    fn from_prefix(prefix: Option<&str>) -> Self {
        match prefix {
            Some("gitlab") => Host::GitLab,
            Some("bitbucket") => Host::Bitbucket,
            _ => Host::GitHub,
        }
    }

    /// Default origin when the reference names none.
    pub fn default_origin(&self) -> &'static str {
        match self {
            Host::GitHub => "github.com",
            Host::GitLab => "gitlab.com",
            Host::Bitbucket => "bitbucket.org",
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Host::GitHub => "github",
            Host::GitLab => "gitlab",
            Host::Bitbucket => "bitbucket",
        };
        f.write_str(name)
    }
}

/// A parsed repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoReference {
    /// A URL used as-is for both download and clone.
    Direct {
        url: String,
        checkout: Option<String>,
    },
    /// A repository on a known hosting service.
    Hosted {
        host: Host,
        origin: String,
        owner: String,
        name: String,
        checkout: Option<String>,
    },
}

impl RepoReference {
    /// Parse a reference string.
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();

        if let Some(caps) = DIRECT_REGEX.captures(reference) {
            return Ok(RepoReference::Direct {
                url: caps[1].to_string(),
                checkout: caps.get(2).map(|m| m.as_str().to_string()),
            });
        }

        let caps =
            HOSTED_REGEX
                .captures(reference)
                .ok_or_else(|| StencilError::InvalidReference {
                    reference: reference.to_string(),
                })?;

        let host = Host::from_prefix(caps.get(1).map(|m| m.as_str()));
        let origin = caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| host.default_origin().to_string());

        Ok(RepoReference::Hosted {
            host,
            origin,
            owner: caps[3].to_string(),
            name: caps[4].to_string(),
            checkout: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// Branch or tag to check out, if one was given.
    pub fn checkout(&self) -> Option<&str> {
        match self {
            RepoReference::Direct { checkout, .. } | RepoReference::Hosted { checkout, .. } => {
                checkout.as_deref()
            }
        }
    }

    /// URL of a gzipped tarball of the repository.
    pub fn archive_url(&self) -> String {
        match self {
            RepoReference::Direct { url, .. } => url.clone(),
            RepoReference::Hosted {
                host,
                origin,
                owner,
                name,
                checkout,
            } => {
                let base = format!("{}/{}/{}", with_scheme(origin), owner, name);
                match host {
                    Host::GitHub => format!(
                        "{}/archive/{}.tar.gz",
                        base,
                        checkout.as_deref().unwrap_or("HEAD")
                    ),
                    Host::GitLab => match checkout {
                        Some(r) => format!("{}/repository/archive.tar.gz?ref={}", base, r),
                        None => format!("{}/repository/archive.tar.gz", base),
                    },
                    Host::Bitbucket => format!(
                        "{}/get/{}.tar.gz",
                        base,
                        checkout.as_deref().unwrap_or("HEAD")
                    ),
                }
            }
        }
    }

    /// URL for `git clone`.
    ///
    /// Scheme-less origins use the SSH form `git@origin:owner/name.git`.
    pub fn clone_url(&self) -> String {
        match self {
            RepoReference::Direct { url, .. } => url.clone(),
            RepoReference::Hosted {
                origin,
                owner,
                name,
                ..
            } => {
                if has_scheme(origin) {
                    format!("{}/{}/{}.git", origin.trim_end_matches('/'), owner, name)
                } else {
                    format!("git@{}:{}/{}.git", origin, owner, name)
                }
            }
        }
    }
}

fn has_scheme(origin: &str) -> bool {
    let lower = origin.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("ftp://")
}

fn with_scheme(origin: &str) -> String {
    if has_scheme(origin) {
        origin.trim_end_matches('/').to_string()
    } else {
        format!("https://{}", origin)
    }
}
