//! Archive download over HTTP.
//!
//! Downloads a gzipped tarball and unpacks it into the destination with the
//! top-level directory stripped, so `owner-name-sha/src/main.rs` lands at
//! `<dest>/src/main.rs`.

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tar::{Archive, EntryType};

/// Default timeout for archive downloads.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads repository archives over HTTP/HTTPS.
pub struct ArchiveFetcher {
    client: Client,
    timeout: Duration,
}

impl ArchiveFetcher {
    /// Create a new archive fetcher with default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new archive fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("stencil/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download the raw archive bytes.
    pub fn download(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Downloading archive from {}", url);
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        Ok(response.bytes()?.to_vec())
    }

    /// Download an archive and unpack it into `dest`.
    ///
    /// Returns the number of files written.
    pub fn fetch_into(&self, url: &str, dest: &Path) -> Result<usize> {
        let data = self.download(url)?;
        let written = extract_tarball(&data, dest)?;
        tracing::debug!("Extracted {} files into {}", written, dest.display());
        Ok(written)
    }
}

impl Default for ArchiveFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Unpack a `.tar.gz` into `dest`, dropping the first path component.
///
/// Every write must land inside `dest`. Symlinks may only point within the
/// unpacked tree and hard links must name another entry of the archive.
///
/// Returns the number of regular files written.
pub fn extract_tarball(data: &[u8], dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let root = dest.canonicalize()?;

    let mut archive = Archive::new(GzDecoder::new(data));
    let mut written = 0;

    for entry in archive.entries()? {
        let mut entry = entry?;

        let entry_type = entry.header().entry_type();
        if matches!(
            entry_type,
            EntryType::XGlobalHeader | EntryType::XHeader | EntryType::GNULongName
        ) {
            continue;
        }

        let path = entry.path()?.into_owned();
        let Some(relative) = strip_first_component(&path)? else {
            continue;
        };

        let target = root.join(&relative);
        ensure_inside(&root, &target)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        match entry_type {
            EntryType::Symlink => {
                let link = entry
                    .link_name()?
                    .with_context(|| format!("Symlink without target: {}", path.display()))?
                    .into_owned();
                if resolve_link(&relative, &link).is_none() {
                    bail!(
                        "Refusing to unpack symlink leaving the destination: {} -> {}",
                        path.display(),
                        link.display()
                    );
                }
                entry.unpack(&target)?;
            }
            EntryType::Link => {
                let link = entry
                    .link_name()?
                    .with_context(|| format!("Hard link without target: {}", path.display()))?
                    .into_owned();
                let Some(source) = strip_first_component(&link)? else {
                    bail!("Refusing to unpack hard link to {}", link.display());
                };
                let source = root.join(source);
                ensure_inside(&root, &source)?;
                if target.symlink_metadata().is_ok() {
                    fs::remove_file(&target)?;
                }
                fs::hard_link(&source, &target)?;
                written += 1;
            }
            _ => {
                entry.unpack(&target)?;
                if entry_type.is_file() {
                    written += 1;
                }
            }
        }
    }

    if written == 0 {
        bail!("Archive contained no files");
    }

    Ok(written)
}

/// Drop the leading directory of an archive path.
///
/// Returns `None` for the top-level directory itself.
fn strip_first_component(path: &Path) -> Result<Option<PathBuf>> {
    let mut components = path.components();
    components.next();

    let mut stripped = PathBuf::new();
    for component in components {
        match component {
            Component::Normal(part) => stripped.push(part),
            Component::CurDir => {}
            _ => bail!("Refusing to unpack unsafe path: {}", path.display()),
        }
    }

    if stripped.as_os_str().is_empty() {
        Ok(None)
    } else {
        Ok(Some(stripped))
    }
}

/// Fail unless `target` resolves under `root` once existing symlinks in its
/// ancestry are followed. `root` must already be canonical.
fn ensure_inside(root: &Path, target: &Path) -> Result<()> {
    let mut existing = target.parent();
    while let Some(dir) = existing {
        if dir.exists() {
            let resolved = dir.canonicalize()?;
            if !resolved.starts_with(root) {
                bail!(
                    "Refusing to unpack outside the destination: {}",
                    target.display()
                );
            }
            return Ok(());
        }
        existing = dir.parent();
    }

    bail!(
        "Refusing to unpack outside the destination: {}",
        target.display()
    )
}

/// Resolve a symlink target against the link's own location, both relative
/// to the unpacked tree. `None` when the target is absolute or climbs above
/// the tree.
fn resolve_link(link_path: &Path, target: &Path) -> Option<PathBuf> {
    let mut resolved: Vec<&std::ffi::OsStr> = link_path
        .parent()
        .map(|p| {
            p.components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    for component in target.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop()?;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(resolved.into_iter().collect())
}
