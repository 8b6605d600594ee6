//! Profile source discovery and retrieval.

use crate::error::{ArgonautError, Result};
use std::future::Future;
use std::path::{Path, PathBuf};

/// File-name suffix of ARGO multi-profile files.
pub const PROFILE_SUFFIX: &str = "_prof.nc";

/// One profile file to ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    /// Float identifier the file belongs to.
    pub float_id: String,
    /// Where to fetch the bytes from.
    pub location: PathBuf,
}

impl SourceSpec {
    /// Create a source spec.
    pub fn new(float_id: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            float_id: float_id.into(),
            location: location.into(),
        }
    }

    /// Build a spec from a file path, deriving the float id from its name.
    ///
    /// `1901766_prof.nc` belongs to float `1901766`; any other file uses its
    /// stem.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let float_id = match name.strip_suffix(PROFILE_SUFFIX) {
            Some(id) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => id,
            _ => path.file_stem()?.to_str()?,
        };
        Some(Self::new(float_id, path))
    }
}

/// Retrieves raw source bytes.
pub trait SourceFetcher {
    /// Fetch the bytes at `location`.
    fn fetch(&self, location: &Path) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Reads sources from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFetcher;

impl SourceFetcher for FsFetcher {
    async fn fetch(&self, location: &Path) -> Result<Vec<u8>> {
        match tokio::fs::read(location).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ArgonautError::source_not_found(location))
            },
            Err(e) => Err(ArgonautError::transport(location.display().to_string(), e)),
        }
    }
}

/// Find profile files at `path`.
///
/// A file is used as-is. A directory is scanned (non-recursively) for
/// `<digits>_prof.nc` files, sorted by name.
pub fn discover_sources(path: &Path) -> Result<Vec<SourceSpec>> {
    if !path.exists() {
        return Err(ArgonautError::source_not_found(path));
    }

    if path.is_file() {
        return Ok(SourceSpec::from_path(path).into_iter().collect());
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(PROFILE_SUFFIX))
        })
        .collect();
    files.sort();

    let sources: Vec<SourceSpec> = files.iter().filter_map(|p| SourceSpec::from_path(p)).collect();
    tracing::info!(dir = %path.display(), count = sources.len(), "discovered profile files");
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_id_from_profile_name() {
        let spec = SourceSpec::from_path(Path::new("data/1901766_prof.nc")).unwrap();
        assert_eq!(spec.float_id, "1901766");
        assert_eq!(spec.location, PathBuf::from("data/1901766_prof.nc"));
    }

    #[test]
    fn other_names_use_the_stem() {
        let spec = SourceSpec::from_path(Path::new("/tmp/cruise_a.nc")).unwrap();
        assert_eq!(spec.float_id, "cruise_a");
        let spec = SourceSpec::from_path(Path::new("R_prof.nc")).unwrap();
        assert_eq!(spec.float_id, "R_prof");
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = discover_sources(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, ArgonautError::SourceNotFound { .. }));
    }
}
