//! Build artifact collection.
//!
//! The build output directory is published verbatim: every regular file below it
//! becomes one remote object, keyed by its relative path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::{Error, Result};

/// Fallback media type for unrecognized file extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A single file produced by the build step, ready for upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactFile {
    /// Absolute path on the local filesystem.
    pub path: PathBuf,
    /// Storage key: path relative to the build output root, `/`-separated.
    pub key: String,
    /// Media type inferred from the file extension.
    pub content_type: String,
}

/// Infer a media type from a file's extension.
pub fn content_type_for(path: &Path) -> &'static str {
    mime_guess::from_path(path).first_raw().unwrap_or(OCTET_STREAM)
}

/// Compute the storage key for `path` relative to `root`.
///
/// Keys always use forward slashes, regardless of host path conventions.
pub fn storage_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        Error::Store(format!(
            "file {} is not under build output root {}",
            path.display(),
            root.display()
        ))
    })?;
    let key = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Ok(key)
}

/// Walk the build output directory and collect every regular file as an artifact.
///
/// A missing root is an error (nothing was built); an empty directory yields an
/// empty set. Entries are visited in name order within each directory so the
/// upload sequence is deterministic.
pub fn collect_artifacts(root: &Path) -> Result<Vec<ArtifactFile>> {
    if !root.is_dir() {
        return Err(Error::Store(format!(
            "build output directory {} does not exist",
            root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Store(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let key = storage_key(root, &path)?;
        let content_type = content_type_for(&path).to_string();
        files.push(ArtifactFile {
            path,
            key,
            content_type,
        });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_content_type_html() {
        assert_eq!(content_type_for(Path::new("index.html")), "text/html");
    }

    #[test]
    fn test_content_type_unknown_extension() {
        assert_eq!(content_type_for(Path::new("data.nuxtblob")), OCTET_STREAM);
        assert_eq!(content_type_for(Path::new("no_extension")), OCTET_STREAM);
    }

    #[test]
    fn test_storage_key_uses_forward_slashes() {
        let root = Path::new("/out");
        let file = Path::new("/out/assets/js/app.js");
        assert_eq!(storage_key(root, file).unwrap(), "assets/js/app.js");
    }

    #[test]
    fn test_collect_artifacts_matches_local_tree() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("index.html"));
        touch(&dir.path().join("favicon.ico"));
        touch(&dir.path().join("_nuxt/entry.js"));
        touch(&dir.path().join("_nuxt/styles/main.css"));

        let mut keys: Vec<String> = collect_artifacts(dir.path())
            .unwrap()
            .into_iter()
            .map(|f| f.key)
            .collect();
        keys.sort();

        assert_eq!(
            keys,
            vec![
                "_nuxt/entry.js",
                "_nuxt/styles/main.css",
                "favicon.ico",
                "index.html",
            ]
        );
    }

    #[test]
    fn test_collect_artifacts_empty_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_artifacts(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_collect_artifacts_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("never-built");
        assert!(collect_artifacts(&missing).is_err());
    }
}
