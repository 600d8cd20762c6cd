use std::path::PathBuf;

use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display)]
pub enum AssetKind {
    #[strum(to_string = "Logo")]
    Logo,
    #[strum(to_string = "Banner")]
    Banner,
    #[strum(to_string = "Audio")]
    Audio,
}

/// Opaque handle to a user-picked file. The wizard never reads it; the
/// submission collaborator uploads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub path: PathBuf,
}

impl LocalFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// A media slot holds a URL or a local file, never both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetSource {
    #[default]
    Unset,
    Remote(String),
    Local(LocalFile),
}

impl AssetSource {
    /// Blank URLs collapse to `Unset`.
    pub fn remote(url: impl Into<String>) -> Self {
        let url = url.into();
        if url.trim().is_empty() {
            AssetSource::Unset
        } else {
            AssetSource::Remote(url.trim().to_string())
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            AssetSource::Remote(url) => Some(url),
            _ => None,
        }
    }

    pub fn local_file(&self) -> Option<&LocalFile> {
        match self {
            AssetSource::Local(file) => Some(file),
            _ => None,
        }
    }
}

/// Local files handed to the submission collaborator beside the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchAssets {
    pub logo: Option<LocalFile>,
    pub banner: Option<LocalFile>,
    pub audio: Option<LocalFile>,
}
