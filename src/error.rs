use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a folder or turning a file into a tile
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("cannot list folder {path}: {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a readable image: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl GalleryError {
    /// The file or folder the error is about
    pub fn path(&self) -> &PathBuf {
        match self {
            GalleryError::Listing { path, .. }
            | GalleryError::Open { path, .. }
            | GalleryError::Decode { path, .. } => path,
        }
    }
}
