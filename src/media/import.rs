use std::path::PathBuf;

use log::{info, warn};
use tokio::task;

use super::scan;
use crate::state::tile::{ImageTile, TileId};

/// Result of a folder import operation
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub folder: PathBuf,
    /// Decoded tiles, in listing order. Their ids are provisional
    /// until the gallery adopts them.
    pub images: Vec<ImageTile>,
    /// Files with a supported extension that could not be decoded
    pub failed: Vec<PathBuf>,
}

/// Load every supported image directly inside `folder`.
/// Decoding is CPU-bound, so it runs on the blocking pool.
pub async fn load_folder(folder: PathBuf) -> Result<ImportReport, String> {
    task::spawn_blocking(move || load_folder_blocking(folder))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of the folder import
fn load_folder_blocking(folder: PathBuf) -> Result<ImportReport, String> {
    info!("🔍 Scanning folder: {}", folder.display());

    let files = scan::list_supported(&folder).map_err(|e| e.to_string())?;

    let mut images = Vec::with_capacity(files.len());
    let mut failed = Vec::new();

    for path in files {
        match ImageTile::create(TileId(images.len()), path) {
            Ok(image) => images.push(image),
            Err(err) => {
                // A bad file never aborts the rest of the folder
                warn!("⚠️  Skipping {}", err);
                failed.push(err.path().clone());
            }
        }
    }

    info!(
        "✅ Loaded {} images from {}, {} failed",
        images.len(),
        folder.display(),
        failed.len()
    );

    Ok(ImportReport {
        folder,
        images,
        failed,
    })
}
