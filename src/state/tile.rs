use std::path::{Path, PathBuf};

use crate::error::GalleryError;
use crate::media::thumbnail::{decode_thumbnail, Thumbnail};

/// Stable identifier of a tile inside its gallery.
/// Messages carry this instead of a closure per button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

/// One imported image: thumbnail, name label and hide/unhide toggle
#[derive(Debug, Clone)]
pub struct ImageTile {
    id: TileId,
    source_path: PathBuf,
    display_name: String,
    thumbnail: Thumbnail,
    hidden: bool,
}

impl ImageTile {
    /// Decode `source_path` and build a visible tile for it
    pub fn create(id: TileId, source_path: impl Into<PathBuf>) -> Result<Self, GalleryError> {
        let source_path = source_path.into();
        let thumbnail = decode_thumbnail(&source_path)?;
        let display_name = display_name_for(&source_path);

        Ok(ImageTile {
            id,
            source_path,
            display_name,
            thumbnail,
            hidden: false,
        })
    }

    /// The same tile under the id its gallery hands out
    pub fn with_id(self, id: TileId) -> Self {
        ImageTile { id, ..self }
    }

    /// Flip between hidden and visible.
    /// A hidden tile keeps its slot, name and toggle; only the thumbnail goes.
    pub fn toggle_visibility(&mut self) {
        self.hidden = !self.hidden;
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Label for the toggle button in the current state
    pub fn toggle_label(&self) -> &'static str {
        if self.hidden {
            "Unhide"
        } else {
            "Hide"
        }
    }
}

/// File name without directory and extension, e.g. `/a/IMG_01.JPG` -> `IMG_01`
pub fn display_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
