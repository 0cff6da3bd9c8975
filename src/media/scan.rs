use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::GalleryError;

/// File extensions accepted by the importer, lowercase without the dot
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Check whether a path carries one of the supported extensions.
/// Only the name is looked at, the content is never sniffed.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// List the supported image files directly inside `folder`.
///
/// Subfolders are not entered. Files come back ordered by name,
/// ignoring case, so `a.png` sorts before `C.JPG`.
pub fn list_supported(folder: &Path) -> Result<Vec<PathBuf>, GalleryError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by(compare_names);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // The folder itself is unreadable
            Err(err) if err.depth() == 0 => {
                return Err(GalleryError::Listing {
                    path: folder.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!("Skipping unreadable entry in {}: {}", folder.display(), err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if is_supported(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn compare_names(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a = a.file_name().to_string_lossy();
    let b = b.file_name().to_string_lossy();
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempDir;
    use pretty_assertions::assert_eq;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_is_supported_ignores_case() {
        assert!(is_supported(Path::new("/photos/PHOTO.JPG")));
        assert!(is_supported(Path::new("shot.WebP")));
        assert!(is_supported(Path::new("scan.bmp")));
        assert!(!is_supported(Path::new("doc.txt")));
        assert!(!is_supported(Path::new("png")));
        assert!(!is_supported(Path::new("archive.png.zip")));
    }

    #[test]
    fn test_list_filters_by_extension() {
        let dir = TempDir::new("scan-filter");
        for name in ["a.png", "b.txt", "C.JPG", "d.gif"] {
            dir.touch(name);
        }

        let files = list_supported(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.png", "C.JPG", "d.gif"]);
        assert!(files.iter().all(|p| p.starts_with(dir.path())));
    }

    #[test]
    fn test_list_does_not_recurse() {
        let dir = TempDir::new("scan-flat");
        dir.touch("top.jpeg");
        dir.mkdir("nested.png");
        dir.touch("nested.png/inner.png");

        let files = list_supported(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["top.jpeg"]);
    }

    #[test]
    fn test_list_missing_folder_fails() {
        let dir = TempDir::new("scan-missing");
        let missing = dir.path().join("does-not-exist");

        let err = list_supported(&missing).unwrap_err();
        assert!(matches!(err, GalleryError::Listing { .. }));
        assert_eq!(err.path(), &missing);
    }
}
