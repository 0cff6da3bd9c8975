//! Helpers shared by the unit tests

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// A scratch directory, removed again when dropped
pub struct TempDir {
    dir: tempfile::TempDir,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("image-organizer-{}-", label))
            .tempdir()
            .expect("failed to create temp dir");
        TempDir { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        self.write_bytes(name, b"")
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    /// Write a real, decodable image; the format follows the extension
    pub fn write_image(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.path().join(name);
        let ext = path.extension().unwrap().to_string_lossy().to_lowercase();
        let format = ImageFormat::from_extension(&ext).unwrap();

        let rgb = RgbImage::from_fn(width, height, |x, y| Rgb([(x * 7) as u8, (y * 13) as u8, 90]));
        let img = match format {
            ImageFormat::Gif | ImageFormat::WebP => DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(rgb).to_rgba8()),
            _ => DynamicImage::ImageRgb8(rgb),
        };

        img.save_with_format(&path, format).unwrap();
        path
    }
}
