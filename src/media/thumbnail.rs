use std::path::Path;

use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage, ImageReader};

use crate::config::THUMBNAIL_BOX;
use crate::error::GalleryError;

/// A decoded, downscaled image ready to be drawn
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Compute the size of an image shrunk to fit inside a `max_box` square.
///
/// The aspect ratio is kept, images already inside the box are left
/// alone, and neither side drops below one pixel.
pub fn fit_within(width: u32, height: u32, max_box: u32) -> (u32, u32) {
    if width <= max_box && height <= max_box {
        return (width, height);
    }

    let scale = (max_box as f64 / width as f64).min(max_box as f64 / height as f64);
    let fit = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max_box);

    (fit(width), fit(height))
}

/// Decode an image file and shrink it into a thumbnail
pub fn decode_thumbnail(path: &Path) -> Result<Thumbnail, GalleryError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| GalleryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let img = reader.decode().map_err(|source| GalleryError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(shrink(img))
}

fn shrink(img: DynamicImage) -> Thumbnail {
    let (width, height) = fit_within(img.width(), img.height(), THUMBNAIL_BOX);

    let img = if (width, height) == (img.width(), img.height()) {
        img
    } else {
        img.resize_exact(width, height, FilterType::Lanczos3)
    };

    let rgba = img.into_rgba8();
    Thumbnail {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempDir;

    #[test]
    fn test_fit_within_keeps_aspect() {
        assert_eq!(fit_within(300, 150, 150), (150, 75));
        assert_eq!(fit_within(150, 600, 150), (38, 150));
        assert_eq!(fit_within(1000, 1000, 150), (150, 150));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(40, 20, 150), (40, 20));
        assert_eq!(fit_within(150, 150, 150), (150, 150));
    }

    #[test]
    fn test_fit_within_keeps_thin_images_visible() {
        assert_eq!(fit_within(3000, 1, 150), (150, 1));
    }

    #[test]
    fn test_decode_thumbnail_shrinks() {
        let dir = TempDir::new("thumb-shrink");
        let path = dir.write_image("wide.png", 300, 150);

        let thumb = decode_thumbnail(&path).unwrap();
        assert_eq!((thumb.width, thumb.height), (150, 75));
    }

    #[test]
    fn test_decode_thumbnail_rejects_garbage() {
        let dir = TempDir::new("thumb-garbage");
        let path = dir.write_bytes("broken.png", b"definitely not a png");

        let err = decode_thumbnail(&path).unwrap_err();
        assert!(matches!(err, GalleryError::Decode { .. }));
    }

    #[test]
    fn test_decode_thumbnail_missing_file() {
        let dir = TempDir::new("thumb-missing");

        let err = decode_thumbnail(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, GalleryError::Open { .. }));
    }
}
