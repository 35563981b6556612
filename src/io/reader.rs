use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::error::Result;

/// File extensions eligible for processing, matched case-insensitively.
/// Note `.tiff` is not on the list; only the short `.tif` form is accepted.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "bmp", "webp"];

/// Whether `path` carries a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Decode an image file and normalize it to 8-bit three-channel RGB.
pub fn read_rgb_image(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path)?;
    debug!(
        "Decoded {}: {}x{} {:?}",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_supported_image(&PathBuf::from("a.jpg")));
        assert!(is_supported_image(&PathBuf::from("b.JPEG")));
        assert!(is_supported_image(&PathBuf::from("c.Png")));
        assert!(is_supported_image(&PathBuf::from("d.TIF")));
        assert!(is_supported_image(&PathBuf::from("e.bmp")));
        assert!(is_supported_image(&PathBuf::from("f.WebP")));
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        assert!(!is_supported_image(&PathBuf::from("a.tiff")));
        assert!(!is_supported_image(&PathBuf::from("b.gif")));
        assert!(!is_supported_image(&PathBuf::from("c.txt")));
        assert!(!is_supported_image(&PathBuf::from("noextension")));
        assert!(!is_supported_image(&PathBuf::from(".jpg")));
    }

    #[test]
    fn decode_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not a jpeg at all").unwrap();
        assert!(read_rgb_image(&path).is_err());
        assert!(read_rgb_image(&dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn decode_normalizes_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let gray = image::GrayImage::from_pixel(6, 4, image::Luma([128u8]));
        gray.save(&path).unwrap();

        let rgb = read_rgb_image(&path).unwrap();
        assert_eq!(rgb.dimensions(), (6, 4));
        assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([128u8, 128, 128]));
    }
}
