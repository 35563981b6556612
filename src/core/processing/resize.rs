use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};

use crate::core::processing::crop::CropRect;
use crate::error::Result;

/// Resample a region of an interleaved RGB buffer to exactly
/// `target_width` x `target_height` pixels with Lanczos3 convolution.
///
/// The crop region and the resample run as one pass: the resizer reads only
/// `region` of the source. No aspect correction happens here; callers
/// guarantee the region shape matches the target shape.
pub fn resize_rgb_region(
    pixels: &[u8],
    src_width: u32,
    src_height: u32,
    region: CropRect,
    target_width: u32,
    target_height: u32,
) -> Result<Vec<u8>> {
    let src_image = Image::from_vec_u8(src_width, src_height, pixels.to_vec(), PixelType::U8x3)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x3);

    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .crop(
            region.left as f64,
            region.top as f64,
            region.width as f64,
            region.height as f64,
        );
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_rgb(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgb);
        }
        pixels
    }

    #[test]
    fn output_buffer_matches_target_dimensions() {
        let src = flat_rgb(40, 30, [10, 20, 30]);
        let region = CropRect {
            left: 8,
            top: 0,
            width: 24,
            height: 30,
        };
        let out = resize_rgb_region(&src, 40, 30, region, 120, 150).unwrap();
        assert_eq!(out.len(), 120 * 150 * 3);
    }

    #[test]
    fn flat_color_survives_resampling() {
        let src = flat_rgb(16, 16, [200, 100, 50]);
        let region = CropRect {
            left: 0,
            top: 0,
            width: 16,
            height: 16,
        };
        let out = resize_rgb_region(&src, 16, 16, region, 64, 64).unwrap();
        // Lanczos over a constant field stays constant.
        for px in out.chunks_exact(3) {
            assert_eq!(px, [200, 100, 50]);
        }
    }

    #[test]
    fn bad_buffer_length_is_an_error() {
        let region = CropRect {
            left: 0,
            top: 0,
            width: 10,
            height: 10,
        };
        assert!(resize_rgb_region(&[0u8; 7], 10, 10, region, 20, 20).is_err());
    }
}
