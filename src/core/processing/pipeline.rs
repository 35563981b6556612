use image::RgbImage;
use tracing::debug;

use crate::core::processing::crop::center_crop_rect;
use crate::core::processing::resize::resize_rgb_region;
use crate::error::Result;
use crate::types::PrintTarget;

/// A rendered print: an exact target-pixel RGB buffer ready for encoding.
#[derive(Debug, Clone)]
pub struct RenderedPrint {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Run the crop-and-resize pipeline for one target: center-crop the source
/// to the target ratio, then resample the region to `size * dpi` pixels.
pub fn render_print(source: &RgbImage, target: PrintTarget, dpi: u16) -> Result<RenderedPrint> {
    let (src_width, src_height) = source.dimensions();
    let region = center_crop_rect(src_width, src_height, target.ratio);
    let (target_width, target_height) = target.size.pixel_dimensions(dpi);

    debug!(
        "Crop {}x{} to [{},{} {}x{}], resample to {}x{}",
        src_width,
        src_height,
        region.left,
        region.top,
        region.width,
        region.height,
        target_width,
        target_height
    );

    let pixels = resize_rgb_region(
        source.as_raw(),
        src_width,
        src_height,
        region,
        target_width,
        target_height,
    )?;

    Ok(RenderedPrint {
        width: target_width,
        height: target_height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AspectRatio, DPI, PrintSize};

    fn gradient_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    #[test]
    fn output_is_exactly_inches_times_dpi() {
        let source = gradient_image(40, 30);
        let target = PrintTarget::new(AspectRatio::new(4, 5), PrintSize::new(4, 5));
        let print = render_print(&source, target, DPI).unwrap();
        assert_eq!((print.width, print.height), (1200, 1500));
        assert_eq!(print.pixels.len(), 1200 * 1500 * 3);
    }

    #[test]
    fn upscale_and_downscale_both_hit_target() {
        let source = gradient_image(4000, 3000);
        let target = PrintTarget::new(AspectRatio::new(5, 7), PrintSize::new(5, 7));
        let print = render_print(&source, target, DPI).unwrap();
        assert_eq!((print.width, print.height), (1500, 2100));

        let small = gradient_image(50, 70);
        let print = render_print(&small, target, DPI).unwrap();
        assert_eq!((print.width, print.height), (1500, 2100));
    }
}
