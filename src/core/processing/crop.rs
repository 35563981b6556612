use crate::types::AspectRatio;

/// A crop region in source-pixel space. Bounds are half-open: the region
/// covers columns `[left, left + width)` and rows `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// True when the region spans the whole `width` x `height` source.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.width == width && self.height == height
    }
}

/// Largest centered region of a `width` x `height` source whose shape is
/// `ratio`, without exceeding the source bounds.
///
/// The wider/taller comparison and the floor of the trimmed side are done
/// with integer cross-multiplication, so a source already at the target
/// ratio comes back as exactly the full image. When the source is
/// relatively wider the region keeps full height and trims the sides;
/// otherwise it keeps full width and trims top/bottom. Extreme ratios that
/// would floor a side to zero are clamped to a 1 px band.
pub fn center_crop_rect(width: u32, height: u32, ratio: AspectRatio) -> CropRect {
    let w = width as u64;
    let h = height as u64;
    let aw = ratio.w as u64;
    let ah = ratio.h as u64;

    if w * ah > h * aw {
        // Width-limited: W/H > aw/ah.
        let new_width = ((h * aw / ah) as u32).max(1);
        let left = (width - new_width) / 2;
        CropRect {
            left,
            top: 0,
            width: new_width,
            height,
        }
    } else {
        // Height-limited, or already at the ratio (full image).
        let new_height = ((w * ah / aw) as u32).max(1);
        let top = (height - new_height) / 2;
        CropRect {
            left: 0,
            top,
            width,
            height: new_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_source_portrait_ratio_trims_width() {
        // 4000x3000 at 4:5 is width-limited: floor(3000 * 4/5) = 2400.
        let rect = center_crop_rect(4000, 3000, AspectRatio::new(4, 5));
        assert_eq!(
            rect,
            CropRect {
                left: 800,
                top: 0,
                width: 2400,
                height: 3000
            }
        );
        assert_eq!(rect.right(), 3200);
        assert_eq!(rect.bottom(), 3000);
    }

    #[test]
    fn portrait_source_portrait_ratio_trims_height() {
        // 3000x4000 at 4:5 is height-limited: floor(3000 * 5/4) = 3750.
        let rect = center_crop_rect(3000, 4000, AspectRatio::new(4, 5));
        assert_eq!(
            rect,
            CropRect {
                left: 0,
                top: 125,
                width: 3000,
                height: 3750
            }
        );
        assert_eq!(rect.bottom(), 3875);
    }

    #[test]
    fn exact_ratio_is_a_no_op() {
        let rect = center_crop_rect(4000, 5000, AspectRatio::new(4, 5));
        assert!(rect.covers(4000, 5000));

        let rect = center_crop_rect(1920, 1080, AspectRatio::new(16, 9));
        assert!(rect.covers(1920, 1080));

        // Same shape expressed with non-reduced terms.
        let rect = center_crop_rect(1920, 1080, AspectRatio::new(32, 18));
        assert!(rect.covers(1920, 1080));
    }

    #[test]
    fn square_ratio_on_landscape_keeps_height() {
        let rect = center_crop_rect(300, 200, AspectRatio::new(1, 1));
        assert_eq!(
            rect,
            CropRect {
                left: 50,
                top: 0,
                width: 200,
                height: 200
            }
        );
    }

    #[test]
    fn odd_margin_splits_toward_origin() {
        // 101x100 at 1:1 trims one column; floor centering puts it left.
        let rect = center_crop_rect(101, 100, AspectRatio::new(1, 1));
        assert_eq!(rect.left, 0);
        assert_eq!(rect.width, 100);
        assert_eq!(rect.right(), 100);
    }

    #[test]
    fn extreme_ratio_clamps_to_one_pixel() {
        let rect = center_crop_rect(100, 1, AspectRatio::new(1, 100));
        assert_eq!(rect.width, 1);
        assert_eq!(rect.height, 1);
        assert!(rect.right() <= 100);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (32u32..=4096, 32u32..=4096)
    }

    fn ratio_strategy() -> impl Strategy<Value = AspectRatio> {
        (1u32..=21, 1u32..=21).prop_map(|(w, h)| AspectRatio::new(w, h))
    }

    proptest! {
        /// The region always lies within the source bounds.
        #[test]
        fn prop_region_within_bounds(
            (width, height) in dimensions_strategy(),
            ratio in ratio_strategy(),
        ) {
            let rect = center_crop_rect(width, height, ratio);
            prop_assert!(rect.width >= 1 && rect.height >= 1);
            prop_assert!(rect.right() <= width);
            prop_assert!(rect.bottom() <= height);
        }

        /// The trimmed side is the exact floor of the ideal real-valued
        /// extent: within one pixel of the target ratio, never over it.
        #[test]
        fn prop_region_ratio_within_one_pixel(
            (width, height) in dimensions_strategy(),
            ratio in ratio_strategy(),
        ) {
            let rect = center_crop_rect(width, height, ratio);
            let aw = ratio.w as u64;
            let ah = ratio.h as u64;

            if rect.height == height {
                // Width-limited (or no-op): width = floor(height * aw/ah).
                let w = rect.width as u64;
                prop_assert!(w * ah <= height as u64 * aw);
                prop_assert!((w + 1) * ah > height as u64 * aw);
            } else {
                // Height-limited: height = floor(width * ah/aw).
                let h = rect.height as u64;
                prop_assert!(h * aw <= width as u64 * ah);
                prop_assert!((h + 1) * aw > width as u64 * ah);
            }
        }

        /// The trim is split evenly, favoring the origin by at most one pixel.
        #[test]
        fn prop_region_is_centered(
            (width, height) in dimensions_strategy(),
            ratio in ratio_strategy(),
        ) {
            let rect = center_crop_rect(width, height, ratio);
            let right_margin = width - rect.right();
            let bottom_margin = height - rect.bottom();
            prop_assert!(right_margin as i64 - rect.left as i64 <= 1);
            prop_assert!(rect.left <= right_margin);
            prop_assert!(bottom_margin as i64 - rect.top as i64 <= 1);
            prop_assert!(rect.top <= bottom_margin);
        }

        /// A source already at the target ratio comes back unchanged.
        #[test]
        fn prop_exact_ratio_returns_full_image(
            scale in 1u32..=200,
            ratio in ratio_strategy(),
        ) {
            let width = ratio.w * scale;
            let height = ratio.h * scale;
            let rect = center_crop_rect(width, height, ratio);
            prop_assert!(rect.covers(width, height));
        }
    }
}
