//! Curated print catalog: the aspect ratios on offer and the physical
//! sizes sold for each, plus the classic four-print set.
use crate::types::{AspectRatio, PrintSize, TargetList};

/// Aspect ratios offered by the catalog, in menu order.
pub const RATIOS: [AspectRatio; 8] = [
    AspectRatio::new(1, 1),
    AspectRatio::new(4, 5),
    AspectRatio::new(2, 3),
    AspectRatio::new(3, 4),
    AspectRatio::new(5, 7),
    AspectRatio::new(16, 9),
    AspectRatio::new(9, 16),
    AspectRatio::new(16, 10),
];

const SIZES_1X1: [PrintSize; 9] = [
    PrintSize::new(5, 5),
    PrintSize::new(8, 8),
    PrintSize::new(10, 10),
    PrintSize::new(12, 12),
    PrintSize::new(16, 16),
    PrintSize::new(20, 20),
    PrintSize::new(24, 24),
    PrintSize::new(30, 30),
    PrintSize::new(36, 36),
];

// 11x14 is the one non-proportional entry; it is a standard print size
// and the slight stretch at resize time is accepted.
const SIZES_4X5: [PrintSize; 7] = [
    PrintSize::new(4, 5),
    PrintSize::new(8, 10),
    PrintSize::new(11, 14),
    PrintSize::new(16, 20),
    PrintSize::new(20, 25),
    PrintSize::new(24, 30),
    PrintSize::new(32, 40),
];

const SIZES_2X3: [PrintSize; 8] = [
    PrintSize::new(2, 3),
    PrintSize::new(4, 6),
    PrintSize::new(8, 12),
    PrintSize::new(12, 18),
    PrintSize::new(16, 24),
    PrintSize::new(20, 30),
    PrintSize::new(24, 36),
    PrintSize::new(30, 45),
];

const SIZES_3X4: [PrintSize; 7] = [
    PrintSize::new(3, 4),
    PrintSize::new(6, 8),
    PrintSize::new(9, 12),
    PrintSize::new(12, 16),
    PrintSize::new(18, 24),
    PrintSize::new(24, 32),
    PrintSize::new(30, 40),
];

const SIZES_5X7: [PrintSize; 6] = [
    PrintSize::new(5, 7),
    PrintSize::new(10, 14),
    PrintSize::new(15, 21),
    PrintSize::new(20, 28),
    PrintSize::new(25, 35),
    PrintSize::new(30, 42),
];

const SIZES_16X9: [PrintSize; 4] = [
    PrintSize::new(16, 9),
    PrintSize::new(32, 18),
    PrintSize::new(48, 27),
    PrintSize::new(64, 36),
];

const SIZES_9X16: [PrintSize; 4] = [
    PrintSize::new(9, 16),
    PrintSize::new(18, 32),
    PrintSize::new(27, 48),
    PrintSize::new(36, 64),
];

const SIZES_16X10: [PrintSize; 4] = [
    PrintSize::new(16, 10),
    PrintSize::new(32, 20),
    PrintSize::new(48, 30),
    PrintSize::new(64, 40),
];

/// Physical sizes offered for a catalog ratio; empty for unknown ratios.
pub fn sizes_for(ratio: AspectRatio) -> &'static [PrintSize] {
    match (ratio.w, ratio.h) {
        (1, 1) => &SIZES_1X1,
        (4, 5) => &SIZES_4X5,
        (2, 3) => &SIZES_2X3,
        (3, 4) => &SIZES_3X4,
        (5, 7) => &SIZES_5X7,
        (16, 9) => &SIZES_16X9,
        (9, 16) => &SIZES_9X16,
        (16, 10) => &SIZES_16X10,
        _ => &[],
    }
}

/// The classic four-print set from the fixed-ratio edition:
/// 16x20, 18x24, 24x36 and 5x7 inch prints at their native ratios.
pub fn classic_targets() -> TargetList {
    let mut targets = TargetList::new();
    targets.add(AspectRatio::new(4, 5), PrintSize::new(16, 20));
    targets.add(AspectRatio::new(3, 4), PrintSize::new(18, 24));
    targets.add(AspectRatio::new(2, 3), PrintSize::new(24, 36));
    targets.add(AspectRatio::new(5, 7), PrintSize::new(5, 7));
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ratio_has_sizes() {
        for ratio in RATIOS {
            assert!(!sizes_for(ratio).is_empty(), "no sizes for {ratio}");
        }
        assert!(sizes_for(AspectRatio::new(7, 11)).is_empty());
    }

    #[test]
    fn catalog_sizes_are_proportional_except_11x14() {
        for ratio in RATIOS {
            for size in sizes_for(ratio) {
                if *size == PrintSize::new(11, 14) {
                    assert!(!size.matches_ratio(ratio));
                } else {
                    assert!(size.matches_ratio(ratio), "{size} does not match {ratio}");
                }
            }
        }
    }

    #[test]
    fn classic_set_has_four_targets() {
        let targets = classic_targets();
        assert_eq!(targets.len(), 4);
        let pixel_dims: Vec<(u32, u32)> = targets
            .iter()
            .map(|t| (t.size.pixel_width(), t.size.pixel_height()))
            .collect();
        assert_eq!(
            pixel_dims,
            vec![(4800, 6000), (5400, 7200), (7200, 10800), (1500, 2100)]
        );
    }
}
