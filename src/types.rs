//! Shared types used across PRINTCROP.
//! Includes `AspectRatio`, `PrintSize`, `PrintTarget`, the accumulating
//! `TargetList`, and the fixed output constants (`DPI`, `JPEG_QUALITY`).
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Output resolution embedded in saved prints, dots per inch.
pub const DPI: u16 = 300;

/// JPEG quality for saved prints.
pub const JPEG_QUALITY: u8 = 95;

/// A print aspect ratio expressed as a pair of small positive integers,
/// e.g. 4:5. Names a shape, not a size.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct AspectRatio {
    pub w: u32,
    pub h: u32,
}

impl AspectRatio {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Filename-friendly form, e.g. `4x5`.
    pub fn slug(&self) -> String {
        format!("{}x{}", self.w, self.h)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.w, self.h)
    }
}

impl FromStr for AspectRatio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidRatio {
            value: s.to_string(),
        };
        let (w, h) = s.split_once(':').ok_or_else(invalid)?;
        let w: u32 = w.trim().parse().map_err(|_| invalid())?;
        let h: u32 = h.trim().parse().map_err(|_| invalid())?;
        if w == 0 || h == 0 {
            return Err(invalid());
        }
        Ok(Self::new(w, h))
    }
}

/// A physical print size in whole inches, e.g. 16x20.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PrintSize {
    pub width_in: u32,
    pub height_in: u32,
}

impl PrintSize {
    pub const fn new(width_in: u32, height_in: u32) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    /// Absolute pixel target at the given resolution.
    pub fn pixel_dimensions(&self, dpi: u16) -> (u32, u32) {
        (self.width_in * dpi as u32, self.height_in * dpi as u32)
    }

    pub fn pixel_width(&self) -> u32 {
        self.width_in * DPI as u32
    }

    pub fn pixel_height(&self) -> u32 {
        self.height_in * DPI as u32
    }

    /// Whether this size is exactly proportional to `ratio`. The curated
    /// catalog contains one deliberate exception (11x14 under 4:5), so this
    /// is advisory rather than enforced.
    pub fn matches_ratio(&self, ratio: AspectRatio) -> bool {
        (self.width_in as u64) * (ratio.h as u64) == (self.height_in as u64) * (ratio.w as u64)
    }
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width_in, self.height_in)
    }
}

impl FromStr for PrintSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidSize {
            value: s.to_string(),
        };
        let (w, h) = s.split_once('x').ok_or_else(invalid)?;
        let w: u32 = w.trim().parse().map_err(|_| invalid())?;
        let h: u32 = h.trim().parse().map_err(|_| invalid())?;
        if w == 0 || h == 0 {
            return Err(invalid());
        }
        Ok(Self::new(w, h))
    }
}

/// One unit of work for the pipeline: crop to `ratio`, resize to `size`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PrintTarget {
    pub ratio: AspectRatio,
    pub size: PrintSize,
}

impl PrintTarget {
    pub const fn new(ratio: AspectRatio, size: PrintSize) -> Self {
        Self { ratio, size }
    }

    /// Deterministic output name, e.g. `photo_4x5_16x20in.jpg`.
    pub fn output_file_name(&self, base_name: &str) -> String {
        format!("{}_{}_{}in.jpg", base_name, self.ratio.slug(), self.size)
    }
}

impl fmt::Display for PrintTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} in", self.ratio, self.size)
    }
}

/// Accumulating list of print targets, keyed by ratio in insertion order.
/// A ratio appears once as a key; adding it again appends another size to
/// its list. Held in memory for one session only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetList {
    entries: Vec<(AspectRatio, Vec<PrintSize>)>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ratio: AspectRatio, size: PrintSize) {
        if let Some((_, sizes)) = self.entries.iter_mut().find(|(r, _)| *r == ratio) {
            sizes.push(size);
        } else {
            self.entries.push((ratio, vec![size]));
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, sizes)| sizes.is_empty())
    }

    /// Total number of (ratio, size) pairs.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, sizes)| sizes.len()).sum()
    }

    pub fn ratios(&self) -> impl Iterator<Item = AspectRatio> + '_ {
        self.entries.iter().map(|(ratio, _)| *ratio)
    }

    /// All targets in insertion order, ratio-major.
    pub fn iter(&self) -> impl Iterator<Item = PrintTarget> + '_ {
        self.entries.iter().flat_map(|(ratio, sizes)| {
            sizes.iter().map(move |size| PrintTarget::new(*ratio, *size))
        })
    }
}
