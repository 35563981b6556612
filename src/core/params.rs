use serde::{Deserialize, Serialize};

use crate::types::{DPI, JPEG_QUALITY, TargetList};

/// Processing parameters suitable for config files and GUI presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    /// Accumulated print targets, in insertion order
    pub targets: TargetList,
    /// JPEG quality for saved prints
    pub quality: u8,
    /// Output resolution, also embedded in saved files
    pub dpi: u16,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            targets: TargetList::new(),
            quality: JPEG_QUALITY,
            dpi: DPI,
        }
    }
}

impl ProcessingParams {
    pub fn with_targets(targets: TargetList) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }
}
