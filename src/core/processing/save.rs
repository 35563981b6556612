use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::core::processing::pipeline::render_print;
use crate::error::Result;
use crate::io::writers::jpeg::write_print_jpeg;
use crate::types::PrintTarget;

/// Render one print target from a decoded source and write it as a JPEG
/// with the resolution metadata embedded. Overwrites an existing file.
pub fn save_print_image(
    source: &RgbImage,
    output: &Path,
    target: PrintTarget,
    quality: u8,
    dpi: u16,
) -> Result<()> {
    let print = render_print(source, target, dpi)?;
    write_print_jpeg(output, print.width, print.height, &print.pixels, quality, dpi)?;

    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());
    info!("Saved: {} ({}x{}px)", name, print.width, print.height);
    Ok(())
}
