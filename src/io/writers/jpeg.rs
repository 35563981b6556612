use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use jpeg_encoder::{ColorType, Density, Encoder, SamplingFactor};

use crate::error::{Error, Result};

/// Write an interleaved RGB buffer as a JPEG print: caller-chosen quality,
/// JFIF density set to `dpi` in both axes, chroma kept at full resolution
/// (4:4:4) and optimized Huffman tables.
pub fn write_print_jpeg(
    output: &Path,
    cols: u32,
    rows: u32,
    rgb_data: &[u8],
    quality: u8,
    dpi: u16,
) -> Result<()> {
    if cols > u16::MAX as u32 || rows > u16::MAX as u32 {
        return Err(Error::Processing(format!(
            "image {}x{} exceeds the JPEG dimension limit",
            cols, rows
        )));
    }

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let mut encoder = Encoder::new(&mut writer, quality);
    encoder.set_density(Density::Inch { x: dpi, y: dpi });
    encoder.set_sampling_factor(SamplingFactor::F_1_1);
    encoder.set_optimized_huffman_tables(true);
    encoder.encode(rgb_data, cols as u16, rows as u16, ColorType::Rgb)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_jpeg_decodes_to_same_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let data = vec![90u8; 32 * 24 * 3];

        write_print_jpeg(&path, 32, 24, &data, 95, 300).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 24));
    }

    #[test]
    fn density_is_embedded_in_the_jfif_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dpi.jpg");
        let data = vec![0u8; 8 * 8 * 3];

        write_print_jpeg(&path, 8, 8, &data, 95, 300).unwrap();

        // SOI, then APP0 "JFIF": units byte at offset 13, X/Y density after.
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[2..4], &[0xFF, 0xE0]);
        assert_eq!(&bytes[6..11], b"JFIF\0");
        assert_eq!(bytes[13], 1, "density units should be dots per inch");
        assert_eq!(u16::from_be_bytes([bytes[14], bytes[15]]), 300);
        assert_eq!(u16::from_be_bytes([bytes[16], bytes[17]]), 300);
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.jpg");
        let err = write_print_jpeg(&path, 70_000, 10, &[], 95, 300);
        assert!(err.is_err());
    }
}
