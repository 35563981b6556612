//! High-level, ergonomic library API: process one photograph or a whole
//! directory into print-ready JPEGs. Prefer these entrypoints over the
//! low-level processing modules when embedding PRINTCROP.
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::save::save_print_image;
use crate::error::{Error, Result};
use crate::io::reader::{is_supported_image, read_rgb_image};

/// Summary of one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Source files decoded and run through the pipeline.
    pub processed: usize,
    /// Prints written to the output directory.
    pub saved: usize,
    /// Directory entries ignored (not a file, or unsupported extension).
    pub skipped: usize,
    /// Failures, at file level or target level.
    pub errors: usize,
}

/// Outcome of processing a single source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileReport {
    pub saved: usize,
    pub errors: usize,
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

/// Process one image file into `output_dir`, writing one JPEG per
/// configured target.
///
/// A target that fails mid-pipeline is logged and counted; the remaining
/// targets still run. A decode failure is returned as an error so batch
/// callers can count it at file level.
pub fn process_image_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
) -> Result<FileReport> {
    if params.targets.is_empty() {
        return Err(Error::EmptyTargets);
    }
    fs::create_dir_all(output_dir)?;

    let source = read_rgb_image(input)?;
    let base_name = file_stem(input);
    info!("Processing: {}", input.display());

    let mut report = FileReport::default();
    for target in params.targets.iter() {
        let output = output_dir.join(target.output_file_name(&base_name));
        match save_print_image(&source, &output, target, params.quality, params.dpi) {
            Ok(()) => report.saved += 1,
            Err(e) => {
                warn!(
                    "Error processing {} for {}: {}",
                    input.display(),
                    target.ratio,
                    e
                );
                report.errors += 1;
            }
        }
    }
    Ok(report)
}

/// Process every eligible image directly inside `input_dir` (non-recursive)
/// against the configured targets.
///
/// Neither tier of failure aborts the run: a file that fails to decode is
/// skipped with a logged error and the batch moves on, and a failing target
/// only skips that one print. An input directory with no eligible files is
/// reported and produces no output.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
) -> Result<BatchReport> {
    if params.targets.is_empty() {
        return Err(Error::EmptyTargets);
    }
    fs::create_dir_all(output_dir)?;

    info!("Starting batch processing from directory: {}", input_dir.display());
    info!("Output directory: {}", output_dir.display());

    let mut files = Vec::new();
    let mut report = BatchReport::default();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        } else {
            report.skipped += 1;
        }
    }
    // Deterministic order regardless of directory enumeration order.
    files.sort();

    if files.is_empty() {
        warn!("No valid image files found in {}", input_dir.display());
        return Ok(report);
    }

    for path in &files {
        match process_image_to_dir(path, output_dir, params) {
            Ok(file_report) => {
                report.processed += 1;
                report.saved += file_report.saved;
                report.errors += file_report.errors;
            }
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                report.errors += 1;
            }
        }
    }

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Saved: {}", report.saved);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    Ok(report)
}
