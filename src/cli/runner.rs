use tracing::{info, warn};

use printcrop::core::catalog::classic_targets;
use printcrop::{AspectRatio, PrintSize, ProcessingParams, TargetList};

use super::args::CliArgs;
use super::errors::AppError;

/// Parse one `RATIO=WxH` target spec, e.g. `4:5=16x20`.
fn parse_target(spec: &str) -> Result<(AspectRatio, PrintSize), AppError> {
    let invalid = || AppError::InvalidTarget {
        spec: spec.to_string(),
    };
    let (ratio, size) = spec.split_once('=').ok_or_else(invalid)?;
    let ratio: AspectRatio = ratio.trim().parse().map_err(|_| invalid())?;
    let size: PrintSize = size.trim().parse().map_err(|_| invalid())?;
    Ok((ratio, size))
}

fn build_targets(args: &CliArgs) -> Result<TargetList, AppError> {
    let mut targets = if args.classic {
        classic_targets()
    } else {
        TargetList::new()
    };

    for spec in &args.targets {
        let (ratio, size) = parse_target(spec)?;
        if !size.matches_ratio(ratio) {
            warn!(
                "Size {} is not exactly {}; the resized print will be slightly stretched",
                size, ratio
            );
        }
        targets.add(ratio, size);
    }

    if targets.is_empty() {
        return Err(AppError::NoTargets);
    }
    Ok(targets)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let targets = build_targets(&args)?;
    let params = ProcessingParams::with_targets(targets);

    let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
        arg: "--output-dir".to_string(),
    })?;

    let batch_mode = args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;

        let report = printcrop::process_directory(&input_dir, &output_dir, &params)?;
        info!(
            "Done: processed={} saved={} skipped={} errors={}",
            report.processed, report.saved, report.skipped, report.errors
        );
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;

        let report = printcrop::process_image_to_dir(&input, &output_dir, &params)?;
        info!(
            "Successfully processed: {:?} ({} prints, {} errors)\n",
            input, report.saved, report.errors
        );
    }

    Ok(())
}
