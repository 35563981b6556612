#![doc = r#"
PRINTCROP — batch photo cropping and resizing for standard print sizes.

This crate turns photographs into print-ready JPEGs: each source is
center-cropped to a chosen aspect ratio, resampled with Lanczos3 to the
exact pixel size of a physical print at 300 DPI, and saved at quality 95
with the resolution metadata embedded, full-resolution chroma, and
optimized entropy coding. It powers both the PRINTCROP CLI and GUI, and
can be embedded in your own Rust applications.

Quick start: process a folder
-----------------------------
```rust,no_run
use std::path::Path;
use printcrop::{ProcessingParams, classic_targets, process_directory};

fn main() -> printcrop::Result<()> {
    let params = ProcessingParams::with_targets(classic_targets());
    let report = process_directory(Path::new("/photos"), Path::new("/out"), &params)?;
    println!(
        "processed={} saved={} skipped={} errors={}",
        report.processed, report.saved, report.skipped, report.errors
    );
    Ok(())
}
```

Custom targets
--------------
```rust,no_run
use std::path::Path;
use printcrop::{AspectRatio, PrintSize, ProcessingParams, TargetList, process_image_to_dir};

fn main() -> printcrop::Result<()> {
    let mut targets = TargetList::new();
    targets.add(AspectRatio::new(4, 5), PrintSize::new(16, 20));
    targets.add(AspectRatio::new(4, 5), PrintSize::new(8, 10));
    targets.add(AspectRatio::new(16, 9), PrintSize::new(32, 18));

    let params = ProcessingParams::with_targets(targets);
    process_image_to_dir(Path::new("/photos/dunes.png"), Path::new("/out"), &params)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `printcrop::Result<T>`; match on
`printcrop::Error` for specific cases. Inside a batch, per-file and
per-target failures are logged and counted in the returned report rather
than raised; only upfront precondition failures (no targets, unreadable
input directory) surface as errors.

Feature flags
-------------
- `gui`: builds the egui-based GUI module and the `printcropUI` binary.
- `full`: enables a complete feature set for typical end-to-end workflows.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core vocabulary (`AspectRatio`, `PrintSize`, `TargetList`).
- [`core`] — crop/resize/save pipeline and the print catalog.
- [`io`] — image decoding and JPEG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{AspectRatio, DPI, JPEG_QUALITY, PrintSize, PrintTarget, TargetList};

// Catalog
pub use core::catalog::{RATIOS, classic_targets, sizes_for};

// Pipeline primitives (for callers composing their own flows)
pub use core::processing::crop::{CropRect, center_crop_rect};
pub use core::processing::pipeline::{RenderedPrint, render_print};

// High-level API re-exports
pub use api::{BatchReport, FileReport, process_directory, process_image_to_dir};
