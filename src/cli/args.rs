use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "printcrop", version, about = "PRINTCROP CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory scanned non-recursively for images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for the generated prints
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print target as RATIO=WxH in inches, e.g. 4:5=16x20. Repeatable;
    /// repeated ratios accumulate additional sizes.
    #[arg(short = 't', long = "target")]
    pub targets: Vec<String>,

    /// Use the classic print set (4:5=16x20, 3:4=18x24, 2:3=24x36, 5:7=5x7)
    #[arg(long, default_value_t = false)]
    pub classic: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
