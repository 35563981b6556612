use super::logging::GuiLogLayer;
use super::models::PrintcropGui;
use crate::core::params::ProcessingParams;
use crate::gui::logging::LogEntry;
use crate::gui::models::init_gui_logging;
use crate::io::reader::SUPPORTED_EXTENSIONS;
use crate::types::TargetList;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, trace};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

/// GUI-specific errors
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("Input and output locations are required")]
    MissingPaths,

    #[error("No print targets configured. Add at least one ratio and size")]
    NoTargets,

    #[error("Error creating output directory: {0}")]
    OutputDirError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lib(#[from] crate::error::Error),
}

/// Everything the background worker needs, detached from the GUI state.
struct ProcessingJob {
    input_path: Option<PathBuf>,
    input_dir_path: Option<PathBuf>,
    output_dir_path: Option<PathBuf>,
    batch_mode: bool,
    targets: TargetList,
    log_messages: Arc<Mutex<Vec<LogEntry>>>,
}

impl ProcessingJob {
    fn push_separator(&self, message: &str) {
        if let Ok(mut logs) = self.log_messages.lock() {
            logs.push(LogEntry::separator(message));
        }
    }

    // The actual processing logic, run on the worker thread.
    fn run(&self) -> Result<String, String> {
        if self.targets.is_empty() {
            error!("No print targets configured");
            return Err(GuiError::NoTargets.to_string());
        }

        let params = ProcessingParams::with_targets(self.targets.clone());

        let batch_mode = self.batch_mode && self.input_dir_path.is_some();
        debug!(
            "Processing mode: {}",
            if batch_mode { "Batch" } else { "Single file" }
        );

        if batch_mode {
            let (Some(input_dir), Some(output_dir)) =
                (&self.input_dir_path, &self.output_dir_path)
            else {
                error!("Input and output directories required for batch processing");
                return Err(GuiError::MissingPaths.to_string());
            };

            trace!("Starting batch processing");
            trace!("Input directory: {:?}", input_dir);
            trace!("Output directory: {:?}", output_dir);
            self.push_separator("Processing Started");

            match crate::api::process_directory(input_dir, output_dir, &params) {
                Ok(report) => Ok(format!(
                    "Batch processing complete! Processed: {}, Saved: {}, Skipped: {}, Errors: {}",
                    report.processed, report.saved, report.skipped, report.errors
                )),
                Err(e) => {
                    error!("Error during batch processing: {}", e);
                    Err(format!("Error during batch processing: {}", e))
                }
            }
        } else {
            let (Some(input), Some(output_dir)) = (&self.input_path, &self.output_dir_path) else {
                error!("Input file and output directory required for single file processing");
                return Err(GuiError::MissingPaths.to_string());
            };

            trace!("Starting single file processing");
            trace!("Input file: {:?}", input);
            trace!("Output directory: {:?}", output_dir);
            self.push_separator("Processing Started");

            match crate::api::process_image_to_dir(input, output_dir, &params) {
                Ok(report) => Ok(format!(
                    "Successfully processed: {:?} ({} prints, {} errors)",
                    input, report.saved, report.errors
                )),
                Err(e) => {
                    error!("Error processing file: {}", e);
                    Err(format!("Error processing file: {}", e))
                }
            }
        }
    }
}

impl PrintcropGui {
    pub fn select_input_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", SUPPORTED_EXTENSIONS)
            .pick_file()
        {
            self.input_path = Some(path);
            info!(
                "Selected input image: {:?}",
                self.input_path.as_ref().unwrap()
            );
            trace!("Input path set for single file processing");
        }
    }

    pub fn select_input_directory(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.input_dir_path = Some(path);
            info!(
                "Selected input directory: {:?}",
                self.input_dir_path.as_ref().unwrap()
            );
            trace!("Input directory set for batch processing");
        }
    }

    pub fn select_output_directory(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.output_dir_path = Some(path);
            info!(
                "Selected output directory: {:?}",
                self.output_dir_path.as_ref().unwrap()
            );
            trace!("Output directory configured");
        }
    }

    pub fn process_files(&mut self) {
        if self.is_processing {
            debug!("Processing already in progress, ignoring request");
            return;
        }

        trace!("Starting file processing");
        self.is_processing = true;
        self.processing_start_time = Some(Instant::now());
        self.last_processing_duration = None;

        // Always initialize logging so error messages appear in the GUI
        init_gui_logging();
        info!("Processing started");

        let job = ProcessingJob {
            input_path: self.input_path.clone(),
            input_dir_path: self.input_dir_path.clone(),
            output_dir_path: self.output_dir_path.clone(),
            batch_mode: self.batch_mode,
            targets: self.targets.clone(),
            log_messages: self.log_messages.clone(),
        };
        let (tx, rx) = std::sync::mpsc::channel();

        debug!("Background processing parameters:");
        debug!("  Batch mode: {}", job.batch_mode);
        debug!("  Targets: {}", job.targets.len());

        // Spawn background thread so the event loop stays responsive
        std::thread::spawn(move || {
            // Set up a tracing subscriber for this thread so messages reach
            // the GUI buffer; ignore the error if one is already installed.
            let subscriber = Registry::default().with(GuiLogLayer::new());
            let _ = tracing::subscriber::set_global_default(subscriber);

            trace!("Background processing thread started");
            let result = job.run();
            let msg = match result {
                Ok(m) => m,
                Err(e) => {
                    error!("Processing cancelled: {}", e);
                    format!("Error: {}", e)
                }
            };
            let _ = tx.send(msg);
        });

        // Store the receiver for completion notification
        self.completion_receiver = Some(rx);
        info!("Processing started in background thread");
    }
}
