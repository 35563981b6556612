use super::models::PrintcropGui;
use crate::core::catalog;
use crate::types::{DPI, PrintTarget};
use eframe::egui::{Align, Color32, ComboBox, Frame, Layout, RichText, ScrollArea, Ui};

const COMPONENT_HEIGHT: f32 = 80.0;
const COMPONENT_WIDTH: f32 = 120.0;

pub struct ModeSelectionComponent;

impl ModeSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut PrintcropGui) {
        ui.heading("Processing Mode");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT * 0.6);
            ui.set_min_width(COMPONENT_WIDTH);
            ui.horizontal(|ui| {
                ui.radio_value(&mut app.batch_mode, false, "Single File");
                ui.radio_value(&mut app.batch_mode, true, "Batch Folder");
            });

            if app.batch_mode {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.label("Will skip unsupported files");
                });
            }
        });
    }
}

pub struct FileSelectionComponent;

impl FileSelectionComponent {
    pub fn render_single_file(ui: &mut Ui, app: &mut PrintcropGui) {
        ui.heading("File Selection");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Input Image:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Browse").clicked() {
                        app.select_input_file();
                    }
                });
            });

            if let Some(path) = &app.input_path {
                ui.label(
                    RichText::new(path.to_string_lossy()).color(Color32::from_rgb(255, 165, 0)),
                );
            } else {
                ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
            }

            ui.add_space(10.0);

            Self::render_output_dir(ui, app);
        });
    }

    pub fn render_batch_mode(ui: &mut Ui, app: &mut PrintcropGui) {
        ui.heading("Batch Processing");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Input Folder:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Browse").clicked() {
                        app.select_input_directory();
                    }
                });
            });

            if let Some(path) = &app.input_dir_path {
                ui.label(
                    RichText::new(path.to_string_lossy()).color(Color32::from_rgb(255, 165, 0)),
                );
            } else {
                ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
            }

            ui.add_space(10.0);

            Self::render_output_dir(ui, app);
        });
    }

    fn render_output_dir(ui: &mut Ui, app: &mut PrintcropGui) {
        ui.horizontal(|ui| {
            ui.label("Output Folder:");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Browse").clicked() {
                    app.select_output_directory();
                }
            });
        });

        if let Some(path) = &app.output_dir_path {
            ui.label(RichText::new(path.to_string_lossy()).color(Color32::from_rgb(255, 165, 0)));
        } else {
            ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
        }
    }
}

pub struct TargetOptionsComponent;

impl TargetOptionsComponent {
    pub fn render(ui: &mut Ui, app: &mut PrintcropGui) {
        ui.heading("Print Targets");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Aspect Ratio:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let old_ratio = app.selected_ratio;
                    ComboBox::from_id_salt("aspect_ratio")
                        .selected_text(app.selected_ratio.to_string())
                        .show_ui(ui, |ui| {
                            for ratio in catalog::RATIOS {
                                ui.selectable_value(
                                    &mut app.selected_ratio,
                                    ratio,
                                    ratio.to_string(),
                                );
                            }
                        });

                    // Each ratio carries its own size list; reset on change.
                    if app.selected_ratio != old_ratio {
                        if let Some(first) = catalog::sizes_for(app.selected_ratio).first() {
                            app.selected_size = *first;
                        }
                    }
                });
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Dimensions:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ComboBox::from_id_salt("print_size")
                        .selected_text(format!("{} in", app.selected_size))
                        .show_ui(ui, |ui| {
                            for size in catalog::sizes_for(app.selected_ratio) {
                                ui.selectable_value(
                                    &mut app.selected_size,
                                    *size,
                                    format!("{size} in"),
                                );
                            }
                        });
                });
            });

            ui.add_space(5.0);

            let (px_w, px_h) = app.selected_pixel_dimensions();
            ui.label(
                RichText::new(format!(
                    "{} in = {}x{} px @ {} DPI",
                    app.selected_size, px_w, px_h, DPI
                ))
                .color(Color32::from_gray(120))
                .size(11.0),
            );
            if !app.selected_size.matches_ratio(app.selected_ratio) {
                ui.label(
                    RichText::new(format!(
                        "Not an exact {}; the print will be slightly stretched.",
                        app.selected_ratio
                    ))
                    .color(Color32::from_rgb(255, 200, 100))
                    .size(11.0),
                );
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    app.targets.add(app.selected_ratio, app.selected_size);
                }
                if ui.button("Clear List").clicked() {
                    app.targets.clear();
                }
                if ui.button("Classic Set").clicked() {
                    app.targets = catalog::classic_targets();
                }
            });

            ui.add_space(5.0);

            let targets: Vec<PrintTarget> = app.targets.iter().collect();
            if targets.is_empty() {
                ui.label(RichText::new("No targets added").color(Color32::from_gray(120)));
            } else {
                ui.label(format!(
                    "{} target{}:",
                    targets.len(),
                    if targets.len() == 1 { "" } else { "s" }
                ));
                ScrollArea::vertical()
                    .id_salt("target_list")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        for target in &targets {
                            ui.label(
                                RichText::new(target.to_string())
                                    .color(Color32::from_rgb(255, 165, 0))
                                    .size(12.0),
                            );
                        }
                    });
            }

            ui.add_space(5.0);

            ui.label(
                RichText::new(
                    "Each source is center-cropped to the ratio, then resampled to the \
                     exact print size. One JPEG is written per target.",
                )
                .color(Color32::from_gray(120))
                .size(11.0),
            );
        });
    }
}

pub struct FooterComponent;

impl FooterComponent {
    pub fn render(ui: &mut Ui, app: &mut PrintcropGui) {
        // Update system statistics
        app.update_system_stats();

        ui.horizontal(|ui| {
            // Left side - Timing and system information
            let status_color = if app.is_processing {
                Color32::from_rgb(255, 165, 0) // Orange for processing
            } else {
                Color32::from_rgb(100, 200, 100) // Green for ready
            };

            let timing_text = if app.is_processing {
                if let Some(start_time) = app.processing_start_time {
                    let elapsed = start_time.elapsed();
                    format!("Processing: {:.2?}", elapsed)
                } else {
                    "Processing...".to_string()
                }
            } else if let Some(duration) = app.last_processing_duration {
                format!("Last run: {:.2?}", duration)
            } else {
                "Ready".to_string()
            };

            ui.label(RichText::new(timing_text).color(status_color).size(14.0));

            ui.separator();

            // CPU usage
            let cpu_color = if app.cpu_usage > 80.0 {
                Color32::from_rgb(255, 100, 100)
            } else if app.cpu_usage > 50.0 {
                Color32::from_rgb(255, 165, 0)
            } else {
                Color32::from_rgb(100, 200, 100)
            };

            ui.label(
                RichText::new(format!("CPU: {:.1}%", app.cpu_usage))
                    .color(cpu_color)
                    .size(12.0),
            );

            ui.separator();

            // Memory usage
            let memory_percent = if app.total_memory_mb > 0.0 {
                (app.memory_usage_mb / app.total_memory_mb) * 100.0
            } else {
                0.0
            };

            let memory_color = if memory_percent > 80.0 {
                Color32::from_rgb(255, 100, 100)
            } else if memory_percent > 60.0 {
                Color32::from_rgb(255, 165, 0)
            } else {
                Color32::from_rgb(100, 200, 100)
            };

            ui.label(
                RichText::new(format!(
                    "RAM: {:.1} GB / {:.1} GB ({:.1}%)",
                    app.memory_usage_mb / 1024.0,
                    app.total_memory_mb / 1024.0,
                    memory_percent
                ))
                .color(memory_color)
                .size(12.0),
            );

            // Right side - Buttons
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("To CLI").clicked() {
                    let cli_command = app.generate_cli_command();

                    // A special CLI command entry, not a regular log
                    let cli_entry = crate::gui::logging::LogEntry::new(
                        tracing::Level::INFO,
                        format!("CLI Command: {}", cli_command),
                        "cli".to_string(),
                    );

                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.push(cli_entry);
                    }
                }

                if ui.button("Save Preset").clicked() {
                    if let Err(e) = app.save_preset() {
                        tracing::error!("Failed to save preset: {}", e);
                    }
                }

                if ui.button("Load Preset").clicked() {
                    if let Err(e) = app.load_preset() {
                        tracing::error!("Failed to load preset: {}", e);
                    }
                }

                if ui.button("Save Logs").clicked() {
                    if let Err(e) = app.save_logs_to_file() {
                        tracing::error!("Failed to save logs: {}", e);
                    }
                }

                if ui.button("Clear").clicked() {
                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.clear();
                    }
                }

                if ui.button("Reset").clicked() {
                    *app = PrintcropGui::default();
                }
            });
        });
    }
}
