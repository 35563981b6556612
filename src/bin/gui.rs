#[cfg(feature = "gui")]
use eframe::{NativeOptions, egui::ViewportBuilder};
#[cfg(feature = "gui")]
use printcrop::gui::models::PrintcropGui;

#[cfg(feature = "gui")]
fn main() -> Result<(), eframe::Error> {
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([650.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PRINTCROP",
        options,
        Box::new(|_cc| Ok(Box::new(PrintcropGui::default()))),
    )
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}
