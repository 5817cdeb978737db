#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use pixel_paint::{CanvasConfig, PixelPaintApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::from_env();
    let side = config.display_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 220.0, side + 40.0])
            .with_min_inner_size([side + 200.0, side + 20.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pixel Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(PixelPaintApp::new(cc, config)))),
    )
}
