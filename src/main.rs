mod canvas;
mod cells;
mod commands;
mod image_store;
mod state;
mod ui;

use eframe::egui::IconData;
use image::{ImageBuffer, RgbaImage};
use state::CanvasConfig;

/// Draws a small painted grid to use as the window icon.
fn build_icon() -> IconData {
    const SIZE: u32 = 32;
    const CELL: u32 = 8;
    let icon: RgbaImage = ImageBuffer::from_fn(SIZE, SIZE, |x, y| {
        if x % CELL == 0 || y % CELL == 0 {
            state::GRAY
        } else if (x / CELL + y / CELL) % 2 == 0 {
            state::RED
        } else {
            state::WHITE
        }
    });
    let (width, height) = icon.dimensions();
    IconData {
        rgba: icon.into_raw(),
        width,
        height,
    }
}

fn native_options(config: &CanvasConfig) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_resizable(false)
            .with_title("PIXEditor")
            .with_icon(build_icon()),
        centered: true,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let config = CanvasConfig::default();
    let options = native_options(&config);

    if let Err(e) = eframe::run_native(
        "PIXEditor",
        options,
        Box::new(|cc| Ok(Box::new(ui::PixelApp::new(cc, config)))),
    ) {
        log::error!("Failed to start application: {}", e);
    }
}
