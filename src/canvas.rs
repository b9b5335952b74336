use crate::cells::{CellStore, PaintedCell};
use crate::image_store::ImageStore;
use crate::state::{AppState, CanvasConfig};
use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Fill of the control row, shared by the window theme and the export margin.
pub const CONTROL_ROW_FILL: Rgba<u8> = Rgba([26, 27, 38, 255]);

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ClickOutcome {
    Painted(PaintedCell),
    BackgroundFilled(Rgba<u8>),
    Ignored,
}

/// The paintable grid: painted cells, toggle state and rendering.
pub struct Canvas {
    config: CanvasConfig,
    state: AppState,
    cells: CellStore,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            state: AppState::default(),
            cells: CellStore::new(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    /// Maps a pointer position in canvas coordinates onto the grid.
    ///
    /// With bucket mode off the cell under the pointer is painted. With it on
    /// the whole background takes the current color and no cell is added.
    pub fn on_pointer_click(&mut self, px: f32, py: f32) -> ClickOutcome {
        if !(px >= 0.0 && py >= 0.0) {
            return ClickOutcome::Ignored;
        }
        let (px, py) = (px as u32, py as u32);
        if px >= self.config.width || py >= self.config.height {
            return ClickOutcome::Ignored;
        }

        let size = self.config.cell_size;
        let cell_x = (px / size) * size;
        let cell_y = (py / size) * size;

        if self.state.bucket_mode {
            self.state.background = self.state.current_color;
            log::debug!("Background filled with {:?}", self.state.background);
            ClickOutcome::BackgroundFilled(self.state.background)
        } else {
            let cell = PaintedCell::new(cell_x, cell_y, size, size, self.state.current_color);
            self.cells.push(cell);
            log::debug!("Painted cell at ({}, {})", cell_x, cell_y);
            ClickOutcome::Painted(cell)
        }
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.state.current_color = color;
    }

    pub fn toggle_bucket_mode(&mut self) {
        self.state.bucket_mode = !self.state.bucket_mode;
        log::debug!("Bucket mode: {}", self.state.bucket_mode);
    }

    pub fn toggle_grid_lines(&mut self) {
        self.state.grid_lines_visible = !self.state.grid_lines_visible;
        log::debug!("Grid lines: {}", self.state.grid_lines_visible);
    }

    /// Draws background, cells in store order, then grid lines on top.
    pub fn render(&self) -> RgbaImage {
        let mut surface = ImageStore::new(
            self.config.width,
            self.config.height,
            self.state.background,
        );
        self.draw_onto(&mut surface, 0);
        surface.into_buffer()
    }

    /// Offscreen raster with a band of control-row height above the canvas.
    ///
    /// The band is a fixed top margin that export crops off again; it does
    /// not mirror the on-screen layout, where the control row is below.
    pub fn rasterize_with_margin(&self) -> ImageStore {
        let margin = self.config.control_row_height;
        let mut surface = ImageStore::new(
            self.config.width,
            self.config.height + margin,
            CONTROL_ROW_FILL,
        );
        surface.fill_rect(
            0,
            margin,
            self.config.width,
            self.config.height,
            self.state.background,
        );
        self.draw_onto(&mut surface, margin);
        surface
    }

    fn draw_onto(&self, surface: &mut ImageStore, top: u32) {
        // Cells, oldest first
        for cell in self.cells.iter() {
            surface.fill_rect(
                cell.x(),
                top + cell.y(),
                cell.width(),
                cell.height(),
                cell.color(),
            );
        }

        // Grid lines over the cells
        if self.state.grid_lines_visible {
            let size = self.config.cell_size;
            let color = self.config.line_color;
            for x in (0..self.config.width).step_by(size as usize) {
                surface.vertical_line(x, top, self.config.height, color);
            }
            for y in (0..self.config.height).step_by(size as usize) {
                surface.horizontal_line(0, top + y, self.config.width, color);
            }
        }
    }

    /// Writes the canvas, without the control row, as a PNG.
    pub fn export_image(&self, path: &Path) -> Result<()> {
        let raster = self.rasterize_with_margin();
        // Drop the top margin
        let margin = self.config.control_row_height;
        let cropped = raster.crop(0, margin, raster.width(), raster.height() - margin);
        ImageStore::save_png(&cropped, path)?;
        log::info!("Image saved successfully.");
        Ok(())
    }
}
