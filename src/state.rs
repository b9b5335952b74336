use image::Rgba;
use std::path::PathBuf;
use std::time::Duration;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// Fixed canvas geometry and application constants.
#[derive(Clone, Debug)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    /// Height of the control row; also the margin cropped off on export.
    pub control_row_height: u32,
    pub redraw_interval: Duration,
    pub line_color: Rgba<u8>,
    /// Color preselected when the chooser opens.
    pub chooser_default: Rgba<u8>,
    pub export_file: PathBuf,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1201,
            height: 626,
            cell_size: 25,
            control_row_height: 36,
            redraw_interval: Duration::from_millis(22),
            line_color: GRAY,
            chooser_default: RED,
            export_file: PathBuf::from("saved_image.png"),
        }
    }
}

impl CanvasConfig {
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.width as f32,
            (self.height + self.control_row_height) as f32,
        ]
    }
}

pub struct AppState {
    pub current_color: Rgba<u8>,
    pub bucket_mode: bool,
    pub grid_lines_visible: bool,
    pub background: Rgba<u8>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_color: BLACK,
            bucket_mode: false,
            grid_lines_visible: true,
            background: WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_reserves_control_row() {
        let config = CanvasConfig::default();
        assert_eq!(config.window_size(), [1201.0, 662.0]);
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.current_color, BLACK);
        assert_eq!(state.background, WHITE);
        assert!(!state.bucket_mode);
        assert!(state.grid_lines_visible);
    }
}
