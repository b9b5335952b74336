use crate::canvas::Canvas;
use image::Rgba;

/// Actions the control row can trigger.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    ChangeColor(Rgba<u8>),
    Save,
    ToggleBucket,
    ToggleGridLines,
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::ChangeColor(_) => "Change Colour",
            Command::Save => "Save as Image",
            Command::ToggleBucket => "Bucket Tool",
            Command::ToggleGridLines => "Show Lines",
        }
    }

    /// Applies the command to the canvas. A failed save is logged and
    /// otherwise dropped.
    pub fn apply(self, canvas: &mut Canvas) {
        match self {
            Command::ChangeColor(color) => canvas.set_color(color),
            Command::Save => {
                if let Err(e) = canvas.export_image(&canvas.config().export_file) {
                    log::error!("Failed to save: {:?}", e);
                }
            }
            Command::ToggleBucket => canvas.toggle_bucket_mode(),
            Command::ToggleGridLines => canvas.toggle_grid_lines(),
        }
    }
}
