use crate::canvas::{Canvas, ClickOutcome, CONTROL_ROW_FILL};
use crate::commands::Command;
use crate::state::CanvasConfig;
use eframe::egui::{
    self, color_picker, Color32, Context, Pos2, Rect, Sense, TextureOptions, Ui, Vec2,
};
use eframe::Frame;
use image::Rgba;

pub struct PixelApp {
    canvas: Canvas,
    texture: Option<egui::TextureHandle>,
    // Some while the color chooser is open, holding the color being edited.
    chooser: Option<Color32>,
}

fn to_color32(color: Rgba<u8>) -> Color32 {
    Color32::from_rgb(color[0], color[1], color[2])
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}

impl PixelApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        let fill = to_color32(CONTROL_ROW_FILL);
        // Tokyonight Theme
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = fill;
        visuals.panel_fill = fill;
        visuals.extreme_bg_color = Color32::from_rgb(22, 22, 30);
        cc.egui_ctx.set_visuals(visuals);

        Self::with_canvas(Canvas::new(config))
    }

    fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            texture: None,
            chooser: None,
        }
    }

    fn controls_enabled(&self) -> bool {
        self.chooser.is_none()
    }

    /// Opens the chooser at its default color unless it is already open.
    fn open_chooser(&mut self) {
        if self.chooser.is_none() {
            self.chooser = Some(to_color32(self.canvas.config().chooser_default));
        }
    }

    /// Re-renders the canvas into the texture every frame.
    fn update_texture(&mut self, ctx: &Context) {
        let image = self.canvas.render();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [image.width() as usize, image.height() as usize],
            image.as_raw(),
        );

        match &mut self.texture {
            Some(texture) => texture.set(color_image, TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("canvas", color_image, TextureOptions::NEAREST));
            }
        }
    }

    fn control_row(&mut self, ui: &mut Ui) -> Option<Command> {
        let mut command = None;
        let mut open_chooser = false;
        // Buttons stay inactive while the chooser window is up.
        let enabled = self.controls_enabled();
        let state = self.canvas.state();

        ui.horizontal_centered(|ui| {
            ui.add_enabled_ui(enabled, |ui| {
                if ui.button(Command::ChangeColor(state.current_color).name()).clicked() {
                    open_chooser = true;
                }
                if ui.button(Command::Save.name()).clicked() {
                    command = Some(Command::Save);
                }

                // Toggles show their current state
                let bucket =
                    egui::Button::new(Command::ToggleBucket.name()).selected(state.bucket_mode);
                if ui.add(bucket).clicked() {
                    command = Some(Command::ToggleBucket);
                }
                let lines = egui::Button::new(Command::ToggleGridLines.name())
                    .selected(state.grid_lines_visible);
                if ui.add(lines).clicked() {
                    command = Some(Command::ToggleGridLines);
                }
            });

            ui.separator();
            color_picker::show_color(ui, to_color32(state.current_color), Vec2::splat(16.0));
        });

        if open_chooser {
            self.open_chooser();
        }
        command
    }

    fn color_chooser(&mut self, ctx: &Context) -> Option<Command> {
        let mut color = self.chooser?;
        let mut open = true;
        let mut done = false;
        let mut command = None;

        egui::Window::new("Choose Color")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                color_picker::color_picker_color32(ui, &mut color, color_picker::Alpha::Opaque);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        command = Some(Command::ChangeColor(to_rgba(color)));
                        done = true;
                    }
                    if ui.button("Cancel").clicked() {
                        done = true;
                    }
                });
            });

        self.chooser = if open && !done { Some(color) } else { None };
        command
    }

    fn render_canvas(&mut self, ui: &mut Ui) {
        let config = self.canvas.config();
        let size = Vec2::new(config.width as f32, config.height as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let rect = response.rect;

        // Draw Canvas
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        // Handle Input
        // No painting while the chooser is open.
        if !self.controls_enabled() || !response.clicked() {
            return;
        }
        if let Some(pos) = response.interact_pointer_pos() {
            let relative = pos - rect.min;
            if let ClickOutcome::Ignored = self.canvas.on_pointer_click(relative.x, relative.y) {
                log::debug!("Click outside canvas at {:?}", relative);
            }
        }
    }
}

impl eframe::App for PixelApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.update_texture(ctx);

        // Controls sit beneath the canvas
        let row_height = self.canvas.config().control_row_height as f32;
        let mut command = egui::TopBottomPanel::bottom("controls")
            .exact_height(row_height)
            .show(ctx, |ui| self.control_row(ui))
            .inner;

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.render_canvas(ui));

        // Chooser confirmation wins over a button press in the same frame
        if let Some(chosen) = self.color_chooser(ctx) {
            command = Some(chosen);
        }

        if let Some(command) = command {
            log::debug!("Command: {}", command.name());
            command.apply(&mut self.canvas);
        }

        // Fixed-rate redraw tick
        ctx.request_repaint_after(self.canvas.config().redraw_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chooser_disables_controls() {
        let mut app = PixelApp::with_canvas(Canvas::new(CanvasConfig::default()));
        assert!(app.controls_enabled());

        app.open_chooser();
        assert!(!app.controls_enabled());
        assert_eq!(app.chooser, Some(Color32::from_rgb(255, 0, 0)));
    }

    #[test]
    fn test_reopening_chooser_keeps_edited_color() {
        let mut app = PixelApp::with_canvas(Canvas::new(CanvasConfig::default()));
        app.open_chooser();
        app.chooser = Some(Color32::from_rgb(0, 200, 0));

        app.open_chooser();
        assert_eq!(app.chooser, Some(Color32::from_rgb(0, 200, 0)));
    }

    #[test]
    fn test_color_conversion_is_opaque() {
        let color = to_rgba(Color32::from_rgb(10, 20, 30));
        assert_eq!(color, Rgba([10, 20, 30, 255]));
        assert_eq!(to_color32(color), Color32::from_rgb(10, 20, 30));
    }
}
