use crate::color::Color;
use crate::config::CanvasConfig;
use crate::export;
use crate::grid::PixelGrid;
use crate::input::{route_event, CanvasMapping, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::tool::{ToolState, ToolType};

/// The pixel editor: one grid, three tools, PNG download
pub struct PixelPaintApp {
    config: CanvasConfig,
    grid: PixelGrid,
    tool_state: ToolState,
    /// Picker value; always used as an opaque color
    brush: [u8; 3],
    renderer: Renderer,
    input: InputHandler,
    status: Option<String>,
}

impl PixelPaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        let brush = match config.initial_color() {
            Color::Opaque { r, g, b } => [r, g, b],
            Color::Empty => [0, 0, 0],
        };
        log::info!(
            "Starting with a {0}x{0} canvas, export scale {1}",
            config.resolution,
            config.export_scale
        );

        Self {
            grid: PixelGrid::new(config.resolution),
            tool_state: ToolState::new(config.initial_tool),
            brush,
            renderer: Renderer::new(cc),
            input: InputHandler::new(),
            status: None,
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn set_tool(&mut self, tool: ToolType) {
        self.tool_state.set_tool(tool);
    }

    pub fn brush_color(&self) -> Color {
        Color::from(self.brush)
    }

    pub fn brush_mut(&mut self) -> &mut [u8; 3] {
        &mut self.brush
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Clear every cell back to `Empty`
    pub fn clear_canvas(&mut self) {
        let n = self.grid.dimensions() as i32;
        for y in 0..n {
            for x in 0..n {
                if let Err(err) = self.grid.clear(x, y) {
                    log::error!("Clearing canvas failed: {}", err);
                    return;
                }
            }
        }
        log::info!("Canvas cleared");
        self.status = Some("Canvas cleared".to_owned());
    }

    /// Write the upscaled grid to the configured PNG path
    pub fn export_png(&mut self) {
        let path = &self.config.export_path;
        self.status = Some(match export::save_png(&self.grid, self.config.export_scale, path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => {
                log::warn!("Export to {} failed: {}", path.display(), err);
                format!("Export failed: {}", err)
            }
        });
    }

    /// Route this frame's pointer input over `canvas_rect` to the active tool
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let mapping = CanvasMapping::new(canvas_rect, self.grid.dimensions());
        let color = self.brush_color();

        for event in self.input.process_input(ctx, canvas_rect) {
            if let Err(err) = route_event(&event, &mut self.tool_state, &mut self.grid, &mapping, color) {
                log::error!("Dropped {:?}: {}", event, err);
            }
        }
    }

    pub fn render(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(painter, rect, &self.grid);
    }
}

impl eframe::App for PixelPaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
