use eframe::egui::{self, Color32, Rect, TextureOptions};

use crate::export;
use crate::grid::PixelGrid;

const CHECKER_LIGHT: Color32 = Color32::from_gray(204);
const CHECKER_DARK: Color32 = Color32::from_gray(153);

/// Draws the pixel grid as a nearest-filtered texture over a checkerboard
pub struct Renderer {
    ctx: egui::Context,
    texture: Option<egui::TextureHandle>,
    /// Grid revision currently held by `texture`
    uploaded_revision: Option<u64>,
    /// 2x2 checker tiled once per cell pair behind the grid
    checker: Option<egui::TextureHandle>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .field("has_checker", &self.checker.is_some())
            .finish()
    }
}

impl Renderer {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_context(cc.egui_ctx.clone())
    }

    pub fn with_context(ctx: egui::Context) -> Self {
        Self {
            ctx,
            texture: None,
            uploaded_revision: None,
            checker: None,
        }
    }

    fn checker_texture(&mut self) -> egui::TextureId {
        let ctx = &self.ctx;
        self.checker
            .get_or_insert_with(|| {
                let mut image = egui::ColorImage::new([2, 2], CHECKER_DARK);
                image.pixels[0] = CHECKER_LIGHT;
                image.pixels[3] = CHECKER_LIGHT;
                ctx.load_texture("pixel_grid_checker", image, TextureOptions::NEAREST_REPEAT)
            })
            .id()
    }

    /// Upload the grid if it changed since the last upload.
    /// Returns true if a new texture was uploaded.
    pub fn sync(&mut self, grid: &PixelGrid) -> bool {
        if self.uploaded_revision == Some(grid.revision()) && self.texture.is_some() {
            return false;
        }

        let image = export::to_color_image(grid);
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture("pixel_grid", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_revision = Some(grid.revision());
        true
    }

    pub fn uploaded_revision(&self) -> Option<u64> {
        self.uploaded_revision
    }

    /// Paint the grid into `rect`
    pub fn render(&mut self, painter: &egui::Painter, rect: Rect, grid: &PixelGrid) {
        self.sync(grid);

        let n = grid.dimensions();
        if n == 0 {
            return;
        }

        // Transparent cells show a checkerboard, one square per cell
        let repeats = n as f32 / 2.0;
        let checker_uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(repeats, repeats));
        let checker = self.checker_texture();
        painter.image(checker, rect, checker_uv, Color32::WHITE);

        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_sync_uploads_only_on_change() {
        let mut renderer = Renderer::with_context(egui::Context::default());
        let mut grid = PixelGrid::new(4);

        assert!(renderer.sync(&grid));
        assert!(!renderer.sync(&grid));

        grid.set(1, 1, Color::rgb(255, 0, 0)).unwrap();
        assert!(renderer.sync(&grid));
        assert_eq!(renderer.uploaded_revision(), Some(grid.revision()));
    }

    #[test]
    fn test_render_basics() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::with_context(ctx.clone());
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(64.0, 64.0));
        let painter = egui::Painter::new(ctx, layer_id, rect);

        let grid = PixelGrid::new(8);
        renderer.render(&painter, rect, &grid);
        assert_eq!(renderer.uploaded_revision(), Some(0));
    }

    #[test]
    fn test_checker_texture_is_created_once() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::with_context(ctx.clone());
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(320.0, 320.0));
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        let mut grid = PixelGrid::new(32);

        renderer.render(&painter, rect, &grid);
        let first = renderer.checker.as_ref().map(|t| t.id());
        grid.set(3, 3, Color::rgb(0, 0, 255)).unwrap();
        renderer.render(&painter, rect, &grid);

        assert!(first.is_some());
        assert_eq!(renderer.checker.as_ref().map(|t| t.id()), first);
        assert_eq!(renderer.checker.as_ref().map(|t| t.size()), Some([2, 2]));
    }
}
