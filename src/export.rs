use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::ExportError;
use crate::grid::PixelGrid;

/// Largest exported image side in pixels
pub const MAX_EXPORT_SIDE: u32 = 16384;

/// Side length of the exported image, if it fits within [`MAX_EXPORT_SIDE`]
pub fn export_side(size: usize, scale: u32) -> Option<u32> {
    u32::try_from(size)
        .ok()
        .and_then(|n| n.checked_mul(scale))
        .filter(|&side| side <= MAX_EXPORT_SIDE)
}

/// Nearest-neighbour upscale of the grid by `scale`.
///
/// Output pixel `(px, py)` is cell `(px / scale, py / scale)`; `Empty` cells
/// come out fully transparent. No blending happens across cell edges.
pub fn upscale(grid: &PixelGrid, scale: u32) -> Result<RgbaImage, ExportError> {
    if scale == 0 {
        return Err(ExportError::ZeroScale);
    }
    let n = grid.dimensions();
    let side = export_side(n, scale).ok_or(ExportError::TooLarge {
        size: n,
        scale,
        max: MAX_EXPORT_SIDE,
    })?;
    let cells = grid.cells();

    Ok(RgbaImage::from_fn(side, side, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        cells[y * n + x].into()
    }))
}

/// Upscale the grid and write it as a PNG
pub fn save_png(grid: &PixelGrid, scale: u32, path: &Path) -> Result<(), ExportError> {
    let image = upscale(grid, scale)?;
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!(
        "Exported {}x{} PNG to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// One texel per cell, for uploading as a nearest-filtered texture
pub fn to_color_image(grid: &PixelGrid) -> egui::ColorImage {
    let n = grid.dimensions();
    let rgba: Vec<u8> = grid.cells().iter().flat_map(|c| c.to_rgba()).collect();
    egui::ColorImage::from_rgba_unmultiplied([n, n], &rgba)
}
