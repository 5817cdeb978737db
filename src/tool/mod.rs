mod state;

pub use state::ToolState;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::CanvasResult;
use crate::fill;
use crate::grid::PixelGrid;

/// The three editing tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolType {
    #[default]
    Pencil,
    Eraser,
    Bucket,
}

impl ToolType {
    pub const ALL: [ToolType; 3] = [ToolType::Pencil, ToolType::Eraser, ToolType::Bucket];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
            Self::Bucket => "Bucket",
        }
    }

    /// Whether dragging with the button held keeps applying the tool.
    /// The bucket fires once per press.
    pub fn paints_while_dragging(self) -> bool {
        !matches!(self, Self::Bucket)
    }
}

/// Apply `tool` at one cell: pencil sets it, eraser clears it, bucket
/// flood-fills from it. Out-of-range coordinates propagate as errors.
pub fn apply_tool(grid: &mut PixelGrid, x: i32, y: i32, tool: ToolType, color: Color) -> CanvasResult<()> {
    match tool {
        ToolType::Pencil => grid.set(x, y, color),
        ToolType::Eraser => grid.clear(x, y),
        ToolType::Bucket => {
            let report = fill::fill(grid, x, y, color)?;
            log::debug!("Bucket at ({}, {}): {:?}", x, y, report);
            Ok(())
        }
    }
}
