use egui::Pos2;

use crate::color::Color;
use crate::error::CanvasResult;
use crate::grid::PixelGrid;
use crate::tool::{apply_tool, ToolState};

use super::{CanvasMapping, InputEvent};

/// Route one canvas event to the selected tool.
///
/// Returns `true` when a tool was applied to the grid. Positions that map
/// outside the grid are dropped without error.
pub fn route_event(
    event: &InputEvent,
    state: &mut ToolState,
    grid: &mut PixelGrid,
    mapping: &CanvasMapping,
    color: Color,
) -> CanvasResult<bool> {
    match *event {
        InputEvent::Press(pos) => {
            state.press();
            draw_at(pos, state, grid, mapping, color)
        }
        InputEvent::Move(pos) => {
            if state.is_drawing() && state.tool().paints_while_dragging() {
                draw_at(pos, state, grid, mapping, color)
            } else {
                Ok(false)
            }
        }
        InputEvent::Release | InputEvent::Leave => {
            state.release();
            Ok(false)
        }
    }
}

fn draw_at(
    pos: Pos2,
    state: &ToolState,
    grid: &mut PixelGrid,
    mapping: &CanvasMapping,
    color: Color,
) -> CanvasResult<bool> {
    let Some((x, y)) = mapping.to_grid(pos) else {
        return Ok(false);
    };
    apply_tool(grid, x, y, state.tool(), color)?;
    Ok(true)
}
