use egui::{Context, Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer events on the canvas, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button went down over the canvas
    Press(Pos2),
    /// Pointer moved over the canvas
    Move(Pos2),
    /// Primary button was released
    Release,
    /// Pointer left the canvas
    Leave,
}

/// Maps screen positions on the displayed canvas to grid cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapping {
    pub rect: Rect,
    pub resolution: usize,
}

impl CanvasMapping {
    pub fn new(rect: Rect, resolution: usize) -> Self {
        Self { rect, resolution }
    }

    /// Floor-divide a position into grid coordinates.
    /// Returns `None` for anything outside `[0, resolution)` on either axis.
    pub fn to_grid(&self, pos: Pos2) -> Option<(i32, i32)> {
        if self.resolution == 0 {
            return None;
        }
        let n = self.resolution as f32;
        let cell = egui::vec2(self.rect.width() / n, self.rect.height() / n);
        if cell.x <= 0.0 || cell.y <= 0.0 {
            return None;
        }

        let gx = ((pos.x - self.rect.min.x) / cell.x).floor();
        let gy = ((pos.y - self.rect.min.y) / cell.y).floor();
        if !(gx.is_finite() && gy.is_finite()) {
            return None;
        }
        if gx < 0.0 || gy < 0.0 || gx >= n || gy >= n {
            return None;
        }
        Some((gx as i32, gy as i32))
    }
}

/// Turns raw egui pointer state into canvas [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pointer_inside: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's primary-button input against the canvas rect
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            match pointer.hover_pos() {
                Some(pos) => {
                    let inside = canvas_rect.contains(pos);
                    if self.pointer_inside && !inside {
                        events.push(InputEvent::Leave);
                    }

                    if inside && pointer.primary_pressed() {
                        events.push(InputEvent::Press(pos));
                    } else if inside && Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::Move(pos));
                    }

                    self.pointer_inside = inside;
                    self.last_pointer_pos = Some(pos);
                }
                None => {
                    // Pointer left the window entirely
                    if self.pointer_inside {
                        events.push(InputEvent::Leave);
                    }
                    self.pointer_inside = false;
                    self.last_pointer_pos = None;
                }
            }

            if pointer.primary_released() {
                events.push(InputEvent::Release);
            }
        });

        events
    }
}
