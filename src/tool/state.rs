use super::ToolType;

/// Which tool is selected and whether a press is currently held on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    tool: ToolType,
    drawing: bool,
}

impl ToolState {
    pub fn new(tool: ToolType) -> Self {
        Self { tool, drawing: false }
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    /// Switch tools; grid contents are untouched.
    ///
    /// An in-progress drag always ends here, so the new tool only acts after
    /// its own press.
    pub fn set_tool(&mut self, tool: ToolType) {
        if self.tool != tool {
            log::info!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        }
        self.tool = tool;
        self.drawing = false;
    }

    pub fn press(&mut self) {
        self.drawing = true;
    }

    pub fn release(&mut self) {
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}
