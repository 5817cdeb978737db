use crate::tool::ToolType;
use crate::PixelPaintApp;

pub fn tools_panel(app: &mut PixelPaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.tool_state().tool();
            for tool in ToolType::ALL {
                if ui.selectable_label(active == tool, tool.name()).clicked() {
                    app.set_tool(tool);
                }
            }
            ui.label(format!("Current tool: {}", app.tool_state().tool().name()));

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                ui.color_edit_button_srgb(app.brush_mut());
            });
            if let Some(hex) = app.brush_color().to_hex() {
                ui.monospace(hex);
            }

            ui.separator();

            if ui.button("Clear").clicked() {
                app.clear_canvas();
            }
            if ui.button("Download PNG").clicked() {
                app.export_png();
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
}
