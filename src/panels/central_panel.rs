use crate::PixelPaintApp;

pub fn central_panel(app: &mut PixelPaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let side = app.config().display_size;

        // Fixed-size square canvas; click_and_drag keeps drags from moving the window
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(ctx, canvas_rect);
        app.render(&painter, canvas_rect);
    });
}
