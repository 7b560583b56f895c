// src/gui/components/export_bar.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Exam code:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.exam_code)
                .hint_text("e.g. KITHI25")
                .desired_width(140.0),
        );

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.out_dir_text);
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Reload").clicked() {
            logf!("UI: Reload clicked");
            app.reload();
        }

        let n = app.state.gui.selected_codes.len();
        if ui.button(format!("Export ({n})")).clicked() {
            logf!("UI: Export clicked, {} selected", n);
            app.export();
        }

        if ui.button("Clear selection").clicked() {
            app.state.gui.selected_codes.clear();
        }

        ui.label(format!("Status: {}", app.status));
    });
}
