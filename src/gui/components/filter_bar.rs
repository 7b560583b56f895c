// src/gui/components/filter_bar.rs
//
// Search box + role selector + live row count. Applies filter changes
// directly to `app` and rebuilds the view. No debouncing: every edit
// refilters.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let roles = app.roster.roles();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search_query)
                .hint_text("name, code or role")
                .desired_width(220.0),
        );
        if resp.changed() { changed = true; }

        ui.label("Role:");
        let selected = if app.state.gui.role_filter.is_empty() {
            s!("All roles")
        } else {
            app.state.gui.role_filter.clone()
        };
        egui::ComboBox::from_id_salt("role_filter")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui.selectable_value(&mut app.state.gui.role_filter, s!(), "All roles")
                    .clicked()
                {
                    changed = true;
                }
                for role in &roles {
                    if ui.selectable_value(&mut app.state.gui.role_filter, role.clone(), role.as_str())
                        .clicked()
                    {
                        changed = true;
                    }
                }
            });

        ui.label(format!("{} member(s)", app.view.len()));
    });

    if changed {
        app.rebuild_view();
        logd!(
            "UI: Filter changed (query='{}', role='{}') → {} row(s)",
            app.state.gui.search_query,
            app.state.gui.role_filter,
            app.view.len()
        );
    }
}
