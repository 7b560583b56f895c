// src/gui/components/data_table.rs
//
// Draws the live member table: checkbox, name, member code, role.
// Each checkbox is bound to the row's member code in the selection set, so
// a row keeps its checked state no matter how the view is refiltered or
// reordered around it.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let App { roster, view, state, .. } = app;
    let selected = &mut state.gui.selected_codes;

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::exact(24.0))                       // checkbox
        .column(Column::initial(220.0).at_least(80.0).clip(true))  // name
        .column(Column::initial(130.0).at_least(60.0))     // member code
        .column(Column::remainder().at_least(60.0))        // role
        .header(24.0, |mut header| {
            header.col(|_ui| {});
            for title in ["Name", "Member code", "Role"] {
                header.col(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.add(egui::Label::new(RichText::new(title).strong()).selectable(false));
                    });
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let row_idx = row.index();
                let Some(member) = view.member(roster, row_idx) else { return };

                let mut checked = selected.contains(&member.code);
                row.col(|ui| {
                    if ui.checkbox(&mut checked, "").changed() {
                        if checked {
                            selected.insert(member.code.clone());
                        } else {
                            selected.remove(&member.code);
                        }
                    }
                });
                row.col(|ui| { ui.label(&member.name); });
                row.col(|ui| { ui.label(&member.code); });
                row.col(|ui| { ui.label(&member.role); });
            });
        });
}
