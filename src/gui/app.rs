// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    data::{Filter, Roster, RosterView},
    export, roster,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "DST Roster",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical roster + current filtered view
    pub roster: Roster,
    pub view: RosterView,

    // output text field UX (we map this <-> ExportOptions)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            roster: Roster::default(),
            view: RosterView::default(),
            out_dir_text,
            out_dir_dirty: false,
            status: s!("Loading…"),
        };

        // Initial load. A failure leaves the table empty and says so in the
        // status line instead of failing silently.
        app.reload();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    fn filter(&self) -> Filter {
        Filter {
            query: self.state.gui.search_query.clone(),
            role: self.state.gui.role_filter.clone(),
        }
    }

    /// Recompute the view from the canonical roster and the live filter.
    pub fn rebuild_view(&mut self) {
        self.view = RosterView::filtered(&self.roster, &self.filter());
    }

    /// Selected codes in roster order: the render-time tags, read back by
    /// identity, never by row position.
    pub fn selected_in_order(&self) -> Vec<String> {
        self.roster.members.iter()
            .filter(|m| self.state.gui.selected_codes.contains(&m.code))
            .map(|m| m.code.clone())
            .collect()
    }

    /* ---------- actions ---------- */

    /// (Re)fetch the roster, replacing the dataset wholesale. Selection
    /// entries whose codes vanished from the new roster are pruned.
    pub fn reload(&mut self) {
        match roster::fetch(&self.state.options.server) {
            Ok(new) => {
                self.roster = new;
                let roster = &self.roster;
                self.state.gui.selected_codes.retain(|c| roster.has_code(c));
                self.rebuild_view();
                self.status(format!("Loaded {} member(s)", self.roster.len()));
            }
            Err(e) => {
                loge!("Roster: Load failed: {}", e);
                self.roster = Roster::default();
                self.state.gui.selected_codes.clear();
                self.rebuild_view();
                self.status(format!("Load error: {e}"));
            }
        }
    }

    /// Collect checked codes and run the export exchange. Precondition
    /// failures stop here with a status message and no request.
    pub fn export(&mut self) {
        let selected = self.selected_in_order();
        if selected.is_empty() {
            self.status("Select at least one member");
            return;
        }
        let exam_code = self.state.gui.exam_code.trim().to_string();
        if exam_code.is_empty() {
            self.status("Enter an exam code");
            return;
        }

        if self.out_dir_dirty {
            let text = self.out_dir_text.clone();
            self.state.options.export.set_dir(&text);
            self.out_dir_dirty = false;
        }

        self.status("Exporting…");
        let res = export::export_selection(
            &self.state.options.server,
            &self.state.options.export,
            &selected,
            &exam_code,
        );

        match res {
            Ok(path) => self.status(format!("Exported {}", path.display())),
            Err(e) => {
                loge!("Export: Error: {}", e);
                self.status(format!("Export error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::filter_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
