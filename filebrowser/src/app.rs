//! Files: the browser window
//!
//! Every button, menu item, and key press becomes an [`fscore::Command`].
//! The window only keeps what the controller doesn't: the selection, the
//! path bar text, open dialogs, and content viewers.

use crate::format::{entry_icon, format_size, modified_column, size_column};
use egui::{Context, Key};
use fscore::{Command, Controller, DeleteTarget, EntryKind, Outcome, Selection};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;
use uicore::dither::draw_window_shadow;
use uicore::safety::{catch_or, truncate_display};
use uicore::theme::{consume_special_keys, menu_bar, Palette};
use uicore::widgets::{self, entry_header, shortcut_row, status_bar, ActionButton, EntryRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    File,
    Directory,
}

impl PromptKind {
    fn title(self) -> &'static str {
        match self {
            PromptKind::File => "create file",
            PromptKind::Directory => "create directory",
        }
    }

    fn question(&self, append_txt: bool) -> &'static str {
        match (self, append_txt) {
            (PromptKind::File, true) => "file name (without extension):",
            (PromptKind::File, false) => "file name:",
            (PromptKind::Directory, _) => "directory name:",
        }
    }

    fn default_name(self) -> &'static str {
        match self {
            PromptKind::File => "untitled",
            PromptKind::Directory => "untitled folder",
        }
    }
}

/// At most one blocking dialog is open at a time.
#[derive(Debug)]
enum Dialog {
    Prompt { kind: PromptKind, input: String },
    Confirm(DeleteTarget),
    Notice { title: String, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogAction {
    None,
    Dismiss,
    Accept,
}

/// A read-only window showing one file's content.
struct Viewer {
    id: u64,
    title: String,
    text: String,
    open: bool,
}

pub struct BrowserApp {
    controller: Controller,
    /// On-disk name of the selected entry
    selected: Option<OsString>,
    path_input: String,
    /// Directory the selection and path bar belong to
    shown_dir: PathBuf,
    dialog: Option<Dialog>,
    focus_prompt: bool,
    viewers: Vec<Viewer>,
    next_viewer_id: u64,
    show_about: bool,
    show_shortcuts: bool,
}

impl BrowserApp {
    pub fn new(controller: Controller) -> Self {
        let shown_dir = controller.current_dir().to_path_buf();
        Self {
            path_input: shown_dir.to_string_lossy().to_string(),
            shown_dir,
            controller,
            selected: None,
            dialog: None,
            focus_prompt: false,
            viewers: Vec::new(),
            next_viewer_id: 0,
            show_about: false,
            show_shortcuts: false,
        }
    }

    fn selection(&self) -> Selection {
        Selection::from(self.selected.clone())
    }

    /// Run a command and turn its result into dialogs and viewers.
    fn dispatch(&mut self, command: Command) {
        match self.controller.execute(command) {
            Ok(outcome) => self.apply(outcome),
            Err(e) => {
                self.dialog = Some(Dialog::Notice {
                    title: e.title().to_string(),
                    text: e.to_string(),
                });
            }
        }
        self.sync_with_listing();
    }

    fn apply(&mut self, outcome: Outcome) {
        if let Some(text) = outcome.notice() {
            self.dialog = Some(Dialog::Notice { title: "success".into(), text });
        }
        match outcome {
            Outcome::Content { name, text } => {
                self.viewers.push(Viewer {
                    id: self.next_viewer_id,
                    title: format!("content: {}", truncate_display(&name, 40)),
                    text,
                    open: true,
                });
                self.next_viewer_id += 1;
            }
            Outcome::ConfirmDelete(target) => self.dialog = Some(Dialog::Confirm(target)),
            Outcome::Launched { name } => debug!(name = %name, "launched"),
            Outcome::Listed | Outcome::Unchanged | Outcome::Created { .. } | Outcome::Deleted { .. } => {}
        }
    }

    /// Drop a selection that no longer names a listed entry.
    fn sync_with_listing(&mut self) {
        let current = self.controller.current_dir();
        if current != self.shown_dir {
            self.shown_dir = current.to_path_buf();
            self.path_input = current.to_string_lossy().to_string();
            self.selected = None;
        }
        if let Some(name) = &self.selected {
            if self.controller.listing().get(name).is_none() {
                self.selected = None;
            }
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.dialog = Some(Dialog::Prompt { kind, input: kind.default_name().to_string() });
        self.focus_prompt = true;
    }

    fn accept_dialog(&mut self, dialog: Dialog) {
        match dialog {
            Dialog::Prompt { kind, input } => {
                if input.trim().is_empty() {
                    return;
                }
                let command = match kind {
                    PromptKind::File => Command::CreateFile(input),
                    PromptKind::Directory => Command::CreateDirectory(input),
                };
                self.dispatch(command);
            }
            Dialog::Confirm(target) => self.dispatch(Command::Delete(target)),
            Dialog::Notice { .. } => {}
        }
    }

    fn view_selected(&mut self) {
        let selection = self.selection();
        self.dispatch(Command::View(selection));
    }

    fn edit_selected(&mut self) {
        let selection = self.selection();
        self.dispatch(Command::Edit(selection));
    }

    fn delete_selected(&mut self) {
        let selection = self.selection();
        self.dispatch(Command::RequestDelete(selection));
    }

    fn open_selected(&mut self) {
        if let Some(name) = self.selected.clone() {
            self.dispatch(Command::Navigate(name));
        }
    }

    fn go_home(&mut self) {
        if let Some(home) = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            self.dispatch(Command::NavigateTo(home));
        }
    }

    /// Move the selection by `delta` rows, starting at the top if none.
    fn move_selection(&mut self, delta: isize) {
        let listing = self.controller.listing();
        if listing.is_empty() {
            return;
        }
        let last = listing.len() - 1;
        let next = match self.selected.as_deref().and_then(|n| listing.position(n)) {
            Some(idx) => idx.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.selected = Some(listing.entries[next].name.clone());
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        if self.dialog.is_some() {
            if ctx.input(|i| i.key_pressed(Key::Escape)) {
                self.dialog = None;
            }
            return;
        }

        // a focused text field (the path bar) owns the keyboard
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }

        let (up, down, enter, delete, escape, parent, refresh) = ctx.input(|i| {
            let cmd = i.modifiers.command;
            (
                !cmd && i.key_pressed(Key::ArrowUp),
                !cmd && i.key_pressed(Key::ArrowDown),
                i.key_pressed(Key::Enter),
                i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace),
                i.key_pressed(Key::Escape),
                cmd && i.key_pressed(Key::ArrowUp),
                cmd && i.key_pressed(Key::R),
            )
        });

        if up { self.move_selection(-1); }
        if down { self.move_selection(1); }
        if enter { self.open_selected(); }
        if delete && self.selected.is_some() { self.delete_selected(); }
        if escape { self.selected = None; }
        if parent { self.dispatch(Command::NavigateUp); }
        if refresh { self.dispatch(Command::Refresh); }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("▲").on_hover_text("up").clicked() {
                self.dispatch(Command::NavigateUp);
            }
            if ui.button("⟳").on_hover_text("refresh").clicked() {
                self.dispatch(Command::Refresh);
            }
            ui.separator();

            let r = ui.add(egui::TextEdit::singleline(&mut self.path_input).desired_width(f32::INFINITY));
            if r.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                let path = PathBuf::from(self.path_input.trim());
                self.dispatch(Command::NavigateTo(path));
                // an unusable path snaps back to where we are
                self.path_input = self.controller.current_dir().to_string_lossy().to_string();
            }
        });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        let has_selection = self.selected.is_some();
        ui.horizontal_wrapped(|ui| {
            if ui.add(ActionButton::new("Create File")).clicked() {
                self.open_prompt(PromptKind::File);
            }
            if ui.add(ActionButton::new("Create Directory")).clicked() {
                self.open_prompt(PromptKind::Directory);
            }
            if ui.add(ActionButton::new("View Content").enabled(has_selection)).clicked() {
                self.view_selected();
            }
            if ui.add(ActionButton::new("Modify Content").enabled(has_selection)).clicked() {
                self.edit_selected();
            }
            if ui.add(ActionButton::new("Delete").enabled(has_selection)).clicked() {
                self.delete_selected();
            }
            if ui.add(ActionButton::new("Refresh")).clicked() {
                self.dispatch(Command::Refresh);
            }
        });
    }

    fn render_entries(&mut self, ui: &mut egui::Ui) {
        entry_header(ui);
        ui.add_space(2.0);

        let mut clicked: Option<OsString> = None;
        let mut double_clicked: Option<OsString> = None;

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let listing = self.controller.listing();
            if listing.is_empty() {
                ui.label("(empty)");
            }
            for entry in &listing.entries {
                let size = size_column(entry);
                let modified = modified_column(entry);
                let is_selected = self.selected.as_deref() == Some(entry.name.as_os_str());
                let response = ui.add(
                    EntryRow::new(entry_icon(entry), &entry.display)
                        .size(&size)
                        .modified(&modified)
                        .selected(is_selected),
                );
                if response.double_clicked() {
                    double_clicked = Some(entry.name.clone());
                } else if response.clicked() {
                    clicked = Some(entry.name.clone());
                }
            }
        });

        if let Some(name) = clicked {
            self.selected = Some(name);
        }
        if let Some(name) = double_clicked {
            self.selected = Some(name.clone());
            self.dispatch(Command::Navigate(name));
        }
    }

    fn status_text(&self) -> String {
        let listing = self.controller.listing();
        let mut info = match self.selected.as_deref().and_then(|n| listing.get(n)) {
            Some(e) => format!(
                "{}  —  {}",
                truncate_display(&e.display, 60),
                match e.kind {
                    EntryKind::File => format_size(e.size),
                    kind => kind.label().to_string(),
                }
            ),
            None => match listing.len() {
                1 => "1 item".to_string(),
                n => format!("{} items", n),
            },
        };
        if listing.stale {
            info.push_str("  (stale)");
        }
        info
    }

    fn render_dialog(&mut self, ctx: &Context) {
        let Some(mut current) = self.dialog.take() else {
            return;
        };
        let focus = std::mem::take(&mut self.focus_prompt);
        let append_txt = self.controller.naming() == fscore::FileNaming::AppendTxt;
        let mut action = DialogAction::None;

        let resp = match &mut current {
            Dialog::Prompt { kind, input } => widgets::dialog(kind.title()).show(ctx, |ui| {
                ui.label(kind.question(append_txt));
                let r = ui.text_edit_singleline(input);
                if focus {
                    r.request_focus();
                }
                if r.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    action = DialogAction::Accept;
                }
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.add(ActionButton::new("cancel")).clicked() {
                        action = DialogAction::Dismiss;
                    }
                    if ui.add(ActionButton::new("create")).clicked() {
                        action = DialogAction::Accept;
                    }
                });
            }),
            Dialog::Confirm(target) => widgets::dialog("confirm deletion").show(ctx, |ui| {
                ui.label(target.prompt());
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.add(ActionButton::new("no")).clicked() {
                        action = DialogAction::Dismiss;
                    }
                    if ui.add(ActionButton::new("yes")).clicked() {
                        action = DialogAction::Accept;
                    }
                });
            }),
            Dialog::Notice { title, text } => widgets::dialog(title.as_str()).show(ctx, |ui| {
                ui.label(text.as_str());
                ui.add_space(4.0);
                if ui.add(ActionButton::new("ok")).clicked() || ui.input(|i| i.key_pressed(Key::Enter)) {
                    action = DialogAction::Dismiss;
                }
            }),
        };
        if let Some(r) = &resp {
            draw_window_shadow(ctx, r.response.rect);
        }

        match action {
            DialogAction::None => self.dialog = Some(current),
            DialogAction::Dismiss => {}
            DialogAction::Accept => self.accept_dialog(current),
        }
    }

    fn render_viewers(&mut self, ctx: &Context) {
        for viewer in &mut self.viewers {
            let mut text: &str = &viewer.text;
            egui::Window::new(viewer.title.as_str())
                .id(egui::Id::new(("viewer", viewer.id)))
                .open(&mut viewer.open)
                .default_size([480.0, 360.0])
                .show(ctx, |ui| {
                    egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut text)
                                .code_editor()
                                .desired_width(f32::INFINITY),
                        );
                    });
                });
        }
        self.viewers.retain(|v| v.open);
    }

    fn render_about(&mut self, ctx: &Context) {
        let resp = widgets::dialog("about files").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("files");
                ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(8.0);
                ui.label("a minimal directory browser");
            });
            ui.add_space(8.0);
            ui.separator();
            ui.label("frameworks:");
            ui.label("  egui/eframe (MIT), chrono (MIT)");
            ui.label("  open (MIT)");
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("ok").clicked() { self.show_about = false; }
            });
        });
        if let Some(r) = &resp {
            draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn render_shortcuts(&mut self, ctx: &Context) {
        let resp = widgets::dialog("keyboard shortcuts").show(ctx, |ui| {
            ui.label(egui::RichText::new("Navigation").strong());
            ui.separator();
            shortcut_row(ui, "Enter", "Open selected directory");
            shortcut_row(ui, "⌘↑", "Go up one directory");
            shortcut_row(ui, "↑/↓", "Move between items");
            shortcut_row(ui, "Esc", "Deselect / close dialog");
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Files").strong());
            ui.separator();
            shortcut_row(ui, "⌫", "Delete selected item");
            shortcut_row(ui, "⌘R", "Refresh");
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("ok").clicked() { self.show_shortcuts = false; }
            });
        });
        if let Some(r) = &resp {
            draw_window_shadow(ctx, r.response.rect);
        }
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        let idle = self.dialog.is_none();

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.add_enabled_ui(idle, |ui| {
                menu_bar(ui, |ui| {
                    ui.menu_button("file", |ui| {
                        if ui.button("new file...").clicked() {
                            self.open_prompt(PromptKind::File);
                            ui.close_menu();
                        }
                        if ui.button("new directory...").clicked() {
                            self.open_prompt(PromptKind::Directory);
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.add_enabled(self.selected.is_some(), egui::Button::new("delete  ⌫")).clicked() {
                            self.delete_selected();
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.menu_button("view", |ui| {
                        if ui.button("refresh  ⌘R").clicked() {
                            self.dispatch(Command::Refresh);
                            ui.close_menu();
                        }
                    });
                    ui.menu_button("go", |ui| {
                        if ui.button("up  ⌘↑").clicked() {
                            self.dispatch(Command::NavigateUp);
                            ui.close_menu();
                        }
                        if ui.button("home").clicked() {
                            self.go_home();
                            ui.close_menu();
                        }
                    });
                    ui.menu_button("help", |ui| {
                        if ui.button("keyboard shortcuts").clicked() {
                            self.show_shortcuts = true;
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("about").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });
                });
            });
        });
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(idle, |ui| self.render_toolbar(ui));
        });
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let info = self.status_text();
            status_bar(ui, &info);
        });
        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.add_enabled_ui(idle, |ui| self.render_actions(ui));
            ui.add_space(2.0);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Palette::WHITE).inner_margin(egui::Margin::same(4.0)))
            .show(ctx, |ui| {
                ui.add_enabled_ui(idle, |ui| catch_or((), || self.render_entries(ui)));
            });

        self.render_viewers(ctx);
        if self.show_about {
            self.render_about(ctx);
        }
        if self.show_shortcuts {
            self.render_shortcuts(ctx);
        }
        self.render_dialog(ctx);
    }
}
