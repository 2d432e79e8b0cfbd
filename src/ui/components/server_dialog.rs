//! 添加/编辑服务器对话框

use egui;

use crate::ui::config::{DialogOutcome, ServerDialogMode, ServerDraft};

/// 渲染服务器对话框
pub fn render_server_dialog(
    ctx: &egui::Context,
    draft: &mut ServerDraft,
) -> DialogOutcome {
    let mut outcome = DialogOutcome::Open;
    let title = match draft.mode {
        ServerDialogMode::Add => "Add Server",
        ServerDialogMode::Edit(_) => "Edit Server",
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let form = &mut draft.form;
            egui::Grid::new("server_form")
                .num_columns(2)
                .min_col_width(80.0)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label("Host:");
                    ui.text_edit_singleline(&mut form.host);
                    ui.end_row();

                    ui.label("Port:");
                    ui.add(
                        egui::DragValue::new(&mut form.port)
                            .range(1..=65535),
                    );
                    ui.end_row();

                    ui.label("User:");
                    ui.text_edit_singleline(&mut form.user);
                    ui.end_row();

                    ui.label("Password:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.password)
                            .password(true),
                    );
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = DialogOutcome::Accepted;
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });

    outcome
}
