//! 设置对话框

use egui;

use super::{PathKind, PathSelector};
use crate::ui::config::{DialogOutcome, SettingsDraft};

/// 渲染设置对话框
pub fn render_settings_dialog(
    ctx: &egui::Context,
    draft: &mut SettingsDraft,
) -> DialogOutcome {
    let mut outcome = DialogOutcome::Open;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .default_width(560.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("settings_form")
                .num_columns(2)
                .min_col_width(140.0)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Factorio executable:");
                    ui.add(
                        PathSelector::new(
                            &mut draft.executable_path,
                            PathKind::File,
                        )
                        .dialog_title("Select Factorio executable"),
                    );
                    ui.end_row();

                    ui.label("Saves directory:");
                    ui.add(
                        PathSelector::new(
                            &mut draft.saves_directory,
                            PathKind::Folder,
                        )
                        .dialog_title("Select saves directory"),
                    );
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    outcome = DialogOutcome::Accepted;
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });

    outcome
}
