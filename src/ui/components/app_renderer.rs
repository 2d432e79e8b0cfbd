//! 应用渲染器模块
//!
//! 负责渲染主窗口：启动按钮、最新存档、服务器列表

use egui;

use crate::app::config::types::ServerEntry;

/// 用户动作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    None,
    LaunchNormal,
    ContinueLatest,
    OpenSettings,
    AddServer,
    EditServer,
    RemoveServer,
    ConnectServer,
}

/// 应用渲染器
pub struct AppRenderer;

impl AppRenderer {
    /// 渲染启动按钮区，返回用户动作
    pub fn render_launch_controls(
        ui: &mut egui::Ui,
        latest_save: &str,
    ) -> UserAction {
        let mut action = UserAction::None;

        ui.horizontal(|ui| {
            if ui.button("Launch Factorio (normal)").clicked() {
                action = UserAction::LaunchNormal;
            }
            if ui.button("Continue last save").clicked() {
                action = UserAction::ContinueLatest;
            }
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.button("Settings").clicked() {
                        action = UserAction::OpenSettings;
                    }
                },
            );
        });

        ui.add_space(4.0);
        ui.label(latest_save);
        action
    }

    /// 渲染服务器区，返回用户动作
    pub fn render_servers(
        ui: &mut egui::Ui,
        servers: &[ServerEntry],
        selected: &mut Option<usize>,
    ) -> UserAction {
        let mut action = UserAction::None;

        ui.group(|ui| {
            ui.heading("Servers");
            ui.separator();
            super::render_server_table(ui, servers, selected);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let has_selection = selected.is_some();
                if ui.button("Add").clicked() {
                    action = UserAction::AddServer;
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Edit"))
                    .clicked()
                {
                    action = UserAction::EditServer;
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Remove"))
                    .clicked()
                {
                    action = UserAction::RemoveServer;
                }
                ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        if ui
                            .add_enabled(
                                has_selection,
                                egui::Button::new("Launch Game (open client)"),
                            )
                            .clicked()
                        {
                            action = UserAction::ConnectServer;
                        }
                    },
                );
            });
        });

        action
    }
}
