//! GUI主应用程序模块

use egui;
use std::time::Duration;

use crate::app::config::types::{LauncherConfig, ServerForm};
use crate::app::error::types::{AppError, LauncherError, Result};
use crate::core::paths::PathGuesser;
use crate::core::services::{latest_save_summary, LauncherService};

use super::components::{
    render_server_dialog, render_settings_dialog, AppRenderer,
    UserAction,
};
use super::config::{
    DialogOutcome, Notice, ServerDialogMode, ServerDraft,
    SettingsDraft,
};
use super::widgets::status::StatusBar;

const SHORT_STATUS: Duration = Duration::from_secs(3);
const LONG_STATUS: Duration = Duration::from_secs(4);

/// GUI 应用程序
pub struct QuickLaunchApp {
    service: LauncherService,
    config: LauncherConfig,
    latest_save: String,
    selected_server: Option<usize>,
    settings_dialog: Option<SettingsDraft>,
    server_dialog: Option<ServerDraft>,
    notice: Option<Notice>,
    status: StatusBar,
}

impl QuickLaunchApp {
    /// 加载配置并创建应用
    pub fn new(service: LauncherService) -> Self {
        let config = service.bootstrap(&PathGuesser::from_user_home());
        let latest_save = latest_save_summary(&config);

        Self {
            service,
            config,
            latest_save,
            selected_server: None,
            settings_dialog: None,
            server_dialog: None,
            notice: None,
            status: StatusBar::default(),
        }
    }

    fn report(&mut self, error: LauncherError) {
        tracing::warn!("{}", error);
        let message = match &error {
            LauncherError::PathNotFound { .. } => {
                "Factorio executable not found.".to_string()
            }
            LauncherError::NoSaveFound { .. } => "No save found.".to_string(),
            LauncherError::Validation { message, .. } => message.clone(),
            LauncherError::LaunchFailed { message } => message.clone(),
            other => other.to_string(),
        };
        self.notice = Some(Notice::new(error.title(), message));
    }

    fn refresh_latest_save(&mut self) {
        self.latest_save = latest_save_summary(&self.config);
    }

    fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::None => {}
            UserAction::LaunchNormal => {
                match self.service.launch_normal(&self.config) {
                    Ok(_) => self
                        .status
                        .show_message("Launched Factorio.", SHORT_STATUS),
                    Err(e) => self.report(e),
                }
            }
            UserAction::ContinueLatest => {
                match self.service.continue_latest(&self.config) {
                    Ok(_) => self
                        .status
                        .show_message("Launching latest save…", SHORT_STATUS),
                    Err(e) => self.report(e),
                }
            }
            UserAction::ConnectServer => {
                let Some(index) = self.selected_server else {
                    self.report(AppError::validation(
                        "Server",
                        "Select a server first.",
                    ));
                    return;
                };
                match self.service.connect_to_server(&self.config, index) {
                    Ok(_) => {
                        let address = self.config.servers[index].address();
                        self.status.show_message(
                            format!("Connecting to {address}…"),
                            LONG_STATUS,
                        );
                    }
                    Err(e) => self.report(e),
                }
            }
            UserAction::OpenSettings => {
                self.settings_dialog =
                    Some(SettingsDraft::from_config(&self.config));
            }
            UserAction::AddServer => {
                self.server_dialog = Some(ServerDraft {
                    mode: ServerDialogMode::Add,
                    form: ServerForm::default(),
                });
            }
            UserAction::EditServer => {
                let Some(index) = self.selected_server else {
                    return;
                };
                if let Some(form) =
                    self.service.server_form(&self.config, index)
                {
                    self.server_dialog = Some(ServerDraft {
                        mode: ServerDialogMode::Edit(index),
                        form,
                    });
                }
            }
            UserAction::RemoveServer => {
                if let Some(index) = self.selected_server.take() {
                    if let Err(e) =
                        self.service.remove_server(&mut self.config, index)
                    {
                        self.report(e);
                    }
                }
            }
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(draft) = self.settings_dialog.as_mut() {
            match render_settings_dialog(ctx, draft) {
                DialogOutcome::Open => {}
                DialogOutcome::Cancelled => self.settings_dialog = None,
                DialogOutcome::Accepted => {
                    let draft = self.settings_dialog.take().unwrap_or_default();
                    self.apply_settings(draft);
                }
            }
        }

        if let Some(draft) = self.server_dialog.as_mut() {
            match render_server_dialog(ctx, draft) {
                DialogOutcome::Open => {}
                DialogOutcome::Cancelled => self.server_dialog = None,
                DialogOutcome::Accepted => {
                    let draft = draft.clone();
                    // 校验失败时保留对话框，方便修改后重试
                    if let Err(e) = self.apply_server(&draft) {
                        self.report(e);
                    } else {
                        self.server_dialog = None;
                    }
                }
            }
        }

        if let Some(notice) = &self.notice {
            let mut dismissed = false;
            egui::Window::new(&notice.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&notice.message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.notice = None;
            }
        }
    }

    fn apply_settings(&mut self, draft: SettingsDraft) {
        match self.service.update_settings(
            &mut self.config,
            &draft.executable_path,
            &draft.saves_directory,
        ) {
            Ok(()) => {
                self.refresh_latest_save();
                self.status.show_message("Settings saved.", SHORT_STATUS);
            }
            Err(e) => self.report(e),
        }
    }

    fn apply_server(&mut self, draft: &ServerDraft) -> Result<()> {
        match draft.mode {
            ServerDialogMode::Add => {
                self.service.add_server(&mut self.config, &draft.form)
            }
            ServerDialogMode::Edit(index) => self.service.edit_server(
                &mut self.config,
                index,
                &draft.form,
            ),
        }
    }
}

impl eframe::App for QuickLaunchApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        self.status.show(ctx);

        let mut action = UserAction::None;
        // 有对话框时禁用主窗口
        let modal_open = self.settings_dialog.is_some()
            || self.server_dialog.is_some()
            || self.notice.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                let launch = AppRenderer::render_launch_controls(
                    ui,
                    &self.latest_save,
                );
                ui.add_space(12.0);
                let servers = AppRenderer::render_servers(
                    ui,
                    &self.config.servers,
                    &mut self.selected_server,
                );
                action = if launch != UserAction::None {
                    launch
                } else {
                    servers
                };
            });
        });

        self.handle_action(action);
        self.show_dialogs(ctx);
    }
}

/// 启动 GUI 应用程序
pub fn run_gui(service: LauncherService) -> Result<()> {
    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size([800.0, 420.0])
        .with_min_inner_size([600.0, 360.0])
        .with_resizable(true)
        .with_title("Factorio Launcher");

    let options = eframe::NativeOptions {
        viewport: viewport_builder,
        hardware_acceleration:
            eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        "Factorio Launcher",
        options,
        Box::new(move |_cc| Ok(Box::new(QuickLaunchApp::new(service)))),
    )
    .map_err(|e| {
        tracing::error!("GUI startup failed: {}", e);
        AppError::Gui(e.to_string())
    })?;

    Ok(())
}
