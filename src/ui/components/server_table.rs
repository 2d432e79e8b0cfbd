//! 服务器列表

use egui;

use crate::app::config::types::ServerEntry;

/// 渲染服务器列表，点击行即选中
pub fn render_server_table(
    ui: &mut egui::Ui,
    servers: &[ServerEntry],
    selected: &mut Option<usize>,
) {
    egui::ScrollArea::vertical()
        .max_height(180.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("servers_table")
                .num_columns(4)
                .min_col_width(80.0)
                .spacing([20.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Name");
                    ui.strong("Host");
                    ui.strong("Port");
                    ui.strong("User");
                    ui.end_row();

                    for (index, server) in servers.iter().enumerate() {
                        let is_selected = *selected == Some(index);
                        if ui
                            .selectable_label(is_selected, &server.name)
                            .clicked()
                        {
                            *selected = Some(index);
                        }
                        ui.label(&server.host);
                        ui.label(server.port.to_string());
                        ui.label(&server.user);
                        ui.end_row();
                    }
                });
        });
}
