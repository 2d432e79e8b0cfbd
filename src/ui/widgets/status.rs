//! 状态相关组件
//!
//! 状态栏消息在显示一段时间后自动消失。

use egui;
use std::time::{Duration, Instant};

/// 状态栏
#[derive(Debug, Default)]
pub struct StatusBar {
    message: Option<(String, Instant)>,
}

impl StatusBar {
    /// 显示一条消息，`duration` 后清除
    pub fn show_message(
        &mut self,
        message: impl Into<String>,
        duration: Duration,
    ) {
        self.message = Some((message.into(), Instant::now() + duration));
    }

    /// 渲染状态栏
    pub fn show(&mut self, ctx: &egui::Context) {
        if let Some((_, expires)) = &self.message {
            let now = Instant::now();
            if now >= *expires {
                self.message = None;
            } else {
                ctx.request_repaint_after(*expires - now);
            }
        }

        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .show(ctx, |ui| {
                let text = self
                    .message
                    .as_ref()
                    .map(|(m, _)| m.as_str())
                    .unwrap_or("");
                ui.label(text);
            });
    }
}
