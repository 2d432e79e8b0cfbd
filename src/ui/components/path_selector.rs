//! 路径选择组件 - 包含输入框和浏览按钮的组合组件

use egui;
use egui_extras::{Size, StripBuilder};

/// 浏览按钮选择的对象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Folder,
}

/// 路径选择组件
/// 包含文本输入框和浏览按钮的组合
pub struct PathSelector<'a> {
    path: &'a mut String,
    kind: PathKind,
    dialog_title: Option<String>,
}

impl<'a> PathSelector<'a> {
    /// 创建新的路径选择组件
    pub fn new(path: &'a mut String, kind: PathKind) -> Self {
        Self {
            path,
            kind,
            dialog_title: None,
        }
    }

    /// 设置文件对话框标题
    pub fn dialog_title(mut self, title: impl Into<String>) -> Self {
        self.dialog_title = Some(title.into());
        self
    }
}

fn browse(
    kind: PathKind,
    title: Option<&str>,
) -> Option<std::path::PathBuf> {
    let mut dialog = rfd::FileDialog::new();
    if let Some(title) = title {
        dialog = dialog.set_title(title);
    }
    match kind {
        PathKind::File => dialog.pick_file(),
        PathKind::Folder => dialog.pick_folder(),
    }
}

impl<'a> egui::Widget for PathSelector<'a> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let Self {
            path,
            kind,
            dialog_title,
        } = self;
        let mut text_response = None;

        StripBuilder::new(ui)
            .size(Size::remainder()) // 输入框占用剩余空间
            .size(Size::exact(70.0)) // 按钮固定宽度
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    text_response = Some(ui.add(
                        egui::TextEdit::singleline(&mut *path)
                            .desired_width(f32::INFINITY),
                    ));
                });

                strip.cell(|ui| {
                    if ui.button("Browse…").clicked() {
                        if let Some(picked) =
                            browse(kind, dialog_title.as_deref())
                        {
                            *path = picked.to_string_lossy().to_string();
                        }
                    }
                });
            });

        text_response.unwrap_or_else(|| {
            ui.allocate_response(
                egui::Vec2::ZERO,
                egui::Sense::hover(),
            )
        })
    }
}
