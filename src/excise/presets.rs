//! # 内置移除预设
//!
//! 常见网页导出中需要剥离的 HTML 块。
//!
//! ## 依赖关系
//! - 被 `commands/strip.rs`, `commands/scan.rs`, `commands/presets.rs` 使用

use crate::error::{ExciseError, Result};

/// 命名的移除预设
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// 预设名称
    pub name: &'static str,
    /// 简要说明
    pub description: &'static str,
    /// 正则表达式（dot-all）
    pub expr: &'static str,
    /// 默认文件后缀
    pub suffix: &'static str,
}

/// 全部内置预设
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "site-footer",
        description: "Full-width site footer block and its wrapper",
        expr: r#"<div class="site-footer full-width">.*?</div>\s*</div>"#,
        suffix: ".html",
    },
    Preset {
        name: "nav-dropdown",
        description: "Navigation dropdown block",
        expr: r#"<div class="nav-dropdown">.*?</div>"#,
        suffix: ".html",
    },
    Preset {
        name: "nav-dropdown-htm",
        description: "Navigation dropdown block in .htm pages",
        expr: r#"<div class="nav-dropdown">.*?</div>"#,
        suffix: ".htm",
    },
];

/// 按名称查找预设
pub fn preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| ExciseError::UnknownPreset {
            name: name.to_string(),
        })
}
