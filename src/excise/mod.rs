//! # 切除核心模块
//!
//! 提供基于正则表达式的文本块切除能力。
//!
//! ## 功能
//! - 编译跨行匹配的移除模式
//! - 内置常用 HTML 块预设
//! - 单文件读取 → 替换 → 回写
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `regex` 进行匹配
//! - 子模块: pattern, presets, rewrite

pub mod pattern;
pub mod presets;
pub mod rewrite;

pub use pattern::Pattern;
pub use presets::{preset, PRESETS};
pub use rewrite::{rewrite_file, FileOutcome, RewriteOptions, WritePolicy};
