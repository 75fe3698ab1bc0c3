//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `strip`: 批量移除匹配的代码块（原地改写）
//! - `scan`: 只读统计匹配数量
//! - `presets`: 列出内置移除模式
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: strip, scan

pub mod scan;
pub mod strip;

use clap::{Parser, Subcommand};

/// excise - HTML 代码块批量移除工具
#[derive(Parser)]
#[command(name = "excise")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Remove regex-matched HTML blocks from a batch of files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Remove every match of a pattern from matching files, rewriting them in place
    Strip(strip::StripArgs),

    /// Count matches per file without modifying anything
    Scan(scan::ScanArgs),

    /// List built-in removal patterns
    Presets,
}
