//! # scan 子命令 CLI 定义
//!
//! 只读统计每个文件中的匹配数量
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use super::strip::TargetArgs;
use clap::Args;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print one line per scanned file, including files without matches
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
