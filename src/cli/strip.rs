//! # strip 子命令 CLI 定义
//!
//! 从目录树中的 HTML 文件批量移除匹配的代码块
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `TargetArgs` 同时被 `cli/scan.rs` 复用
//! - 参数传递给 `commands/strip.rs`

use clap::Args;
use std::path::PathBuf;

/// 目标文件与移除模式选择（strip / scan 共用）
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Root directory containing the files to process
    #[arg(env = "EXCISE_ROOT")]
    pub root: PathBuf,

    /// Built-in pattern to remove (see `excise presets`)
    #[arg(short, long, conflicts_with_all = ["pattern", "open"])]
    pub preset: Option<String>,

    /// Regular expression to remove ('.' also matches newlines)
    #[arg(long, conflicts_with = "open")]
    pub pattern: Option<String>,

    /// Literal opening fragment of the block to remove (used with --close)
    #[arg(long, requires = "close")]
    pub open: Option<String>,

    /// Literal closing fragment of the block to remove (used with --open)
    #[arg(long, requires = "open")]
    pub close: Option<String>,

    /// File name suffixes to process, comma separated (case-sensitive, e.g. ".html,.htm");
    /// whitespace around each comma-separated entry is ignored
    #[arg(short, long)]
    pub ext: Option<String>,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, env = "EXCISE_JOBS", default_value_t = 0)]
    pub jobs: usize,
}

/// strip 子命令参数
#[derive(Args, Debug)]
pub struct StripArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Rewrite every matching file even when nothing was removed
    #[arg(long, default_value_t = false)]
    pub always_write: bool,

    /// Report what would change without writing anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Keep a copy of each rewritten file as <name>.bak
    #[arg(long, default_value_t = false)]
    pub backup: bool,

    /// Write files in place instead of via a temporary file and rename
    #[arg(long, default_value_t = false)]
    pub no_atomic: bool,

    /// Print one line per processed file
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
