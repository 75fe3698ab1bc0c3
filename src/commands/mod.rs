//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `excise/`, `batch/`, `utils/`
//! - 子模块: strip, scan, presets

pub mod presets;
pub mod scan;
pub mod strip;

use crate::cli::strip::TargetArgs;
use crate::cli::Commands;
use crate::error::{ExciseError, Result};
use crate::excise::{self, Pattern};

use std::path::PathBuf;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Strip(args) => strip::execute(args),
        Commands::Scan(args) => scan::execute(args),
        Commands::Presets => presets::execute(),
    }
}

/// 解析后的处理目标
pub(crate) struct Target {
    pub root: PathBuf,
    pub pattern: Pattern,
    pub suffixes: String,
    pub recursive: bool,
    pub jobs: usize,
}

/// 从参数确定移除模式和后缀（模式在启动时编译一次）
pub(crate) fn resolve_target(args: &TargetArgs) -> Result<Target> {
    let (pattern, default_suffix) = match (&args.preset, &args.pattern, &args.open, &args.close) {
        (Some(name), _, _, _) => {
            let preset = excise::preset(name)?;
            (Pattern::new(preset.expr)?, preset.suffix)
        }
        (None, Some(expr), _, _) => (Pattern::new(expr)?, ".html"),
        (None, None, Some(open), Some(close)) => (Pattern::between(open, close)?, ".html"),
        _ => {
            return Err(ExciseError::InvalidArgument(
                "one of --preset, --pattern or --open/--close is required".to_string(),
            ))
        }
    };

    Ok(Target {
        root: args.root.clone(),
        pattern,
        suffixes: args
            .ext
            .clone()
            .unwrap_or_else(|| default_suffix.to_string()),
        recursive: args.recursive,
        jobs: args.jobs,
    })
}
