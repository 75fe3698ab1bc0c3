//! # strip 命令实现
//!
//! 在目录树中批量移除匹配的 HTML 代码块。
//!
//! ## 功能
//! - 按后缀收集文件（可递归）
//! - 并行读取 → 全局替换 → 回写
//! - 逐文件隔离错误并汇总
//! - 有失败时以非零状态退出
//!
//! ## 依赖关系
//! - 使用 `cli/strip.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `excise/` 执行切除

use crate::batch::{BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::cli::strip::StripArgs;
use crate::commands::{resolve_target, Target};
use crate::error::{ExciseError, Result};
use crate::excise::{rewrite_file, FileOutcome, RewriteOptions, WritePolicy};
use crate::utils::output;

use std::path::Path;

/// 最多打印的失败条目
const MAX_FAILURES_SHOWN: usize = 10;

/// 执行 strip 命令
pub fn execute(args: StripArgs) -> Result<()> {
    output::print_header("Removing Matched Blocks");

    let target = resolve_target(&args.target)?;
    let options = RewriteOptions {
        policy: if args.always_write {
            WritePolicy::Always
        } else {
            WritePolicy::IfChanged
        },
        dry_run: args.dry_run,
        backup: args.backup,
        atomic: !args.no_atomic,
    };

    output::print_info(&format!("Pattern: {}", target.pattern.as_str()));
    output::print_info(&format!(
        "Scanning '{}' for '{}' files{}",
        target.root.display(),
        target.suffixes,
        if target.recursive { " (recursive)" } else { "" }
    ));

    let result = strip_tree(&target, &options, args.verbose)?;

    output::print_separator();
    if args.dry_run {
        output::print_warning("Dry run: no files were written");
    }
    output::print_success(&format!(
        "Batch complete: {} changed, {} unchanged, {} failed ({} blocks removed)",
        result.changed, result.unchanged, result.failed, result.removed
    ));

    check_failures(&result)?;

    output::print_done("Code removal complete.");
    Ok(())
}

/// 打印失败列表；存在失败时返回 `BatchFailed`（strip / scan 共用）
pub(crate) fn check_failures(result: &BatchResult) -> Result<()> {
    if result.failures.is_empty() {
        return Ok(());
    }

    output::print_warning("Failed files:");
    for (path, err) in result.failures.iter().take(MAX_FAILURES_SHOWN) {
        output::print_error(&format!("  {}: {}", path, err));
    }
    if result.failures.len() > MAX_FAILURES_SHOWN {
        output::print_warning(&format!(
            "  ... and {} more",
            result.failures.len() - MAX_FAILURES_SHOWN
        ));
    }

    Err(ExciseError::BatchFailed {
        failed: result.failed,
        total: result.total(),
    })
}

/// 收集并处理目标目录下的所有文件
pub(crate) fn strip_tree(
    target: &Target,
    options: &RewriteOptions,
    verbose: bool,
) -> Result<BatchResult> {
    let files = FileCollector::new(target.root.clone())
        .with_suffixes(&target.suffixes)
        .recursive(target.recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files ending with '{}' found",
            target.suffixes
        ));
        return Ok(BatchResult::default());
    }

    output::print_info(&format!("Found {} files", files.len()));

    BatchRunner::new(target.jobs)
        .verbose(verbose)
        .run(files, |file| process_file(file, target, options))
}

/// 处理单个文件
fn process_file(path: &Path, target: &Target, options: &RewriteOptions) -> ProcessResult {
    let display = path.display().to_string();
    match rewrite_file(path, &target.pattern, options) {
        Ok(FileOutcome::Changed { removed }) => ProcessResult::Changed(display, removed),
        Ok(FileOutcome::Unchanged) => ProcessResult::Unchanged(display),
        Err(e) => ProcessResult::Failed(display, e.to_string()),
    }
}
