//! # 单文件改写
//!
//! 读取整个文件 → 全局切除 → 回写原路径。
//!
//! ## 功能
//! - 仅在内容变化时写入（可切换为总是写入）
//! - 临时文件 + rename 的原子替换
//! - 可选 `.bak` 备份
//! - dry-run 只计算不写入
//!
//! ## 依赖关系
//! - 被 `commands/strip.rs`, `commands/scan.rs` 调用
//! - 使用 `excise/pattern.rs`

use crate::error::{ExciseError, Result};
use crate::excise::Pattern;

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 回写策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// 仅内容变化时写入
    #[default]
    IfChanged,
    /// 总是写入
    Always,
}

/// 改写选项
#[derive(Debug, Clone, Copy)]
pub struct RewriteOptions {
    pub policy: WritePolicy,
    pub dry_run: bool,
    pub backup: bool,
    pub atomic: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            policy: WritePolicy::IfChanged,
            dry_run: false,
            backup: false,
            atomic: true,
        }
    }
}

/// 单文件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 移除了至少一个片段
    Changed { removed: usize },
    /// 没有匹配
    Unchanged,
}

/// 对单个文件执行切除
pub fn rewrite_file(
    path: &Path,
    pattern: &Pattern,
    options: &RewriteOptions,
) -> Result<FileOutcome> {
    let bytes = fs::read(path).map_err(|e| ExciseError::read(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| ExciseError::DecodeError {
        path: path.display().to_string(),
        reason: e.utf8_error().to_string(),
    })?;

    let excision = pattern.excise(&content);
    let outcome = if excision.changed() {
        FileOutcome::Changed {
            removed: excision.removed,
        }
    } else {
        FileOutcome::Unchanged
    };

    if options.dry_run {
        return Ok(outcome);
    }
    if outcome == FileOutcome::Unchanged && options.policy == WritePolicy::IfChanged {
        return Ok(outcome);
    }

    if options.backup {
        let bak = sibling(path, ".bak");
        fs::copy(path, &bak).map_err(|e| ExciseError::write(&bak, e))?;
    }

    if options.atomic {
        write_atomic(path, excision.text.as_bytes())?;
    } else {
        fs::write(path, excision.text.as_bytes()).map_err(|e| ExciseError::write(path, e))?;
    }

    Ok(outcome)
}

/// 先写同目录临时文件，再 rename 覆盖原文件
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let perms = fs::metadata(path)
        .map_err(|e| ExciseError::read(path, e))?
        .permissions();

    // 随机临时文件名不会与已有文件冲突，失败时自动删除
    let mut tmp = tempfile::Builder::new()
        .prefix(".excise-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| ExciseError::write(path, e))?;
    tmp.write_all(data)
        .and_then(|_| fs::set_permissions(tmp.path(), perms))
        .map_err(|e| ExciseError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| ExciseError::write(path, e.error))?;

    Ok(())
}

/// 在文件名后追加后缀得到同目录路径
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}
