//! # 统一错误处理模块
//!
//! 定义 excise 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::io;
use std::path::Path;
use thiserror::Error;

/// excise 统一错误类型
#[derive(Error, Debug)]
pub enum ExciseError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to traverse directory: {path}\nReason: {reason}")]
    TraversalError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 内容错误
    // ─────────────────────────────────────────────────────────────
    #[error("File is not valid UTF-8: {path}\nReason: {reason}")]
    DecodeError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 模式错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid removal pattern '{pattern}'\nReason: {reason}")]
    PatternError { pattern: String, reason: String },

    #[error("Unknown preset '{name}' (run `excise presets` to list them)")]
    UnknownPreset { name: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 批量处理
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} of {total} files failed")]
    BatchFailed { failed: usize, total: usize },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl ExciseError {
    /// 按 `io::ErrorKind` 归类读取错误
    pub fn read(path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => ExciseError::NotFound { path },
            io::ErrorKind::PermissionDenied => ExciseError::PermissionDenied { path, source },
            _ => ExciseError::FileReadError { path, source },
        }
    }

    /// 按 `io::ErrorKind` 归类写入错误
    pub fn write(path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::PermissionDenied => ExciseError::PermissionDenied { path, source },
            _ => ExciseError::FileWriteError { path, source },
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ExciseError>;
