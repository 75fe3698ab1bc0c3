//! # 文件收集器
//!
//! 根据根目录和后缀过滤收集待处理文件列表。
//!
//! ## 功能
//! - 字面后缀匹配（区分大小写，支持逗号分隔多后缀）
//! - 可选递归目录搜索
//! - 指向普通文件的符号链接按目标文件处理（不进入链接目录）
//! - 结果排序，每个文件只出现一次
//!
//! ## 依赖关系
//! - 被 `commands/strip.rs`, `commands/scan.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{ExciseError, Result};

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 文件名后缀列表
    suffixes: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（默认 `.html`，不递归）
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            suffixes: vec![".html".to_string()],
            recursive: false,
        }
    }

    /// 设置后缀过滤（逗号分隔的多后缀，忽略逗号两侧空白）
    pub fn with_suffixes(mut self, suffixes: &str) -> Self {
        let parsed: Vec<String> = suffixes
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !parsed.is_empty() {
            self.suffixes = parsed;
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Err(ExciseError::NotFound {
                path: self.root.display().to_string(),
            });
        }
        if !self.root.is_dir() {
            return Err(ExciseError::NotADirectory {
                path: self.root.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root)
            .max_depth(max_depth)
            .follow_links(false);

        let mut files = Vec::new();
        let mut seen = HashSet::new();
        for entry in walker {
            let entry = entry.map_err(|e| self.traversal_error(e))?;
            if !self.matches_suffix(entry.path()) {
                continue;
            }
            let Some(path) = Self::resolve_entry(entry)? else {
                continue;
            };
            // 链接与目标同时出现时只保留一次
            let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if seen.insert(key) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// 普通文件原样返回；符号链接解析为目标文件路径，
    /// 回写时替换目标而链接保持不变
    fn resolve_entry(entry: DirEntry) -> Result<Option<PathBuf>> {
        if entry.file_type().is_file() {
            return Ok(Some(entry.into_path()));
        }
        if !entry.path_is_symlink() {
            return Ok(None);
        }

        let link = entry.path();
        match fs::metadata(link) {
            Ok(meta) if meta.is_file() => fs::canonicalize(link)
                .map(Some)
                .map_err(|e| ExciseError::read(link, e)),
            Ok(_) => Ok(None),
            // 悬空链接留给逐文件处理报告 NotFound
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Some(link.to_path_buf())),
            Err(e) => Err(ExciseError::read(link, e)),
        }
    }

    /// 检查文件名是否以任一后缀结尾
    fn matches_suffix(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.suffixes.iter().any(|s| filename.ends_with(s.as_str()))
    }

    fn traversal_error(&self, err: walkdir::Error) -> ExciseError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());

        match err.into_io_error() {
            Some(io) => ExciseError::read(&path, io),
            None => ExciseError::TraversalError {
                path: path.display().to_string(),
                reason: "filesystem loop detected".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().display().to_string())
            .collect()
    }

    fn setup() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "a").unwrap();
        fs::write(dir.path().join("b.htm"), "b").unwrap();
        fs::write(dir.path().join("c.HTML"), "c").unwrap();
        fs::write(dir.path().join("notes.txt"), "n").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("d.html"), "d").unwrap();
        dir
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let dir = setup();
        let files = FileCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();

        assert_eq!(names(&files, dir.path()), vec!["a.html"]);
    }

    #[test]
    fn test_recursive() {
        let dir = setup();
        let files = FileCollector::new(dir.path().to_path_buf())
            .recursive(true)
            .collect()
            .unwrap();

        let expected = vec![
            "a.html".to_string(),
            Path::new("sub").join("d.html").display().to_string(),
        ];
        assert_eq!(names(&files, dir.path()), expected);
    }

    #[test]
    fn test_multiple_suffixes() {
        let dir = setup();
        let files = FileCollector::new(dir.path().to_path_buf())
            .with_suffixes(".html, .htm")
            .collect()
            .unwrap();

        assert_eq!(names(&files, dir.path()), vec!["a.html", "b.htm"]);
    }

    #[test]
    fn test_empty_suffix_list_keeps_default() {
        let dir = setup();
        let files = FileCollector::new(dir.path().to_path_buf())
            .with_suffixes(" , ")
            .collect()
            .unwrap();

        assert_eq!(names(&files, dir.path()), vec!["a.html"]);
    }

    #[test]
    fn test_suffix_whitespace_around_commas_is_ignored() {
        let dir = setup();
        let files = FileCollector::new(dir.path().to_path_buf())
            .with_suffixes(" .htm ")
            .collect()
            .unwrap();

        assert_eq!(names(&files, dir.path()), vec!["b.htm"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_resolves_to_target() {
        use std::os::unix::fs::symlink;

        let outside = tempdir().unwrap();
        let real = outside.path().join("real.html");
        fs::write(&real, "r").unwrap();

        let dir = tempdir().unwrap();
        symlink(&real, dir.path().join("link.html")).unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();

        assert_eq!(files, vec![fs::canonicalize(&real).unwrap()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_link_and_target_collected_once() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let real = dir.path().join("page.html");
        fs::write(&real, "p").unwrap();
        symlink(&real, dir.path().join("alias.html")).unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();

        assert_eq!(files.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_descended() {
        use std::os::unix::fs::symlink;

        let outside = tempdir().unwrap();
        fs::write(outside.path().join("x.html"), "x").unwrap();

        let dir = tempdir().unwrap();
        symlink(outside.path(), dir.path().join("linked.html")).unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .recursive(true)
            .collect()
            .unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_root() {
        let dir = tempdir().unwrap();
        let err = FileCollector::new(dir.path().join("missing"))
            .collect()
            .unwrap_err();

        assert!(matches!(err, ExciseError::NotFound { .. }));
    }

    #[test]
    fn test_root_is_file() {
        let dir = setup();
        let err = FileCollector::new(dir.path().join("a.html"))
            .collect()
            .unwrap_err();

        assert!(matches!(err, ExciseError::NotADirectory { .. }));
    }
}
