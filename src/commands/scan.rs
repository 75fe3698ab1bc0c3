//! # scan 命令实现
//!
//! 只读统计匹配数量，不修改任何文件。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 复用 `commands/strip.rs` 的批量流程（dry-run 模式）
//! - 使用 `tabled` 打印结果表格

use crate::cli::scan::ScanArgs;
use crate::commands::resolve_target;
use crate::commands::strip::{check_failures, strip_tree};
use crate::error::Result;
use crate::excise::RewriteOptions;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 扫描结果行
#[derive(Debug, Clone, Tabled)]
struct MatchRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Matches")]
    matches: usize,
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Scanning for Matched Blocks");

    let target = resolve_target(&args.target)?;
    output::print_info(&format!("Pattern: {}", target.pattern.as_str()));

    let options = RewriteOptions {
        dry_run: true,
        ..Default::default()
    };
    let result = strip_tree(&target, &options, args.verbose)?;

    let mut rows: Vec<MatchRow> = result
        .changes
        .iter()
        .map(|(file, matches)| MatchRow {
            file: file.clone(),
            matches: *matches,
        })
        .collect();
    rows.sort_by(|a, b| a.file.cmp(&b.file));

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    output::print_separator();
    output::print_done(&format!(
        "{} of {} files contain {} matching blocks",
        result.changed,
        result.total(),
        result.removed
    ));

    // 不可读文件同样导致非零退出
    check_failures(&result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::strip::TargetArgs;
    use crate::error::ExciseError;
    use std::fs;
    use tempfile::tempdir;

    fn scan_args(root: &std::path::Path) -> ScanArgs {
        ScanArgs {
            target: TargetArgs {
                root: root.to_path_buf(),
                preset: Some("nav-dropdown".to_string()),
                pattern: None,
                open: None,
                close: None,
                ext: None,
                recursive: false,
                jobs: 1,
            },
            verbose: false,
        }
    }

    #[test]
    fn test_scan_leaves_files_untouched() {
        let dir = tempdir().unwrap();
        let page = "<div class=\"nav-dropdown\">x</div><p>y</p>";
        fs::write(dir.path().join("a.html"), page).unwrap();

        execute(scan_args(dir.path())).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.html")).unwrap(), page);
    }

    #[test]
    fn test_scan_fails_on_undecodable_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "<p>ok</p>").unwrap();
        fs::write(dir.path().join("bad.html"), [0xff, 0xfe]).unwrap();

        let err = execute(scan_args(dir.path())).unwrap_err();

        assert!(matches!(
            err,
            ExciseError::BatchFailed {
                failed: 1,
                total: 2
            }
        ));
    }
}
