//! # presets 命令实现
//!
//! 以表格形式列出内置移除模式。
//!
//! ## 依赖关系
//! - 使用 `excise/presets.rs`
//! - 使用 `tabled` 打印表格

use crate::error::Result;
use crate::excise::PRESETS;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 预设表格行
#[derive(Tabled)]
struct PresetRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Suffix")]
    suffix: &'static str,
    #[tabled(rename = "Pattern")]
    expr: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

/// 执行 presets 命令
pub fn execute() -> Result<()> {
    output::print_header("Built-in Removal Patterns");

    let rows: Vec<PresetRow> = PRESETS
        .iter()
        .map(|p| PresetRow {
            name: p.name,
            suffix: p.suffix,
            expr: p.expr,
            description: p.description,
        })
        .collect();

    println!("{}", Table::new(&rows));
    Ok(())
}
