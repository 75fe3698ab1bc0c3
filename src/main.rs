//! # excise - HTML 代码块批量移除工具
//!
//! 在目录树中按后缀筛选文件，移除所有匹配正则表达式的代码块，
//! 并将结果写回原文件。
//!
//! ## 子命令
//! - `strip`   - 批量移除并原地改写
//! - `scan`    - 只读统计匹配数量
//! - `presets` - 列出内置移除模式
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── excise/  (模式编译与单文件改写)
//!   │     └── batch/   (文件收集与并行执行)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod excise;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
