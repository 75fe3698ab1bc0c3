//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，每个文件只由一个工作线程处理
//! - 进度条显示
//! - 逐文件隔离错误，全部尝试后汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/strip.rs`, `commands/scan.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{ExciseError, Result};
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 内容已改变（文件路径, 移除片段数）
    Changed(String, usize),
    /// 无匹配，未改变
    Unchanged(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 改变的文件数
    pub changed: usize,
    /// 未改变的文件数
    pub unchanged: usize,
    /// 失败数量
    pub failed: usize,
    /// 移除的片段总数
    pub removed: usize,
    /// 改变详情
    pub changes: Vec<(String, usize)>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Changed(path, removed) => {
                self.changed += 1;
                self.removed += removed;
                self.changes.push((path, removed));
            }
            ProcessResult::Unchanged(_) => self.unchanged += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.changed + self.unchanged + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 逐文件打印结果
    verbose: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = CPU 核数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            verbose: false,
        }
    }

    /// 设置是否逐文件打印
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 并行处理文件列表
    pub fn run<F>(&self, files: Vec<PathBuf>, processor: F) -> Result<BatchResult>
    where
        F: Fn(&Path) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Processing");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| ExciseError::ThreadPool(e.to_string()))?;

        let results: Vec<ProcessResult> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file.as_path());

                    if self.verbose {
                        pb.suspend(|| report(&result));
                    }

                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

/// 打印单个文件结果
fn report(result: &ProcessResult) {
    match result {
        ProcessResult::Changed(path, removed) => output::print_removed(path, *removed),
        ProcessResult::Unchanged(path) => output::print_skip(path),
        ProcessResult::Failed(path, err) => output::print_error(&format!("{}: {}", path, err)),
    }
}
