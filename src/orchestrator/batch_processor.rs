//! 批量生成处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **前置检查**：提示词模板、讲义目录、文件选择，任何一项失败都让批次无法进行
//! 2. **文件选择**：单个指定讲义，或目录下全部 PDF（文件名字典序）
//! 3. **顺序处理**：逐份讲义调用 lecture_processor，单个文件失败不中断批次
//! 4. **全局统计**：汇总成功/失败数量并输出最终报告

use std::path::PathBuf;

use anyhow::Result;
use tokio::fs;
use tracing::{error, info};

use crate::config::GenerateConfig;
use crate::error::AppError;
use crate::orchestrator::lecture_processor;
use crate::services::{prompt_service, QuestionGenerator};

/// 处理统计
#[derive(Debug, Default)]
struct BatchStats {
    success: usize,
    total: usize,
}

/// 运行批量生成管线
///
/// 返回 `Err` 的都是配置类错误（模板不可读、目录缺失、选择为空），
/// 由 `main` 以退出码 1 终止；单个讲义的失败只影响统计。
pub async fn run(config: GenerateConfig) -> Result<()> {
    // 加载提示词模板（失败 = 批次无法进行）
    let prompt_template = prompt_service::load_prompt_template(&config.prompt_file).await?;

    // 选择待处理的讲义文件
    let pdf_files = select_lectures(&config).await?;

    log_startup(&config, pdf_files.len());

    let generator = QuestionGenerator::new(&config.api_key, config.model);

    let mut stats = BatchStats {
        total: pdf_files.len(),
        ..Default::default()
    };

    // 顺序处理每份讲义，处理间没有共享可变状态
    for pdf_path in &pdf_files {
        match lecture_processor::process_lecture(pdf_path, &generator, &prompt_template, &config)
            .await
        {
            Ok(true) => stats.success += 1,
            Ok(false) => {}
            Err(e) => {
                error!("处理过程中发生错误 ({}): {:#}", pdf_path.display(), e);
            }
        }
        // 讲义之间的空行分隔
        info!("");
    }

    print_final_stats(&stats);

    Ok(())
}

/// 选择待处理的讲义文件
///
/// 指定 `--lecture` 时只处理该文件（必须存在）；
/// 否则处理目录下全部 PDF，按文件名字典序排序。
async fn select_lectures(config: &GenerateConfig) -> Result<Vec<PathBuf>> {
    if !config.slices_dir.exists() {
        return Err(AppError::DirectoryNotFound {
            path: config.slices_dir.clone(),
        }
        .into());
    }

    if let Some(lecture) = &config.lecture {
        let pdf_path = config.slices_dir.join(lecture);
        if !pdf_path.exists() {
            return Err(AppError::FileNotFound { path: pdf_path }.into());
        }
        return Ok(vec![pdf_path]);
    }

    let mut pdf_files = Vec::new();
    let mut entries = fs::read_dir(&config.slices_dir)
        .await
        .map_err(|e| AppError::FileRead {
            path: config.slices_dir.clone(),
            source: e,
        })?;

    while let Some(entry) = entries.next_entry().await.map_err(|e| AppError::FileRead {
        path: config.slices_dir.clone(),
        source: e,
    })? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("pdf") {
            pdf_files.push(path);
        }
    }

    if pdf_files.is_empty() {
        return Err(AppError::NoFilesFound {
            path: config.slices_dir.clone(),
            extension: "PDF".to_string(),
        }
        .into());
    }

    pdf_files.sort();

    Ok(pdf_files)
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &GenerateConfig, total: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始批量生成试题");
    info!("✓ 找到 {} 个 PDF 文件", total);
    info!("📊 每份讲义生成 {} 道题目", config.num_questions);
    if let Some(model_info) = config.model.info() {
        info!(
            "🤖 使用模型: {} - {} (上下文: {})",
            model_info.name, model_info.description, model_info.context
        );
    } else {
        info!("🤖 使用模型: {}", config.model);
    }
    info!("{}\n", "=".repeat(60));
}

fn print_final_stats(stats: &BatchStats) {
    info!("{}", "=".repeat(60));
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 全部处理完成！成功 {}/{}", stats.success, stats.total);
    info!("{}", "=".repeat(60));
}
