//! 单份讲义处理器 - 编排层
//!
//! 负责一份讲义的完整流程：提取 → 生成 → 持久化。
//!
//! 失败策略：提取不到内容或生成失败时记录日志并返回 `Ok(false)`，
//! 由批量处理器继续处理下一份讲义；同名 JSON 文件被无条件覆盖。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{error, info};

use crate::config::GenerateConfig;
use crate::models::QuestionSet;
use crate::services::{pdf_service, QuestionGenerator};

/// 处理单份讲义 PDF
///
/// # 参数
/// - `pdf_path`: 讲义文件路径
/// - `generator`: 题目生成服务
/// - `prompt_template`: 提示词模板
/// - `config`: 生成管线配置
///
/// # 返回
/// `Ok(true)` 表示成功生成并保存；`Ok(false)` 表示该讲义被跳过；
/// `Err` 表示持久化阶段的意外错误（调用方记为失败后继续批次）。
pub async fn process_lecture(
    pdf_path: &Path,
    generator: &QuestionGenerator,
    prompt_template: &str,
    config: &GenerateConfig,
) -> Result<bool> {
    info!("开始处理: {}", pdf_path.display());

    // 提取 PDF 文本
    let lecture_content = match pdf_service::extract_text_from_pdf(pdf_path) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            error!("无法提取 PDF 内容（没有文本）: {}", pdf_path.display());
            return Ok(false);
        }
        Err(e) => {
            error!("无法提取 PDF 内容: {}", e);
            return Ok(false);
        }
    };

    info!("已提取 {} 个字符的文本内容", lecture_content.chars().count());

    // 生成题目
    info!("正在生成 {} 道题目...", config.num_questions);
    let question_set = match generator
        .generate(&lecture_content, config.num_questions, prompt_template)
        .await
    {
        Ok(set) => set,
        Err(e) => {
            error!("生成题目失败 ({}): {}", pdf_path.display(), e);
            return Ok(false);
        }
    };

    let output_path = save_question_set(&question_set, pdf_path, &config.output_dir).await?;

    info!("✓ 题目已保存至: {}", output_path.display());

    Ok(true)
}

/// 将一份题目集合持久化为 JSON 文件
///
/// 文件名 = 讲义文件名主干 + `.json`，输出目录按需创建（含父目录），
/// 同名文件被整体覆盖，不做合并。
pub async fn save_question_set(
    question_set: &QuestionSet,
    pdf_path: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let output_path = output_dir.join(format!("{}.json", stem));

    fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("无法创建输出目录: {}", output_dir.display()))?;

    let json = serde_json::to_string_pretty(question_set).context("序列化题目失败")?;
    fs::write(&output_path, json)
        .await
        .with_context(|| format!("无法写入文件: {}", output_path.display()))?;

    Ok(output_path)
}
