//! 提示词服务 - 业务能力层
//!
//! 只负责"加载并渲染提示词模板"能力，不关心流程

use std::path::Path;

use tokio::fs;

use crate::error::{AppError, AppResult};

/// 模板中的题目数量占位符
const NUM_QUESTIONS_PLACEHOLDER: &str = "{num_questions}";

/// 加载提示词模板
///
/// 不校验占位符是否存在：缺少占位符的模板会静默降级
/// （题目数量不会被替换进提示词）。
pub async fn load_prompt_template(prompt_path: &Path) -> AppResult<String> {
    fs::read_to_string(prompt_path)
        .await
        .map_err(|e| AppError::FileRead {
            path: prompt_path.to_path_buf(),
            source: e,
        })
}

/// 渲染完整提示词
///
/// 将模板中的 `{num_questions}` 替换为目标数量，
/// 再以空行分隔追加讲义原文。
pub fn render_prompt(template: &str, num_questions: usize, lecture_content: &str) -> String {
    let rendered = template.replace(NUM_QUESTIONS_PLACEHOLDER, &num_questions.to_string());
    format!("{}\n\n{}", rendered, lecture_content)
}
