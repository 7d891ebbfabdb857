//! 题目聚合服务 - 业务能力层
//!
//! 只负责"读取所有题目 JSON 并扁平化"能力，不关心导出格式
//!
//! 全局顺序 = 文件名字典序，文件内顺序保持不变。

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{ExamQuestion, FlattenedRecord};

/// 读取目录中所有题目 JSON 文件并扁平化为记录序列
///
/// 跳过策略：
/// - 整个文件无法解析 → 记录错误，跳过该文件
/// - 缺少 `questions` 数组 → 记录警告，整个文件跳过（不做部分提取）
/// - 单条记录缺少 `question` 或 `answer` → 静默丢弃该条，保留同文件其余条目
///
/// 目录不存在或没有任何 JSON 文件时返回错误，由调用方决定如何报告。
pub async fn load_all_questions(questions_dir: &Path) -> AppResult<Vec<FlattenedRecord>> {
    let json_files = collect_json_files(questions_dir).await?;

    info!("找到 {} 个 JSON 文件", json_files.len());

    let mut all_questions = Vec::new();

    for json_file in &json_files {
        match load_one_file(json_file).await {
            Ok(records) => all_questions.extend(records),
            Err(e) => error!("读取 {} 失败: {}", json_file.display(), e),
        }
    }

    info!("共加载 {} 道题目", all_questions.len());

    Ok(all_questions)
}

/// 枚举目录下的 JSON 文件，按文件名字典序排序
async fn collect_json_files(questions_dir: &Path) -> AppResult<Vec<PathBuf>> {
    if !questions_dir.exists() {
        return Err(AppError::NoFilesFound {
            path: questions_dir.to_path_buf(),
            extension: "JSON".to_string(),
        });
    }

    let mut json_files = Vec::new();
    let mut entries = fs::read_dir(questions_dir)
        .await
        .map_err(|e| AppError::FileRead {
            path: questions_dir.to_path_buf(),
            source: e,
        })?;

    while let Some(entry) = entries.next_entry().await.map_err(|e| AppError::FileRead {
        path: questions_dir.to_path_buf(),
        source: e,
    })? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path);
        }
    }

    if json_files.is_empty() {
        return Err(AppError::NoFilesFound {
            path: questions_dir.to_path_buf(),
            extension: "JSON".to_string(),
        });
    }

    json_files.sort();

    Ok(json_files)
}

/// 读取单个 JSON 文件中的全部合法记录
async fn load_one_file(json_file: &Path) -> AppResult<Vec<FlattenedRecord>> {
    let content = fs::read_to_string(json_file)
        .await
        .map_err(|e| AppError::FileRead {
            path: json_file.to_path_buf(),
            source: e,
        })?;

    let data: Value = serde_json::from_str(&content).map_err(|source| AppError::JsonParse {
        path: json_file.to_path_buf(),
        source,
    })?;

    let source = json_file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let Some(questions) = data.get("questions").and_then(Value::as_array) else {
        warn!("{} 中没有 questions 数组，整个文件跳过", json_file.display());
        return Ok(Vec::new());
    };

    let records = questions
        .iter()
        .filter_map(|item| serde_json::from_value::<ExamQuestion>(item.clone()).ok())
        .map(|question| FlattenedRecord::new(question, source.clone()))
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn write_json(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_all_questions_lexical_order_and_source() {
        let dir = tempfile::tempdir().unwrap();
        write_json(
            dir.path(),
            "B.lecture.json",
            r#"{"questions": [{"question": "QB", "answer": "AB"}]}"#,
        )
        .await;
        write_json(
            dir.path(),
            "A.lecture.json",
            r#"{"questions": [{"question": "QA1", "answer": "AA1"}, {"question": "QA2", "answer": "AA2"}]}"#,
        )
        .await;

        let records = load_all_questions(dir.path()).await.unwrap();
        assert_eq!(records.len(), 3);
        // 文件名字典序优先，文件内顺序其次
        assert_eq!(records[0].question, "QA1");
        assert_eq!(records[0].source, "A.lecture");
        assert_eq!(records[1].question, "QA2");
        assert_eq!(records[2].question, "QB");
        assert_eq!(records[2].source, "B.lecture");
    }

    #[tokio::test]
    async fn test_file_without_questions_key_skipped_entirely() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "bad.json", r#"{"foo": 1}"#).await;
        write_json(
            dir.path(),
            "good.json",
            r#"{"questions": [{"question": "Q", "answer": "A"}]}"#,
        )
        .await;

        let records = load_all_questions(dir.path()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "good");
    }

    #[tokio::test]
    async fn test_malformed_entry_dropped_siblings_kept() {
        let dir = tempfile::tempdir().unwrap();
        write_json(
            dir.path(),
            "mixed.json",
            r#"{"questions": [
                {"question": "Q1", "answer": "A1"},
                {"question": "no answer here"},
                {"answer": "no question here"},
                {"question": "Q2", "answer": "A2"}
            ]}"#,
        )
        .await;

        let records = load_all_questions(dir.path()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question, "Q1");
        assert_eq!(records[1].question, "Q2");
    }

    #[tokio::test]
    async fn test_invalid_json_file_skipped_others_kept() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "broken.json", "{not valid json").await;
        write_json(
            dir.path(),
            "ok.json",
            r#"{"questions": [{"question": "Q", "answer": "A"}]}"#,
        )
        .await;

        let records = load_all_questions(dir.path()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "ok");
    }

    #[tokio::test]
    async fn test_missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere");

        let result = load_all_questions(&missing).await;
        assert!(matches!(result, Err(AppError::NoFilesFound { .. })));
    }

    #[tokio::test]
    async fn test_empty_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_all_questions(dir.path()).await;
        assert!(matches!(result, Err(AppError::NoFilesFound { .. })));
    }

    #[tokio::test]
    async fn test_non_json_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "notes.txt", "ignore me").await;
        write_json(
            dir.path(),
            "real.json",
            r#"{"questions": [{"question": "Q", "answer": "A"}]}"#,
        )
        .await;

        let records = load_all_questions(dir.path()).await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
