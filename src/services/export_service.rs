//! 文本导出服务 - 业务能力层
//!
//! 只负责"把扁平化记录写成三个 txt 文件"能力，不关心记录来源
//!
//! 编号为 1 起始的遍历顺序，三个文件共享同一套编号。
//! 同名文件会被无条件覆盖。

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::FlattenedRecord;

/// 纯题目文件名
pub const QUESTIONS_FILE: &str = "questions.txt";
/// 纯答案文件名
pub const ANSWERS_FILE: &str = "answers.txt";
/// 题目答案相邻文件名
pub const QA_FILE: &str = "questions_and_answers.txt";

/// 将扁平化记录写成三个文本文件
///
/// - `questions.txt`: 只有题目（带编号）
/// - `answers.txt`: 只有答案（同一套编号）
/// - `questions_and_answers.txt`: 题目紧跟标注的答案，空行分隔
pub async fn write_txt_files(
    records: &[FlattenedRecord],
    output_dir: &Path,
) -> AppResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .await
        .map_err(|e| AppError::FileWrite {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

    let mut questions_text = String::new();
    let mut answers_text = String::new();
    let mut qa_text = String::new();

    for (idx, record) in records.iter().enumerate() {
        let number = idx + 1;
        questions_text.push_str(&format!("{}. {}\n\n", number, record.question));
        answers_text.push_str(&format!("{}. {}\n\n", number, record.answer));
        qa_text.push_str(&format!(
            "{}. {}\nA: {}\n\n",
            number, record.question, record.answer
        ));
    }

    let outputs = [
        (QUESTIONS_FILE, questions_text),
        (ANSWERS_FILE, answers_text),
        (QA_FILE, qa_text),
    ];

    let mut written = Vec::new();
    for (name, text) in outputs {
        let path = output_dir.join(name);
        fs::write(&path, text)
            .await
            .map_err(|e| AppError::FileWrite {
                path: path.clone(),
                source: e,
            })?;
        written.push(path);
    }

    info!("生成的文件:");
    for path in &written {
        info!("  - {}", path.display());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExamQuestion;

    fn sample_records() -> Vec<FlattenedRecord> {
        vec![
            FlattenedRecord::new(
                ExamQuestion {
                    question: "什么是工作记忆？".to_string(),
                    answer: "短时保持并操作信息的系统".to_string(),
                },
                "L01",
            ),
            FlattenedRecord::new(
                ExamQuestion {
                    question: "What is ACT-R?".to_string(),
                    answer: "A cognitive architecture".to_string(),
                },
                "L02",
            ),
        ]
    }

    #[tokio::test]
    async fn test_three_files_with_shared_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("txt");

        let written = write_txt_files(&sample_records(), &out).await.unwrap();
        assert_eq!(written.len(), 3);

        let questions = fs::read_to_string(out.join(QUESTIONS_FILE)).await.unwrap();
        let answers = fs::read_to_string(out.join(ANSWERS_FILE)).await.unwrap();
        let qa = fs::read_to_string(out.join(QA_FILE)).await.unwrap();

        assert!(questions.starts_with("1. 什么是工作记忆？\n\n"));
        assert!(questions.contains("2. What is ACT-R?"));
        assert!(!questions.contains("A cognitive architecture"));

        assert!(answers.starts_with("1. 短时保持并操作信息的系统\n\n"));
        assert!(answers.contains("2. A cognitive architecture"));

        assert!(qa.starts_with("1. 什么是工作记忆？\nA: 短时保持并操作信息的系统\n\n"));
        assert!(qa.contains("2. What is ACT-R?\nA: A cognitive architecture\n\n"));

        // 三个文件条目数一致
        for text in [&questions, &answers] {
            assert_eq!(text.matches("\n\n").count(), 2);
        }
    }

    #[tokio::test]
    async fn test_empty_records_produce_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("txt");

        write_txt_files(&[], &out).await.unwrap();

        let questions = fs::read_to_string(out.join(QUESTIONS_FILE)).await.unwrap();
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn test_existing_files_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_path_buf();
        fs::write(out.join(QUESTIONS_FILE), "stale content")
            .await
            .unwrap();

        write_txt_files(&sample_records(), &out).await.unwrap();

        let questions = fs::read_to_string(out.join(QUESTIONS_FILE)).await.unwrap();
        assert!(!questions.contains("stale content"));
        assert!(questions.starts_with("1. "));
    }
}
