//! 题目数据模型
//!
//! `QuestionSet` 中的条目以原始 JSON 值保存：生成阶段只规范化顶层形状，
//! 逐条校验留到聚合阶段（与导出管线共享 `ExamQuestion`）。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 单道试题（题目 + 答案）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamQuestion {
    /// 题目内容
    pub question: String,
    /// 参考答案
    pub answer: String,
}

/// 一份讲义生成的全部试题，对应磁盘上的一个 JSON 文件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionSet {
    /// 试题列表（保持模型返回的原始条目，顺序有意义）
    pub questions: Vec<Value>,
}

impl QuestionSet {
    /// 将 LLM 返回的 JSON 值规范化为标准形状
    ///
    /// 判别规则：
    /// - 对象且包含 `questions` 数组 → 取该数组
    /// - 裸数组 → 包装为 `{questions: [...]}`
    /// - 其他情况（包括 `questions` 不是数组）→ 视为格式错误，返回 `None`
    pub fn from_model_response(value: Value) -> Option<Self> {
        match value {
            Value::Object(mut map) => match map.remove("questions") {
                Some(Value::Array(questions)) => Some(Self { questions }),
                Some(_) | None => None,
            },
            Value::Array(questions) => Some(Self { questions }),
            _ => None,
        }
    }

    /// 试题条目数量
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// 扁平化后的试题记录：试题 + 来源文件（不含扩展名）
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedRecord {
    pub question: String,
    pub answer: String,
    /// 来源 JSON 文件的文件名主干
    pub source: String,
}

impl FlattenedRecord {
    pub fn new(question: ExamQuestion, source: impl Into<String>) -> Self {
        Self {
            question: question.question,
            answer: question.answer,
            source: source.into(),
        }
    }
}
