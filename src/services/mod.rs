//! 业务能力层（Services）
//!
//! 每个服务只描述"我能做什么"，不关心批次流程：
//! - `pdf_service` - 从 PDF 提取文本能力
//! - `prompt_service` - 加载并渲染提示词模板能力
//! - `question_service` - 调用 LLM 生成试题能力
//! - `aggregate_service` - 读取并扁平化题目 JSON 能力
//! - `export_service` - 写出三个 txt 文件能力

pub mod aggregate_service;
pub mod export_service;
pub mod pdf_service;
pub mod prompt_service;
pub mod question_service;

pub use question_service::QuestionGenerator;
