//! # Exam Question Gen
//!
//! 根据课程讲义 PDF 批量生成期中试题，并导出为学习用文本。
//!
//! ## 架构设计
//!
//! 两条独立的顺序管线，共享 `models` 中的数据形状：
//!
//! ### 生成管线（generate）
//! PDF 字节 → 提取文本 → 渲染提示词 → LLM 响应 → 每份讲义一个 JSON 文件
//!
//! ### 导出管线（export）
//! JSON 文件 → 扁平化记录序列 → 三个带编号的 txt 文件
//!
//! ## 模块结构
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个输入
//! - `pdf_service` - PDF 文本提取能力
//! - `prompt_service` - 提示词模板加载与渲染能力
//! - `question_service` - LLM 试题生成能力
//! - `aggregate_service` - 题目 JSON 聚合能力
//! - `export_service` - txt 导出能力
//!
//! ### ② 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量生成，前置检查和全局统计
//! - `orchestrator/lecture_processor` - 单份讲义的完整流程
//! - `orchestrator/export_processor` - 聚合加导出

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use cli::{Cli, Commands};
pub use config::{ExportConfig, GenerateConfig};
pub use error::{AppError, AppResult};
pub use models::{ExamQuestion, FlattenedRecord, ModelId, QuestionSet};
pub use services::QuestionGenerator;
