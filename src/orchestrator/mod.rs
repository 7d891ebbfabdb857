//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度。
//!
//! ### `batch_processor` - 批量生成处理器
//! - 前置配置检查（模板、目录、文件选择）
//! - 顺序遍历讲义文件
//! - 输出全局统计信息
//!
//! ### `lecture_processor` - 单份讲义处理器
//! - 提取 → 生成 → 持久化的完整流程
//! - 单个文件失败只记录日志，不中断批次
//!
//! ### `export_processor` - 导出处理器
//! - 聚合所有题目 JSON，写出三个 txt 文件
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor / export_processor (处理文件集合)
//!     ↓
//! lecture_processor (处理单份讲义)
//!     ↓
//! services (能力层：pdf / prompt / question / aggregate / export)
//! ```

pub mod batch_processor;
pub mod export_processor;
pub mod lecture_processor;

pub use lecture_processor::{process_lecture, save_question_set};
