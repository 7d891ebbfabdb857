//! 程序配置
//!
//! 由命令行参数构建，API 密钥支持环境变量回退。

use std::path::PathBuf;

use crate::cli::{ExportArgs, GenerateArgs};
use crate::error::{AppError, AppResult};
use crate::models::ModelId;

/// API 密钥的环境变量名
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// 生成管线配置
#[derive(Clone, Debug)]
pub struct GenerateConfig {
    /// 每份讲义生成的题目数量
    pub num_questions: usize,
    /// OpenAI API 密钥
    pub api_key: String,
    /// PDF 讲义目录
    pub slices_dir: PathBuf,
    /// 题目 JSON 输出目录
    pub output_dir: PathBuf,
    /// 提示词模板文件
    pub prompt_file: PathBuf,
    /// 只处理指定讲义（可选）
    pub lecture: Option<String>,
    /// 使用的模型
    pub model: ModelId,
}

impl GenerateConfig {
    /// 从命令行参数构建配置
    ///
    /// API 密钥缺失属于配置错误：批次无法进行，调用方应以退出码 1 终止。
    pub fn from_args(args: GenerateArgs) -> AppResult<Self> {
        let api_key = args
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
            .filter(|key| !key.is_empty())
            .ok_or(AppError::MissingApiKey)?;

        Ok(Self {
            num_questions: args.num_questions,
            api_key,
            slices_dir: PathBuf::from(args.slices_dir),
            output_dir: PathBuf::from(args.output_dir),
            prompt_file: PathBuf::from(args.prompt_file),
            lecture: args.lecture,
            model: args.model,
        })
    }
}

/// 导出管线配置
#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// 题目 JSON 目录
    pub questions_dir: PathBuf,
    /// txt 输出目录
    pub output_dir: PathBuf,
}

impl From<ExportArgs> for ExportConfig {
    fn from(args: ExportArgs) -> Self {
        Self {
            questions_dir: PathBuf::from(args.questions_dir),
            output_dir: PathBuf::from(args.output_dir),
        }
    }
}
