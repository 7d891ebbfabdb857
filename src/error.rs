//! 应用程序错误类型
//!
//! 所有面向 I/O 或网络的操作都返回显式的 `AppResult`，
//! 由调用方决定是跳过当前文件还是终止整个批次。

use std::path::PathBuf;

/// 应用程序错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 缺少 API 密钥
    #[error("缺少 API 密钥：请通过 --api-key 参数提供，或设置 OPENAI_API_KEY 环境变量")]
    MissingApiKey,

    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 文件不存在
    #[error("文件不存在: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// 目录不存在
    #[error("目录不存在: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// 目录中没有找到指定类型的文件
    #[error("在 {} 目录中没有找到 {extension} 文件", .path.display())]
    NoFilesFound { path: PathBuf, extension: String },

    /// JSON 文件解析失败
    #[error("无法解析 {}: {source}", .path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// PDF 解析失败
    #[error("无法读取 PDF 文件 ({}): {message}", .path.display())]
    PdfExtract { path: PathBuf, message: String },

    /// LLM API 调用失败
    #[error("LLM API 调用失败 (模型: {model}): {message}")]
    ApiCall { model: String, message: String },

    /// LLM 返回内容不是合法 JSON
    #[error("解析 LLM 返回的 JSON 失败: {source}，返回内容前缀: {preview}")]
    ResponseParse {
        preview: String,
        #[source]
        source: serde_json::Error,
    },

    /// LLM 返回的 JSON 缺少 questions 数组
    #[error("LLM 返回的 JSON 格式不正确，缺少 questions 数组，返回内容前缀: {preview}")]
    ResponseShape { preview: String },
}

/// 应用程序结果类型
pub type AppResult<T> = std::result::Result<T, AppError>;
