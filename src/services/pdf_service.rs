//! PDF 提取服务 - 业务能力层
//!
//! 只负责"从 PDF 提取文本"能力，不关心流程
//!
//! 使用 `lopdf` 纯 Rust 解析，逐页提取并拼接文本。
//! 纯图片页面没有文本内容，静默贡献空字符串。

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 从 PDF 文件中提取全部文本
///
/// 按页码顺序逐页提取，每页文本后追加一个换行符。
/// 任何底层解析错误都被转换为带诊断信息的 `AppError::PdfExtract`，
/// 不会导致进程崩溃。
pub fn extract_text_from_pdf(pdf_path: &Path) -> AppResult<String> {
    let doc = Document::load(pdf_path).map_err(|e| AppError::PdfExtract {
        path: pdf_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let pages = doc.get_pages();
    debug!("PDF 共 {} 页: {}", pages.len(), pdf_path.display());

    let mut text = String::new();
    for (&page_number, _) in pages.iter() {
        let page_text =
            doc.extract_text(&[page_number])
                .map_err(|e| AppError::PdfExtract {
                    path: pdf_path.to_path_buf(),
                    message: format!("第 {} 页提取失败: {}", page_number, e),
                })?;
        text.push_str(&page_text);
        text.push('\n');
    }

    Ok(text)
}
