//! 导出处理器 - 编排层
//!
//! 聚合所有题目 JSON 并写出三个 txt 文件。
//! 没有加载到任何题目时提前返回，不区分致命退出码。

use anyhow::Result;
use tracing::{error, info};

use crate::config::ExportConfig;
use crate::services::{aggregate_service, export_service};

/// 运行导出管线
pub async fn run(config: ExportConfig) -> Result<()> {
    // 加载所有题目
    let records = match aggregate_service::load_all_questions(&config.questions_dir).await {
        Ok(records) => records,
        Err(e) => {
            error!("{}", e);
            return Ok(());
        }
    };

    if records.is_empty() {
        error!("没有加载到任何题目");
        return Ok(());
    }

    // 写出三个 txt 文件（写入失败属于 I/O 故障：记录后继续退出，不崩溃）
    if let Err(e) = export_service::write_txt_files(&records, &config.output_dir).await {
        error!("{}", e);
        return Ok(());
    }

    info!("\n✅ 完成！共处理 {} 道题目", records.len());

    Ok(())
}
