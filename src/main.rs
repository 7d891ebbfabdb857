use clap::Parser;
use tracing::error;

use exam_question_gen::orchestrator::{batch_processor, export_processor};
use exam_question_gen::utils::logging;
use exam_question_gen::{Cli, Commands, ExportConfig, GenerateConfig};

#[tokio::main]
async fn main() {
    // 初始化日志
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(args).await,
        Commands::Export(args) => export_processor::run(ExportConfig::from(args)).await,
    };

    // 配置类错误让整个批次无法进行，以退出码 1 终止
    if let Err(e) = result {
        error!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run_generate(args: exam_question_gen::cli::GenerateArgs) -> anyhow::Result<()> {
    let config = GenerateConfig::from_args(args)?;
    batch_processor::run(config).await
}
