//! 命令行接口
//!
//! 两条独立的管线：`generate` 从 PDF 讲义生成题目 JSON，
//! `export` 把题目 JSON 导出为三个 txt 文件。

use clap::{Args, Parser, Subcommand};

use crate::models::ModelId;

/// 根据课程讲义 PDF 生成期中试题，并导出为学习用文本
#[derive(Debug, Parser)]
#[command(name = "exam_question_gen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 从 PDF 讲义生成题目 JSON 文件
    Generate(GenerateArgs),
    /// 把题目 JSON 文件导出为 txt 学习材料
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// 每份讲义生成的题目数量
    #[arg(long, default_value_t = 20)]
    pub num_questions: usize,

    /// OpenAI API 密钥（未提供时读取 OPENAI_API_KEY 环境变量）
    #[arg(long)]
    pub api_key: Option<String>,

    /// 存放 PDF 讲义的目录
    #[arg(long, default_value = "slices")]
    pub slices_dir: String,

    /// 题目 JSON 的输出目录
    #[arg(long, default_value = "questions")]
    pub output_dir: String,

    /// 提示词模板文件
    #[arg(long, default_value = "prompts/prompt.txt")]
    pub prompt_file: String,

    /// 只处理指定的讲义文件（例如 Lecture.01.Introduction.pdf）
    #[arg(long)]
    pub lecture: Option<String>,

    /// 使用的模型
    #[arg(long, value_enum, default_value_t = ModelId::Gpt5)]
    pub model: ModelId,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// 存放题目 JSON 的目录
    #[arg(long, default_value = "questions")]
    pub questions_dir: String,

    /// txt 文件的输出目录
    #[arg(long, default_value = "questions_txt")]
    pub output_dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::parse_from(["exam_question_gen", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("应该解析为 generate 子命令");
        };
        assert_eq!(args.num_questions, 20);
        assert_eq!(args.slices_dir, "slices");
        assert_eq!(args.output_dir, "questions");
        assert_eq!(args.prompt_file, "prompts/prompt.txt");
        assert_eq!(args.model, ModelId::Gpt5);
        assert!(args.lecture.is_none());
    }

    #[test]
    fn test_generate_model_choices() {
        let cli = Cli::parse_from([
            "exam_question_gen",
            "generate",
            "--model",
            "gpt-4o-mini",
            "--num-questions",
            "5",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("应该解析为 generate 子命令");
        };
        assert_eq!(args.model, ModelId::Gpt4oMini);
        assert_eq!(args.num_questions, 5);
    }

    #[test]
    fn test_generate_rejects_unknown_model() {
        let result = Cli::try_parse_from(["exam_question_gen", "generate", "--model", "gpt-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_defaults() {
        let cli = Cli::parse_from(["exam_question_gen", "export"]);
        let Commands::Export(args) = cli.command else {
            panic!("应该解析为 export 子命令");
        };
        assert_eq!(args.questions_dir, "questions");
        assert_eq!(args.output_dir, "questions_txt");
    }
}
