//! 模型枚举与元信息
//!
//! 元信息只用于控制台展示，对行为没有影响。

use clap::ValueEnum;

/// 支持的模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ModelId {
    /// 最新模型，推理与多模态能力增强
    #[value(name = "gpt-5")]
    Gpt5,
    /// 当前推荐，性能与成本均衡
    #[value(name = "gpt-4o")]
    Gpt4o,
    /// 高性能模型
    #[value(name = "gpt-4-turbo")]
    Gpt4Turbo,
    /// 更经济的选择
    #[value(name = "gpt-4o-mini")]
    Gpt4oMini,
}

/// 模型展示信息
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    pub name: &'static str,
    pub context: &'static str,
    pub description: &'static str,
}

/// 模型元信息表（编译期静态表）
static MODEL_INFO: phf::Map<&'static str, ModelInfo> = phf::phf_map! {
    "gpt-5" => ModelInfo {
        name: "gpt-5",
        context: "200k+ tokens",
        description: "最新模型，推理与多模态能力增强",
    },
    "gpt-4o" => ModelInfo {
        name: "gpt-4o",
        context: "128k tokens",
        description: "当前推荐，性能与成本均衡",
    },
    "gpt-4-turbo" => ModelInfo {
        name: "gpt-4-turbo",
        context: "128k tokens",
        description: "高性能模型",
    },
    "gpt-4o-mini" => ModelInfo {
        name: "gpt-4o-mini",
        context: "128k tokens",
        description: "更经济的选择",
    },
};

impl ModelId {
    /// API 请求中使用的模型标识
    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::Gpt5 => "gpt-5",
            ModelId::Gpt4o => "gpt-4o",
            ModelId::Gpt4Turbo => "gpt-4-turbo",
            ModelId::Gpt4oMini => "gpt-4o-mini",
        }
    }

    /// 获取展示信息
    pub fn info(self) -> Option<&'static ModelInfo> {
        MODEL_INFO.get(self.as_str())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
