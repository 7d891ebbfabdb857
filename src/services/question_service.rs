//! 题目生成服务 - 业务能力层
//!
//! 只负责"调用 LLM 生成一套试题"能力，不关心批次流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 请求固定使用 JSON 响应模式，temperature = 1.0
//! - 每次调用尽力而为，不做重试，也不缓存提示词或响应

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::{ModelId, QuestionSet};
use crate::services::prompt_service;
use crate::utils::logging::truncate_text;

/// 固定的系统指令：要求输出包含 questions 数组的合法 JSON
const SYSTEM_MESSAGE: &str = "You are a helpful teaching assistant that generates exam \
    questions based on lecture content. Always respond with valid JSON format containing \
    a 'questions' array.";

/// 诊断日志中保留的响应前缀长度
const RESPONSE_PREVIEW_LEN: usize = 500;

/// 题目生成服务
///
/// 职责：
/// - 渲染提示词并调用 LLM API
/// - 将返回内容规范化为 `QuestionSet`
/// - 只处理单份讲义，不出现文件遍历
pub struct QuestionGenerator {
    client: Client<OpenAIConfig>,
    model: ModelId,
}

impl QuestionGenerator {
    /// 创建新的题目生成服务
    pub fn new(api_key: &str, model: ModelId) -> Self {
        let openai_config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(openai_config);

        Self { client, model }
    }

    /// 当前使用的模型
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// 为一份讲义生成试题
    ///
    /// # 参数
    /// - `lecture_content`: 讲义全文
    /// - `num_questions`: 目标题目数量
    /// - `prompt_template`: 提示词模板（含 `{num_questions}` 占位符）
    ///
    /// # 返回
    /// 规范化后的 `QuestionSet`；任何传输错误或格式错误都以
    /// 带诊断信息的 `AppError` 返回，由调用方决定跳过该讲义。
    pub async fn generate(
        &self,
        lecture_content: &str,
        num_questions: usize,
        prompt_template: &str,
    ) -> AppResult<QuestionSet> {
        if let Some(info) = self.model.info() {
            debug!("使用模型: {} (上下文: {})", info.name, info.context);
        }

        let prompt = prompt_service::render_prompt(prompt_template, num_questions, lecture_content);
        debug!("提示词长度: {} 字符", prompt.chars().count());

        let raw = self.send_to_llm(&prompt).await?;

        let value: Value =
            serde_json::from_str(&raw).map_err(|source| AppError::ResponseParse {
                preview: truncate_text(&raw, RESPONSE_PREVIEW_LEN),
                source,
            })?;

        match QuestionSet::from_model_response(value) {
            Some(set) => {
                debug!("成功解析 {} 道题目", set.len());
                Ok(set)
            }
            None => {
                warn!("LLM 返回的 JSON 缺少 questions 数组");
                Err(AppError::ResponseShape {
                    preview: truncate_text(&raw, RESPONSE_PREVIEW_LEN),
                })
            }
        }
    }

    /// 发送单次聊天补全请求
    ///
    /// 两个固定角色：系统指令约束输出为 JSON，渲染后的提示词作为用户消息。
    async fn send_to_llm(&self, prompt: &str) -> AppResult<String> {
        debug!("调用 LLM API，模型: {}", self.model);

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(SYSTEM_MESSAGE)
            .build()
            .map_err(|e| self.api_error(e))?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| self.api_error(e))?;

        let messages = vec![
            ChatCompletionRequestMessage::System(system_msg),
            ChatCompletionRequestMessage::User(user_msg),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .temperature(1.0)
            .response_format(ResponseFormat::JsonObject)
            .build()
            .map_err(|e| self.api_error(e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            self.api_error(e)
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::ApiCall {
                model: self.model.to_string(),
                message: "返回内容为空".to_string(),
            })?;

        debug!("LLM API 调用成功");

        Ok(content.trim().to_string())
    }

    fn api_error(&self, source: impl std::fmt::Display) -> AppError {
        AppError::ApiCall {
            model: self.model.to_string(),
            message: source.to_string(),
        }
    }
}
