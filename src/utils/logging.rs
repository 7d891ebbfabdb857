//! 日志工具模块
//!
//! 提供日志初始化和格式化的辅助函数

use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认 info 级别，可通过 RUST_LOG 环境变量覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_short_unchanged() {
        assert_eq!(truncate_text("短文本", 10), "短文本");
    }

    #[test]
    fn test_truncate_text_long_gets_ellipsis() {
        let text = "a".repeat(600);
        let truncated = truncate_text(&text, 500);
        assert_eq!(truncated.chars().count(), 503);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_text_counts_chars_not_bytes() {
        let text = "汉字".repeat(10);
        let truncated = truncate_text(&text, 5);
        assert_eq!(truncated, "汉字汉字汉...");
    }
}
