use ssml_core::{AudioProcessingResult, ParseResult, SsmlError, ValidationConfig};
use tracing::warn;

use crate::{deriver, parser::parse_ssml};

/// 解析 SSML 并推导处理指令。
///
/// 预计总时长超过 `config.max_duration` 时只在 `ParseResult.warnings` 中追加一条警告。
///
/// # Errors
///
/// 解析阶段的任何致命错误，参见 [`parse_ssml`]。
pub fn process_ssml(
    content: &str,
    config: &ValidationConfig,
) -> Result<(ParseResult, AudioProcessingResult), SsmlError> {
    let mut parsed = parse_ssml(content, config)?;
    let derived = deriver::derive(&parsed.document);

    if derived.total_duration > config.max_duration {
        let message = format!(
            "预计时长 {:?} 超过了建议的最大时长 {:?}",
            derived.total_duration, config.max_duration
        );
        warn!("{message}");
        parsed.warnings.push(message);
    }

    Ok((parsed, derived))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const SAMPLE: &str =
        r#"<speak version="1.0" xml:lang="en-US">Hello<break time="1s"/>World</speak>"#;

    #[test]
    fn test_process_within_limit() {
        let (parsed, derived) = process_ssml(SAMPLE, &ValidationConfig::default()).unwrap();
        assert!(parsed.warnings.is_empty());
        assert_eq!(derived.plain_text, "HelloWorld");
        assert_eq!(derived.total_duration, Duration::from_millis(2500));
        assert_eq!(derived.segments[0].properties.language, "en-US");
    }

    #[test]
    fn test_process_warns_when_over_max_duration() {
        let config = ValidationConfig {
            max_duration: Duration::from_secs(2),
            ..Default::default()
        };
        let (parsed, derived) = process_ssml(SAMPLE, &config).unwrap();
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].contains("2.5s"));
        assert_eq!(derived.segments.len(), 2);
    }

    #[test]
    fn test_process_propagates_parse_errors() {
        assert!(matches!(
            process_ssml("<voice>hi</voice>", &ValidationConfig::default()),
            Err(SsmlError::MissingRoot)
        ));
    }
}
