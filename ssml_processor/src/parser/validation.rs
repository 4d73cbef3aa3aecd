//! # SSML 解析器 - 文档验证
//!
//! 在文档树完整构建之后执行：必需属性、嵌套深度、停顿时长格式。

use ssml_core::{Document, Node, SsmlError};
use tracing::warn;

use super::state::SsmlParserState;
use crate::utils::parse_duration;

pub(super) fn validate_document(
    document: &Document,
    state: &mut SsmlParserState,
) -> Result<(), SsmlError> {
    validate_required_attributes(document, state)?;
    validate_nesting_depth(&document.content, 1, state.config.max_nesting_depth)?;
    validate_break_times(&document.content, state)
}

/// 检查根元素的 `version` 和 `xml:lang`。严格模式下缺失即失败，否则记录警告。
fn validate_required_attributes(
    document: &Document,
    state: &mut SsmlParserState,
) -> Result<(), SsmlError> {
    let required = [
        ("version", document.version.as_deref()),
        ("xml:lang", document.language.as_deref()),
    ];

    for (attr_name, value) in required {
        if value.is_some_and(|v| !v.trim().is_empty()) {
            continue;
        }
        if state.config.strict_mode {
            state
                .errors
                .push(format!("严格模式下 <speak> 必须指定 {attr_name} 属性"));
            return Err(SsmlError::MissingRequiredAttribute(attr_name.to_string()));
        }
        state
            .warnings
            .push(format!("<speak> 未指定 {attr_name} 属性"));
    }

    Ok(())
}

/// 深度优先检查嵌套深度。`content` 中的节点位于 `depth` 层。
fn validate_nesting_depth(content: &[Node], depth: usize, max: usize) -> Result<(), SsmlError> {
    for node in content {
        if depth > max {
            warn!("嵌套深度 {depth} 超过了允许的最大值 {max}");
            return Err(SsmlError::NestingTooDeep { depth, max });
        }
        if let Some(children) = node.content() {
            validate_nesting_depth(children, depth + 1, max)?;
        }
    }
    Ok(())
}

/// 检查每个 `<break time>` 的格式。严格模式下无效格式是致命错误，
/// 否则记录为非致命错误，推导时该停顿按零时长处理。
fn validate_break_times(content: &[Node], state: &mut SsmlParserState) -> Result<(), SsmlError> {
    for node in content {
        if let Node::Break(pause) = node
            && let Some(time) = pause.time.as_deref().filter(|t| !t.trim().is_empty())
            && let Err(err) = parse_duration(time)
        {
            if state.config.strict_mode {
                return Err(err);
            }
            state.errors.push(format!("{err}，该停顿将按零时长处理。"));
        }
        if let Some(children) = node.content() {
            validate_break_times(children, state)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ssml_core::{BreakStrength, ValidationConfig};

    use super::*;

    fn nested(depth: usize) -> Vec<Node> {
        let mut node = Node::text("core");
        for _ in 1..depth {
            node = Node::word(None, vec![node]);
        }
        vec![node]
    }

    #[test]
    fn test_nesting_depth_boundary() {
        assert!(validate_nesting_depth(&nested(3), 1, 3).is_ok());
        assert!(matches!(
            validate_nesting_depth(&nested(4), 1, 3),
            Err(SsmlError::NestingTooDeep { depth: 4, max: 3 })
        ));
        assert!(validate_nesting_depth(&[], 1, 0).is_ok());
    }

    #[test]
    fn test_break_time_reported_in_lenient_mode() {
        let config = ValidationConfig::default();
        let mut state = SsmlParserState::new(&config);
        let content = vec![Node::paragraph(vec![
            Node::pause_time("2 minutes"),
            Node::pause_time("1s"),
            Node::pause_strength(BreakStrength::Strong),
        ])];

        validate_break_times(&content, &mut state).unwrap();
        assert_eq!(state.errors.len(), 1);
        assert!(state.errors[0].contains("2 minutes"));
    }

    #[test]
    fn test_break_time_fatal_in_strict_mode() {
        let config = ValidationConfig {
            strict_mode: true,
            ..Default::default()
        };
        let mut state = SsmlParserState::new(&config);
        let content = vec![Node::pause_time("fast")];

        assert!(matches!(
            validate_break_times(&content, &mut state),
            Err(SsmlError::InvalidDurationFormat(ref s)) if s == "fast"
        ));
    }

    #[test]
    fn test_missing_attributes_warn_in_lenient_mode() {
        let config = ValidationConfig::default();
        let mut state = SsmlParserState::new(&config);
        let document = Document::default();

        validate_required_attributes(&document, &mut state).unwrap();
        assert_eq!(state.warnings.len(), 2);
        assert!(state.errors.is_empty());
    }
}
