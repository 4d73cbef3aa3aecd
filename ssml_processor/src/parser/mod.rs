//! # SSML (Speech Synthesis Markup Language) 解析器
//!
//! 单次前向读取 XML 事件流，递归下降构建 [`Document`]，
//! 构建完成后按 [`ValidationConfig`] 进行验证。

mod constants;
mod elements;
mod state;
mod utils;
mod validation;

use quick_xml::{Reader, events::Event};
use ssml_core::{Document, ParseResult, SsmlError, ValidationConfig};
use tracing::{debug, error};

use self::{
    constants::TAG_SPEAK,
    state::SsmlParserState,
    utils::{display_name, next_event, skip_element},
};

/// 持有一份验证配置的 SSML 解析器。
///
/// 解析器本身不保存任何解析状态，可以在多个线程中共享同一个实例。
#[derive(Debug, Clone, Default)]
pub struct SsmlParser {
    config: ValidationConfig,
}

impl SsmlParser {
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// 解析 SSML 字符串。参见 [`parse_ssml`]。
    ///
    /// # Errors
    ///
    /// 与 [`parse_ssml`] 相同。
    pub fn parse(&self, content: &str) -> Result<ParseResult, SsmlError> {
        parse_ssml(content, &self.config)
    }
}

/// 解析 SSML 格式的字符串。
///
/// # 参数
///
/// * `content` - SSML 文档内容。
/// * `config` - 验证配置。
///
/// # 返回
///
/// * `Ok(ParseResult)` - 解析成功，包含文档以及非致命的警告和错误。
/// * `Err(SsmlError)` - 遇到致命错误，不返回任何部分构建的文档。
///
/// # Errors
///
/// * `SsmlError::MalformedMarkup` - 标签不匹配、未闭合或其它 XML 语法错误。
/// * `SsmlError::Attribute` / `SsmlError::Encoding` - 属性或文本无法解码。
/// * `SsmlError::MissingRoot` - 没有 `<speak>` 根元素。
/// * `SsmlError::UnknownElement` - 配置不允许未知元素时遇到了未知元素。
/// * `SsmlError::NestingTooDeep` - 嵌套深度超过 `max_nesting_depth`。
/// * `SsmlError::MissingRequiredAttribute` - 严格模式下缺少 `version` 或 `xml:lang`。
/// * `SsmlError::InvalidDurationFormat` - 严格模式下 `<break time>` 格式无效。
pub fn parse_ssml(content: &str, config: &ValidationConfig) -> Result<ParseResult, SsmlError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().expand_empty_elements = true;

    let mut state = SsmlParserState::new(config);
    let mut root: Option<Document> = None;

    loop {
        match next_event(&mut reader)? {
            Event::Start(e) => {
                if root.is_none() && e.local_name().as_ref() == TAG_SPEAK {
                    root = Some(elements::parse_speak(&e, &mut reader, &mut state)?);
                } else {
                    state.warnings.push(format!(
                        "根元素应为 <speak>，发现 <{}>，已跳过。",
                        display_name(e.name().as_ref())
                    ));
                    skip_element(&mut reader, e.name().as_ref())?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let Some(document) = root else {
        error!("未找到有效的 SSML 根元素 <speak>");
        return Err(SsmlError::MissingRoot);
    };

    validation::validate_document(&document, &mut state)?;

    debug!(
        "SSML 解析完成：{} 个顶层节点，{} 条警告，{} 条错误，跳过 {} 个未知元素",
        document.content.len(),
        state.warnings.len(),
        state.errors.len(),
        state.skipped_unknown_elements
    );

    Ok(ParseResult {
        document,
        warnings: state.warnings,
        errors: state.errors,
    })
}
