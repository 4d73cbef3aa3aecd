//! # SSML 指令推导
//!
//! 从文档树推导出供语音合成使用的纯文本、带时间的音频片段以及
//! 停顿和音频插入指令。

mod context;
mod timing;

use ssml_core::{AudioProcessingResult, DeriverOptions, Document};
use tracing::debug;

use self::context::ProcessingContext;

/// 持有推导选项的指令推导器。
///
/// 每次调用 [`SsmlDeriver::derive`] 都使用独立的遍历状态，同一个实例可以在多个线程中共享。
#[derive(Debug, Clone, Default)]
pub struct SsmlDeriver {
    options: DeriverOptions,
}

impl SsmlDeriver {
    #[must_use]
    pub const fn new(options: DeriverOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &DeriverOptions {
        &self.options
    }

    /// 遍历文档并生成处理结果。
    ///
    /// 文档根元素指定了 `xml:lang` 时，它会覆盖默认属性中的语言。
    #[must_use]
    pub fn derive(&self, document: &Document) -> AudioProcessingResult {
        let mut base_properties = self.options.default_properties.clone();
        if let Some(language) = document.language.as_deref().filter(|l| !l.trim().is_empty()) {
            base_properties.language = language.to_string();
        }

        let mut context = ProcessingContext::new(&self.options, base_properties);
        context.process_nodes(&document.content);
        let result = context.finish();

        debug!(
            "指令推导完成：{} 个字符，{} 个片段，{} 条指令，预计时长 {:?}",
            result.plain_text.chars().count(),
            result.segments.len(),
            result.instructions.len(),
            result.total_duration
        );

        result
    }
}

/// 使用默认选项推导。参见 [`SsmlDeriver::derive`]。
#[must_use]
pub fn derive(document: &Document) -> AudioProcessingResult {
    SsmlDeriver::default().derive(document)
}
