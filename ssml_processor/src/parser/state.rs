//! # 解析器的状态

use ssml_core::ValidationConfig;

/// 一次解析调用的全部可变状态。只属于当前调用，不在线程间共享。
#[derive(Debug)]
pub(super) struct SsmlParserState<'c> {
    /// 只读的验证配置。
    pub(super) config: &'c ValidationConfig,
    /// 非致命警告。
    pub(super) warnings: Vec<String>,
    /// 非致命错误。
    pub(super) errors: Vec<String>,
    /// 当前正在构建的元素深度，`<speak>` 的子元素为 1。
    pub(super) depth: usize,
    /// 跳过的未知元素数量，仅用于日志。
    pub(super) skipped_unknown_elements: u32,
}

impl<'c> SsmlParserState<'c> {
    pub(super) const fn new(config: &'c ValidationConfig) -> Self {
        Self {
            config,
            warnings: Vec::new(),
            errors: Vec::new(),
            depth: 0,
            skipped_unknown_elements: 0,
        }
    }
}
