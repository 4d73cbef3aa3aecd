use std::io;

use quick_xml::{
    Error as QuickXmlErrorMain, encoding::EncodingError,
    events::attributes::AttrError as QuickXmlAttrError,
};
use thiserror::Error;

/// 定义 SSML 解析、序列化和推导过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum SsmlError {
    /// XML 读取或写入错误，来自 `quick-xml` 库。
    #[error("XML 错误: {0}")]
    Xml(#[from] QuickXmlErrorMain),
    /// XML 属性解析错误，来自 `quick-xml` 库。
    #[error("XML 属性错误: {0}")]
    Attribute(#[from] QuickXmlAttrError),
    /// XML 文本编码或解码错误。
    #[error("文本编码或解码错误: {0}")]
    Encoding(#[from] EncodingError),
    /// 标记结构错误，例如标签未闭合或在元素内部遇到文件结尾。
    #[error("SSML 标记格式错误: {0}")]
    MalformedMarkup(String),
    /// 文档中没有 `<speak>` 根元素。
    #[error("未找到有效的 SSML 根元素 <speak>")]
    MissingRoot,
    /// 不允许未知元素时遇到了无法识别的标签。
    #[error("未知元素: <{0}>")]
    UnknownElement(String),
    /// 嵌套深度超过了配置的上限。
    #[error("嵌套深度 {depth} 超过了允许的最大值 {max}")]
    NestingTooDeep {
        /// 实际检测到的深度
        depth: usize,
        /// 配置的最大深度
        max: usize,
    },
    /// 严格模式下缺少必需的属性。
    #[error("缺少必需的属性: {0}")]
    MissingRequiredAttribute(String),
    /// 无法识别的时长字符串。
    #[error("无效的时长格式: '{0}'")]
    InvalidDurationFormat(String),
    /// 文件读写等IO错误。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
    /// 从字节序列转换为 UTF-8 字符串失败。
    #[error("UTF-8 转换错误: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
    /// 内部逻辑错误或未明确分类的错误。
    #[error("错误: {0}")]
    Internal(String),
}

impl From<SsmlError> for std::io::Error {
    fn from(err: SsmlError) -> Self {
        Self::other(err)
    }
}

impl SsmlError {
    /// 是否属于标记层面（词法/语法）的错误。
    ///
    /// 这类错误与验证配置无关，总是致命的。
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Xml(_) | Self::Attribute(_) | Self::Encoding(_) | Self::MalformedMarkup(_)
        )
    }
}
