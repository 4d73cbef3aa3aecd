use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::AudioProperties;

/// SSML 验证配置。
///
/// 在构造解析器时传入，之后只读。没有进程级别的全局默认实例，
/// [`Default`] 每次都会构造一个新的值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct ValidationConfig {
    /// 严格模式：缺少 `version`/`xml:lang`、或 `<break time>` 格式无效时解析失败。
    pub strict_mode: bool,
    /// 是否允许（并跳过）未知元素。
    pub allow_unknown_elements: bool,
    /// 允许的最大嵌套深度。`<speak>` 的直接子节点深度为 1。
    pub max_nesting_depth: usize,
    /// 预计总时长的建议上限，超过时只产生警告。
    pub max_duration: Duration,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            allow_unknown_elements: true,
            max_nesting_depth: 10,
            max_duration: Duration::from_secs(3600),
        }
    }
}

/// SSML 生成选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct SsmlGenerationOptions {
    /// 是否输出格式化（带缩进）的 SSML。
    pub format: bool,
    /// 格式化时每层缩进的空格数。
    pub indent_size: usize,
}

impl Default for SsmlGenerationOptions {
    fn default() -> Self {
        Self {
            format: false,
            indent_size: 2,
        }
    }
}

/// 指令推导选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct DeriverOptions {
    /// 每个字符的基础发音时长。
    pub char_duration: Duration,
    /// 属性栈的初始帧。
    pub default_properties: AudioProperties,
}

impl Default for DeriverOptions {
    fn default() -> Self {
        Self {
            char_duration: Duration::from_millis(150),
            default_properties: AudioProperties::default(),
        }
    }
}
