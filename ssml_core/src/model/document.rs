//! # SSML 文档模型
//!
//! 以类型化的树表示 SSML 文档。这里只描述结构，不做任何验证；
//! 验证由解析器负责。

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// `<break>` 的停顿强度。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BreakStrength {
    /// 无停顿
    None,
    /// 极弱
    XWeak,
    /// 弱
    Weak,
    /// 中等
    Medium,
    /// 强
    Strong,
    /// 极强
    XStrong,
}

/// `<emphasis>` 的强调级别。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EmphasisLevel {
    /// 不强调
    #[default]
    None,
    /// 弱化
    Reduced,
    /// 适度强调
    Moderate,
    /// 强烈强调
    Strong,
}

/// `<break>` 元素。`time` 与 `strength` 可以同时存在，`time` 优先。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// 停顿时长字符串，例如 `"500ms"`、`"1.5s"`。
    pub time: Option<String>,
    /// 停顿强度。
    pub strength: Option<BreakStrength>,
}

/// `<audio>` 元素。无法播放外部音频时使用 `content` 作为备用内容。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    pub src: String,
    pub content: Vec<Node>,
}

/// `<voice>` 元素，未设置的字段从外层继承。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub variant: Option<String>,
    /// `xml:lang`
    pub language: Option<String>,
    pub content: Vec<Node>,
}

/// `<prosody>` 元素，未设置的字段从外层继承。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prosody {
    pub rate: Option<String>,
    pub pitch: Option<String>,
    pub range: Option<String>,
    pub volume: Option<String>,
    pub content: Vec<Node>,
}

/// `<emphasis>` 元素。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emphasis {
    pub level: Option<EmphasisLevel>,
    pub content: Vec<Node>,
}

/// `<w>` 元素。`role` 只保留在模型中。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub role: Option<String>,
    pub content: Vec<Node>,
}

/// `<phoneme>` 元素。`ph` 只是元数据，提取文本时使用 `content`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    pub alphabet: Option<String>,
    pub ph: String,
    pub content: Vec<Node>,
}

/// `<sub>` 元素。朗读时使用 `alias` 代替 `content`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sub {
    pub alias: String,
    pub content: Vec<Node>,
}

/// 文档树中的一个节点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// 纯文本
    Text(String),
    /// `<break>`
    Break(Break),
    /// `<audio>`
    Audio(Audio),
    /// `<voice>`
    Voice(Voice),
    /// `<prosody>`
    Prosody(Prosody),
    /// `<emphasis>`
    Emphasis(Emphasis),
    /// `<p>`，结束时自动停顿
    Paragraph(Vec<Node>),
    /// `<s>`，结束时自动停顿
    Sentence(Vec<Node>),
    /// `<w>`
    Word(Word),
    /// `<phoneme>`
    Phoneme(Phoneme),
    /// `<sub>`
    Sub(Sub),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// 只带 `time` 属性的停顿。
    pub fn pause_time(time: impl Into<String>) -> Self {
        Self::Break(Break {
            time: Some(time.into()),
            strength: None,
        })
    }

    /// 只带 `strength` 属性的停顿。
    #[must_use]
    pub const fn pause_strength(strength: BreakStrength) -> Self {
        Self::Break(Break {
            time: None,
            strength: Some(strength),
        })
    }

    pub fn audio(src: impl Into<String>, fallback: Vec<Self>) -> Self {
        Self::Audio(Audio {
            src: src.into(),
            content: fallback,
        })
    }

    #[must_use]
    pub fn voice(voice: Voice) -> Self {
        Self::Voice(voice)
    }

    #[must_use]
    pub fn prosody(prosody: Prosody) -> Self {
        Self::Prosody(prosody)
    }

    #[must_use]
    pub const fn emphasis(level: Option<EmphasisLevel>, content: Vec<Self>) -> Self {
        Self::Emphasis(Emphasis { level, content })
    }

    #[must_use]
    pub const fn paragraph(content: Vec<Self>) -> Self {
        Self::Paragraph(content)
    }

    #[must_use]
    pub const fn sentence(content: Vec<Self>) -> Self {
        Self::Sentence(content)
    }

    #[must_use]
    pub const fn word(role: Option<String>, content: Vec<Self>) -> Self {
        Self::Word(Word { role, content })
    }

    pub fn phoneme(alphabet: Option<String>, ph: impl Into<String>, content: Vec<Self>) -> Self {
        Self::Phoneme(Phoneme {
            alphabet,
            ph: ph.into(),
            content,
        })
    }

    pub fn sub(alias: impl Into<String>, content: Vec<Self>) -> Self {
        Self::Sub(Sub {
            alias: alias.into(),
            content,
        })
    }

    /// 返回容器节点的子节点；叶子节点返回 `None`。
    #[must_use]
    pub fn content(&self) -> Option<&[Self]> {
        match self {
            Self::Text(_) | Self::Break(_) => None,
            Self::Audio(a) => Some(&a.content),
            Self::Voice(v) => Some(&v.content),
            Self::Prosody(p) => Some(&p.content),
            Self::Emphasis(e) => Some(&e.content),
            Self::Paragraph(c) | Self::Sentence(c) => Some(c),
            Self::Word(w) => Some(&w.content),
            Self::Phoneme(p) => Some(&p.content),
            Self::Sub(s) => Some(&s.content),
        }
    }

    /// 节点对应的 SSML 标签名。文本节点没有标签名。
    #[must_use]
    pub const fn tag_name(&self) -> Option<&'static str> {
        match self {
            Self::Text(_) => None,
            Self::Break(_) => Some("break"),
            Self::Audio(_) => Some("audio"),
            Self::Voice(_) => Some("voice"),
            Self::Prosody(_) => Some("prosody"),
            Self::Emphasis(_) => Some("emphasis"),
            Self::Paragraph(_) => Some("p"),
            Self::Sentence(_) => Some("s"),
            Self::Word(_) => Some("w"),
            Self::Phoneme(_) => Some("phoneme"),
            Self::Sub(_) => Some("sub"),
        }
    }

    /// 全部由空白组成的文本节点在语义上为空。
    #[must_use]
    pub fn is_semantically_empty(&self) -> bool {
        matches!(self, Self::Text(t) if t.trim().is_empty())
    }
}

/// SSML 文档的根节点 `<speak>`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub version: Option<String>,
    /// `xml:lang`
    pub language: Option<String>,
    pub content: Vec<Node>,
}

impl Document {
    #[must_use]
    pub const fn new(version: Option<String>, language: Option<String>, content: Vec<Node>) -> Self {
        Self {
            version,
            language,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_enum_markup_spelling() {
        assert_eq!(BreakStrength::XWeak.to_string(), "x-weak");
        assert_eq!(BreakStrength::XStrong.to_string(), "x-strong");
        assert_eq!(
            BreakStrength::from_str("medium").unwrap(),
            BreakStrength::Medium
        );
        assert!(BreakStrength::from_str("loud").is_err());

        assert_eq!(EmphasisLevel::Moderate.to_string(), "moderate");
        assert_eq!(
            EmphasisLevel::from_str("reduced").unwrap(),
            EmphasisLevel::Reduced
        );
    }

    #[test]
    fn test_enum_spelling_round_trips() {
        for strength in BreakStrength::iter() {
            assert_eq!(
                BreakStrength::from_str(&strength.to_string()).unwrap(),
                strength
            );
        }
        assert_eq!(EmphasisLevel::iter().count(), 4);
    }

    #[test]
    fn test_content_access() {
        let sentence = Node::sentence(vec![Node::text("a"), Node::pause_time("1s")]);
        assert_eq!(sentence.content().map(<[Node]>::len), Some(2));
        assert_eq!(sentence.tag_name(), Some("s"));

        assert!(Node::text("leaf").content().is_none());
        assert!(Node::pause_strength(BreakStrength::Weak).content().is_none());
        assert_eq!(Node::text("x").tag_name(), None);
    }

    #[test]
    fn test_semantically_empty_text() {
        assert!(Node::text("  \n\t ").is_semantically_empty());
        assert!(!Node::text(" a ").is_semantically_empty());
        assert!(!Node::paragraph(vec![]).is_semantically_empty());
    }
}
