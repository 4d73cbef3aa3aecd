//! # SSML 解析器 - 常量定义
//!
//! 解析时用到的所有 SSML 标签和属性名。

pub(super) const TAG_SPEAK: &[u8] = b"speak";
pub(super) const TAG_AUDIO: &[u8] = b"audio";
pub(super) const TAG_BREAK: &[u8] = b"break";
pub(super) const TAG_EMPHASIS: &[u8] = b"emphasis";
pub(super) const TAG_P: &[u8] = b"p";
pub(super) const TAG_PHONEME: &[u8] = b"phoneme";
pub(super) const TAG_PROSODY: &[u8] = b"prosody";
pub(super) const TAG_S: &[u8] = b"s";
pub(super) const TAG_SUB: &[u8] = b"sub";
pub(super) const TAG_VOICE: &[u8] = b"voice";
pub(super) const TAG_W: &[u8] = b"w";

pub(super) const ATTR_VERSION: &[u8] = b"version";
pub(super) const ATTR_XML_LANG: &[u8] = b"xml:lang";
pub(super) const ATTR_LANG_ALIAS: &[u8] = b"lang";
pub(super) const ATTR_SRC: &[u8] = b"src";
pub(super) const ATTR_TIME: &[u8] = b"time";
pub(super) const ATTR_STRENGTH: &[u8] = b"strength";
pub(super) const ATTR_LEVEL: &[u8] = b"level";
pub(super) const ATTR_ALPHABET: &[u8] = b"alphabet";
pub(super) const ATTR_PH: &[u8] = b"ph";
pub(super) const ATTR_RATE: &[u8] = b"rate";
pub(super) const ATTR_PITCH: &[u8] = b"pitch";
pub(super) const ATTR_RANGE: &[u8] = b"range";
pub(super) const ATTR_VOLUME: &[u8] = b"volume";
pub(super) const ATTR_ALIAS: &[u8] = b"alias";
pub(super) const ATTR_NAME: &[u8] = b"name";
pub(super) const ATTR_GENDER: &[u8] = b"gender";
pub(super) const ATTR_AGE: &[u8] = b"age";
pub(super) const ATTR_VARIANT: &[u8] = b"variant";
pub(super) const ATTR_ROLE: &[u8] = b"role";
