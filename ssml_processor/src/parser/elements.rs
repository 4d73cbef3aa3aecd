//! # SSML 解析器 - 元素构建
//!
//! 递归下降：每个容器元素按标签名分派到对应的属性构建函数，
//! 然后解析其子内容，直到匹配的结束标签。

use std::str;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use ssml_core::{
    Audio, Break, Document, Emphasis, Node, Phoneme, Prosody, SsmlError, Sub, Voice, Word,
};
use tracing::{debug, warn};

use super::{
    constants::{
        ATTR_AGE, ATTR_ALIAS, ATTR_ALPHABET, ATTR_GENDER, ATTR_LANG_ALIAS, ATTR_LEVEL, ATTR_NAME,
        ATTR_PH, ATTR_PITCH, ATTR_RANGE, ATTR_RATE, ATTR_ROLE, ATTR_SRC, ATTR_STRENGTH, ATTR_TIME,
        ATTR_VARIANT, ATTR_VERSION, ATTR_VOLUME, ATTR_XML_LANG, TAG_AUDIO,
        TAG_BREAK, TAG_EMPHASIS, TAG_P, TAG_PHONEME, TAG_PROSODY, TAG_S, TAG_SUB, TAG_VOICE, TAG_W,
    },
    state::SsmlParserState,
    utils::{
        decode_entity, display_name, get_enum_attribute, get_string_attribute, next_event,
        skip_element,
    },
};

/// 解析 `<speak>` 根元素及其全部内容。
pub(super) fn parse_speak(
    e: &BytesStart,
    reader: &mut Reader<&[u8]>,
    state: &mut SsmlParserState,
) -> Result<Document, SsmlError> {
    let version = get_string_attribute(e, reader, &[ATTR_VERSION])?;
    let language = get_string_attribute(e, reader, &[ATTR_XML_LANG, ATTR_LANG_ALIAS])?;
    let content = parse_content(reader, state, e.name().as_ref())?;

    Ok(Document {
        version,
        language,
        content,
    })
}

/// 解析一个容器的子内容，直到遇到名为 `end_name` 的结束标签。
///
/// 相邻的文本、CDATA 和实体引用会合并为一个文本节点，去除首尾空白；
/// 只包含空白的文本会被丢弃。
fn parse_content(
    reader: &mut Reader<&[u8]>,
    state: &mut SsmlParserState,
    end_name: &[u8],
) -> Result<Vec<Node>, SsmlError> {
    let mut content = Vec::new();
    let mut text_buffer = String::new();

    loop {
        match next_event(reader)? {
            Event::Start(e) => {
                flush_text(&mut text_buffer, &mut content);
                if let Some(node) = parse_element(&e, reader, state)? {
                    content.push(node);
                }
            }
            Event::Text(e) => text_buffer.push_str(&e.xml_content()?),
            Event::CData(e) => text_buffer.push_str(&e.decode()?),
            Event::GeneralRef(e) => {
                let entity_name = str::from_utf8(e.as_ref()).map_err(|err| {
                    SsmlError::Internal(format!("无法将实体名解码为UTF-8: {err}"))
                })?;
                if let Some(decoded_char) = decode_entity(entity_name) {
                    text_buffer.push(decoded_char);
                } else {
                    state
                        .warnings
                        .push(format!("忽略了未知的XML实体 '&{entity_name};'"));
                }
            }
            Event::End(e) => {
                if e.name().as_ref() != end_name {
                    return Err(SsmlError::MalformedMarkup(format!(
                        "结束标签 </{}> 与开始标签 <{}> 不匹配",
                        display_name(e.name().as_ref()),
                        display_name(end_name)
                    )));
                }
                flush_text(&mut text_buffer, &mut content);
                return Ok(content);
            }
            Event::Eof => {
                return Err(SsmlError::MalformedMarkup(format!(
                    "元素 <{}> 未闭合",
                    display_name(end_name)
                )));
            }
            // 注释、处理指令、声明等不参与文档模型
            _ => {}
        }
    }
}

fn flush_text(text_buffer: &mut String, content: &mut Vec<Node>) {
    let trimmed = text_buffer.trim();
    if !trimmed.is_empty() {
        content.push(Node::Text(trimmed.to_string()));
    }
    text_buffer.clear();
}

/// 解析单个元素。未知元素被跳过时返回 `Ok(None)`。
///
/// 元素深度一旦超过 `max_nesting_depth` 就立即失败，不再继续递归。
/// 文本节点的深度在构建完成后由验证阶段检查。
fn parse_element(
    e: &BytesStart,
    reader: &mut Reader<&[u8]>,
    state: &mut SsmlParserState,
) -> Result<Option<Node>, SsmlError> {
    state.depth += 1;
    if state.depth > state.config.max_nesting_depth {
        warn!(
            "嵌套深度 {} 超过了允许的最大值 {}",
            state.depth, state.config.max_nesting_depth
        );
        return Err(SsmlError::NestingTooDeep {
            depth: state.depth,
            max: state.config.max_nesting_depth,
        });
    }

    let node = build_element(e, reader, state);
    state.depth -= 1;
    node
}

fn build_element(
    e: &BytesStart,
    reader: &mut Reader<&[u8]>,
    state: &mut SsmlParserState,
) -> Result<Option<Node>, SsmlError> {
    let end_name = e.name();
    let end_name = end_name.as_ref();

    let node = match e.local_name().as_ref() {
        TAG_AUDIO => Node::Audio(Audio {
            src: get_string_attribute(e, reader, &[ATTR_SRC])?.unwrap_or_default(),
            content: parse_content(reader, state, end_name)?,
        }),
        TAG_BREAK => {
            let pause = Break {
                time: get_string_attribute(e, reader, &[ATTR_TIME])?,
                strength: get_enum_attribute(e, reader, &[ATTR_STRENGTH], &mut state.warnings)?,
            };
            // break 不包含子内容：照常解析后丢弃，未知元素仍按配置处理
            parse_content(reader, state, end_name)?;
            Node::Break(pause)
        }
        TAG_EMPHASIS => Node::Emphasis(Emphasis {
            level: get_enum_attribute(e, reader, &[ATTR_LEVEL], &mut state.warnings)?,
            content: parse_content(reader, state, end_name)?,
        }),
        TAG_P => Node::Paragraph(parse_content(reader, state, end_name)?),
        TAG_PHONEME => Node::Phoneme(Phoneme {
            alphabet: get_string_attribute(e, reader, &[ATTR_ALPHABET])?,
            ph: get_string_attribute(e, reader, &[ATTR_PH])?.unwrap_or_default(),
            content: parse_content(reader, state, end_name)?,
        }),
        TAG_PROSODY => Node::Prosody(Prosody {
            rate: get_string_attribute(e, reader, &[ATTR_RATE])?,
            pitch: get_string_attribute(e, reader, &[ATTR_PITCH])?,
            range: get_string_attribute(e, reader, &[ATTR_RANGE])?,
            volume: get_string_attribute(e, reader, &[ATTR_VOLUME])?,
            content: parse_content(reader, state, end_name)?,
        }),
        TAG_S => Node::Sentence(parse_content(reader, state, end_name)?),
        TAG_SUB => Node::Sub(Sub {
            alias: get_string_attribute(e, reader, &[ATTR_ALIAS])?.unwrap_or_default(),
            content: parse_content(reader, state, end_name)?,
        }),
        TAG_VOICE => Node::Voice(Voice {
            name: get_string_attribute(e, reader, &[ATTR_NAME])?,
            gender: get_string_attribute(e, reader, &[ATTR_GENDER])?,
            age: get_string_attribute(e, reader, &[ATTR_AGE])?,
            variant: get_string_attribute(e, reader, &[ATTR_VARIANT])?,
            language: get_string_attribute(e, reader, &[ATTR_XML_LANG, ATTR_LANG_ALIAS])?,
            content: parse_content(reader, state, end_name)?,
        }),
        TAG_W => Node::Word(Word {
            role: get_string_attribute(e, reader, &[ATTR_ROLE])?,
            content: parse_content(reader, state, end_name)?,
        }),
        unknown => {
            let tag = display_name(unknown).into_owned();
            if !state.config.allow_unknown_elements {
                warn!("遇到未知元素 <{tag}>，当前配置不允许未知元素");
                return Err(SsmlError::UnknownElement(tag));
            }

            debug!("跳过未知元素 <{tag}>");
            skip_element(reader, end_name)?;
            state.skipped_unknown_elements += 1;
            state
                .warnings
                .push(format!("跳过了未知元素 <{tag}> 及其全部内容。"));
            return Ok(None);
        }
    };

    Ok(Some(node))
}
