//! # SSML 生成器 - 节点写入
//!
//! 递归写入 `<speak>` 下的每一个节点。每种元素的属性按固定顺序输出，
//! 缺失的属性不输出，值为空字符串的属性照常输出，没有子内容的元素写成自闭合标签。

use std::io::Write;

use quick_xml::{
    Writer,
    events::{BytesText, Event},
    writer::ElementWriter,
};
use ssml_core::{Break, Document, Node, SsmlError};

/// 写入 `<speak>` 根元素及其全部内容。
pub(super) fn write_speak<W: Write>(
    writer: &mut Writer<W>,
    document: &Document,
) -> Result<(), SsmlError> {
    let element = with_optional_attributes(
        writer.create_element("speak"),
        &[
            ("version", document.version.as_deref()),
            ("xml:lang", document.language.as_deref()),
        ],
    );
    write_element_content(element, &document.content)
}

fn write_nodes<W: Write>(writer: &mut Writer<W>, nodes: &[Node]) -> Result<(), SsmlError> {
    for node in nodes {
        write_node(writer, node)?;
    }
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<(), SsmlError> {
    match node {
        Node::Text(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
            Ok(())
        }
        Node::Break(pause) => write_break(writer, pause),
        Node::Audio(audio) => write_element_content(
            with_optional_attributes(
                writer.create_element("audio"),
                &[("src", Some(audio.src.as_str()))],
            ),
            &audio.content,
        ),
        Node::Voice(voice) => write_element_content(
            with_optional_attributes(
                writer.create_element("voice"),
                &[
                    ("name", voice.name.as_deref()),
                    ("gender", voice.gender.as_deref()),
                    ("age", voice.age.as_deref()),
                    ("variant", voice.variant.as_deref()),
                    ("xml:lang", voice.language.as_deref()),
                ],
            ),
            &voice.content,
        ),
        Node::Prosody(prosody) => write_element_content(
            with_optional_attributes(
                writer.create_element("prosody"),
                &[
                    ("rate", prosody.rate.as_deref()),
                    ("pitch", prosody.pitch.as_deref()),
                    ("range", prosody.range.as_deref()),
                    ("volume", prosody.volume.as_deref()),
                ],
            ),
            &prosody.content,
        ),
        Node::Emphasis(emphasis) => {
            let level = emphasis.level.map(|level| level.to_string());
            write_element_content(
                with_optional_attributes(
                    writer.create_element("emphasis"),
                    &[("level", level.as_deref())],
                ),
                &emphasis.content,
            )
        }
        Node::Paragraph(content) => write_element_content(writer.create_element("p"), content),
        Node::Sentence(content) => write_element_content(writer.create_element("s"), content),
        Node::Word(word) => write_element_content(
            with_optional_attributes(
                writer.create_element("w"),
                &[("role", word.role.as_deref())],
            ),
            &word.content,
        ),
        Node::Phoneme(phoneme) => write_element_content(
            with_optional_attributes(
                writer.create_element("phoneme"),
                &[
                    ("alphabet", phoneme.alphabet.as_deref()),
                    ("ph", Some(phoneme.ph.as_str())),
                ],
            ),
            &phoneme.content,
        ),
        Node::Sub(sub) => write_element_content(
            with_optional_attributes(
                writer.create_element("sub"),
                &[("alias", Some(sub.alias.as_str()))],
            ),
            &sub.content,
        ),
    }
}

/// `<break>` 总是自闭合。
fn write_break<W: Write>(writer: &mut Writer<W>, pause: &Break) -> Result<(), SsmlError> {
    let strength = pause.strength.map(|strength| strength.to_string());
    with_optional_attributes(
        writer.create_element("break"),
        &[
            ("time", pause.time.as_deref()),
            ("strength", strength.as_deref()),
        ],
    )
    .write_empty()?;
    Ok(())
}

/// 按给定顺序添加属性，只跳过缺失的值。属性值由 `quick-xml` 负责转义。
fn with_optional_attributes<'a, W: Write>(
    mut element: ElementWriter<'a, W>,
    attributes: &[(&str, Option<&str>)],
) -> ElementWriter<'a, W> {
    for &(key, value) in attributes {
        if let Some(value) = value {
            element = element.with_attribute((key, value));
        }
    }
    element
}

fn write_element_content<W: Write>(
    element: ElementWriter<'_, W>,
    content: &[Node],
) -> Result<(), SsmlError> {
    if content.is_empty() {
        element.write_empty()?;
    } else {
        element.write_inner_content(|writer| {
            write_nodes(writer, content)?;
            Ok(())
        })?;
    }
    Ok(())
}
