//! # SSML 生成器
//!
//! 解析器的逆过程：将 [`Document`] 写回 SSML 文本。

mod body;

use std::io::Cursor;

use quick_xml::{
    Writer,
    events::{BytesDecl, Event},
};
use ssml_core::{Document, SsmlError, SsmlGenerationOptions};

/// SSML 生成的主入口函数。
///
/// 输出以 XML 声明开头，随后是 `<speak>` 根元素。相同的文档总是生成
/// 完全相同的字节。
///
/// # 参数
/// * `document` - 要序列化的文档。
/// * `options` - 生成选项，控制是否格式化输出以及缩进宽度。
///
/// # Errors
///
/// 如果在写入 XML 或将结果转换为字符串时发生错误（例如 I/O 错误或 UTF-8 编码问题），
/// 则会返回 `SsmlError`。
pub fn generate_ssml(
    document: &Document,
    options: &SsmlGenerationOptions,
) -> Result<String, SsmlError> {
    let mut buffer = Vec::new();

    // 决定是否输出格式化的 SSML
    let result = if options.format {
        let mut writer =
            Writer::new_with_indent(Cursor::new(&mut buffer), b' ', options.indent_size);
        generate_ssml_inner(&mut writer, document)
    } else {
        let mut writer = Writer::new(Cursor::new(&mut buffer));
        generate_ssml_inner(&mut writer, document)
    };

    result?;

    String::from_utf8(buffer).map_err(SsmlError::FromUtf8)
}

/// 使用默认缩进序列化文档，`pretty` 为 `true` 时输出格式化的 SSML。
///
/// # Errors
///
/// 与 [`generate_ssml`] 相同。
pub fn serialize(document: &Document, pretty: bool) -> Result<String, SsmlError> {
    generate_ssml(
        document,
        &SsmlGenerationOptions {
            format: pretty,
            ..Default::default()
        },
    )
}

fn generate_ssml_inner<W: std::io::Write>(
    writer: &mut Writer<W>,
    document: &Document,
) -> Result<(), SsmlError> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    body::write_speak(writer, document)
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use ssml_core::{BreakStrength, EmphasisLevel, Node, Prosody, Voice};

    use super::*;

    fn hello_world() -> Document {
        Document::new(
            Some("1.0".to_string()),
            Some("en-US".to_string()),
            vec![
                Node::text("Hello"),
                Node::pause_time("1s"),
                Node::text("World"),
            ],
        )
    }

    #[test]
    fn test_compact_output() {
        let output = serialize(&hello_world(), false).unwrap();
        assert_snapshot!(output, @r#"<?xml version="1.0" encoding="UTF-8"?><speak version="1.0" xml:lang="en-US">Hello<break time="1s"/>World</speak>"#);
    }

    #[test]
    fn test_pretty_output_indents_by_depth() {
        let document = Document::new(
            Some("1.0".to_string()),
            Some("en-US".to_string()),
            vec![
                Node::paragraph(vec![Node::sentence(vec![Node::text("Hi")])]),
                Node::pause_strength(BreakStrength::Weak),
            ],
        );
        let output = serialize(&document, true).unwrap();
        assert_snapshot!(output, @r#"
<?xml version="1.0" encoding="UTF-8"?>
<speak version="1.0" xml:lang="en-US">
  <p>
    <s>Hi</s>
  </p>
  <break strength="weak"/>
</speak>
"#);
    }

    #[test]
    fn test_empty_containers_are_self_closing() {
        let document = Document::new(
            None,
            None,
            vec![
                Node::paragraph(vec![]),
                Node::emphasis(Some(EmphasisLevel::Reduced), vec![]),
                Node::audio("a.wav", vec![]),
            ],
        );
        let output = serialize(&document, false).unwrap();
        assert_snapshot!(output, @r#"<?xml version="1.0" encoding="UTF-8"?><speak><p/><emphasis level="reduced"/><audio src="a.wav"/></speak>"#);

        let empty = serialize(&Document::default(), false).unwrap();
        assert!(empty.ends_with("<speak/>"));
    }

    #[test]
    fn test_empty_attribute_values_are_written() {
        let document = Document::new(
            Some(String::new()),
            None,
            vec![Node::pause_time(""), Node::audio("", vec![])],
        );
        let output = serialize(&document, false).unwrap();
        assert_snapshot!(output, @r#"<?xml version="1.0" encoding="UTF-8"?><speak version=""><break time=""/><audio src=""/></speak>"#);
    }

    #[test]
    fn test_escaping_in_text_and_attributes() {
        let document = Document::new(
            Some("1.0".to_string()),
            None,
            vec![Node::sub(
                r#"a "quoted" & 'single'"#,
                vec![Node::text("<b> & c")],
            )],
        );
        let output = serialize(&document, false).unwrap();
        assert!(output.contains(r#"alias="a &quot;quoted&quot; &amp; &apos;single&apos;""#));
        assert!(output.contains("&lt;b&gt; &amp; c"));
    }

    #[test]
    fn test_fixed_attribute_order_is_byte_stable() {
        let document = Document::new(
            Some("1.0".to_string()),
            Some("zh-CN".to_string()),
            vec![Node::voice(Voice {
                language: Some("en".to_string()),
                variant: Some("1".to_string()),
                name: Some("alice".to_string()),
                gender: Some("female".to_string()),
                age: None,
                content: vec![Node::prosody(Prosody {
                    volume: Some("loud".to_string()),
                    rate: Some("slow".to_string()),
                    ..Default::default()
                })],
            })],
        );

        let first = serialize(&document, true).unwrap();
        let second = serialize(&document, true).unwrap();
        assert_eq!(first, second);
        assert!(first.contains(r#"<voice name="alice" gender="female" variant="1" xml:lang="en">"#));
        assert!(first.contains(r#"<prosody rate="slow" volume="loud"/>"#));
    }

    #[test]
    fn test_custom_indent_size() {
        let document = Document::new(None, None, vec![Node::paragraph(vec![Node::pause_time("1s")])]);
        let options = SsmlGenerationOptions {
            format: true,
            indent_size: 4,
        };
        let output = generate_ssml(&document, &options).unwrap();
        assert!(output.contains("\n    <p>\n        <break time=\"1s\"/>\n    </p>\n"));
    }
}
