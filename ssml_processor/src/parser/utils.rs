//! # SSML 解析器的工具函数
//!
//! 属性提取、事件读取、实体解码和未知子树跳过。

use std::{borrow::Cow, str::FromStr};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use ssml_core::SsmlError;
use tracing::error;

/// 读取下一个事件。词法/语法错误统一转换为 `MalformedMarkup`，并带上出错位置。
pub(super) fn next_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>, SsmlError> {
    reader.read_event().map_err(|e| {
        let position = reader.error_position();
        error!("SSML 解析错误，位置 {position}: {e}");
        SsmlError::MalformedMarkup(format!("位置 {position}: {e}"))
    })
}

/// 将标签名字节转换为可读字符串，用于警告和错误信息。
pub(super) fn display_name(name: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(name)
}

/// 从给定的属性名列表中获取第一个找到的属性，并将其转换为目标类型。
///
/// # 参数
/// * `e` - `BytesStart` 事件，代表一个 XML 标签的开始。
/// * `reader` - XML 读取器，用于解码。
/// * `attr_names` - 所有要尝试的属性名（包括别名）。
/// * `processor` - 接收解码后的字符串值，返回 `Result<T, SsmlError>`。
pub(super) fn get_attribute_with_aliases<T, F>(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_names: &[&[u8]],
    processor: F,
) -> Result<Option<T>, SsmlError>
where
    F: Fn(&str) -> Result<T, SsmlError>,
{
    let mut found_attr = None;
    for &name in attr_names {
        if let Some(attr) = e.try_get_attribute(name)? {
            found_attr = Some(attr);
            break;
        }
    }

    found_attr
        .map(|attr| {
            let decoded_value = attr.decode_and_unescape_value(reader.decoder())?;
            processor(&decoded_value)
        })
        .transpose()
}

/// 获取字符串类型的属性值。
pub(super) fn get_string_attribute(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_names: &[&[u8]],
) -> Result<Option<String>, SsmlError> {
    get_attribute_with_aliases(e, reader, attr_names, |s| Ok(s.to_owned()))
}

/// 获取枚举类型的属性值。无法识别的值会被忽略并记录一条警告。
pub(super) fn get_enum_attribute<T: FromStr>(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_names: &[&[u8]],
    warnings: &mut Vec<String>,
) -> Result<Option<T>, SsmlError> {
    let Some(value_str) = get_string_attribute(e, reader, attr_names)? else {
        return Ok(None);
    };

    match value_str.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            warnings.push(format!(
                "<{}> 的属性 {} 的值 '{value_str}' 无法识别，已忽略。",
                display_name(e.local_name().as_ref()),
                display_name(attr_names.first().copied().unwrap_or_default()),
            ));
            Ok(None)
        }
    }
}

/// 解码一个 XML 实体引用（不含 `&` 和 `;`）。无法识别时返回 `None`。
pub(super) fn decode_entity(entity_name: &str) -> Option<char> {
    if let Some(num_str) = entity_name.strip_prefix('#') {
        let (radix, code_point_str) = num_str
            .strip_prefix('x')
            .map_or((10, num_str), |stripped| (16, stripped));

        return u32::from_str_radix(code_point_str, radix)
            .ok()
            .and_then(char::from_u32);
    }

    match entity_name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

/// 跳过当前元素的整个子树，直到与之匹配的结束标签。
///
/// 只统计同名标签的嵌套层数，因此同名的未知标签嵌套时不会提前结束。
pub(super) fn skip_element(reader: &mut Reader<&[u8]>, tag_name: &[u8]) -> Result<(), SsmlError> {
    let mut same_name_depth: usize = 1;
    loop {
        match next_event(reader)? {
            Event::Start(e) if e.name().as_ref() == tag_name => same_name_depth += 1,
            Event::End(e) if e.name().as_ref() == tag_name => {
                same_name_depth -= 1;
                if same_name_depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(SsmlError::MalformedMarkup(format!(
                    "元素 <{}> 未闭合",
                    display_name(tag_name)
                )));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entity() {
        assert_eq!(decode_entity("amp"), Some('&'));
        assert_eq!(decode_entity("lt"), Some('<'));
        assert_eq!(decode_entity("apos"), Some('\''));
        assert_eq!(decode_entity("#65"), Some('A'));
        assert_eq!(decode_entity("#x4E2D"), Some('中'));
        assert_eq!(decode_entity("nbsp"), None);
        assert_eq!(decode_entity("#xZZ"), None);
    }

    #[test]
    fn test_skip_element_tracks_same_name_nesting() {
        let mut reader = Reader::from_str("<x><x>a</x><y/>b</x><after/>");
        reader.config_mut().expand_empty_elements = true;

        // 消费第一个 <x>
        assert!(matches!(next_event(&mut reader).unwrap(), Event::Start(_)));
        skip_element(&mut reader, b"x").unwrap();

        match next_event(&mut reader).unwrap() {
            Event::Start(e) => assert_eq!(e.name().as_ref(), b"after"),
            other => panic!("期望 <after>，得到 {other:?}"),
        }
    }

    #[test]
    fn test_skip_element_unterminated() {
        let mut reader = Reader::from_str("<x><x></x>");
        reader.config_mut().check_end_names = false;
        assert!(matches!(next_event(&mut reader).unwrap(), Event::Start(_)));
        assert!(matches!(
            skip_element(&mut reader, b"x"),
            Err(SsmlError::MalformedMarkup(_))
        ));
    }
}
