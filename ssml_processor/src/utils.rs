use std::time::Duration;

use ssml_core::SsmlError;

/// 解析 `<break time>` 的时长字符串，例如 `"500ms"`、`"1.5s"`。
///
/// 只接受非负数值加 `ms` 或 `s` 后缀。
pub(crate) fn parse_duration(time_str: &str) -> Result<Duration, SsmlError> {
    let invalid = || SsmlError::InvalidDurationFormat(time_str.to_string());

    let trimmed = time_str.trim();
    let (value_str, nanos_per_unit) = if let Some(stripped) = trimmed.strip_suffix("ms") {
        (stripped, 1e6)
    } else if let Some(stripped) = trimmed.strip_suffix('s') {
        (stripped, 1e9)
    } else {
        return Err(invalid());
    };

    let value: f64 = value_str.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }

    let nanos = (value * nanos_per_unit).round();
    if nanos >= u64::MAX as f64 {
        return Err(invalid());
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let nanos = nanos as u64;
    Ok(Duration::from_nanos(nanos))
}
