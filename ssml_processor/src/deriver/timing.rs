//! # 指令推导 - 时长估算

use std::time::Duration;

use ssml_core::{Break, BreakStrength};
use tracing::warn;

use crate::utils::parse_duration;

/// 既没有 `time` 也没有 `strength` 的停顿时长。
pub(super) const DEFAULT_BREAK: Duration = Duration::from_millis(500);
pub(super) const PARAGRAPH_PAUSE: Duration = Duration::from_millis(300);
pub(super) const SENTENCE_PAUSE: Duration = Duration::from_millis(200);

/// 语速对应的时长倍数。
///
/// 无法识别的值、负数以及非有限的百分比都按 `medium` 处理。
pub(super) fn rate_multiplier(rate: &str) -> f64 {
    match rate {
        "x-slow" => 2.0,
        "slow" => 1.5,
        "medium" => 1.0,
        "fast" => 0.75,
        "x-fast" => 0.5,
        other => other
            .strip_suffix('%')
            .and_then(|value| value.trim().parse::<f64>().ok())
            .map(|percent| percent / 100.0)
            .filter(|ratio| ratio.is_finite() && *ratio >= 0.0)
            .unwrap_or(1.0),
    }
}

/// 估算一段文本的朗读时长：`字符数 × 每字符时长 × 语速倍数`。
pub(super) fn estimate_text_duration(text: &str, char_duration: Duration, rate: &str) -> Duration {
    let char_count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    let base = char_duration
        .checked_mul(char_count)
        .unwrap_or(Duration::MAX);

    #[allow(clippy::cast_precision_loss)]
    let nanos = (base.as_nanos() as f64 * rate_multiplier(rate)).round();
    if nanos >= u64::MAX as f64 {
        return Duration::MAX;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let nanos = nanos as u64;
    Duration::from_nanos(nanos)
}

pub(super) const fn strength_duration(strength: BreakStrength) -> Duration {
    match strength {
        BreakStrength::None => Duration::ZERO,
        BreakStrength::XWeak => Duration::from_millis(100),
        BreakStrength::Weak => Duration::from_millis(250),
        BreakStrength::Medium => Duration::from_millis(500),
        BreakStrength::Strong => Duration::from_secs(1),
        BreakStrength::XStrong => Duration::from_secs(2),
    }
}

/// 计算停顿时长。`time` 优先于 `strength`；`time` 无法解析时按零时长处理。
pub(super) fn break_duration(pause: &Break) -> Duration {
    if let Some(time) = pause.time.as_deref().filter(|t| !t.trim().is_empty()) {
        return parse_duration(time).unwrap_or_else(|err| {
            warn!("{err}，该停顿按零时长处理");
            Duration::ZERO
        });
    }

    pause
        .strength
        .map_or(DEFAULT_BREAK, strength_duration)
}
