use crate::{AudioProperties, SsmlError};

/// 语音合成后端。
///
/// 核心库从不直接调用它，只负责为它准备输入：每个 [`crate::AudioSegment`]
/// 的文本和属性快照、停顿时长以及外部音频引用。
pub trait SpeechSynthesizer: Send + Sync {
    /// 合成一段文本，返回归一化的采样数据。
    ///
    /// # Errors
    ///
    /// 后端无法合成时返回错误。
    fn synthesize(&self, text: &str, properties: &AudioProperties) -> Result<Vec<f32>, SsmlError>;

    /// 输出采样率。
    fn sample_rate(&self) -> u32;
}
