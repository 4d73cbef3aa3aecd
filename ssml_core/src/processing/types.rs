//! # 解析与推导结果类型

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{Document, EmphasisLevel};

/// 成功解析后的结果。
///
/// 致命错误以 `Err(SsmlError)` 返回，此时不会暴露任何部分构建的文档树。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// 解析得到的文档。
    pub document: Document,
    /// 非致命的警告，按出现顺序排列。
    pub warnings: Vec<String>,
    /// 非致命的错误报告，按出现顺序排列。
    pub errors: Vec<String>,
}

/// 某一时刻生效的语音属性（一个属性帧）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioProperties {
    /// 语速：x-slow, slow, medium, fast, x-fast 或百分比
    pub rate: String,
    /// 音调
    pub pitch: String,
    /// 音量
    pub volume: String,
    /// 声音名称
    pub voice: String,
    /// 性别：male, female, neutral
    pub gender: String,
    /// 语言
    pub language: String,
    /// 强调级别
    pub emphasis: EmphasisLevel,
}

impl Default for AudioProperties {
    fn default() -> Self {
        Self {
            rate: "medium".to_string(),
            pitch: "medium".to_string(),
            volume: "medium".to_string(),
            voice: "default".to_string(),
            gender: "neutral".to_string(),
            language: "zh-CN".to_string(),
            emphasis: EmphasisLevel::None,
        }
    }
}

/// 一段待合成的文本。每个片段都是自包含的快照，可以独立合成。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSegment {
    pub text: String,
    /// 在最终音频中的开始时间
    pub start_time: Duration,
    /// 预计时长
    pub duration: Duration,
    pub properties: AudioProperties,
}

impl AudioSegment {
    #[must_use]
    pub fn end_time(&self) -> Duration {
        self.start_time + self.duration
    }
}

/// 指令类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InstructionKind {
    Break,
    AutoBreak,
    Audio,
}

/// 非文本的处理指令，`position` 是在纯文本中的字符偏移。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioInstruction {
    /// 显式的 `<break>` 停顿
    Break { position: usize, duration: Duration },
    /// 段落/句子结束时的自动停顿
    AutoBreak { position: usize, duration: Duration },
    /// 插入外部音频
    Audio { position: usize, src: String },
}

impl AudioInstruction {
    #[must_use]
    pub const fn kind(&self) -> InstructionKind {
        match self {
            Self::Break { .. } => InstructionKind::Break,
            Self::AutoBreak { .. } => InstructionKind::AutoBreak,
            Self::Audio { .. } => InstructionKind::Audio,
        }
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Break { position, .. }
            | Self::AutoBreak { position, .. }
            | Self::Audio { position, .. } => *position,
        }
    }

    /// 停顿类指令的时长；音频指令返回 `None`。
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        match self {
            Self::Break { duration, .. } | Self::AutoBreak { duration, .. } => Some(*duration),
            Self::Audio { .. } => None,
        }
    }

    #[must_use]
    pub fn audio_src(&self) -> Option<&str> {
        match self {
            Self::Audio { src, .. } => Some(src),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_pause(&self) -> bool {
        matches!(self, Self::Break { .. } | Self::AutoBreak { .. })
    }
}

/// 从文档推导出的纯文本、音频片段和处理指令。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioProcessingResult {
    pub plain_text: String,
    pub segments: Vec<AudioSegment>,
    pub instructions: Vec<AudioInstruction>,
    /// 预计总时长
    pub total_duration: Duration,
}

impl AudioProcessingResult {
    /// 用于 TTS 的纯文本。
    #[must_use]
    pub fn text_for_tts(&self) -> &str {
        &self.plain_text
    }

    /// 所有停顿指令（包括自动停顿）。
    pub fn break_instructions(&self) -> impl Iterator<Item = &AudioInstruction> {
        self.instructions.iter().filter(|i| i.is_pause())
    }

    /// 所有音频插入指令。
    pub fn audio_instructions(&self) -> impl Iterator<Item = &AudioInstruction> {
        self.instructions
            .iter()
            .filter(|i| i.kind() == InstructionKind::Audio)
    }
}

/// 生成处理报告
impl fmt::Display for AudioProcessingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SSML 音频处理报告 ===")?;
        writeln!(f)?;
        writeln!(f, "纯文本: {}", self.plain_text)?;
        writeln!(f, "预计总时长: {:?}", self.total_duration)?;
        writeln!(f, "音频片段数: {}", self.segments.len())?;
        writeln!(f, "处理指令数: {}", self.instructions.len())?;

        if !self.segments.is_empty() {
            writeln!(f)?;
            writeln!(f, "=== 音频片段 ===")?;
            for (i, segment) in self.segments.iter().enumerate() {
                writeln!(
                    f,
                    "{}. [{:?} - {:?}] \"{}\"",
                    i + 1,
                    segment.start_time,
                    segment.end_time(),
                    segment.text
                )?;
                let props = &segment.properties;
                writeln!(
                    f,
                    "   属性: 声音={}, 语速={}, 音调={}, 音量={}",
                    props.voice, props.rate, props.pitch, props.volume
                )?;
            }
        }

        if !self.instructions.is_empty() {
            writeln!(f)?;
            writeln!(f, "=== 处理指令 ===")?;
            for (i, instruction) in self.instructions.iter().enumerate() {
                write!(
                    f,
                    "{}. 位置 {}: {}",
                    i + 1,
                    instruction.position(),
                    instruction.kind()
                )?;
                match instruction {
                    AudioInstruction::Break { duration, .. }
                    | AudioInstruction::AutoBreak { duration, .. } => {
                        write!(f, " (时长: {duration:?})")?;
                    }
                    AudioInstruction::Audio { src, .. } => write!(f, " (文件: {src})")?,
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
