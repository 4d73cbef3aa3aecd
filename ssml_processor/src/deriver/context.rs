//! # 指令推导 - 遍历上下文
//!
//! 深度优先遍历文档树，维护纯文本、字符位置、属性栈和时间累加器。

use std::time::Duration;

use ssml_core::{
    AudioInstruction, AudioProcessingResult, AudioProperties, AudioSegment, DeriverOptions,
    EmphasisLevel, Node, Prosody, Voice,
};

use super::timing::{
    PARAGRAPH_PAUSE, SENTENCE_PAUSE, break_duration, estimate_text_duration,
};

pub(super) struct ProcessingContext<'o> {
    options: &'o DeriverOptions,
    plain_text: String,
    /// 纯文本中的字符偏移，只有文本会推进它。
    text_position: usize,
    /// 栈底帧，遍历期间不会被弹出。
    base_properties: AudioProperties,
    property_stack: Vec<AudioProperties>,
    current_time: Duration,
    segments: Vec<AudioSegment>,
    instructions: Vec<AudioInstruction>,
}

impl<'o> ProcessingContext<'o> {
    pub(super) fn new(options: &'o DeriverOptions, base_properties: AudioProperties) -> Self {
        Self {
            options,
            plain_text: String::new(),
            text_position: 0,
            base_properties,
            property_stack: Vec::new(),
            current_time: Duration::ZERO,
            segments: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub(super) fn finish(self) -> AudioProcessingResult {
        AudioProcessingResult {
            plain_text: self.plain_text,
            segments: self.segments,
            instructions: self.instructions,
            total_duration: self.current_time,
        }
    }

    fn current_properties(&self) -> &AudioProperties {
        self.property_stack.last().unwrap_or(&self.base_properties)
    }

    pub(super) fn process_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.process_node(node);
        }
    }

    fn process_node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.process_text(text),
            Node::Break(pause) => {
                let duration = break_duration(pause);
                self.instructions.push(AudioInstruction::Break {
                    position: self.text_position,
                    duration,
                });
                self.advance_time(duration);
            }
            Node::Audio(audio) => {
                self.instructions.push(AudioInstruction::Audio {
                    position: self.text_position,
                    src: audio.src.clone(),
                });
                // 音频无法播放时仍可以合成备用内容
                self.process_nodes(&audio.content);
            }
            Node::Voice(voice) => self.with_frame(|frame| apply_voice(frame, voice), &voice.content),
            Node::Prosody(prosody) => {
                self.with_frame(|frame| apply_prosody(frame, prosody), &prosody.content);
            }
            Node::Emphasis(emphasis) => self.with_frame(
                |frame| frame.emphasis = emphasis.level.unwrap_or(EmphasisLevel::Moderate),
                &emphasis.content,
            ),
            Node::Paragraph(content) => {
                self.process_nodes(content);
                self.add_automatic_break(PARAGRAPH_PAUSE);
            }
            Node::Sentence(content) => {
                self.process_nodes(content);
                self.add_automatic_break(SENTENCE_PAUSE);
            }
            Node::Word(word) => self.process_nodes(&word.content),
            Node::Phoneme(phoneme) => self.process_nodes(&phoneme.content),
            // 只朗读替换文本，原内容不参与推导
            Node::Sub(sub) => self.process_text(&sub.alias),
        }
    }

    fn process_text(&mut self, text: &str) {
        let content = text.trim();
        if content.is_empty() {
            return;
        }

        let properties = self.current_properties().clone();
        let duration =
            estimate_text_duration(content, self.options.char_duration, &properties.rate);

        self.plain_text.push_str(content);
        self.text_position += content.chars().count();
        self.segments.push(AudioSegment {
            text: content.to_string(),
            start_time: self.current_time,
            duration,
            properties,
        });
        self.advance_time(duration);
    }

    /// 压入当前帧的副本并修改，处理完 `content` 后弹出。
    fn with_frame(&mut self, modify: impl FnOnce(&mut AudioProperties), content: &[Node]) {
        let mut frame = self.current_properties().clone();
        modify(&mut frame);

        self.property_stack.push(frame);
        self.process_nodes(content);
        self.property_stack.pop();
    }

    /// 同一位置上紧邻的自动停顿只保留第一个。
    fn add_automatic_break(&mut self, duration: Duration) {
        if let Some(AudioInstruction::AutoBreak { position, .. }) = self.instructions.last()
            && *position == self.text_position
        {
            return;
        }

        self.instructions.push(AudioInstruction::AutoBreak {
            position: self.text_position,
            duration,
        });
        self.advance_time(duration);
    }

    fn advance_time(&mut self, duration: Duration) {
        self.current_time = self.current_time.saturating_add(duration);
    }
}

fn override_field(target: &mut String, value: Option<&String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        target.clone_from(value);
    }
}

fn apply_voice(frame: &mut AudioProperties, voice: &Voice) {
    override_field(&mut frame.voice, voice.name.as_ref());
    override_field(&mut frame.gender, voice.gender.as_ref());
    override_field(&mut frame.language, voice.language.as_ref());
}

fn apply_prosody(frame: &mut AudioProperties, prosody: &Prosody) {
    override_field(&mut frame.rate, prosody.rate.as_ref());
    override_field(&mut frame.pitch, prosody.pitch.as_ref());
    override_field(&mut frame.volume, prosody.volume.as_ref());
}
