//! # SSML Processor: Parser, Serializer and Instruction Deriver for Speech Markup
//!
//! This crate turns SSML (Speech Synthesis Markup Language) text into the typed document
//! tree defined in `ssml_core`, validates it against a caller-supplied [`ValidationConfig`](ssml_core::ValidationConfig),
//! writes it back to markup, and derives the plain text, timed segments and pause/audio
//! instructions that a speech-synthesis backend consumes.
//!
//! The primary entry points are:
//! - [`parse_ssml`]: Converts an SSML string into a `ParseResult` (document plus warnings).
//! - [`generate_ssml`] / [`serialize`]: Writes a `Document` back to SSML.
//! - [`derive`]: Walks a `Document` and produces an `AudioProcessingResult`.
//! - [`process_ssml`]: Parses and derives in one step.
//!
//! ## ⚠️ Important: Not a General-Purpose XML Parser
//!
//! Only the SSML element set (`speak`, `voice`, `prosody`, `break`, `emphasis`, `audio`,
//! `p`, `s`, `w`, `phoneme`, `sub`) is modelled. Namespaces are ignored, unknown elements are
//! either skipped or rejected depending on the configuration, and whitespace-only text is
//! dropped.
//!
//! ## Examples
//!
//! ```rust
//! use ssml_processor::{derive, parse_ssml, serialize};
//! use ssml_core::{AudioInstruction, ValidationConfig};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Parse some SSML
//!     let ssml = r#"<speak version="1.0" xml:lang="en-US">Hello<break time="1s"/>World</speak>"#;
//!     let parsed = parse_ssml(ssml, &ValidationConfig::default())?;
//!     assert!(parsed.warnings.is_empty());
//!     assert_eq!(parsed.document.content.len(), 3);
//!
//!     // 2. Derive synthesis instructions
//!     let result = derive(&parsed.document);
//!     assert_eq!(result.plain_text, "HelloWorld");
//!     assert_eq!(result.segments.len(), 2);
//!     assert_eq!(
//!         result.instructions,
//!         vec![AudioInstruction::Break { position: 5, duration: Duration::from_secs(1) }]
//!     );
//!     println!("{result}");
//!
//!     // 3. Write the document back out
//!     let regenerated = serialize(&parsed.document, false)?;
//!     assert_eq!(parse_ssml(&regenerated, &ValidationConfig::default())?.document, parsed.document);
//!
//!     Ok(())
//! }
//! ```

pub mod deriver;
pub mod generator;
pub mod parser;
mod pipeline;
mod utils;

pub use deriver::{SsmlDeriver, derive};
pub use generator::{generate_ssml, serialize};
pub use parser::{SsmlParser, parse_ssml};
pub use pipeline::process_ssml;
