//! # SSML Builder: Programmatic Speech Synthesis Markup for Alexa Skills
//!
//! This crate builds SSML (Speech Synthesis Markup Language) fragments —
//! pacing, emphasis, pronunciation overrides, pauses, embedded audio — and
//! serializes them to correctly tagged, correctly escaped XML, instead of
//! having you hand-write markup text.
//!
//! The entry point is [`Speech`], an ordered builder of markup nodes. Each
//! call appends one node and returns the builder, so documents are assembled
//! as a chain; nesting happens either through the `_with` variants that take
//! a sub-builder, or by attaching a whole builder with [`Speech::attach`],
//! which serializes transparently with no wrapper tag.
//!
//! ## ⚠️ Important: an assembler, not a validator
//!
//! No document-level validation is performed. Attribute combinations the
//! speech service would reject (for example a date `format` on a non-date
//! `say-as`) are rendered exactly as given. The output is also not wrapped
//! in a `<speak>` root; the response envelope is the caller's concern.
//!
//! ## Examples
//!
//! ```rust
//! use std::time::Duration;
//!
//! use ssml_builder::{EmphasisLevel, PauseStrength, Speech};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let speech = Speech::new()
//!         .sentence("Hello there.")
//!         .pause(PauseStrength::Strong)
//!         .emphasis("Welcome back", EmphasisLevel::Moderate)
//!         .pause_for(Duration::from_millis(500))
//!         .text("to the show.");
//!
//!     let ssml = speech.to_ssml()?;
//!     assert_eq!(
//!         ssml,
//!         "<s>Hello there.</s>\
//!          <break strength=\"strong\"></break>\
//!          <emphasis level=\"moderate\">Welcome back</emphasis>\
//!          <break time=\"500ms\"></break>\
//!          to the show."
//!     );
//!     Ok(())
//! }
//! ```
//!
//! Builders compose: assemble fragments independently and attach them to a
//! parent without flattening your code structure.
//!
//! ```rust
//! use ssml_builder::Speech;
//!
//! let greeting = Speech::new().sentence("Good morning.");
//! let weather = Speech::new().sentence("It is sunny today.");
//!
//! let speech = Speech::new().attach(greeting).attach(weather);
//! assert_eq!(
//!     speech.to_ssml().unwrap(),
//!     "<s>Good morning.</s><s>It is sunny today.</s>"
//! );
//! ```

mod builder;
mod element;
mod error;
mod types;
mod writer;

pub use builder::Speech;
pub use element::Element;
pub use error::{EncodingError, FormatError};
pub use types::{
    Alphabet, AudioSource, DateFormat, EmphasisLevel, InterpretAs, PauseStrength, Pitch, Rate,
    VoiceLanguage, Volume, WordRole,
};
