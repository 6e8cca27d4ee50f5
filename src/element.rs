//! The SSML node model: one [`Element`] variant per markup construct, plus
//! the per-variant tag/attribute table that drives the encoding pass.

use std::{borrow::Cow, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    builder::Speech,
    types::{
        Alphabet, AudioSource, DateFormat, EmphasisLevel, InterpretAs, PauseStrength, Pitch, Rate,
        VoiceLanguage, Volume, WordRole, format_duration,
    },
};

/// A single node of an SSML document tree.
///
/// Fields are public and unvalidated: the builder is a document assembler,
/// not a grammar checker, so any attribute combination is accepted and
/// rendered as given (e.g. a `format` on a [`Element::SayAs`] whose kind is
/// not `date`). Absent optional attributes are omitted from the output
/// entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    /// Raw character data, emitted without any enclosing tag.
    Text(String),
    /// A `<p>` paragraph wrapping a sub-tree.
    Paragraph(Speech),
    /// An `<s>` sentence wrapping a sub-tree.
    Sentence(Speech),
    /// A `<break>` pause, sized by strength and/or an explicit duration.
    /// The speech service caps durations at 10 seconds.
    Break {
        strength: Option<PauseStrength>,
        time: Option<Duration>,
    },
    /// An `<audio>` element referencing a pre-recorded clip by URL.
    Audio { src: AudioSource },
    /// A `<w>` word with an optional grammatical role.
    Word {
        role: Option<WordRole>,
        text: String,
    },
    /// A `<say-as>` interpretation hint. `format` is only meaningful to the
    /// speech service when `interpret_as` is `date`.
    SayAs {
        interpret_as: Option<InterpretAs>,
        format: Option<DateFormat>,
        text: String,
    },
    /// A `<phoneme>` pronunciation override.
    Phoneme {
        alphabet: Option<Alphabet>,
        ph: Option<String>,
        text: String,
    },
    /// A `<prosody>` scope adjusting volume, pitch and/or rate.
    Prosody {
        volume: Option<Volume>,
        pitch: Option<Pitch>,
        rate: Option<Rate>,
        child: Speech,
    },
    /// An `<emphasis>` scope.
    Emphasis {
        level: EmphasisLevel,
        child: Speech,
    },
    /// A `<sub>` substitution: `alias` is spoken in place of the text.
    Sub { alias: String, text: String },
    /// A `<lang>` scope switching the spoken locale.
    Lang {
        lang: VoiceLanguage,
        child: Speech,
    },
    /// A whole sub-builder attached as one node; serializes as its
    /// children's output with no enclosing tag.
    Fragment(Speech),
}

/// Content slot of a tagged element.
pub(crate) enum Content<'a> {
    /// No content; emits a matched empty open/close pair.
    Empty,
    /// Character data.
    CharData(&'a str),
    /// A nested sub-tree.
    Children(&'a Speech),
}

/// How a node serializes. `Text` and `Fragment` override the generic tagged
/// path; every other variant is driven by its tag name and attribute table.
pub(crate) enum Rendering<'a> {
    CharData(&'a str),
    Inline(&'a Speech),
    Tag {
        name: &'static str,
        attributes: Vec<(&'static str, Cow<'a, str>)>,
        content: Content<'a>,
    },
}

impl Element {
    /// Node kind, used to identify the element in encoding errors.
    #[must_use]
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Paragraph(_) => "p",
            Self::Sentence(_) => "s",
            Self::Break { .. } => "break",
            Self::Audio { .. } => "audio",
            Self::Word { .. } => "w",
            Self::SayAs { .. } => "say-as",
            Self::Phoneme { .. } => "phoneme",
            Self::Prosody { .. } => "prosody",
            Self::Emphasis { .. } => "emphasis",
            Self::Sub { .. } => "sub",
            Self::Lang { .. } => "lang",
            Self::Fragment(_) => "speech",
        }
    }

    /// Classifies this node for the encoding pass, rendering every present
    /// attribute to its textual value in the fixed per-variant order.
    pub(crate) fn rendering(&self) -> Rendering<'_> {
        match self {
            Self::Text(text) => Rendering::CharData(text),
            Self::Fragment(speech) => Rendering::Inline(speech),
            Self::Paragraph(child) => Rendering::Tag {
                name: "p",
                attributes: Vec::new(),
                content: Content::Children(child),
            },
            Self::Sentence(child) => Rendering::Tag {
                name: "s",
                attributes: Vec::new(),
                content: Content::Children(child),
            },
            Self::Break { strength, time } => {
                let mut attributes = Vec::new();
                if let Some(strength) = strength {
                    attributes.push(("strength", Cow::Borrowed(strength.as_str())));
                }
                if let Some(time) = time {
                    attributes.push(("time", Cow::Owned(format_duration(*time))));
                }
                Rendering::Tag {
                    name: "break",
                    attributes,
                    content: Content::Empty,
                }
            }
            Self::Audio { src } => Rendering::Tag {
                name: "audio",
                attributes: vec![("src", Cow::Borrowed(src.as_str()))],
                content: Content::Empty,
            },
            Self::Word { role, text } => {
                let mut attributes = Vec::new();
                if let Some(role) = role {
                    attributes.push(("role", Cow::Borrowed(role.as_str())));
                }
                Rendering::Tag {
                    name: "w",
                    attributes,
                    content: Content::CharData(text),
                }
            }
            Self::SayAs {
                interpret_as,
                format,
                text,
            } => {
                let mut attributes = Vec::new();
                if let Some(interpret_as) = interpret_as {
                    attributes.push(("interpret-as", Cow::Borrowed(interpret_as.as_str())));
                }
                if let Some(format) = format {
                    attributes.push(("format", Cow::Borrowed(format.as_str())));
                }
                Rendering::Tag {
                    name: "say-as",
                    attributes,
                    content: Content::CharData(text),
                }
            }
            Self::Phoneme { alphabet, ph, text } => {
                let mut attributes = Vec::new();
                if let Some(alphabet) = alphabet {
                    attributes.push(("alphabet", Cow::Borrowed(alphabet.as_str())));
                }
                if let Some(ph) = ph {
                    attributes.push(("ph", Cow::Borrowed(ph.as_str())));
                }
                Rendering::Tag {
                    name: "phoneme",
                    attributes,
                    content: Content::CharData(text),
                }
            }
            Self::Prosody {
                volume,
                pitch,
                rate,
                child,
            } => {
                let mut attributes = Vec::new();
                if let Some(volume) = volume {
                    attributes.push(("volume", Cow::Borrowed(volume.as_str())));
                }
                if let Some(pitch) = pitch {
                    attributes.push(("pitch", Cow::Borrowed(pitch.as_str())));
                }
                if let Some(rate) = rate {
                    attributes.push(("rate", Cow::Borrowed(rate.as_str())));
                }
                Rendering::Tag {
                    name: "prosody",
                    attributes,
                    content: Content::Children(child),
                }
            }
            Self::Emphasis { level, child } => Rendering::Tag {
                name: "emphasis",
                attributes: vec![("level", Cow::Borrowed(level.as_str()))],
                content: Content::Children(child),
            },
            Self::Sub { alias, text } => Rendering::Tag {
                name: "sub",
                attributes: vec![("alias", Cow::Borrowed(alias.as_str()))],
                content: Content::CharData(text),
            },
            Self::Lang { lang, child } => Rendering::Tag {
                name: "lang",
                attributes: vec![("xml:lang", Cow::Borrowed(lang.as_str()))],
                content: Content::Children(child),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_attributes(element: &Element) -> Vec<(&'static str, String)> {
        match element.rendering() {
            Rendering::Tag { attributes, .. } => attributes
                .into_iter()
                .map(|(key, value)| (key, value.into_owned()))
                .collect(),
            _ => panic!("expected a tagged rendering"),
        }
    }

    #[test]
    fn absent_optional_attributes_are_omitted() {
        let element = Element::Break {
            strength: None,
            time: None,
        };
        assert!(tag_attributes(&element).is_empty());

        let element = Element::SayAs {
            interpret_as: None,
            format: None,
            text: "12345".into(),
        };
        assert!(tag_attributes(&element).is_empty());
    }

    #[test]
    fn break_attributes_keep_table_order() {
        let element = Element::Break {
            strength: Some(PauseStrength::Medium),
            time: Some(Duration::from_millis(1500)),
        };
        assert_eq!(
            tag_attributes(&element),
            vec![
                ("strength", "medium".to_string()),
                ("time", "1500ms".to_string())
            ]
        );
    }

    #[test]
    fn prosody_attributes_keep_table_order() {
        let element = Element::Prosody {
            volume: Some(Volume::Loud),
            pitch: Some(Pitch::Low),
            rate: Some(Rate::Custom("150%".into())),
            child: Speech::new(),
        };
        assert_eq!(
            tag_attributes(&element),
            vec![
                ("volume", "loud".to_string()),
                ("pitch", "low".to_string()),
                ("rate", "150%".to_string())
            ]
        );
    }

    #[test]
    fn required_attributes_are_always_present() {
        let element = Element::Sub {
            alias: String::new(),
            text: "Na".into(),
        };
        assert_eq!(tag_attributes(&element), vec![("alias", String::new())]);
    }
}
