//! The ordered [`Speech`] container: fluent construction of SSML trees and
//! the public serialization entry points.

use std::{io, io::Cursor, time::Duration};

use chrono::NaiveDate;
use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    element::Element,
    error::EncodingError,
    types::{
        Alphabet, AudioSource, DateFormat, EmphasisLevel, InterpretAs, PauseStrength, Pitch, Rate,
        VoiceLanguage, Volume, WordRole,
    },
    writer::write_elements,
};

/// Longest pause the speech service will honor for a single `<break>`.
const MAX_BREAK_DURATION: Duration = Duration::from_secs(10);

/// An ordered, appendable sequence of SSML nodes.
///
/// A `Speech` doubles as the top-level document and as the child sub-tree of
/// any wrapper element; [`Speech::attach`] nests one builder inside another
/// without introducing a wrapper tag. Construction methods consume and
/// return the builder so calls chain:
///
/// ```
/// use ssml_builder::{PauseStrength, Speech};
///
/// let ssml = Speech::new()
///     .text("Hello.")
///     .pause(PauseStrength::Strong)
///     .sentence("Nice to meet you.")
///     .to_ssml()?;
/// assert_eq!(
///     ssml,
///     "Hello.<break strength=\"strong\"></break><s>Nice to meet you.</s>"
/// );
/// # Ok::<(), ssml_builder::EncodingError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speech {
    elements: Vec<Element>,
}

impl Speech {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// The nodes appended so far, in order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends an already-constructed node. The escape hatch for attribute
    /// combinations the convenience methods do not cover.
    #[must_use]
    pub fn push(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Appends raw text.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.push(Element::Text(text.into()))
    }

    /// Appends a single space.
    #[must_use]
    pub fn space(self) -> Self {
        self.text(" ")
    }

    /// Appends a newline.
    #[must_use]
    pub fn newline(self) -> Self {
        self.text("\n")
    }

    /// Appends a `<p>` paragraph around plain text.
    #[must_use]
    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.paragraph_with(Self::new().text(text))
    }

    /// Appends a `<p>` paragraph around an arbitrary sub-tree.
    #[must_use]
    pub fn paragraph_with(self, child: Self) -> Self {
        self.push(Element::Paragraph(child))
    }

    /// Appends an `<s>` sentence around plain text.
    #[must_use]
    pub fn sentence(self, text: impl Into<String>) -> Self {
        self.sentence_with(Self::new().text(text))
    }

    /// Appends an `<s>` sentence around an arbitrary sub-tree.
    #[must_use]
    pub fn sentence_with(self, child: Self) -> Self {
        self.push(Element::Sentence(child))
    }

    /// Appends a `<break>` pause of the given strength.
    #[must_use]
    pub fn pause(self, strength: PauseStrength) -> Self {
        self.push(Element::Break {
            strength: Some(strength),
            time: None,
        })
    }

    /// Appends a `<break>` pause of an explicit duration. Durations above
    /// 10 seconds are emitted as given but will be capped by the speech
    /// service.
    #[must_use]
    pub fn pause_for(self, duration: Duration) -> Self {
        if duration > MAX_BREAK_DURATION {
            warn!(
                ?duration,
                "break duration exceeds the 10 second maximum honored by the speech service"
            );
        }
        self.push(Element::Break {
            strength: None,
            time: Some(duration),
        })
    }

    /// Appends an `<audio>` element playing a pre-recorded clip.
    #[must_use]
    pub fn audio(self, src: AudioSource) -> Self {
        if src.url().scheme() != "https" {
            warn!(
                src = src.as_str(),
                "audio sources must be served over HTTPS to be playable"
            );
        }
        self.push(Element::Audio { src })
    }

    /// Appends a `<w>` word with an explicit grammatical role.
    #[must_use]
    pub fn word(self, text: impl Into<String>, role: WordRole) -> Self {
        self.push(Element::Word {
            role: Some(role),
            text: text.into(),
        })
    }

    /// Appends a `<say-as>` hint controlling how the text is read out.
    #[must_use]
    pub fn say_as(self, text: impl Into<String>, interpret_as: InterpretAs) -> Self {
        self.push(Element::SayAs {
            interpret_as: Some(interpret_as),
            format: None,
            text: text.into(),
        })
    }

    /// Appends a `<say-as interpret-as="date">` holding `date` rendered
    /// under `format`.
    #[must_use]
    pub fn date(self, date: NaiveDate, format: DateFormat) -> Self {
        self.push(Element::SayAs {
            interpret_as: Some(InterpretAs::Date),
            format: Some(format),
            text: format.format_date(date),
        })
    }

    /// Appends a `<phoneme>` overriding the pronunciation of the text.
    #[must_use]
    pub fn phoneme(
        self,
        text: impl Into<String>,
        alphabet: Alphabet,
        pronunciation: impl Into<String>,
    ) -> Self {
        self.push(Element::Phoneme {
            alphabet: Some(alphabet),
            ph: Some(pronunciation.into()),
            text: text.into(),
        })
    }

    /// Appends a `<prosody>` scope setting volume, pitch and rate around
    /// plain text.
    #[must_use]
    pub fn prosody(
        self,
        text: impl Into<String>,
        volume: Volume,
        pitch: Pitch,
        rate: Rate,
    ) -> Self {
        self.prosody_with(Some(volume), Some(pitch), Some(rate), Self::new().text(text))
    }

    /// Appends a `<prosody>` scope around an arbitrary sub-tree, with any
    /// subset of the three attributes.
    #[must_use]
    pub fn prosody_with(
        self,
        volume: Option<Volume>,
        pitch: Option<Pitch>,
        rate: Option<Rate>,
        child: Self,
    ) -> Self {
        self.push(Element::Prosody {
            volume,
            pitch,
            rate,
            child,
        })
    }

    /// Appends a `<prosody>` scope adjusting only the volume.
    #[must_use]
    pub fn volume(self, text: impl Into<String>, volume: Volume) -> Self {
        self.prosody_with(Some(volume), None, None, Self::new().text(text))
    }

    /// Appends a `<prosody>` scope adjusting only the pitch.
    #[must_use]
    pub fn pitch(self, text: impl Into<String>, pitch: Pitch) -> Self {
        self.prosody_with(None, Some(pitch), None, Self::new().text(text))
    }

    /// Appends a `<prosody>` scope adjusting only the speaking rate.
    #[must_use]
    pub fn rate(self, text: impl Into<String>, rate: Rate) -> Self {
        self.prosody_with(None, None, Some(rate), Self::new().text(text))
    }

    /// Appends an `<emphasis>` scope around plain text.
    #[must_use]
    pub fn emphasis(self, text: impl Into<String>, level: EmphasisLevel) -> Self {
        self.emphasis_with(level, Self::new().text(text))
    }

    /// Appends an `<emphasis>` scope around an arbitrary sub-tree.
    #[must_use]
    pub fn emphasis_with(self, level: EmphasisLevel, child: Self) -> Self {
        self.push(Element::Emphasis { level, child })
    }

    /// Appends a `<lang>` scope speaking plain text in another locale.
    #[must_use]
    pub fn lang(self, text: impl Into<String>, lang: VoiceLanguage) -> Self {
        self.lang_with(lang, Self::new().text(text))
    }

    /// Appends a `<lang>` scope around an arbitrary sub-tree.
    #[must_use]
    pub fn lang_with(self, lang: VoiceLanguage, child: Self) -> Self {
        self.push(Element::Lang { lang, child })
    }

    /// Appends a `<sub>` element: `alias` is spoken in place of the text.
    #[must_use]
    pub fn sub(self, text: impl Into<String>, alias: impl Into<String>) -> Self {
        self.push(Element::Sub {
            alias: alias.into(),
            text: text.into(),
        })
    }

    /// Appends a whole sub-builder as one node. It serializes as the
    /// concatenation of its children with no enclosing tag, so attaching is
    /// equivalent to appending its nodes in place.
    #[must_use]
    pub fn attach(self, child: Self) -> Self {
        self.push(Element::Fragment(child))
    }

    /// Serializes the tree to an SSML string.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if a write fails or the output is not
    /// valid UTF-8.
    pub fn to_ssml(&self) -> Result<String, EncodingError> {
        let mut buffer = Vec::new();
        self.write_to(Cursor::new(&mut buffer))?;
        String::from_utf8(buffer).map_err(EncodingError::from)
    }

    /// Serializes the tree into a caller-supplied sink.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if the sink rejects a write; the error
    /// names the element that was mid-emission.
    pub fn write_to<W: io::Write>(&self, sink: W) -> Result<(), EncodingError> {
        let mut writer = Writer::new(sink);
        write_elements(&mut writer, &self.elements)
    }
}

impl From<Vec<Element>> for Speech {
    fn from(elements: Vec<Element>) -> Self {
        Self { elements }
    }
}

impl FromIterator<Element> for Speech {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_follows_append_order() {
        let ssml = Speech::new()
            .sentence("one")
            .text("two")
            .pause(PauseStrength::Weak)
            .paragraph("three")
            .to_ssml()
            .unwrap();
        assert_eq!(
            ssml,
            "<s>one</s>two<break strength=\"weak\"></break><p>three</p>"
        );
    }

    #[test]
    fn attached_builder_flattens_transparently() {
        let a = Speech::new().text("Hello.").pause(PauseStrength::Medium);
        let b = Speech::new().sentence("Goodbye.");

        let attached = Speech::new().attach(a.clone()).attach(b.clone());
        let expected = format!("{}{}", a.to_ssml().unwrap(), b.to_ssml().unwrap());
        assert_eq!(attached.to_ssml().unwrap(), expected);
    }

    #[test]
    fn deeply_nested_attachment_serializes_without_wrapper_tags() {
        let inner = Speech::new().text("deep");
        let middle = Speech::new().attach(inner);
        let outer = Speech::new().emphasis_with(
            EmphasisLevel::Moderate,
            Speech::new().attach(middle),
        );
        assert_eq!(
            outer.to_ssml().unwrap(),
            "<emphasis level=\"moderate\">deep</emphasis>"
        );
    }

    #[test]
    fn pause_renders_duration_in_milliseconds() {
        let ssml = Speech::new()
            .pause_for(Duration::from_millis(2000))
            .to_ssml()
            .unwrap();
        assert_eq!(ssml, "<break time=\"2000ms\"></break>");

        let ssml = Speech::new()
            .pause_for(Duration::from_micros(250))
            .to_ssml()
            .unwrap();
        assert_eq!(ssml, "<break time=\"0ms\"></break>");
    }

    #[test]
    fn audio_renders_source_url() {
        let src = AudioSource::parse("https://example.com/a.mp3").unwrap();
        let ssml = Speech::new().audio(src).to_ssml().unwrap();
        assert_eq!(ssml, "<audio src=\"https://example.com/a.mp3\"></audio>");
    }

    #[test]
    fn word_and_say_as_render_their_attributes() {
        let ssml = Speech::new()
            .word("read", WordRole::PastParticiple)
            .say_as("12345", InterpretAs::Digits)
            .to_ssml()
            .unwrap();
        assert_eq!(
            ssml,
            "<w role=\"amazon:VBD\">read</w><say-as interpret-as=\"digits\">12345</say-as>"
        );
    }

    #[test]
    fn date_renders_token_and_formatted_character_data() {
        let date = NaiveDate::from_ymd_opt(2017, 9, 4).unwrap();
        let ssml = Speech::new()
            .date(date, DateFormat::DayMonthYear)
            .to_ssml()
            .unwrap();
        assert_eq!(
            ssml,
            "<say-as interpret-as=\"date\" format=\"dmy\">04092017</say-as>"
        );
    }

    #[test]
    fn phoneme_renders_alphabet_and_pronunciation() {
        let ssml = Speech::new()
            .phoneme("pecan", Alphabet::Ipa, "pɪˈkɑːn")
            .to_ssml()
            .unwrap();
        assert_eq!(
            ssml,
            "<phoneme alphabet=\"ipa\" ph=\"pɪˈkɑːn\">pecan</phoneme>"
        );
    }

    #[test]
    fn prosody_conveniences_set_one_attribute_each() {
        let ssml = Speech::new()
            .volume("loudly", Volume::ExtraLoud)
            .pitch("deeply", Pitch::ExtraLow)
            .rate("quickly", Rate::Custom("150%".into()))
            .to_ssml()
            .unwrap();
        assert_eq!(
            ssml,
            "<prosody volume=\"x-loud\">loudly</prosody>\
             <prosody pitch=\"x-low\">deeply</prosody>\
             <prosody rate=\"150%\">quickly</prosody>"
        );
    }

    #[test]
    fn full_prosody_renders_all_three_attributes() {
        let ssml = Speech::new()
            .prosody("hello", Volume::Soft, Pitch::High, Rate::Slow)
            .to_ssml()
            .unwrap();
        assert_eq!(
            ssml,
            "<prosody volume=\"soft\" pitch=\"high\" rate=\"slow\">hello</prosody>"
        );
    }

    #[test]
    fn sub_and_lang_render_required_attributes() {
        let ssml = Speech::new()
            .sub("Na", "sodium")
            .lang("Guten Tag", VoiceLanguage::DeDe)
            .to_ssml()
            .unwrap();
        assert_eq!(
            ssml,
            "<sub alias=\"sodium\">Na</sub><lang xml:lang=\"de-DE\">Guten Tag</lang>"
        );
    }

    #[test]
    fn space_and_newline_emit_character_data() {
        let ssml = Speech::new()
            .text("one")
            .space()
            .text("two")
            .newline()
            .text("three")
            .to_ssml()
            .unwrap();
        assert_eq!(ssml, "one two\nthree");
    }

    #[test]
    fn directly_constructed_elements_are_rendered_as_given() {
        // No cross-attribute validation: a format on a non-date say-as is
        // passed through untouched.
        let ssml = Speech::new()
            .push(Element::SayAs {
                interpret_as: Some(InterpretAs::Cardinal),
                format: Some(DateFormat::MonthDayYear),
                text: "5".into(),
            })
            .to_ssml()
            .unwrap();
        assert_eq!(
            ssml,
            "<say-as interpret-as=\"cardinal\" format=\"mdy\">5</say-as>"
        );
    }

    #[test]
    fn serialization_does_not_consume_the_builder() {
        let speech = Speech::new().text("again");
        assert_eq!(speech.to_ssml().unwrap(), "again");
        assert_eq!(speech.to_ssml().unwrap(), "again");
        assert!(!speech.is_empty());
        assert_eq!(speech.elements().len(), 1);
    }
}
