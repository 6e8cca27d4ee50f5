//! Vocabulary types used as SSML attribute values, plus the typed values
//! (URLs, durations, dates) that need a specific textual rendering.

use std::{fmt, str::FromStr, time::Duration};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};
use url::Url;

use crate::error::FormatError;

/// Strength of a `<break>` pause.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum PauseStrength {
    /// No pause. Can be used to remove a pause that would normally occur,
    /// such as after a period.
    #[strum(serialize = "none")]
    None,
    /// No pause (same as `None`).
    #[strum(serialize = "x-weak")]
    ExtraWeak,
    /// Treat adjacent words as if separated by a single comma (equivalent
    /// to `Medium`).
    #[strum(serialize = "weak")]
    Weak,
    /// Treat adjacent words as if separated by a single comma.
    #[strum(serialize = "medium")]
    Medium,
    /// A sentence break, equivalent to an `<s>` tag.
    #[strum(serialize = "strong")]
    Strong,
    /// A paragraph break, equivalent to a `<p>` tag.
    #[strum(serialize = "x-strong")]
    ExtraStrong,
}

impl PauseStrength {
    /// The literal attribute value for this strength.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ExtraWeak => "x-weak",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::ExtraStrong => "x-strong",
        }
    }
}

impl fmt::Display for PauseStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical role of a `<w>` word, used to disambiguate pronunciation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum WordRole {
    /// Interpret the word as a verb (present simple).
    #[strum(serialize = "amazon:VB")]
    Verb,
    /// Interpret the word as a past participle.
    #[strum(serialize = "amazon:VBD")]
    PastParticiple,
    /// Interpret the word as a noun.
    #[strum(serialize = "amazon:NN")]
    Noun,
    /// Use the non-default sense of the word.
    #[strum(serialize = "amazon:SENSE_1")]
    Sense1,
}

impl WordRole {
    /// The literal attribute value for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verb => "amazon:VB",
            Self::PastParticiple => "amazon:VBD",
            Self::Noun => "amazon:NN",
            Self::Sense1 => "amazon:SENSE_1",
        }
    }
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the text of a `<say-as>` element should be interpreted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum InterpretAs {
    /// Spell out each letter.
    #[strum(serialize = "characters")]
    Characters,
    /// Spell out each letter (same as `Characters`).
    #[strum(serialize = "spell-out")]
    SpellOut,
    /// Interpret the value as a cardinal number.
    #[strum(serialize = "cardinal")]
    Cardinal,
    /// Interpret the value as a cardinal number (same as `Cardinal`).
    #[strum(serialize = "number")]
    Number,
    /// Interpret the value as an ordinal number.
    #[strum(serialize = "ordinal")]
    Ordinal,
    /// Spell each digit separately.
    #[strum(serialize = "digits")]
    Digits,
    /// Interpret the value as a measurement.
    #[strum(serialize = "unit")]
    Unit,
    /// Interpret the value as a date, rendered under a [`DateFormat`].
    #[strum(serialize = "date")]
    Date,
    /// Interpret the value as a time expression.
    #[strum(serialize = "time")]
    Time,
    /// Interpret the value as a 7 or 10 digit phone number.
    #[strum(serialize = "telephone")]
    Telephone,
    /// Interpret the value as part of a street address.
    #[strum(serialize = "address")]
    Address,
    /// Interpret the value as an interjection.
    #[strum(serialize = "interjection")]
    Interjection,
    /// Bleep out the content.
    #[strum(serialize = "expletive")]
    Expletive,
}

impl InterpretAs {
    /// The literal attribute value for this interpretation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::SpellOut => "spell-out",
            Self::Cardinal => "cardinal",
            Self::Number => "number",
            Self::Ordinal => "ordinal",
            Self::Digits => "digits",
            Self::Unit => "unit",
            Self::Date => "date",
            Self::Time => "time",
            Self::Telephone => "telephone",
            Self::Address => "address",
            Self::Interjection => "interjection",
            Self::Expletive => "expletive",
        }
    }
}

impl fmt::Display for InterpretAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering token for date rendering: `y` is a 4-digit year, `m` a 2-digit
/// month and `d` a 2-digit day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum DateFormat {
    #[strum(serialize = "mdy")]
    MonthDayYear,
    #[strum(serialize = "dmy")]
    DayMonthYear,
    /// The fallback ordering when no format is specified.
    #[default]
    #[strum(serialize = "ymd")]
    YearMonthDay,
    #[strum(serialize = "md")]
    MonthDay,
    #[strum(serialize = "dm")]
    DayMonth,
    #[strum(serialize = "ym")]
    YearMonth,
    #[strum(serialize = "my")]
    MonthYear,
    #[strum(serialize = "d")]
    Day,
    #[strum(serialize = "m")]
    Month,
    #[strum(serialize = "y")]
    Year,
}

impl DateFormat {
    /// The literal attribute value for this format token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonthDayYear => "mdy",
            Self::DayMonthYear => "dmy",
            Self::YearMonthDay => "ymd",
            Self::MonthDay => "md",
            Self::DayMonth => "dm",
            Self::YearMonth => "ym",
            Self::MonthYear => "my",
            Self::Day => "d",
            Self::Month => "m",
            Self::Year => "y",
        }
    }

    /// Renders `date` under this token. Each `y`, `m` or `d` in the token
    /// is substituted; any other character is kept literally.
    #[must_use]
    pub fn format_date(self, date: NaiveDate) -> String {
        let mut out = String::new();
        for ch in self.as_str().chars() {
            match ch {
                'y' => out.push_str(&format!("{:04}", date.year())),
                'm' => out.push_str(&format!("{:02}", date.month())),
                'd' => out.push_str(&format!("{:02}", date.day())),
                other => out.push(other),
            }
        }
        out
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phonetic alphabet used for a `<phoneme>` pronunciation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Alphabet {
    /// International Phonetic Alphabet.
    #[strum(serialize = "ipa")]
    Ipa,
    /// Extended Speech Assessment Methods Phonetic Alphabet.
    #[strum(serialize = "x-sampa")]
    ExtendedSampa,
}

impl Alphabet {
    /// The literal attribute value for this alphabet.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ipa => "ipa",
            Self::ExtendedSampa => "x-sampa",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level of an `<emphasis>` element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum EmphasisLevel {
    /// Louder and slower speech.
    #[strum(serialize = "strong")]
    Strong,
    /// Louder and slower than normal, but less so than `Strong`. The
    /// service default when no level is given.
    #[strum(serialize = "moderate")]
    Moderate,
    /// Softer and faster speech.
    #[strum(serialize = "reduced")]
    Reduced,
}

impl EmphasisLevel {
    /// The literal attribute value for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Reduced => "reduced",
        }
    }
}

impl fmt::Display for EmphasisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale tag for a `<lang>` scope.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum VoiceLanguage {
    #[strum(serialize = "en-US")]
    EnUs,
    #[strum(serialize = "en-GB")]
    EnGb,
    #[strum(serialize = "en-IN")]
    EnIn,
    #[strum(serialize = "en-AU")]
    EnAu,
    #[strum(serialize = "en-CA")]
    EnCa,
    #[strum(serialize = "de-DE")]
    DeDe,
    #[strum(serialize = "es-ES")]
    EsEs,
    #[strum(serialize = "it-IT")]
    ItIt,
    #[strum(serialize = "ja-JP")]
    JaJp,
    #[strum(serialize = "fr-FR")]
    FrFr,
}

impl VoiceLanguage {
    /// The literal attribute value for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnIn => "en-IN",
            Self::EnAu => "en-AU",
            Self::EnCa => "en-CA",
            Self::DeDe => "de-DE",
            Self::EsEs => "es-ES",
            Self::ItIt => "it-IT",
            Self::JaJp => "ja-JP",
            Self::FrFr => "fr-FR",
        }
    }
}

impl fmt::Display for VoiceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loudness of a `<prosody>` scope. `Custom` carries a relative value such
/// as `"+4dB"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Volume {
    #[strum(serialize = "silent")]
    Silent,
    #[strum(serialize = "x-soft")]
    ExtraSoft,
    #[strum(serialize = "soft")]
    Soft,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "loud")]
    Loud,
    #[strum(serialize = "x-loud")]
    ExtraLoud,
    #[strum(default)]
    Custom(String),
}

impl Volume {
    /// The literal attribute value for this volume.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Silent => "silent",
            Self::ExtraSoft => "x-soft",
            Self::Soft => "soft",
            Self::Medium => "medium",
            Self::Loud => "loud",
            Self::ExtraLoud => "x-loud",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone of a `<prosody>` scope. `Custom` carries a relative value such as
/// `"-10%"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Pitch {
    #[strum(serialize = "x-low")]
    ExtraLow,
    #[strum(serialize = "low")]
    Low,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "high")]
    High,
    #[strum(serialize = "x-high")]
    ExtraHigh,
    #[strum(default)]
    Custom(String),
}

impl Pitch {
    /// The literal attribute value for this pitch.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ExtraLow => "x-low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::ExtraHigh => "x-high",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speaking rate of a `<prosody>` scope. `Custom` carries a percentage of
/// the normal rate such as `"150%"`; values below 20% are not supported by
/// the speech service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Rate {
    #[strum(serialize = "x-slow")]
    ExtraSlow,
    #[strum(serialize = "slow")]
    Slow,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "fast")]
    Fast,
    #[strum(serialize = "x-fast")]
    ExtraFast,
    #[strum(default)]
    Custom(String),
}

impl Rate {
    /// The literal attribute value for this rate.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ExtraSlow => "x-slow",
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
            Self::ExtraFast => "x-fast",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An absolute URL pointing at an audio resource for an `<audio>` element.
///
/// The speech service requires an HTTPS endpoint; a non-HTTPS scheme is
/// accepted here but logged as suspect when appended to a builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioSource(Url);

impl AudioSource {
    /// Parses an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if `input` is not a well-formed absolute URL
    /// (relative references are rejected).
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        Ok(Self(Url::parse(input)?))
    }

    /// The URL rendered back to text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The underlying parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

impl From<Url> for AudioSource {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl FromStr for AudioSource {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a pause duration as whole milliseconds with an `ms` suffix.
/// Sub-millisecond remainders truncate toward zero.
pub(crate) fn format_duration(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn format_duration_truncates_to_whole_milliseconds() {
        assert_eq!(format_duration(Duration::from_secs(2)), "2000ms");
        assert_eq!(format_duration(Duration::from_millis(1)), "1ms");
        assert_eq!(format_duration(Duration::from_micros(250)), "0ms");
        assert_eq!(format_duration(Duration::from_micros(1999)), "1ms");
        assert_eq!(format_duration(Duration::ZERO), "0ms");
    }

    #[test]
    fn date_format_orders_fields_per_token() {
        let date = NaiveDate::from_ymd_opt(2017, 9, 4).unwrap();
        assert_eq!(DateFormat::YearMonthDay.format_date(date), "20170904");
        assert_eq!(DateFormat::DayMonthYear.format_date(date), "04092017");
        assert_eq!(DateFormat::MonthDayYear.format_date(date), "09042017");
        assert_eq!(DateFormat::MonthDay.format_date(date), "0904");
        assert_eq!(DateFormat::Year.format_date(date), "2017");
    }

    #[test]
    fn date_format_defaults_to_year_month_day() {
        let date = NaiveDate::from_ymd_opt(2017, 9, 4).unwrap();
        assert_eq!(
            DateFormat::default().format_date(date),
            DateFormat::YearMonthDay.format_date(date)
        );
    }

    #[test]
    fn pause_strength_round_trips_through_strum() {
        for strength in PauseStrength::iter() {
            assert_eq!(strength.as_str().parse::<PauseStrength>().unwrap(), strength);
        }
        assert_eq!("X-STRONG".parse::<PauseStrength>().unwrap(), PauseStrength::ExtraStrong);
    }

    #[test]
    fn interpret_as_round_trips_through_strum() {
        for kind in InterpretAs::iter() {
            assert_eq!(kind.as_str().parse::<InterpretAs>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_rate_parses_as_custom() {
        assert_eq!("150%".parse::<Rate>().unwrap(), Rate::Custom("150%".into()));
        assert_eq!("fast".parse::<Rate>().unwrap(), Rate::Fast);
        assert_eq!(Rate::Custom("42%".into()).as_str(), "42%");
    }

    #[test]
    fn audio_source_round_trips() {
        let source = AudioSource::parse("https://example.com/a.mp3").unwrap();
        let reparsed = AudioSource::parse(source.as_str()).unwrap();
        assert_eq!(source, reparsed);
        assert_eq!(source.url().scheme(), "https");
    }

    #[test]
    fn malformed_audio_source_is_rejected() {
        assert!(matches!(
            AudioSource::parse("not a url"),
            Err(FormatError::InvalidUrl(_))
        ));
        // Relative references have no base to resolve against.
        assert!(AudioSource::parse("/sounds/a.mp3").is_err());
    }
}
