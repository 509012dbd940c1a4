//! SSML document encoding.
//!
//! Produces the `speak > voice > prosody > text` document the synthesis
//! endpoint expects. All text and attribute values go through the XML writer,
//! which escapes them.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::config::Gender;
use crate::core::tts::base::SsmlError;

/// Namespace of the SSML root element.
pub const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";

/// SSML version announced on the root element.
pub const SSML_VERSION: &str = "1.0";

/// Builds SSML request bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SsmlRequestBuilder;

impl SsmlRequestBuilder {
    /// Encode one utterance.
    ///
    /// ```rust
    /// use cognitive_tts::core::tts::{Gender, SsmlRequestBuilder};
    ///
    /// let ssml = SsmlRequestBuilder::build("en-US", Gender::Female, "Voice", "Hi", -5).unwrap();
    /// assert!(ssml.contains(r#"pitch="-5Hz""#));
    /// ```
    pub fn build(
        locale: &str,
        gender: Gender,
        voice_wire_name: &str,
        text: &str,
        pitch_delta_hz: i32,
    ) -> Result<String, SsmlError> {
        for value in [locale, voice_wire_name, text] {
            check_xml_chars(value)?;
        }

        let pitch = format!("{pitch_delta_hz}Hz");
        let mut writer = Writer::new(Vec::with_capacity(256 + text.len()));

        let mut speak = BytesStart::new("speak");
        speak.push_attribute(("xmlns", SSML_NAMESPACE));
        speak.push_attribute(("version", SSML_VERSION));
        speak.push_attribute(("xml:lang", locale));
        write(&mut writer, Event::Start(speak))?;

        let mut voice = BytesStart::new("voice");
        voice.push_attribute(("xml:lang", locale));
        voice.push_attribute(("xml:gender", gender.as_str()));
        voice.push_attribute(("name", voice_wire_name));
        write(&mut writer, Event::Start(voice))?;

        let mut prosody = BytesStart::new("prosody");
        prosody.push_attribute(("pitch", pitch.as_str()));
        write(&mut writer, Event::Start(prosody))?;

        write(&mut writer, Event::Text(BytesText::new(text)))?;

        write(&mut writer, Event::End(BytesEnd::new("prosody")))?;
        write(&mut writer, Event::End(BytesEnd::new("voice")))?;
        write(&mut writer, Event::End(BytesEnd::new("speak")))?;

        String::from_utf8(writer.into_inner()).map_err(|e| SsmlError::Write(e.to_string()))
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SsmlError> {
    writer
        .write_event(event)
        .map_err(|e| SsmlError::Write(e.to_string()))
}

/// Reject characters outside the XML 1.0 `Char` production.
fn check_xml_chars(value: &str) -> Result<(), SsmlError> {
    match value.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(SsmlError::InvalidCharacter(c as u32)),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
