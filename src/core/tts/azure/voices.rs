//! Static voice table.
//!
//! Each voice has a short identifier (`enUSJessaRUS`), the full service name
//! sent in the SSML `name` attribute, and the locale embedded in that name.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::Gender;

/// Voices offered by the synthesis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VoiceName {
    // English (Australia)
    EnAuCatherine,
    EnAuHayleyRus,
    // English (Canada)
    EnCaLinda,
    EnCaHeatherRus,
    // English (UK)
    EnGbSusanApollo,
    EnGbHazelRus,
    EnGbGeorgeApollo,
    // English (Ireland)
    EnIeSean,
    // English (India)
    EnInHeeraApollo,
    EnInPriyaRus,
    EnInRaviApollo,
    // English (US)
    EnUsZiraRus,
    #[default]
    EnUsJessaRus,
    EnUsBenjaminRus,
    // German
    DeAtMichael,
    DeChKarsten,
    DeDeHedda,
    DeDeHeddaRus,
    DeDeStefanApollo,
    // Spanish
    EsEsHelenaRus,
    EsEsLauraApollo,
    EsEsPabloApollo,
    EsMxHildaRus,
    EsMxRaulApollo,
    // French
    FrCaCaroline,
    FrCaHarmonieRus,
    FrChGuillaume,
    FrFrJulieApollo,
    FrFrHortenseRus,
}

/// One row of the voice table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceEntry {
    pub voice: VoiceName,
    /// Short identifier, e.g. `enUSJessaRUS`
    pub id: &'static str,
    /// BCP-47 locale, e.g. `en-US`
    pub locale: &'static str,
    /// Full service name used in the SSML `voice` element
    pub wire_name: &'static str,
    pub gender: Gender,
}

macro_rules! voice {
    ($voice:ident, $id:literal, $locale:literal, $name:literal, $gender:ident) => {
        VoiceEntry {
            voice: VoiceName::$voice,
            id: $id,
            locale: $locale,
            wire_name: concat!(
                "Microsoft Server Speech Text to Speech Voice (",
                $locale,
                ", ",
                $name,
                ")"
            ),
            gender: Gender::$gender,
        }
    };
}

const DEFAULT_ENTRY: VoiceEntry = voice!(EnUsJessaRus, "enUSJessaRUS", "en-US", "JessaRUS", Female);

static VOICES: [VoiceEntry; 29] = [
    voice!(EnAuCatherine, "enAUCatherine", "en-AU", "Catherine", Female),
    voice!(EnAuHayleyRus, "enAUHayleyRUS", "en-AU", "HayleyRUS", Female),
    voice!(EnCaLinda, "enCALinda", "en-CA", "Linda", Female),
    voice!(EnCaHeatherRus, "enCAHeatherRUS", "en-CA", "HeatherRUS", Female),
    voice!(EnGbSusanApollo, "enGBSusanApollo", "en-GB", "Susan, Apollo", Female),
    voice!(EnGbHazelRus, "enGBHazelRUS", "en-GB", "HazelRUS", Female),
    voice!(EnGbGeorgeApollo, "enGBGeorgeApollo", "en-GB", "George, Apollo", Male),
    voice!(EnIeSean, "enIESean", "en-IE", "Sean", Male),
    voice!(EnInHeeraApollo, "enINHeeraApollo", "en-IN", "Heera, Apollo", Female),
    voice!(EnInPriyaRus, "enINPriyaRUS", "en-IN", "PriyaRUS", Female),
    voice!(EnInRaviApollo, "enINRaviApollo", "en-IN", "Ravi, Apollo", Male),
    voice!(EnUsZiraRus, "enUSZiraRUS", "en-US", "ZiraRUS", Female),
    DEFAULT_ENTRY,
    voice!(EnUsBenjaminRus, "enUSBenjaminRUS", "en-US", "BenjaminRUS", Male),
    voice!(DeAtMichael, "deATMichael", "de-AT", "Michael", Male),
    voice!(DeChKarsten, "deCHKarsten", "de-CH", "Karsten", Male),
    voice!(DeDeHedda, "deDEHedda", "de-DE", "Hedda", Female),
    voice!(DeDeHeddaRus, "deDEHeddaRUS", "de-DE", "HeddaRUS", Female),
    voice!(DeDeStefanApollo, "deDEStefanApollo", "de-DE", "Stefan, Apollo", Male),
    voice!(EsEsHelenaRus, "esESHelenaRUS", "es-ES", "HelenaRUS", Female),
    voice!(EsEsLauraApollo, "esESLauraApollo", "es-ES", "Laura, Apollo", Female),
    voice!(EsEsPabloApollo, "esESPabloApollo", "es-ES", "Pablo, Apollo", Male),
    voice!(EsMxHildaRus, "esMXHildaRUS", "es-MX", "HildaRUS", Female),
    voice!(EsMxRaulApollo, "esMXRaulApollo", "es-MX", "Raul, Apollo", Male),
    voice!(FrCaCaroline, "frCACaroline", "fr-CA", "Caroline", Female),
    voice!(FrCaHarmonieRus, "frCAHarmonieRUS", "fr-CA", "HarmonieRUS", Female),
    voice!(FrChGuillaume, "frCHGuillaume", "fr-CH", "Guillaume", Male),
    voice!(FrFrJulieApollo, "frFRJulieApollo", "fr-FR", "Julie, Apollo", Female),
    voice!(FrFrHortenseRus, "frFRHortenseRUS", "fr-FR", "HortenseRUS", Female),
];

/// Lookup table over the voice list, built once per process.
#[derive(Debug)]
pub struct VoiceCatalog {
    entries: &'static [VoiceEntry],
    by_voice: HashMap<VoiceName, usize>,
    by_wire_name: HashMap<&'static str, usize>,
    by_id: HashMap<String, usize>,
}

impl VoiceCatalog {
    /// The process-wide catalog.
    pub fn standard() -> &'static VoiceCatalog {
        static CATALOG: OnceLock<VoiceCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self::from_entries(&VOICES))
    }

    fn from_entries(entries: &'static [VoiceEntry]) -> Self {
        let mut by_voice = HashMap::with_capacity(entries.len());
        let mut by_wire_name = HashMap::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            by_voice.insert(entry.voice, index);
            by_wire_name.insert(entry.wire_name, index);
            by_id.insert(entry.id.to_lowercase(), index);
        }
        Self {
            entries,
            by_voice,
            by_wire_name,
            by_id,
        }
    }

    pub fn entries(&self) -> &[VoiceEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, voice: VoiceName) -> Option<&VoiceEntry> {
        self.by_voice.get(&voice).map(|&index| &self.entries[index])
    }

    /// Entry for `voice`, falling back to the default voice.
    pub fn resolve(&self, voice: VoiceName) -> &VoiceEntry {
        self.entry(voice).unwrap_or(&DEFAULT_ENTRY)
    }

    pub fn wire_name(&self, voice: VoiceName) -> &'static str {
        self.resolve(voice).wire_name
    }

    pub fn locale(&self, voice: VoiceName) -> &'static str {
        self.resolve(voice).locale
    }

    pub fn from_wire_name(&self, wire_name: &str) -> Option<VoiceName> {
        self.by_wire_name
            .get(wire_name)
            .map(|&index| self.entries[index].voice)
    }

    /// Find a voice by short identifier (case-insensitive) or full wire name.
    pub fn find(&self, name: &str) -> Option<VoiceName> {
        let name = name.trim();
        self.by_id
            .get(&name.to_lowercase())
            .map(|&index| self.entries[index].voice)
            .or_else(|| self.from_wire_name(name))
    }

    /// Voices whose locale matches, ignoring case.
    pub fn voices_for_locale(&self, locale: &str) -> Vec<&VoiceEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.locale.eq_ignore_ascii_case(locale.trim()))
            .collect()
    }
}

impl VoiceName {
    /// Short identifier, e.g. `enUSJessaRUS`.
    pub fn id(&self) -> &'static str {
        VoiceCatalog::standard().resolve(*self).id
    }

    pub fn wire_name(&self) -> &'static str {
        VoiceCatalog::standard().wire_name(*self)
    }

    pub fn locale(&self) -> &'static str {
        VoiceCatalog::standard().locale(*self)
    }
}

impl std::fmt::Display for VoiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.id())
    }
}

impl std::str::FromStr for VoiceName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoiceCatalog::standard()
            .find(s)
            .ok_or_else(|| format!("Unknown voice: {s}"))
    }
}
