//! Cognitive Services region configuration.
//!
//! A subscription key is bound to the region its Speech resource was created
//! in, and both the token endpoint and the synthesis endpoint are derived
//! from that region.
//!
//! ```rust
//! use cognitive_tts::core::providers::azure::AzureRegion;
//!
//! let region: AzureRegion = "westeurope".parse().unwrap();
//! assert_eq!(
//!     region.token_endpoint(),
//!     "https://westeurope.api.cognitive.microsoft.com/sts/v1.0/issueToken"
//! );
//! ```

use std::fmt;

/// Regions hosting the Speech service.
///
/// See: <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/regions>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AzureRegion {
    /// East US (Virginia)
    EastUS,
    /// East US 2 (Virginia)
    EastUS2,
    /// West US (California)
    #[default]
    WestUS,
    /// West US 2 (Washington)
    WestUS2,
    /// Central US (Iowa)
    CentralUS,
    /// West Europe (Netherlands)
    WestEurope,
    /// North Europe (Ireland)
    NorthEurope,
    /// UK South (London)
    UKSouth,
    /// France Central (Paris)
    FranceCentral,
    /// Southeast Asia (Singapore)
    SoutheastAsia,
    /// Japan East (Tokyo)
    JapanEast,
    /// Australia East (Sydney)
    AustraliaEast,
    /// Canada Central (Toronto)
    CanadaCentral,
    /// Any region identifier not listed above.
    Custom(String),
}

impl AzureRegion {
    /// Region identifier as it appears in endpoint hostnames.
    pub fn as_str(&self) -> &str {
        match self {
            Self::EastUS => "eastus",
            Self::EastUS2 => "eastus2",
            Self::WestUS => "westus",
            Self::WestUS2 => "westus2",
            Self::CentralUS => "centralus",
            Self::WestEurope => "westeurope",
            Self::NorthEurope => "northeurope",
            Self::UKSouth => "uksouth",
            Self::FranceCentral => "francecentral",
            Self::SoutheastAsia => "southeastasia",
            Self::JapanEast => "japaneast",
            Self::AustraliaEast => "australiaeast",
            Self::CanadaCentral => "canadacentral",
            Self::Custom(region) => region.as_str(),
        }
    }

    /// Token issuing endpoint.
    ///
    /// Format: `https://<region>.api.cognitive.microsoft.com/sts/v1.0/issueToken`
    #[inline]
    pub fn token_endpoint(&self) -> String {
        format!(
            "https://{}.api.cognitive.microsoft.com/sts/v1.0/issueToken",
            self.as_str()
        )
    }

    /// Text-to-speech REST endpoint.
    ///
    /// Format: `https://<region>.tts.speech.microsoft.com/cognitiveservices/v1`
    #[inline]
    pub fn tts_rest_url(&self) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.as_str()
        )
    }
}

impl fmt::Display for AzureRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AzureRegion {
    type Err = std::convert::Infallible;

    /// Never fails: unknown identifiers become `Custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let region = match trimmed.to_lowercase().as_str() {
            "eastus" => Self::EastUS,
            "eastus2" => Self::EastUS2,
            "westus" => Self::WestUS,
            "westus2" => Self::WestUS2,
            "centralus" => Self::CentralUS,
            "westeurope" => Self::WestEurope,
            "northeurope" => Self::NorthEurope,
            "uksouth" => Self::UKSouth,
            "francecentral" => Self::FranceCentral,
            "southeastasia" => Self::SoutheastAsia,
            "japaneast" => Self::JapanEast,
            "australiaeast" => Self::AustraliaEast,
            "canadacentral" => Self::CanadaCentral,
            other => Self::Custom(other.to_string()),
        };
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region_is_westus() {
        let region = AzureRegion::default();
        assert_eq!(region, AzureRegion::WestUS);
        assert_eq!(region.as_str(), "westus");
    }

    #[test]
    fn test_token_endpoint() {
        assert_eq!(
            AzureRegion::WestUS.token_endpoint(),
            "https://westus.api.cognitive.microsoft.com/sts/v1.0/issueToken"
        );
        assert_eq!(
            AzureRegion::JapanEast.token_endpoint(),
            "https://japaneast.api.cognitive.microsoft.com/sts/v1.0/issueToken"
        );
    }

    #[test]
    fn test_tts_rest_url() {
        assert_eq!(
            AzureRegion::WestUS.tts_rest_url(),
            "https://westus.tts.speech.microsoft.com/cognitiveservices/v1"
        );
        assert_eq!(
            AzureRegion::Custom("swedencentral".to_string()).tts_rest_url(),
            "https://swedencentral.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }

    #[test]
    fn test_parse_known_and_custom() {
        let region: AzureRegion = "WestEurope".parse().unwrap();
        assert_eq!(region, AzureRegion::WestEurope);

        let region: AzureRegion = "  uksouth ".parse().unwrap();
        assert_eq!(region, AzureRegion::UKSouth);

        let custom: AzureRegion = "SwedenCentral".parse().unwrap();
        assert_eq!(custom, AzureRegion::Custom("swedencentral".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for region in [
            AzureRegion::EastUS,
            AzureRegion::WestUS2,
            AzureRegion::SoutheastAsia,
            AzureRegion::Custom("qatarcentral".to_string()),
        ] {
            let parsed: AzureRegion = region.to_string().parse().unwrap();
            assert_eq!(parsed, region);
        }
    }
}
