use super::ConfigError;

/// Parse a positive number of seconds.
pub(super) fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::Invalid {
            key: key.to_string(),
            message: format!("expected a number of seconds, got '{value}': {e}"),
        })
}

/// Parse a value through its `FromStr` impl, tagging failures with `key`.
pub(super) fn parse_with<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = String>,
{
    value.parse::<T>().map_err(|message| ConfigError::Invalid {
        key: key.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tts::AudioOutputFormat;

    #[test]
    fn test_parse_secs() {
        assert_eq!(parse_secs("K", " 540 ").unwrap(), 540);
        let err = parse_secs("K", "soon").unwrap_err();
        assert!(err.to_string().contains("K"));
    }

    #[test]
    fn test_parse_with() {
        let format: AudioOutputFormat = parse_with("F", "riff-16khz-16bit-mono-pcm").unwrap();
        assert_eq!(format, AudioOutputFormat::Riff16Khz16BitMonoPcm);
        assert!(parse_with::<AudioOutputFormat>("F", "ogg").is_err());
    }
}
