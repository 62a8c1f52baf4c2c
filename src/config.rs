use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://my-api-n352.onrender.com";

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Public origin used to build the audio links returned by `/tts`.
    pub base_url: String,
    pub audio_dir: PathBuf,
    pub visits_file: PathBuf,
    pub audio_max_age: Duration,
    pub tts_lang: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            base_url: DEFAULT_BASE_URL.to_string(),
            audio_dir: PathBuf::from("audio_files"),
            visits_file: PathBuf::from("visits.json"),
            audio_max_age: Duration::from_secs(60 * 60),
            tts_lang: "fr".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            base_url,
            audio_dir: lookup("AUDIO_DIR").map(PathBuf::from).unwrap_or(defaults.audio_dir),
            visits_file: lookup("VISITS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.visits_file),
            audio_max_age: Duration::from_secs(parse_or(
                &lookup,
                "AUDIO_MAX_AGE_SECS",
                defaults.audio_max_age.as_secs(),
            )),
            tts_lang: lookup("TTS_LANG").unwrap_or(defaults.tts_lang),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value '{}', using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 5000);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.audio_max_age, Duration::from_secs(3600));
        assert_eq!(config.tts_lang, "fr");
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("BASE_URL", "http://127.0.0.1:8080/"),
            ("AUDIO_MAX_AGE_SECS", "60"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.audio_max_age, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_number_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 5000);
    }
}
