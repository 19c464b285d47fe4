use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_FILE: &str = "data/vocab.json";
pub const DEFAULT_LOG_FILE: &str = "vocab_debug.log";
pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_SPEECH_RATE: f32 = 0.9;
pub const DEFAULT_QUIZ_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub program: String,
    pub locale: String,
    /// Multiplier on the engine's normal speaking rate
    pub rate: f32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    /// Fetched only when the local file is unavailable
    pub data_url: Option<String>,
    pub speech: SpeechConfig,
    pub quiz_delay: Duration,
    pub image_viewer: Option<String>,
    pub log_file: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_file = non_empty("VOCAB_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let speech = SpeechConfig {
            enabled: non_empty("VOCAB_TTS_ENABLED")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            program: non_empty("VOCAB_TTS_PROGRAM").unwrap_or_else(default_speech_program),
            locale: non_empty("VOCAB_TTS_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            rate: non_empty("VOCAB_TTS_RATE")
                .and_then(|v| v.parse::<f32>().ok())
                .filter(|r| *r > 0.0)
                .unwrap_or(DEFAULT_SPEECH_RATE),
        };

        let quiz_delay_ms = non_empty("VOCAB_QUIZ_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_QUIZ_DELAY_MS);

        Config {
            data_file,
            data_url: non_empty("VOCAB_DATA_URL"),
            speech,
            quiz_delay: Duration::from_millis(quiz_delay_ms),
            image_viewer: non_empty("VOCAB_IMAGE_VIEWER"),
            log_file: non_empty("VOCAB_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            log_filter: non_empty("VOCAB_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_speech_program() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak-ng".to_string()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert!(config.data_url.is_none());
        assert_eq!(config.quiz_delay, Duration::from_millis(1500));
        assert_eq!(config.speech.locale, "en-US");
        assert!((config.speech.rate - 0.9).abs() < f32::EPSILON);
        assert!(config.speech.enabled);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("VOCAB_DATA_FILE", "/tmp/signs.json"),
            ("VOCAB_DATA_URL", "http://localhost:8000/data.json"),
            ("VOCAB_QUIZ_DELAY_MS", "250"),
            ("VOCAB_TTS_PROGRAM", "espeak"),
            ("VOCAB_TTS_ENABLED", "off"),
        ]);
        assert_eq!(config.data_file, PathBuf::from("/tmp/signs.json"));
        assert_eq!(
            config.data_url.as_deref(),
            Some("http://localhost:8000/data.json")
        );
        assert_eq!(config.quiz_delay, Duration::from_millis(250));
        assert_eq!(config.speech.program, "espeak");
        assert!(!config.speech.enabled);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("VOCAB_QUIZ_DELAY_MS", "soon"),
            ("VOCAB_TTS_RATE", "-2"),
            ("VOCAB_DATA_URL", "   "),
        ]);
        assert_eq!(config.quiz_delay, Duration::from_millis(DEFAULT_QUIZ_DELAY_MS));
        assert!((config.speech.rate - DEFAULT_SPEECH_RATE).abs() < f32::EPSILON);
        assert!(config.data_url.is_none());
    }
}
