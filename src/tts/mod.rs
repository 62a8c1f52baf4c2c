pub mod google;
pub mod sweep;

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppError;

pub use google::GoogleTranslateTts;
pub use sweep::{sweep_older_than, SweepReport};

const FRAGMENT_MAX_CHARS: usize = 30;

/// A speech backend that turns text into MP3 bytes.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, AppError>;
}

/// Generates speech files into the audio directory and hands back their public URLs.
pub struct TtsService {
    synthesizer: Box<dyn Synthesizer>,
    audio_dir: PathBuf,
    base_url: String,
    lang: String,
    max_age: Duration,
}

impl TtsService {
    pub fn new(
        synthesizer: Box<dyn Synthesizer>,
        audio_dir: PathBuf,
        base_url: String,
        lang: String,
        max_age: Duration,
    ) -> Result<Self, AppError> {
        std::fs::create_dir_all(&audio_dir)?;

        Ok(Self {
            synthesizer,
            audio_dir,
            base_url,
            lang,
            max_age,
        })
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    /// Synthesizes `text`, stores the MP3 and returns the URL it is served from.
    pub async fn speak(&self, text: &str) -> Result<String, AppError> {
        let filename = audio_filename(text, chrono::Utc::now().timestamp_millis());

        let audio = self
            .synthesizer
            .synthesize(text, &self.lang)
            .await
            .map_err(|e| match e {
                AppError::Service(_) => e,
                other => AppError::Service(other.to_string()),
            })?;

        let path = self.audio_dir.join(&filename);
        std::fs::write(&path, &audio).map_err(|e| AppError::Service(e.to_string()))?;
        tracing::info!("Wrote {} bytes to {}", audio.len(), path.display());

        let report = sweep_older_than(&self.audio_dir, self.max_age);
        if report.deleted > 0 || !report.errors.is_empty() {
            tracing::debug!(
                "Audio sweep: {} deleted, {} kept, {} errors",
                report.deleted,
                report.kept,
                report.errors.len()
            );
        }

        Ok(format!("{}/audio/{}", self.base_url, filename))
    }
}

/// Filesystem-safe name for a generated clip: `<millis>_<fragment>.mp3`.
pub fn audio_filename(text: &str, timestamp_millis: i64) -> String {
    format!("{}_{}.mp3", timestamp_millis, safe_fragment(text))
}

/// Keeps alphanumerics, spaces, `-` and `_`, truncates to 30 characters,
/// trims, and turns the remaining spaces into underscores.
pub fn safe_fragment(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .take(FRAGMENT_MAX_CHARS)
        .collect();

    kept.trim().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSynth(Vec<u8>);

    #[async_trait]
    impl Synthesizer for FixedSynth {
        async fn synthesize(&self, _text: &str, _lang: &str) -> Result<Vec<u8>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSynth;

    #[async_trait]
    impl Synthesizer for BrokenSynth {
        async fn synthesize(&self, _text: &str, _lang: &str) -> Result<Vec<u8>, AppError> {
            Err(AppError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "network down",
            )))
        }
    }

    #[test]
    fn test_safe_fragment_strips_punctuation() {
        assert_eq!(safe_fragment("Bonjour, ça va ?"), "Bonjour_ça_va");
    }

    #[test]
    fn test_safe_fragment_truncates_before_trim() {
        let text = "Je voudrais acheter un billet pour Paris.";
        assert_eq!(safe_fragment(text), "Je_voudrais_acheter_un_billet");
    }

    #[test]
    fn test_safe_fragment_keeps_dash_and_underscore() {
        assert_eq!(safe_fragment("  aller-retour_ok!  "), "aller-retour_ok");
    }

    #[test]
    fn test_safe_fragment_empty_for_symbols() {
        assert_eq!(safe_fragment("?!..."), "");
    }

    #[test]
    fn test_audio_filename() {
        assert_eq!(audio_filename("Bonjour", 1700000000123), "1700000000123_Bonjour.mp3");
    }

    #[tokio::test]
    async fn test_speak_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let service = TtsService::new(
            Box::new(FixedSynth(b"ID3fake".to_vec())),
            dir.path().join("audio"),
            "http://localhost:5000".into(),
            "fr".into(),
            Duration::from_secs(3600),
        )
        .unwrap();

        let url = service.speak("Bonjour").await.unwrap();
        assert!(url.starts_with("http://localhost:5000/audio/"));
        assert!(url.ends_with("_Bonjour.mp3"));

        let filename = url.rsplit('/').next().unwrap();
        let written = std::fs::read(service.audio_dir().join(filename)).unwrap();
        assert_eq!(written, b"ID3fake");
    }

    #[tokio::test]
    async fn test_speak_sweeps_stale_clips() {
        let dir = tempfile::tempdir().unwrap();
        let service = TtsService::new(
            Box::new(FixedSynth(b"ID3fake".to_vec())),
            dir.path().to_path_buf(),
            "http://localhost".into(),
            "fr".into(),
            Duration::from_secs(3600),
        )
        .unwrap();

        let stale = dir.path().join("1000_old.mp3");
        std::fs::write(&stale, b"old").unwrap();
        std::fs::File::options()
            .write(true)
            .open(&stale)
            .unwrap()
            .set_modified(std::time::SystemTime::now() - Duration::from_secs(2 * 3600))
            .unwrap();

        let url = service.speak("Salut").await.unwrap();
        let filename = url.rsplit('/').next().unwrap();

        assert!(!stale.exists());
        assert!(dir.path().join(filename).exists());
    }

    #[tokio::test]
    async fn test_speak_maps_failures_to_service_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = TtsService::new(
            Box::new(BrokenSynth),
            dir.path().to_path_buf(),
            "http://localhost".into(),
            "fr".into(),
            Duration::from_secs(3600),
        )
        .unwrap();

        let err = service.speak("Bonjour").await.unwrap_err();
        match err {
            AppError::Service(msg) => assert!(msg.contains("network down")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
