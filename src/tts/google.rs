//! Speech through the public Google Translate TTS endpoint.
//!
//! The endpoint only accepts short inputs, so text is cut into chunks of at
//! most [`MAX_CHUNK_CHARS`] characters on punctuation or whitespace and the
//! returned MP3 segments are concatenated in order.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use super::Synthesizer;
use crate::error::AppError;

pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";
pub const MAX_CHUNK_CHARS: usize = 100;

lazy_static! {
    // A run of text followed by any punctuation that closes it.
    static ref SEGMENT_REGEX: Regex = Regex::new(r"[^.!?;:,…\n]+[.!?;:,…\n]*").unwrap();
}

pub struct GoogleTranslateTts {
    http: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateTts {
    pub fn new() -> Result<Self, AppError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("flashcards-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Service(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        lang: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, AppError> {
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", lang),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Service(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Service(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Service(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Synthesizer for GoogleTranslateTts {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, AppError> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(AppError::Service("No text to speak".into()));
        }

        tracing::debug!("Synthesizing {} chunk(s) in '{}'", chunks.len(), lang);

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let segment = self.fetch_chunk(chunk, lang, idx, chunks.len()).await?;
            audio.extend_from_slice(&segment);
        }

        Ok(audio)
    }
}

/// Splits `text` into speakable chunks of at most `max_chars` characters.
///
/// Sentence punctuation is preferred as a boundary, then whitespace, then a
/// hard cut. Chunks with nothing pronounceable in them are dropped.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for segment in SEGMENT_REGEX.find_iter(text) {
        for piece in fit_segment(segment.as_str().trim(), max_chars) {
            if current.is_empty() {
                current = piece;
            } else if current.chars().count() + 1 + piece.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(&piece);
            } else {
                chunks.push(std::mem::replace(&mut current, piece));
            }
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks.retain(|chunk| chunk.chars().any(char::is_alphanumeric));
    chunks
}

fn fit_segment(segment: &str, max_chars: usize) -> Vec<String> {
    if segment.chars().count() <= max_chars {
        return vec![segment.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();

    for word in segment.split_whitespace() {
        let words = hard_split(word, max_chars);
        for word in words {
            let len = word.chars().count();
            if current.is_empty() {
                current = word;
            } else if current.chars().count() + 1 + len <= max_chars {
                current.push(' ');
                current.push_str(&word);
            } else {
                pieces.push(std::mem::replace(&mut current, word));
            }
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

fn hard_split(word: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_chars.max(1))
        .map(|c| c.iter().collect())
        .collect()
}
