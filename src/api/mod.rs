pub mod handlers;
pub mod routes;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{CatalogPage, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::visits::VisitStats;

/// Raw `/flashcards` query string. Every field is optional and the numeric
/// ones are parsed leniently, falling back to their defaults.
#[derive(Debug, Default)]
pub struct FlashcardsParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub q: Option<String>,
    pub category: Option<String>,
}

impl FlashcardsParams {
    /// Builds the params from decoded query pairs. When a key repeats, the
    /// first value wins and the rest are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "page_size" => &mut params.page_size,
                "q" => &mut params.q,
                "category" => &mut params.category,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn page(&self) -> usize {
        lenient_usize(self.page.as_deref(), DEFAULT_PAGE).max(1)
    }

    pub fn page_size(&self) -> usize {
        lenient_usize(self.page_size.as_deref(), DEFAULT_PAGE_SIZE).max(1)
    }
}

/// Parses a signed decimal integer. Negative values become 0 and values too
/// large for `usize` saturate; anything that is not an integer yields `default`.
fn lenient_usize(raw: Option<&str>, default: usize) -> usize {
    let Some(value) = raw.map(str::trim) else {
        return default;
    };

    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return default;
    }

    if negative {
        0
    } else {
        digits.parse::<usize>().unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TtsRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VisitStartRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub user_agent: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub referrer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VisitEndRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub session_id: Option<String>,
}

/// Accepts any JSON value and keeps it only when it is a string.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: CatalogPage,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TtsResponse {
    pub success: bool,
    pub file: String,
}

#[derive(Debug, Serialize)]
pub struct VisitStartResponse {
    pub success: bool,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct VisitEndResponse {
    pub success: bool,
    pub duration: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub stats: VisitStats,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
