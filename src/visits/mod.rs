//! Visit analytics: sessions, the append-only visit log, and their JSON file.

pub mod stats;
pub mod store;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use stats::VisitStats;
pub use store::VisitStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub session_id: String,
    #[serde(default = "unknown_ip")]
    pub ip: String,
    #[serde(default)]
    pub user_agent: String,
    pub start: f64,
    pub end: Option<f64>,
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    #[serde(default)]
    pub session_id: String,
    #[serde(default = "unknown_ip")]
    pub ip: String,
    pub start: f64,
}

fn unknown_ip() -> String {
    "unknown".to_string()
}

/// The whole persisted document. Sessions keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitDocument {
    #[serde(default)]
    pub sessions: IndexMap<String, Session>,
    #[serde(default)]
    pub visits: Vec<VisitRecord>,
}

impl VisitDocument {
    /// Records a new session and its visit entry.
    pub fn start_session(&mut self, session_id: String, ip: String, user_agent: String, now: f64) {
        self.visits.push(VisitRecord {
            session_id: session_id.clone(),
            ip: ip.clone(),
            start: now,
        });
        self.sessions.insert(
            session_id.clone(),
            Session {
                session_id,
                ip,
                user_agent,
                start: now,
                end: None,
                duration: None,
            },
        );
    }

    /// Closes a session and returns its duration in seconds.
    ///
    /// Repeated calls are accepted and overwrite `end` and `duration`.
    pub fn end_session(&mut self, session_id: &str, now: f64) -> Result<f64, AppError> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or(AppError::UnknownSession)?;

        let duration = now - session.start;
        session.end = Some(now);
        session.duration = Some(duration);

        Ok(duration)
    }

    pub fn stats(&self) -> VisitStats {
        VisitStats::compute(self)
    }
}

/// Current wall-clock time as fractional epoch seconds.
pub fn now_seconds() -> f64 {
    let now = chrono::Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
}
