use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use super::{Session, VisitDocument};

pub const RECENT_SESSIONS_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct VisitStats {
    pub total_visits: usize,
    pub unique_ips: usize,
    pub avg_session_seconds: f64,
    pub by_ip_prefix: IndexMap<String, usize>,
    pub recent_sessions: Vec<Session>,
}

impl VisitStats {
    pub fn compute(doc: &VisitDocument) -> Self {
        let unique_ips: HashSet<&str> = doc.visits.iter().map(|v| v.ip.as_str()).collect();

        let durations: Vec<f64> = doc.sessions.values().filter_map(|s| s.duration).collect();
        let avg_session_seconds = if durations.is_empty() {
            0.0
        } else {
            durations.iter().sum::<f64>() / durations.len() as f64
        };

        let mut by_ip_prefix = IndexMap::new();
        for visit in &doc.visits {
            *by_ip_prefix.entry(ip_prefix(&visit.ip).to_string()).or_insert(0) += 1;
        }

        // Stable sort: sessions that started at the same instant stay in insertion order.
        let mut recent_sessions: Vec<Session> = doc.sessions.values().cloned().collect();
        recent_sessions.sort_by(|a, b| b.start.total_cmp(&a.start));
        recent_sessions.truncate(RECENT_SESSIONS_LIMIT);

        Self {
            total_visits: doc.visits.len(),
            unique_ips: unique_ips.len(),
            avg_session_seconds,
            by_ip_prefix,
            recent_sessions,
        }
    }
}

/// First dotted octet of an address, or the whole string when there is no dot.
///
/// A coarse grouping only; it says nothing about geography.
pub fn ip_prefix(ip: &str) -> &str {
    ip.split_once('.').map(|(head, _)| head).unwrap_or(ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(visits: &[(&str, &str, f64)]) -> VisitDocument {
        let mut doc = VisitDocument::default();
        for (id, ip, start) in visits {
            doc.start_session(id.to_string(), ip.to_string(), String::new(), *start);
        }
        doc
    }

    #[test]
    fn test_empty_document() {
        let stats = VisitStats::compute(&VisitDocument::default());
        assert_eq!(stats.total_visits, 0);
        assert_eq!(stats.unique_ips, 0);
        assert_eq!(stats.avg_session_seconds, 0.0);
        assert!(stats.by_ip_prefix.is_empty());
        assert!(stats.recent_sessions.is_empty());
    }

    #[test]
    fn test_counts_and_prefixes() {
        let doc = doc_with(&[
            ("a", "10.0.0.1", 1.0),
            ("b", "10.0.0.2", 2.0),
            ("c", "10.0.0.1", 3.0),
            ("d", "192.168.1.5", 4.0),
            ("e", "::1", 5.0),
        ]);
        let stats = doc.stats();

        assert_eq!(stats.total_visits, 5);
        assert_eq!(stats.unique_ips, 4);
        assert_eq!(stats.by_ip_prefix["10"], 3);
        assert_eq!(stats.by_ip_prefix["192"], 1);
        assert_eq!(stats.by_ip_prefix["::1"], 1);
    }

    #[test]
    fn test_average_ignores_open_sessions() {
        let mut doc = doc_with(&[("a", "1.1.1.1", 10.0), ("b", "1.1.1.1", 20.0), ("c", "1.1.1.1", 30.0)]);
        doc.end_session("a", 14.0).unwrap();
        doc.end_session("b", 28.0).unwrap();

        assert_eq!(doc.stats().avg_session_seconds, 6.0);
    }

    #[test]
    fn test_recent_sessions_sorted_and_limited() {
        let entries: Vec<(String, f64)> = (0..25).map(|i| (format!("s{i:02}"), i as f64)).collect();
        let mut doc = VisitDocument::default();
        for (id, start) in &entries {
            doc.start_session(id.clone(), "8.8.8.8".into(), String::new(), *start);
        }

        let recent = doc.stats().recent_sessions;
        assert_eq!(recent.len(), RECENT_SESSIONS_LIMIT);
        assert_eq!(recent[0].session_id, "s24");
        assert_eq!(recent[19].session_id, "s05");
        assert!(recent.windows(2).all(|w| w[0].start >= w[1].start));
    }

    #[test]
    fn test_recent_sessions_ties_keep_insertion_order() {
        let doc = doc_with(&[("zeta", "1.1.1.1", 7.0), ("alpha", "1.1.1.1", 7.0), ("mid", "1.1.1.1", 3.0)]);
        let ids: Vec<String> = doc
            .stats()
            .recent_sessions
            .into_iter()
            .map(|s| s.session_id)
            .collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_ip_prefix() {
        assert_eq!(ip_prefix("172.16.0.1"), "172");
        assert_eq!(ip_prefix("localhost"), "localhost");
        assert_eq!(ip_prefix(""), "");
    }
}
