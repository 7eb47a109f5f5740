//! Workspace suggestions produced by a grouping pass.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tab::{CandidateTab, TabId};

/// Namespace for suggestion ids. Ids are derived from content so that the
/// same pass over the same snapshot yields the same id.
const SUGGESTION_NAMESPACE: Uuid = Uuid::from_u128(0x6d1f_4a8e_93c2_4b7a_a5e0_2f19_c8d3_71b4);

/// Which heuristic produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    DomainPattern,
    KeywordPattern,
    TimeContext,
    UnlistedDomain,
}

impl SuggestionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionSource::DomainPattern => "domain_pattern",
            SuggestionSource::KeywordPattern => "keyword_pattern",
            SuggestionSource::TimeContext => "time_context",
            SuggestionSource::UnlistedDomain => "unlisted_domain",
        }
    }
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed workspace.
///
/// Serializes to the object handed to the notification and storage layers:
/// `{id, name, tabIds, tabUrls, confidence, reason, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSuggestion {
    pub id: Uuid,
    /// Category label or hostname
    pub name: String,
    pub tab_ids: Vec<TabId>,
    pub tab_urls: Vec<String>,
    /// Confidence (0-100)
    pub confidence: u8,
    pub reason: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Producing generator; not part of the wire object.
    #[serde(skip)]
    pub source: Option<SuggestionSource>,
}

impl WorkspaceSuggestion {
    pub fn new(
        source: SuggestionSource,
        name: impl Into<String>,
        tabs: &[&CandidateTab<'_>],
        confidence: u8,
        reason: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        let tab_ids: Vec<TabId> = tabs.iter().map(|t| t.id()).collect();
        let tab_urls = tabs.iter().map(|t| t.url().to_string()).collect();
        let id = suggestion_id(&name, &tab_ids, created_at);
        Self {
            id,
            name,
            tab_ids,
            tab_urls,
            confidence: confidence.min(100),
            reason: reason.into(),
            created_at,
            source: Some(source),
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tab_ids.len()
    }
}

fn suggestion_id(name: &str, tab_ids: &[TabId], created_at: DateTime<Utc>) -> Uuid {
    let ids = tab_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let key = format!("{name}|{ids}|{}", created_at.timestamp_millis());
    Uuid::new_v5(&SUGGESTION_NAMESPACE, key.as_bytes())
}
