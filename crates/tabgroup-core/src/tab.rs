//! Open tab snapshot model.
//!
//! [`OpenTab`] mirrors the browser's tab record closely enough that a
//! snapshot exported from the extension deserializes without a mapping
//! layer. [`Snapshot`] is the candidate pool every generator works from:
//! the tabs that carry a parseable web URL, resolved once per pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::classify::domain::host_matches;

/// Browser tab identifier.
pub type TabId = i64;

/// URL schemes owned by the browser itself. Tabs on these never count
/// towards a grouping.
const INTERNAL_SCHEMES: &[&str] = &[
    "about",
    "brave",
    "chrome",
    "chrome-extension",
    "chrome-search",
    "chrome-untrusted",
    "devtools",
    "edge",
    "moz-extension",
    "opera",
    "view-source",
    "vivaldi",
];

/// A tab as reported by the browser at the time of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTab {
    pub id: TabId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Last time the user interacted with the tab.
    #[serde(default, with = "epoch_millis")]
    pub last_accessed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub audible: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub active: bool,
}

impl OpenTab {
    pub fn new(id: TabId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: Some(url.into()),
            title: None,
            last_accessed: None,
            audible: false,
            pinned: false,
            active: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn accessed_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_accessed = Some(at);
        self
    }

    /// True when the tab has a URL that is not a browser-internal page.
    ///
    /// The URL does not have to parse: an unparseable URL still counts here
    /// and is dropped later when the candidate pool is built.
    pub fn is_valid(&self) -> bool {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => !is_internal_url(url),
            _ => false,
        }
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

fn is_internal_url(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let scheme = scheme.to_ascii_lowercase();
    INTERNAL_SCHEMES.contains(&scheme.as_str())
}

/// Extract the lowercased hostname of a URL.
///
/// Returns `None` for unparseable URLs and for URLs without a host
/// (`file:`, `data:`, ...).
pub fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_ascii_lowercase())
}

/// Drop a leading `www.` label.
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// A tab that made it into the candidate pool, with its URL already parsed.
#[derive(Debug, Clone)]
pub struct CandidateTab<'a> {
    pub tab: &'a OpenTab,
    /// Hostname exactly as parsed.
    pub host: String,
    /// Lowercased `url + " " + title`, the keyword search haystack.
    pub search_text: String,
}

impl<'a> CandidateTab<'a> {
    pub fn id(&self) -> TabId {
        self.tab.id
    }

    pub fn url(&self) -> &str {
        self.tab.url.as_deref().unwrap_or("")
    }

    pub fn bare_host(&self) -> &str {
        strip_www(&self.host)
    }

    /// Whether the tab was interacted with inside `window` before `now`.
    ///
    /// A timestamp slightly ahead of `now` (clock skew between the browser
    /// and the caller) counts as recent.
    pub fn accessed_within(&self, now: DateTime<Utc>, window: chrono::Duration) -> bool {
        match self.tab.last_accessed {
            Some(at) => now.signed_duration_since(at) <= window,
            None => false,
        }
    }
}

/// Candidate pool for one grouping pass.
#[derive(Debug, Clone, Default)]
pub struct Snapshot<'a> {
    tabs: Vec<CandidateTab<'a>>,
}

impl<'a> Snapshot<'a> {
    /// Build the pool from raw tabs.
    ///
    /// Keeps tabs that are valid, whose URL parses to a hostname, and whose
    /// host is not covered by `excluded_domains`. Input order is preserved.
    pub fn build(tabs: &'a [OpenTab], excluded_domains: &[String]) -> Self {
        let tabs = tabs
            .iter()
            .filter(|tab| tab.is_valid())
            .filter_map(|tab| {
                let url = tab.url.as_deref()?;
                let host = hostname(url)?;
                if excluded_domains
                    .iter()
                    .any(|domain| host_matches(&host, domain))
                {
                    return None;
                }
                let search_text = format!("{} {}", url, tab.title_or_empty()).to_lowercase();
                Some(CandidateTab {
                    tab,
                    host,
                    search_text,
                })
            })
            .collect();
        Self { tabs }
    }

    pub fn tabs(&self) -> &[CandidateTab<'a>] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// Browser timestamps are epoch milliseconds and may carry a fractional
/// part, so this accepts any JSON number and writes back whole milliseconds.
pub(crate) mod epoch_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_some(&at.timestamp_millis()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(raw
            .filter(|ms| ms.is_finite())
            .and_then(|ms| DateTime::from_timestamp_millis(ms as i64)))
    }
}
