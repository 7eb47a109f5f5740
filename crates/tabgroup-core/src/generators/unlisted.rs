use chrono::{DateTime, FixedOffset, Utc};
use indexmap::IndexMap;

use super::SuggestionGenerator;
use crate::classify::DomainClassifier;
use crate::rules::RuleSet;
use crate::scoring::domain_group_breakdown;
use crate::suggestion::{SuggestionSource, WorkspaceSuggestion};
use crate::tab::{strip_www, CandidateTab, Snapshot};

/// Smallest same-host group the heuristic will propose.
pub const MIN_UNLISTED_GROUP: usize = 3;

/// Clusters tabs on hosts the domain table does not know about.
///
/// Hosts covered by the domain table are skipped so the same tabs are not
/// proposed twice under different names.
#[derive(Debug, Clone, Copy)]
pub struct UnlistedDomainGenerator<'r> {
    classifier: DomainClassifier<'r>,
}

impl<'r> UnlistedDomainGenerator<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            classifier: DomainClassifier::new(rules.domain_rules()),
        }
    }
}

impl SuggestionGenerator for UnlistedDomainGenerator<'_> {
    fn name(&self) -> &'static str {
        "unlisted_domain"
    }

    fn generate(
        &self,
        snapshot: &Snapshot<'_>,
        now: DateTime<FixedOffset>,
    ) -> Vec<WorkspaceSuggestion> {
        let now = now.with_timezone(&Utc);

        let mut by_host: IndexMap<&str, Vec<&CandidateTab<'_>>> = IndexMap::new();
        for tab in snapshot.tabs() {
            if self.classifier.covers(&tab.host) {
                continue;
            }
            by_host.entry(tab.host.as_str()).or_default().push(tab);
        }

        by_host
            .into_iter()
            .filter(|(_, members)| members.len() >= MIN_UNLISTED_GROUP)
            .map(|(host, members)| {
                let breakdown = domain_group_breakdown(&members, snapshot.len(), now);
                tracing::debug!(
                    generator = self.name(),
                    host,
                    tabs = members.len(),
                    confidence = breakdown.total,
                    ?breakdown,
                    "scored unlisted host"
                );
                let reason = format!("{} tabs open on {host}", members.len());
                WorkspaceSuggestion::new(
                    SuggestionSource::UnlistedDomain,
                    strip_www(host),
                    &members,
                    breakdown.total,
                    reason,
                    now,
                )
            })
            .collect()
    }
}
