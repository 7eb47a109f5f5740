use chrono::{DateTime, FixedOffset, Utc};

use super::SuggestionGenerator;
use crate::classify::DomainClassifier;
use crate::rules::RuleSet;
use crate::scoring::domain_group_breakdown;
use crate::suggestion::{SuggestionSource, WorkspaceSuggestion};
use crate::tab::{CandidateTab, Snapshot};

/// Smallest group the domain heuristic will propose.
pub const MIN_DOMAIN_GROUP: usize = 3;

/// One suggestion per domain-table category with enough open tabs.
#[derive(Debug, Clone, Copy)]
pub struct DomainPatternGenerator<'r> {
    classifier: DomainClassifier<'r>,
    rules: &'r RuleSet,
}

impl<'r> DomainPatternGenerator<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            classifier: DomainClassifier::new(rules.domain_rules()),
            rules,
        }
    }
}

impl SuggestionGenerator for DomainPatternGenerator<'_> {
    fn name(&self) -> &'static str {
        "domain_pattern"
    }

    fn generate(
        &self,
        snapshot: &Snapshot<'_>,
        now: DateTime<FixedOffset>,
    ) -> Vec<WorkspaceSuggestion> {
        let now = now.with_timezone(&Utc);
        let labels: Vec<Option<&str>> = snapshot
            .tabs()
            .iter()
            .map(|tab| self.classifier.classify_host(&tab.host))
            .collect();

        let mut out = Vec::new();
        for rule in self.rules.domain_rules() {
            let matching: Vec<&CandidateTab<'_>> = snapshot
                .tabs()
                .iter()
                .zip(&labels)
                .filter(|(_, label)| **label == Some(rule.label.as_str()))
                .map(|(tab, _)| tab)
                .collect();
            if matching.len() < MIN_DOMAIN_GROUP {
                continue;
            }

            let breakdown = domain_group_breakdown(&matching, snapshot.len(), now);
            tracing::debug!(
                generator = self.name(),
                category = %rule.label,
                tabs = matching.len(),
                confidence = breakdown.total,
                ?breakdown,
                "scored domain group"
            );

            let reason = format!("{} tabs from {} sites", matching.len(), rule.label);
            out.push(WorkspaceSuggestion::new(
                SuggestionSource::DomainPattern,
                rule.label.clone(),
                &matching,
                breakdown.total,
                reason,
                now,
            ));
        }
        out
    }
}
