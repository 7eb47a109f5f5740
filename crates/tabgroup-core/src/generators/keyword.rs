use chrono::{DateTime, FixedOffset, Utc};

use super::SuggestionGenerator;
use crate::classify::KeywordClassifier;
use crate::rules::RuleSet;
use crate::scoring::keyword_group_breakdown;
use crate::suggestion::{SuggestionSource, WorkspaceSuggestion};
use crate::tab::{CandidateTab, Snapshot};

/// Smallest group the keyword heuristic will propose.
pub const MIN_KEYWORD_GROUP: usize = 2;

/// Keywords quoted in a reason string.
const REASON_KEYWORDS: usize = 3;

/// One suggestion per keyword-table category mentioned by enough tabs.
#[derive(Debug, Clone, Copy)]
pub struct KeywordPatternGenerator<'r> {
    classifier: KeywordClassifier<'r>,
    rules: &'r RuleSet,
}

impl<'r> KeywordPatternGenerator<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            classifier: KeywordClassifier::new(rules.keyword_rules()),
            rules,
        }
    }
}

impl SuggestionGenerator for KeywordPatternGenerator<'_> {
    fn name(&self) -> &'static str {
        "keyword_pattern"
    }

    fn generate(
        &self,
        snapshot: &Snapshot<'_>,
        now: DateTime<FixedOffset>,
    ) -> Vec<WorkspaceSuggestion> {
        let now = now.with_timezone(&Utc);
        let categories: Vec<Vec<&str>> = snapshot
            .tabs()
            .iter()
            .map(|tab| self.classifier.classify_text(&tab.search_text))
            .collect();

        let mut out = Vec::new();
        for rule in self.rules.keyword_rules() {
            let matching: Vec<&CandidateTab<'_>> = snapshot
                .tabs()
                .iter()
                .zip(&categories)
                .filter(|(_, cats)| cats.contains(&rule.label.as_str()))
                .map(|(tab, _)| tab)
                .collect();
            if matching.len() < MIN_KEYWORD_GROUP {
                continue;
            }

            let breakdown = keyword_group_breakdown(&matching, snapshot.len(), rule, now);
            tracing::debug!(
                generator = self.name(),
                category = %rule.label,
                tabs = matching.len(),
                confidence = breakdown.total,
                ?breakdown,
                "scored keyword group"
            );

            let mut keywords: Vec<&str> = Vec::new();
            for tab in &matching {
                for hit in KeywordClassifier::hits(rule, &tab.search_text) {
                    if keywords.len() < REASON_KEYWORDS && !keywords.contains(&hit) {
                        keywords.push(hit);
                    }
                }
            }
            let reason = format!(
                "{} tabs mention {} topics ({})",
                matching.len(),
                rule.label,
                keywords.join(", ")
            );

            out.push(WorkspaceSuggestion::new(
                SuggestionSource::KeywordPattern,
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
