//! Merge generator output into a ranked suggestion list.

use chrono::{DateTime, FixedOffset};
use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::generators::{
    DomainPatternGenerator, KeywordPatternGenerator, SuggestionGenerator, TimeContextGenerator,
    UnlistedDomainGenerator,
};
use crate::rules::RuleSet;
use crate::suggestion::WorkspaceSuggestion;
use crate::tab::Snapshot;

/// Default minimum confidence for a suggestion to be surfaced.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u8 = 70;

/// Runs a fixed, ordered list of generators and merges what they propose.
pub struct Aggregator<'r> {
    generators: Vec<Box<dyn SuggestionGenerator + 'r>>,
}

impl<'r> Aggregator<'r> {
    /// The four builtin heuristics in precedence order: domain, keyword,
    /// time context, unlisted domain.
    pub fn standard(rules: &'r RuleSet) -> Self {
        Self {
            generators: vec![
                Box::new(DomainPatternGenerator::new(rules)),
                Box::new(KeywordPatternGenerator::new(rules)),
                Box::new(TimeContextGenerator),
                Box::new(UnlistedDomainGenerator::new(rules)),
            ],
        }
    }

    pub fn with_generators(generators: Vec<Box<dyn SuggestionGenerator + 'r>>) -> Self {
        Self { generators }
    }

    /// Every surviving suggestion for `snapshot`, best first.
    pub fn aggregate(
        &self,
        snapshot: &Snapshot<'_>,
        now: DateTime<FixedOffset>,
        threshold: u8,
    ) -> Vec<WorkspaceSuggestion> {
        let candidates = self.generators.iter().flat_map(|generator| {
            let out = generator.generate(snapshot, now);
            tracing::debug!(generator = generator.name(), candidates = out.len(), "generator finished");
            out
        });
        merge_candidates(candidates, threshold)
    }
}

/// Deduplicate by name, drop anything under `threshold`, sort best first.
///
/// When two candidates share a name the higher confidence wins; on a tie the
/// one seen first stays. The final sort is stable, so equal confidences keep
/// encounter order.
pub fn merge_candidates(
    candidates: impl IntoIterator<Item = WorkspaceSuggestion>,
    threshold: u8,
) -> Vec<WorkspaceSuggestion> {
    let mut best: IndexMap<String, WorkspaceSuggestion> = IndexMap::new();
    for candidate in candidates {
        match best.entry(candidate.name.clone()) {
            Entry::Occupied(mut slot) => {
                if candidate.confidence > slot.get().confidence {
                    slot.insert(candidate);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
        }
    }

    let mut merged: Vec<WorkspaceSuggestion> = best
        .into_values()
        .filter(|s| s.confidence >= threshold)
        .collect();
    merged.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    merged
}
