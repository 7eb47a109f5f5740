//! Group confidence scoring.
//!
//! A candidate group is scored from four additive terms, each worth a fixed
//! number of points. The sum is capped at 100.
//!
//! ## Domain groups
//!
//! | Term     | Points                                                     |
//! |----------|------------------------------------------------------------|
//! | coverage | round(matching / all × 40)                                 |
//! | size     | ≥8 → 30, ≥5 → 22, ≥3 → 15, else 0                          |
//! | recency  | 15 if ≥ 50% of the group was used in the last 10 minutes   |
//! | focus    | 15 if ≥ 80% of the group sits on one hostname              |
//!
//! ## Keyword groups
//!
//! | Term     | Points                                                     |
//! |----------|------------------------------------------------------------|
//! | coverage | round(matching / all × 35)                                 |
//! | size     | ≥6 → 25, ≥4 → 18, ≥2 → 12, else 0                          |
//! | density  | round(share of tabs with ≥ 2 distinct keyword hits × 20)   |
//! | recency  | 20 if ≥ 50% of the group was used in the last 10 minutes   |
//!
//! Ratios are evaluated in integer arithmetic, so rounding is exact
//! half-up and never sees a float.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::KeywordClassifier;
use crate::rules::CategoryRule;
use crate::tab::CandidateTab;

/// Trailing window for the recency term.
pub const RECENCY_WINDOW_MINUTES: i64 = 10;

/// Highest score any group can reach.
pub const MAX_CONFIDENCE: u8 = 100;

/// One named contribution to a group score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTerm {
    /// Term name
    pub name: String,
    /// Points awarded
    pub points: u8,
    /// Most points this term can award
    pub max_points: u8,
}

impl ScoreTerm {
    pub fn new(name: impl Into<String>, points: u8, max_points: u8) -> Self {
        Self {
            name: name.into(),
            points: points.min(max_points),
            max_points,
        }
    }
}

/// Scoring breakdown for one candidate group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub terms: Vec<ScoreTerm>,
    /// Sum of term points, capped at [`MAX_CONFIDENCE`]
    pub total: u8,
}

impl ScoreBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, term: ScoreTerm) {
        let sum = u16::from(self.total) + u16::from(term.points);
        self.total = sum.min(u16::from(MAX_CONFIDENCE)) as u8;
        self.terms.push(term);
    }

    /// Points for a term by name, 0 if absent.
    pub fn points(&self, name: &str) -> u8 {
        self.terms
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.points)
            .unwrap_or(0)
    }

    /// The term contributing the most points.
    pub fn top_term(&self) -> Option<&ScoreTerm> {
        self.terms.iter().max_by_key(|t| t.points)
    }
}

/// Breakdown for a domain-based group.
pub fn domain_group_breakdown(
    matching: &[&CandidateTab<'_>],
    total_tabs: usize,
    now: DateTime<Utc>,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::new();
    let n = matching.len();
    if n == 0 || total_tabs == 0 {
        return breakdown;
    }

    breakdown.add_term(ScoreTerm::new(
        "coverage",
        round_ratio(n, total_tabs, 40),
        40,
    ));
    breakdown.add_term(ScoreTerm::new("size", domain_size_points(n), 30));

    let recent = recent_count(matching, now);
    let recency = if recent * 2 >= n { 15 } else { 0 };
    breakdown.add_term(ScoreTerm::new("recency", recency, 15));

    let focused = dominant_host_count(matching);
    let focus = if focused * 5 >= n * 4 { 15 } else { 0 };
    breakdown.add_term(ScoreTerm::new("focus", focus, 15));

    breakdown
}

/// Confidence for a domain-based group.
pub fn score_domain_group(
    matching: &[&CandidateTab<'_>],
    total_tabs: usize,
    now: DateTime<Utc>,
) -> u8 {
    domain_group_breakdown(matching, total_tabs, now).total
}

/// Breakdown for a keyword-based group. `rule` supplies the keywords the
/// density term counts.
pub fn keyword_group_breakdown(
    matching: &[&CandidateTab<'_>],
    total_tabs: usize,
    rule: &CategoryRule,
    now: DateTime<Utc>,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::new();
    let n = matching.len();
    if n == 0 || total_tabs == 0 {
        return breakdown;
    }

    breakdown.add_term(ScoreTerm::new(
        "coverage",
        round_ratio(n, total_tabs, 35),
        35,
    ));
    breakdown.add_term(ScoreTerm::new("size", keyword_size_points(n), 25));

    let dense = matching
        .iter()
        .filter(|tab| KeywordClassifier::hits(rule, &tab.search_text).len() >= 2)
        .count();
    breakdown.add_term(ScoreTerm::new("density", round_ratio(dense, n, 20), 20));

    let recent = recent_count(matching, now);
    let recency = if recent * 2 >= n { 20 } else { 0 };
    breakdown.add_term(ScoreTerm::new("recency", recency, 20));

    breakdown
}

/// Confidence for a keyword-based group.
pub fn score_keyword_group(
    matching: &[&CandidateTab<'_>],
    total_tabs: usize,
    rule: &CategoryRule,
    now: DateTime<Utc>,
) -> u8 {
    keyword_group_breakdown(matching, total_tabs, rule, now).total
}

fn domain_size_points(n: usize) -> u8 {
    match n {
        n if n >= 8 => 30,
        n if n >= 5 => 22,
        n if n >= 3 => 15,
        _ => 0,
    }
}

fn keyword_size_points(n: usize) -> u8 {
    match n {
        n if n >= 6 => 25,
        n if n >= 4 => 18,
        n if n >= 2 => 12,
        _ => 0,
    }
}

/// round(part / whole × scale), half-up. `part` is clamped to `whole`.
fn round_ratio(part: usize, whole: usize, scale: u8) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    let scale = u64::from(scale);
    ((2 * part * scale + whole) / (2 * whole)) as u8
}

fn recent_count(matching: &[&CandidateTab<'_>], now: DateTime<Utc>) -> usize {
    let window = Duration::minutes(RECENCY_WINDOW_MINUTES);
    matching
        .iter()
        .filter(|tab| tab.accessed_within(now, window))
        .count()
}

/// Size of the largest same-hostname subset.
fn dominant_host_count(matching: &[&CandidateTab<'_>]) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tab in matching {
        *counts.entry(tab.bare_host()).or_default() += 1;
    }
    counts.into_values().max().unwrap_or(0)
}
