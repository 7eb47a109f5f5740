use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::SuggestionGenerator;
use crate::suggestion::{SuggestionSource, WorkspaceSuggestion};
use crate::tab::{CandidateTab, Snapshot};

/// Smallest pool the time heuristic will group.
pub const MIN_TIME_CONTEXT_TABS: usize = 3;

/// Base confidence. This heuristic never looks at tab content, so it tops
/// out at `BASE + MAX_BONUS`, below what the content heuristics can reach.
const TIME_CONTEXT_BASE: u8 = 70;
const TIME_CONTEXT_MAX_BONUS: usize = 10;

/// Coarse part of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeContext {
    Leisure,
    Work,
    Personal,
    NightReading,
}

impl TimeContext {
    /// Weekend → Leisure; weekdays 9–17 → Work, 17–23 → Personal, otherwise
    /// Night Reading. Read in `now`'s own offset.
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        let weekday = now.weekday().num_days_from_sunday();
        if weekday == 0 || weekday == 6 {
            return TimeContext::Leisure;
        }
        match now.hour() {
            9..=16 => TimeContext::Work,
            17..=22 => TimeContext::Personal,
            _ => TimeContext::NightReading,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeContext::Leisure => "Leisure",
            TimeContext::Work => "Work",
            TimeContext::Personal => "Personal",
            TimeContext::NightReading => "Night Reading",
        }
    }
}

/// Groups the whole pool under the current time-of-week label.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeContextGenerator;

impl TimeContextGenerator {
    pub fn confidence(tab_count: usize) -> u8 {
        let bonus = tab_count
            .saturating_sub(MIN_TIME_CONTEXT_TABS)
            .min(TIME_CONTEXT_MAX_BONUS);
        TIME_CONTEXT_BASE + bonus as u8
    }
}

impl SuggestionGenerator for TimeContextGenerator {
    fn name(&self) -> &'static str {
        "time_context"
    }

    fn generate(
        &self,
        snapshot: &Snapshot<'_>,
        now: DateTime<FixedOffset>,
    ) -> Vec<WorkspaceSuggestion> {
        let n = snapshot.len();
        if n < MIN_TIME_CONTEXT_TABS {
            return Vec::new();
        }

        let context = TimeContext::at(now);
        let confidence = Self::confidence(n);
        tracing::debug!(
            generator = self.name(),
            context = context.label(),
            tabs = n,
            confidence,
            "time context"
        );

        let members: Vec<&CandidateTab<'_>> = snapshot.tabs().iter().collect();
        let reason = format!("{n} tabs open during {} time", context.label());
        vec![WorkspaceSuggestion::new(
            SuggestionSource::TimeContext,
            context.label(),
            &members,
            confidence,
            reason,
            now.with_timezone(&Utc),
        )]
    }
}
