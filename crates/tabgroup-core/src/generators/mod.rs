//! Heuristic suggestion generators.
//!
//! Each generator looks at the candidate pool from one angle and proposes
//! zero or more workspaces. Generators do not know about the confidence
//! threshold; the aggregator filters their output.

mod domain;
mod keyword;
mod time_context;
mod unlisted;

pub use domain::DomainPatternGenerator;
pub use keyword::KeywordPatternGenerator;
pub use time_context::{TimeContext, TimeContextGenerator};
pub use unlisted::UnlistedDomainGenerator;

use chrono::{DateTime, FixedOffset};

use crate::suggestion::WorkspaceSuggestion;
use crate::tab::Snapshot;

/// A source of candidate workspace suggestions.
pub trait SuggestionGenerator {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Propose workspaces for `snapshot` as seen at `now`.
    ///
    /// `now` carries the caller's UTC offset; generators that care about
    /// the hour of day read it in that offset.
    fn generate(
        &self,
        snapshot: &Snapshot<'_>,
        now: DateTime<FixedOffset>,
    ) -> Vec<WorkspaceSuggestion>;
}
