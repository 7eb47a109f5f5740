//! Grouping orchestrator.
//!
//! [`GroupingEngine::evaluate`] is the entry point the tab-event layer calls
//! after each debounced batch of tab changes. It returns at most one
//! suggestion and never fails: errors are logged and become `None`.

use chrono::{DateTime, FixedOffset, Local};

use crate::aggregator::Aggregator;
use crate::error::Result;
use crate::rules::RuleSet;
use crate::storage::{Config, GroupingSettings};
use crate::suggestion::WorkspaceSuggestion;
use crate::tab::{OpenTab, Snapshot};

/// Fewer valid tabs than this and there is nothing to group.
pub const MIN_VALID_TABS: usize = 2;

/// Stateless evaluator over an immutable rule set.
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    rules: RuleSet,
}

impl GroupingEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Engine over the builtin tables plus the user rules file named in
    /// `config`, if any.
    pub fn from_config(config: &Config) -> Result<Self> {
        let rules = match &config.rules.extra_rules_path {
            Some(path) => RuleSet::builtin_with_file(path)?,
            None => RuleSet::builtin(),
        };
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// All suggestions at or above the configured threshold, best first.
    /// Dismissed names are not filtered here.
    pub fn aggregate(
        &self,
        tabs: &[OpenTab],
        settings: &GroupingSettings,
        now: DateTime<FixedOffset>,
    ) -> Result<Vec<WorkspaceSuggestion>> {
        let threshold = settings.threshold()?;
        let snapshot = Snapshot::build(tabs, &settings.excluded_domains);
        Ok(Aggregator::standard(&self.rules).aggregate(&snapshot, now, threshold))
    }

    /// The single best suggestion for `tabs`, or `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if `settings` is invalid.
    pub fn try_evaluate(
        &self,
        tabs: &[OpenTab],
        settings: &GroupingSettings,
        now: DateTime<FixedOffset>,
    ) -> Result<Option<WorkspaceSuggestion>> {
        if !settings.enable_auto_grouping {
            tracing::debug!("auto-grouping disabled");
            return Ok(None);
        }

        let valid = tabs.iter().filter(|tab| tab.is_valid()).count();
        if valid < MIN_VALID_TABS {
            tracing::debug!(valid, "not enough tabs to group");
            return Ok(None);
        }

        let best = self
            .aggregate(tabs, settings, now)?
            .into_iter()
            .find(|s| !settings.is_dismissed(&s.name));

        if let Some(suggestion) = &best {
            tracing::info!(
                name = %suggestion.name,
                confidence = suggestion.confidence,
                tabs = suggestion.tab_count(),
                source = ?suggestion.source,
                "workspace suggested"
            );
        }
        Ok(best)
    }

    /// Fail-open form of [`Self::try_evaluate`]: any error yields `None`.
    pub fn evaluate(
        &self,
        tabs: &[OpenTab],
        settings: &GroupingSettings,
        now: DateTime<FixedOffset>,
    ) -> Option<WorkspaceSuggestion> {
        self.try_evaluate(tabs, settings, now).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "grouping pass failed, no suggestion");
            None
        })
    }

    /// [`Self::evaluate`] at the current local time.
    pub fn evaluate_now(
        &self,
        tabs: &[OpenTab],
        settings: &GroupingSettings,
    ) -> Option<WorkspaceSuggestion> {
        self.evaluate(tabs, settings, Local::now().fixed_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn monday_morning() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2024, 3, 11, 10, 0, 0).unwrap().fixed_offset()
    }

    fn github_tabs(n: i64) -> Vec<OpenTab> {
        (1..=n)
            .map(|i| OpenTab::new(i, format!("https://github.com/owner/repo-{i}")))
            .collect()
    }

    #[test]
    fn disabled_settings_short_circuit() {
        let engine = GroupingEngine::default();
        let out = engine.evaluate(&github_tabs(10), &GroupingSettings::disabled(), monday_morning());
        assert!(out.is_none());
    }

    #[test]
    fn internal_pages_do_not_count_as_valid() {
        let engine = GroupingEngine::default();
        let tabs = vec![
            OpenTab::new(1, "https://github.com/a"),
            OpenTab::new(2, "chrome://newtab/"),
            OpenTab::new(3, "about:blank"),
        ];
        let out = engine.evaluate(&tabs, &GroupingSettings::default(), monday_morning());
        assert!(out.is_none());
    }

    #[test]
    fn invalid_threshold_fails_open() {
        let engine = GroupingEngine::default();
        let settings = GroupingSettings {
            confidence_threshold: 900,
            ..GroupingSettings::default()
        };
        assert!(engine
            .try_evaluate(&github_tabs(5), &settings, monday_morning())
            .is_err());
        assert!(engine
            .evaluate(&github_tabs(5), &settings, monday_morning())
            .is_none());
    }

    #[test]
    fn dismissed_names_are_skipped() {
        let engine = GroupingEngine::default();
        let tabs = github_tabs(5);

        let first = engine
            .evaluate(&tabs, &GroupingSettings::default(), monday_morning())
            .unwrap();
        assert_eq!(first.name, "Development");

        let settings = GroupingSettings {
            dismissed: vec!["Development".into()],
            ..GroupingSettings::default()
        };
        let second = engine.evaluate(&tabs, &settings, monday_morning()).unwrap();
        assert_eq!(second.name, "Work");
    }

    #[test]
    fn excluded_domains_leave_the_pool() {
        let engine = GroupingEngine::default();
        let settings = GroupingSettings {
            excluded_domains: vec!["github.com".into()],
            ..GroupingSettings::default()
        };
        assert!(engine
            .evaluate(&github_tabs(5), &settings, monday_morning())
            .is_none());
    }

    #[test]
    fn from_config_loads_extra_rules() {
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("rules.toml");
        std::fs::write(
            &rules_path,
            "[[domain]]\nlabel = \"Internal\"\ndomains = [\"wiki.corp\"]\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.rules.extra_rules_path = Some(rules_path);
        let engine = GroupingEngine::from_config(&config).unwrap();

        let tabs: Vec<_> = (1..=3)
            .map(|i| OpenTab::new(i, format!("https://wiki.corp/page/{i}")))
            .collect();
        let out = engine
            .evaluate(&tabs, &config.settings(), monday_morning())
            .unwrap();
        assert_eq!(out.name, "Internal");

        config.rules.extra_rules_path = Some(dir.path().join("missing.toml"));
        assert!(GroupingEngine::from_config(&config).is_err());
    }
}
