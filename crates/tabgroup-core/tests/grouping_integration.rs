//! End-to-end grouping scenarios.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use tabgroup_core::{
    merge_candidates, GroupingEngine, GroupingSettings, OpenTab, SuggestionSource,
    WorkspaceSuggestion, DEFAULT_CONFIDENCE_THRESHOLD,
};

/// Wednesday 2024-03-06 11:00 UTC.
fn wednesday() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 3, 6, 11, 0, 0).unwrap().fixed_offset()
}

/// Saturday 2024-03-09 14:00 UTC.
fn saturday_afternoon() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 3, 9, 14, 0, 0).unwrap().fixed_offset()
}

fn minutes_before(now: DateTime<FixedOffset>, minutes: i64) -> DateTime<Utc> {
    now.with_timezone(&Utc) - Duration::minutes(minutes)
}

#[test]
fn three_stale_github_tabs_meet_the_threshold_exactly() {
    let now = wednesday();
    let tabs: Vec<_> = (1..=3)
        .map(|i| {
            OpenTab::new(i, format!("https://github.com/owner/repo-{i}"))
                .with_title(format!("repo-{i}"))
                .accessed_at(minutes_before(now, 45))
        })
        .collect();

    let engine = GroupingEngine::default();
    let all = engine
        .aggregate(&tabs, &GroupingSettings::default(), now)
        .unwrap();

    let dev = all
        .iter()
        .find(|s| s.name == "Development")
        .expect("Development suggestion");
    assert_eq!(dev.confidence, 70);
    assert_eq!(dev.tab_ids, vec![1, 2, 3]);
    assert_eq!(dev.source, Some(SuggestionSource::DomainPattern));

    // The time heuristic also scores 70 with three tabs; the domain
    // suggestion was produced first and wins the tie.
    let best = engine
        .evaluate(&tabs, &GroupingSettings::default(), now)
        .unwrap();
    assert_eq!(best.name, "Development");
}

#[test]
fn single_tab_yields_nothing() {
    let tabs = vec![OpenTab::new(1, "https://github.com/owner/repo")];
    let out = GroupingEngine::default().evaluate(&tabs, &GroupingSettings::default(), wednesday());
    assert!(out.is_none());
}

#[test]
fn disabled_auto_grouping_yields_nothing() {
    let tabs: Vec<_> = (1..=10)
        .map(|i| OpenTab::new(i, format!("https://github.com/owner/repo-{i}")))
        .collect();
    let out = GroupingEngine::default().evaluate(&tabs, &GroupingSettings::disabled(), wednesday());
    assert!(out.is_none());
}

#[test]
fn unlisted_domain_is_grouped_by_host() {
    let tabs: Vec<_> = (1..=5)
        .map(|i| {
            OpenTab::new(i, format!("https://internal-tool.corp/page/{i}"))
                .with_title(format!("Page {i}"))
        })
        .collect();

    let best = GroupingEngine::default()
        .evaluate(&tabs, &GroupingSettings::default(), wednesday())
        .unwrap();
    assert_eq!(best.name, "internal-tool.corp");
    assert!(best.reason.contains("5 tabs open on internal-tool.corp"));
    assert_eq!(best.source, Some(SuggestionSource::UnlistedDomain));
    assert_eq!(best.tab_ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn weekend_afternoon_suggests_leisure() {
    let tabs = vec![
        OpenTab::new(1, "https://alpha.example/one"),
        OpenTab::new(2, "https://beta.example/two"),
        OpenTab::new(3, "https://delta.example/three"),
        OpenTab::new(4, "https://omega.example/four"),
    ];

    let best = GroupingEngine::default()
        .evaluate(&tabs, &GroupingSettings::default(), saturday_afternoon())
        .unwrap();
    assert_eq!(best.name, "Leisure");
    assert_eq!(best.confidence, 71);
    assert_eq!(best.source, Some(SuggestionSource::TimeContext));
}

#[test]
fn duplicate_names_collapse_to_the_stronger_candidate() {
    let at = Utc.with_ymd_and_hms(2024, 3, 6, 11, 0, 0).unwrap();
    let make = |confidence: u8, source: SuggestionSource| WorkspaceSuggestion {
        id: uuid::Uuid::nil(),
        name: "Development".into(),
        tab_ids: vec![1, 2, 3],
        tab_urls: vec![],
        confidence,
        reason: format!("scored {confidence}"),
        created_at: at,
        source: Some(source),
    };

    let merged = merge_candidates(
        vec![
            make(72, SuggestionSource::DomainPattern),
            make(81, SuggestionSource::KeywordPattern),
        ],
        DEFAULT_CONFIDENCE_THRESHOLD,
    );
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].confidence, 81);
    assert_eq!(merged[0].source, Some(SuggestionSource::KeywordPattern));
}

#[test]
fn keyword_group_outscores_domain_group_of_same_name() {
    let now = wednesday();
    let fresh = minutes_before(now, 2);
    let tabs = vec![
        OpenTab::new(1, "https://github.com/a")
            .with_title("Fix compiler debug output")
            .accessed_at(fresh),
        OpenTab::new(2, "https://github.com/b")
            .with_title("Pull request: refactor parser")
            .accessed_at(fresh),
        OpenTab::new(3, "https://github.com/c")
            .with_title("Issue tracker")
            .accessed_at(fresh),
        OpenTab::new(4, "https://stackoverflow.com/q")
            .with_title("Python stack trace question")
            .accessed_at(fresh),
    ];

    let engine = GroupingEngine::default();
    let all = engine
        .aggregate(&tabs, &GroupingSettings::default(), now)
        .unwrap();

    let names: Vec<_> = all.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Development", "Work"]);

    // Domain: 40 + 15 + 15 + 0 (only 75% on github.com) = 70.
    // Keyword: 26 + 12 + 20 + 20 = 78.
    let dev = &all[0];
    assert_eq!(dev.confidence, 78);
    assert_eq!(dev.source, Some(SuggestionSource::KeywordPattern));
    assert_eq!(dev.tab_ids, vec![1, 2, 4]);
    assert_eq!(all[1].confidence, 71);
}

#[test]
fn malformed_tabs_never_panic() {
    let tabs = vec![
        OpenTab {
            url: None,
            ..OpenTab::new(1, "")
        },
        OpenTab::new(2, "::not a url::"),
        OpenTab::new(3, ""),
        OpenTab::new(4, "https://"),
        OpenTab::new(5, "javascript:void(0)"),
        OpenTab {
            title: None,
            ..OpenTab::new(6, "https://github.com/x")
        },
    ];
    let engine = GroupingEngine::default();
    assert!(engine
        .evaluate(&tabs, &GroupingSettings::default(), wednesday())
        .is_none());
    assert!(engine
        .evaluate(&[], &GroupingSettings::default(), wednesday())
        .is_none());
}

#[test]
fn same_input_same_output() {
    let now = wednesday();
    let tabs: Vec<_> = (1..=6)
        .map(|i| {
            OpenTab::new(i, format!("https://www.youtube.com/watch?v={i}"))
                .with_title("Movie trailer")
                .accessed_at(minutes_before(now, i))
        })
        .collect();

    let engine = GroupingEngine::default();
    let settings = GroupingSettings::default();
    let first = engine.evaluate(&tabs, &settings, now);
    let second = engine.evaluate(&tabs, &settings, now);
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn raised_threshold_hides_weak_suggestions() {
    let tabs: Vec<_> = (1..=3)
        .map(|i| OpenTab::new(i, format!("https://github.com/owner/repo-{i}")))
        .collect();
    let settings = GroupingSettings {
        confidence_threshold: 90,
        ..GroupingSettings::default()
    };
    assert!(GroupingEngine::default()
        .evaluate(&tabs, &settings, wednesday())
        .is_none());
}

#[test]
fn snapshot_json_from_browser_round_trip() {
    let json = r#"[
        {"id": 11, "url": "https://internal-tool.corp/a", "title": "A", "lastAccessed": 1709722740000, "active": true},
        {"id": 12, "url": "https://internal-tool.corp/b", "title": "B", "lastAccessed": 1709722500000},
        {"id": 13, "url": "https://internal-tool.corp/c", "title": "C"},
        {"id": 14, "url": "chrome://extensions", "title": "Extensions"}
    ]"#;
    let tabs: Vec<OpenTab> = serde_json::from_str(json).unwrap();
    let best = GroupingEngine::default()
        .evaluate(&tabs, &GroupingSettings::default(), wednesday())
        .unwrap();

    assert_eq!(best.name, "internal-tool.corp");
    assert_eq!(best.tab_ids, vec![11, 12, 13]);

    let wire = serde_json::to_value(&best).unwrap();
    for key in ["id", "name", "tabIds", "tabUrls", "confidence", "reason", "createdAt"] {
        assert!(wire.get(key).is_some(), "missing {key}");
    }
}
