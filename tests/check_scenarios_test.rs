//! End-to-end evaluation scenarios through the public API.
//!
//! Each test builds a result set the way the analyzer would report it and
//! checks the infraction count and emitted events.

use ccgate::{
    evaluate, parse_ignore_spec, run, CheckOptions, EventKind, GateError, IgnoreMap, Rank,
    ResultSet, Severity, StaticHarvester, ThresholdConfig,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn absolute(rank: Rank) -> ThresholdConfig {
    ThresholdConfig {
        max_absolute: Some(rank),
        ..Default::default()
    }
}

#[test]
fn simple_block_within_absolute_ceiling_passes() {
    let results = ResultSet::new().with_blocks("m1", vec![("f", 1, 2)]);
    let report = evaluate(&results, &IgnoreMap::default(), &absolute(Rank::A));

    assert_eq!(report.infractions, 0);
    assert!(report.events.is_empty());
}

#[test]
fn rank_f_block_over_b_ceiling_is_one_infraction() {
    let results = ResultSet::new().with_blocks("m1", vec![("f", 1, 45)]);
    let report = evaluate(&results, &IgnoreMap::default(), &absolute(Rank::B));

    assert_eq!(report.infractions, 1);
    assert_eq!(report.events.len(), 1);
    assert_eq!(report.events[0].severity, Severity::Error);
    assert_eq!(report.events[0].message, r#"block "m1:1 f" has a rank of F"#);
}

#[test]
fn ignored_block_still_counts_towards_numeric_average() {
    let results = ResultSet::new().with_blocks("m1", vec![("f", 1, 45)]);
    let ignore = parse_ignore_spec(Some("m1:f")).unwrap();

    let report = evaluate(&results, &ignore, &absolute(Rank::B));
    assert_eq!(report.infractions, 0);

    let thresholds = ThresholdConfig {
        max_average_num: Some(10.0),
        ..absolute(Rank::B)
    };
    let report = evaluate(&results, &ignore, &thresholds);
    assert_eq!(report.infractions, 1);
    assert_eq!(report.events[0].kind, EventKind::TotalAverageScore);
}

#[test]
fn unparseable_module_is_a_single_warning() {
    let results = ResultSet::new().with_error("m1", "SyntaxError");
    let thresholds = ThresholdConfig {
        max_absolute: Some(Rank::A),
        max_modules: Some(Rank::A),
        max_average: Some(Rank::A),
        max_average_num: Some(0.0),
    };

    let report = evaluate(&results, &IgnoreMap::default(), &thresholds);

    assert_eq!(report.infractions, 0);
    assert_eq!(report.events.len(), 1);
    assert_eq!(report.events[0].severity, Severity::Warning);
    assert_eq!(report.events[0].message, "cannot parse m1: SyntaxError");
}

#[test]
fn malformed_ignore_entry_stops_the_run() {
    let harvester = StaticHarvester::new(ResultSet::new().with_blocks("m1", vec![("f", 1, 45)]));
    let options = CheckOptions {
        ignore_blocks: Some("m1-no-colon".to_string()),
        thresholds: absolute(Rank::B),
        ..Default::default()
    };

    let err = run(&options, &harvester).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GateError>(),
        Some(GateError::MalformedIgnoreEntry { .. })
    ));
}

#[test]
fn radon_json_drives_the_full_report() {
    let results = ResultSet::from_json(indoc! {r#"
        {
          "app/views.py": [
            {"type": "method", "rank": "E", "name": "dispatch", "lineno": 88,
             "col_offset": 4, "endline": 190, "classname": "View", "closures": [],
             "complexity": 33},
            {"type": "function", "rank": "A", "name": "render", "lineno": 10,
             "col_offset": 0, "endline": 20, "closures": [], "complexity": 3}
          ],
          "app/legacy.py": {"error": "invalid syntax (<unknown>, line 7)"},
          "app/utils.py": [
            {"type": "function", "rank": "A", "name": "slugify", "lineno": 1,
             "col_offset": 0, "endline": 9, "closures": [], "complexity": 2}
          ]
        }
    "#})
    .unwrap();
    let thresholds = ThresholdConfig {
        max_absolute: Some(Rank::C),
        max_modules: Some(Rank::B),
        max_average: Some(Rank::B),
        max_average_num: None,
    };

    let report = evaluate(&results, &IgnoreMap::default(), &thresholds);
    let messages: Vec<&str> = report.events.iter().map(|e| e.message.as_str()).collect();

    // views.py averages 18 (C); the codebase averages 38/3 = 12.67 (C).
    assert_eq!(
        messages,
        vec![
            r#"block "app/views.py:88 dispatch" has a rank of E"#,
            "cannot parse app/legacy.py: invalid syntax (<unknown>, line 7)",
            "average complexity is ranked C",
            r#"module "app/views.py" has a rank of C"#,
        ]
    );
    assert_eq!(report.infractions, 3);
}

#[test]
fn report_serializes_with_event_context() {
    let results = ResultSet::new().with_blocks("m1", vec![("f", 4, 45)]);
    let report = evaluate(&results, &IgnoreMap::default(), &absolute(Rank::B));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["infractions"], 1);
    assert_eq!(json["events"][0]["severity"], "error");
    assert_eq!(json["events"][0]["kind"], "block_rank");
    assert_eq!(json["events"][0]["module"], "m1");
    assert_eq!(json["events"][0]["lineno"], 4);
    assert_eq!(json["events"][0]["rank"], "F");
}
