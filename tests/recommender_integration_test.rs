//! End-to-end scenarios through the upload parser and the recommender.

use fragmap::{parse_upload, NoopObserver, PatternEntry, Recommender, Structure};
use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::json;

fn structure_of(value: serde_json::Value) -> Structure {
    value.as_object().cloned().unwrap_or_default()
}

fn run(raw: &str, patterns: Vec<PatternEntry>) -> Vec<fragmap::FragmentRecommendationResult> {
    let upload = parse_upload(raw).expect("fixture must parse");
    Recommender::with_patterns(patterns).recommend(&upload.noise, &upload.clusters, &NoopObserver)
}

#[test]
fn test_wall_fragment_matches_class_a_at_half_score() {
    let raw = indoc! {r#"
        {
            "noise": [
                {
                    "fragment_id": "f1",
                    "element_type": "Wall",
                    "Level_1": {"value": 1},
                    "Level_2": {"value": 2}
                }
            ],
            "clusters": {
                "cluster_wall": {
                    "classes": {
                        "ClassA": {"Level_1": {"value": 1}}
                    }
                }
            }
        }
    "#};

    let results = run(raw, Vec::new());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].fragment_id, Some(json!("f1")));
    assert_eq!(
        results[0].fragment_structure,
        structure_of(json!({"Level_1": {"value": 1}, "Level_2": {"value": 2}}))
    );

    let recs = &results[0].recommendations;
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].class, "ClassA");
    assert_eq!(recs[0].structure_score, 0.5);
    assert_eq!(recs[0].group_key, "cluster_wall");
}

#[test]
fn test_door_without_pool_and_without_fallback_is_empty() {
    let raw = indoc! {r#"
        {
            "noise": [
                {"fragment_id": "f1", "element_type": "Door", "Level_1": {"value": 1}}
            ],
            "clusters": {
                "cluster_wall": {"classes": {"ClassA": {"Level_1": {"value": 1}}}}
            }
        }
    "#};

    let results = run(raw, Vec::new());
    assert!(results[0].recommendations.is_empty());
}

#[test]
fn test_door_without_pool_uses_fallback_catalog() {
    let raw = indoc! {r#"
        {
            "noise": [
                {"fragment_id": "f1", "element_type": "Door", "Level_1": {"value": 1}}
            ],
            "clusters": {}
        }
    "#};
    let patterns = vec![
        PatternEntry {
            class: "Mismatch".to_string(),
            structure: structure_of(json!({"Level_9": {"value": 9}})),
        },
        PatternEntry {
            class: "DoorPattern".to_string(),
            structure: structure_of(json!({"Level_1": {"value": 1}})),
        },
    ];

    let results = run(raw, patterns);

    let recs = &results[0].recommendations;
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].class, "DoorPattern");
    assert_eq!(recs[0].structure_score, 1.0);
    assert_eq!(recs[0].group_key, "patterns");
}

#[test]
fn test_identical_structures_dedup_by_name_not_structure() {
    let raw = indoc! {r#"
        {
            "noise": [
                {"fragment_id": "f1", "element_type": "Wall", "Level_1": {"value": 1}}
            ],
            "clusters": {
                "cluster_wall": {
                    "classes": {
                        "ClassA": {"Level_1": {"value": 1}},
                        "ClassB": {"Level_1": {"value": 1}}
                    }
                }
            }
        }
    "#};

    let results = run(raw, Vec::new());

    let classes: Vec<&str> = results[0]
        .recommendations
        .iter()
        .map(|r| r.class.as_str())
        .collect();
    assert_eq!(classes, vec!["ClassA", "ClassB"]);
}

#[test]
fn test_no_duplicate_class_names_in_any_result() {
    let raw = indoc! {r#"
        {
            "noise": [
                {"fragment_id": "f1", "element_type": "Wall", "Level_1": {"value": 1}},
                {"fragment_id": "f2", "element_type": "Wall", "Level_2": {"value": 2}}
            ],
            "clusters": {
                "cluster_wall": {
                    "classes": {
                        "ClassA": {"Level_1": {"value": 1}},
                        "ClassB": {"Level_2": {"value": 2}},
                        "ClassC": {}
                    }
                }
            }
        }
    "#};

    let results = run(raw, Vec::new());

    for result in &results {
        let mut names: Vec<&str> = result
            .recommendations
            .iter()
            .map(|r| r.class.as_str())
            .collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(before, names.len(), "duplicate class in {:?}", result.fragment_id);
    }
}

#[test]
fn test_ordering_descending_with_stable_ties() {
    let raw = indoc! {r#"
        {
            "noise": [
                {
                    "fragment_id": "f1",
                    "element_type": "Wall",
                    "Level_1": {"value": 1},
                    "Level_2": {"value": 2}
                }
            ],
            "clusters": {
                "cluster_wall": {
                    "classes": {
                        "Weak": {"Level_7": {"value": 7}},
                        "TieFirst": {"Level_1": {"value": 1}},
                        "Exact": {"Level_1": {"value": 1}, "Level_2": {"value": 2}},
                        "TieSecond": {"Level_2": {"value": 2}}
                    }
                }
            }
        }
    "#};

    let results = run(raw, Vec::new());

    let ranked: Vec<(&str, f64)> = results[0]
        .recommendations
        .iter()
        .map(|r| (r.class.as_str(), r.structure_score))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Exact", 1.0),
            ("TieFirst", 0.5),
            ("TieSecond", 0.5),
            ("Weak", 0.0)
        ]
    );
}

#[test]
fn test_fragment_without_element_type_is_not_an_error() {
    let raw = indoc! {r#"
        {
            "noise": [{"fragment_id": "f1", "Level_1": {"value": 1}}],
            "clusters": {
                "cluster_wall": {"classes": {"ClassA": {"Level_1": {"value": 1}}}}
            }
        }
    "#};

    let results = run(raw, Vec::new());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].element_type, None);
    assert!(results[0].recommendations.is_empty());
}

#[test]
fn test_malformed_records_degrade_to_defaults() {
    let raw = indoc! {r#"
        {
            "noise": [
                42,
                {"fragment_id": "f1", "element_type": "Wall", "Level_1": "bogus"}
            ],
            "clusters": {
                "cluster_wall": {"classes": {"ClassA": {"Level_1": {"value": 1}}}},
                "cluster_bad": []
            }
        }
    "#};

    let results = run(raw, Vec::new());

    assert_eq!(results.len(), 2);
    // The malformed fragment resolves to the degenerate pool key.
    assert!(results[0].recommendations.is_empty());
    // A bogus descriptor still counts as a present level key.
    assert_eq!(results[1].recommendations[0].structure_score, 1.0);
}

#[test]
fn test_candidate_pools_match_case_insensitively() {
    let raw = indoc! {r#"
        {
            "noise": [
                {"fragment_id": "f1", "element_type": "WALL", "Level_1": {"value": 1}}
            ],
            "clusters": {
                "cluster_wall": {"classes": {"ClassA": {"Level_1": {"value": 1}}}}
            }
        }
    "#};

    let results = run(raw, Vec::new());
    assert_eq!(results[0].recommendations.len(), 1);
}
