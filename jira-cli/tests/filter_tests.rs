// ABOUTME: Integration tests for filter criteria compilation into JQL
// ABOUTME: Pins clause text, ordering, precedence, and escaping behavior

use jira_cli::filter::{browse_url, IssueFilters, ValidationError, FILTER_UNSET};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_end_to_end_compile_example() {
    // The canonical example: project and status populated, limit default.
    let filters = IssueFilters {
        project: strings(&["DEMO"]),
        status: strings(&["Open", "In Progress"]),
        ..Default::default()
    };

    assert_eq!(filters.limit, 50);
    assert_eq!(
        filters.to_jql().unwrap(),
        "project IN (DEMO) AND status IN (Open, In Progress)"
    );
}

#[test]
fn test_single_field_produces_single_in_clause() {
    let cases: Vec<(IssueFilters, &str)> = vec![
        (
            IssueFilters {
                project: strings(&["a", "b"]),
                ..Default::default()
            },
            "project IN (a, b)",
        ),
        (
            IssueFilters {
                issue_type: strings(&["a", "b"]),
                ..Default::default()
            },
            "type IN (a, b)",
        ),
        (
            IssueFilters {
                status_category: strings(&["a", "b"]),
                ..Default::default()
            },
            "statusCategory IN (a, b)",
        ),
        (
            IssueFilters {
                label: strings(&["a", "b"]),
                ..Default::default()
            },
            "labels IN (a, b)",
        ),
        (
            IssueFilters {
                resolution: strings(&["a", "b"]),
                ..Default::default()
            },
            "resolution IN (a, b)",
        ),
    ];

    for (filters, expected) in cases {
        assert_eq!(filters.to_jql().unwrap(), expected);
        // Values keep insertion order: exactly one clause, no AND.
        assert!(!filters.to_jql().unwrap().contains(" AND "));
    }
}

#[test]
fn test_identical_criteria_compile_to_identical_bytes() {
    let build = || IssueFilters {
        filter: 77,
        project: strings(&["DEMO", "OPS"]),
        status: strings(&["Open"]),
        assignee: strings(&["alice", "bob"]),
        query: "payment failed".to_string(),
        ..Default::default()
    };

    let first = build().to_jql().unwrap();
    let second = build().to_jql().unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_raw_jql_returned_verbatim() {
    let raw = "project = DEMO AND status != Done ORDER BY created DESC";
    let filters = IssueFilters {
        jql: raw.to_string(),
        project: strings(&["IGNORED"]),
        status: strings(&["Ignored"]),
        filter: 999,
        query: "also ignored".to_string(),
        ..Default::default()
    };

    assert_eq!(filters.to_jql().unwrap(), raw);
}

#[test]
fn test_raw_jql_skips_validation() {
    // The escape hatch is verbatim: even values that would fail
    // structured validation pass through untouched.
    let raw = "summary ~ \"weird \u{7} bytes\"";
    let filters = IssueFilters {
        jql: raw.to_string(),
        ..Default::default()
    };
    assert_eq!(filters.to_jql().unwrap(), raw);
}

#[test]
fn test_predefined_filter_is_additive_and_leads() {
    let filters = IssueFilters {
        filter: 1200,
        project: strings(&["DEMO"]),
        ..Default::default()
    };
    assert_eq!(
        filters.to_jql().unwrap(),
        "filter = 1200 AND project IN (DEMO)"
    );

    let alone = IssueFilters {
        filter: 1200,
        ..Default::default()
    };
    assert_eq!(alone.to_jql().unwrap(), "filter = 1200");
}

#[test]
fn test_unset_sentinel_emits_no_filter_clause() {
    let filters = IssueFilters {
        filter: FILTER_UNSET,
        project: strings(&["DEMO"]),
        ..Default::default()
    };
    assert_eq!(filters.to_jql().unwrap(), "project IN (DEMO)");
}

#[test]
fn test_empty_fields_emit_no_clause() {
    let filters = IssueFilters::default();
    let jql = filters.to_jql().unwrap();
    assert_eq!(jql, "");
    assert!(!jql.contains("IN ()"));
}

#[test]
fn test_escaping_quotes_and_backslashes() {
    let filters = IssueFilters {
        component: strings(&[r#"say "hi""#, r"back\slash"]),
        ..Default::default()
    };
    assert_eq!(
        filters.to_jql().unwrap(),
        r#"component IN ("say \"hi\"", "back\\slash")"#
    );
}

#[test]
fn test_null_byte_is_a_validation_error() {
    let filters = IssueFilters {
        assignee: strings(&["al\0ice"]),
        ..Default::default()
    };
    assert!(matches!(
        filters.to_jql().unwrap_err(),
        ValidationError::UnescapableValue(_)
    ));
}

#[test]
fn test_browse_url_exact() {
    assert_eq!(
        browse_url("example.com", "ABC-123"),
        "https://example.com/browse/ABC-123"
    );
}

#[test]
fn test_search_url_uses_compiled_query() {
    let filters = IssueFilters {
        query: "login".to_string(),
        ..Default::default()
    };
    let url = filters.search_url("example.com").unwrap();
    assert!(url.starts_with("https://example.com/issues/?jql="));
    assert!(url.contains("text"));
    // Percent-encoded: no raw spaces or quotes survive.
    assert!(!url.contains(' '));
    assert!(!url.contains('"'));
}

#[test]
fn test_search_url_propagates_validation_errors() {
    let filters = IssueFilters {
        project: strings(&["DE\0MO"]),
        ..Default::default()
    };
    assert!(filters.search_url("example.com").is_err());
}
