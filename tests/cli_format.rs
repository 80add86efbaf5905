// tests/cli_format.rs
//! Output format tests: text trace, final-ranking line, JSON report.

use linkrank_core::rank::engine::power_iterate;
use linkrank_core::reporting::{console, json};
use linkrank_core::{rank, LinkGraph, RunConfig, Ranking, TransitionMatrix};

fn two_page_cycle() -> TransitionMatrix {
    let graph = LinkGraph::new(2, vec![(0, 1), (1, 0)]).unwrap();
    TransitionMatrix::from_graph(&graph)
}

#[test]
fn test_trace_matches_observable_format() {
    let outcome = power_iterate(&two_page_cycle(), 2).unwrap();
    let text = console::render_trace(&outcome);
    let expected = "\
ITERATION 1)
0: 0.5
1: 0.5
--------------------------------
ITERATION 2)
0: 0.5
1: 0.5
--------------------------------
";
    assert_eq!(text, expected);
}

#[test]
fn test_final_ranking_line_has_no_decimal_suffix() {
    let ranking = Ranking::from_final_ranks(&[0.12, 0.4, 0.24, 0.24]);
    let line = ranking.to_string();
    assert_eq!(line, "{0 ==> #1, 2 ==> #2, 3 ==> #3, 1 ==> #4}");
    assert!(!line.contains(".0"), "ordinal positions must render as integers");
}

#[test]
fn test_matrix_rendering_row_per_page() {
    let text = console::render_matrix(&two_page_cycle());
    assert_eq!(text, "| 0 1  |\n| 1 0  |\n");
}

#[test]
fn test_json_report_round_trips() {
    let report = rank::run(&RunConfig::new(5, 19, 20, 10)).unwrap();
    let text = json::render(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["config"]["seed"], 20);
    assert_eq!(value["outcome"]["trace"].as_array().unwrap().len(), 10);
    let entries = value["ranking"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["position"], 1);
}

#[test]
fn test_error_messages_name_the_violated_precondition() {
    let err = rank::run(&RunConfig::new(0, 3, 1, 1)).unwrap_err();
    assert_eq!(err.to_string(), "graph must contain at least one page");

    let err = rank::run(&RunConfig::new(1, 3, 1, 1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot place 3 links on a single page without self-loops"
    );
}
