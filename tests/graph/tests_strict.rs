//! Strict-mode operations: errors are local and leave the graph untouched.

use grammarkit::{Error, Relation, RelationGraph};
use rstest::rstest;

fn chain() -> RelationGraph<&'static str> {
    let mut graph = RelationGraph::new(vec!["a", "b", "c"]);
    graph.try_connect("a", "b", Relation::LessThan).unwrap();
    graph.try_connect("b", "c", Relation::LessThan).unwrap();
    graph
}

#[test]
fn test_duplicate_node_ids() {
    assert_eq!(
        RelationGraph::try_new(vec!["a", "b", "a"]).unwrap_err(),
        Error::DuplicateNodeId("a".into())
    );

    let mut graph = RelationGraph::try_new(vec!["a", "b"]).unwrap();
    assert!(graph.try_push_node("c").is_ok());
    assert!(matches!(graph.try_push_node("b"), Err(Error::DuplicateNodeId(_))));
    assert_eq!(graph.len(), 3);
}

#[test]
fn test_contradictory_relation() {
    let mut graph = chain();
    let before = graph.to_string();
    let err = graph.try_connect("a", "b", Relation::GreaterThan).unwrap_err();
    assert_eq!(
        err,
        Error::ContradictoryRelation {
            a: "a".into(),
            b: "b".into(),
            existing: Relation::LessThan,
            requested: Relation::GreaterThan,
        }
    );
    assert!(err.is_edge_error());
    assert_eq!(graph.to_string(), before);
}

#[test]
fn test_repeating_an_edge_is_allowed() {
    let mut graph = chain();
    assert!(graph.try_connect("a", "b", Relation::LessThan).is_ok());
    assert!(graph.try_connect("b", "a", Relation::GreaterThan).is_ok());
}

#[rstest]
#[case("c", "a", Relation::LessThan)]
#[case("a", "c", Relation::GreaterThan)]
#[case("a", "a", Relation::LessThan)]
fn test_cycles_are_rejected(#[case] a: &str, #[case] b: &str, #[case] relation: Relation) {
    let mut graph = chain();
    let before = graph.to_string();
    assert!(matches!(
        graph.try_connect(a, b, relation),
        Err(Error::CycleDetected { .. })
    ));
    assert_eq!(graph.to_string(), before);
}

#[test]
fn test_unknown_symbol() {
    let mut graph = chain();
    assert_eq!(
        graph.try_connect_symbol("a", "d", "=<"),
        Err(Error::UnknownRelation("=<".to_string()))
    );
    assert_eq!(graph.relation("a", "d"), None);
    assert!(graph.try_connect_symbol("a", "d", "<").is_ok());
    assert_eq!(graph.compare("a", "d"), Relation::LessThan);
}

#[test]
fn test_equality_against_strict_edge() {
    let mut graph = chain();
    assert!(matches!(
        graph.try_connect("a", "b", Relation::EqualTo),
        Err(Error::ContradictoryRelation { .. })
    ));
    assert!(graph.try_connect("a", "x", Relation::EqualTo).is_ok());
}
