//! Sorting node collections by the relation table.

use crate::helpers::grammar_fixtures::{ids, lexer_scopes, operator_precedence};
use grammarkit::{ALWAYS_FIRST, Relation, RelationGraph, SyntaxScope};

#[test]
fn test_ordered_sequence_follows_chain() {
    let mut graph = RelationGraph::new(vec!["c", "a", "b"]);
    graph.connect("a", "b", Relation::LessThan);
    graph.connect("b", "c", Relation::LessThan);
    graph.derive_equal_relations();

    assert_eq!(ids(&graph.ordered_sequence(false)), vec!["a", "b", "c"]);
    assert_eq!(ids(&graph.ordered_sequence(true)), vec!["c", "b", "a"]);
}

#[test]
fn test_operator_precedence() {
    let graph = operator_precedence();
    assert_eq!(
        ids(&graph.ordered_sequence(false)),
        vec!["primary", "unary", "multiplicative", "additive"]
    );
}

#[test]
fn test_equal_nodes_keep_relative_order() {
    let graph = RelationGraph::new(vec!["d", "b", "a", "c"]);
    assert_eq!(ids(&graph.ordered_sequence(false)), vec!["d", "b", "a", "c"]);
    assert_eq!(ids(&graph.ordered_sequence(true)), vec!["d", "b", "a", "c"]);
}

#[test]
fn test_weights_order_nodes() {
    let mut graph = RelationGraph::new(vec!["low", "high", "first", "mid"]);
    graph.set_weight(1, "low");
    graph.set_weight(50, "mid");
    graph.set_weight(100, "high");
    graph.set_weight(ALWAYS_FIRST, "first");
    assert_eq!(
        ids(&graph.ordered_sequence(false)),
        vec!["first", "low", "mid", "high"]
    );
    assert_eq!(
        ids(&graph.ordered_sequence(true)),
        vec!["high", "mid", "low", "first"]
    );
}

#[test]
fn test_duplicate_ids_are_kept() {
    let mut graph = RelationGraph::new(vec!["b", "a", "b"]);
    graph.connect("a", "b", Relation::LessThan);
    assert_eq!(ids(&graph.ordered_sequence(false)), vec!["a", "b", "b"]);
}

#[test]
fn test_contradictory_table_still_sorts() {
    let mut graph = RelationGraph::new(vec!["a", "b", "c"]);
    graph.connect("a", "b", Relation::LessThan);
    graph.connect("b", "c", Relation::LessThan);
    graph.connect("c", "a", Relation::LessThan);
    let sorted = graph.ordered_sequence(false);
    assert_eq!(sorted.len(), 3);
}

#[test]
fn test_orders_scopes_by_rule_id() {
    let mut graph: RelationGraph<SyntaxScope> = RelationGraph::new(lexer_scopes());
    // Keywords must be tried before the identifier rule that would swallow them.
    graph.connect("KEYWORD", "IDENTIFIER", Relation::LessThan);
    graph.connect("NUMBER", "IDENTIFIER", Relation::LessThan);

    let ordered = graph.ordered_sequence(false);
    assert_eq!(ids(&ordered), vec!["KEYWORD", "NUMBER", "IDENTIFIER"]);
    assert!(ordered.iter().all(|scope| scope.kind().is_lexer_scope()));

    let scopes = graph.nodes();
    assert_eq!(graph.compare_nodes(&scopes[1], &scopes[0]), Relation::LessThan);
}
