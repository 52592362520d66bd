//! Rule graphs shaped like the precedence tables a grammar author writes.

use grammarkit::{Address, HasId, Relation, RelationGraph, SyntaxScope};

/// Binary-operator rules, deliberately listed out of precedence order.
pub const OPERATOR_RULES: [&str; 4] = ["additive", "primary", "multiplicative", "unary"];

/// Tighter-binding rules go first: primary < unary < multiplicative < additive.
pub fn operator_precedence() -> RelationGraph<&'static str> {
    let mut graph = RelationGraph::new(OPERATOR_RULES.to_vec());
    graph.connect("primary", "unary", Relation::LessThan);
    graph.connect("unary", "multiplicative", Relation::LessThan);
    graph.connect("multiplicative", "additive", Relation::LessThan);
    graph
}

/// Lexer scopes for a tiny identifier/keyword/number scanner.
pub fn lexer_scopes() -> Vec<SyntaxScope> {
    vec![
        SyntaxScope::lexer("IDENTIFIER", Address::new(0u32, 3u32, "foo")),
        SyntaxScope::lexer("KEYWORD", Address::new(4u32, 6u32, "if")),
        SyntaxScope::lexer("NUMBER", Address::new(7u32, 9u32, "42")),
    ]
}

/// Ids of an ordered sequence, for compact assertions.
pub fn ids<T: HasId>(sequence: &[&T]) -> Vec<String> {
    sequence.iter().map(|node| node.id().to_string()).collect()
}
