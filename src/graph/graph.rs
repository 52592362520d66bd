//! The relation graph: nodes, weights, and the directed relation table.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use tracing::{debug, trace};

use super::node::{HasId, IdArena, NodeHandle};
use super::{GraphConfig, Relation};
use crate::error::{Error, Result};

/// Weight that sorts an id before everything it is compared against.
pub const ALWAYS_FIRST: i64 = i64::MIN;

/// Outgoing edges of one id, in first-insertion order.
pub(super) type Peers = IndexMap<NodeHandle, Relation, FxBuildHasher>;

/// Accumulates partial ordering facts between ids and answers comparisons.
///
/// Facts come in three forms:
/// - strict edges (`<`, `>`), always stored together with their inverse
/// - equality edges, stored one way only and remembered in insertion order
///   for [`derive_equal_relations`](Self::derive_equal_relations)
/// - absolute weights, which bypass the relation table when both ids have one
///
/// Nothing is ever removed. Re-inserting an edge or weight overwrites it.
#[derive(Debug, Clone)]
pub struct RelationGraph<T> {
    pub(super) nodes: Vec<T>,
    pub(super) config: GraphConfig,
    pub(super) arena: IdArena,
    pub(super) weights: FxHashMap<NodeHandle, i64>,
    /// Indexed by handle; grows with the arena.
    pub(super) relations: Vec<Peers>,
    pub(super) equal_history: Vec<(NodeHandle, NodeHandle)>,
}

impl<T> Default for RelationGraph<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            config: GraphConfig::default(),
            arena: IdArena::default(),
            weights: FxHashMap::default(),
            relations: Vec::new(),
            equal_history: Vec::new(),
        }
    }
}

impl<T> RelationGraph<T> {
    /// Create a graph over an initial node collection.
    pub fn new(nodes: Vec<T>) -> Self {
        Self::with_config(nodes, GraphConfig::default())
    }

    pub fn with_config(nodes: Vec<T>, config: GraphConfig) -> Self {
        Self {
            nodes,
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a node. Duplicate ids are kept.
    pub fn push_node(&mut self, node: T) {
        self.nodes.push(node);
    }

    /// Record `a relation b`.
    ///
    /// Strict relations also record the inverse from `b` to `a`. Equality is
    /// recorded from `a` only; `a` inherits `b`'s weight if it has none.
    pub fn connect(&mut self, a: &str, b: &str, relation: Relation) {
        let (ha, hb) = (self.intern(a), self.intern(b));
        self.link(ha, hb, relation);
    }

    /// Record a relation given as a symbol.
    ///
    /// `"<"` and `">"` are strict; every other symbol, typos included, is
    /// recorded as equality. See [`try_connect_symbol`](Self::try_connect_symbol).
    pub fn connect_symbol(&mut self, a: &str, b: &str, symbol: &str) {
        self.connect(a, b, Relation::from_symbol(symbol));
    }

    /// Record `a relation b`, refusing contradictions and strict cycles.
    ///
    /// The graph is unchanged when an error is returned.
    pub fn try_connect(&mut self, a: &str, b: &str, relation: Relation) -> Result<()> {
        if let Some(existing) = self.relation(a, b) {
            if existing != relation {
                return Err(contradiction(a, b, existing, relation));
            }
        }
        if relation.is_strict() {
            if let Some(existing) = self.relation(b, a) {
                if existing != relation.inverse() {
                    return Err(contradiction(b, a, existing, relation.inverse()));
                }
            }
            let (low, high) = match relation {
                Relation::LessThan => (a, b),
                _ => (b, a),
            };
            if a == b || self.precedes(high, low) {
                return Err(Error::CycleDetected {
                    a: a.into(),
                    b: b.into(),
                    relation,
                });
            }
        }
        self.connect(a, b, relation);
        Ok(())
    }

    /// Strict counterpart of [`connect_symbol`](Self::connect_symbol).
    pub fn try_connect_symbol(&mut self, a: &str, b: &str, symbol: &str) -> Result<()> {
        let relation = Relation::parse_symbol(symbol)?;
        self.try_connect(a, b, relation)
    }

    /// Assign an absolute ordering key to `id`, replacing any previous one.
    pub fn set_weight(&mut self, value: i64, id: &str) {
        let handle = self.intern(id);
        trace!("[GRAPH] weight {} = {}", id, value);
        self.weights.insert(handle, value);
    }

    pub fn weight(&self, id: &str) -> Option<i64> {
        let handle = self.arena.get(id)?;
        self.weights.get(&handle).copied()
    }

    /// The directly recorded relation from `a` to `b`, if any.
    pub fn relation(&self, a: &str, b: &str) -> Option<Relation> {
        let (ha, hb) = (self.arena.get(a)?, self.arena.get(b)?);
        self.relations[ha.index()].get(&hb).copied()
    }

    /// Outgoing edges of `id` in their fixed iteration order.
    pub fn relations_of<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, Relation)> + 'a {
        self.arena
            .get(id)
            .map(|handle| &self.relations[handle.index()])
            .into_iter()
            .flat_map(move |peers| {
                peers
                    .iter()
                    .map(move |(&peer, &relation)| (self.arena.resolve(peer).as_str(), relation))
            })
    }

    /// Every equality edge ever inserted, in insertion order.
    pub fn equal_history(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.equal_history
            .iter()
            .map(|&(a, b)| (self.arena.resolve(a).as_str(), self.arena.resolve(b).as_str()))
    }

    /// Replay recorded equalities: for each `(a, b)`, in order, `a` inherits
    /// every strict relation currently known for `b`.
    ///
    /// Only edges present at call time are propagated; call again after
    /// further `connect`s to re-sync.
    ///
    /// One pass moves relations a single equality hop, in history order.
    /// Comparisons never walk equality edges, so for a chain recorded as
    /// `x = y`, `y = w`, `w < z` the first pass gives `y < z` and only a
    /// second pass gives `x < z`.
    pub fn derive_equal_relations(&mut self) {
        let history = self.equal_history.clone();
        let mut inherited = 0usize;
        for (a, b) in history.iter().copied() {
            let strict: Vec<(NodeHandle, Relation)> = self.relations[b.index()]
                .iter()
                .filter(|(_, relation)| relation.is_strict())
                .map(|(&peer, &relation)| (peer, relation))
                .collect();
            for (peer, relation) in strict {
                self.link(a, peer, relation);
                inherited += 1;
            }
        }
        debug!(
            "[GRAPH] derived equal relations: {} pairs, {} edges inherited",
            history.len(),
            inherited
        );
    }

    fn intern(&mut self, id: &str) -> NodeHandle {
        let handle = self.arena.intern(id);
        if self.relations.len() < self.arena.len() {
            self.relations.resize_with(self.arena.len(), Peers::default);
        }
        handle
    }

    fn link(&mut self, a: NodeHandle, b: NodeHandle, relation: Relation) {
        self.insert_edge(a, b, relation);
        if relation.is_strict() {
            self.insert_edge(b, a, relation.inverse());
        }
    }

    fn insert_edge(&mut self, a: NodeHandle, b: NodeHandle, relation: Relation) {
        let previous = self.relations[a.index()].insert(b, relation);
        match previous {
            Some(previous) if previous != relation => debug!(
                "[GRAPH] overwrite {} {} {} with {}",
                self.arena.resolve(a),
                previous,
                self.arena.resolve(b),
                relation
            ),
            _ => trace!(
                "[GRAPH] connect {} {} {}",
                self.arena.resolve(a),
                relation,
                self.arena.resolve(b)
            ),
        }
        if relation == Relation::EqualTo {
            self.equal_history.push((a, b));
            if !self.weights.contains_key(&a) {
                if let Some(&weight) = self.weights.get(&b) {
                    self.weights.insert(a, weight);
                }
            }
        }
    }
}

impl<T: HasId> RelationGraph<T> {
    /// Create a graph, rejecting a node collection with repeated ids.
    pub fn try_new(nodes: Vec<T>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for node in &nodes {
            if !seen.insert(node.id()) {
                return Err(Error::duplicate(node.id()));
            }
        }
        Ok(Self::new(nodes))
    }

    /// Check if a node with this id is in the node collection.
    pub fn contains_id(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id() == id)
    }

    /// Append a node, rejecting an id that is already present.
    pub fn try_push_node(&mut self, node: T) -> Result<()> {
        if self.contains_id(node.id()) {
            return Err(Error::duplicate(node.id()));
        }
        self.nodes.push(node);
        Ok(())
    }
}

/// Renders the relation table, one id per line, as
/// `id(weight) -> {peer: <, peer: >}` with `<` entries first.
impl<T> fmt::Display for RelationGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first_line = true;
        for (index, peers) in self.relations.iter().enumerate() {
            if peers.is_empty() {
                continue;
            }
            let handle = NodeHandle::from_index(index);
            let mut entries: Vec<_> = peers.iter().collect();
            entries.sort_by_key(|(_, relation)| **relation != Relation::LessThan);

            if !first_line {
                writeln!(f)?;
            }
            first_line = false;
            write!(
                f,
                "{}({}) -> {{",
                self.arena.resolve(handle),
                self.weights.get(&handle).copied().unwrap_or(0)
            )?;
            for (i, (peer, relation)) in entries.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", self.arena.resolve(*peer), relation)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

fn contradiction(a: &str, b: &str, existing: Relation, requested: Relation) -> Error {
    Error::ContradictoryRelation {
        a: a.into(),
        b: b.into(),
        existing,
        requested,
    }
}
