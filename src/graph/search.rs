//! Comparison queries over a [`RelationGraph`].
//!
//! A comparison is resolved by the first rule that applies:
//!
//! 1. both ids weighted: numeric comparison
//! 2. `a` weighted [`ALWAYS_FIRST`]: `LessThan`
//! 3. a direct edge `a → b`: returned verbatim
//! 4. breadth-first walk over `LessThan` edges out of `a`, applying rules
//!    1–3 to `(n, b)` at every node `n` reached; the first answer wins
//! 5. otherwise `EqualTo`
//!
//! The walk keeps a single visited set seeded with `a`, `b` and the caller's
//! exclusions, so each id is expanded at most once. Edge order is the
//! insertion order of the relation table, which makes "first answer"
//! deterministic. Equality edges are never walked; their effect shows up only
//! once [`RelationGraph::derive_equal_relations`] has copied relations over.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::graph::ALWAYS_FIRST;
use super::node::{HasId, NodeHandle};
use super::{Relation, RelationGraph};
use crate::error::{Error, Result};

impl<T> RelationGraph<T> {
    /// Compare two ids. Unrelated ids compare `EqualTo`.
    pub fn compare(&self, a: &str, b: &str) -> Relation {
        self.compare_excluding(a, b, &[])
    }

    /// Compare two ids without walking through any of `excluding`.
    ///
    /// A search that runs into the depth cap resolves to `EqualTo`.
    pub fn compare_excluding(&self, a: &str, b: &str, excluding: &[&str]) -> Relation {
        match self.search(a, b, excluding) {
            Ok(relation) => relation,
            Err(err) => {
                debug!("[GRAPH] {}", err);
                Relation::EqualTo
            }
        }
    }

    /// Compare two ids, reporting a search cut short by the depth cap.
    pub fn try_compare(&self, a: &str, b: &str) -> Result<Relation> {
        self.search(a, b, &[])
    }

    pub fn try_compare_excluding(&self, a: &str, b: &str, excluding: &[&str]) -> Result<Relation> {
        self.search(a, b, excluding)
    }

    fn search(&self, a: &str, b: &str, excluding: &[&str]) -> Result<Relation> {
        let (ha, hb) = (self.arena.get(a), self.arena.get(b));
        if let Some(relation) = self.resolve(ha, hb) {
            return Ok(relation);
        }
        let (Some(ha), Some(hb)) = (ha, hb) else {
            return Ok(Relation::EqualTo);
        };

        let mut visited: FxHashSet<NodeHandle> = excluding
            .iter()
            .filter_map(|id| self.arena.get(id))
            .collect();
        visited.insert(ha);
        visited.insert(hb);

        let limit = self.config.max_search_depth;
        let mut truncated = false;
        let mut queue = VecDeque::new();
        self.expand(ha, 0, limit, &mut visited, &mut queue, &mut truncated);

        while let Some((node, depth)) = queue.pop_front() {
            if let Some(relation) = self.resolve(Some(node), Some(hb)) {
                trace!(
                    "[GRAPH] {} {} {} via {} at depth {}",
                    a,
                    relation,
                    b,
                    self.arena.resolve(node),
                    depth
                );
                return Ok(relation);
            }
            self.expand(node, depth, limit, &mut visited, &mut queue, &mut truncated);
        }

        if truncated {
            return Err(Error::UnboundedRecursion {
                a: a.into(),
                b: b.into(),
                limit,
            });
        }
        Ok(Relation::EqualTo)
    }

    /// Rules 1–3: weights, the always-first marker, then the direct edge.
    fn resolve(&self, a: Option<NodeHandle>, b: Option<NodeHandle>) -> Option<Relation> {
        let weight_a = a.and_then(|h| self.weights.get(&h).copied());
        let weight_b = b.and_then(|h| self.weights.get(&h).copied());
        if let Some(weight_a) = weight_a {
            if let Some(weight_b) = weight_b {
                return Some(weight_a.cmp(&weight_b).into());
            }
            if weight_a == ALWAYS_FIRST {
                return Some(Relation::LessThan);
            }
        }
        let (a, b) = (a?, b?);
        self.relations[a.index()].get(&b).copied()
    }

    fn expand(
        &self,
        node: NodeHandle,
        depth: usize,
        limit: usize,
        visited: &mut FxHashSet<NodeHandle>,
        queue: &mut VecDeque<(NodeHandle, usize)>,
        truncated: &mut bool,
    ) {
        for peer in self.successors(node) {
            if visited.contains(&peer) {
                continue;
            }
            if depth >= limit {
                *truncated = true;
                return;
            }
            visited.insert(peer);
            queue.push_back((peer, depth + 1));
        }
    }

    fn successors(&self, node: NodeHandle) -> impl Iterator<Item = NodeHandle> + '_ {
        self.relations[node.index()]
            .iter()
            .filter(|(_, relation)| **relation == Relation::LessThan)
            .map(|(&peer, _)| peer)
    }

    /// Check if `from < ... < to` along recorded `LessThan` edges.
    pub(super) fn precedes(&self, from: &str, to: &str) -> bool {
        let (Some(from), Some(to)) = (self.arena.get(from), self.arena.get(to)) else {
            return false;
        };
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::from([from]);
        visited.insert(from);
        while let Some(node) = queue.pop_front() {
            for peer in self.successors(node) {
                if peer == to {
                    return true;
                }
                if visited.insert(peer) {
                    queue.push_back(peer);
                }
            }
        }
        false
    }
}

impl<T: HasId> RelationGraph<T> {
    /// Compare two nodes by their ids.
    pub fn compare_nodes(&self, a: &T, b: &T) -> Relation {
        self.compare(a.id(), b.id())
    }

    /// The node collection sorted by [`compare`](Self::compare).
    ///
    /// The sort is stable, so nodes comparing `EqualTo` keep their relative
    /// order. `reversed` reads `GreaterThan` as "goes first" instead of
    /// `LessThan`.
    pub fn ordered_sequence(&self, reversed: bool) -> Vec<&T> {
        let first = if reversed {
            Relation::GreaterThan
        } else {
            Relation::LessThan
        };
        let nodes: Vec<&T> = self.nodes.iter().collect();
        merge_sort(nodes, &mut |x: &T, y: &T| self.compare(x.id(), y.id()) == first)
    }
}

/// Stable top-down merge sort that tolerates inconsistent comparators.
///
/// `slice::sort_by` may panic when the comparison is not a total order,
/// which a relation table with contradictions or gaps does not guarantee.
fn merge_sort<'a, T>(mut items: Vec<&'a T>, is_less: &mut impl FnMut(&T, &T) -> bool) -> Vec<&'a T> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, is_less);
    let right = merge_sort(right, is_less);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(*r, *l),
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
