//! Node identity and the id arena.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

/// Anything that exposes a stable identifier can be ordered by a graph.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for str {
    fn id(&self) -> &str {
        self
    }
}

impl HasId for &str {
    fn id(&self) -> &str {
        self
    }
}

impl HasId for String {
    fn id(&self) -> &str {
        self.as_str()
    }
}

impl HasId for SmolStr {
    fn id(&self) -> &str {
        self.as_str()
    }
}

/// Index of an interned id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeHandle(u32);

impl NodeHandle {
    /// Panics past `u32::MAX` ids rather than aliasing two ids.
    pub(crate) fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(index) => Self(index),
            Err(_) => panic!("node id arena overflow: index {index} exceeds u32::MAX"),
        }
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Interns ids into dense handles. Handles are never invalidated.
///
/// Holds at most `u32::MAX + 1` distinct ids; interning one more panics.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdArena {
    ids: IndexSet<SmolStr, FxBuildHasher>,
}

impl IdArena {
    pub(crate) fn intern(&mut self, id: &str) -> NodeHandle {
        if let Some(index) = self.ids.get_index_of(id) {
            return NodeHandle::from_index(index);
        }
        let (index, _) = self.ids.insert_full(SmolStr::new(id));
        NodeHandle::from_index(index)
    }

    pub(crate) fn get(&self, id: &str) -> Option<NodeHandle> {
        self.ids.get_index_of(id).map(NodeHandle::from_index)
    }

    pub(crate) fn resolve(&self, handle: NodeHandle) -> &SmolStr {
        &self.ids[handle.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}
