//! Per-run analysis state.
//!
//! Scores, initialization flags, ancestor levels and data-table marks are kept
//! in a side table keyed by `NodeId` instead of being written into the tree.
//! A `ScoreStore` lives for one extraction call and is dropped with it.

use std::collections::HashMap;

use dom_query::{NodeId, NodeRef};

use crate::options::Flags;
use crate::scoring;

/// Analysis metadata of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeMeta {
    pub content_score: f64,
    pub initialized: bool,
    /// Distance (0 = parent) at which the node was first reached from a
    /// scored paragraph.
    pub level: usize,
    pub is_data_table: bool,
}

/// Side table of [`NodeMeta`] for one extraction run.
///
/// Initialized nodes are remembered in first-touch order; they are the
/// candidates the selector ranks.
#[derive(Debug)]
pub struct ScoreStore {
    meta: HashMap<NodeId, NodeMeta>,
    candidates: Vec<NodeId>,
    flags: Flags,
}

impl ScoreStore {
    #[must_use]
    pub fn new(flags: Flags) -> Self {
        Self {
            meta: HashMap::new(),
            candidates: Vec::new(),
            flags,
        }
    }

    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&NodeMeta> {
        self.meta.get(&id)
    }

    #[must_use]
    pub fn is_initialized(&self, id: NodeId) -> bool {
        self.meta.get(&id).is_some_and(|m| m.initialized)
    }

    /// Content score, `0.0` for nodes never touched.
    #[must_use]
    pub fn score(&self, id: NodeId) -> f64 {
        self.meta.get(&id).map_or(0.0, |m| m.content_score)
    }

    pub fn set_score(&mut self, id: NodeId, score: f64) {
        self.meta.entry(id).or_default().content_score = score;
    }

    /// Initialize `node` with its type bonus and class weight unless it
    /// already is. Returns `true` when this call did the initialization.
    pub fn initialize(&mut self, node: &NodeRef, level: usize) -> bool {
        if self.is_initialized(node.id) {
            return false;
        }
        let score = scoring::initial_score(node, self.flags);
        let meta = self.meta.entry(node.id).or_default();
        meta.content_score = score;
        meta.initialized = true;
        meta.level = level;
        self.candidates.push(node.id);
        true
    }

    /// Add `delta` to the score of `node`, initializing it first if needed.
    pub fn add_score(&mut self, node: &NodeRef, level: usize, delta: f64) {
        self.initialize(node, level);
        self.meta.entry(node.id).or_default().content_score += delta;
    }

    /// Initialized nodes in first-touch order.
    #[must_use]
    pub fn candidates(&self) -> &[NodeId] {
        &self.candidates
    }

    pub fn set_data_table(&mut self, id: NodeId, is_data_table: bool) {
        self.meta.entry(id).or_default().is_data_table = is_data_table;
    }

    #[must_use]
    pub fn is_data_table(&self, id: NodeId) -> bool {
        self.meta.get(&id).is_some_and(|m| m.is_data_table)
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new(Flags::default())
    }
}
