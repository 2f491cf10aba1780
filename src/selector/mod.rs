//! Candidate Selection
//!
//! Turns the scored ancestors into one top candidate: ranks them by
//! link-density-scaled score, promotes a shared ancestor of several strong
//! candidates, climbs to better-scoring parents and collapses only-child
//! chains. Sibling inclusion lives in [`siblings`].

use dom_query::NodeRef;

use crate::dom;
use crate::extractor::state::ScoreStore;
use crate::link_density::link_density;

pub mod siblings;

pub use siblings::gather_siblings;

/// Strong candidates that must share an ancestor before it is promoted.
pub const MINIMUM_TOP_CANDIDATES: usize = 3;

/// Score ratio (to the best) a candidate needs to count toward promotion.
const ALTERNATIVE_SCORE_RATIO: f64 = 0.75;

/// How far up a candidate's ancestors are compared during promotion.
const ALTERNATIVE_ANCESTOR_DEPTH: usize = 3;

/// A ranked candidate. Exists only while ranking.
#[derive(Clone, Copy)]
struct Candidate<'a> {
    node: NodeRef<'a>,
    score: f64,
    link_density: f64,
}

/// The chosen content root.
#[derive(Clone, Copy)]
pub struct TopCandidate<'a> {
    pub node: NodeRef<'a>,
    /// `true` when no candidate qualified and `node` is a fabricated `<div>`
    /// holding all of body's children.
    pub fabricated: bool,
}

/// Pick the top candidate among the initialized nodes in `store`.
///
/// Every candidate's stored score is replaced by its link-density-scaled
/// score. Falls back to a fabricated `<div>` when nothing was scored or the
/// best candidate is `<body>` itself.
pub fn select_top_candidate<'a>(
    body: &NodeRef<'a>,
    store: &mut ScoreStore,
    n_top_candidates: usize,
) -> TopCandidate<'a> {
    let top_candidates = rank_candidates(body, store, n_top_candidates);

    let Some(best) = top_candidates.first().filter(|c| c.node.id != body.id) else {
        tracing::debug!("no usable candidate, wrapping body children");
        let div = dom::create_element(body, "div");
        dom::move_children(body, &div);
        dom::append_child(body, &div);
        store.initialize(&div, 0);
        return TopCandidate {
            node: div,
            fabricated: true,
        };
    };

    tracing::debug!(
        score = best.score,
        link_density = best.link_density,
        candidates = top_candidates.len(),
        "best ranked candidate"
    );

    let mut top = promote_shared_ancestor(best, &top_candidates[1..], body, store);
    store.initialize(&top, 0);

    top = climb_ancestors(top, body, store);
    top = collapse_only_children(top, body);
    store.initialize(&top, 0);

    tracing::debug!(
        tag = %dom::tag_name(&top).unwrap_or_default(),
        score = store.score(top.id),
        "top candidate selected"
    );

    TopCandidate {
        node: top,
        fabricated: false,
    }
}

/// Scale every candidate by `1 - link_density` and keep the best `n`, best
/// first. Equal scores keep their first-touch order.
fn rank_candidates<'a>(body: &NodeRef<'a>, store: &mut ScoreStore, n: usize) -> Vec<Candidate<'a>> {
    let ids = store.candidates().to_vec();
    let mut top: Vec<Candidate<'a>> = Vec::with_capacity(n + 1);

    for id in ids {
        let node = dom::node_ref(body, id);
        if !dom::is_within(&node, body) {
            continue;
        }
        let link_density = link_density(&node);
        let score = store.score(id) * (1.0 - link_density);
        store.set_score(id, score);

        tracing::trace!(
            tag = %dom::tag_name(&node).unwrap_or_default(),
            score,
            link_density,
            "candidate"
        );

        let position = top.iter().position(|c| score > c.score).unwrap_or(top.len());
        if position < n {
            top.insert(
                position,
                Candidate {
                    node,
                    score,
                    link_density,
                },
            );
            top.truncate(n);
        }
    }
    top
}

/// Promote the nearest ancestor of `best` (below `<body>`) that at least
/// [`MINIMUM_TOP_CANDIDATES`] strong alternatives also have among their
/// nearest ancestors. Returns `best` when there is none.
fn promote_shared_ancestor<'a>(
    best: &Candidate<'a>,
    others: &[Candidate<'a>],
    body: &NodeRef<'a>,
    store: &ScoreStore,
) -> NodeRef<'a> {
    let top_score = store.score(best.node.id);
    let alternative_ancestors: Vec<Vec<_>> = others
        .iter()
        .filter(|c| top_score != 0.0 && store.score(c.node.id) / top_score >= ALTERNATIVE_SCORE_RATIO)
        .map(|c| {
            dom::ancestors(&c.node, ALTERNATIVE_ANCESTOR_DEPTH)
                .iter()
                .map(|a| a.id)
                .collect()
        })
        .collect();

    if alternative_ancestors.len() < MINIMUM_TOP_CANDIDATES {
        return best.node;
    }

    let mut parent = dom::parent_element(&best.node);
    while let Some(p) = parent.filter(|p| p.id != body.id) {
        let lists_containing = alternative_ancestors
            .iter()
            .filter(|list| list.contains(&p.id))
            .count();
        if lists_containing >= MINIMUM_TOP_CANDIDATES {
            tracing::debug!(lists = lists_containing, "promoting shared ancestor");
            return p;
        }
        parent = dom::parent_element(&p);
    }
    best.node
}

/// Move up while the parent is initialized, not `<body>`, scores at least a
/// third of the starting score and strictly more than the current node.
fn climb_ancestors<'a>(top: NodeRef<'a>, body: &NodeRef<'a>, store: &ScoreStore) -> NodeRef<'a> {
    let score_floor = store.score(top.id) / 3.0;
    let mut current = top;
    while let Some(parent) = dom::parent_element(&current) {
        if parent.id == body.id || !store.is_initialized(parent.id) {
            break;
        }
        let parent_score = store.score(parent.id);
        if parent_score < score_floor || parent_score <= store.score(current.id) {
            break;
        }
        current = parent;
    }
    current
}

/// Move up while the current node is its parent's only element child.
fn collapse_only_children<'a>(top: NodeRef<'a>, body: &NodeRef<'a>) -> NodeRef<'a> {
    let mut current = top;
    while let Some(parent) = dom::parent_element(&current) {
        if parent.id == body.id || dom::element_children(&parent).len() != 1 {
            break;
        }
        current = parent;
    }
    current
}
