//! A* and IDA* over an arena of puzzle states.
//!
//! Nodes live in a growable vector and refer to their parents by index, so
//! path reconstruction and ancestor checks are plain lookups with no
//! ownership cycles. Both algorithms run iteratively with explicit
//! stacks/queues; nothing here recurses.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::trace;

use crate::board::{Board, Move};
use crate::goal::{self, MatchMode};
use crate::heuristic;

/// Weight applied to `h` in weighted scoring. Larger values push the
/// search harder toward the goal at the cost of longer solutions; 2 keeps
/// 4x4 and 5x5 ring phases tractable.
const HEURISTIC_WEIGHT: u32 = 2;

/// Threshold sentinel meaning "no feasible continuation".
const INFEASIBLE: u32 = u32::MAX;

/// How open states are ranked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scoring {
    /// `f = g + h`: admissible, returns shortest paths.
    Optimal,
    /// `f = g + 2h`: inadmissible, trades optimality for speed.
    Weighted,
}

impl Scoring {
    fn f(self, g: u32, h: u32) -> u32 {
        match self {
            Scoring::Optimal => g + h,
            Scoring::Weighted => g + HEURISTIC_WEIGHT * h,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search space exhausted without reaching the goal")]
    Exhausted,
}

pub type NodeId = usize;

/// One search state: a board plus its bookkeeping. The parent link is an
/// arena index, never an owning reference.
pub struct Node {
    pub board: Board,
    pub g: u32,
    pub h: u32,
    pub parent: Option<NodeId>,
    pub incoming: Option<Move>,
}

/// Flat store for every node a search allocates.
#[derive(Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Arena {
        Arena { nodes: Vec::new() }
    }

    /// Installs a search root with `g = 0` and a freshly computed heuristic.
    pub fn root(&mut self, board: Board) -> NodeId {
        let h = heuristic::manhattan(&board);
        self.insert(Node {
            board,
            g: 0,
            h,
            parent: None,
            incoming: None,
        })
    }

    /// Child of `parent` reached by `mv`, with the incrementally updated
    /// heuristic.
    fn child(&mut self, parent: NodeId, mv: Move, board: Board) -> NodeId {
        let p = &self.nodes[parent];
        let h = heuristic::incremental(&p.board, p.h, &board);
        let g = p.g + 1;
        self.insert(Node {
            board,
            g,
            h,
            parent: Some(parent),
            incoming: Some(mv),
        })
    }

    fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `board` already occurs on the path from the root to `id`,
    /// inclusive.
    fn on_path(&self, mut id: NodeId, board: &Board) -> bool {
        loop {
            let node = &self.nodes[id];
            if node.board == *board {
                return true;
            }
            match node.parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// Moves from the root to `id`, in execution order. The length always
    /// equals the node's `g`.
    pub fn path_moves(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.nodes[id].g as usize);
        let mut cursor = id;
        while let Some(parent) = self.nodes[cursor].parent {
            if let Some(mv) = self.nodes[cursor].incoming {
                moves.push(mv);
            }
            cursor = parent;
        }
        moves.reverse();
        moves
    }
}

/// Best-first graph search from `root` (already in `arena`).
///
/// Open states sit in a min-heap on `f`; equal `f` breaks toward the lower
/// node id, which is insertion order. Expanded boards enter a closed set
/// keyed by cell contents, so alternate paths to a seen configuration are
/// dropped. The goal test runs when a state is popped.
pub fn astar(
    arena: &mut Arena,
    root: NodeId,
    goal: &Board,
    mode: MatchMode,
    scoring: Scoring,
) -> Result<NodeId, SearchError> {
    let mut open: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    let mut closed: FxHashSet<Board> = FxHashSet::default();

    let root_node = arena.node(root);
    open.push(Reverse((scoring.f(root_node.g, root_node.h), root)));

    while let Some(Reverse((_, id))) = open.pop() {
        if goal::matches(&arena.node(id).board, goal, mode) {
            trace!(expanded = closed.len(), nodes = arena.len(), "goal popped");
            return Ok(id);
        }
        if !closed.insert(arena.node(id).board.clone()) {
            // a cheaper path already expanded this configuration
            continue;
        }
        for (mv, board) in arena.node(id).board.successors() {
            if closed.contains(&board) {
                continue;
            }
            let child = arena.child(id, mv, board);
            let node = arena.node(child);
            open.push(Reverse((scoring.f(node.g, node.h), child)));
        }
    }

    Err(SearchError::Exhausted)
}

/// Iterative-deepening search from `root_board`.
///
/// Each round runs a depth-first traversal with an explicit stack, pruning
/// states whose `f` exceeds the current threshold; the minimum pruned `f`
/// becomes the next threshold. Cycle avoidance is per path: a successor is
/// skipped if its board already occurs among its ancestors. Returns the
/// arena alongside the terminal so the caller can reconstruct the path.
pub fn idastar(
    root_board: Board,
    goal: &Board,
    mode: MatchMode,
    scoring: Scoring,
) -> Result<(Arena, NodeId), SearchError> {
    let mut threshold = scoring.f(0, heuristic::manhattan(&root_board));

    loop {
        // fresh arena per round, so abandoned subtrees are reclaimed
        let mut arena = Arena::new();
        let root = arena.root(root_board.clone());
        let mut stack: Vec<NodeId> = vec![root];
        let mut next = INFEASIBLE;

        while let Some(id) = stack.pop() {
            let node = arena.node(id);
            let f = scoring.f(node.g, node.h);
            if f > threshold {
                if f < next {
                    next = f;
                }
                continue;
            }
            if goal::matches(&node.board, goal, mode) {
                trace!(threshold, nodes = arena.len(), "goal reached");
                return Ok((arena, id));
            }
            for (mv, board) in arena.node(id).board.successors().into_iter().rev() {
                if arena.on_path(id, &board) {
                    continue;
                }
                let child = arena.child(id, mv, board);
                stack.push(child);
            }
        }

        if next == INFEASIBLE {
            return Err(SearchError::Exhausted);
        }
        trace!(old = threshold, new = next, "raising threshold");
        threshold = next;
    }
}
