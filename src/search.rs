use std::fmt;

use crate::closed_set::ClosedSet;
use crate::error::SolveError;
use crate::fingerprint::Fingerprint;
use crate::heuristic::Manhattan;
use crate::open_set::OpenSet;
use crate::path::{reconstruct, Solution};
use crate::puzzle::{Board, Move};

/// Tunables for a single search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Entries reserved up front in the frontier heap.
    pub open_capacity: usize,
    /// Requested closed-set size; rounded up to a prime.
    pub closed_capacity: usize,
    /// Closed-set load factor that triggers a rehash, strictly between 0 and 1.
    pub max_load_factor: f32,
    /// Give up with [`Outcome::LimitReached`] after this many expansions.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            open_capacity: 1000,
            closed_capacity: 1000,
            max_load_factor: 0.7,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn with_open_capacity(mut self, open_capacity: usize) -> Self {
        self.open_capacity = open_capacity;
        self
    }

    pub fn with_closed_capacity(mut self, closed_capacity: usize) -> Self {
        self.closed_capacity = closed_capacity;
        self
    }

    pub fn with_max_load_factor(mut self, max_load_factor: f32) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// The load factor is checked by [`ClosedSet::with_capacity`].
    fn validate(&self) -> Result<(), SolveError> {
        if self.open_capacity == 0 {
            return Err(SolveError::InvalidConfig {
                reason: "open set capacity must be positive",
            });
        }
        if self.closed_capacity == 0 {
            return Err(SolveError::InvalidConfig {
                reason: "closed set capacity must be positive",
            });
        }
        Ok(())
    }
}

/// Position of a node in the search arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// One generated state. Written once, never touched again.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) board: Board,
    pub(crate) parent: Option<NodeId>,
    /// `None` for the root.
    pub(crate) movement: Option<Move>,
    pub(crate) g: u32,
    pub(crate) f: u32,
}

/// Owns every node of a search; all of them are dropped together.
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    fn with_capacity(capacity: usize) -> Result<Self, SolveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve(capacity)?;
        Ok(Self { nodes })
    }

    fn alloc(&mut self, node: Node) -> Result<NodeId, SolveError> {
        self.nodes.try_reserve(1)?;
        self.nodes.push(node);
        Ok(NodeId(self.nodes.len() - 1))
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expanded: usize,
    /// Child nodes pushed onto the frontier.
    pub generated: usize,
    /// Frontier pops whose board had already been settled by a cheaper copy.
    pub skipped_stale: usize,
    /// Successors dropped because their board was already settled.
    pub skipped_closed: usize,
    pub max_open_len: usize,
    /// Settled boards when the search stopped.
    pub closed_len: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded {}, generated {}, stale {}, pruned {}, peak frontier {}, settled {}",
            self.expanded,
            self.generated,
            self.skipped_stale,
            self.skipped_closed,
            self.max_open_len,
            self.closed_len
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// Every reachable board was settled without meeting the goal.
    Exhausted,
    /// `max_expansions` ran out first.
    LimitReached { expanded: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// A* from one board to another.
///
/// A freshly built `Search` has its root on the frontier; [`Search::run`]
/// drives it to a terminal outcome in one call. Each instance owns its own
/// frontier, closed set and node arena.
pub struct Search {
    goal: Fingerprint,
    heuristic: Manhattan,
    open: OpenSet<NodeId>,
    closed: ClosedSet,
    arena: Arena,
    stats: SearchStats,
    max_expansions: Option<usize>,
}

impl Search {
    pub fn new(initial: Board, goal: Board, config: SearchConfig) -> Result<Self, SolveError> {
        config.validate()?;

        let heuristic = Manhattan::new(&goal);
        let mut open = OpenSet::with_capacity(config.open_capacity)?;
        let closed = ClosedSet::with_capacity(config.closed_capacity, config.max_load_factor)?;
        let mut arena = Arena::with_capacity(config.open_capacity)?;

        let h = heuristic.estimate(&initial);
        let root = arena.alloc(Node {
            board: initial,
            parent: None,
            movement: None,
            g: 0,
            f: h,
        })?;
        open.push(h, root)?;

        log::debug!(
            "search from {:?} to {:?}, root estimate {}",
            initial,
            goal,
            h
        );

        Ok(Self {
            goal: goal.fingerprint(),
            heuristic,
            open,
            closed,
            arena,
            stats: SearchStats {
                max_open_len: 1,
                ..SearchStats::default()
            },
            max_expansions: config.max_expansions,
        })
    }

    pub fn run(mut self) -> Result<SearchReport, SolveError> {
        let outcome = self.drive()?;
        self.stats.closed_len = self.closed.len();

        match &outcome {
            Outcome::Solved(solution) => {
                log::info!("solved in {} moves ({})", solution.cost(), self.stats)
            }
            Outcome::Exhausted => log::info!("no solution ({})", self.stats),
            Outcome::LimitReached { .. } => log::info!("expansion limit reached ({})", self.stats),
        }
        log::trace!("final frontier: {:?}", self.open);

        Ok(SearchReport {
            outcome,
            stats: self.stats,
        })
    }

    fn drive(&mut self) -> Result<Outcome, SolveError> {
        while let Some((_, id)) = self.open.pop_min() {
            let node = *self.arena.get(id);
            let fingerprint = node.board.fingerprint();

            if !self.closed.insert(fingerprint)? {
                self.stats.skipped_stale += 1;
                continue;
            }

            if fingerprint == self.goal {
                return Ok(Outcome::Solved(reconstruct(&self.arena, id)));
            }

            if self.max_expansions == Some(self.stats.expanded) {
                return Ok(Outcome::LimitReached {
                    expanded: self.stats.expanded,
                });
            }

            self.expand(id, &node)?;
        }

        Ok(Outcome::Exhausted)
    }

    fn expand(&mut self, id: NodeId, node: &Node) -> Result<(), SolveError> {
        self.stats.expanded += 1;
        log::trace!("expand {:?} g={} f={}", node.board, node.g, node.f);

        for (movement, board) in node.board.successors() {
            if self.closed.contains(board.fingerprint()) {
                self.stats.skipped_closed += 1;
                continue;
            }

            let g = node.g + 1;
            let f = g + self.heuristic.estimate(&board);
            let child = self.arena.alloc(Node {
                board,
                parent: Some(id),
                movement: Some(movement),
                g,
                f,
            })?;

            self.open.push(f, child)?;
            self.stats.generated += 1;
        }

        self.stats.max_open_len = self.stats.max_open_len.max(self.open.len());
        debug_assert_eq!(self.arena.len(), self.stats.generated + 1);
        Ok(())
    }
}

/// Searches with the default configuration.
pub fn solve(initial: Board, goal: Board) -> Result<SearchReport, SolveError> {
    Search::new(initial, goal, SearchConfig::default())?.run()
}
