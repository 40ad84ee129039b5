//! Exhaustive depth-first solver.
//!
//! Explores jumps in `possible_moves()` order and remembers every position
//! proved unable to reach a win, so transpositions are searched once.

use std::hash::Hash;
use std::time::Instant;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace, warn};

use crate::core::{GameRng, Move};
use crate::rules::PegBoard;

use super::config::SolverConfig;
use super::playout::{random_playout, PlayoutSummary};
use super::stats::SolveStats;

/// How a solve ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// A winning line, first jump first. Empty if the board is already won.
    Solved(Vec<Move>),
    /// No sequence of jumps wins from this position.
    Unsolvable,
    /// The node budget ran out first.
    Exhausted,
}

impl SolveOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

/// Outcome plus the statistics of the search that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub stats: SolveStats,
}

/// Budget hit; unwinds the search.
struct BudgetExhausted;

/// Solver entry point.
///
/// Generic over the board shape; any `PegBoard` that can be cloned and
/// hashed can be solved.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for a winning line from `board`.
    #[instrument(skip_all, fields(max_nodes = self.config.max_nodes))]
    pub fn solve<B>(&self, board: &B) -> SolveReport
    where
        B: PegBoard + Clone + Eq + Hash,
    {
        let start = Instant::now();
        let mut search = Search {
            config: &self.config,
            dead: FxHashSet::default(),
            line: Vec::new(),
            stats: SolveStats::default(),
        };

        let outcome = match search.run(board) {
            Ok(true) => SolveOutcome::Solved(search.line),
            Ok(false) => SolveOutcome::Unsolvable,
            Err(BudgetExhausted) => SolveOutcome::Exhausted,
        };

        let mut stats = search.stats;
        stats.dead_positions = search.dead.len();
        stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            ?outcome,
            nodes = stats.nodes,
            nodes_per_second = stats.nodes_per_second(),
            hit_rate = stats.hit_rate(),
            "Solve finished"
        );

        SolveReport { outcome, stats }
    }

    /// First jump of a winning line, if one exists within budget.
    pub fn hint<B>(&self, board: &B) -> Option<Move>
    where
        B: PegBoard + Clone + Eq + Hash,
    {
        match self.solve(board).outcome {
            SolveOutcome::Solved(line) => line.first().copied(),
            SolveOutcome::Unsolvable | SolveOutcome::Exhausted => None,
        }
    }

    /// Run `config.playouts` random games from `board` and tally them.
    ///
    /// Each playout uses its own fork of the configured seed.
    pub fn sample<B>(&self, board: &B) -> PlayoutSummary
    where
        B: PegBoard + Clone,
    {
        let mut rng = GameRng::new(self.config.seed);
        let mut summary = PlayoutSummary::default();

        for _ in 0..self.config.playouts {
            let mut game = board.clone();
            let mut playout_rng = rng.fork();
            match random_playout(&mut game, &mut playout_rng) {
                Ok(playout) => summary.record(&playout),
                Err(err) => warn!(%err, "Playout aborted"),
            }
        }

        summary
    }
}

struct Search<'a, B> {
    config: &'a SolverConfig,
    dead: FxHashSet<B>,
    line: Vec<Move>,
    stats: SolveStats,
}

/// A position still being explored, with the jumps not yet tried.
struct Frame<B> {
    board: B,
    untried: std::vec::IntoIter<Move>,
}

impl<B: PegBoard> Frame<B> {
    fn new(board: B) -> Self {
        let untried = board.possible_moves().into_iter();
        Self { board, untried }
    }
}

impl<B> Search<'_, B>
where
    B: PegBoard + Clone + Eq + Hash,
{
    /// Depth-first search on an explicit stack of frames.
    ///
    /// `line` always holds the jumps leading from the root to the top frame.
    fn run(&mut self, root: &B) -> Result<bool, BudgetExhausted> {
        if let Some(decided) = self.enter(root, 0)? {
            return Ok(decided);
        }
        let mut stack = vec![Frame::new(root.clone())];

        while let Some(frame) = stack.last_mut() {
            let Some(mv) = frame.untried.next() else {
                if let Some(frame) = stack.pop() {
                    self.dead.insert(frame.board);
                }
                self.line.pop();
                continue;
            };

            let mut next = frame.board.clone();
            if next.make_move(mv).is_err() {
                continue;
            }

            self.line.push(mv);
            match self.enter(&next, stack.len())? {
                Some(true) => return Ok(true),
                Some(false) => {
                    self.line.pop();
                }
                None => stack.push(Frame::new(next)),
            }
        }

        Ok(false)
    }

    /// Count a visit and settle it if possible.
    ///
    /// `None` means the position needs its jumps explored.
    fn enter(&mut self, board: &B, depth: usize) -> Result<Option<bool>, BudgetExhausted> {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        if self.config.max_nodes > 0 && self.stats.nodes > self.config.max_nodes {
            return Err(BudgetExhausted);
        }

        if board.peg_count() == 1 {
            return Ok(Some(
                self.config.target.map_or(true, |target| board.is_peg(target)),
            ));
        }

        if self.dead.contains(board) {
            self.stats.transposition_hits += 1;
            return Ok(Some(false));
        }

        Ok(None)
    }
}
