//! Turn orchestration: alternating automated sides, win detection and
//! the move log.

use log::{debug, info};
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::common::GameError;
use crate::grid::{Cell, Grid};
use crate::placement::place_fleet;
use crate::strategy::{HuntStrategy, Targeting};
use crate::tracker::AttackTracker;

/// One of the two competing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Position of this side in the per-side arrays of [`GameState`].
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Whether the match still accepts moves. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Continue,
    Over,
}

/// What the caller should do after a tick: keep ticking or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Halted,
}

/// One resolved move, in match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub x: usize,
    pub y: usize,
    pub hit: bool,
}

/// The persistable unit: both fleets, both trackers and the turn flags.
///
/// Targeting memory and the move log live outside it and are not part of
/// a saved snapshot. When `phase` is `Over` the `active` field carries
/// no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub grids: [Grid; 2],
    pub trackers: [AttackTracker; 2],
    pub phase: Phase,
    pub active: Side,
}

impl GameState {
    /// Empty grids and trackers, side A to move.
    pub fn new() -> Self {
        GameState {
            grids: [Grid::new(), Grid::new()],
            trackers: [AttackTracker::new(), AttackTracker::new()],
            phase: Phase::Continue,
            active: Side::A,
        }
    }

    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    pub fn tracker(&self, side: Side) -> &AttackTracker {
        &self.trackers[side.index()]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a match: owns the state, one strategy per side and the log.
///
/// Single-owner access only; an external ticker calls [`advance`]
/// repeatedly and stops once it observes [`Signal::Halted`].
///
/// [`advance`]: MatchEngine::advance
pub struct MatchEngine {
    state: GameState,
    strategies: [Box<dyn Targeting>; 2],
    log: Vec<MoveRecord>,
}

impl MatchEngine {
    /// Fresh match: both fleets placed at random, side A to move.
    pub fn new_match(rng: &mut SmallRng) -> Result<Self, GameError> {
        let mut state = GameState::new();
        place_fleet(rng, &mut state.grids[Side::A.index()])?;
        place_fleet(rng, &mut state.grids[Side::B.index()])?;
        Ok(Self::from_state(state))
    }

    /// Resume a match from a restored state. Hunt memory starts empty
    /// and the log starts fresh; neither is part of a saved snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self::with_strategies(
            state,
            [
                Box::new(HuntStrategy::new()),
                Box::new(HuntStrategy::new()),
            ],
        )
    }

    /// Construct with caller-supplied strategies. Tests use this to
    /// script deterministic target sequences.
    pub fn with_strategies(state: GameState, strategies: [Box<dyn Targeting>; 2]) -> Self {
        MatchEngine {
            state,
            strategies,
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::Over
    }

    /// Whose turn it is; `None` once the match is over.
    pub fn active_side(&self) -> Option<Side> {
        match self.state.phase {
            Phase::Continue => Some(self.state.active),
            Phase::Over => None,
        }
    }

    /// Cell of `side`'s own grid at (x, y).
    pub fn cell(&self, side: Side, x: usize, y: usize) -> Result<Cell, GameError> {
        self.state.grid(side).cell(x, y)
    }

    /// Every resolved move so far, in order.
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.log
    }

    /// Play exactly one move for the active side.
    ///
    /// Chooses a target, marks the attacker's tracker, resolves the shot
    /// against the defender's grid, feeds the result back to the
    /// strategy and appends to the move log. A hit that leaves the
    /// defender with no `Ship` cells ends the match. Calling this on a
    /// finished match is an idempotent no-op returning `Halted`.
    pub fn advance(&mut self, rng: &mut SmallRng) -> Result<Signal, GameError> {
        if self.state.phase == Phase::Over {
            return Ok(Signal::Halted);
        }
        let attacker = self.state.active;
        let defender = attacker.opponent();

        let (x, y) = self.strategies[attacker.index()]
            .choose_target(rng, &self.state.trackers[attacker.index()]);
        if !self.state.trackers[attacker.index()].is_valid_target(x as isize, y as isize) {
            return Err(GameError::InvalidOperation(
                "strategy chose an already-targeted coordinate",
            ));
        }
        self.state.trackers[attacker.index()].mark(x, y)?;

        let result = self.state.grids[defender.index()].receive_shot(x, y)?;
        self.strategies[attacker.index()].report_result((x, y), result);
        self.log.push(MoveRecord {
            side: attacker,
            x,
            y,
            hit: result.is_hit(),
        });
        debug!(
            "{:?} {} at ({}, {})",
            attacker,
            if result.is_hit() { "hit" } else { "missed" },
            x,
            y
        );

        if result.is_hit() && !self.state.grids[defender.index()].has_ship_cells() {
            self.state.phase = Phase::Over;
            info!("{:?} wins after {} moves", attacker, self.log.len());
            return Ok(Signal::Halted);
        }
        self.state.active = defender;
        Ok(Signal::Continue)
    }
}
