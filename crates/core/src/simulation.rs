//! Simulation module - the tick-driven game controller
//!
//! [`Simulation`] owns the grid, the active piece, the level counters and the piece
//! source. It is the only place where state changes over time; every other module is
//! a pure function over the values it hands them.
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted --start--> Running --spawn blocked--> GameOver
//!      ^                   |                          |
//!      +------restart------+----------restart---------+
//! ```
//!
//! While `Running`, each [`Simulation::tick`] moves the active piece down one row.
//! When that move is blocked the piece is merged into the grid, full rows are swept,
//! the level counters are updated and the next piece spawns at row 0, column 4.
//! If the new piece already overlaps the grid the game is over.
//!
//! Moves and rotations that would collide are silently ignored. Rotation has no
//! wall kicks: the turned shape must fit at the current offset.

use tracing::{debug, info};

use crate::catalog::template;
use crate::collision::{collides, Offset};
use crate::config::SimConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::placement::{merge, sweep};
use crate::rng::{PieceSource, RandomPieces};
use crate::rotation::rotate;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, MoveDir, PieceKind, RotateDir, SimStatus, SPAWN_COL, SPAWN_ROW};

/// Offset every new piece spawns at
pub const SPAWN_OFFSET: Offset = Offset::new(SPAWN_ROW as i16, SPAWN_COL as i16);

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub offset: Offset,
}

impl ActivePiece {
    /// A piece of `kind` in spawn orientation at the spawn offset
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: template(kind),
            offset: SPAWN_OFFSET,
        }
    }
}

/// What a gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or the drop interval has not elapsed yet
    Idle,
    /// The piece fell one row
    Moved,
    /// The piece landed, was merged, and a new piece spawned
    Locked { lines_cleared: u32, leveled_up: bool },
    /// The piece landed and its successor could not spawn
    GameOver { lines_cleared: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Simulation<P: PieceSource = RandomPieces> {
    config: SimConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    status: SimStatus,
    level: u32,
    rows_since_level_up: u32,
    lines_cleared: u32,
    pieces_spawned: u32,
    drop_timer_ms: u32,
    source: P,
}

impl Simulation<RandomPieces> {
    /// New game with uniformly random pieces seeded from `config.seed` (1 if unset)
    pub fn new(config: SimConfig) -> Self {
        let seed = config.seed.unwrap_or(1);
        Self::with_source(config, RandomPieces::new(seed))
    }
}

impl Default for Simulation<RandomPieces> {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl<P: PieceSource> Simulation<P> {
    pub fn with_source(config: SimConfig, source: P) -> Self {
        Self {
            config,
            grid: Grid::new(),
            active: None,
            status: SimStatus::NotStarted,
            level: 1,
            rows_since_level_up: 0,
            lines_cleared: 0,
            pieces_spawned: 0,
            drop_timer_ms: 0,
            source,
        }
    }

    /// Start from a pre-filled grid. Restart still clears it.
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rows_since_level_up(&self) -> u32 {
        self.rows_since_level_up
    }

    /// Lines cleared since the game started, across level-ups
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Current gravity period
    pub fn drop_interval_ms(&self) -> u32 {
        self.config.drop_interval_ms(self.level)
    }

    /// Leave `NotStarted` and spawn the first piece.
    ///
    /// Returns false (and does nothing) from any other state.
    pub fn start(&mut self) -> bool {
        if self.status != SimStatus::NotStarted {
            return false;
        }
        self.status = SimStatus::Running;
        info!(level = self.level, "game started");
        self.spawn_piece();
        true
    }

    /// Back to `NotStarted` with a fresh grid, level 1 and zeroed counters.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.active = None;
        self.status = SimStatus::NotStarted;
        self.level = 1;
        self.rows_since_level_up = 0;
        self.lines_cleared = 0;
        self.pieces_spawned = 0;
        self.drop_timer_ms = 0;
        self.source.reset();
        info!("game reset");
    }

    /// Spawn the next piece; enters `GameOver` if it overlaps the grid.
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.source.next_piece());
        self.drop_timer_ms = 0;

        if collides(&self.grid, &piece.shape, piece.offset) {
            self.active = None;
            self.status = SimStatus::GameOver;
            info!(
                kind = piece.kind.as_str(),
                level = self.level,
                lines = self.lines_cleared,
                "spawn blocked, game over"
            );
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!(kind = piece.kind.as_str(), "spawned piece");
        true
    }

    /// One gravity step: fall a row, or land and spawn the next piece.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.status != SimStatus::Running {
            return Ok(TickOutcome::Idle);
        }
        let Some(active) = self.active else {
            return Ok(TickOutcome::Idle);
        };

        let below = active.offset.shifted(1, 0);
        if !collides(&self.grid, &active.shape, below) {
            self.active = Some(ActivePiece {
                offset: below,
                ..active
            });
            return Ok(TickOutcome::Moved);
        }

        self.lock_piece(active)
    }

    /// Merge `piece` at its offset, sweep, update levels, spawn the successor.
    fn lock_piece(&mut self, piece: ActivePiece) -> Result<TickOutcome> {
        merge(&mut self.grid, &piece.shape, piece.offset)?;
        self.active = None;

        let lines_cleared = sweep(&mut self.grid)?;
        debug!(
            kind = piece.kind.as_str(),
            row = piece.offset.row,
            col = piece.offset.col,
            lines_cleared,
            "piece locked"
        );
        let leveled_up = self.record_cleared(lines_cleared);

        if !self.spawn_piece() {
            return Ok(TickOutcome::GameOver { lines_cleared });
        }

        Ok(TickOutcome::Locked {
            lines_cleared,
            leveled_up,
        })
    }

    /// Add cleared lines to the counters; true if the level went up.
    fn record_cleared(&mut self, lines: u32) -> bool {
        if lines == 0 {
            return false;
        }
        self.lines_cleared = self.lines_cleared.saturating_add(lines);
        self.rows_since_level_up = self.rows_since_level_up.saturating_add(lines);

        if self.rows_since_level_up < self.config.lines_for_level(self.level) {
            return false;
        }

        self.level = self.level.saturating_add(1);
        self.rows_since_level_up = 0;
        info!(
            level = self.level,
            drop_interval_ms = self.drop_interval_ms(),
            "level up"
        );
        true
    }

    /// Shift the active piece one column; false if blocked or not running.
    pub fn move_piece(&mut self, dir: MoveDir) -> bool {
        if self.status != SimStatus::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let target = active.offset.shifted(0, dir.dx() as i16);
        if collides(&self.grid, &active.shape, target) {
            return false;
        }
        self.active = Some(ActivePiece {
            offset: target,
            ..active
        });
        true
    }

    /// Turn the active piece in place; false if the turned shape does not fit.
    pub fn rotate_piece(&mut self, dir: RotateDir) -> bool {
        if self.status != SimStatus::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let turned = rotate(&active.shape, dir);
        if turned.is_empty() || collides(&self.grid, &turned, active.offset) {
            return false;
        }
        self.active = Some(ActivePiece {
            shape: turned,
            ..active
        });
        true
    }

    /// Run one extra gravity step right now. The drop timer is left alone.
    pub fn soft_drop(&mut self) -> Result<TickOutcome> {
        self.tick()
    }

    /// Fixed-rate driver: accumulate `elapsed_ms` and tick once the level's drop
    /// interval has passed.
    ///
    /// Time past the interval carries into the next step, so gravity keeps the
    /// level's period even when frames do not divide it. At most one step runs per
    /// call; a backlog of whole intervals is dropped.
    pub fn advance(&mut self, elapsed_ms: u32) -> Result<TickOutcome> {
        if self.status != SimStatus::Running {
            return Ok(TickOutcome::Idle);
        }

        let interval = self.drop_interval_ms();
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < interval {
            return Ok(TickOutcome::Idle);
        }

        self.drop_timer_ms %= interval;
        self.tick()
    }

    /// Apply a command. Returns whether the state changed.
    pub fn apply_command(&mut self, command: Command) -> Result<bool> {
        let changed = match command {
            Command::Start => self.start(),
            Command::MoveLeft => self.move_piece(MoveDir::Left),
            Command::MoveRight => self.move_piece(MoveDir::Right),
            Command::SoftDrop => self.soft_drop()? != TickOutcome::Idle,
            Command::RotateCw => self.rotate_piece(RotateDir::Cw),
            Command::RotateCcw => self.rotate_piece(RotateDir::Ccw),
            Command::Restart => {
                self.restart();
                true
            }
        };
        Ok(changed)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.status = self.status;
        out.level = self.level;
        out.rows_since_level_up = self.rows_since_level_up;
        out.lines_cleared = self.lines_cleared;
        out.pieces_spawned = self.pieces_spawned;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
