//! Game state module - the turn controller
//!
//! This module ties together the grid, movement rules, resolvers, spawn
//! sampling and best-score storage. It owns the single falling block and the
//! settled grid and sequences every turn:
//!
//! ```text
//! Idle -> Spawning -> Falling -> (lock, gravity <-> merge) -> Spawning | GameOver
//! ```
//!
//! Locking and resolving happen inside the call that triggers them
//! (`tick` or `hard_drop`), so they never show up as an observable phase and
//! every snapshot holds a fully settled grid. `&mut self` serializes the
//! timer and player commands; a resolution cannot be re-entered.

use crate::grid::{Block, Grid};
use crate::movement::{can_move_down, can_move_left, can_move_right, landing_row};
use crate::resolve::{is_game_over, settle};
use crate::rng::{sample_spawn_value, RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, LockReport, TimersSnapshot, TurnEvent};
use crate::store::{BestScoreStore, MemoryStore, StoreError};
use crate::types::*;

/// Observable turn phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created, not started.
    Idle,
    /// Waiting for the spawn delay before the next block appears.
    Spawning,
    /// A block is under player and timer control.
    Falling,
    /// Terminal until reset.
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Spawning => "spawning",
            Phase::Falling => "falling",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Complete game state
#[derive(Debug)]
pub struct GameState<R = SimpleRng, S = MemoryStore> {
    difficulty: Difficulty,
    config: DifficultyConfig,
    grid: Grid,
    active: Option<Block>,
    next_value: u32,
    score: u32,
    best_score: u32,
    phase: Phase,
    paused: bool,
    fast_falling: bool,
    fall_timer_ms: u32,
    spawn_delay_ms: u32,
    /// Monotonic block id source; ids are never reused.
    next_block_id: u32,
    /// Monotonic session counter (increments on reset).
    episode_id: u32,
    /// Blocks spawned in this session.
    blocks_spawned: u32,
    /// Last lock/spawn event (consumed by observers).
    last_event: Option<TurnEvent>,
    rng: R,
    /// `None` once the store has failed; best scores are then session-only.
    store: Option<S>,
    store_error: Option<StoreError>,
}

impl GameState {
    /// Create a new game with a seeded RNG and in-memory best scores
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        Self::with_parts(difficulty, SimpleRng::new(seed), MemoryStore::new())
    }
}

impl<R: RandomSource, S: BestScoreStore> GameState<R, S> {
    /// Create a game with injected randomness and best-score storage.
    ///
    /// Draws the first `next_value` and loads the tier's best score.
    pub fn with_parts(difficulty: Difficulty, rng: R, store: S) -> Self {
        Self::assemble(difficulty, Grid::for_difficulty(difficulty), rng, Some(store))
    }

    /// Create a game over a pre-built settled grid (fixtures, replays).
    ///
    /// # Panics
    ///
    /// If the grid shape does not match the tier or the grid is inconsistent.
    pub fn from_grid(difficulty: Difficulty, grid: Grid, rng: R, store: S) -> Self {
        let config = difficulty.config();
        assert_eq!(
            (grid.width(), grid.height()),
            (config.width, config.height),
            "grid shape does not match {:?}",
            difficulty
        );
        assert!(grid.is_consistent(), "grid violates occupancy invariant");
        Self::assemble(difficulty, grid, rng, Some(store))
    }

    fn assemble(difficulty: Difficulty, grid: Grid, mut rng: R, store: Option<S>) -> Self {
        let config = difficulty.config();
        let next_value = sample_spawn_value(&config, &mut rng);
        let next_block_id = grid.max_block_id().wrapping_add(1);

        let mut state = Self {
            difficulty,
            config,
            grid,
            active: None,
            next_value,
            score: 0,
            best_score: 0,
            phase: Phase::Idle,
            paused: false,
            fast_falling: false,
            fall_timer_ms: 0,
            spawn_delay_ms: 0,
            next_block_id,
            episode_id: 0,
            blocks_spawned: 0,
            last_event: None,
            rng,
            store,
            store_error: None,
        };
        state.load_best_score();
        state
    }

    /// Replace this session with a fresh one at another tier.
    ///
    /// Randomness and storage carry over; the new session starts `Idle`.
    pub fn change_difficulty(self, difficulty: Difficulty) -> Self {
        let GameState {
            rng,
            store,
            store_error,
            ..
        } = self;
        let mut next = Self::assemble(difficulty, Grid::for_difficulty(difficulty), rng, store);
        if next.store_error.is_none() {
            next.store_error = store_error;
        }
        next
    }

    /// Start the game and spawn the first block
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.spawn_block();
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Block> {
        self.active
    }

    pub fn next_value(&self) -> u32 {
        self.next_value
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn fast_falling(&self) -> bool {
        self.fast_falling
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn blocks_spawned(&self) -> u32 {
        self.blocks_spawned
    }

    /// True once the store has failed and best scores are session-only.
    pub fn store_degraded(&self) -> bool {
        self.store.is_none()
    }

    /// Take the error that degraded the store, if not yet reported.
    pub fn take_store_error(&mut self) -> Option<StoreError> {
        self.store_error.take()
    }

    /// Take and clear the last lock/spawn event.
    pub fn take_last_event(&mut self) -> Option<TurnEvent> {
        self.last_event.take()
    }

    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    /// Current automatic fall interval
    pub fn fall_interval_ms(&self) -> u32 {
        if self.fast_falling {
            self.config.fast_fall_interval_ms
        } else {
            self.config.fall_interval_ms
        }
    }

    /// Row the active block would land on (hard-drop preview)
    pub fn landing_y(&self) -> Option<u8> {
        self.active.map(|b| landing_row(&self.grid, &b))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.difficulty = self.difficulty;
        out.grid.clone_from(&self.grid);
        out.active = self.active;
        out.landing_y = self.landing_y();
        out.next_value = self.next_value;
        out.score = self.score;
        out.best_score = self.best_score;
        out.phase = self.phase;
        out.paused = self.paused;
        out.game_over = self.game_over();
        out.fast_falling = self.fast_falling;
        out.store_degraded = self.store_degraded();
        out.episode_id = self.episode_id;
        out.blocks_spawned = self.blocks_spawned;
        out.timers = TimersSnapshot {
            fall_ms: self.fall_timer_ms,
            fall_interval_ms: self.fall_interval_ms(),
            spawn_delay_ms: self.spawn_delay_ms,
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn accepts_commands(&self) -> bool {
        !self.paused && self.phase != Phase::GameOver
    }

    /// Place a new block of `next_value` at the top of the centre column.
    ///
    /// An occupied spawn cell ends the game instead; `next_value` is left
    /// untouched in that case. Returns whether a block was spawned.
    pub fn spawn_block(&mut self) -> bool {
        if !self.accepts_commands() || self.active.is_some() {
            return false;
        }

        let pos = Position::new(self.config.spawn_x(), SPAWN_ROW);
        if self.grid.is_occupied(pos) {
            self.last_event = Some(TurnEvent::SpawnBlocked { score: self.score });
            self.enter_game_over();
            return false;
        }

        let mut block = Block::new(self.next_block_id, self.next_value, pos);
        block.is_new = true;
        self.next_block_id = self.next_block_id.wrapping_add(1);
        self.active = Some(block);
        self.next_value = sample_spawn_value(&self.config, &mut self.rng);
        self.blocks_spawned = self.blocks_spawned.wrapping_add(1);

        self.phase = Phase::Falling;
        self.fall_timer_ms = 0;
        self.spawn_delay_ms = 0;
        true
    }

    /// Shift the active block one column left
    pub fn move_left(&mut self) -> bool {
        self.try_shift(can_move_left, |b| b.x -= 1)
    }

    /// Shift the active block one column right
    pub fn move_right(&mut self) -> bool {
        self.try_shift(can_move_right, |b| b.x += 1)
    }

    /// Soft drop: move the active block one row down. Never locks.
    pub fn move_down(&mut self) -> bool {
        self.try_shift(can_move_down, |b| {
            b.y += 1;
            b.is_new = false;
        })
    }

    fn try_shift(&mut self, allowed: fn(&Grid, &Block) -> bool, apply: impl FnOnce(&mut Block)) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(mut block) = self.active else {
            return false;
        };
        if !allowed(&self.grid, &block) {
            return false;
        }
        apply(&mut block);
        self.active = Some(block);
        true
    }

    /// Drop the active block to its landing row and lock it, as one transition.
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(mut block) = self.active else {
            return false;
        };

        block.y = landing_row(&self.grid, &block);
        block.is_new = false;
        self.active = Some(block);
        self.lock_and_resolve();
        true
    }

    pub fn start_fast_fall(&mut self) -> bool {
        if !self.accepts_commands() || self.fast_falling {
            return false;
        }
        self.fast_falling = true;
        // Restart the timer so the new cadence applies immediately.
        self.fall_timer_ms = 0;
        true
    }

    /// Always accepted: releasing the key must work even while paused.
    pub fn stop_fast_fall(&mut self) -> bool {
        if !self.fast_falling {
            return false;
        }
        self.fast_falling = false;
        self.fall_timer_ms = 0;
        true
    }

    /// Flip the pause flag. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Start a new session at the same tier, keeping the best score.
    ///
    /// The first block appears after [`RESET_SPAWN_DELAY_MS`] of ticks.
    pub fn reset(&mut self) {
        self.grid = Grid::for_difficulty(self.difficulty);
        self.active = None;
        self.next_value = sample_spawn_value(&self.config, &mut self.rng);
        self.score = 0;
        self.paused = false;
        self.fast_falling = false;
        self.fall_timer_ms = 0;
        self.spawn_delay_ms = RESET_SPAWN_DELAY_MS;
        self.phase = Phase::Spawning;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.blocks_spawned = 0;
        self.last_event = None;
    }

    /// Fixed-timestep driver.
    ///
    /// Counts down the spawn delay, or advances the fall timer and performs a
    /// fall step when it reaches the current interval. Returns whether the
    /// state changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused {
            return false;
        }

        match self.phase {
            Phase::Idle | Phase::GameOver => false,
            Phase::Spawning => {
                self.spawn_delay_ms = self.spawn_delay_ms.saturating_sub(elapsed_ms);
                if self.spawn_delay_ms > 0 {
                    return false;
                }
                self.spawn_block();
                true
            }
            Phase::Falling => {
                if self.active.is_none() {
                    return false;
                }
                self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
                if self.fall_timer_ms < self.fall_interval_ms() {
                    return false;
                }
                self.fall_timer_ms = 0;
                self.fall_step();
                true
            }
        }
    }

    /// One automatic fall: descend if possible, then lock if resting.
    fn fall_step(&mut self) {
        let Some(mut block) = self.active else {
            return;
        };
        if can_move_down(&self.grid, &block) {
            block.y += 1;
            block.is_new = false;
            self.active = Some(block);
        }
        if !can_move_down(&self.grid, &block) {
            self.lock_and_resolve();
        }
    }

    /// Write the active block into the grid, settle, check for game over,
    /// then spawn the next block.
    fn lock_and_resolve(&mut self) {
        let Some(mut block) = self.active.take() else {
            return;
        };
        block.is_new = false;
        let position = block.position();
        debug_assert!(!self.grid.is_occupied(position), "locking onto an occupied cell");

        self.grid.clear_merging_flags();
        self.grid.set(position, Some(block));

        let resolution = settle(&self.grid);
        self.grid = resolution.grid;
        self.score = self.score.saturating_add(resolution.score_gained);
        debug_assert!(self.grid.is_consistent());

        let game_over = is_game_over(&self.grid);
        let improved = self.raise_best_score();

        self.last_event = Some(TurnEvent::Locked(LockReport {
            block_id: block.id,
            value: block.value,
            position,
            passes: resolution.passes,
            merged_positions: resolution.merged_positions,
            score_gained: resolution.score_gained,
            score: self.score,
            game_over,
        }));

        if game_over {
            self.enter_game_over();
            return;
        }
        if improved {
            self.persist_best_score();
        }
        self.spawn_block();
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.active = None;
        self.fast_falling = false;
        self.fall_timer_ms = 0;
        self.raise_best_score();
        self.persist_best_score();
    }

    fn raise_best_score(&mut self) -> bool {
        if self.score > self.best_score {
            self.best_score = self.score;
            return true;
        }
        false
    }

    fn load_best_score(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        match store.load_best_score(self.difficulty) {
            Ok(best) => self.best_score = best.unwrap_or(0),
            Err(err) => self.degrade_store(err),
        }
    }

    fn persist_best_score(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(err) = store.save_best_score(self.difficulty, self.best_score) {
            self.degrade_store(err);
        }
    }

    fn degrade_store(&mut self, err: StoreError) {
        self.store = None;
        self.store_error = Some(err);
    }

    /// Apply a player command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::StartFastFall => self.start_fast_fall(),
            GameAction::StopFastFall => self.stop_fast_fall(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedSequence;

    fn scripted(difficulty: Difficulty) -> GameState<FixedSequence, MemoryStore> {
        GameState::with_parts(difficulty, FixedSequence::constant(0.0), MemoryStore::new())
    }

    struct FailingStore;

    impl BestScoreStore for FailingStore {
        fn load_best_score(&mut self, _: Difficulty) -> Result<Option<u32>, StoreError> {
            Ok(Some(50))
        }

        fn save_best_score(&mut self, _: Difficulty, _: u32) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(Difficulty::Easy, 12345);

        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert!(state.active.is_none());
        assert!(state.grid.is_empty());
        assert_eq!((state.grid.width(), state.grid.height()), (5, 8));
        assert!(matches!(state.next_value, 2 | 4));
    }

    #[test]
    fn test_start_spawns_at_centre_top() {
        let mut state = scripted(Difficulty::Hard);
        state.start();

        let block = state.active.unwrap();
        assert_eq!(block.position(), Position::new(3, 0));
        assert_eq!(block.value, 2);
        assert!(block.is_new);
        assert_eq!(state.phase, Phase::Falling);
        assert_eq!(state.blocks_spawned, 1);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        let id = state.active.unwrap().id;
        state.start();
        assert_eq!(state.active.unwrap().id, id);
    }

    #[test]
    fn test_spawn_draws_next_value() {
        let rng = FixedSequence::new(vec![0.0, 0.9, 0.0]);
        let mut state = GameState::with_parts(Difficulty::Easy, rng, MemoryStore::new());
        assert_eq!(state.next_value, 2);
        state.start();
        assert_eq!(state.active.unwrap().value, 2);
        assert_eq!(state.next_value, 4);
    }

    #[test]
    fn test_moves_clear_is_new_only_on_descent() {
        let mut state = scripted(Difficulty::Easy);
        state.start();

        assert!(state.move_left());
        assert!(state.active.unwrap().is_new);
        assert!(state.move_down());
        assert!(!state.active.unwrap().is_new);
        assert_eq!(state.active.unwrap().position(), Position::new(1, 1));
    }

    #[test]
    fn test_move_blocked_at_edges() {
        let mut state = scripted(Difficulty::Easy);
        state.start();

        assert!(state.move_left());
        assert!(state.move_left());
        assert!(!state.move_left());
        assert_eq!(state.active.unwrap().x, 0);

        for _ in 0..4 {
            assert!(state.move_right());
        }
        assert!(!state.move_right());
        assert_eq!(state.active.unwrap().x, 4);
    }

    #[test]
    fn test_move_down_never_locks() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        for _ in 0..7 {
            assert!(state.move_down());
        }
        assert!(!state.move_down());
        assert!(state.active.is_some());
        assert!(state.grid.is_empty());
    }

    #[test]
    fn test_paused_rejects_commands_and_freezes_timer() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        assert!(state.toggle_pause());

        assert!(!state.move_left());
        assert!(!state.move_down());
        assert!(!state.hard_drop());
        assert!(!state.start_fast_fall());
        assert!(!state.tick(5_000));
        assert_eq!(state.active.unwrap().position(), Position::new(2, 0));

        assert!(state.toggle_pause());
        assert!(state.move_left());
    }

    #[test]
    fn test_tick_falls_one_row_per_interval() {
        let mut state = scripted(Difficulty::Easy);
        state.start();

        assert!(!state.tick(999));
        assert_eq!(state.active.unwrap().y, 0);
        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().y, 1);
        assert_eq!(state.fall_timer_ms, 0);
    }

    #[test]
    fn test_fast_fall_switches_interval() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        state.tick(500);

        assert!(state.start_fast_fall());
        assert_eq!(state.fall_timer_ms, 0);
        assert_eq!(state.fall_interval_ms(), 50);
        assert!(state.tick(50));
        assert_eq!(state.active.unwrap().y, 1);

        assert!(state.stop_fast_fall());
        assert!(!state.stop_fast_fall());
        assert_eq!(state.fall_interval_ms(), 1000);
    }

    #[test]
    fn test_tick_locks_when_reaching_floor() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        for _ in 0..6 {
            state.move_down();
        }
        let id = state.active.unwrap().id;

        // One step reaches row 7 and locks in the same tick.
        assert!(state.tick(1000));
        assert_eq!(state.grid.get(Position::new(2, 7)).unwrap().id, id);
        assert_ne!(state.active.unwrap().id, id);
    }

    #[test]
    fn test_hard_drop_locks_and_respawns() {
        let mut state = scripted(Difficulty::Easy);
        state.start();

        assert!(state.hard_drop());
        let locked = state.grid.get(Position::new(2, 7)).unwrap();
        assert_eq!(locked.value, 2);
        assert!(!locked.is_new);
        assert_eq!(state.active.unwrap().position(), Position::new(2, 0));
        assert_eq!(state.score, 0);

        match state.take_last_event() {
            Some(TurnEvent::Locked(report)) => {
                assert_eq!(report.position, Position::new(2, 7));
                assert_eq!(report.passes, 1);
                assert!(!report.game_over);
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_merge_flags_cleared_on_next_lock() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        state.hard_drop();
        state.hard_drop();
        assert!(state.grid.get(Position::new(2, 7)).unwrap().merging);

        state.move_left();
        state.hard_drop();
        assert!(!state.grid.get(Position::new(2, 7)).unwrap().merging);
    }

    #[test]
    fn test_reset_keeps_best_and_delays_spawn() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        state.hard_drop();
        state.hard_drop();
        assert_eq!(state.score, 4);
        assert_eq!(state.best_score, 4);

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 4);
        assert!(state.grid.is_empty());
        assert!(state.active.is_none());
        assert_eq!(state.phase, Phase::Spawning);
        assert_eq!(state.episode_id, 1);

        assert!(!state.tick(RESET_SPAWN_DELAY_MS - 1));
        assert!(state.active.is_none());
        assert!(state.tick(1));
        assert!(state.active.is_some());
    }

    #[test]
    fn test_best_score_saved_when_beaten() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        state.hard_drop();
        state.hard_drop();
        assert_eq!(state.store().unwrap().get(Difficulty::Easy), Some(4));
    }

    #[test]
    fn test_failing_store_degrades_to_memory() {
        // Centre column filled below the spawn cell with unmergeable values.
        let grid = Grid::from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 4, 0, 0],
            &[0, 0, 8, 0, 0],
            &[0, 0, 4, 0, 0],
            &[0, 0, 8, 0, 0],
            &[0, 0, 4, 0, 0],
            &[0, 0, 8, 0, 0],
            &[0, 0, 4, 0, 0],
        ]);
        let mut state =
            GameState::from_grid(Difficulty::Easy, grid, FixedSequence::constant(0.0), FailingStore);
        assert_eq!(state.best_score, 50);
        assert!(!state.store_degraded());

        state.start();
        assert!(state.hard_drop());
        assert!(state.game_over());
        assert!(state.store_degraded());
        assert!(matches!(state.take_store_error(), Some(StoreError::Unavailable(_))));
        assert!(state.take_store_error().is_none());
        assert_eq!(state.best_score, 50);
    }

    #[test]
    fn test_change_difficulty_reloads_best() {
        let mut store = MemoryStore::new();
        store.save_best_score(Difficulty::Hard, 900).unwrap();
        let state = GameState::with_parts(Difficulty::Easy, SimpleRng::new(3), store);
        assert_eq!(state.best_score, 0);

        let state = state.change_difficulty(Difficulty::Hard);
        assert_eq!(state.best_score, 900);
        assert_eq!((state.grid.width(), state.grid.height()), (6, 12));
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = scripted(Difficulty::Medium);
        state.start();
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active.unwrap().x, 3);
        assert!(state.apply_action(GameAction::StartFastFall));
        assert!(state.fast_falling);
        assert!(state.apply_action(GameAction::StopFastFall));
        assert!(state.apply_action(GameAction::TogglePause));
        assert!(state.paused);
        assert!(state.apply_action(GameAction::Reset));
        assert!(!state.paused);
        assert_eq!(state.phase, Phase::Spawning);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = scripted(Difficulty::Easy);
        state.start();
        state.move_right();

        let snap = state.snapshot();
        assert_eq!(snap.active.unwrap().position(), Position::new(3, 0));
        assert_eq!(snap.landing_y, Some(7));
        assert_eq!(snap.value_at(Position::new(3, 0)), Some(2));
        assert_eq!(snap.phase, Phase::Falling);
        assert_eq!(snap.timers.fall_interval_ms, 1000);
        assert!(snap.playable());
    }
}
