//! Terminal Falling 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`. The
//! engine is driven with a fixed timestep; diagnostics are collected while the
//! terminal is in raw mode and printed after it is restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use falling_2048::config::AppConfig;
use falling_2048::core::{BestScoreStore, GameSnapshot, GameState, MemoryStore, SimpleRng};
use falling_2048::input::{handle_key_event, is_fast_fall_key, should_quit, FastFallKey};
use falling_2048::persist::{EventLog, JsonScoreStore};
use falling_2048::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use falling_2048::types::{GameAction, TICK_MS};

type Game = GameState<SimpleRng, Box<dyn BestScoreStore>>;

/// Static screens (paused, game over) redraw at least this often.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    for warning in &config.warnings {
        eprintln!("[Config] {}", warning);
    }

    let store: Box<dyn BestScoreStore> = match &config.scores_path {
        Some(path) => Box::new(JsonScoreStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    let mut session = Session {
        game: GameState::with_parts(config.difficulty, SimpleRng::new(config.seed), store),
        log: None,
        notes: Vec::new(),
    };
    if let Some(path) = &config.log_path {
        match EventLog::open(path) {
            Ok(log) => session.log = Some(log),
            Err(err) => eprintln!("[Log] {:#}", err),
        }
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    session.collect_store_error();
    for note in &session.notes {
        eprintln!("{}", note);
    }
    if session.game.store_degraded() {
        eprintln!(
            "[Store] best score {} for {} was kept for this session only",
            session.game.best_score(),
            session.game.difficulty().as_str()
        );
    }
    result
}

struct Session {
    game: Game,
    log: Option<EventLog>,
    /// Messages printed once the terminal is restored.
    notes: Vec<String>,
}

impl Session {
    fn apply(&mut self, action: GameAction) {
        let accepted = self.game.apply_action(action);
        if accepted && action == GameAction::Reset {
            let episode_id = self.game.episode_id();
            self.log_with(|log| log.reset(episode_id));
        }
        self.drain_events();
    }

    fn tick(&mut self, elapsed_ms: u32) {
        if self.game.tick(elapsed_ms) {
            self.drain_events();
        }
    }

    fn drain_events(&mut self) {
        if let Some(event) = self.game.take_last_event() {
            let episode_id = self.game.episode_id();
            let best_score = self.game.best_score();
            self.log_with(|log| log.turn_event(episode_id, &event, best_score));
        }
        self.collect_store_error();
    }

    fn collect_store_error(&mut self) {
        if let Some(err) = self.game.take_store_error() {
            self.notes.push(format!("[Store] {}", err));
        }
    }

    /// Run a log write; the first failure disables the log.
    fn log_with(&mut self, write: impl FnOnce(&mut EventLog) -> Result<()>) {
        let Some(log) = self.log.as_mut() else {
            return;
        };
        if let Err(err) = write(log) {
            self.notes.push(format!("[Log] disabled after write error: {:#}", err));
            self.log = None;
        }
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session, config: &AppConfig) -> Result<()> {
    session.game.start();
    let (difficulty, episode_id, best_score) = (
        session.game.difficulty(),
        session.game.episode_id(),
        session.game.best_score(),
    );
    session.log_with(|log| log.session_start(difficulty, config.seed, episode_id, best_score));
    session.collect_store_error();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fast_fall = FastFallKey::new();

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        session.game.snapshot_into(&mut snap);
        if throttle.should_render_snapshot(started.elapsed().as_millis() as u64, &snap) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }

                    if is_fast_fall_key(key.code) {
                        let action = match key.kind {
                            KeyEventKind::Release => fast_fall.release(),
                            KeyEventKind::Press | KeyEventKind::Repeat => fast_fall.press(),
                        };
                        if let Some(action) = action {
                            session.apply(action);
                        }
                    } else if let Some(action) = handle_key_event(key, session.game.game_over()) {
                        let repeatable = matches!(action, GameAction::MoveLeft | GameAction::MoveRight);
                        if key.kind == KeyEventKind::Press || repeatable {
                            if action == GameAction::Reset {
                                fast_fall.reset();
                            }
                            session.apply(action);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Some(action) = fast_fall.update(TICK_MS) {
                session.apply(action);
            }
            session.tick(TICK_MS);
        }
    }
}
