//! Terminal Flappy runner (default binary).
//!
//! Fixed 30 ticks/second loop: render, poll input until the next tick is due,
//! then advance the simulation and persist any new high score.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_flappy::config::AppConfig;
use tui_flappy::core::{GameSnapshot, GameState};
use tui_flappy::high_score::HighScoreStore;
use tui_flappy::input::{handle_key_event, pointer_press, should_quit};
use tui_flappy::logging;
use tui_flappy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_flappy::types::{GameAction, GameConfig, TICK_MICROS};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("game loop failed: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let store = HighScoreStore::new(&config.high_score_path);
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting: seed {}, high score file {}",
        seed,
        store.path().display()
    );

    let mut game_state = GameState::new(GameConfig::default(), seed, store.load());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_micros(TICK_MICROS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((col, row)) = pointer_press(mouse) {
                        let hit = view
                            .cell_to_world(&snap, viewport, col, row)
                            .is_some_and(|(x, y)| game_state.start_button_hit(x, y));
                        if hit {
                            game_state.apply_action(GameAction::Start);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if game_state.tick() {
                if let Some(score) = game_state
                    .take_last_event()
                    .and_then(|ev| ev.new_high_score)
                {
                    if let Err(e) = store.save(score) {
                        log::warn!("{:#}", e);
                    }
                }
            }
        }
    }
}
