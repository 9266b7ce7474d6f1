//! Terminal line-sum runner.
//!
//! Drag across a straight line of tiles with the mouse (or walk it with the
//! keyboard cursor) and release when the numbers add up to the target.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::{info, trace, warn};

use tui_linesum::config::{AppConfig, Args};
use tui_linesum::core::{CommitEvent, GameSnapshot, GameState};
use tui_linesum::input::{handle_key_event, should_quit, KeyboardCursor, PointerTracker};
use tui_linesum::logging;
use tui_linesum::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use tui_linesum::types::GameAction;

/// Poll interval while a flash is on screen, so it disappears on time.
const FLASH_POLL: Duration = Duration::from_millis(50);
const IDLE_POLL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env().with_args(&args);

    logging::init(config.log_path.as_deref())?;
    for warning in &config.warnings {
        warn!("{warning}");
    }

    let seed = config.resolved_seed();
    info!(seed, rule = ?config.terminal_rule(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!("exiting with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, seed: u64) -> Result<()> {
    let mut game = GameState::new(seed).with_rule(config.terminal_rule());
    let view = GameView::default();
    let mut pointer = PointerTracker::new();
    let mut cursor = KeyboardCursor::new();
    let mut show_cursor = false;

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let flash_for = Duration::from_millis(config.flash_ms);
    let mut flash: Option<(CommitEvent, Instant)> = None;
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if let Some(commit) = game.take_last_commit() {
            info!(
                length = commit.length,
                sum = commit.sum,
                points = commit.points,
                score = game.score(),
                "line scored"
            );
            if game.game_over() {
                info!(score = game.score(), commits = game.commits(), "game over");
            }
            flash = Some((commit, Instant::now()));
            dirty = true;
        }
        if flash.is_some_and(|(_, at)| at.elapsed() >= flash_for) {
            flash = None;
            dirty = true;
        }

        if dirty {
            game.snapshot_into(&mut snap);
            let hud = Hud {
                cursor: show_cursor.then_some(cursor.position()),
                flash: flash.map(|(commit, _)| commit),
            };
            view.render_into(&snap, &hud, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = if flash.is_some() { FLASH_POLL } else { IDLE_POLL };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = game.score(), "quit");
                    return Ok(());
                }
                let Some(cmd) = handle_key_event(key) else {
                    continue;
                };
                show_cursor = true;
                dirty = true;
                if let Some(action) = cursor.handle(cmd, game.selection().is_some()) {
                    if action == GameAction::NewGame {
                        pointer.reset();
                        flash = None;
                    }
                    let accepted = apply(&mut game, action);
                    cursor.settle(action, accepted, game.selection().and_then(|sel| sel.last()));
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && view.hit_new_game(viewport, mouse.column, mouse.row)
                {
                    pointer.reset();
                    flash = None;
                    apply(&mut game, GameAction::NewGame);
                    dirty = true;
                    continue;
                }

                let actions = pointer.handle_mouse(mouse, |x, y| view.hit_test(viewport, x, y));
                for action in actions {
                    if let GameAction::Begin(pos) = action {
                        cursor.set_position(pos);
                        show_cursor = false;
                    }
                    dirty |= apply(&mut game, action);
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}

fn apply(game: &mut GameState, action: GameAction) -> bool {
    let changed = game.apply_action(action);
    trace!(action = action.as_str(), changed, "action");
    if action == GameAction::NewGame {
        info!(
            episode = game.episode_id(),
            target = game.target_sum(),
            game_over = game.game_over(),
            "new game"
        );
    }
    changed
}
