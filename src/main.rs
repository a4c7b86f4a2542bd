//! Brickdrop runner (default binary).
//!
//! Fixed-step game loop: render, poll input until the next tick is due, then
//! advance the session by one tick. Sounds, particles, the level banner and
//! the high score table all hang off the events the session emits.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use brickdrop::audio::{sound_for, AudioOutput};
use brickdrop::core::GameSession;
use brickdrop::input::{handle_key_event, is_interrupt, should_quit, KeyRepeat, RepeatKey};
use brickdrop::score::{ScoreBook, SCORE_FILE};
use brickdrop::term::{
    draw_banner, draw_scoreboard, Frame, GameView, ParticleField, Screen, ScoreRow, Viewport,
};
use brickdrop::types::{GameAction, GameEvent, GamePhase, LEVEL_BANNER_MS, TICK_MS};

const NAME_MAX_LEN: usize = 8;

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.leave();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);

    let mut session = GameSession::new(seed);
    let view = GameView::new();
    let mut frame = Frame::new(0, 0);
    let mut key_repeat = KeyRepeat::new();
    let mut particles = ParticleField::new(seed ^ 0x9e37_79b9);
    let mut audio = AudioOutput::new().ok();
    let mut scores = ScoreBook::open(SCORE_FILE);

    // (text, remaining ms) of the level banner.
    let mut banner: Option<(String, u32)> = None;
    // In-progress high score name, shown in the game over overlay.
    let mut name_entry: Option<String> = None;

    let start = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&session, viewport, &mut frame);

        let layout = view.layout(viewport);
        if !particles.is_empty() {
            particles.render_into(&layout, &mut frame);
        }
        if let Some((text, _)) = &banner {
            draw_banner(&layout, text, &mut frame);
        }
        if session.phase() == GamePhase::GameOver {
            let rows: Vec<ScoreRow> = scores
                .entries()
                .iter()
                .map(|e| ScoreRow {
                    name: &e.name,
                    score: e.score,
                })
                .collect();
            draw_scoreboard(&layout, &rows, name_entry.as_deref(), &mut frame);
        }
        screen.present(&mut frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if let Some(name) = name_entry.as_mut() {
                            if is_interrupt(key) {
                                return Ok(());
                            }
                            match key.code {
                                KeyCode::Enter | KeyCode::Esc => {
                                    scores.submit(name, session.score());
                                    let _ = scores.save();
                                    name_entry = None;
                                }
                                KeyCode::Backspace => {
                                    name.pop();
                                }
                                KeyCode::Char(c)
                                    if name.len() < NAME_MAX_LEN
                                        && (c.is_ascii_alphanumeric() || c == ' ') =>
                                {
                                    name.push(c);
                                }
                                _ => {}
                            }
                            continue;
                        }

                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(action) = handle_key_event(key) {
                            if let Some(repeat_key) = RepeatKey::for_action(action) {
                                let now_ms = start.elapsed().as_millis() as u64;
                                if let Some(fired) = key_repeat.press(repeat_key, now_ms) {
                                    session.apply_action(fired);
                                }
                            } else if session.apply_action(action) {
                                match action {
                                    GameAction::Start | GameAction::Restart => {
                                        if let Some(audio) = audio.as_mut() {
                                            audio.start_music();
                                        }
                                        particles.clear();
                                        banner = None;
                                    }
                                    GameAction::Pause => {
                                        if let Some(audio) = audio.as_ref() {
                                            if session.phase() == GamePhase::Paused {
                                                audio.pause_music();
                                            } else {
                                                audio.resume_music();
                                            }
                                        }
                                    }
                                    _ => {}
                                }
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats.
                    }
                    KeyEventKind::Release => {
                        if let Some(repeat_key) =
                            handle_key_event(key).and_then(RepeatKey::for_action)
                        {
                            key_repeat.release(repeat_key);
                        }
                    }
                },
                Event::Resize(..) => screen.invalidate(),
                Event::FocusLost => {
                    key_repeat.release_all();
                    if session.phase() == GamePhase::Running
                        && session.apply_action(GameAction::Pause)
                    {
                        if let Some(audio) = audio.as_ref() {
                            audio.pause_music();
                        }
                    }
                }
                _ => {}
            }
        }

        // Tick: gravity resolves before held-key repeats.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            session.tick(TICK_MS);
            let now_ms = start.elapsed().as_millis() as u64;
            for action in key_repeat.tick(now_ms) {
                session.apply_action(action);
            }

            for event in session.take_events() {
                if let (Some(audio), Some(sound)) = (audio.as_ref(), sound_for(event)) {
                    audio.play(sound);
                }
                match event {
                    GameEvent::RowCleared { row } => particles.burst_row(row),
                    GameEvent::LevelUp { level } => {
                        banner = Some((format!("LEVEL {level}"), LEVEL_BANNER_MS));
                    }
                    GameEvent::GameOver => {
                        if let Some(audio) = audio.as_mut() {
                            audio.stop_music();
                        }
                        if scores.qualifies(session.score()) {
                            name_entry = Some(String::new());
                        }
                    }
                    _ => {}
                }
            }

            particles.step();
            if let Some((_, remaining)) = banner.as_mut() {
                *remaining = remaining.saturating_sub(TICK_MS);
                if *remaining == 0 {
                    banner = None;
                }
            }
        }
    }
}
