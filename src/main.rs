//! Terminal Grid Hop runner (default binary).
//!
//! Uses crossterm for mouse/key input and the framebuffer renderer from
//! `gridhop::term`. Events are handled one at a time in arrival order and the
//! screen is redrawn whenever the game snapshot changes.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use gridhop::config::Config;
use gridhop::core::{GameSnapshot, GameState};
use gridhop::input::{map_event, should_quit};
use gridhop::logging;
use gridhop::term::{FrameBuffer, GameView, RenderThrottle, TerminalSession, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;
    info!("gridhop starting (seed {})", config.seed);

    let mut session = TerminalSession::open()?;
    let result = run(&mut session, &config);
    let restored = session.close();
    result.and(restored)
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(session: &mut TerminalSession, config: &Config) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut game = GameState::new(config.seed);
    if let Some(size) = config.grid_size {
        game.start(size);
    }

    let view = GameView::default();
    let mut throttle = RenderThrottle::new(config.static_frame_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let poll_timeout = Duration::from_millis(throttle.heartbeat_ms());

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        if throttle.should_render(now_ms(), snap.fingerprint()) {
            view.render_into(&snap, game.grid(), viewport(), &mut fb);
            session.present(&mut fb)?;
        }

        // Input.
        if !event::poll(poll_timeout)? {
            continue;
        }
        let ev = event::read()?;
        match &ev {
            Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
                info!("quit after {} hits", game.stats().hits());
                return Ok(());
            }
            Event::Resize(_, _) => {
                session.invalidate();
                throttle.force();
                continue;
            }
            _ => {}
        }

        if let Some(input) = map_event(&ev) {
            let vp = viewport();
            game.apply(input, now_ms(), |column, row| {
                view.hits_target(&snap, vp, column, row)
            });
        }
    }
}
