use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{Renderer, Snapshot};
use crate::session::{SessionController, SessionState, TickScheduler};
use crate::store::ScoreStore;

/// Redraw rate for the clock and terminal resizes between ticks
const REFRESH_INTERVAL: Duration = Duration::from_millis(250);

pub struct HumanMode {
    controller: SessionController,
    scheduler: TickScheduler,
    metrics: SessionMetrics,
    renderer: Renderer,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Result<Self> {
        let scheduler = TickScheduler::new(config.tick_interval());
        let engine = GameEngine::new(config).context("Invalid game configuration")?;

        Ok(Self {
            controller: SessionController::new(engine, store),
            scheduler,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let input = tokio::spawn(forward_input(tx));

        let mut refresh_timer = interval(REFRESH_INTERVAL);

        self.draw(terminal)?;

        loop {
            tokio::select! {
                maybe_action = rx.recv() => {
                    match maybe_action {
                        Some(action) => self.handle_action(action),
                        None => self.should_quit = true,
                    }
                    self.draw(terminal)?;
                }

                // Game logic tick; the next one is armed only once this one is drawn
                _ = self.scheduler.wait() => {
                    if let Some(outcome) = self.controller.tick() {
                        self.metrics.on_tick(outcome);
                    }
                    self.draw(terminal)?;
                    if self.controller.session() == SessionState::Running {
                        self.scheduler.arm();
                    }
                }

                _ = refresh_timer.tick() => {
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        input.abort();
        self.metrics.log_summary();
        Ok(())
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Session(command) => {
                if let Some(transition) = self.controller.handle(command) {
                    self.scheduler.apply(transition.schedule());
                    self.metrics.on_transition(transition);
                }
            }
            KeyAction::Quit => {
                tracing::info!(score = self.controller.score().current(), "quit requested");
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let snapshot = Snapshot {
            state: self.controller.state(),
            score: self.controller.score(),
            session: self.controller.session(),
            metrics: &self.metrics,
        };
        terminal
            .draw(|frame| self.renderer.render(frame, &snapshot))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Read terminal key presses and push them as logical actions until the
/// receiver goes away or the event stream ends.
async fn forward_input(tx: mpsc::UnboundedSender<KeyAction>) {
    let handler = InputHandler::new();
    let mut events = EventStream::new();

    while let Some(event) = events.next().await {
        match event {
            // Only process key press events, not release
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let action = handler.handle_key_event(key);
                if action != KeyAction::None && tx.send(action).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(%err, "terminal event stream failed");
                break;
            }
        }
    }
}
