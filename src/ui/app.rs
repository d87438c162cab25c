use super::game_view::{self, ViewLayout};
use crate::game::{Color, MatchOutcome, Session};
use crate::store::{self, HighScoreStore};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::{Duration, Instant};

pub struct App {
    session: Session,
    store: Box<dyn HighScoreStore>,
    frame_interval: Duration,
    area: Rect,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session, store: Box<dyn HighScoreStore>, frame_interval: Duration) -> Self {
        App {
            session,
            store,
            frame_interval,
            area: Rect::default(),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        let mut last_frame = Instant::now();
        loop {
            terminal
                .draw(|f| {
                    self.area = f.area();
                    self.render(f);
                })
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;

            let now = Instant::now();
            self.update(now - last_frame);
            last_frame = now;
        }
        Ok(())
    }

    /// Wait up to one frame for input
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Advance the clock and persist a new high score when the game ends
    fn update(&mut self, elapsed: Duration) {
        if let Some(report) = self.session.tick(elapsed) {
            self.message = Some(if report.new_high_score {
                format!("Time's up! New high score: {}", report.final_score)
            } else {
                "Time's up!".to_string()
            });
            if report.new_high_score {
                store::save_or_warn(self.store.as_mut(), report.final_score);
            }
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ if self.session.is_game_over() => {
                if key.code == KeyCode::Char(' ') {
                    self.restart();
                }
            }
            KeyCode::Char(c) => {
                if let Some(color) = Color::from_key(c) {
                    self.pick(color);
                }
            }
            KeyCode::Backspace => {
                self.message = None;
                self.session.undo();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Handle left clicks on the color and restart buttons
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = ViewLayout::new(self.area);
        if self.session.is_game_over() {
            if layout.is_play_again(mouse.column, mouse.row) {
                self.restart();
            }
        } else if let Some(color) = layout.button_at(mouse.column, mouse.row) {
            self.pick(color);
        }
    }

    fn pick(&mut self, color: Color) {
        self.message = None;
        self.session.submit_color(color);
    }

    fn submit(&mut self) {
        self.message = match self.session.submit_attempt() {
            Some(MatchOutcome::Matched { points }) => Some(format!("Order up! +{points}")),
            Some(MatchOutcome::Mismatched) => Some("Wrong order, try again!".to_string()),
            None if !self.session.player().is_empty() => {
                Some("Finish the stack before submitting".to_string())
            }
            None => None,
        };
    }

    fn restart(&mut self) {
        self.session.reset();
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(frame, &self.session, &self.message);
    }
}
