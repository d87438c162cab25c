use super::stack_widget::{paint, render_burger};
use crate::game::{self, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

const HIGHLIGHT: Color = Color::Rgb(50, 168, 82);
const BUTTON_WIDTH: u16 = 12;
const BUTTON_GAP: u16 = 2;
const POPUP_WIDTH: u16 = 40;
const POPUP_HEIGHT: u16 = 12;
const PLAY_AGAIN_WIDTH: u16 = 20;

/// Screen regions, shared between drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub header: Rect,
    pub target: Rect,
    pub player: Rect,
    pub message: Rect,
    pub help: Rect,
    pub buttons: [Rect; 4],
    pub popup: Rect,
    pub play_again: Rect,
}

impl ViewLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(9),    // Stacks
                Constraint::Length(3), // Message
                Constraint::Length(3), // Instructions
                Constraint::Length(5), // Color buttons
            ])
            .split(area);

        let stacks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let button_row = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .flex(Flex::Center)
        .split(rows[4]);

        let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
        let play_again = Rect {
            x: popup.x + popup.width.saturating_sub(PLAY_AGAIN_WIDTH) / 2,
            y: (popup.y + popup.height).saturating_sub(4),
            width: PLAY_AGAIN_WIDTH.min(popup.width),
            height: popup.height.min(3),
        };

        ViewLayout {
            header: rows[0],
            target: stacks[0],
            player: stacks[1],
            message: rows[2],
            help: rows[3],
            buttons: [button_row[0], button_row[2], button_row[4], button_row[6]],
            popup,
            play_again,
        }
    }

    /// Color button under a terminal cell, if any
    pub fn button_at(&self, column: u16, row: u16) -> Option<game::Color> {
        let pos = Position::new(column, row);
        self.buttons
            .iter()
            .position(|rect| rect.contains(pos))
            .map(|idx| game::Color::ALL[idx])
    }

    pub fn is_play_again(&self, column: u16, row: u16) -> bool {
        self.play_again.contains(Position::new(column, row))
    }
}

/// Rectangle of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render(frame: &mut Frame, session: &Session, message: &Option<String>) {
    let layout = ViewLayout::new(frame.area());

    render_header(frame, session, layout.header);
    render_stacks(frame, session, &layout);
    render_message(frame, message, layout.message);
    render_help(frame, layout.help);
    render_buttons(frame, &layout);

    if session.is_game_over() {
        render_game_over(frame, session, &layout);
    }
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let score = Paragraph::new(format!("Score: {}", session.score()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Burger Stacker"));
    frame.render_widget(score, cols[0]);

    let total = session.duration().as_secs_f64();
    let ratio = if total > 0.0 {
        session.remaining_secs() / total
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Time"))
        .gauge_style(Style::default().fg(HIGHLIGHT))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}s", session.remaining().as_secs()));
    frame.render_widget(gauge, cols[1]);

    let high = Paragraph::new(format!("High Score: {}", session.high_score()))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(high, cols[2]);
}

fn render_stacks(frame: &mut Frame, session: &Session, layout: &ViewLayout) {
    let panels = [
        (layout.target, "Target", session.target(), true),
        (layout.player, "Your Stack", session.player(), session.is_complete()),
    ];

    for (area, title, stack, closed) in panels {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_burger(frame, stack, closed, inner);
    }
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Match the burger from bottom to top  |  Backspace: remove top layer  |  Enter: submit  |  Esc: quit",
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Instructions"));

    frame.render_widget(help, area);
}

fn render_buttons(frame: &mut Frame, layout: &ViewLayout) {
    for (color, area) in game::Color::ALL.into_iter().zip(layout.buttons) {
        let button = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                color.key().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(paint(color)).fg(Color::Black))
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(button, area);
    }
}

fn render_game_over(frame: &mut Frame, session: &Session, layout: &ViewLayout) {
    frame.render_widget(Clear, layout.popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Final Score: {}", session.score())),
        Line::from(format!("High Score: {}", session.high_score())),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, layout.popup);

    let button = Paragraph::new("Play Again (Space)")
        .alignment(Alignment::Center)
        .style(Style::default().bg(HIGHLIGHT).fg(Color::Black))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, layout.play_again);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_are_hit_tested_in_order() {
        let layout = ViewLayout::new(Rect::new(0, 0, 100, 30));
        for (idx, rect) in layout.buttons.iter().enumerate() {
            assert_eq!(
                layout.button_at(rect.x + 1, rect.y + 1),
                Some(game::Color::ALL[idx])
            );
        }
        assert_eq!(layout.button_at(0, 0), None);
    }

    #[test]
    fn test_buttons_sit_on_bottom_row() {
        let layout = ViewLayout::new(Rect::new(0, 0, 100, 30));
        for rect in layout.buttons {
            assert_eq!(rect.y + rect.height, 30);
            assert_eq!(rect.width, BUTTON_WIDTH);
        }
    }

    #[test]
    fn test_play_again_inside_popup() {
        let layout = ViewLayout::new(Rect::new(0, 0, 100, 30));
        let button = layout.play_again;
        assert!(layout.popup.contains(Position::new(button.x, button.y)));
        assert!(layout.is_play_again(button.x + 1, button.y + 1));
        assert!(!layout.is_play_again(0, 0));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let rect = centered(Rect::new(0, 0, 10, 5), 40, 12);
        assert_eq!(rect, Rect::new(0, 0, 10, 5));
    }
}
