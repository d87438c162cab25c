use crate::game::{self, Stack};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LAYER_WIDTH: usize = 16;
pub const BUN_COLOR: Color = Color::Rgb(222, 165, 75);

/// Terminal color for a burger layer.
pub fn paint(color: game::Color) -> Color {
    match color {
        game::Color::Red => Color::Rgb(235, 64, 52),
        game::Color::Yellow => Color::Rgb(252, 186, 3),
        game::Color::Blue => Color::Rgb(66, 135, 245),
        game::Color::Green => Color::Rgb(46, 204, 113),
    }
}

/// Lines of a burger, top of the screen first. The bottom bun is always
/// drawn; the top bun only when `closed`.
pub fn burger_lines(stack: &Stack, closed: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(stack.len() + 2);
    if closed {
        lines.push(bun(format!("▗{}▖", "▄".repeat(LAYER_WIDTH - 2))));
    }
    for &layer in stack.layers().iter().rev() {
        lines.push(Line::from(Span::styled(
            "█".repeat(LAYER_WIDTH),
            Style::default().fg(paint(layer)),
        )));
    }
    lines.push(bun(format!("▝{}▘", "▀".repeat(LAYER_WIDTH - 2))));
    lines
}

fn bun(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(BUN_COLOR)))
}

/// Part of `area` a burger of `lines` rows occupies, anchored to the bottom.
fn anchored_area(lines: usize, area: Rect) -> Rect {
    let height = u16::try_from(lines).unwrap_or(u16::MAX).min(area.height);
    Rect {
        y: area.y + area.height - height,
        height,
        ..area
    }
}

/// Render a burger anchored to the bottom of `area`.
pub fn render_burger(frame: &mut Frame, stack: &Stack, closed: bool, area: Rect) {
    let lines = burger_lines(stack, closed);
    let anchored = anchored_area(lines.len(), area);

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, anchored);
}
