//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, HELP};

/// Draws the title, the active view or the help panel, the status line and
/// the key hints.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let view = app.view().view();

    let title = Paragraph::new(format!(
        "Tic-Tac-Toe - {} view - computer: {}",
        view.title(),
        app.strategy_name()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let snapshot = app.screen().snapshot();
    if app.show_help() {
        let help = Paragraph::new(HELP)
            .block(Block::default().borders(Borders::ALL).title("Keys"));
        frame.render_widget(help, center_rect(chunks[1], 56, 9));
    } else {
        view.draw(frame, chunks[1], &app.scene(&snapshot));
    }

    let status = Paragraph::new(snapshot.message().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(format!(
        "{} | n new  r/b strategy  g/c view  ? keys  q quit",
        view.hint()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
