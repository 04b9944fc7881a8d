//! TUI rendering with ratatui
//!
//! Layout: header, the two input fields, the match list with a summary panel
//! beside it, and a status bar.

use super::app::{App, Field, MessageStyle};
use crate::output::formatters::{columns, constraint_pattern};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tiles input
            Constraint::Length(3), // Constraints input
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_input(f, app, Field::Tiles, chunks[1]);
    render_input(f, app, Field::Constraints, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Matches
            Constraint::Percentage(35), // Summary + messages
        ])
        .split(chunks[3]);

    render_matches(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SCRABBLER - Find Playable Words")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let (title, content) = match field {
        Field::Tiles => (" Tiles ", app.tiles_input.as_str()),
        Field::Constraints => (
            " Constraints (letter,position pairs) ",
            app.constraints_input.as_str(),
        ),
    };

    let focused = app.focus == field;
    let invalid = field == Field::Constraints && app.constraint_error.is_some();
    let color = match (focused, invalid) {
        (_, true) => Color::Red,
        (true, false) => Color::Yellow,
        (false, false) => Color::DarkGray,
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(if focused {
                    BorderType::Double
                } else {
                    BorderType::Plain
                })
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);

    if focused {
        let x = area.x + 1 + u16::try_from(content.chars().count()).unwrap_or(u16::MAX);
        f.set_cursor_position(Position::new(
            x.min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

fn render_matches(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Matches ({}) ", app.match_count()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Green));

    let lines: Vec<Line> = match &app.result {
        None => vec![Line::from("Type some tiles to start searching.")],
        Some(result) if result.source_was_empty() => {
            vec![Line::from("The word list is empty, nothing to search.")]
        }
        Some(result) if result.matches.is_empty() => vec![Line::from("No playable words.")],
        Some(result) => {
            let width = usize::from(area.width.saturating_sub(2));
            columns(&result.matches, width)
                .into_iter()
                .map(Line::from)
                .collect()
        }
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Search summary
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_summary(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let mut content = Vec::new();

    if let Some(result) = &app.result {
        content.push(Line::from(vec![
            Span::raw("Tiles:   "),
            Span::styled(
                result.tiles.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        if !result.constraints.is_empty() {
            content.push(Line::from(format!(
                "Pattern: {}",
                constraint_pattern(&result.constraints)
            )));
        }
        content.push(Line::from(format!(
            "Max:     {} letters ({})",
            result.length_budget, result.policy
        )));
        content.push(Line::from(format!(
            "Time:    {:.1}ms",
            result.duration.as_secs_f64() * 1000.0
        )));
    } else {
        content.push(Line::from(format!("Policy:  {}", app.base.policy)));
    }

    if let Some(error) = &app.constraint_error {
        content.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = format!(
        "{} words | TAB: switch field | ↑/↓ PgUp/PgDn: scroll | Enter: log | Ctrl-U: clear | Esc: quit",
        app.words.len()
    );
    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
