//! Terminal setup, teardown, and the draw/event loop.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::card::DrawnCard;
use crate::divine::SpreadResult;
use crate::info::CardInfo;

/// Launch the TUI and run until the user quits.
pub fn run(mut app: App) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop: draw, block on the next event, update.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        match event::read().map_err(|e| format!("event error: {e}"))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) => {
                app.handle_click();
            }
            _ => {}
        }
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match &app.reading {
        Some(reading) => draw_spread(frame, chunks[0], reading, &app.info),
        None => draw_welcome(frame, chunks[0]),
    }

    let hint = format!(
        " enter/click: draw  1: major  2: minor  3: all  q: quit   [scope: {}]",
        app.deck.scope().name()
    );
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);
}

/// The welcome screen shown before the first reading.
fn draw_welcome(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let line1 = Paragraph::new("Close your eyes and think carefully about your question.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    let line2 = Paragraph::new("When you are ready, press Enter or click anywhere.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));

    frame.render_widget(line1, rows[1]);
    frame.render_widget(line2, rows[3]);
}

/// The three-card spread: past, now, future side by side.
fn draw_spread(frame: &mut Frame, area: Rect, reading: &SpreadResult, info: &CardInfo) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((title, drawn), column) in reading.positions().into_iter().zip(columns.iter()) {
        draw_card(frame, *column, title, drawn, info);
    }
}

/// A single card panel: corner label, localized name, orientation, asset path.
fn draw_card(frame: &mut Frame, area: Rect, title: &str, drawn: DrawnCard, info: &CardInfo) {
    let reversed = drawn.orientation.is_reversed();

    let face_style = if reversed {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(drawn.card.label(), face_style.add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled(info.name(drawn.card).to_string(), face_style),
        Line::from(""),
    ];
    if reversed {
        lines.push(Line::styled("(reversed)", Style::default().fg(Color::Magenta)));
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(
        info.path(drawn.card).to_string(),
        Style::default().fg(Color::DarkGray),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center);

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(card, area);
}
