use crate::app::{App, Mode};
use crate::sim::game::Game;
use compositor::{FRAME_HEIGHT, FRAME_WIDTH, Snapshot};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub mod art;
pub mod celebration_view;
pub mod compositor;
pub mod intro_view;
pub mod log_view;
pub mod shop_view;

pub fn render(frame: &mut Frame, app: &App, game: &Game) {
    let size = frame.size();
    if app.mode() == Mode::Intro {
        intro_view::render(frame);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(FRAME_WIDTH as u16 + 2),
            Constraint::Min(24),
        ])
        .split(layout[0]);

    render_bakery(frame, columns[0], game);
    log_view::render(frame, columns[1], game);
    render_footer(frame, layout[1], app);

    match app.mode() {
        Mode::PrestigeShop => shop_view::render(frame, app, game),
        Mode::Celebration => celebration_view::render(frame, game),
        Mode::Intro | Mode::Playing => {}
    }
}

fn render_bakery(frame: &mut Frame, area: Rect, game: &Game) {
    let lines: Vec<Line> = compositor::compose(&Snapshot::of(game))
        .into_iter()
        .take(FRAME_HEIGHT)
        .map(Line::from)
        .collect();
    let style = if game.state.prestige.golden_crust() {
        Style::default().fg(Color::LightYellow)
    } else {
        Style::default()
    };
    let paragraph = Paragraph::new(lines)
        .style(style)
        .block(Block::default().title("Bakery").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys: &[(&str, &str)] = match app.mode() {
        Mode::PrestigeShop => &[("[1-4]", " buy"), ("[J/K]", " navigate"), ("[Esc]", " close")],
        Mode::Celebration => &[("[Y]", " keep baking"), ("[N]", " save & quit")],
        Mode::Intro | Mode::Playing => &[
            ("[Space]", " bake"),
            ("[G/B/F]", " buy producer"),
            ("[1-5]", " upgrade"),
            ("[R]", " prestige"),
            ("[S]", " star shop"),
            ("[L]", " redraw"),
            ("[Q]", " save & quit"),
        ],
    };

    let mut spans = vec![Span::raw("Hotkeys: ")];
    for (i, (key, action)) in hotkeys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  •  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(*action));
    }

    let instructions = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(instructions, area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    vertical[1]
}
