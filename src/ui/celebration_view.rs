use super::{art, centered_rect};
use crate::sim::game::Game;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, game: &Game) {
    let area = centered_rect(50, 80, frame.size());
    frame.render_widget(Clear, area);

    let gold = Style::default().fg(Color::Yellow);
    let red = Style::default().fg(Color::Red);
    let green = Style::default().fg(Color::Green);

    let mut lines = vec![
        Line::from(""),
        Line::styled("CONGRATULATIONS!", gold.add_modifier(Modifier::BOLD)),
        Line::styled("You baked 1,000,000 pies!", gold),
        Line::from(""),
    ];
    lines.extend(art::CELEBRATION_PIE.iter().map(|row| Line::styled(*row, gold)));
    lines.push(Line::from(""));
    lines.extend(art::FIREWORKS.iter().map(|row| Line::styled(*row, red)));
    lines.push(Line::from(""));
    if game.state.prestige.wins > 0 {
        lines.push(Line::from(format!(
            "Previous wins: {}",
            game.state.prestige.wins
        )));
    }
    lines.push(Line::styled("Keep baking? [Y]es / [N]o", green));

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Goal!"));
    frame.render_widget(popup, area);
}
