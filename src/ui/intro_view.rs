use super::centered_rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 40, frame.size());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::styled(
            "=== PIE MAKER IDLE ===",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Your goal: Bake ONE MILLION PIES!"),
        Line::from("Start by pressing SPACE to bake your first pie."),
        Line::from(""),
        Line::styled("Press any key to begin...", Style::default().fg(Color::Green)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
