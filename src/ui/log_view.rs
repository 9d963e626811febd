use crate::sim::game::Game;
use crate::sim::pests;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, game: &Game) {
    let sections = Layout::vertical([Constraint::Length(9), Constraint::Min(3)]).split(area);

    let stats_block = Block::default().title("Pantry").borders(Borders::ALL);
    let stats_area = stats_block.inner(sections[0]);
    frame.render_widget(stats_block, sections[0]);

    let run = &game.state.run;
    let prestige = &game.state.prestige;
    let owned_upgrades = run.upgrades.iter().filter(|u| u.purchased).count();
    let cat_appetite = pests::rats_eaten_per_cat(prestige.suppression_level());

    let stats_lines = vec![
        Line::from(vec![
            Span::styled("Baked this run", Style::default().fg(Color::Yellow)),
            Span::raw(format!(": {}", run.baked_this_run)),
        ]),
        Line::from(vec![
            Span::raw("Upgrades owned: "),
            Span::raw(format!("{owned_upgrades}/{}", run.upgrades.len())),
        ]),
        Line::from(vec![
            Span::styled("Stars", Style::default().fg(Color::LightYellow)),
            Span::raw(format!(
                ": {:.2} (lifetime {:.2})",
                prestige.stars, prestige.lifetime_stars
            )),
        ]),
        Line::from(vec![
            Span::raw("Resets: "),
            Span::raw(format!("{}", prestige.resets)),
            Span::raw("    Wins: "),
            Span::raw(format!("{}", prestige.wins)),
        ]),
        Line::from(vec![
            Span::styled("Cats", Style::default().fg(Color::LightGreen)),
            Span::raw(format!(
                ": {} (each eats {cat_appetite} rats)",
                prestige.cats()
            )),
        ]),
        Line::from(vec![
            Span::raw("Boost: "),
            Span::styled(
                format!("+{}%", prestige.boost_percent()),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(stats_lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, stats_area);

    let log_block = Block::default().title("Bakery Log").borders(Borders::ALL);
    let log_area = log_block.inner(sections[1]);
    frame.render_widget(log_block, sections[1]);

    let mut items: Vec<ListItem> = game
        .messages()
        .map(|msg| ListItem::new(msg.clone()))
        .collect();
    if items.is_empty() {
        items.push(ListItem::new("The ovens are warm. Start baking."));
    }
    frame.render_widget(List::new(items), log_area);
}
