use super::centered_rect;
use crate::app::App;
use crate::sim::game::Game;
use crate::sim::prestige::PrestigeState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};

pub fn render(frame: &mut Frame, app: &App, game: &Game) {
    let area = centered_rect(60, 70, frame.size());
    frame.render_widget(Clear, area);
    let block = Block::default().title("Star Shop").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prestige = &game.state.prestige;
    let selected = app
        .selected_shop_item
        .min(prestige.items().len().saturating_sub(1));
    let sections = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(6),
        Constraint::Length(4),
    ])
    .split(inner);

    render_summary(frame, sections[0], prestige);
    render_bonuses(frame, sections[1], prestige, selected);
    render_detail(frame, sections[2], prestige, selected);
}

fn render_summary(frame: &mut Frame, area: Rect, prestige: &PrestigeState) {
    let crust = if prestige.golden_crust() { "golden" } else { "plain" };
    let line = Line::from(vec![
        Span::styled(
            format!("{:.2} stars", prestige.stars),
            Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "   boost +{}%   cats {}   training {}   crust {crust}",
            prestige.boost_percent(),
            prestige.cats(),
            prestige.suppression_level(),
        )),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bonuses(frame: &mut Frame, area: Rect, prestige: &PrestigeState, selected: usize) {
    let rows = prestige.items().iter().enumerate().map(|(index, item)| {
        let owned = prestige.purchases(index);
        let cost = match prestige.item_cost(index) {
            Some(cost) if prestige.stars >= cost => {
                Cell::from(format!("{cost:.0}")).style(Style::default().fg(Color::Green))
            }
            Some(cost) => Cell::from(format!("{cost:.0}")).style(Style::default().fg(Color::Red)),
            None => Cell::from("maxed").style(Style::default().fg(Color::DarkGray)),
        };
        let owned = match item.max_purchases {
            Some(limit) => format!("{owned}/{limit}"),
            None => owned.to_string(),
        };
        Row::new(vec![
            Cell::from(format!("{}", index + 1)),
            Cell::from(item.name),
            cost,
            Cell::from(owned),
        ])
    });

    let widths = [
        Constraint::Length(3),
        Constraint::Min(22),
        Constraint::Length(8),
        Constraint::Length(6),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Key", "Permanent bonus", "Stars", "Owned"])
                .style(Style::default().add_modifier(Modifier::UNDERLINED)),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_detail(frame: &mut Frame, area: Rect, prestige: &PrestigeState, selected: usize) {
    let Some(item) = prestige.items().get(selected) else {
        return;
    };
    let outlook = match prestige.item_cost(selected) {
        None => "Nothing more to buy here.".to_string(),
        Some(cost) if prestige.stars >= cost => {
            format!("Leaves {:.2} stars.", prestige.stars - cost)
        }
        Some(cost) => format!("Needs {:.2} more stars.", cost - prestige.stars),
    };
    let lines = vec![
        Line::from(item.description),
        Line::styled(outlook, Style::default().fg(Color::Gray)),
        Line::styled(
            "Enter/1-4 buy  Up/Down choose  Esc close",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}
