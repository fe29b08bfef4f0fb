//! Curves tab view: derived values of the current item across item levels

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BAR_WIDTH: usize = 24;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let points = app.level_curve();
    let max_budget = points.iter().map(|p| p.budget).fold(0.0, f64::max);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:>5}  {:>9}  {:<width$}  {:>8}  {:>6}  {:>9}",
            "Level",
            "Budget",
            "",
            "Sell",
            "Armor",
            "Damage",
            width = BAR_WIDTH
        ),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];

    for point in points.iter().skip(app.curves_scroll) {
        let filled = if max_budget > 0.0 {
            ((point.budget / max_budget) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)));

        let dash = || "-".to_string();
        let sell = point.sell.map(|s| s.to_string()).unwrap_or_else(dash);
        let armor = point.armor.map(|a| a.to_string()).unwrap_or_else(dash);
        let damage = point
            .damage
            .map(|d| format!("{}-{}", d.min, d.max))
            .unwrap_or_else(dash);

        let style = if point.level == app.item.item_level {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>5}  {:>9.1}  ", point.level, point.budget), style),
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::styled(format!("  {:>8}  {:>6}  {:>9}", sell, armor, damage), style),
        ]));
    }

    let title = format!(
        " {} {} {} (sub {}) by level ",
        app.item.quality, app.item.class, app.item.inventory_type, app.item.subclass
    );
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}
