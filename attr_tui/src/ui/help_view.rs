//! Help tab view

use super::section_header;
use crate::app::App;
use attr_core::model::constants::{BUY_PRICE_RATIO, DEFAULT_WEAPON_DELAY, EXPONENT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-4", "Jump to tab (Item/Curves/Tables/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select field / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Item"),
        key_line("←/→", "Change the selected field"),
        key_line("Enter / Space", "Step field forward / flip toggle"),
        key_line("n", "Load next item from data/items.json"),
        key_line("x", "Roll a random item"),
        key_line("r", "Reset item and options"),
        key_line("s", "Export item as JSON"),
        Line::from(""),
        section_header("Derivation"),
        Line::from(""),
        Line::from(Span::styled("Budget:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  budget = (quality(level) × slot)^{:.4} / slot",
            EXPONENT
        )),
        Line::from("  No slot entry, no quality curve or a zero share: budget 0"),
        Line::from(""),
        Line::from(Span::styled("Stats:", Style::default().fg(Color::Yellow))),
        Line::from("  points = budget × percent / 100"),
        Line::from(format!("  value  = ceil((points / efficiency)^(1/{:.4}))", EXPONENT)),
        Line::from("  Previous stats are always cleared first"),
        Line::from(""),
        Line::from(Span::styled("Price:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  sell = ceil(quality sell(level) × slot sell share), buy = sell × {}",
            BUY_PRICE_RATIO
        )),
        Line::from(""),
        Line::from(Span::styled("Armor:", Style::default().fg(Color::Yellow))),
        Line::from("  armor = ceil(base curve(level) × slot armor share) + bonus armor"),
        Line::from(""),
        Line::from(Span::styled("Weapon damage:", Style::default().fg(Color::Yellow))),
        Line::from("  min/max = ceil(dps × speed / 1000 × (1 ∓ spread / 2))"),
        Line::from(format!(
            "  speed = item delay, else subclass default, else {} ms",
            DEFAULT_WEAPON_DELAY
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Run with a .toml or .json path to overlay custom tables.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help & Formulas "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
