//! Item tab view: editable inputs, derived attributes and the derivation log

use super::{section_header, value_line};
use crate::app::{outcome_label, App, Field};
use attr_core::{ItemStore, StepOutcome};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(columns[1]);

    draw_fields(f, app, columns[0]);
    draw_results(f, app, right[0]);
    draw_log(f, app, right[1]);
}

fn field_value(app: &App, field: Field) -> String {
    let item = &app.item;
    let on_off = |enabled: bool| (if enabled { "on" } else { "off" }).to_string();
    match field {
        Field::Class => item.class.to_string(),
        Field::InventoryType => item.inventory_type.to_string(),
        Field::Subclass => item.subclass.to_string(),
        Field::Quality => item.quality.to_string(),
        Field::Level => item.item_level.to_string(),
        Field::Delay if item.delay == 0 => "subclass default".to_string(),
        Field::Delay => item.delay.to_string(),
        Field::BonusArmor => item.bonus_armor.to_string(),
        Field::Weights => app.current_preset().name.to_string(),
        Field::Stats => on_off(app.stats_enabled),
        Field::Disenchant => on_off(app.disenchant),
        Field::Price => on_off(app.price),
        Field::ArmorOrDamage => on_off(app.armor_or_damage),
    }
}

fn draw_fields(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Field::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = i == app.selected_field;
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if selected { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:18}", prefix, field.name()), style),
                Span::styled(field_value(app, *field), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let title = if app.item.name.is_empty() {
        " Item ".to_string()
    } else {
        format!(" {} ", app.item.name)
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}

fn outcome_line(step: &str, outcome: &StepOutcome) -> Line<'static> {
    let color = match outcome {
        StepOutcome::Applied => Color::Green,
        StepOutcome::Disabled => Color::DarkGray,
        StepOutcome::Skipped(_) => Color::Red,
    };
    Line::from(vec![
        Span::styled(format!("  {:18}", step), Style::default().fg(Color::Gray)),
        Span::styled(outcome_label(outcome), Style::default().fg(color)),
    ])
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let item = &app.item;
    let mut lines = vec![
        section_header("Budget"),
        value_line("Budget", format!("{:.2}", item.budget())),
        Line::from(""),
        section_header("Stats"),
    ];

    if item.stats.is_empty() {
        lines.push(Line::from(Span::styled("  (none)", Style::default().fg(Color::DarkGray))));
    }
    for slot in item.stat_slots() {
        let name = app
            .tables
            .stat_model(slot.kind)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| format!("{:?}", slot.kind));
        lines.push(value_line(&format!("  {}", name), format!("+{}", slot.value)));
    }

    lines.push(Line::from(""));
    lines.push(section_header("Item"));
    lines.push(value_line("Sell / Buy", format!("{} / {}", item.sell_price(), item.buy_price())));
    lines.push(value_line("Disenchant id", item.disenchant_id().to_string()));
    lines.push(value_line("Armor", item.armor().to_string()));
    for entry in item.damage_entries() {
        lines.push(value_line(
            "Damage",
            format!("{}-{} {:?}", entry.min, entry.max, entry.school),
        ));
    }

    if let Some(report) = &app.report {
        if let Some(distribution) = &report.distribution {
            for (kind, err) in &distribution.skipped {
                lines.push(Line::from(Span::styled(
                    format!("  {:?} skipped: {}", kind, err),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(section_header("Steps"));
        lines.push(outcome_line("Budget", &report.budget_outcome));
        lines.push(outcome_line("Stats", &report.stats));
        lines.push(outcome_line("Disenchant", &report.disenchant));
        lines.push(outcome_line("Price", &report.price));
        lines.push(outcome_line("Armor / damage", &report.armor_or_damage));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Derived "));

    f.render_widget(paragraph, area);
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);
    let items: Vec<ListItem> = app.log[start..]
        .iter()
        .map(|line| ListItem::new(Line::from(Span::styled(line.clone(), Style::default().fg(Color::Gray)))))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Log "));

    f.render_widget(list, area);
}
