//! Tables tab view: browse the balance tables in use

use super::section_header;
use crate::app::{App, TableSection};
use attr_core::rules::{OneOrMany, SubclassFilter};
use attr_core::{modifier::Modifier as SlotModifier, ItemClass, ItemContext, ItemStore, Quality};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = TableSection::all()
        .iter()
        .map(|s| Line::from(s.name()))
        .collect();
    let selected = app.table_section.min(TableSection::all().len() - 1);
    let sections = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Section (←/→) "))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider("|");
    f.render_widget(sections, chunks[0]);

    let lines = match app.current_section() {
        TableSection::Slots => slot_lines(app),
        TableSection::Qualities => quality_lines(app),
        TableSection::Stats => stat_lines(app),
        TableSection::Weapons => weapon_lines(app),
        TableSection::Armor => armor_lines(app),
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .scroll((app.table_scroll as u16, 0));
    f.render_widget(paragraph, chunks[1]);
}

/// Modifier value for the current item's quality and level
fn modifier_at(app: &App, modifier: &SlotModifier, ctx: &ItemContext) -> String {
    match modifier.evaluate(ctx) {
        Some(value) => format!("{:.4}", value),
        None => format!("- ({})", app.item.quality),
    }
}

fn row(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::White)))
}

fn slot_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for class in [ItemClass::Armor, ItemClass::Weapon] {
        lines.push(section_header(&format!("{} slots", class)));
        lines.push(Line::from(Span::styled(
            format!("  {:16} {:>8} {:>8} {:>10}  Subclasses", "Slot", "Sell", "Armor", "Share"),
            Style::default().fg(Color::Gray),
        )));
        for (slot, entry) in app.tables.slot_table(class) {
            let ctx = ItemContext {
                class,
                inventory_type: *slot,
                ..app.item.context()
            };
            lines.push(row(format!(
                "  {:16} {:>8.4} {:>8.4} {:>10}  {:?}",
                entry.name,
                entry.sell_mod,
                entry.armor_mod,
                modifier_at(app, &entry.slot_mod, &ctx),
                entry.subclasses
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn quality_lines(app: &App) -> Vec<Line<'static>> {
    let level = app.item.item_level;
    let mut lines = vec![section_header(&format!("Quality curves at level {}", level))];
    for quality in Quality::all() {
        match app.tables.quality(*quality) {
            Some(entry) => lines.push(row(format!(
                "  {:10} budget {:.3} * lvl {:+.3} = {:>8.3}   sell {:>10.1}",
                quality.to_string(),
                entry.budget.mult,
                entry.budget.base,
                entry.budget.evaluate(level),
                entry.sell.evaluate(level)
            ))),
            None => lines.push(Line::from(Span::styled(
                format!("  {:10} no curves", quality.to_string()),
                Style::default().fg(Color::DarkGray),
            ))),
        }
    }
    lines
}

fn stat_lines(app: &App) -> Vec<Line<'static>> {
    let ctx = app.item.context();
    let mut lines = vec![section_header(&format!(
        "Stat efficiency for {} {}",
        ctx.quality, ctx.inventory_type
    ))];
    for model in app.tables.stats.values() {
        lines.push(row(format!(
            "  {:26} {:10} {}",
            model.name,
            format!("{:?}", model.group),
            modifier_at(app, &model.efficiency, &ctx)
        )));
    }
    lines
}

fn weapon_lines(app: &App) -> Vec<Line<'static>> {
    let level = app.item.item_level as f64;
    let mut lines = vec![section_header(&format!("Weapon DPS at level {}", app.item.item_level))];
    for (quality, by_type) in &app.tables.weapon_dps {
        for (slot, rows) in by_type {
            for dps in rows {
                lines.push(row(format!(
                    "  {:9} {:14} sub {:12} [{}, {})  {:>8.2}",
                    quality.to_string(),
                    slot.to_string(),
                    subclass_label(&dps.sub),
                    dps.min,
                    dps.max,
                    dps.curve.evaluate(level)
                )));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(section_header("Damage spread"));
    for (i, spread) in app.tables.weapon_spread.iter().enumerate() {
        lines.push(row(format!(
            "  {:2} {:?} sub {:?} {:?} [{}, {}] -> {}",
            i, spread.inventory_type, spread.sub, spread.quality, spread.min, spread.max, spread.spread
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_header("Attack speed"));
    for subclass in &app.tables.weapon_subclasses {
        let delays: Vec<String> = subclass
            .delays
            .iter()
            .map(|(slot, delay)| format!("{} {}", slot, delay))
            .collect();
        lines.push(row(format!(
            "  {:2} {:10} default {:>5}  {}",
            subclass.subclass,
            subclass.name,
            subclass.default_delay,
            delays.join(", ")
        )));
    }
    lines
}

fn subclass_label(filter: &SubclassFilter) -> String {
    match &filter.0 {
        None => "any".to_string(),
        Some(OneOrMany::One(s)) if *s < 0 => format!("not {}", -s),
        Some(OneOrMany::One(s)) => s.to_string(),
        Some(OneOrMany::Many(list)) => format!("{:?}", list),
    }
}

fn armor_lines(app: &App) -> Vec<Line<'static>> {
    let level = app.item.item_level as f64;
    let mut lines = vec![section_header(&format!("Base armor at level {}", app.item.item_level))];
    for (quality, curves) in &app.tables.armor_curves {
        for (armor_type, curve) in curves {
            lines.push(row(format!(
                "  {:9} {:8} degree {}  {:>10.1}",
                quality.to_string(),
                format!("{:?}", armor_type),
                curve.degree(),
                curve.evaluate(level)
            )));
        }
    }
    lines
}
