//! Stat efficiencies: budget points per stat point

use super::StatModel;
use crate::modifier::{Modifier, QualityBand};
use crate::types::{InventoryType, Quality, StatGroup, StatKind};
use std::collections::BTreeMap;

fn model(name: &str, group: StatGroup, efficiency: Modifier) -> StatModel {
    StatModel {
        name: name.to_string(),
        group,
        efficiency,
    }
}

/// Different efficiencies on `slots` than elsewhere, per quality
fn by_slot(slots: &[InventoryType], matched: [f64; 3], otherwise: [f64; 3]) -> Modifier {
    let bands = |[epic, rare, uncommon]: [f64; 3]| {
        vec![
            QualityBand::new(Quality::Epic, 1, epic),
            QualityBand::new(Quality::Rare, 1, rare),
            QualityBand::new(Quality::Uncommon, 1, uncommon),
        ]
    };
    Modifier::BySlot {
        slots: slots.to_vec(),
        matched: bands(matched),
        otherwise: bands(otherwise),
    }
}

pub(super) fn stat_models() -> BTreeMap<StatKind, StatModel> {
    use InventoryType::{Finger, HeldOffHand, Neck, Shield, Trinket};
    use StatGroup::{Armor, Primary, Secondary};

    let jewelry = [Neck, Finger, Trinket, HeldOffHand];
    let blocking = [Neck, Finger, Trinket, Shield];

    let mut table = BTreeMap::new();
    table.insert(
        StatKind::BonusArmor,
        model("Bonus Armor", Armor, Modifier::uniform(2.0 / 32.0, 3.0 / 32.0, 3.0 / 32.0)),
    );
    table.insert(
        StatKind::Stamina,
        model("Stamina", Primary, Modifier::uniform(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0)),
    );
    table.insert(
        StatKind::ManaRegen,
        model(
            "Mana Regen MP5",
            Secondary,
            by_slot(
                &jewelry,
                [32.0 / 16.0, 48.0 / 16.0, 48.0 / 16.0],
                [32.0 / 16.0, 92.0 / 32.0, 92.0 / 32.0],
            ),
        ),
    );
    table.insert(
        StatKind::SpellPower,
        model("Spell Power", Secondary, Modifier::uniform(55.0 / 64.0, 55.0 / 64.0, 45.0 / 64.0)),
    );
    table.insert(
        StatKind::HealthRegen,
        model(
            "Health Regen HP5",
            Secondary,
            by_slot(
                &jewelry,
                [16.0 / 16.0, 32.0 / 16.0, 32.0 / 16.0],
                [32.0 / 16.0, 64.0 / 16.0, 64.0 / 16.0],
            ),
        ),
    );
    table.insert(
        StatKind::BlockValue,
        model(
            "Block Value",
            Secondary,
            by_slot(
                &blocking,
                [21.0 / 64.0, 21.0 / 64.0, 16.0 / 16.0],
                [21.0 / 64.0, 21.0 / 64.0, 16.0 / 16.0],
            ),
        ),
    );

    let constants = [
        (StatKind::Agility, "Agility", Primary, 16.0 / 16.0),
        (StatKind::Strength, "Strength", Primary, 8.0 / 16.0),
        (StatKind::Intellect, "Intellect", Primary, 8.0 / 16.0),
        (StatKind::Spirit, "Spirit", Primary, 16.0 / 16.0),
        (StatKind::DefenseRating, "Defense Rating", Secondary, 16.0 / 16.0),
        (StatKind::DodgeRating, "Dodge Rating", Secondary, 16.0 / 16.0),
        (StatKind::ParryRating, "Parry Rating", Secondary, 16.0 / 16.0),
        (StatKind::BlockRating, "Block Rating", Secondary, 16.0 / 16.0),
        (StatKind::SpellCritRating, "Spell Crit Rating", Secondary, 16.0 / 16.0),
        (StatKind::HitRating, "Hit Rating", Secondary, 16.0 / 16.0),
        (StatKind::CritRating, "Crit Rating", Secondary, 16.0 / 16.0),
        (StatKind::Resilience, "Resilience", Secondary, 16.0 / 16.0),
        (StatKind::HasteRating, "Haste Rating", Secondary, 16.0 / 16.0),
        (StatKind::ExpertiseRating, "Expertise Rating", Secondary, 16.0 / 16.0),
        (StatKind::AttackPower, "Attack Power", Secondary, 8.0 / 16.0),
        (StatKind::ArmorPenetrationRating, "Armor Penetration Rating", Secondary, 16.0 / 16.0),
        (StatKind::SpellPenetration, "Spell Penetration", Secondary, 12.0 / 16.0),
        (StatKind::ArcaneResistance, "Resist Arcane", Primary, 16.0 / 16.0),
        (StatKind::FireResistance, "Resist Fire", Primary, 16.0 / 16.0),
        (StatKind::NatureResistance, "Resist Nature", Primary, 16.0 / 16.0),
        (StatKind::FrostResistance, "Resist Frost", Primary, 16.0 / 16.0),
        (StatKind::ShadowResistance, "Resist Shadow", Primary, 16.0 / 16.0),
    ];
    for (kind, name, group, efficiency) in constants {
        table.insert(kind, model(name, group, Modifier::Constant(efficiency)));
    }

    table
}
