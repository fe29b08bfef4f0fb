//! Slot coefficients for armor-class and weapon-class items

use super::SlotEntry;
use crate::modifier::{Modifier, QualityBand};
use crate::types::{InventoryType, Quality};
use std::collections::BTreeMap;

fn slot(name: &str, sell_mod: f64, armor_mod: f64, slot_mod: Modifier, subclasses: &[u32]) -> SlotEntry {
    SlotEntry {
        name: name.to_string(),
        sell_mod,
        armor_mod,
        slot_mod,
        subclasses: subclasses.to_vec(),
    }
}

/// Same slot share for uncommon, rare and epic items
fn share(value: f64) -> Modifier {
    Modifier::uniform(value, value, value)
}

pub(super) fn armor_slots() -> BTreeMap<InventoryType, SlotEntry> {
    use InventoryType::*;

    let plated: [u32; 4] = [1, 2, 3, 4];
    let mut table = BTreeMap::new();
    table.insert(Head, slot("Head", 12.0 / 16.0, 13.0 / 16.0, share(16.0 / 16.0), &plated));
    table.insert(Neck, slot("Neck", 8.0 / 16.0, 0.0, share(4.0 / 16.0), &[0]));
    table.insert(Shoulders, slot("Shoulder", 12.0 / 16.0, 12.0 / 16.0, share(8.0 / 16.0), &plated));
    table.insert(Shirt, slot("Shirt", 4.0 / 16.0, 0.0, Modifier::Constant(1.0 / 32.0), &[1]));
    table.insert(Chest, slot("Chest", 16.0 / 16.0, 16.0 / 16.0, Modifier::Constant(16.0 / 16.0), &plated));
    table.insert(Waist, slot("Waist", 8.0 / 16.0, 9.0 / 16.0, share(8.0 / 16.0), &plated));
    table.insert(Legs, slot("Legs", 16.0 / 16.0, 14.0 / 16.0, Modifier::Constant(16.0 / 16.0), &plated));
    table.insert(Feet, slot("Feet", 12.0 / 16.0, 11.0 / 16.0, share(8.0 / 16.0), &plated));
    table.insert(Wrists, slot("Wrists", 8.0 / 16.0, 7.0 / 16.0, share(4.0 / 16.0), &plated));
    table.insert(Hands, slot("Hands", 8.0 / 16.0, 10.0 / 16.0, share(8.0 / 16.0), &plated));
    table.insert(Finger, slot("Finger", 8.0 / 16.0, 0.0, share(4.0 / 16.0), &[0]));
    table.insert(Trinket, slot("Trinket", 28.0 / 16.0, 0.0, share(8.0 / 16.0), &[0]));
    table.insert(Shield, slot("Shield", 15.0 / 16.0, 16.0 / 16.0, share(4.0 / 16.0), &[6]));
    table.insert(
        Back,
        slot(
            "Back",
            12.0 / 16.0,
            8.0 / 16.0,
            Modifier::ByQuality(vec![
                QualityBand::new(Quality::Epic, 1, 4.0 / 16.0),
                QualityBand::new(Quality::Rare, 1, 4.0 / 16.0),
                QualityBand::new(Quality::Uncommon, 80, 4.0 / 16.0),
                QualityBand::new(Quality::Uncommon, 1, 3.0 / 16.0),
            ]),
            &[1],
        ),
    );
    table.insert(Tabard, slot("Tabard", 4.0 / 16.0, 0.0, Modifier::Constant(1.0 / 32.0), &[0]));
    table.insert(Robe, slot("Chest (Robe)", 16.0 / 16.0, 16.0 / 16.0, Modifier::Constant(16.0 / 16.0), &plated));
    table.insert(HeldOffHand, slot("Held Off-hand", 8.0 / 16.0, 0.0, Modifier::Constant(3.0 / 16.0), &[0]));
    table.insert(Relic, slot("Relic", 4.0 / 16.0, 0.0, Modifier::Constant(1.0 / 32.0), &[7, 8, 9, 10]));
    table
}

pub(super) fn weapon_slots() -> BTreeMap<InventoryType, SlotEntry> {
    use InventoryType::*;

    let one_handed: [u32; 5] = [0, 4, 7, 15, 13];
    let mut table = BTreeMap::new();
    table.insert(OneHand, slot("One-Hand", 7.0 / 16.0, 0.0, Modifier::Constant(2.0 / 16.0), &one_handed));
    table.insert(Bow, slot("Bow", 16.0 / 16.0, 0.0, Modifier::Constant(16.0 / 16.0), &[2]));
    table.insert(TwoHand, slot("Two-Hand", 16.0 / 16.0, 0.0, Modifier::Constant(16.0 / 16.0), &[1, 5, 8, 6, 10]));
    table.insert(MainHand, slot("Main-Hand", 7.0 / 16.0, 0.0, Modifier::Constant(2.0 / 16.0), &one_handed));
    table.insert(OffHand, slot("Off-Hand", 7.0 / 16.0, 0.0, Modifier::Constant(2.0 / 16.0), &one_handed));
    table.insert(Thrown, slot("Thrown", 5.0 / 16.0, 0.0, Modifier::Constant(5.0 / 16.0), &[16]));
    table.insert(Ranged, slot("Ranged", 5.0 / 16.0, 0.0, Modifier::Constant(5.0 / 16.0), &[3, 18, 19]));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemClass, ItemContext};

    #[test]
    fn test_back_slot_share_changes_at_80_for_uncommon() {
        let table = armor_slots();
        let back = &table[&InventoryType::Back];
        let ctx = ItemContext::new(ItemClass::Armor, InventoryType::Back, 1, Quality::Uncommon, 79);
        assert_eq!(back.slot_mod.evaluate(&ctx), Some(3.0 / 16.0));
        assert_eq!(back.slot_mod.evaluate(&ItemContext { level: 80, ..ctx }), Some(4.0 / 16.0));
    }

    #[test]
    fn test_jewelry_has_no_armor() {
        let table = armor_slots();
        for slot in [InventoryType::Neck, InventoryType::Finger, InventoryType::Trinket] {
            assert_eq!(table[&slot].armor_mod, 0.0);
        }
        assert!(table[&InventoryType::Shield].allows_subclass(6));
        assert!(!table[&InventoryType::Shield].allows_subclass(4));
    }
}
