//! Weapon tables: base DPS curves, damage spread and default attack speeds

use super::{DpsRow, SpreadRow, WeaponSubclass};
use crate::curve::Polynomial;
use crate::rules::{OneOrMany, SubclassFilter};
use crate::types::{InventoryType, Quality};
use std::collections::BTreeMap;

/// DPS row covering levels 1 to 139
fn row(sub: SubclassFilter, coefficients: Vec<f64>) -> DpsRow {
    DpsRow {
        sub,
        min: 1,
        max: 140,
        curve: Polynomial::new(coefficients),
    }
}

pub(super) fn weapon_dps() -> BTreeMap<Quality, BTreeMap<InventoryType, Vec<DpsRow>>> {
    use InventoryType::*;

    let mut table = BTreeMap::new();

    let mut epic = BTreeMap::new();
    epic.insert(
        OneHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                -0.46373319610341757,
                1.948435650742608,
                -0.05134655549435444,
                0.0006882333623959314,
                -0.000002864536021471839,
            ],
        )],
    );
    epic.insert(
        Bow,
        vec![row(
            SubclassFilter::one(2),
            vec![
                -1.8160185143165526,
                0.8176011515936384,
                0.00004631966853788777,
                -0.00002190693147532568,
                9.05587408850838e-8,
            ],
        )],
    );
    epic.insert(
        TwoHand,
        vec![row(
            SubclassFilter::one(-10),
            vec![
                -0.7405045351583416,
                2.5291730790997162,
                -0.06696995004352309,
                0.0009043795705405915,
                -0.000003796542201089664,
            ],
        )],
    );
    epic.insert(
        MainHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                -0.5178790028826743,
                0.4607974744638549,
                0.0061377306628395585,
                -0.00006505628736448377,
                2.70678156265153e-7,
                -3.427754270710267e-10,
            ],
        )],
    );
    epic.insert(
        OffHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                -0.8154206101027381,
                0.8306900043436485,
                -0.00029042355648253686,
                -0.000009668965907691205,
                4.243652454960742e-8,
            ],
        )],
    );
    epic.insert(
        Thrown,
        vec![row(
            SubclassFilter::any(),
            vec![
                -0.12483151990909214,
                1.605551235747681,
                -0.008135377299559524,
                0.000023833062012799013,
            ],
        )],
    );
    epic.insert(
        Ranged,
        vec![row(
            SubclassFilter::many(vec![3, 18]),
            vec![
                -2.9838107517317654,
                1.044765562039762,
                -0.003913212784379925,
                6.090860438060731e-7,
                5.016590029076527e-8,
            ],
        )],
    );
    table.insert(Quality::Epic, epic);

    let mut rare = BTreeMap::new();
    rare.insert(
        OneHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                -0.20849222965398617,
                0.5638012041071734,
                0.006185098993217638,
                -0.00010529221983632224,
                4.856933421922349e-7,
            ],
        )],
    );
    rare.insert(
        Bow,
        vec![row(
            SubclassFilter::one(2),
            vec![
                -0.743084783011632,
                0.7736504766853647,
                -0.002608641911723087,
                0.000008555961584640232,
            ],
        )],
    );
    rare.insert(
        TwoHand,
        vec![row(
            SubclassFilter::one(-10),
            vec![
                -1.4407940637747765,
                0.9868570871805012,
                -0.0023989071048527186,
                0.00000872913868341514,
            ],
        )],
    );
    rare.insert(
        MainHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                0.7081542428231806,
                0.6667863115619928,
                -0.0007860876748404416,
                0.000003503709149771536,
            ],
        )],
    );
    rare.insert(
        OffHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                0.31862967197133674,
                0.6822091250858717,
                -0.0007913172544140505,
                0.000003122564997039902,
            ],
        )],
    );
    rare.insert(
        Thrown,
        vec![row(
            SubclassFilter::any(),
            vec![
                0.625697055774282,
                0.8215995459019617,
                -0.0005425910100895496,
                0.0000032710921570688796,
            ],
        )],
    );
    rare.insert(
        Ranged,
        vec![row(
            SubclassFilter::many(vec![3, 18]),
            vec![
                -0.2913340491058385,
                0.7574162727175957,
                -0.0024457905894126005,
                0.000008067767939268019,
            ],
        )],
    );
    table.insert(Quality::Rare, rare);

    let mut uncommon = BTreeMap::new();
    uncommon.insert(
        OneHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                0.4042050606136029,
                0.49734508151683776,
                0.0007876333296000732,
                -0.0000013811950352316454,
            ],
        )],
    );
    uncommon.insert(
        Bow,
        vec![row(
            SubclassFilter::one(2),
            vec![
                0.22444917005698017,
                0.5822163577210446,
                -0.0006990769934425673,
                0.0000024109481894875313,
            ],
        )],
    );
    uncommon.insert(
        TwoHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                -1.2469017714620838,
                0.7595359183093786,
                -0.00052,
                0.0000031790771502211193,
            ],
        )],
    );
    uncommon.insert(
        MainHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                0.1888986564358558,
                0.514467630955437,
                0.0001449871791498711,
                0.0000022300382306673762,
            ],
        )],
    );
    uncommon.insert(
        OffHand,
        vec![row(
            SubclassFilter::any(),
            vec![
                0.9718419506869891,
                0.41682208197155196,
                0.001587412068902008,
                -0.0000030964817997803457,
            ],
        )],
    );
    uncommon.insert(
        Thrown,
        vec![row(
            SubclassFilter::any(),
            vec![
                2.766343576702119,
                0.46057309703714083,
                0.0031338924726831943,
                -0.000008297133052168907,
            ],
        )],
    );
    uncommon.insert(
        Ranged,
        vec![row(
            SubclassFilter::many(vec![3, 18]),
            vec![
                1.4129016032445012,
                0.4961550555995297,
                0.00032039463941715415,
                -8.224505599804983e-7,
            ],
        )],
    );
    table.insert(Quality::Uncommon, uncommon);
    table
}

fn spread(
    inventory_type: OneOrMany<InventoryType>,
    sub: Option<OneOrMany<u32>>,
    quality: OneOrMany<Quality>,
    spread: f64,
) -> SpreadRow {
    SpreadRow {
        inventory_type,
        sub,
        quality,
        min: 1,
        max: 140,
        spread,
    }
}

pub(super) fn weapon_spread() -> Vec<SpreadRow> {
    use InventoryType::*;
    use OneOrMany::{Many, One};
    use Quality::{Epic, Rare, Uncommon};

    let all = || Many(vec![Uncommon, Rare, Epic]);
    vec![
        spread(Many(vec![OneHand, Bow, OffHand, Thrown, Ranged]), None, all(), 0.54),
        spread(One(TwoHand), Some(Many(vec![1, 5, 6, 8, 10])), all(), 0.65),
        spread(One(TwoHand), Some(One(10)), all(), 0.54),
        spread(One(MainHand), None, all(), 0.54),
        spread(One(OneHand), Some(One(15)), One(Epic), 0.54),
        spread(One(Bow), Some(One(2)), One(Epic), 0.54),
        spread(One(MainHand), Some(One(13)), Many(vec![Uncommon, Rare]), 0.54),
        spread(One(MainHand), Some(One(0)), One(Epic), 0.54),
        spread(One(Thrown), Some(One(16)), Many(vec![Rare, Epic]), 0.65),
        spread(One(Ranged), Some(One(18)), Many(vec![Rare, Epic]), 0.65),
    ]
}

fn subclass(id: u32, name: &str, delays: &[(InventoryType, u32)], default_delay: u32) -> WeaponSubclass {
    WeaponSubclass {
        subclass: id,
        name: name.to_string(),
        delays: delays.iter().copied().collect(),
        default_delay,
    }
}

pub(super) fn weapon_subclasses() -> Vec<WeaponSubclass> {
    use InventoryType::*;

    let axe = [(MainHand, 2400), (OneHand, 2300), (OffHand, 2000), (TwoHand, 3400)];
    let mace = [(MainHand, 2000), (OneHand, 2300), (OffHand, 1500), (TwoHand, 3300)];
    let sword = [(MainHand, 1900), (OneHand, 2200), (OffHand, 1500), (TwoHand, 3300)];

    vec![
        subclass(0, "Axe", &axe, 2400),
        subclass(1, "Axe", &axe, 2400),
        subclass(2, "Bow", &[(Bow, 2700)], 2700),
        subclass(3, "Gun", &[(Ranged, 2700)], 2700),
        subclass(4, "Mace", &mace, 2000),
        subclass(5, "Mace", &mace, 2000),
        subclass(6, "Polearm", &[(TwoHand, 3200)], 3200),
        subclass(7, "Sword", &sword, 1900),
        subclass(8, "Sword", &sword, 1900),
        subclass(10, "Staff", &[(TwoHand, 2700)], 2700),
        subclass(13, "Fist", &[(MainHand, 2600), (OneHand, 2000), (OffHand, 2000)], 2000),
        subclass(15, "Dagger", &[(MainHand, 1700), (OneHand, 1700), (OffHand, 1600)], 1700),
        subclass(16, "Thrown", &[(Thrown, 1900)], 1900),
        subclass(18, "Crossbow", &[(Ranged, 2900)], 2900),
        subclass(19, "Wand", &[(Ranged, 1700)], 1700),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{self, Rule};
    use crate::types::{ItemClass, ItemContext};

    fn weapon(slot: InventoryType, subclass: u32, quality: Quality, level: u32) -> ItemContext {
        ItemContext::new(ItemClass::Weapon, slot, subclass, quality, level)
    }

    #[test]
    fn test_every_quality_covers_every_weapon_slot() {
        let table = weapon_dps();
        for quality in [Quality::Uncommon, Quality::Rare, Quality::Epic] {
            let by_type = &table[&quality];
            for slot in [
                InventoryType::OneHand,
                InventoryType::Bow,
                InventoryType::TwoHand,
                InventoryType::MainHand,
                InventoryType::OffHand,
                InventoryType::Thrown,
                InventoryType::Ranged,
            ] {
                assert_eq!(by_type[&slot].len(), 1, "{} {}", quality, slot);
            }
        }
    }

    #[test]
    fn test_two_hand_dps_excludes_staves_above_uncommon() {
        let table = weapon_dps();
        let rows = &table[&Quality::Rare][&InventoryType::TwoHand];
        assert!(rows[0].matches(&weapon(InventoryType::TwoHand, 1, Quality::Rare, 60)));
        assert!(!rows[0].matches(&weapon(InventoryType::TwoHand, 10, Quality::Rare, 60)));

        let rows = &table[&Quality::Uncommon][&InventoryType::TwoHand];
        assert!(rows[0].matches(&weapon(InventoryType::TwoHand, 10, Quality::Uncommon, 60)));
    }

    #[test]
    fn test_ranged_dps_rejects_wands() {
        let table = weapon_dps();
        let rows = &table[&Quality::Epic][&InventoryType::Ranged];
        assert!(rows[0].matches(&weapon(InventoryType::Ranged, 18, Quality::Epic, 80)));
        assert!(!rows[0].matches(&weapon(InventoryType::Ranged, 19, Quality::Epic, 80)));
    }

    #[test]
    fn test_spread_first_match() {
        let rows = weapon_spread();
        // Staves match the generic two-hander row before their own row
        let staff = weapon(InventoryType::TwoHand, 10, Quality::Rare, 60);
        assert_eq!(rules::first_match(&rows, &staff), Some(1));
        assert_eq!(rules::resolve(&rows, &staff), Some(0.65));

        let dagger = weapon(InventoryType::OneHand, 15, Quality::Epic, 60);
        assert_eq!(rules::first_match(&rows, &dagger), Some(0));

        let crossbow = weapon(InventoryType::Ranged, 18, Quality::Rare, 140);
        assert_eq!(rules::resolve(&rows, &crossbow), Some(0.54));

        let two_hand_sword_poor = weapon(InventoryType::TwoHand, 8, Quality::Poor, 60);
        assert_eq!(rules::resolve(&rows, &two_hand_sword_poor), None);
    }

    #[test]
    fn test_shared_delay_groups() {
        let subclasses = weapon_subclasses();
        let two_hand_axe = subclasses.iter().find(|s| s.subclass == 1).unwrap();
        assert_eq!(two_hand_axe.delay_for(InventoryType::TwoHand), 3400);
        let wand = subclasses.iter().find(|s| s.subclass == 19).unwrap();
        assert_eq!(wand.delay_for(InventoryType::Ranged), 1700);
        assert_eq!(wand.delay_for(InventoryType::OneHand), 1700);
    }
}
