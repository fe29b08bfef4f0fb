//! Base armor curves per quality and armor type
//!
//! Each curve gives the armor of a chest piece at an item level; slots scale
//! it by their armor coefficient.

use crate::curve::Polynomial;
use crate::types::{ArmorType, Quality};
use std::collections::BTreeMap;

pub(super) fn armor_curves() -> BTreeMap<Quality, BTreeMap<ArmorType, Polynomial>> {
    let mut table = BTreeMap::new();

    let mut epic = BTreeMap::new();
    epic.insert(
        ArmorType::Cloth,
        Polynomial::new(vec![
            2.5281010518232847,
            1.331747228269099,
            0.00944593034412355,
            -0.00006849549050619422,
            1.2354987243172888e-7,
        ]),
    );
    epic.insert(
        ArmorType::Leather,
        Polynomial::new(vec![
            1.5555029361141006,
            3.0358551084632817,
            0.010441421831956765,
            -0.00009593877599476476,
            1.8476622137336274e-7,
        ]),
    );
    epic.insert(
        ArmorType::Mail,
        Polynomial::new(vec![
            -7.5320987581173,
            9.77641667353662,
            -0.07509546031114869,
            0.0008277573203410827,
            -0.000003968983245793348,
            6.374377745994348e-9,
        ]),
    );
    epic.insert(
        ArmorType::Plate,
        Polynomial::new(vec![
            5.102460977820272,
            9.509093276356396,
            0.07993511436723227,
            -0.0005654807309686971,
            0.0000010185213184327804,
        ]),
    );
    epic.insert(
        ArmorType::Shield,
        Polynomial::new(vec![
            -68.32056773225723,
            52.05238254766441,
            -0.2633818416382036,
            0.0032416668345449868,
            -0.000017286124455117578,
            2.9484202941863735e-8,
        ]),
    );
    table.insert(Quality::Epic, epic);

    let mut rare = BTreeMap::new();
    rare.insert(
        ArmorType::Cloth,
        Polynomial::new(vec![
            -1.3423883493277042,
            2.200587627369824,
            -0.023452920240817212,
            0.0002057092987396633,
            -5.346376377648381e-7,
        ]),
    );
    rare.insert(
        ArmorType::Leather,
        Polynomial::new(vec![
            -4.3185941880426775,
            5.22367821032947,
            -0.06638307153372526,
            0.0005313187225831865,
            -0.0000013052892289727186,
        ]),
    );
    rare.insert(
        ArmorType::Mail,
        Polynomial::new(vec![
            31.445856660984333,
            8.055343208054605,
            -0.08529020006193702,
            0.0007948792659050846,
            -0.0000021078789263816906,
        ]),
    );
    rare.insert(
        ArmorType::Plate,
        Polynomial::new(vec![
            -28.396604349521805,
            16.329061088393786,
            -0.16567265946139803,
            0.0014420657876884682,
            -0.000003730547431550686,
        ]),
    );
    rare.insert(
        ArmorType::Shield,
        Polynomial::new(vec![
            -44.06927830732479,
            60.18645188729204,
            -4.54601783641102,
            0.19213407170465685,
            -0.003571960126176484,
            0.00003452904159703563,
            -1.8099081604737638e-7,
            4.887914417526831e-10,
            -5.340719565656609e-13,
        ]),
    );
    table.insert(Quality::Rare, rare);

    let mut uncommon = BTreeMap::new();
    uncommon.insert(
        ArmorType::Cloth,
        Polynomial::new(vec![
            8.528248246851293,
            1.13588900743772,
            0.00018480865552209587,
        ]),
    );
    uncommon.insert(
        ArmorType::Leather,
        Polynomial::new(vec![
            39.0574346793,
            1.8042785077,
            0.0014831968,
        ]),
    );
    uncommon.insert(
        ArmorType::Mail,
        Polynomial::new(vec![
            74.58060541262037,
            3.93396431596397,
            0.004366253997171184,
        ]),
    );
    uncommon.insert(
        ArmorType::Plate,
        Polynomial::new(vec![
            -8.953978248173765,
            9.748506027592633,
            -0.003686683605302056,
        ]),
    );
    uncommon.insert(
        ArmorType::Shield,
        Polynomial::new(vec![
            82.22823,
            29.92042,
            -0.01284,
            0.00007097724866192495,
        ]),
    );
    table.insert(Quality::Uncommon, uncommon);
    table
}
