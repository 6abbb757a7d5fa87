//! Static rune table.
//!
//! Declaration order matters: when several runes list the same effect id,
//! the first one declared here is the one an effect resolves to.

use super::types::Rune;

/// All runes, in declaration order.
pub const ALL_RUNES: &[Rune] = &[
    Rune {
        key: "age",
        name: "Agilité",
        short_name: "Age",
        density: 1.0,
        effect: 1.0,
        characteristic_id: Some(14),
        effect_ids: &[119],
    },
    Rune {
        key: "cha",
        name: "Chance",
        short_name: "Cha",
        density: 1.0,
        effect: 1.0,
        characteristic_id: Some(13),
        effect_ids: &[123],
    },
    Rune {
        key: "cri",
        name: "Critique",
        short_name: "Cri",
        density: 10.0,
        effect: 1.0,
        characteristic_id: Some(18),
        effect_ids: &[115],
    },
    Rune {
        key: "do",
        name: "Dommages",
        short_name: "Do",
        density: 20.0,
        effect: 1.0,
        characteristic_id: Some(16),
        effect_ids: &[112],
    },
    Rune {
        key: "do_air",
        name: "Dommages Air",
        short_name: "Do Air",
        density: 5.0,
        effect: 1.0,
        characteristic_id: Some(91),
        effect_ids: &[428],
    },
    Rune {
        key: "do_cri",
        name: "Dommages Critiques",
        short_name: "Do Cri",
        density: 5.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[418],
    },
    Rune {
        key: "do_eau",
        name: "Dommages Eau",
        short_name: "Do Eau",
        density: 5.0,
        effect: 1.0,
        characteristic_id: Some(90),
        effect_ids: &[426],
    },
    Rune {
        key: "do_feu",
        name: "Dommages Feu",
        short_name: "Do Feu",
        density: 5.0,
        effect: 1.0,
        characteristic_id: Some(89),
        effect_ids: &[424],
    },
    Rune {
        key: "do_neutre",
        name: "Dommages Neutre",
        short_name: "Do Neutre",
        density: 5.0,
        effect: 1.0,
        characteristic_id: Some(87),
        effect_ids: &[430],
    },
    Rune {
        key: "do_per_ar",
        name: "% Dommages Armes",
        short_name: "% Do Armes",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[1173],
    },
    Rune {
        key: "do_per_di",
        name: "% Dommages Distance",
        short_name: "% Do Dist",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[1172],
    },
    Rune {
        key: "do_per_me",
        name: "% Dommages Mêlée",
        short_name: "% Do Mêlée",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[1171],
    },
    Rune {
        key: "do_per_so",
        name: "% Dommages Sorts",
        short_name: "% Do Sorts",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[1174],
    },
    Rune {
        key: "do_pi",
        name: "Dommages Pièges",
        short_name: "Do Pi",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[225],
    },
    Rune {
        key: "do_pou",
        name: "Dommages Poussée",
        short_name: "Do Pou",
        density: 5.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[414],
    },
    Rune {
        key: "do_ren",
        name: "Renvoie Dommages",
        short_name: "Renv Do",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[220],
    },
    Rune {
        key: "do_terre",
        name: "Dommages Terre",
        short_name: "Do Terre",
        density: 5.0,
        effect: 1.0,
        characteristic_id: Some(88),
        effect_ids: &[422],
    },
    Rune {
        key: "fo",
        name: "Force",
        short_name: "Fo",
        density: 1.0,
        effect: 1.0,
        characteristic_id: Some(10),
        effect_ids: &[118],
    },
    Rune {
        key: "fui",
        name: "Fuite",
        short_name: "Fui",
        density: 4.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[752],
    },
    Rune {
        key: "ga_pa",
        name: "PA",
        short_name: "Pa",
        density: 100.0,
        effect: 1.0,
        characteristic_id: Some(1),
        effect_ids: &[111],
    },
    Rune {
        key: "ga_pme",
        name: "PM",
        short_name: "Pme",
        density: 90.0,
        effect: 1.0,
        characteristic_id: Some(23),
        effect_ids: &[128],
    },
    Rune {
        key: "ine",
        name: "Intelligence",
        short_name: "Ine",
        density: 1.0,
        effect: 1.0,
        characteristic_id: Some(15),
        effect_ids: &[126],
    },
    Rune {
        key: "ini",
        name: "Initiative",
        short_name: "Ini",
        density: 0.1,
        effect: 10.0,
        characteristic_id: Some(44),
        effect_ids: &[174],
    },
    Rune {
        key: "invo",
        name: "Invocations",
        short_name: "Invo",
        density: 30.0,
        effect: 1.0,
        characteristic_id: Some(26),
        effect_ids: &[182],
    },
    Rune {
        key: "per_pi",
        name: "% Dommages Pièges",
        short_name: "% Pi",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[226],
    },
    Rune {
        key: "po",
        name: "Portée",
        short_name: "Po",
        density: 51.0,
        effect: 1.0,
        characteristic_id: Some(19),
        effect_ids: &[117],
    },
    Rune {
        key: "pod",
        name: "Pods",
        short_name: "Pod",
        density: 0.25,
        effect: 10.0,
        characteristic_id: None,
        effect_ids: &[158],
    },
    Rune {
        key: "prospe",
        name: "Prospection",
        short_name: "Prosp",
        density: 3.0,
        effect: 1.0,
        characteristic_id: Some(48),
        effect_ids: &[176],
    },
    Rune {
        key: "pui",
        name: "Puissance",
        short_name: "Pui",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[138],
    },
    Rune {
        key: "re_air",
        name: "Résistance Air",
        short_name: "Rés Air",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[242],
    },
    Rune {
        key: "re_cri",
        name: "Résistance Critique",
        short_name: "Rés Cri",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[420],
    },
    Rune {
        key: "re_eau",
        name: "Résistance Eau",
        short_name: "Rés Eau",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[241],
    },
    Rune {
        key: "re_feu",
        name: "Résistance Feu",
        short_name: "Rés Feu",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[243],
    },
    Rune {
        key: "re_neutre",
        name: "Résistance Neutre",
        short_name: "Rés Neutre",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[244],
    },
    Rune {
        key: "re_pa",
        name: "Esquive PA",
        short_name: "Esq PA",
        density: 7.0,
        effect: 1.0,
        characteristic_id: Some(27),
        effect_ids: &[160],
    },
    Rune {
        key: "re_per_air",
        name: "% Résistance Air",
        short_name: "% Rés Air",
        density: 6.0,
        effect: 1.0,
        characteristic_id: Some(34),
        effect_ids: &[212],
    },
    Rune {
        key: "re_per_di",
        name: "% Résistance Distance",
        short_name: "% Rés Dist",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[420],
    },
    Rune {
        key: "re_per_eau",
        name: "% Résistance Eau",
        short_name: "% Rés Eau",
        density: 6.0,
        effect: 1.0,
        characteristic_id: Some(37),
        effect_ids: &[211],
    },
    Rune {
        key: "re_per_feu",
        name: "% Résistance Feu",
        short_name: "% Rés Feu",
        density: 6.0,
        effect: 1.0,
        characteristic_id: Some(35),
        effect_ids: &[213],
    },
    Rune {
        key: "re_per_me",
        name: "% Résistance Mêlée",
        short_name: "% Rés Mêlée",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[418],
    },
    Rune {
        key: "re_per_neutre",
        name: "% Résistance Neutre",
        short_name: "% Rés Neutre",
        density: 6.0,
        effect: 1.0,
        characteristic_id: Some(33),
        effect_ids: &[214],
    },
    Rune {
        key: "re_per_terre",
        name: "% Résistance Terre",
        short_name: "% Rés Terre",
        density: 6.0,
        effect: 1.0,
        characteristic_id: Some(36),
        effect_ids: &[210],
    },
    Rune {
        key: "re_pm",
        name: "Esquive PM",
        short_name: "Esq PM",
        density: 7.0,
        effect: 1.0,
        characteristic_id: Some(28),
        effect_ids: &[161],
    },
    Rune {
        key: "re_pou",
        name: "Résistance Poussée",
        short_name: "Rés Pou",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[416],
    },
    Rune {
        key: "re_terre",
        name: "Résistance Terre",
        short_name: "Rés Terre",
        density: 2.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[240],
    },
    Rune {
        key: "ret_pa",
        name: "Retrait PA",
        short_name: "Ret PA",
        density: 7.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[410],
    },
    Rune {
        key: "ret_pm",
        name: "Retrait PM",
        short_name: "Ret PM",
        density: 7.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[412],
    },
    Rune {
        key: "sa",
        name: "Sagesse",
        short_name: "Sa",
        density: 3.0,
        effect: 1.0,
        characteristic_id: Some(12),
        effect_ids: &[124],
    },
    Rune {
        key: "so",
        name: "Soins",
        short_name: "So",
        density: 10.0,
        effect: 1.0,
        characteristic_id: Some(49),
        effect_ids: &[178],
    },
    Rune {
        key: "tac",
        name: "Tacle",
        short_name: "Tac",
        density: 4.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[753],
    },
    Rune {
        key: "vi",
        name: "Vitalité",
        short_name: "Vi",
        density: 1.0,
        effect: 3.0,
        characteristic_id: Some(11),
        effect_ids: &[125],
    },
    // Special rune, always listed last
    Rune {
        key: "chasse",
        name: "Chasse",
        short_name: "Chasse",
        density: 5.0,
        effect: 1.0,
        characteristic_id: None,
        effect_ids: &[2800],
    },
];
