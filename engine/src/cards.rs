use serde::{Deserialize, Serialize};

/// The five playable card kinds. The catalog is fixed, compiled-in data;
/// piles hold plain `CardKind` values since cards carry no identity beyond
/// their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Strike,
    Defend,
    Slam,
    Sap,
    Brace,
}

/// Static data for one card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub name: &'static str,
    pub description: &'static str,
    pub damage: i32,
    pub block: i32,
    pub energy_cost: i32,
    pub weak: i32,
    pub vulnerable: i32,
    pub strength: i32,
    pub requires_target: bool,
}

const STRIKE: Card = Card {
    name: "Strike",
    description: "Deal 6 damage.",
    damage: 6,
    block: 0,
    energy_cost: 1,
    weak: 0,
    vulnerable: 0,
    strength: 0,
    requires_target: true,
};

const DEFEND: Card = Card {
    name: "Defend",
    description: "Gain 5 block.",
    damage: 0,
    block: 5,
    energy_cost: 1,
    weak: 0,
    vulnerable: 0,
    strength: 0,
    requires_target: false,
};

const SLAM: Card = Card {
    name: "Slam",
    description: "Deal 7 damage. Gain 5 block.",
    damage: 7,
    block: 5,
    energy_cost: 2,
    weak: 0,
    vulnerable: 0,
    strength: 0,
    requires_target: true,
};

const SAP: Card = Card {
    name: "Sap",
    description: "Deal 3 damage. Apply 1 weak. Apply 2 vulnerable.",
    damage: 3,
    block: 0,
    energy_cost: 0,
    weak: 1,
    vulnerable: 2,
    strength: 0,
    requires_target: true,
};

const BRACE: Card = Card {
    name: "Brace",
    description: "Gain 8 block and 1 strength.",
    damage: 0,
    block: 8,
    energy_cost: 1,
    weak: 0,
    vulnerable: 0,
    strength: 1,
    requires_target: false,
};

impl CardKind {
    pub const ALL: [CardKind; 5] = [
        CardKind::Strike,
        CardKind::Defend,
        CardKind::Slam,
        CardKind::Sap,
        CardKind::Brace,
    ];

    pub fn card(self) -> &'static Card {
        match self {
            CardKind::Strike => &STRIKE,
            CardKind::Defend => &DEFEND,
            CardKind::Slam => &SLAM,
            CardKind::Sap => &SAP,
            CardKind::Brace => &BRACE,
        }
    }

    pub fn name(self) -> &'static str {
        self.card().name
    }

    pub fn from_name(name: &str) -> Option<CardKind> {
        CardKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

/// Player archetypes. Max hp and starting deck are static configuration,
/// not engine logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Vanguard,
    Stalker,
}

impl Archetype {
    pub fn name(self) -> &'static str {
        match self {
            Archetype::Vanguard => "Vanguard",
            Archetype::Stalker => "Stalker",
        }
    }

    pub fn max_hp(self) -> i32 {
        match self {
            Archetype::Vanguard => 80,
            Archetype::Stalker => 70,
        }
    }

    /// Deck order matters: the draw pile is drawn from the back.
    pub fn starting_deck(self) -> Vec<CardKind> {
        use CardKind::*;
        match self {
            Archetype::Vanguard => vec![
                Strike, Strike, Strike, Strike, Strike, Defend, Defend, Defend, Defend, Slam,
            ],
            Archetype::Stalker => vec![
                Strike, Strike, Strike, Strike, Strike, Defend, Defend, Defend, Defend, Defend,
                Sap, Brace,
            ],
        }
    }

    pub fn from_name(name: &str) -> Option<Archetype> {
        [Archetype::Vanguard, Archetype::Stalker]
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }
}
