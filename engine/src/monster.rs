use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Dice;
use crate::combatant::Combatant;

const VERMIN_DAMAGE_LO: i32 = 5;
const VERMIN_DAMAGE_HI: i32 = 7;

/// Monster kinds. Every kind has an action policy in `Monster::next_action`;
/// the match there is exhaustive, so adding a kind without a policy does
/// not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterKind {
    Vermin,
    Acolyte,
    Maw,
}

impl MonsterKind {
    pub fn name(self) -> &'static str {
        match self {
            MonsterKind::Vermin => "vermin",
            MonsterKind::Acolyte => "acolyte",
            MonsterKind::Maw => "maw",
        }
    }

    pub fn from_name(name: &str) -> Option<MonsterKind> {
        [MonsterKind::Vermin, MonsterKind::Acolyte, MonsterKind::Maw]
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

/// Parsed encounter input: one monster to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MonsterSpec {
    pub kind: MonsterKind,
    pub max_hp: i32,
}

/// Unique per-run monster identifier, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out sequential monster ids. Owned by whoever owns the campaign so
/// ids stay unique across encounters.
#[derive(Debug, Default)]
pub struct MonsterIdGen {
    next: u32,
}

impl MonsterIdGen {
    pub fn next_id(&mut self) -> MonsterId {
        let id = MonsterId(self.next);
        self.next += 1;
        id
    }
}

/// What a monster does on its turn. `damage` is aimed at the player;
/// `block` and `strength` are self-buffs; `weak` and `vulnerable` land on
/// the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonsterAction {
    pub damage: Option<i32>,
    pub block: i32,
    pub weak: i32,
    pub vulnerable: i32,
    pub strength: i32,
}

/// Kind-specific hidden state.
#[derive(Debug, Clone)]
enum Behavior {
    /// Damage rolled once at spawn, repeated every action.
    Vermin { damage: i32 },
    /// Call counter; damage grows with it, weak lands on odd calls.
    Acolyte { calls: u32 },
    /// Stateless; reacts to hp lost since spawn.
    Maw,
}

#[derive(Debug, Clone)]
pub struct Monster {
    pub id: MonsterId,
    pub kind: MonsterKind,
    pub combatant: Combatant,
    behavior: Behavior,
}

impl Monster {
    pub fn spawn(spec: MonsterSpec, ids: &mut MonsterIdGen, dice: &mut Dice) -> Self {
        let behavior = match spec.kind {
            MonsterKind::Vermin => Behavior::Vermin {
                damage: dice.roll(VERMIN_DAMAGE_LO, VERMIN_DAMAGE_HI),
            },
            MonsterKind::Acolyte => Behavior::Acolyte { calls: 0 },
            MonsterKind::Maw => Behavior::Maw,
        };
        Self {
            id: ids.next_id(),
            kind: spec.kind,
            combatant: Combatant::new(spec.max_hp),
            behavior,
        }
    }

    /// Produce this monster's action for the current enemy turn. Called
    /// exactly once per monster per enemy turn; stateful kinds advance
    /// their hidden state here.
    pub fn next_action(&mut self) -> MonsterAction {
        match &mut self.behavior {
            Behavior::Vermin { damage } => MonsterAction {
                damage: Some(*damage),
                ..Default::default()
            },
            Behavior::Acolyte { calls } => {
                let n = *calls;
                *calls += 1;
                if n == 0 {
                    MonsterAction {
                        damage: Some(0),
                        ..Default::default()
                    }
                } else {
                    MonsterAction {
                        damage: Some(6 + n as i32),
                        weak: if n % 2 == 1 { 1 } else { 0 },
                        ..Default::default()
                    }
                }
            }
            Behavior::Maw => {
                // Split the hp lost since spawn; block takes the odd point.
                let lost = self.combatant.max_hp - self.combatant.hp;
                let damage = lost / 2;
                MonsterAction {
                    damage: Some(damage),
                    block: lost - damage,
                    ..Default::default()
                }
            }
        }
    }
}
