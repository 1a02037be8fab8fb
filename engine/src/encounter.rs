use tracing::debug;

use crate::Dice;
use crate::monster::{Monster, MonsterId, MonsterIdGen, MonsterSpec};
use crate::player::Player;

/// Outgoing damage scaling: x1.25 while the target is vulnerable, x0.75
/// while the attacker is weak, truncated toward zero. Both sides of the
/// fight use this rule.
pub fn scaled_damage(base: i32, target_vulnerable: bool, attacker_weak: bool) -> i32 {
    let mut damage = base as f64;
    if target_vulnerable {
        damage *= 1.25;
    }
    if attacker_weak {
        damage *= 0.75;
    }
    damage as i32
}

/// One battle against a fixed group of monsters.
///
/// The encounter borrows the player and the dice for its whole lifetime
/// and alternates between the player turn and the enemy turn. It is active
/// for as long as any monster remains; the surrounding loop watches the
/// player's hp for defeat.
pub struct Encounter<'a> {
    player: &'a mut Player,
    dice: &'a mut Dice,
    monsters: Vec<Monster>,
    player_turn: bool,
}

impl<'a> Encounter<'a> {
    /// Spawn the requested monsters, fold the player's discard pile back
    /// into the deck, and open on the player turn.
    pub fn new(
        player: &'a mut Player,
        dice: &'a mut Dice,
        ids: &mut MonsterIdGen,
        specs: &[MonsterSpec],
    ) -> Self {
        let monsters = specs
            .iter()
            .map(|spec| Monster::spawn(*spec, ids, dice))
            .collect::<Vec<_>>();
        for m in &monsters {
            debug!(id = %m.id, kind = m.kind.name(), hp = m.combatant.hp, "spawned");
        }
        player.start_new_encounter();
        let mut enc = Self {
            player,
            dice,
            monsters,
            player_turn: false,
        };
        enc.start_player_turn();
        enc
    }

    pub fn player(&self) -> &Player {
        &*self.player
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Mutable view of the active monsters, for effects layered on top of
    /// the core rules. The active set itself can only shrink through
    /// combat.
    pub fn monsters_mut(&mut self) -> &mut [Monster] {
        &mut self.monsters
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    /// The encounter ends the instant the last monster is removed.
    pub fn is_active(&self) -> bool {
        !self.monsters.is_empty()
    }

    /// Play a card from the player's hand, optionally at a monster.
    ///
    /// Returns false, with no state touched at all, when the play is
    /// illegal: out of turn, card not in hand, missing or stale target, or
    /// not enough energy.
    pub fn player_apply_card(&mut self, card_name: &str, target: Option<MonsterId>) -> bool {
        if !self.player_turn {
            debug!(card = card_name, "card rejected: not the player turn");
            return false;
        }
        let Some(kind) = self
            .player
            .hand()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(card_name))
        else {
            debug!(card = card_name, "card rejected: not in hand");
            return false;
        };
        let card = kind.card();
        let target_idx = if card.requires_target {
            let Some(id) = target else {
                debug!(card = card.name, "card rejected: target required");
                return false;
            };
            let Some(idx) = self.monsters.iter().position(|m| m.id == id) else {
                debug!(card = card.name, target = %id, "card rejected: no such monster");
                return false;
            };
            Some(idx)
        } else {
            None
        };
        if self.player.energy() < card.energy_cost {
            debug!(card = card.name, energy = self.player.energy(), "card rejected: energy");
            return false;
        }

        // Legal from here on; apply in full.
        self.player.combatant.add_block(card.block);
        if card.strength > 0 {
            self.player.combatant.add_strength(card.strength);
        }
        if let Some(idx) = target_idx {
            let attacker_weak = self.player.combatant.weak > 0;
            let m = &mut self.monsters[idx];
            if card.weak > 0 {
                m.combatant.add_weak(card.weak);
            }
            if card.vulnerable > 0 {
                m.combatant.add_vulnerable(card.vulnerable);
            }
            let damage = scaled_damage(card.damage, m.combatant.vulnerable > 0, attacker_weak);
            m.combatant.reduce_hp(damage);
            debug!(card = card.name, target = %m.id, damage, hp = m.combatant.hp, "card hit");
        }
        self.monsters.retain(|m| {
            if m.combatant.is_defeated() {
                debug!(id = %m.id, kind = m.kind.name(), "monster defeated");
            }
            !m.combatant.is_defeated()
        });
        self.player.play_card(kind)
    }

    /// Player turn over: the hand goes to the discard pile and every
    /// monster runs its turn-start upkeep.
    pub fn end_player_turn(&mut self) {
        if !self.player_turn {
            return;
        }
        self.player_turn = false;
        self.player.end_turn();
        for m in &mut self.monsters {
            m.combatant.start_turn();
        }
        debug!("player turn ended");
    }

    /// Run every monster's action, then hand the turn back to the player.
    /// A no-op while the player turn is still open.
    pub fn enemy_turn(&mut self) {
        if self.player_turn {
            debug!("enemy turn rejected: player turn still open");
            return;
        }
        for m in &mut self.monsters {
            let action = m.next_action();
            if action.weak > 0 {
                self.player.combatant.add_weak(action.weak);
            }
            if action.vulnerable > 0 {
                self.player.combatant.add_vulnerable(action.vulnerable);
            }
            if action.strength > 0 {
                m.combatant.add_strength(action.strength);
            }
            if action.block > 0 {
                m.combatant.add_block(action.block);
            }
            if let Some(base) = action.damage {
                let damage =
                    scaled_damage(base, self.player.combatant.vulnerable > 0, m.combatant.weak > 0)
                        + m.combatant.strength;
                self.player.combatant.reduce_hp(damage);
                debug!(id = %m.id, kind = m.kind.name(), damage, player_hp = self.player.combatant.hp, "monster attacks");
            }
        }
        self.start_player_turn();
    }

    fn start_player_turn(&mut self) {
        self.player_turn = true;
        self.player.new_turn(self.dice);
        debug!(energy = self.player.energy(), hand = self.player.hand().len(), "player turn starts");
    }
}
