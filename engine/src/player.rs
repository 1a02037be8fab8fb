use tracing::debug;

use crate::Dice;
use crate::cards::{Archetype, CardKind};
use crate::combatant::Combatant;

pub const ENERGY_CAP: i32 = 3;
pub const HAND_SIZE: usize = 5;

/// The player: a combatant plus energy and the three card piles.
///
/// Hand, deck and discard are disjoint; their combined multiset never
/// changes during an encounter, cards only move between piles. The top of
/// the deck is the end of the vec.
#[derive(Debug, Clone)]
pub struct Player {
    pub combatant: Combatant,
    energy: i32,
    hand: Vec<CardKind>,
    deck: Vec<CardKind>,
    discard: Vec<CardKind>,
}

impl Player {
    pub fn new(archetype: Archetype) -> Self {
        Self::with_deck(archetype.max_hp(), archetype.starting_deck())
    }

    pub fn with_deck(max_hp: i32, deck: Vec<CardKind>) -> Self {
        Self {
            combatant: Combatant::new(max_hp),
            energy: ENERGY_CAP,
            hand: Vec::new(),
            deck,
            discard: Vec::new(),
        }
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn hand(&self) -> &[CardKind] {
        &self.hand
    }

    pub fn deck(&self) -> &[CardKind] {
        &self.deck
    }

    pub fn discard(&self) -> &[CardKind] {
        &self.discard
    }

    /// Encounter boundary: fold the discard pile back into the deck.
    pub fn start_new_encounter(&mut self) {
        self.deck.append(&mut self.discard);
    }

    /// Turn-start upkeep: combatant decay, energy refill, draw back up to
    /// a full hand.
    pub fn new_turn(&mut self, dice: &mut Dice) {
        self.combatant.start_turn();
        self.energy = ENERGY_CAP;
        self.draw(dice);
    }

    /// Turn end moves the whole hand to the discard pile.
    pub fn end_turn(&mut self) {
        self.discard.append(&mut self.hand);
    }

    /// Move one copy of `kind` from hand to discard and pay its cost.
    /// Returns false, touching nothing, if the card is missing or too
    /// expensive.
    pub fn play_card(&mut self, kind: CardKind) -> bool {
        let Some(idx) = self.hand.iter().position(|c| *c == kind) else {
            debug!(card = kind.name(), "play rejected: not in hand");
            return false;
        };
        let cost = kind.card().energy_cost;
        if cost > self.energy {
            debug!(card = kind.name(), cost, energy = self.energy, "play rejected: energy");
            return false;
        }
        self.hand.remove(idx);
        self.energy -= cost;
        self.discard.push(kind);
        true
    }

    fn draw(&mut self, dice: &mut Dice) {
        while self.hand.len() < HAND_SIZE {
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                // Refill mid-draw: the discard pile becomes the new deck.
                self.deck.append(&mut self.discard);
                dice.shuffle(&mut self.deck);
            }
            if let Some(card) = self.deck.pop() {
                self.hand.push(card);
            }
        }
    }
}
