use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod cards;
pub mod combatant;
pub mod content;
pub mod encounter;
pub mod monster;
pub mod player;

pub use cards::{Archetype, Card, CardKind};
pub use combatant::Combatant;
pub use encounter::{Encounter, scaled_damage};
pub use monster::{Monster, MonsterAction, MonsterId, MonsterIdGen, MonsterKind, MonsterSpec};
pub use player::{ENERGY_CAP, HAND_SIZE, Player};

/// Single random source for everything the engine leaves to chance
/// (monster spawn rolls, deck reshuffles). Callers pick the seed.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform roll in `lo..=hi`.
    pub fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.gen_range(lo..=hi)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Install the fmt subscriber, filtered by `RUST_LOG`. Safe to call twice.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
