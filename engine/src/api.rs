use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Dice;
use crate::cards::{Archetype, CardKind};
use crate::content;
use crate::encounter::Encounter;
use crate::monster::{MonsterId, MonsterIdGen, MonsterSpec};
use crate::player::Player;

const DEFAULT_CAMPAIGN: &str = "warrens";
const MAX_TURNS_PER_ENCOUNTER: u32 = 50;

/// Campaign content problems. These are configuration faults, not player
/// mistakes, and fail the whole load.
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("failed to read campaign file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse campaign {name}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no builtin campaign named '{0}'")]
    UnknownCampaign(String),
    #[error("monster max hp must be positive, got {hp} for {kind}")]
    InvalidHp { kind: &'static str, hp: i32 },
    #[error("campaign has no encounters")]
    Empty,
    #[error("encounter {0} has no monsters")]
    EmptyEncounter(usize),
}

/// A campaign is an ordered list of encounters, each an ordered list of
/// monsters to spawn. Unknown monster kinds are rejected by serde at this
/// boundary.
pub fn parse_campaign(name: &str, text: &str) -> Result<Vec<Vec<MonsterSpec>>, CampaignError> {
    let encounters: Vec<Vec<MonsterSpec>> =
        serde_json::from_str(text).map_err(|source| CampaignError::Parse {
            name: name.to_string(),
            source,
        })?;
    if encounters.is_empty() {
        return Err(CampaignError::Empty);
    }
    for (idx, specs) in encounters.iter().enumerate() {
        if specs.is_empty() {
            return Err(CampaignError::EmptyEncounter(idx));
        }
        for spec in specs {
            if spec.max_hp <= 0 {
                return Err(CampaignError::InvalidHp {
                    kind: spec.kind.name(),
                    hp: spec.max_hp,
                });
            }
        }
    }
    Ok(encounters)
}

pub fn load_campaign(path: &Path) -> Result<Vec<Vec<MonsterSpec>>, CampaignError> {
    let text = fs::read_to_string(path).map_err(|source| CampaignError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_campaign(&path.display().to_string(), &text)
}

pub fn builtin_campaign(id: &str) -> Result<Vec<Vec<MonsterSpec>>, CampaignError> {
    let text = content::builtin_campaigns()
        .get(id)
        .copied()
        .ok_or_else(|| CampaignError::UnknownCampaign(id.to_string()))?;
    parse_campaign(id, text)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    pub archetype: Archetype,
    #[serde(default)]
    pub campaign_path: Option<String>,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimResult {
    pub victory: bool,
    pub encounters_cleared: u32,
    pub turns: u32,
    pub player_hp_end: i32,
    pub log: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimManyResult {
    pub trials: u32,
    pub wins: u32,
    pub win_rate: f64,
    pub mean_hp_end: f64,
}

fn resolve_campaign(cfg: &SimConfig) -> Result<Vec<Vec<MonsterSpec>>, CampaignError> {
    match (&cfg.campaign_path, &cfg.campaign_id) {
        (Some(path), _) => load_campaign(Path::new(path)),
        (None, Some(id)) => builtin_campaign(id),
        (None, None) => builtin_campaign(DEFAULT_CAMPAIGN),
    }
}

/// Pick the next card the autoplayer wants: first affordable card in hand
/// order, targeted cards aimed at the lowest-hp monster.
fn next_play(enc: &Encounter) -> Option<(CardKind, Option<MonsterId>)> {
    let target = enc
        .monsters()
        .iter()
        .min_by_key(|m| m.combatant.hp)
        .map(|m| m.id);
    for &kind in enc.player().hand() {
        let card = kind.card();
        if card.energy_cost > enc.player().energy() {
            continue;
        }
        if card.requires_target {
            if let Some(t) = target {
                return Some((kind, Some(t)));
            }
        } else {
            return Some((kind, None));
        }
    }
    None
}

fn autoplay_turn(enc: &mut Encounter, log: &mut Vec<String>) {
    while let Some((kind, target)) = next_play(enc) {
        if !enc.player_apply_card(kind.name(), target) {
            break;
        }
        match target {
            Some(id) => log.push(format!("[PLAY] {} at monster {}", kind.name(), id)),
            None => log.push(format!("[PLAY] {}", kind.name())),
        }
        if !enc.is_active() {
            break;
        }
    }
}

/// Run one campaign start to finish without interaction: every player turn
/// plays whatever the autoplay policy picks, then the monsters act. Ends
/// on a cleared campaign, a dead player, or a stalled encounter (which
/// counts as a loss).
pub fn simulate_campaign(cfg: SimConfig) -> Result<SimResult> {
    let encounters = resolve_campaign(&cfg)?;
    let mut player = Player::new(cfg.archetype);
    let mut dice = Dice::from_seed(cfg.seed);
    let mut ids = MonsterIdGen::default();
    let mut log = Vec::new();
    let mut total_turns = 0u32;
    let mut cleared = 0u32;

    log.push(format!(
        "[START] {} with {} hp, {} encounters ahead",
        cfg.archetype.name(),
        player.combatant.hp,
        encounters.len()
    ));

    for (number, specs) in encounters.iter().enumerate() {
        let mut enc = Encounter::new(&mut player, &mut dice, &mut ids, specs);
        log.push(format!(
            "[ENCOUNTER] {} opens with {} monsters",
            number + 1,
            enc.monsters().len()
        ));
        let mut turns = 0u32;
        while enc.is_active() && !enc.player().combatant.is_defeated() {
            if turns >= MAX_TURNS_PER_ENCOUNTER {
                log.push(format!(
                    "[STALL] encounter {} still going after {} turns",
                    number + 1,
                    MAX_TURNS_PER_ENCOUNTER
                ));
                break;
            }
            turns += 1;
            autoplay_turn(&mut enc, &mut log);
            if !enc.is_active() {
                break;
            }
            enc.end_player_turn();
            enc.enemy_turn();
            log.push(format!(
                "[HP] player {}/{}",
                enc.player().combatant.hp,
                enc.player().combatant.max_hp
            ));
        }
        let hp_end = enc.player().combatant.hp;
        let defeated = enc.player().combatant.is_defeated();
        let stalled = enc.is_active() && !defeated;
        total_turns += turns;
        if defeated || stalled {
            log.push(format!(
                "[END] defeat in encounter {} after {} total turns",
                number + 1,
                total_turns
            ));
            return Ok(SimResult {
                victory: false,
                encounters_cleared: cleared,
                turns: total_turns,
                player_hp_end: hp_end,
                log,
            });
        }
        cleared += 1;
        log.push(format!(
            "[CLEAR] encounter {} down, player at {} hp",
            number + 1,
            hp_end
        ));
    }

    log.push(format!(
        "[END] victory, {} encounters cleared in {} turns",
        cleared, total_turns
    ));
    Ok(SimResult {
        victory: true,
        encounters_cleared: cleared,
        turns: total_turns,
        player_hp_end: player.combatant.hp,
        log,
    })
}

/// Monte-Carlo wrapper: trial `i` reruns the campaign with `seed + i`.
pub fn simulate_campaign_many(cfg: &SimConfig, trials: u32) -> Result<SimManyResult> {
    if trials == 0 {
        bail!("trials must be at least 1");
    }
    let mut wins = 0u32;
    let mut hp_sum = 0i64;
    for i in 0..trials {
        let mut trial_cfg = cfg.clone();
        trial_cfg.seed = cfg.seed.wrapping_add(u64::from(i));
        let res = simulate_campaign(trial_cfg)?;
        if res.victory {
            wins += 1;
        }
        hp_sum += i64::from(res.player_hp_end);
    }
    Ok(SimManyResult {
        trials,
        wins,
        win_rate: f64::from(wins) / f64::from(trials),
        mean_hp_end: hp_sum as f64 / f64::from(trials),
    })
}
