use clap::{Parser, Subcommand, ValueEnum};
use encoding_rs::Encoding;
use engine::api::{self, SimConfig};
use engine::{
    Archetype, CardKind, Dice, ENERGY_CAP, Encounter, MonsterId, MonsterIdGen, MonsterSpec, Player,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};

const CARD_FAILURE_MESSAGE: &str = "You cannot play that card right now.";
const ENCOUNTER_WIN_MESSAGE: &str = "The last monster falls. Encounter cleared!";
const GAME_WIN_MESSAGE: &str = "You survived the campaign!";
const GAME_LOSE_MESSAGE: &str = "You have fallen.";

#[derive(Copy, Clone, ValueEnum)]
enum ArchetypeArg {
    Vanguard,
    Stalker,
}

#[derive(Subcommand)]
enum Cmd {
    /// Play a campaign interactively
    Play {
        /// Player archetype
        #[arg(long, value_enum, default_value_t = ArchetypeArg::Vanguard)]
        archetype: ArchetypeArg,
        /// Campaign JSON file (overrides --campaign)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Builtin campaign id
        #[arg(long, default_value = "warrens")]
        campaign: String,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Autoplay one or many campaign runs and report the outcome
    Simulate {
        /// Player archetype
        #[arg(long, value_enum, default_value_t = ArchetypeArg::Vanguard)]
        archetype: ArchetypeArg,
        /// Campaign JSON file (overrides --campaign)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Builtin campaign id
        #[arg(long, default_value = "warrens")]
        campaign: String,
        /// RNG base seed (trial i uses seed+i)
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of trials
        #[arg(long, default_value_t = 1)]
        trials: u32,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Print the full turn log (single trial only)
        #[arg(long, default_value_t = false)]
        log: bool,
    },
    /// List the card catalog
    Cards {
        /// Print the catalog as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Parser)]
#[command(name = "cinderdeck-cli")]
#[command(about = "Cinderdeck CLI harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn to_archetype(a: ArchetypeArg) -> Archetype {
    match a {
        ArchetypeArg::Vanguard => Archetype::Vanguard,
        ArchetypeArg::Stalker => Archetype::Stalker,
    }
}

#[derive(Serialize)]
struct CardRow {
    name: &'static str,
    description: &'static str,
    damage: i32,
    block: i32,
    energy_cost: i32,
    weak: i32,
    vulnerable: i32,
    strength: i32,
    requires_target: bool,
}

fn read_text_auto(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

fn load_encounters(file: Option<&Path>, campaign: &str) -> Result<Vec<Vec<MonsterSpec>>> {
    match file {
        Some(path) => {
            let text = read_text_auto(path)?;
            Ok(api::parse_campaign(&path.display().to_string(), &text)?)
        }
        None => Ok(api::builtin_campaign(campaign)?),
    }
}

fn format_cards(cards: &[CardKind]) -> String {
    if cards.is_empty() {
        "(empty)".to_string()
    } else {
        cards.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
    }
}

fn print_encounter(enc: &Encounter, archetype: Archetype) {
    let p = enc.player();
    let c = &p.combatant;
    println!(
        "\n{}: {}/{} hp | block {} | str {} | weak {} | vuln {} | energy {}/{}",
        archetype.name(),
        c.hp,
        c.max_hp,
        c.block,
        c.strength,
        c.weak,
        c.vulnerable,
        p.energy(),
        ENERGY_CAP
    );
    println!("Hand: {}", format_cards(p.hand()));
    for m in enc.monsters() {
        let mc = &m.combatant;
        println!(
            "  [{}] {}: {}/{} hp | block {} | str {} | weak {} | vuln {}",
            m.id,
            m.kind.name(),
            mc.hp,
            mc.max_hp,
            mc.block,
            mc.strength,
            mc.weak,
            mc.vulnerable
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  play <card>            play an untargeted card");
    println!("  play <card> <monster>  play a card at a monster id");
    println!("  end                    end your turn (monsters act)");
    println!("  inspect hand|deck|discard");
    println!("  describe <card>");
    println!("  status                 reprint the encounter");
    println!("  quit");
}

fn inspect(player: &Player, pile: &str) {
    match pile {
        "hand" => println!("{}", format_cards(player.hand())),
        "deck" => println!("{}", format_cards(player.deck())),
        "discard" => println!("{}", format_cards(player.discard())),
        _ => println!("Unknown pile '{pile}'; try hand, deck or discard."),
    }
}

fn describe(name: &str) {
    match CardKind::from_name(name) {
        Some(kind) => {
            let card = kind.card();
            println!("{}: {}", card.name, card.description);
        }
        None => println!("No card named '{name}'."),
    }
}

fn run_play(archetype: Archetype, encounters: Vec<Vec<MonsterSpec>>, seed: u64) -> Result<()> {
    let mut player = Player::new(archetype);
    let mut dice = Dice::from_seed(seed);
    let mut ids = MonsterIdGen::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for specs in &encounters {
        println!("\nNew encounter!");
        let mut enc = Encounter::new(&mut player, &mut dice, &mut ids, specs);
        print_encounter(&enc, archetype);
        while enc.is_active() && !enc.player().combatant.is_defeated() {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [] => {}
                ["quit"] | ["exit"] => return Ok(()),
                ["help"] => print_help(),
                ["status"] => print_encounter(&enc, archetype),
                ["end"] | ["end", "turn"] => {
                    enc.end_player_turn();
                    enc.enemy_turn();
                    if !enc.player().combatant.is_defeated() {
                        print_encounter(&enc, archetype);
                    }
                }
                ["inspect", pile] => inspect(enc.player(), pile),
                ["describe", name] => describe(name),
                ["play", name] => {
                    if enc.player_apply_card(name, None) {
                        print_encounter(&enc, archetype);
                    } else {
                        println!("{CARD_FAILURE_MESSAGE}");
                    }
                }
                ["play", name, id] => match id.parse::<u32>() {
                    Ok(raw) => {
                        if enc.player_apply_card(name, Some(MonsterId(raw))) {
                            print_encounter(&enc, archetype);
                        } else {
                            println!("{CARD_FAILURE_MESSAGE}");
                        }
                    }
                    Err(_) => println!("{CARD_FAILURE_MESSAGE}"),
                },
                _ => println!("Unknown command; try 'help'."),
            }
        }
        if enc.player().combatant.is_defeated() {
            println!("{GAME_LOSE_MESSAGE}");
            return Ok(());
        }
        println!("{ENCOUNTER_WIN_MESSAGE}");
    }
    println!("{GAME_WIN_MESSAGE}");
    Ok(())
}

fn main() -> Result<()> {
    engine::init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Play {
            archetype,
            file,
            campaign,
            seed,
        } => {
            let encounters = load_encounters(file.as_deref(), &campaign)?;
            run_play(to_archetype(archetype), encounters, seed)?;
        }
        Cmd::Simulate {
            archetype,
            file,
            campaign,
            seed,
            trials,
            json,
            log,
        } => {
            let cfg = SimConfig {
                archetype: to_archetype(archetype),
                campaign_path: file.map(|p| p.display().to_string()),
                campaign_id: Some(campaign),
                seed,
            };
            if trials <= 1 {
                let res = api::simulate_campaign(cfg)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&res)?);
                } else {
                    if log {
                        for line in &res.log {
                            println!("{line}");
                        }
                    }
                    println!(
                        "result={} encounters_cleared={} turns={} hp_end={}",
                        if res.victory { "victory" } else { "defeat" },
                        res.encounters_cleared,
                        res.turns,
                        res.player_hp_end
                    );
                }
            } else {
                let res = api::simulate_campaign_many(&cfg, trials)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&res)?);
                } else {
                    println!(
                        "trials={} wins={} win_rate={:.2} mean_hp_end={:.1}",
                        res.trials, res.wins, res.win_rate, res.mean_hp_end
                    );
                }
            }
        }
        Cmd::Cards { json } => {
            if json {
                let rows: Vec<CardRow> = CardKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let card = kind.card();
                        CardRow {
                            name: card.name,
                            description: card.description,
                            damage: card.damage,
                            block: card.block,
                            energy_cost: card.energy_cost,
                            weak: card.weak,
                            vulnerable: card.vulnerable,
                            strength: card.strength,
                            requires_target: card.requires_target,
                        }
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for kind in CardKind::ALL {
                    let card = kind.card();
                    println!("{} (cost {}): {}", card.name, card.energy_cost, card.description);
                }
            }
        }
    }
    Ok(())
}
