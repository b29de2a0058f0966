//! Territory War - console driver
//!
//! Thin menu loop over [`GameSession`]: reads territory indices, prints the
//! map and dice, and stops once the mission is accomplished.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use territory_war::core::error::Result;
use territory_war::{GameConfig, GameSession, Registry, TurnReport};

/// Turn-based territorial conquest with dice combat and missions
#[derive(Parser, Debug)]
#[command(name = "territory-war")]
#[command(about = "Conquer territories with dice rolls until your mission is complete")]
struct Args {
    /// Random seed for deterministic games
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Territory War starting...");

    let mut session = GameSession::new(&config)?;

    println!("\n=== TERRITORY WAR ===");
    println!("Seed: {}", session.seed());
    println!();
    println!("Your mission:");
    println!("  > {}", session.mission());
    display_map(session.registry());

    loop {
        display_menu();
        let Some(choice) = prompt_number("Choose an option: ")? else {
            println!("Invalid input. Try again.");
            continue;
        };

        match choice {
            1 => {
                if let Some(report) = play_turn(&mut session)? {
                    display_turn(&report);
                    display_map(session.registry());
                    if report.victory {
                        println!("\nCONGRATULATIONS! Mission accomplished, you win!");
                        break;
                    }
                }
            }
            2 => {
                if session.check_victory() {
                    println!("\nCONGRATULATIONS! Mission accomplished, you win!");
                    break;
                }
                println!("\nMission not complete yet. Keep fighting!");
                println!("  > {}", session.mission());
            }
            0 => {
                println!("\nGame ended by the player.");
                break;
            }
            _ => println!("\nInvalid option. Choose 1, 2 or 0."),
        }
    }

    let turns = session.turn();
    let log = session.finish();

    println!("\nGoodbye! {} turns played, {} conquests.", turns, log.conquests().count());
    Ok(())
}

/// Ask for an attacker and defender, then resolve the attack
fn play_turn(session: &mut GameSession) -> Result<Option<TurnReport>> {
    let count = session.registry().len();
    println!("\n--- ATTACK PHASE ---");

    let Some(attacker) = prompt_number(&format!("Attacking territory (1-{}): ", count))? else {
        println!("Invalid input. Attack cancelled.");
        return Ok(None);
    };
    let Some(defender) = prompt_number(&format!("Defending territory (1-{}): ", count))? else {
        println!("Invalid input. Attack cancelled.");
        return Ok(None);
    };

    match session.attack(attacker, defender) {
        Ok(report) => Ok(Some(report)),
        Err(e) if e.is_rejected_move() => {
            tracing::warn!("Attack rejected: {}", e);
            println!("Attack cancelled: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Read one line and parse it as a number; `None` on garbage input
fn prompt_number(prompt: &str) -> Result<Option<usize>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF: treat as quit
        return Ok(Some(0));
    }
    Ok(input.trim().parse().ok())
}

fn display_menu() {
    println!("\n--- MENU ---");
    println!("1 - Attack");
    println!("2 - Check mission");
    println!("0 - Quit");
}

fn display_turn(report: &TurnReport) {
    let outcome = &report.outcome;
    println!(
        "\n  [Dice] Attacker ({}): {} | Defender ({}): {}",
        outcome.attacker_faction,
        outcome.attacker_roll,
        outcome.previous_faction,
        outcome.defender_roll
    );

    if !outcome.attacker_won() {
        println!("  The defender held. Attack failed.");
    } else if outcome.ownership_changed {
        println!(
            "  CONQUERED! Territory {} now belongs to the {} army.",
            outcome.defender, outcome.new_faction
        );
    } else {
        println!("  Attacker won. Territory {} lost {} troop(s).", outcome.defender, outcome.troops_lost);
    }

    if report.mission_advanced {
        println!("  Mission progress: new conquest!");
    }
}

fn display_map(registry: &Registry) {
    println!("\n---------------- CURRENT MAP ----------------");
    for (index, territory) in registry.iter() {
        println!(
            "  [{}] {} | Owner: {} | Troops: {}",
            index, territory.name, territory.faction, territory.troops
        );
    }
    println!("---------------------------------------------");
}
