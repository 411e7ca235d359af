//! Terminal front-end for the hitmon workspace.
//!
//! Two subcommands mirror the two dashboard pages: `info` renders a full
//! lookup-page profile, `battle` resolves two Pokemon and simulates a fight.

use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use hitmon_battle::{simulate_with, BattleOutcome, BattleRules, SmallRngSource};
use hitmon_dex::{DexClient, PokemonProfile};

fn usage() {
    eprintln!("Usage:");
    eprintln!("  hitmon info <name> [--json]");
    eprintln!("  hitmon battle <name> <name> [--seed N] [--json]");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("info") => info(&args[1..]).await,
        Some("battle") => battle(&args[1..]).await,
        _ => {
            usage();
            process::exit(2);
        }
    }
}

async fn info(args: &[String]) -> Result<()> {
    let (names, json, seed) = parse_options(args)?;
    if names.len() != 1 || seed.is_some() {
        usage();
        process::exit(2);
    }

    let dex = DexClient::new();
    let profile = dex
        .profile(&names[0])
        .await
        .with_context(|| format!("Failed to look up '{}'", names[0]))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }
    Ok(())
}

async fn battle(args: &[String]) -> Result<()> {
    let (names, json, seed) = parse_options(args)?;
    if names.len() != 2 {
        usage();
        process::exit(2);
    }

    let dex = DexClient::new();
    let p1 = dex
        .battle_record(&names[0])
        .await
        .with_context(|| format!("Failed to look up '{}'", names[0]))?;
    let p2 = dex
        .battle_record(&names[1])
        .await
        .with_context(|| format!("Failed to look up '{}'", names[1]))?;

    let mut rng = match seed {
        Some(seed) => SmallRngSource::seeded(seed),
        None => SmallRngSource::new(),
    };
    let outcome = simulate_with(&p1, &p2, &BattleRules::default(), &mut rng)
        .context("Battle could not be simulated")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

/// Split positional names from the `--json` and `--seed N` flags.
fn parse_options(args: &[String]) -> Result<(Vec<String>, bool, Option<u64>)> {
    let mut names = Vec::new();
    let mut json = false;
    let mut seed = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--seed" => {
                let value = iter.next().context("--seed requires a value")?;
                seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("Invalid seed '{}'", value))?,
                );
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{}'", flag),
            name => names.push(name.to_string()),
        }
    }

    Ok((names, json, seed))
}

fn print_profile(profile: &PokemonProfile) {
    println!("=== {} ===", profile.name);
    println!();
    println!("Types:      {}", profile.types.join(", "));
    println!("Abilities:  {}", profile.abilities.join(", "));
    println!();
    println!("Base stats:");
    println!("  HP:        {}", profile.stats.hp);
    println!("  Attack:    {}", profile.stats.attack);
    println!("  Defense:   {}", profile.stats.defense);
    println!("  Sp. Atk:   {}", profile.stats.special_attack);
    println!("  Sp. Def:   {}", profile.stats.special_defense);
    println!("  Speed:     {}", profile.stats.speed);
    println!();
    println!("Moves:");
    for name in &profile.moves {
        println!("  • {}", name);
    }
    println!();
    println!("Evolution:  {}", profile.evolution.join(" → "));
}

fn print_outcome(outcome: &BattleOutcome) {
    println!("=== Battle Log ===");
    for line in &outcome.log {
        println!("{}", line);
    }
    println!();

    match &outcome.winner {
        Some(winner) => println!("Winner: {}!", winner),
        None => println!("The battle ended in a draw!"),
    }

    println!();
    println!("Final status effects:");
    let mut entries: Vec<_> = outcome.status_effects.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (name, status) in entries {
        match status {
            Some(status) => println!("  {}: {}", name, status),
            None => println!("  {}: none", name),
        }
    }
}
