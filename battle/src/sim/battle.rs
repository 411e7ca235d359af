//! The battle loop

use std::collections::HashMap;

use crate::types::{PokemonRecord, Status};
use crate::BattleError;

use super::combatant::Combatant;
use super::damage::move_damage;
use super::log::BattleLog;
use super::rng::{BattleRng, SmallRngSource};

/// Chance a paralyzed attacker loses its turn
const PARALYSIS_SKIP_CHANCE: f64 = 0.25;

/// Chance a hit leaves a fresh status on the defender
const STATUS_INFLICT_CHANCE: f64 = 0.2;

/// Fraction of current HP lost to a poison tick
const POISON_TICK_FRACTION: f64 = 0.05;

/// Inclusive bounds for the random power behind every move
const MOVE_POWER_MIN: u32 = 40;
const MOVE_POWER_MAX: u32 = 100;

/// Limits for a single simulation.
#[derive(Debug, Clone)]
pub struct BattleRules {
    /// Rounds before a still-undecided battle is called a draw. Mutually
    /// immune matchups (normal vs ghost) never deal damage, so the loop
    /// needs an outside bound.
    pub max_rounds: u32,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self { max_rounds: 500 }
    }
}

/// Everything a finished battle reports back.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    /// Winning combatant's name, or `None` for a draw (double knockout or
    /// round cap)
    pub winner: Option<String>,

    /// Ordered event lines, ready to print
    #[cfg_attr(feature = "serde", serde(rename = "battle_log"))]
    pub log: Vec<String>,

    /// Final status condition per combatant name
    pub status_effects: HashMap<String, Option<Status>>,
}

/// Simulate a battle with fresh entropy and default rules.
pub fn simulate(p1: &PokemonRecord, p2: &PokemonRecord) -> Result<BattleOutcome, BattleError> {
    simulate_with(p1, p2, &BattleRules::default(), &mut SmallRngSource::new())
}

/// Simulate a battle with explicit rules and randomness.
///
/// The faster combatant opens the battle, with speed ties going to `p1`.
/// Each round gives both sides one turn (paralysis permitting) and the
/// first mover alternates between rounds. A round ends early once either
/// side faints; the fight ends when a side is down or `rules.max_rounds`
/// rounds have been played.
pub fn simulate_with(
    p1: &PokemonRecord,
    p2: &PokemonRecord,
    rules: &BattleRules,
    rng: &mut dyn BattleRng,
) -> Result<BattleOutcome, BattleError> {
    p1.validate()?;
    p2.validate()?;

    let mut combatants = [Combatant::from_record(p1), Combatant::from_record(p2)];
    let mut log = BattleLog::new();

    let mut first = if combatants[0].speed >= combatants[1].speed {
        0
    } else {
        1
    };
    let mut rounds = 0;

    while !combatants[0].is_fainted() && !combatants[1].is_fainted() {
        if rounds == rules.max_rounds {
            log.stalemate(rounds);
            break;
        }
        rounds += 1;

        for attacker in [first, 1 - first] {
            if combatants[0].is_fainted() || combatants[1].is_fainted() {
                break;
            }
            take_turn(&mut combatants, attacker, &mut log, rng);
        }

        // The first mover alternates every round, skipped turns included.
        first = 1 - first;
    }

    let winner = decide_winner(&combatants[0], &combatants[1]);

    let mut status_effects = HashMap::new();
    for combatant in &combatants {
        status_effects.insert(combatant.name.clone(), combatant.status);
    }

    Ok(BattleOutcome {
        winner,
        log: log.into_entries(),
        status_effects,
    })
}

/// One attacker's turn: paralysis check, move, poison tick, affliction roll.
fn take_turn(
    combatants: &mut [Combatant; 2],
    attacker_index: usize,
    log: &mut BattleLog,
    rng: &mut dyn BattleRng,
) {
    let (attacker, defender) = split_pair(combatants, attacker_index);

    if attacker.status == Some(Status::Paralysis) && rng.chance(PARALYSIS_SKIP_CHANCE) {
        log.paralyzed(&attacker.name);
        return;
    }

    let move_power = rng.range_inclusive(MOVE_POWER_MIN, MOVE_POWER_MAX);
    let damage = move_damage(attacker, defender, move_power);
    defender.hp -= damage;
    log.attack(&attacker.name, damage, &defender.name, defender.hp);

    // Poison eats into whatever the attack left, but not past a knockout.
    if defender.status == Some(Status::Poison) && !defender.is_fainted() {
        let tick = poison_tick(defender.hp);
        defender.hp -= tick;
        log.poison_damage(&defender.name, tick, defender.hp);
    }

    // One affliction roll per hit taken, even by a defender that just went
    // down; the first status to land is the one that sticks.
    if defender.status.is_none() && rng.chance(STATUS_INFLICT_CHANCE) {
        let status = Status::ALL[rng.index(Status::ALL.len())];
        defender.status = Some(status);
        log.status_inflicted(&defender.name, status);
    }
}

/// Mutable access to both sides at once, attacker first.
fn split_pair(
    combatants: &mut [Combatant; 2],
    attacker: usize,
) -> (&mut Combatant, &mut Combatant) {
    let (left, right) = combatants.split_at_mut(1);
    if attacker == 0 {
        (&mut left[0], &mut right[0])
    } else {
        (&mut right[0], &mut left[0])
    }
}

/// 5% of current HP, rounded down. Only standing combatants tick, so `hp`
/// is positive here.
fn poison_tick(hp: i64) -> i64 {
    (hp as f64 * POISON_TICK_FRACTION).floor() as i64
}

/// Name of the side left standing, or `None` when neither is (double
/// knockout) or both are (round cap).
fn decide_winner(p1: &Combatant, p2: &Combatant) -> Option<String> {
    match (p1.is_fainted(), p2.is_fainted()) {
        (false, true) => Some(p1.name.clone()),
        (true, false) => Some(p2.name.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;
    use crate::types::Type;

    fn record(
        name: &str,
        hp: u32,
        attack: u32,
        defense: u32,
        speed: u32,
        kind: Type,
    ) -> PokemonRecord {
        PokemonRecord::new(name, hp, attack, defense, speed, kind)
    }

    /// Queue `rolls` turns of deterministic filler: every move power 100,
    /// every chance roll a miss.
    fn pad(rng: &mut ScriptedRng, rolls: usize) {
        for _ in 0..rolls {
            rng.push_range(100);
            rng.push_chance(false);
        }
    }

    #[test]
    fn test_faster_combatant_attacks_first() {
        let alpha = record("alpha", 10, 50, 50, 90, Type::Normal);
        let beta = record("beta", 10, 50, 50, 100, Type::Normal);
        let mut rng = ScriptedRng::new();
        pad(&mut rng, 50);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        assert_eq!(
            outcome.log[0],
            "beta used a move and dealt 6 damage to alpha (4 HP left)"
        );
    }

    #[test]
    fn test_speed_tie_favors_first_argument() {
        let alpha = record("alpha", 10, 50, 50, 100, Type::Normal);
        let beta = record("beta", 10, 50, 50, 100, Type::Normal);
        let mut rng = ScriptedRng::new();
        pad(&mut rng, 50);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        assert_eq!(
            outcome.log[0],
            "alpha used a move and dealt 6 damage to beta (4 HP left)"
        );
    }

    #[test]
    fn test_first_mover_alternates_every_round() {
        let alpha = record("alpha", 60, 50, 50, 100, Type::Normal);
        let beta = record("beta", 60, 50, 50, 50, Type::Normal);
        let mut rng = ScriptedRng::new();
        pad(&mut rng, 50);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        // Rounds run alpha/beta, beta/alpha, alpha/beta, ...
        let attackers: Vec<&str> = outcome.log[..6]
            .iter()
            .map(|line| line.split(" used").next().unwrap())
            .collect();
        assert_eq!(attackers, ["alpha", "beta", "beta", "alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_paralysis_can_skip_a_turn() {
        let alpha = record("alpha", 20, 50, 50, 100, Type::Normal);
        let beta = record("beta", 20, 50, 50, 50, Type::Normal);
        let mut rng = ScriptedRng::new();
        rng.push_range(100);
        rng.push_chance(true); // alpha's hit inflicts a status on beta
        rng.push_index(0); // paralysis
        rng.push_chance(true); // beta's paralysis roll costs it the turn
        pad(&mut rng, 50);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        assert_eq!(outcome.log[1], "beta is now affected by paralysis!");
        assert_eq!(outcome.log[2], "beta is paralyzed and can't move!");
        assert_eq!(outcome.winner.as_deref(), Some("alpha"));
        assert_eq!(outcome.status_effects["beta"], Some(Status::Paralysis));
        assert_eq!(outcome.status_effects["alpha"], None);
    }

    #[test]
    fn test_burn_halves_attack_for_the_rest_of_the_battle() {
        let alpha = record("alpha", 50, 50, 50, 50, Type::Normal);
        let beta = record("beta", 50, 50, 50, 100, Type::Normal);
        let mut rng = ScriptedRng::new();
        rng.push_range(100);
        rng.push_chance(true); // beta's opening hit burns alpha
        rng.push_index(1); // burn
        pad(&mut rng, 50);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        assert_eq!(outcome.log[1], "alpha is now affected by burn!");
        // Attack 50 halves to 25: (2 * 25/50) * 100/50 + 2 = 4.
        assert_eq!(
            outcome.log[2],
            "alpha used a move and dealt 4 damage to beta (46 HP left)"
        );
        assert_eq!(outcome.winner.as_deref(), Some("beta"));
        assert_eq!(outcome.status_effects["alpha"], Some(Status::Burn));
    }

    #[test]
    fn test_poison_ticks_on_post_attack_hp() {
        let alpha = record("alpha", 100, 50, 50, 100, Type::Normal);
        let beta = record("beta", 52, 50, 50, 50, Type::Normal);
        let mut rng = ScriptedRng::new();
        rng.push_chance(true); // alpha's opening hit poisons beta
        rng.push_index(2); // poison
        pad(&mut rng, 50);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        // The tick uses the already-reduced HP: beta drops to 40 from the
        // hit, then loses floor(40 * 0.05) = 2.
        assert_eq!(outcome.log[1], "beta is now affected by poison!");
        assert_eq!(
            outcome.log[4],
            "alpha used a move and dealt 6 damage to beta (40 HP left)"
        );
        assert_eq!(outcome.log[5], "beta took 2 poison damage! (38 HP left)");
        assert_eq!(outcome.winner.as_deref(), Some("alpha"));
        assert_eq!(outcome.status_effects["beta"], Some(Status::Poison));
    }

    #[test]
    fn test_fainted_defender_takes_no_poison_tick() {
        let alpha = record("alpha", 100, 50, 50, 100, Type::Normal);
        let beta = record("beta", 10, 50, 50, 50, Type::Normal);
        let mut rng = ScriptedRng::new();
        rng.push_chance(true); // alpha's opening hit poisons beta
        rng.push_index(2); // poison
        pad(&mut rng, 50);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        // Beta falls to 4, then the next hit takes it to -2; the knockout
        // blow leaves no room for a poison tick.
        assert_eq!(
            outcome.log.last().unwrap(),
            "alpha used a move and dealt 6 damage to beta (-2 HP left)"
        );
        assert!(!outcome.log.iter().any(|line| line.contains("poison damage")));
        assert_eq!(outcome.winner.as_deref(), Some("alpha"));
        assert_eq!(outcome.status_effects["beta"], Some(Status::Poison));
    }

    #[test]
    fn test_status_can_land_on_a_just_fainted_defender() {
        let alpha = record("alpha", 100, 50, 50, 100, Type::Normal);
        let beta = record("beta", 5, 50, 50, 50, Type::Normal);
        let mut rng = ScriptedRng::new();
        rng.push_chance(true); // the knockout blow still rolls an affliction
        rng.push_index(1); // burn
        pad(&mut rng, 50);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        assert_eq!(
            outcome.log,
            [
                "alpha used a move and dealt 6 damage to beta (-1 HP left)",
                "beta is now affected by burn!"
            ]
        );
        assert_eq!(outcome.winner.as_deref(), Some("alpha"));
        assert_eq!(outcome.status_effects["beta"], Some(Status::Burn));
    }

    #[test]
    fn test_status_is_set_at_most_once() {
        let alpha = record("alpha", 100, 50, 50, 100, Type::Normal);
        let beta = record("beta", 20, 50, 50, 50, Type::Normal);
        let mut rng = ScriptedRng::new();
        // Every chance roll hits: the first hit paralyzes beta, and beta
        // then fails every turn. Were a second affliction ever rolled it
        // would pull index 1 (burn) and change the final status.
        for _ in 0..50 {
            rng.push_chance(true);
            rng.push_range(100);
        }
        rng.push_index(0);
        rng.push_index(1);
        rng.push_index(2);

        let outcome = simulate_with(&alpha, &beta, &BattleRules::default(), &mut rng).unwrap();

        assert_eq!(outcome.status_effects["beta"], Some(Status::Paralysis));
        assert_eq!(outcome.status_effects["alpha"], None);
        let afflictions = outcome
            .log
            .iter()
            .filter(|line| line.contains("is now affected by"))
            .count();
        assert_eq!(afflictions, 1);
        assert_eq!(outcome.winner.as_deref(), Some("alpha"));
    }

    #[test]
    fn test_immune_stalemate_is_a_draw_at_the_round_cap() {
        let regular = record("regular", 30, 50, 50, 60, Type::Normal);
        let spirit = record("spirit", 30, 50, 50, 50, Type::Ghost);
        let rules = BattleRules { max_rounds: 5 };
        let mut rng = ScriptedRng::new();
        pad(&mut rng, 50);

        let outcome = simulate_with(&regular, &spirit, &rules, &mut rng).unwrap();

        assert_eq!(outcome.winner, None);
        // Five full rounds of 0-damage exchanges, then the closing line.
        assert_eq!(outcome.log.len(), 11);
        assert!(outcome.log[..10]
            .iter()
            .all(|line| line.contains("dealt 0 damage")));
        assert_eq!(
            outcome.log[10],
            "The battle was called after 5 rounds with both Pokemon still standing!"
        );
    }

    #[test]
    fn test_round_cap_of_zero_is_an_immediate_draw() {
        let alpha = record("alpha", 30, 50, 50, 60, Type::Normal);
        let beta = record("beta", 30, 50, 50, 50, Type::Normal);
        let rules = BattleRules { max_rounds: 0 };
        let mut rng = ScriptedRng::new();

        let outcome = simulate_with(&alpha, &beta, &rules, &mut rng).unwrap();

        assert_eq!(outcome.winner, None);
        assert_eq!(
            outcome.log,
            ["The battle was called after 0 rounds with both Pokemon still standing!"]
        );
    }

    #[test]
    fn test_winner_is_always_one_of_the_inputs() {
        let pikachu = record("pikachu", 35, 55, 40, 90, Type::Electric);
        let charmander = record("charmander", 39, 52, 43, 65, Type::Fire);

        for _ in 0..5 {
            let outcome = simulate(&pikachu, &charmander).unwrap();

            let winner = outcome.winner.expect("neutral matchup cannot stall");
            assert!(winner == "pikachu" || winner == "charmander");
            assert!(!outcome.log.is_empty());
        }
    }

    #[test]
    fn test_seeded_battles_reproduce() {
        let alpha = record("alpha", 60, 50, 50, 70, Type::Water);
        let beta = record("beta", 60, 50, 50, 80, Type::Fire);
        let rules = BattleRules::default();

        let first = simulate_with(&alpha, &beta, &rules, &mut SmallRngSource::seeded(42)).unwrap();
        let second = simulate_with(&alpha, &beta, &rules, &mut SmallRngSource::seeded(42)).unwrap();

        assert_eq!(first.winner, second.winner);
        assert_eq!(first.log, second.log);
    }

    #[test]
    fn test_zero_stat_records_refuse_to_run() {
        let good = record("good", 50, 50, 50, 50, Type::Normal);
        let bad = record("bad", 50, 50, 0, 50, Type::Normal);

        let err = simulate(&bad, &good).unwrap_err();
        assert!(err.to_string().contains("defense"));

        // The second record is validated too.
        assert!(simulate(&good, &bad).is_err());
    }

    #[test]
    fn test_double_knockout_reports_no_winner() {
        let mut p1 = Combatant::from_record(&record("alpha", 50, 50, 50, 50, Type::Normal));
        let mut p2 = Combatant::from_record(&record("beta", 50, 50, 50, 50, Type::Normal));

        p1.hp = -1;
        p2.hp = 0;
        assert_eq!(decide_winner(&p1, &p2), None);

        p1.hp = 10;
        assert_eq!(decide_winner(&p1, &p2), Some("alpha".to_string()));

        p1.hp = 0;
        p2.hp = 10;
        assert_eq!(decide_winner(&p1, &p2), Some("beta".to_string()));

        p1.hp = 10;
        assert_eq!(decide_winner(&p1, &p2), None);
    }

    #[test]
    fn test_mirror_match_collapses_the_status_map() {
        let first = record("ditto", 30, 50, 50, 50, Type::Normal);
        let second = record("ditto", 30, 50, 50, 50, Type::Normal);
        let mut rng = ScriptedRng::new();
        pad(&mut rng, 50);

        let outcome = simulate_with(&first, &second, &BattleRules::default(), &mut rng).unwrap();

        // Identical names share one entry, exactly like a dictionary keyed
        // by name would.
        assert_eq!(outcome.winner.as_deref(), Some("ditto"));
        assert_eq!(outcome.status_effects.len(), 1);
    }

    #[test]
    fn test_poison_tick_math() {
        assert_eq!(poison_tick(40), 2);
        assert_eq!(poison_tick(39), 1);
        assert_eq!(poison_tick(20), 1);
        assert_eq!(poison_tick(19), 0);
        assert_eq!(poison_tick(1), 0);
    }
}
