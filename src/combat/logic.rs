use log::debug;

use super::types::AttackOutcome;
use crate::entity::{CombatStats, ComponentKind, EntityId, World};

/// The capability set an entity must carry to take part in combat.
pub const COMBATANT_CAPABILITIES: [ComponentKind; 2] =
    [ComponentKind::Health, ComponentKind::CombatStats];

/// Reads the combat stats of an entity that is required to be a combatant.
///
/// Invoking combat on an entity without Health + CombatStats is a caller
/// bug, not a game-state condition, so it fails hard instead of returning
/// a recoverable result.
fn combatant_stats(world: &World, id: EntityId) -> CombatStats {
    match (world.health(id), world.combat_stats(id)) {
        (Some(_), Some(stats)) => *stats,
        _ => panic!(
            "entity {} ({}) used in combat without Health + CombatStats",
            id,
            world.name(id).unwrap_or("<unknown>")
        ),
    }
}

fn display_name(world: &World, id: EntityId) -> String {
    world.name(id).unwrap_or("<unknown>").to_string()
}

/// Resolves one attack with no transient modifiers.
pub fn resolve_attack(world: &mut World, attacker: EntityId, defender: EntityId) -> AttackOutcome {
    resolve_attack_with_bonuses(world, attacker, defender, 0, 0)
}

/// Resolves one attack with transient status-effect modifiers.
///
/// `damage = max(0, (power + power_bonus) - (defense + defense_bonus))`,
/// applied to the defender's health by clamped subtraction. Deterministic:
/// the outcome is a pure function of current stats and bonuses, so combat
/// logs and tests are fully reproducible.
///
/// The defender's hp is the only state that changes. Death is detected,
/// not handled; removing the corpse from the world is the caller's job.
pub fn resolve_attack_with_bonuses(
    world: &mut World,
    attacker: EntityId,
    defender: EntityId,
    power_bonus: i64,
    defense_bonus: i64,
) -> AttackOutcome {
    let power = combatant_stats(world, attacker).power;
    let defense = combatant_stats(world, defender).defense;

    let attacker_name = display_name(world, attacker);
    let defender_name = display_name(world, defender);

    let raw = i64::from(power) + power_bonus - i64::from(defense) - defense_bonus;
    let damage = raw.max(0) as u32;

    let mut defender_died = false;
    if let Some(health) = world.health_mut(defender) {
        let was_alive = health.is_alive();
        health.take_damage(damage);
        defender_died = was_alive && !health.is_alive();
    }

    debug!(
        "{} hits {} for {} damage (died: {})",
        attacker_name, defender_name, damage, defender_died
    );

    AttackOutcome {
        attacker: attacker_name,
        defender: defender_name,
        damage,
        defender_died,
    }
}

/// Restores up to `amount` HP on the target's health pool, clamped at
/// max_hp. Returns the HP actually restored; a target without a Health
/// component restores nothing (capability absence is a normal outcome
/// here, unlike in attack resolution).
pub fn heal(world: &mut World, target: EntityId, amount: u32) -> u32 {
    match world.health_mut(target) {
        Some(health) => health.heal(amount),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Health;

    fn spawn_fighter(world: &mut World, name: &str, hp: u32, power: u32, defense: u32) -> EntityId {
        let id = world.spawn(name, 'f');
        world.attach_health(id, Health::new(hp));
        world.attach_combat_stats(id, CombatStats::new(power, defense));
        id
    }

    #[test]
    fn test_damage_is_power_minus_defense() {
        let mut world = World::new();
        let attacker = spawn_fighter(&mut world, "Adventurer", 30, 5, 0);
        let defender = spawn_fighter(&mut world, "Goblin", 20, 3, 2);

        let outcome = resolve_attack(&mut world, attacker, defender);
        assert_eq!(outcome.damage, 3);
        assert_eq!(outcome.attacker, "Adventurer");
        assert_eq!(outcome.defender, "Goblin");
        assert!(!outcome.defender_died);
        assert_eq!(world.health(defender).unwrap().hp(), 17);
    }

    #[test]
    fn test_damage_never_negative() {
        let mut world = World::new();
        let attacker = spawn_fighter(&mut world, "Rat", 10, 1, 0);
        let defender = spawn_fighter(&mut world, "Knight", 30, 2, 5);

        let outcome = resolve_attack(&mut world, attacker, defender);
        assert_eq!(outcome.damage, 0);
        assert_eq!(world.health(defender).unwrap().hp(), 30);
    }

    #[test]
    fn test_bonuses_modify_damage() {
        let mut world = World::new();
        let attacker = spawn_fighter(&mut world, "Adventurer", 30, 5, 0);
        let defender = spawn_fighter(&mut world, "Goblin", 20, 3, 2);

        let outcome = resolve_attack_with_bonuses(&mut world, attacker, defender, 4, 0);
        assert_eq!(outcome.damage, 7);

        let outcome = resolve_attack_with_bonuses(&mut world, attacker, defender, 0, 10);
        assert_eq!(outcome.damage, 0);
    }

    #[test]
    fn test_attack_is_deterministic() {
        let mut world = World::new();
        let attacker = spawn_fighter(&mut world, "Adventurer", 30, 5, 0);
        let defender = spawn_fighter(&mut world, "Troll", 100, 3, 2);

        let first = resolve_attack(&mut world, attacker, defender);
        let second = resolve_attack(&mut world, attacker, defender);
        assert_eq!(first.damage, second.damage);
        assert_eq!(world.health(defender).unwrap().hp(), 100 - 2 * first.damage);
    }

    #[test]
    fn test_death_is_reported_once() {
        let mut world = World::new();
        let attacker = spawn_fighter(&mut world, "Adventurer", 30, 10, 0);
        let defender = spawn_fighter(&mut world, "Goblin", 5, 3, 0);

        let killing = resolve_attack(&mut world, attacker, defender);
        assert!(killing.defender_died);
        assert_eq!(world.health(defender).unwrap().hp(), 0);

        // The defender was already dead; this call did not kill it.
        let posthumous = resolve_attack(&mut world, attacker, defender);
        assert!(!posthumous.defender_died);
    }

    #[test]
    #[should_panic(expected = "without Health + CombatStats")]
    fn test_attacking_with_non_combatant_panics() {
        let mut world = World::new();
        let herb = world.spawn("Dried Herb", '*');
        let defender = spawn_fighter(&mut world, "Goblin", 20, 3, 2);
        resolve_attack(&mut world, herb, defender);
    }

    #[test]
    #[should_panic(expected = "without Health + CombatStats")]
    fn test_attacking_a_non_combatant_panics() {
        let mut world = World::new();
        let attacker = spawn_fighter(&mut world, "Adventurer", 30, 5, 0);
        let herb = world.spawn("Dried Herb", '*');
        resolve_attack(&mut world, attacker, herb);
    }

    #[test]
    fn test_heal_is_clamped_and_reported() {
        let mut world = World::new();
        let fighter = spawn_fighter(&mut world, "Adventurer", 30, 5, 0);
        world.health_mut(fighter).unwrap().take_damage(20);

        assert_eq!(heal(&mut world, fighter, 15), 15);
        assert_eq!(heal(&mut world, fighter, 15), 5);
        assert_eq!(world.health(fighter).unwrap().hp(), 30);
    }

    #[test]
    fn test_heal_without_health_component_restores_nothing() {
        let mut world = World::new();
        let herb = world.spawn("Dried Herb", '*');
        assert_eq!(heal(&mut world, herb, 10), 0);
    }
}
