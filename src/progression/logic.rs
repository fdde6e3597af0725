use log::debug;

use super::types::{LevelUpRecord, StatIncreases, XpAward};
use crate::core::constants::XP_CURVE_BASE;
use crate::entity::{ComponentKind, EntityId, Progression, World};

/// Total XP at which level `n` is complete and the next level is owed:
/// `100 * n²`.
///
/// Quadratic curve: each level costs proportionally more than the last.
pub fn xp_for_level(level: u32) -> u64 {
    XP_CURVE_BASE * u64::from(level) * u64::from(level)
}

/// XP still needed to finish the current level. May be zero or negative
/// once the entity is already eligible.
pub fn xp_to_next_level(current_xp: u64, current_level: u32) -> i64 {
    xp_for_level(current_level) as i64 - current_xp as i64
}

pub fn ready_to_level_up(current_xp: u64, current_level: u32) -> bool {
    current_xp >= xp_for_level(current_level)
}

/// Awards the defeated entity's xp_value to the victor.
///
/// This is the turn loop's post-kill helper: it performs the monotonic XP
/// add and reports whether a level-up is now owed. Returns None when
/// either side lacks a Progression component (an expected state: not
/// every combatant progresses, and not every victim is worth XP).
///
/// Applying owed level-ups remains the caller's job, one
/// [`apply_level_up`] call per level.
pub fn award_kill_xp(world: &mut World, victor: EntityId, defeated: EntityId) -> Option<XpAward> {
    let amount = world.progression(defeated)?.xp_value();
    world.progression(victor)?;

    let defeated_name = world.name(defeated).unwrap_or("<unknown>").to_string();
    let victor_name = world.name(victor).unwrap_or("<unknown>").to_string();

    let (total_xp, level) = match world.progression_mut(victor) {
        Some(progression) => {
            progression.add_xp(amount);
            (progression.xp(), progression.level())
        }
        None => return None,
    };

    debug!(
        "{} gains {} xp for defeating {} ({} total)",
        victor_name, amount, defeated_name, total_xp
    );

    Some(XpAward {
        victor: victor_name,
        defeated: defeated_name,
        amount,
        total_xp,
        level_up_ready: ready_to_level_up(total_xp, level),
    })
}

/// Applies exactly one level-up: adds each stat increase to the matching
/// maximum, fully restores HP (a level-up is a full-restore event), and
/// increments the level by one.
///
/// Never loops internally. When several levels are owed, the caller
/// invokes this once per level so it can present one notification each.
///
/// Precondition: the entity carries Health + Progression, and CombatStats
/// too if power/defense growth is requested. Violations are caller bugs
/// and panic.
pub fn apply_level_up(
    world: &mut World,
    entity: EntityId,
    increases: StatIncreases,
) -> LevelUpRecord {
    if !world.satisfies(entity, &[ComponentKind::Health, ComponentKind::Progression]) {
        panic!(
            "entity {} ({}) leveled up without Health + Progression",
            entity,
            world.name(entity).unwrap_or("<unknown>")
        );
    }
    let grows_combat_stats = increases.power > 0 || increases.defense > 0;
    if grows_combat_stats && !world.has(entity, ComponentKind::CombatStats) {
        panic!(
            "entity {} ({}) granted power/defense growth without CombatStats",
            entity,
            world.name(entity).unwrap_or("<unknown>")
        );
    }

    if let Some(health) = world.health_mut(entity) {
        health.raise_max_hp(increases.hp);
    }
    if grows_combat_stats {
        if let Some(stats) = world.combat_stats_mut(entity) {
            stats.power += increases.power;
            stats.defense += increases.defense;
        }
    }
    if let Some(progression) = world.progression_mut(entity) {
        progression.advance_level();
    }
    // Full restore comes after the max_hp growth so the heal reaches the
    // new maximum.
    if let Some(health) = world.health_mut(entity) {
        health.restore_full();
    }

    let new_level = world.progression(entity).map(Progression::level).unwrap_or(0);
    let name = world.name(entity).unwrap_or("<unknown>").to_string();
    debug!("{} reaches level {}", name, new_level);

    LevelUpRecord {
        entity: name,
        new_level,
        hp_increase: increases.hp,
        power_increase: increases.power,
        defense_increase: increases.defense,
    }
}
