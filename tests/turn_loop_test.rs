//! Integration test: Combat -> XP Award -> Level-Up Pipeline
//!
//! Drives the rule engines the way the turn loop does: resolve attacks
//! until a kill, award XP to the victor, apply owed level-ups one call
//! per level, and clean up the corpse.

use delve::combat::{heal, resolve_attack, resolve_attack_with_bonuses};
use delve::core::constants::{
    LEVEL_UP_DEFENSE_GROWTH, LEVEL_UP_HP_GROWTH, LEVEL_UP_POWER_GROWTH,
};
use delve::entity::{CombatStats, ComponentKind, Health, Progression, World};
use delve::progression::{
    apply_level_up, award_kill_xp, ready_to_level_up, xp_for_level, StatIncreases,
};
use delve::spawn::{spawn_item_entity, spawn_player};

// =========================================================================
// One full kill: attack until death, award XP, level up, despawn
// =========================================================================

#[test]
fn test_kill_award_level_up_cycle() {
    let mut world = World::new();
    let player = spawn_player(&mut world, "Aldric");

    // A monster worth enough XP to finish level 1 (threshold 100) but
    // not level 2 (threshold 400).
    let ogre = world.spawn("Ogre", 'O');
    world.attach_health(ogre, Health::new(9));
    world.attach_combat_stats(ogre, CombatStats::new(3, 1));
    world.attach_progression(ogre, Progression::new(350));

    // Player power 5 vs defense 1 = 4 damage per swing; 9 hp falls on
    // the third swing.
    let mut killed = false;
    for _ in 0..3 {
        let outcome = resolve_attack(&mut world, player, ogre);
        assert_eq!(outcome.damage, 4);
        killed = outcome.defender_died;
    }
    assert!(killed);

    let award = award_kill_xp(&mut world, player, ogre).expect("both sides progress");
    assert_eq!(award.amount, 350);
    assert!(award.level_up_ready);

    // Death is detected, not handled: the corpse is still in the world
    // until the turn loop removes it.
    assert!(world.contains(ogre));
    assert!(world.despawn(ogre));

    let progression = world.progression(player).unwrap();
    assert!(ready_to_level_up(progression.xp(), progression.level()));

    let record = apply_level_up(
        &mut world,
        player,
        StatIncreases {
            hp: LEVEL_UP_HP_GROWTH,
            power: LEVEL_UP_POWER_GROWTH,
            defense: LEVEL_UP_DEFENSE_GROWTH,
        },
    );
    assert_eq!(record.new_level, 2);

    // Growth landed and the level-up fully healed the player.
    let health = world.health(player).unwrap();
    assert_eq!(health.max_hp(), 30 + LEVEL_UP_HP_GROWTH);
    assert_eq!(health.hp(), health.max_hp());
    let stats = world.combat_stats(player).unwrap();
    assert_eq!(stats.power, 5 + LEVEL_UP_POWER_GROWTH);
    assert_eq!(stats.defense, 2 + LEVEL_UP_DEFENSE_GROWTH);

    // Only one level per call: 350 xp does not finish level 2 (400).
    let progression = world.progression(player).unwrap();
    assert!(!ready_to_level_up(progression.xp(), progression.level()));
}

#[test]
fn test_multiple_owed_levels_take_one_call_each() {
    let mut world = World::new();
    let player = spawn_player(&mut world, "Aldric");
    world.progression_mut(player).unwrap().add_xp(1000);

    let mut levels_applied = 0;
    loop {
        let progression = world.progression(player).unwrap();
        if !ready_to_level_up(progression.xp(), progression.level()) {
            break;
        }
        apply_level_up(&mut world, player, StatIncreases::default());
        levels_applied += 1;
    }

    // 1000 xp clears the 100, 400, and 900 thresholds but not 1600.
    assert_eq!(levels_applied, 3);
    assert_eq!(world.progression(player).unwrap().level(), 4);
    assert_eq!(xp_for_level(4), 1600);
}

// =========================================================================
// Status-effect bonuses and the heal path
// =========================================================================

#[test]
fn test_transient_bonuses_swing_a_duel() {
    let mut world = World::new();
    let player = spawn_player(&mut world, "Aldric");
    let goblin = world.spawn("Goblin", 'g');
    world.attach_health(goblin, Health::new(20));
    world.attach_combat_stats(goblin, CombatStats::new(4, 5));

    // Base: 5 power vs 5 defense, no damage gets through.
    assert_eq!(resolve_attack(&mut world, player, goblin).damage, 0);
    // A +3 strength blessing turns the blade.
    let outcome = resolve_attack_with_bonuses(&mut world, player, goblin, 3, 0);
    assert_eq!(outcome.damage, 3);
    // A shield spell on the defender cancels it back out.
    let outcome = resolve_attack_with_bonuses(&mut world, player, goblin, 3, 3);
    assert_eq!(outcome.damage, 0);
}

#[test]
fn test_heal_between_fights_respects_max() {
    let mut world = World::new();
    let player = spawn_player(&mut world, "Aldric");
    let troll = world.spawn("Troll", 'T');
    world.attach_health(troll, Health::new(60));
    world.attach_combat_stats(troll, CombatStats::new(10, 0));

    resolve_attack(&mut world, troll, player);
    let hp_after = world.health(player).unwrap().hp();
    assert_eq!(hp_after, 30 - 8); // 10 power - 2 defense

    assert_eq!(heal(&mut world, player, 100), 8);
    assert_eq!(world.health(player).unwrap().hp(), 30);
}

// =========================================================================
// Capability queries keep non-combatants out of combat logic
// =========================================================================

#[test]
fn test_items_never_appear_in_combatant_queries() {
    let mut world = World::new();
    let player = spawn_player(&mut world, "Aldric");
    spawn_item_entity(&mut world, "Dried Herb", &["herbal"], true, true);
    spawn_item_entity(&mut world, "Rusty Key", &[], false, false);

    let combatants = world.entities_with(&[ComponentKind::Health, ComponentKind::CombatStats]);
    assert_eq!(combatants, vec![player]);

    // The "living entities" filter is a capability query too: an item
    // can never satisfy it, dead or alive.
    let living: Vec<_> = combatants
        .into_iter()
        .filter(|&id| world.health(id).is_some_and(|h| h.is_alive()))
        .collect();
    assert_eq!(living, vec![player]);
}
