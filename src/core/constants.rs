// XP and leveling
pub const XP_CURVE_BASE: u64 = 100;

// Level-up growth suggested to the turn loop. The progression engine takes
// explicit increases per call; these are the defaults a caller hands it.
pub const LEVEL_UP_HP_GROWTH: u32 = 10;
pub const LEVEL_UP_POWER_GROWTH: u32 = 2;
pub const LEVEL_UP_DEFENSE_GROWTH: u32 = 1;

// Inventory
pub const DEFAULT_INVENTORY_CAPACITY: usize = 10;

// Player starting stats
pub const PLAYER_BASE_HP: u32 = 30;
pub const PLAYER_BASE_POWER: u32 = 5;
pub const PLAYER_BASE_DEFENSE: u32 = 2;
pub const PLAYER_BASE_MP: u32 = 10;
pub const PLAYER_BASE_MANA_REGEN: u32 = 1;

// Monster stat variance applied at spawn time (multiplicative)
pub const MONSTER_STAT_VARIANCE_MIN: f64 = 0.9;
pub const MONSTER_STAT_VARIANCE_MAX: f64 = 1.1;
