use serde::{Deserialize, Serialize};

/// Stat growth to apply on a level-up. Unset stats default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatIncreases {
    pub hp: u32,
    pub power: u32,
    pub defense: u32,
}

/// Structured record of an XP award after a kill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAward {
    pub victor: String,
    pub defeated: String,
    /// XP added by this award (the defeated entity's xp_value).
    pub amount: u64,
    /// The victor's XP total after the award.
    pub total_xp: u64,
    /// Whether the victor now qualifies for at least one level-up.
    pub level_up_ready: bool,
}

/// Structured record of one applied level-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpRecord {
    pub entity: String,
    pub new_level: u32,
    pub hp_increase: u32,
    pub power_increase: u32,
    pub defense_increase: u32,
}
