use serde::{Deserialize, Serialize};

/// Structured outcome of one resolved attack.
///
/// The resolver returns data only; turning this into a log line or UI
/// notification is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attacker: String,
    pub defender: String,
    /// Damage actually applied (already floored at zero).
    pub damage: u32,
    /// True only when this attack crossed the alive → dead boundary.
    /// Attacking an already-dead defender reports false.
    pub defender_died: bool,
}
