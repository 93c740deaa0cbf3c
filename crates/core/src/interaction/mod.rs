//! Interaction classification
//!
//! Decides what the player can do with the object under the crosshair.
//!
//! # Overview
//!
//! [`classify`] is the canonical decision: a pure function of the target's
//! form type, lock state and life state plus the player's stealth, inventory
//! and relations. It never fails; missing data degrades to
//! [`InteractionType::None`].
//!
//! [`activation_flags`] is a coarser signal derived from form type and lock
//! state alone. It is kept as a separate query and does not feed `classify`.

mod classify;
mod flags;

use std::fmt;

pub use classify::classify;
pub use flags::{activation_flags, ActivationFlags};

/// What the player can do with the targeted object
///
/// Discriminants are stable; they cross the C ABI as `u8`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionType {
    /// Nothing, or nothing the player is allowed to do
    #[default]
    None = 0,
    Talk = 1,
    Open = 2,
    Activate = 3,
    Take = 4,
    Harvest = 5,
    /// Loot a container or corpse
    Search = 6,
    Sit = 7,
    Sleep = 8,
    Pickpocket = 9,
    Lockpick = 10,
    /// Pickable lock, but the player has no lockpicks
    LockpickNone = 11,
    Read = 12,
    /// Unlocked door, ready to open
    Door = 13,
    Steal = 14,
    UseKey = 15,
    RequiresKey = 16,
}

impl InteractionType {
    /// All interaction types, in discriminant order
    pub const ALL: [InteractionType; 17] = [
        InteractionType::None,
        InteractionType::Talk,
        InteractionType::Open,
        InteractionType::Activate,
        InteractionType::Take,
        InteractionType::Harvest,
        InteractionType::Search,
        InteractionType::Sit,
        InteractionType::Sleep,
        InteractionType::Pickpocket,
        InteractionType::Lockpick,
        InteractionType::LockpickNone,
        InteractionType::Read,
        InteractionType::Door,
        InteractionType::Steal,
        InteractionType::UseKey,
        InteractionType::RequiresKey,
    ];

    /// Decode a raw discriminant
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            InteractionType::None => "none",
            InteractionType::Talk => "talk",
            InteractionType::Open => "open",
            InteractionType::Activate => "activate",
            InteractionType::Take => "take",
            InteractionType::Harvest => "harvest",
            InteractionType::Search => "search",
            InteractionType::Sit => "sit",
            InteractionType::Sleep => "sleep",
            InteractionType::Pickpocket => "pickpocket",
            InteractionType::Lockpick => "lockpick",
            InteractionType::LockpickNone => "lockpick_none",
            InteractionType::Read => "read",
            InteractionType::Door => "door",
            InteractionType::Steal => "steal",
            InteractionType::UseKey => "use_key",
            InteractionType::RequiresKey => "requires_key",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_match_table_order() {
        for (i, interaction) in InteractionType::ALL.iter().enumerate() {
            assert_eq!(interaction.raw() as usize, i);
            assert_eq!(InteractionType::from_raw(i as u8), Some(*interaction));
        }
        assert_eq!(InteractionType::from_raw(17), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(InteractionType::LockpickNone.to_string(), "lockpick_none");
        assert_eq!(InteractionType::default(), InteractionType::None);
    }
}
