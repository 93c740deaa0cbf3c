//! Form type definitions
//!
//! Every world object reference points at a base form. The base form's type
//! decides which interactions make sense. Raw values match the host's
//! four-letter record codes in load order.

use std::fmt;

/// Base form type of a world object
///
/// Only the types the crosshair cares about are listed. Anything else decodes
/// to `None` via [`FormType::from_raw`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormType {
    /// SCRL
    Scroll = 0x17,
    /// ACTI
    Activator = 0x18,
    /// TACT
    TalkingActivator = 0x19,
    /// ARMO
    Armor = 0x1A,
    /// BOOK
    Book = 0x1B,
    /// CONT
    Container = 0x1C,
    /// DOOR
    Door = 0x1D,
    /// INGR
    Ingredient = 0x1E,
    /// LIGH
    Light = 0x1F,
    /// MISC
    Misc = 0x20,
    /// TREE
    Tree = 0x26,
    /// FLOR
    Flora = 0x27,
    /// FURN
    Furniture = 0x28,
    /// WEAP
    Weapon = 0x29,
    /// AMMO
    Ammo = 0x2A,
    /// NPC_
    Npc = 0x2B,
    /// LVLN
    LeveledNpc = 0x2C,
    /// KEYM
    KeyMaster = 0x2D,
    /// ALCH
    AlchemyItem = 0x2E,
    /// NOTE
    Note = 0x30,
    /// SLGM
    SoulGem = 0x34,
    /// LVLI
    LeveledItem = 0x35,
    /// ACHR
    ActorCharacter = 0x3E,
}

impl FormType {
    /// All known form types, in raw value order
    pub const ALL: [FormType; 23] = [
        FormType::Scroll,
        FormType::Activator,
        FormType::TalkingActivator,
        FormType::Armor,
        FormType::Book,
        FormType::Container,
        FormType::Door,
        FormType::Ingredient,
        FormType::Light,
        FormType::Misc,
        FormType::Tree,
        FormType::Flora,
        FormType::Furniture,
        FormType::Weapon,
        FormType::Ammo,
        FormType::Npc,
        FormType::LeveledNpc,
        FormType::KeyMaster,
        FormType::AlchemyItem,
        FormType::Note,
        FormType::SoulGem,
        FormType::LeveledItem,
        FormType::ActorCharacter,
    ];

    /// Decode a raw host form type
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| *t as u8 == raw)
    }

    /// Get the raw host value
    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Items whose default interaction is picking them up
    pub const fn is_lootable(self) -> bool {
        matches!(
            self,
            FormType::Scroll
                | FormType::Armor
                | FormType::Ingredient
                | FormType::Misc
                | FormType::Weapon
                | FormType::Ammo
                | FormType::KeyMaster
                | FormType::AlchemyItem
                | FormType::SoulGem
                | FormType::LeveledItem
        )
    }

    /// Forms that resolve to an actor in the world
    pub const fn is_actor(self) -> bool {
        matches!(
            self,
            FormType::Npc | FormType::LeveledNpc | FormType::ActorCharacter
        )
    }

    /// Four-letter record code
    pub const fn record_code(self) -> &'static str {
        match self {
            FormType::Scroll => "SCRL",
            FormType::Activator => "ACTI",
            FormType::TalkingActivator => "TACT",
            FormType::Armor => "ARMO",
            FormType::Book => "BOOK",
            FormType::Container => "CONT",
            FormType::Door => "DOOR",
            FormType::Ingredient => "INGR",
            FormType::Light => "LIGH",
            FormType::Misc => "MISC",
            FormType::Tree => "TREE",
            FormType::Flora => "FLOR",
            FormType::Furniture => "FURN",
            FormType::Weapon => "WEAP",
            FormType::Ammo => "AMMO",
            FormType::Npc => "NPC_",
            FormType::LeveledNpc => "LVLN",
            FormType::KeyMaster => "KEYM",
            FormType::AlchemyItem => "ALCH",
            FormType::Note => "NOTE",
            FormType::SoulGem => "SLGM",
            FormType::LeveledItem => "LVLI",
            FormType::ActorCharacter => "ACHR",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.record_code())
    }
}

/// Lock difficulty of a door or container
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockLevel {
    Unlocked = -1,
    VeryEasy = 0,
    Easy = 1,
    Average = 2,
    Hard = 3,
    VeryHard = 4,
    /// Cannot be picked, only opened with the lock's key
    RequiresKey = 5,
}

impl LockLevel {
    /// Decode a raw host lock level
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            -1 => Some(LockLevel::Unlocked),
            0 => Some(LockLevel::VeryEasy),
            1 => Some(LockLevel::Easy),
            2 => Some(LockLevel::Average),
            3 => Some(LockLevel::Hard),
            4 => Some(LockLevel::VeryHard),
            5 => Some(LockLevel::RequiresKey),
            _ => None,
        }
    }
}

/// Identifier of a form in the host's form database
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormId(pub u32);

impl FormId {
    /// The lockpick misc item
    pub const LOCKPICK: FormId = FormId(0x0000_000A);

    /// Convert a raw ID, mapping the null ID to `None`
    pub fn from_raw(raw: u32) -> Option<Self> {
        (raw != 0).then_some(FormId(raw))
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_raw_roundtrip() {
        for form_type in FormType::ALL {
            assert_eq!(FormType::from_raw(form_type.raw()), Some(form_type));
        }
        assert_eq!(FormType::from_raw(0x00), None);
        assert_eq!(FormType::from_raw(0x21), None);
    }

    #[test]
    fn test_lootable_and_actor_are_disjoint() {
        for form_type in FormType::ALL {
            assert!(!(form_type.is_lootable() && form_type.is_actor()));
        }
        assert!(FormType::SoulGem.is_lootable());
        assert!(FormType::LeveledNpc.is_actor());
        assert!(!FormType::Book.is_lootable());
    }

    #[test]
    fn test_lock_level() {
        assert_eq!(LockLevel::from_raw(5), Some(LockLevel::RequiresKey));
        assert_eq!(LockLevel::from_raw(-1), Some(LockLevel::Unlocked));
        assert_eq!(LockLevel::from_raw(99), None);
    }

    #[test]
    fn test_form_id() {
        assert_eq!(FormId::from_raw(0), None);
        assert_eq!(FormId::from_raw(0xA), Some(FormId::LOCKPICK));
        assert_eq!(format!("{}", FormId::LOCKPICK), "0000000A");
    }
}
