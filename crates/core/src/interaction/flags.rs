//! Activation flags

use bitflags::bitflags;

use dcf_engine::HostWorld;
use dcf_sdk::{FormType, ObjectRefHandle};

bitflags! {
    /// Coarse activation capabilities of an object reference
    ///
    /// Depends only on form type and lock state, never on the player.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ActivationFlags: u32 {
        const TALK = 0x01;
        const CONTAINER_OR_DOOR = 0x02;
        const TAKE_OR_READ = 0x04;
        /// Locked door
        const UNLOCK = 0x08;
        const FURNITURE = 0x10;
        const HARVEST_OR_ACTIVATE = 0x20;
    }
}

/// Compute the activation flags of `target`
///
/// Empty for no target, a dead handle or a missing base object.
pub fn activation_flags(world: &dyn HostWorld, target: Option<ObjectRefHandle>) -> ActivationFlags {
    let Some(target) = target.filter(|t| world.is_live(*t)) else {
        return ActivationFlags::empty();
    };
    let Some(form_type) = world.form_type(target) else {
        return ActivationFlags::empty();
    };

    match form_type {
        FormType::Npc => ActivationFlags::TALK,
        FormType::Container => ActivationFlags::CONTAINER_OR_DOOR,
        FormType::Door if world.is_locked(target) => {
            ActivationFlags::CONTAINER_OR_DOOR | ActivationFlags::UNLOCK
        }
        FormType::Door => ActivationFlags::CONTAINER_OR_DOOR,
        FormType::Book => ActivationFlags::TAKE_OR_READ,
        FormType::Furniture => ActivationFlags::FURNITURE,
        FormType::Flora | FormType::Tree | FormType::Activator => {
            ActivationFlags::HARVEST_OR_ACTIVATE
        }
        _ => ActivationFlags::empty(),
    }
}
