//! Canonical interaction decision table

use dcf_engine::HostWorld;
use dcf_sdk::{FormType, LockLevel, ObjectRefHandle};

use super::InteractionType;

/// Classify the interaction available with `target`
///
/// Returns [`InteractionType::None`] when there is no target, the handle no
/// longer resolves, the base object is missing, the form type has no
/// interaction, or the branch needs the player and there is none.
pub fn classify(world: &dyn HostWorld, target: Option<ObjectRefHandle>) -> InteractionType {
    let Some(target) = target.filter(|t| world.is_live(*t)) else {
        return InteractionType::None;
    };
    let Some(form_type) = world.form_type(target) else {
        return InteractionType::None;
    };

    match form_type {
        t if t.is_lootable() => classify_item(world, target),
        FormType::Activator | FormType::TalkingActivator | FormType::Light => {
            InteractionType::Activate
        }
        FormType::Book | FormType::Note => InteractionType::Read,
        FormType::Container => InteractionType::Search,
        FormType::Door => classify_door(world, target),
        FormType::Flora => InteractionType::Harvest,
        t if t.is_actor() => classify_actor(world, target),
        _ => InteractionType::None,
    }
}

fn classify_item(world: &dyn HostWorld, item: ObjectRefHandle) -> InteractionType {
    let Some(player) = world.player() else {
        return InteractionType::None;
    };

    if player.would_be_stealing(item) {
        InteractionType::Steal
    } else {
        InteractionType::Take
    }
}

fn classify_door(world: &dyn HostWorld, door: ObjectRefHandle) -> InteractionType {
    if !world.is_locked(door) {
        return InteractionType::Door;
    }
    let Some(player) = world.player() else {
        return InteractionType::None;
    };

    if world.lock_level(door) == Some(LockLevel::RequiresKey) {
        let has_key = world
            .lock_key(door)
            .is_some_and(|key| player.item_count(key) > 0);
        return if has_key {
            InteractionType::UseKey
        } else {
            InteractionType::RequiresKey
        };
    }

    if player.has_lockpicks() {
        InteractionType::Lockpick
    } else {
        InteractionType::LockpickNone
    }
}

fn classify_actor(world: &dyn HostWorld, actor: ObjectRefHandle) -> InteractionType {
    if world.is_dead(actor) {
        return InteractionType::Search;
    }
    let Some(player) = world.player() else {
        return InteractionType::None;
    };

    if player.is_sneaking() {
        if player.is_teammate(actor) {
            InteractionType::Talk
        } else {
            InteractionType::Pickpocket
        }
    } else if player.is_hostile(actor) {
        InteractionType::None
    } else {
        InteractionType::Talk
    }
}
