//! Console messages for crosshair changes
//!
//! Formats an interaction as a sentence for the in-game console. Useful for
//! checking the classifier against the game without the overlay.

use std::sync::Arc;

use crate::interaction::{classify, InteractionType};
use crate::monitor::{CrosshairMonitor, ObserverKey};

/// Name used when the target has none
pub const UNKNOWN_OBJECT: &str = "Unknown Object";

/// Describe an interaction with a named object
///
/// Returns `None` for [`InteractionType::None`], which has nothing to say.
pub fn describe_interaction(interaction: InteractionType, name: &str) -> Option<String> {
    let name = if name.is_empty() { UNKNOWN_OBJECT } else { name };

    let message = match interaction {
        InteractionType::None => return None,
        InteractionType::Talk => format!("You can talk to {name}"),
        InteractionType::Open | InteractionType::Door => format!("You can open {name}"),
        InteractionType::Activate => format!("You can activate {name}"),
        InteractionType::Take => format!("You can take {name}"),
        InteractionType::Harvest => format!("You can harvest {name}"),
        InteractionType::Search => format!("You can search {name}"),
        InteractionType::Sit => format!("You can sit on {name}"),
        InteractionType::Sleep => format!("You can sleep in {name}"),
        InteractionType::Pickpocket => format!("You can pickpocket {name}"),
        InteractionType::Lockpick => format!("You can lockpick {name}"),
        InteractionType::LockpickNone => "You are out of lockpicks".to_string(),
        InteractionType::Read => format!("You can read {name}"),
        InteractionType::Steal => format!("You can steal {name}"),
        InteractionType::UseKey => format!("You can unlock {name} with your key"),
        InteractionType::RequiresKey => format!("{name} requires a key"),
    };
    Some(message)
}

/// Print every crosshair change to the host console
///
/// Returns the observer key so the printer can be removed again.
pub fn register_console_printer(monitor: &CrosshairMonitor) -> ObserverKey {
    let world = Arc::clone(monitor.world());

    monitor.register_observer(move |target| {
        let interaction = classify(world.as_ref(), Some(target));
        let name = world.name(target).unwrap_or_default();
        if let Some(message) = describe_interaction(interaction, &name) {
            world.console_print(&message);
        }
    })
}
