//! Player resources and collectable items.

mod pickup;
mod state;

pub use pickup::{Pickup, PickupApplied, PickupId, PickupKind, PickupResolver};
pub use state::PlayerState;
