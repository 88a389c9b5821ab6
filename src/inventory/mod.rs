//! Inventory crediting.
//!
//! Every domain that produces items (harvests, fruit, wood) sends an
//! `ItemPickupEvent`; this is the single place they land.

use bevy::prelude::*;

use crate::shared::*;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_item_pickups);
    }
}

pub fn apply_item_pickups(
    mut events: EventReader<ItemPickupEvent>,
    mut inventory: ResMut<Inventory>,
) {
    for event in events.read() {
        inventory.add(&event.item_id, event.quantity);
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::Inventory;

    #[test]
    fn adding_accumulates_per_item() {
        let mut inv = Inventory::default();
        inv.add("wood", 1);
        inv.add("wood", 2);
        inv.add("apple", 1);
        assert_eq!(inv.count("wood"), 3);
        assert_eq!(inv.count("apple"), 1);
        assert_eq!(inv.count("corn"), 0);
    }
}
