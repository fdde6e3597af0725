//! Interface boundary to the map/dungeon generator.
//!
//! The rules core does not generate or store the map. It consumes exactly
//! two questions, "is this destination walkable" and "who stands where",
//! through these traits, which the generator side implements.

use crate::entity::EntityId;

/// Tile walkability as produced by the dungeon generator.
pub trait TileMap {
    fn is_walkable(&self, x: i32, y: i32) -> bool;
}

/// Which entities currently occupy which positions.
pub trait Occupancy {
    fn entities_at(&self, x: i32, y: i32) -> Vec<EntityId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 3x3 room with walls, the kind of fixture the generator side
    // would hand the turn loop.
    struct Room;

    impl TileMap for Room {
        fn is_walkable(&self, x: i32, y: i32) -> bool {
            (0..3).contains(&x) && (0..3).contains(&y)
        }
    }

    struct NoOccupants;

    impl Occupancy for NoOccupants {
        fn entities_at(&self, _x: i32, _y: i32) -> Vec<EntityId> {
            Vec::new()
        }
    }

    #[test]
    fn test_boundary_traits_are_object_safe() {
        let map: &dyn TileMap = &Room;
        assert!(map.is_walkable(1, 1));
        assert!(!map.is_walkable(3, 0));

        let occupancy: &dyn Occupancy = &NoOccupants;
        assert!(occupancy.entities_at(1, 1).is_empty());
    }
}
