/// State of a single dungeon cell.
///
/// The maze only ever distinguishes solid wall material from open floor; every
/// cell outside the grid reads as `Wall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    #[default]
    Wall,
    Floor,
}

impl TileType {
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    pub fn blocks_vision(&self) -> bool {
        matches!(self, TileType::Wall)
    }

    /// Character used by the headless map dump
    pub fn glyph(&self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Floor => '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_wall() {
        assert_eq!(TileType::default(), TileType::Wall);
    }

    #[test]
    fn test_walkable_and_vision_are_opposites() {
        for tile in [TileType::Wall, TileType::Floor] {
            assert_ne!(tile.is_walkable(), tile.blocks_vision());
        }
    }
}
