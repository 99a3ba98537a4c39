use glam::IVec2;

use crate::tile::TileType;

/// Orthogonal neighbour offsets, in the order the maze walker enumerates them.
pub const ORTHOGONAL: [IVec2; 4] = [
    IVec2::new(0, 1),
    IVec2::new(0, -1),
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
];

/// Rectangular wall/floor grid, stored row-major.
///
/// A grid is only ever built whole by the dungeon generator; once handed out
/// it is read-only. Regeneration replaces the value instead of mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileType>,
}

impl Grid {
    /// Build a grid from row-major tiles. Panics if the buffer size does not
    /// match the dimensions.
    pub fn from_tiles(width: usize, height: usize, tiles: Vec<TileType>) -> Self {
        assert_eq!(tiles.len(), width * height, "tile buffer does not match {width}x{height}");
        Self { width, height, tiles }
    }

    /// Grid with every cell set to `tile`
    #[cfg(test)]
    pub(crate) fn filled(width: usize, height: usize, tile: TileType) -> Self {
        Self::from_tiles(width, height, vec![tile; width * height])
    }

    /// Parse an ASCII layout ('#' wall, anything else floor). Rows must have
    /// equal length.
    #[cfg(test)]
    pub(crate) fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let tiles = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.chars().count(), width, "ragged ascii grid");
                row.chars().map(|c| if c == '#' { TileType::Wall } else { TileType::Floor })
            })
            .collect();
        Self::from_tiles(width, height, tiles)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// Tile at `(x, y)`. Anything outside the grid is solid wall.
    pub fn get_tile(&self, x: i32, y: i32) -> TileType {
        self.get(x, y).unwrap_or(TileType::Wall)
    }

    pub fn tile_at(&self, tile: IVec2) -> TileType {
        self.get_tile(tile.x, tile.y)
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_walkable()
    }

    /// Number of orthogonal floor neighbours of `(x, y)`
    pub fn floor_degree(&self, x: i32, y: i32) -> usize {
        ORTHOGONAL
            .iter()
            .filter(|d| self.is_floor(x + d.x, y + d.y))
            .count()
    }

    /// Orthogonal neighbours of `tile` that are floor
    pub fn floor_neighbors(&self, tile: IVec2) -> impl Iterator<Item = IVec2> + '_ {
        ORTHOGONAL
            .iter()
            .map(move |d| tile + *d)
            .filter(|n| self.tile_at(*n).is_walkable())
    }

    /// All floor cells, column by column
    pub fn floor_tiles(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.width as i32)
            .flat_map(move |x| (0..self.height as i32).map(move |y| IVec2::new(x, y)))
            .filter(|t| self.tile_at(*t).is_walkable())
    }

    /// Render the grid as text, one row per line
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.chunks(self.width.max(1)) {
            out.extend(row.iter().map(TileType::glyph));
            out.push('\n');
        }
        out
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, tile: TileType) {
        if self.in_bounds(x, y) {
            self.tiles[y as usize * self.width + x as usize] = tile;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_wall() {
        let grid = Grid::filled(3, 2, TileType::Floor);
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (i32::MIN, i32::MAX), (100, 100)] {
            assert_eq!(grid.get_tile(x, y), TileType::Wall, "({x}, {y})");
        }
        assert_eq!(grid.get_tile(2, 1), TileType::Floor);
    }

    #[test]
    fn test_from_ascii_layout() {
        let grid = Grid::from_ascii(&["#.#", "..."]);
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get_tile(0, 0), TileType::Wall);
        assert_eq!(grid.get_tile(1, 0), TileType::Floor);
        assert_eq!(grid.get_tile(0, 1), TileType::Floor);
    }

    #[test]
    fn test_floor_degree_counts_orthogonal_only() {
        let grid = Grid::from_ascii(&[
            ".#.",
            "...",
            ".#.",
        ]);
        assert_eq!(grid.floor_degree(1, 1), 2);
        assert_eq!(grid.floor_degree(0, 0), 1);
        assert_eq!(grid.floor_degree(0, 1), 3);
    }

    #[test]
    fn test_ascii_round_trip() {
        let rows = ["#..", ".#."];
        let grid = Grid::from_ascii(&rows);
        assert_eq!(grid.to_ascii(), "#..\n.#.\n");
    }

    #[test]
    fn test_edges_read_in_bounds() {
        let grid = Grid::from_ascii(&["...", "..#"]);
        let (w, h) = (grid.width() as i32, grid.height() as i32);
        assert_eq!(grid.get_tile(w - 1, h - 1), TileType::Wall);
        assert_eq!(grid.get_tile(w - 1, 0), TileType::Floor);
        assert_eq!(grid.get_tile(w, h - 1), TileType::Wall);
        assert_eq!(grid.get_tile(0, h), TileType::Wall);
        assert_eq!(grid.floor_tiles().count(), 5);
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut grid = Grid::filled(2, 2, TileType::Wall);
        grid.set(5, 5, TileType::Floor);
        grid.set(1, 0, TileType::Floor);
        assert_eq!(grid.floor_tiles().collect::<Vec<_>>(), vec![IVec2::new(1, 0)]);
    }
}
