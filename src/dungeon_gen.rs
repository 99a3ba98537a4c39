use glam::IVec2;
use rand::Rng;

use crate::constants::*;
use crate::error::GenerateError;
use crate::grid::{Grid, ORTHOGONAL};
use crate::tile::TileType;

/// Result of dungeon generation
#[derive(Debug, Clone)]
pub struct DungeonResult {
    pub grid: Grid,
    /// Dead-end floor tiles, in column-major scan order
    pub endpoints: Vec<IVec2>,
    /// Room node the maze walk started from
    pub start: IVec2,
}

/// Randomized depth-first maze carver.
///
/// Room nodes sit on even/even cells and start out as floor; the odd cells
/// between them are wall until the walker knocks one through. The walker only
/// marks the node it stands on as visited most of the time
/// (`DUNGEON_VISIT_CHANCE`), so later branches can break back into it and the
/// result has loops instead of being a perfect maze.
pub struct DungeonGenerator {
    width: usize,
    height: usize,
    grid: Grid,
    visited: Vec<bool>,
}

impl DungeonGenerator {
    fn new(width: usize, height: usize) -> Self {
        let tiles = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    if x % 2 == 0 && y % 2 == 0 {
                        TileType::Floor
                    } else {
                        TileType::Wall
                    }
                })
            })
            .collect();

        Self {
            width,
            height,
            grid: Grid::from_tiles(width, height, tiles),
            visited: vec![false; width * height],
        }
    }

    /// Generate a `width` x `height` maze. Both dimensions must be at least 2.
    pub fn generate(
        width: usize,
        height: usize,
        rng: &mut impl Rng,
    ) -> Result<DungeonResult, GenerateError> {
        puffin::profile_function!();

        validate_dimensions(width, height)?;

        let mut maze = Self::new(width, height);
        let start = maze.random_node(rng);
        maze.carve_from(start, rng);

        let endpoints = find_endpoints(&maze.grid);
        log::info!(
            "Generated {}x{} dungeon from node ({}, {}) with {} endpoints",
            width,
            height,
            start.x,
            start.y,
            endpoints.len()
        );

        Ok(DungeonResult {
            grid: maze.grid,
            endpoints,
            start,
        })
    }

    /// Uniformly random even/even cell
    fn random_node(&self, rng: &mut impl Rng) -> IVec2 {
        let nodes_x = (self.width + 1) / 2;
        let nodes_y = (self.height + 1) / 2;
        IVec2::new(
            rng.gen_range(0..nodes_x) as i32 * 2,
            rng.gen_range(0..nodes_y) as i32 * 2,
        )
    }

    fn carve_from(&mut self, start: IVec2, rng: &mut impl Rng) {
        let mut path = vec![start];
        let mut pos = start;

        while !path.is_empty() {
            if rng.gen_bool(DUNGEON_VISIT_CHANCE) {
                let idx = self.index(pos);
                self.visited[idx] = true;
            }

            let mut options = [IVec2::ZERO; 4];
            let mut count = 0;
            for dir in ORTHOGONAL {
                if self.is_open_node(pos + dir * 2) {
                    options[count] = dir;
                    count += 1;
                }
            }

            if count > 0 {
                let dir = options[rng.gen_range(0..count)];
                let wall = pos + dir;
                self.grid.set(wall.x, wall.y, TileType::Floor);
                pos += dir * 2;
                path.push(pos);
            } else {
                // Dead end: drop this node and resume from the one below it
                path.pop();
                match path.last() {
                    Some(&prev) => pos = prev,
                    None => break,
                }
            }
        }
    }

    fn is_open_node(&self, node: IVec2) -> bool {
        self.grid.in_bounds(node.x, node.y) && !self.visited[self.index(node)]
    }

    fn index(&self, cell: IVec2) -> usize {
        cell.y as usize * self.width + cell.x as usize
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<(), GenerateError> {
    let max = i32::MAX as usize;
    if width < DUNGEON_MIN_DIMENSION
        || height < DUNGEON_MIN_DIMENSION
        || width > max
        || height > max
    {
        return Err(GenerateError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Floor tiles with exactly one orthogonal floor neighbour (dead ends),
/// scanned column by column.
pub fn find_endpoints(grid: &Grid) -> Vec<IVec2> {
    grid.floor_tiles()
        .filter(|t| grid.floor_degree(t.x, t.y) == 1)
        .collect()
}
