use std::path::PathBuf;

use clap::Parser;
use glam::{IVec2, Vec2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use maze_dash::components::{Behavior, Body};
use maze_dash::coords::{tile_center, world_to_tile};
use maze_dash::events::GameEvent;
use maze_dash::raycast::has_line_of_sight;
use maze_dash::{Controls, GameConfig, GameState};

/// Fixed simulation step (60 Hz)
const FRAME: f32 = 1.0 / 60.0;
/// Charge fraction at which the autopilot lets a dash go
const AUTOPILOT_RELEASE_RATIO: f32 = 2.0 / 3.0;
/// Enemies further than this many rooms away are ignored by the autopilot
const AUTOPILOT_ENGAGE_ROOMS: f32 = 1.5;

/// Generate a maze and run a headless session with a scripted player.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; the flags below override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// RNG seed for both the game and the autopilot
    #[arg(long)]
    seed: Option<u64>,
    /// Maze width in tiles
    #[arg(long, value_name = "TILES")]
    width: Option<usize>,
    /// Maze height in tiles
    #[arg(long, value_name = "TILES")]
    height: Option<usize>,
    /// Number of 60 Hz frames to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u32,
    /// Serve profiling data to a puffin viewer while running
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = args.width {
        config.dungeon_width = width;
    }
    if let Some(height) = args.height {
        config.dungeon_height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let _profiler = if args.profile {
        let addr = format!("0.0.0.0:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr)?;
        puffin::set_scopes_on(true);
        log::info!("Serving profile data on {addr}");
        Some(server)
    } else {
        None
    };

    let mut game = GameState::new(config)?;
    println!("{}", render_map(&game));

    let mut pilot = Autopilot::new(args.seed);
    let mut stats = SessionStats::default();

    for _ in 0..args.ticks {
        puffin::GlobalProfiler::lock().new_frame();

        let controls = pilot.controls(&game);
        if let Some(outcome) = game.step(FRAME, &controls)? {
            pilot.forget_route();
            log::debug!("New level after {outcome:?}:\n{}", render_map(&game));
        }
        for event in game.events.drain() {
            stats.record(&event);
        }
        stats.observe(&game);
    }

    log::info!(
        "Session over after {} frames: {} wins, {} losses, {} spawners destroyed, {} enemies killed",
        args.ticks,
        stats.wins,
        stats.losses,
        stats.spawners_destroyed,
        stats.enemies_killed
    );
    println!("{stats}");
    Ok(())
}

/// ASCII map of the current level: `#` wall, `.` floor, `o` dead end,
/// `S` spawner, `p` patroller, `@` player. Row 0 is printed first, under a
/// status line.
fn render_map(game: &GameState) -> String {
    let grid = game.grid();
    let room = game.config.room_size;
    let mut rows: Vec<Vec<char>> = grid.to_ascii().lines().map(|line| line.chars().collect()).collect();

    let mut mark = |tile: IVec2, glyph: char| {
        if grid.in_bounds(tile.x, tile.y) {
            rows[tile.y as usize][tile.x as usize] = glyph;
        }
    };
    for &tile in &game.endpoints {
        mark(tile, 'o');
    }
    for (_entity, (body, behavior)) in game.world.query::<(&Body, &Behavior)>().iter() {
        let glyph = match behavior {
            Behavior::Player => '@',
            Behavior::Spawner(_) => 'S',
            Behavior::Patroller(_) => 'p',
        };
        mark(world_to_tile(body.pos, room), glyph);
    }

    let health = game.player_health().map_or(0.0, |health| health.percentage());
    let status = format!(
        "{}x{} maze, {} spawners, health {:.0}%",
        grid.width(),
        grid.height(),
        game.spawners_remaining(),
        health * 100.0
    );
    std::iter::once(status)
        .chain(rows.into_iter().map(|row| row.into_iter().collect::<String>()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scripted player: wanders the maze tile by tile, avoiding doubling back,
/// and charges a dash at any enemy it can see nearby.
struct Autopilot {
    rng: StdRng,
    waypoint: Option<Vec2>,
    last_tile: IVec2,
}

impl Autopilot {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            waypoint: None,
            last_tile: IVec2::splat(-1),
        }
    }

    fn forget_route(&mut self) {
        self.waypoint = None;
        self.last_tile = IVec2::splat(-1);
    }

    fn controls(&mut self, game: &GameState) -> Controls {
        let Some(player) = game.player_body() else {
            return Controls::default();
        };
        let room = game.config.room_size;

        if let Some(target) = nearest_visible_enemy(game, player.pos) {
            if game.is_dashing() {
                return Controls {
                    aim: target,
                    ..Controls::default()
                };
            }
            return Controls {
                movement: Vec2::ZERO,
                dash_held: game.dash.charge_ratio() < AUTOPILOT_RELEASE_RATIO,
                aim: target,
            };
        }

        let tile = world_to_tile(player.pos, room);
        let needs_waypoint = match self.waypoint {
            None => true,
            Some(waypoint) => {
                waypoint.distance(player.pos) < room * 0.1
                    || !has_line_of_sight(game.grid(), room, player.pos, waypoint)
            }
        };
        if needs_waypoint {
            let options: Vec<IVec2> = game.grid().floor_neighbors(tile).collect();
            let forward: Vec<IVec2> = options.iter().copied().filter(|t| *t != self.last_tile).collect();
            let rng = &mut self.rng;
            if let Some(&next) = forward.choose(rng).or_else(|| options.choose(rng)) {
                self.last_tile = tile;
                self.waypoint = Some(tile_center(next, room));
            }
        }

        let movement = self
            .waypoint
            .map_or(Vec2::ZERO, |waypoint| (waypoint - player.pos).normalize_or_zero());
        Controls {
            movement,
            dash_held: false,
            aim: player.pos,
        }
    }
}

fn nearest_visible_enemy(game: &GameState, from: Vec2) -> Option<Vec2> {
    let room = game.config.room_size;
    let reach = room * AUTOPILOT_ENGAGE_ROOMS;
    game.world
        .query::<(&Body, &Behavior)>()
        .iter()
        .filter(|(_, (_, behavior))| !behavior.is_player())
        .map(|(_, (body, _))| body.pos)
        .filter(|pos| pos.distance(from) < reach && has_line_of_sight(game.grid(), room, from, *pos))
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}

#[derive(Debug, Default)]
struct SessionStats {
    hits_taken: u32,
    enemies_killed: u32,
    enemies_spawned: u32,
    spawners_destroyed: u32,
    dashes: u32,
    wins: u32,
    losses: u32,
    /// Lowest player health seen, as a fraction of max
    lowest_health: Option<f32>,
}

impl SessionStats {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerHit { .. } => self.hits_taken += 1,
            GameEvent::EnemyKilled { .. } => self.enemies_killed += 1,
            GameEvent::SpawnerDestroyed { .. } => self.spawners_destroyed += 1,
            GameEvent::EnemySpawned { .. } => self.enemies_spawned += 1,
            GameEvent::DashStarted { .. } => self.dashes += 1,
            GameEvent::DashEnded => {}
            GameEvent::Victory { .. } => self.wins += 1,
            GameEvent::Defeat { .. } => self.losses += 1,
        }
    }

    fn observe(&mut self, game: &GameState) {
        if let Some(health) = game.player_health() {
            let fraction = health.percentage();
            self.lowest_health = Some(self.lowest_health.map_or(fraction, |low| low.min(fraction)));
        }
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "dashes:             {}", self.dashes)?;
        writeln!(f, "hits taken:         {}", self.hits_taken)?;
        writeln!(f, "enemies spawned:    {}", self.enemies_spawned)?;
        writeln!(f, "enemies killed:     {}", self.enemies_killed)?;
        writeln!(f, "spawners destroyed: {}", self.spawners_destroyed)?;
        writeln!(f, "lowest health:      {:.0}%", self.lowest_health.unwrap_or(1.0) * 100.0)?;
        write!(f, "wins/losses:        {}/{}", self.wins, self.losses)
    }
}
