//! Game simulation - advances a `GameState` by one frame.

use glam::Vec2;

use crate::components::{Body, Health, Mobility};
use crate::constants::{DASH_SPEED, MAX_FRAME_DELTA};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::spawning;
use crate::systems::{self, DashAction};

use super::game_state::{Controls, GameState, Outcome};

impl GameState {
    /// Advance the simulation by `delta` seconds.
    ///
    /// Frames longer than `MAX_FRAME_DELTA` (or negative/non-finite ones) are
    /// simulated as zero-length so a stall can't tunnel bodies or fire
    /// timers. When the level ends the state resets itself and the outcome is
    /// returned.
    pub fn step(&mut self, delta: f32, controls: &Controls) -> Result<Option<Outcome>, GameError> {
        puffin::profile_function!();

        let delta = if delta.is_finite() && (0.0..=MAX_FRAME_DELTA).contains(&delta) {
            delta
        } else {
            0.0
        };
        self.time += delta;

        self.update_player(delta, controls);

        // Player moves before enemy AI reads its position
        let room_size = self.config.room_size;
        let max_segment = self.config.max_segment_length;
        systems::integrate_entity(
            &mut self.world,
            self.player_entity,
            &self.grid,
            room_size,
            max_segment,
            delta,
            self.dash.is_dashing(),
        );
        let Some(player_pos) = self.player_body().map(|body| body.pos) else {
            return Ok(None);
        };

        let wave = systems::run_ai(&mut self.world, &self.grid, room_size, player_pos, delta, &mut self.rng);
        for position in wave {
            let entity = spawning::spawn_patroller(&mut self.world, position, room_size, &mut self.rng);
            self.events.push(GameEvent::EnemySpawned { entity, position });
        }

        systems::integrate(
            &mut self.world,
            &self.grid,
            room_size,
            max_segment,
            delta,
            Some(self.player_entity),
        );

        let report = systems::resolve_contacts(
            &mut self.world,
            self.player_entity,
            self.dash.is_dashing(),
            &mut self.events,
        );

        let mut outcome = None;
        for kill in report.kills {
            if kill.spawner {
                self.spawners_remaining = self.spawners_remaining.saturating_sub(1);
                if let Ok(mut health) = self.world.get::<&mut Health>(self.player_entity) {
                    health.restore();
                }
                self.events.push(GameEvent::SpawnerDestroyed {
                    entity: kill.entity,
                    position: kill.position,
                    remaining: self.spawners_remaining,
                });
                if self.spawners_remaining == 0 {
                    outcome = Some(Outcome::Won);
                }
            } else {
                self.events.push(GameEvent::EnemyKilled {
                    entity: kill.entity,
                    position: kill.position,
                });
            }
        }
        if report.player_died {
            outcome = Some(Outcome::Lost);
        }

        self.mark_visited();
        log::trace!("Step {:.4}s at t={:.2}", delta, self.time);

        if let Some(outcome) = outcome {
            self.finish(outcome)?;
        }
        Ok(outcome)
    }

    /// Dash state machine, then walking when not mid-dash
    fn update_player(&mut self, delta: f32, controls: &Controls) {
        let Ok((body, mobility)) = self
            .world
            .query_one_mut::<(&mut Body, &Mobility)>(self.player_entity)
        else {
            return;
        };

        match self.dash.update(controls.dash_held, delta) {
            DashAction::Launch { strength } => {
                let dir = (controls.aim - body.pos).try_normalize().unwrap_or(Vec2::X);
                body.vel = dir * DASH_SPEED * strength;
                self.events.push(GameEvent::DashStarted { strength });
            }
            DashAction::Finish => {
                body.vel *= mobility.speed / DASH_SPEED;
                self.events.push(GameEvent::DashEnded);
            }
            DashAction::Cancel | DashAction::None => {}
        }

        if !self.dash.is_dashing() {
            let dir = if controls.movement.is_finite() {
                controls.movement.clamp_length_max(1.0)
            } else {
                Vec2::ZERO
            };
            systems::steer(body, mobility, dir, delta);
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<(), GameError> {
        let time = self.time;
        match outcome {
            Outcome::Won => {
                log::info!("All spawners destroyed after {:.1}s", time);
                self.events.push(GameEvent::Victory { time });
            }
            Outcome::Lost => {
                log::info!("Player died after {:.1}s", time);
                self.events.push(GameEvent::Defeat { time });
            }
        }
        self.last_outcome = Some(outcome);
        self.reset()
    }
}
