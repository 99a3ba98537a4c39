//! Charge-and-release dash for the player.

use crate::constants::{DASH_DURATION, DASH_MAX_CHARGE_TIME, DASH_MIN_CHARGE_RATIO};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Idle,
    /// Button held; `charge` seconds accumulated so far
    Charging { charge: f32 },
    /// Dash in flight for `elapsed` seconds
    Dashing { elapsed: f32 },
}

/// What the caller has to apply to the player after an update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashAction {
    None,
    /// Launch toward the aim point at `strength` (0-1] of full dash speed
    Launch { strength: f32 },
    /// Released too early; nothing happens
    Cancel,
    /// Dash over; bring velocity back down to walking speed
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashState {
    pub phase: DashPhase,
}

impl DashState {
    pub fn is_dashing(&self) -> bool {
        matches!(self.phase, DashPhase::Dashing { .. })
    }

    /// Charge as a fraction of the maximum, for a charge indicator
    pub fn charge_ratio(&self) -> f32 {
        match self.phase {
            DashPhase::Charging { charge } => (charge / DASH_MAX_CHARGE_TIME).min(1.0),
            _ => 0.0,
        }
    }

    /// Advance the dash by one frame. Input is ignored while a dash is in
    /// flight.
    pub fn update(&mut self, held: bool, delta: f32) -> DashAction {
        match self.phase {
            DashPhase::Idle => {
                if held {
                    self.phase = DashPhase::Charging { charge: 0.0 };
                }
                DashAction::None
            }
            DashPhase::Charging { charge } if held => {
                self.phase = DashPhase::Charging {
                    charge: charge + delta,
                };
                DashAction::None
            }
            DashPhase::Charging { charge } => {
                self.phase = DashPhase::Idle;
                if charge > DASH_MAX_CHARGE_TIME * DASH_MIN_CHARGE_RATIO {
                    let strength = (charge / DASH_MAX_CHARGE_TIME).min(1.0);
                    log::debug!("Dash launched at {:.0}% strength", strength * 100.0);
                    self.phase = DashPhase::Dashing { elapsed: 0.0 };
                    DashAction::Launch { strength }
                } else {
                    DashAction::Cancel
                }
            }
            DashPhase::Dashing { elapsed } => {
                let elapsed = elapsed + delta;
                if elapsed >= DASH_DURATION {
                    log::debug!("Dash finished");
                    self.phase = DashPhase::Idle;
                    DashAction::Finish
                } else {
                    self.phase = DashPhase::Dashing { elapsed };
                    DashAction::None
                }
            }
        }
    }
}
