//! First-person player: walking, looking around, jumping.

use std::f32::consts::FRAC_PI_2;

use cellray_core::PlayerSettings;
use cellray_math::{CameraPose, Vec3};

use crate::terminal::Action;

/// Feet closer than this to the ground count as standing on it.
const GROUND_TOLERANCE: f32 = 1e-3;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Player {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Walking direction on the ground plane.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Strafing direction on the ground plane.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    pub fn on_ground(&self, ground_level: f32) -> bool {
        self.position.y <= ground_level + GROUND_TOLERANCE
    }

    /// Apply one key action.
    pub fn apply(&mut self, action: Action, settings: &PlayerSettings, ground_level: f32) {
        let step = settings.move_speed;
        let turn = settings.turn_speed;

        match action {
            Action::MoveForward => self.position += self.forward() * step,
            Action::MoveBack => self.position -= self.forward() * step,
            Action::StrafeLeft => self.position -= self.right() * step,
            Action::StrafeRight => self.position += self.right() * step,
            // Negative pitch tilts the view up
            Action::LookUp => self.pitch = (self.pitch - turn).max(-FRAC_PI_2),
            Action::LookDown => self.pitch = (self.pitch + turn).min(FRAC_PI_2),
            Action::TurnLeft => self.yaw -= turn,
            Action::TurnRight => self.yaw += turn,
            Action::Jump => {
                if self.on_ground(ground_level) {
                    self.velocity.y = settings.jump_speed;
                }
            }
            Action::Quit | Action::None => {}
        }
    }

    /// Integrate gravity for one step and keep the feet above the ground.
    pub fn step(&mut self, dt: f32, gravity: f32, ground_level: f32) {
        self.velocity.y += gravity * dt;
        self.position += self.velocity * dt;

        if self.position.y < ground_level {
            self.position.y = ground_level;
            self.velocity.y = 0.0;
        }
    }

    /// Camera at eye height above the feet.
    pub fn camera(&self, eye_height: f32) -> CameraPose {
        CameraPose::new(
            self.position + Vec3::new(0.0, eye_height, 0.0),
            self.yaw,
            self.pitch,
        )
    }
}
