//! The simulated world: scene, player and the per-step update order.

use std::path::Path;

use anyhow::{Context, Result};
use cellray_core::{RenderSettings, ViewerConfig};
use cellray_renderer::{demo_scene, DisplaySink, FrameStats, RenderError, Renderer, Scene};

use crate::{player::Player, terminal::Action};

pub struct World {
    scene: Scene,
    player: Player,
    config: ViewerConfig,
    renderer: Renderer,
}

impl World {
    /// Build the demo scene with the player at its start position.
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let scene = demo_scene(config.physics.ground_level)?;
        Ok(Self::with_scene(scene, config))
    }

    pub fn with_scene(scene: Scene, mut config: ViewerConfig) -> Self {
        let player = Player::new(config.player.start_position);
        config.render.camera = player.camera(config.player.eye_height);

        Self {
            scene,
            player,
            config,
            renderer: Renderer::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.config.render
    }

    pub fn time_step(&self) -> f32 {
        self.config.physics.time_step
    }

    /// Feed one key action to the player.
    pub fn handle(&mut self, action: Action) {
        let ground = self.config.physics.ground_level;
        self.player.apply(action, &self.config.player, ground);
    }

    /// Advance one fixed step: player physics, object physics, then the camera.
    pub fn step(&mut self) {
        let physics = &self.config.physics;

        self.player
            .step(physics.time_step, physics.gravity, physics.ground_level);
        self.scene
            .step(physics.time_step, physics.gravity, physics.ground_level);

        self.config.render.camera = self.player.camera(self.config.player.eye_height);
    }

    /// Draw the current state into `sink`.
    pub fn render(&mut self, sink: &mut dyn DisplaySink) -> Result<FrameStats, RenderError> {
        self.renderer.render(&self.scene, &self.config.render, sink)
    }

    /// Save the last rendered frame as a PNG, one pixel per cell.
    pub fn save_frame(&self, path: &Path) -> Result<()> {
        let frame = self
            .renderer
            .previous_frame()
            .context("No frame has been rendered yet")?;

        image::save_buffer(
            path,
            frame.as_bytes(),
            u32::try_from(frame.width)?,
            u32::try_from(frame.height)?,
            image::ColorType::Rgb8,
        )
        .with_context(|| format!("Failed to write {}", path.display()))?;

        log::info!("Saved {}x{} frame to {}", frame.width, frame.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellray_math::Vec3;
    use cellray_renderer::CellUpdate;

    fn small_config() -> ViewerConfig {
        let mut config = ViewerConfig::default();
        config.render.width = 12;
        config.render.height = 6;
        config.render.aa_sample_sqrt = 1;
        config
    }

    #[test]
    fn test_camera_follows_player() {
        let mut world = World::new(small_config()).unwrap();
        world.handle(Action::MoveForward);
        world.step();

        let expected = world.player().position + Vec3::new(0.0, 1.6, 0.0);
        assert!((world.settings().camera.position - expected).length() < 1e-6);
    }

    #[test]
    fn test_objects_fall_and_settle() {
        let mut world = World::new(small_config()).unwrap();
        for _ in 0..200 {
            world.step();
        }

        for object in world.scene().objects() {
            let bounds = object.bounding_sphere();
            // Every body rests on or above the ground
            assert!(bounds.center.y >= -1e-3, "{} sank: {:?}", object.kind(), bounds);
        }
        assert_eq!(world.player().position.y, 0.0);
    }

    #[test]
    fn test_unchanged_world_emits_nothing() {
        let mut world = World::new(small_config()).unwrap();
        // Let everything land first
        for _ in 0..200 {
            world.step();
        }

        let mut first: Vec<CellUpdate> = Vec::new();
        world.render(&mut first).unwrap();
        assert_eq!(first.len(), 12 * 6);

        let mut second: Vec<CellUpdate> = Vec::new();
        world.render(&mut second).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_save_frame_writes_png() {
        let mut world = World::new(small_config()).unwrap();
        let path = std::env::temp_dir().join(format!("cellray-frame-{}.png", std::process::id()));

        // Nothing to save before the first render
        assert!(world.save_frame(&path).is_err());

        let mut updates: Vec<CellUpdate> = Vec::new();
        world.render(&mut updates).unwrap();
        world.save_frame(&path).unwrap();

        let saved = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(saved.dimensions(), (12, 6));
        for update in &updates {
            let pixel = saved.get_pixel(update.col as u32, update.row as u32);
            assert_eq!(pixel.0, [update.color.r, update.color.g, update.color.b]);
        }
    }
}
