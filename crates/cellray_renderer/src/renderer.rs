//! Cell renderer.
//!
//! Traces one primary ray per sub-sample with:
//! - Lambert diffuse plus ambient lighting
//! - A single hard shadow test per hit
//! - Sky gradient on miss
//! - Regular N x N supersampling, averaged per cell
//!
//! Frames are diffed against the previous one so only changed cells reach
//! the display sink.

use std::{
    io,
    time::{Duration, Instant},
};

use cellray_core::SettingsError;
use cellray_math::Mat3;
use rayon::prelude::*;
use thiserror::Error;

use crate::{
    frame::{CellUpdate, DisplaySink, FrameBuffer},
    hittable::{Intersection, Scene},
    Color, Ray, RenderSettings, Rgb8, ShadowMode, Vec3,
};

/// Offset along the normal applied to shadow ray origins.
pub const SHADOW_BIAS: f32 = 1e-4;

/// Diffuse factor kept when a point is shadowed.
pub const SHADOW_ATTENUATION: f32 = 0.3;

/// Errors returned by [`Renderer::render`].
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Display sink error: {0}")]
    Sink(#[from] io::Error),
}

/// Per-frame projection constants.
struct View {
    origin: Vec3,
    rotation: Mat3,
    aspect: f32,
    tan_half_fov: f32,
    width: f32,
    height: f32,
    samples: u32,
}

impl View {
    fn new(settings: &RenderSettings) -> Self {
        Self {
            origin: settings.camera.position,
            rotation: settings.camera.rotation(),
            aspect: settings.aspect_ratio(),
            tan_half_fov: (settings.fov / 2.0).tan(),
            width: settings.width as f32,
            height: settings.height as f32,
            samples: settings.samples_per_axis(),
        }
    }

    fn ray(&self, i: usize, j: usize, sx: u32, sy: u32) -> Ray {
        let n = self.samples as f32;
        let sub_i = i as f32 + (sx as f32 + 0.5) / n;
        let sub_j = j as f32 + (sy as f32 + 0.5) / n;

        let x = (2.0 * sub_i / self.width - 1.0) * self.aspect * self.tan_half_fov;
        let y = (1.0 - 2.0 * sub_j / self.height) * self.tan_half_fov;

        let local = Vec3::new(x, y, 1.0).normalize_or_zero();
        let direction = (self.rotation * local).normalize_or_zero();
        Ray::new(self.origin, direction)
    }
}

/// Primary ray for sub-sample (`sx`, `sy`) of cell (`i`, `j`).
///
/// `i` is the column and `j` the row. Sub-samples are centred in their
/// sub-cell.
pub fn camera_ray(settings: &RenderSettings, i: usize, j: usize, sx: u32, sy: u32) -> Ray {
    View::new(settings).ray(i, j, sx, sy)
}

/// True if anything other than the struck object blocks the shadow ray.
pub fn in_shadow(scene: &Scene, hit: &Intersection<'_>, settings: &RenderSettings) -> bool {
    let direction = match settings.shadow_mode {
        ShadowMode::SurfaceNormal => -hit.normal,
        ShadowMode::TowardLight => -settings.light_dir,
    };
    let shadow_ray = Ray::new(hit.point + hit.normal * SHADOW_BIAS, direction);

    scene
        .objects()
        .iter()
        .filter(|object| !hit.is_from(object.as_ref()))
        .any(|object| object.intersect(&shadow_ray).is_some())
}

/// Color seen along `ray`.
pub fn trace(scene: &Scene, ray: &Ray, settings: &RenderSettings) -> Color {
    match scene.closest_hit(ray) {
        Some(hit) => shade(scene, &hit, settings),
        None => sky(ray.direction(), settings),
    }
}

fn shade(scene: &Scene, hit: &Intersection<'_>, settings: &RenderSettings) -> Color {
    let mut diffuse = hit.normal.dot(-settings.light_dir).max(0.0);
    if in_shadow(scene, hit, settings) {
        diffuse *= SHADOW_ATTENUATION;
    }

    let intensity = settings.ambient + (1.0 - settings.ambient) * diffuse;
    (hit.color * intensity).min(Color::splat(255.0))
}

fn sky(direction: Vec3, settings: &RenderSettings) -> Color {
    let t = (direction.y + 1.0) / 2.0;
    settings.sky_bottom * (1.0 - t) + settings.sky_top * t
}

fn render_cell(scene: &Scene, view: &View, settings: &RenderSettings, i: usize, j: usize) -> Rgb8 {
    let mut accumulated = Color::ZERO;
    for sy in 0..view.samples {
        for sx in 0..view.samples {
            accumulated += trace(scene, &view.ray(i, j, sx, sy), settings);
        }
    }

    Rgb8::from_color(accumulated / view.samples.saturating_mul(view.samples) as f32)
}

/// Render a full frame without diffing.
///
/// Rows are shaded in parallel. Settings are not validated here.
pub fn render_frame(scene: &Scene, settings: &RenderSettings) -> FrameBuffer {
    let mut frame = FrameBuffer::new(settings.width, settings.height);
    if settings.width == 0 || settings.height == 0 {
        return frame;
    }

    let view = View::new(settings);
    frame
        .cells
        .par_chunks_mut(settings.width)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, cell) in row.iter_mut().enumerate() {
                *cell = render_cell(scene, &view, settings, i, j);
            }
        });

    frame
}

/// Send every cell of `frame` that differs from `previous` to `sink`.
fn emit_changes(
    previous: Option<&FrameBuffer>,
    frame: &FrameBuffer,
    sink: &mut dyn DisplaySink,
) -> io::Result<usize> {
    // A previous frame of a different size has no usable cells
    let previous = previous.filter(|p| p.same_size(frame));

    let mut emitted = 0;
    for row in 0..frame.height {
        for col in 0..frame.width {
            let color = frame.cells[row * frame.width + col];
            let old = previous.and_then(|p| p.get(col, row));
            if old != Some(color) {
                sink.put_cell(CellUpdate { row, col, color })?;
                emitted += 1;
            }
        }
    }
    sink.flush()?;

    Ok(emitted)
}

/// Summary of one [`Renderer::render`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Cells sent to the sink
    pub emitted: usize,
    /// Cells in the grid
    pub cells: usize,
    /// Sub-samples traced per cell
    pub samples_per_cell: u32,
    /// Wall time for the whole call
    pub elapsed: Duration,
}

/// Incremental renderer that remembers the last frame it emitted.
#[derive(Debug, Default)]
pub struct Renderer {
    previous: Option<FrameBuffer>,
}

impl Renderer {
    /// Create a renderer with no previous frame; the first render emits every cell.
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Forget the previous frame so the next render repaints everything.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn previous_frame(&self) -> Option<&FrameBuffer> {
        self.previous.as_ref()
    }

    /// Render `scene` and send every changed cell to `sink` in row-major order.
    ///
    /// Invalid settings are rejected before any cell is traced; the previous
    /// frame is then left untouched.
    pub fn render(
        &mut self,
        scene: &Scene,
        settings: &RenderSettings,
        sink: &mut dyn DisplaySink,
    ) -> Result<FrameStats, RenderError> {
        settings.validate()?;
        let start = Instant::now();

        let frame = render_frame(scene, settings);

        let emitted = match emit_changes(self.previous.as_ref(), &frame, sink) {
            Ok(emitted) => emitted,
            Err(err) => {
                // Part of the frame may already be on screen; repaint fully next time
                self.previous = None;
                return Err(err.into());
            }
        };

        self.previous = Some(frame);

        let stats = FrameStats {
            emitted,
            cells: settings.cell_count(),
            samples_per_cell: settings.samples_per_cell(),
            elapsed: start.elapsed(),
        };
        log::debug!(
            "frame: {}/{} cells emitted, {} spp, {:.2?}",
            stats.emitted,
            stats.cells,
            stats.samples_per_cell,
            stats.elapsed
        );

        Ok(stats)
    }
}
