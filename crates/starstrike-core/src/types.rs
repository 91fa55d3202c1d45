//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{CAMERA_DISTANCE, CAMERA_FOV_DEG, VIEWPORT_HEIGHT_PX, VIEWPORT_WIDTH_PX};

/// 2D position on the play plane (world units).
/// x = right, y = up. The camera looks down -z at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity (world units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each running tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Axis-aligned box overlap with another point, both boxes sharing the
    /// same half extent. Strict on both axes: touching edges do not overlap.
    pub fn overlaps(&self, other: &Position, half_extent: f32) -> bool {
        (self.x - other.x).abs() < half_extent && (self.y - other.y).abs() < half_extent
    }

    /// Lift onto the z = 0 play plane for the scene graph.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, 0.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl SimTime {
    /// Seconds per tick at the given tick rate.
    pub fn dt(tick_rate: u32) -> f32 {
        1.0 / tick_rate as f32
    }

    /// Advance by one tick. Elapsed time is derived from the tick count
    /// so it never accumulates rounding drift.
    pub fn advance(&mut self, tick_rate: u32) {
        self.tick += 1;
        self.elapsed_ms = self.tick as f64 * 1000.0 / tick_rate as f64;
    }

    /// Number of ticks covering `ms` milliseconds, rounded up so a delay
    /// never elapses early.
    pub fn ticks_for_ms(ms: u64, tick_rate: u32) -> u64 {
        ms.saturating_mul(tick_rate as u64).div_ceil(1000)
    }
}

/// Visible rendering area, described by the window size and the
/// perspective camera that projects onto the z = 0 play plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
    /// Vertical field of view (degrees).
    pub fov_deg: f32,
    /// Camera distance from the play plane.
    pub camera_distance: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width_px: VIEWPORT_WIDTH_PX,
            height_px: VIEWPORT_HEIGHT_PX,
            fov_deg: CAMERA_FOV_DEG,
            camera_distance: CAMERA_DISTANCE,
        }
    }
}

impl Viewport {
    /// Width over height. A zero-height window is treated as height 1.
    pub fn aspect(&self) -> f32 {
        self.width_px as f32 / self.height_px.max(1) as f32
    }

    /// Half of the visible height on the play plane.
    pub fn half_height(&self) -> f32 {
        self.camera_distance * (self.fov_deg.to_radians() * 0.5).tan()
    }

    /// Half of the visible width on the play plane.
    pub fn half_width(&self) -> f32 {
        self.half_height() * self.aspect()
    }

    /// Top edge of the visible area.
    pub fn top(&self) -> f32 {
        self.half_height()
    }

    /// Bottom edge of the visible area.
    pub fn bottom(&self) -> f32 {
        -self.half_height()
    }

    /// Apply a window resize.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.width_px = width_px;
        self.height_px = height_px;
    }
}
