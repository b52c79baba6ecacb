use glam::Vec2;
use serde::{Deserialize, Serialize};
use super::geometry::Rect;

/// Where the two platforms sit relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Horizontal placement of the start platform as a fraction of viewport width.
    pub start_fraction: f32,
    /// Horizontal placement of the end platform as a fraction of viewport width.
    pub end_fraction: f32,
    /// Distance from the bottom of the viewport up to the platform centers.
    pub bottom_offset: f32,
    /// Half width / half height of each platform.
    pub half_extents: Vec2,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            start_fraction: 1.0 / 8.0,
            end_fraction: 7.0 / 8.0,
            bottom_offset: 250.0,
            half_extents: Vec2::new(100.0, 25.0),
        }
    }
}

/// A static rectangle that absorbs raindrops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Platform {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self { center, half_extents }
    }

    /// Rendered extent, also used for drop culling.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extents(self.center, self.half_extents)
    }
}

/// The start and end platforms. Built once per viewport size and shared
/// read-only by the rain system, the soak pass and the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platforms {
    pub start: Platform,
    pub end: Platform,
}

impl Platforms {
    pub fn layout(viewport: Vec2, config: &PlatformConfig) -> Self {
        let y = viewport.y - config.bottom_offset;
        Self {
            start: Platform::new(Vec2::new(viewport.x * config.start_fraction, y), config.half_extents),
            end: Platform::new(Vec2::new(viewport.x * config.end_fraction, y), config.half_extents),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        [&self.start, &self.end].into_iter()
    }

    /// True if `rect` overlaps either platform.
    pub fn any_intersects(&self, rect: &Rect) -> bool {
        self.iter().any(|p| p.bounds().intersects(rect))
    }
}
