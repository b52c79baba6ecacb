use glam::Vec2;

/// Axis-aligned rectangle stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, max: min + size }
    }

    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn area(&self) -> f32 {
        let s = self.size();
        s.x * s.y
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_min_size_agree() {
        let a = Rect::from_center_half_extents(Vec2::new(50.0, 50.0), Vec2::new(10.0, 5.0));
        let b = Rect::from_min_size(Vec2::new(40.0, 45.0), Vec2::new(20.0, 10.0));
        assert_eq!(a, b);
        assert_eq!(a.center(), Vec2::new(50.0, 50.0));
        assert_eq!(a.area(), 200.0);
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::from_min_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_min_size(Vec2::splat(5.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::from_min_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_min_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
    }
}
