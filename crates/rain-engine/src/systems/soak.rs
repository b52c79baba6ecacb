use serde::{Deserialize, Serialize};
use crate::components::actor::Actor;
use crate::components::raindrop::Raindrop;
use crate::core::platform::Platforms;

/// Whether standing under a platform keeps the actor dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShelterPolicy {
    /// Rain soaks the actor everywhere. Shelter is still detected and reported.
    #[default]
    None,
    /// No wetness accrues while the actor is beneath a platform.
    UnderPlatform,
}

/// Result of one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SoakReport {
    /// Drops overlapping the actor this frame.
    pub hits: u32,
    /// Total drop area applied to the actor's wetness.
    pub area: f32,
    /// Actor was beneath a platform.
    pub sheltered: bool,
}

/// The actor is under a platform when their horizontal spans overlap and the
/// actor's top edge is at or below the platform's bottom edge.
pub fn is_sheltered(actor: &Actor, platforms: &Platforms) -> bool {
    let a = actor.bounds();
    platforms.iter().any(|p| {
        let b = p.bounds();
        a.min.x < b.max.x && b.min.x < a.max.x && a.min.y >= b.max.y
    })
}

/// Test every drop against the actor and add the area of each hit to its wetness.
/// Drops are not consumed: one still overlapping next frame counts again.
pub fn soak(drops: &[Raindrop], actor: &mut Actor, platforms: &Platforms, policy: ShelterPolicy) -> SoakReport {
    let sheltered = is_sheltered(actor, platforms);
    let bounds = actor.bounds();

    let mut report = SoakReport { sheltered, ..Default::default() };
    for drop in drops.iter().filter(|d| d.bounds().intersects(&bounds)) {
        report.hits += 1;
        report.area += drop.area();
    }

    if sheltered && policy == ShelterPolicy::UnderPlatform {
        report.area = 0.0;
        return report;
    }
    actor.add_wetness(report.area);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::components::color::Color;
    use crate::core::platform::PlatformConfig;

    fn platforms() -> Platforms {
        Platforms::layout(Vec2::new(1600.0, 900.0), &PlatformConfig::default())
    }

    fn drop_at(x: f32, y: f32, size: f32) -> Raindrop {
        Raindrop::new(Vec2::new(x, y), size, Color::rgb(0, 0, 0))
    }

    #[test]
    fn sums_area_of_overlapping_drops() {
        let mut actor = Actor::new(Vec2::new(800.0, 400.0), Vec2::new(30.0, 60.0));
        let drops = vec![
            drop_at(790.0, 380.0, 2.0),
            drop_at(800.0, 400.0, 3.0),
            drop_at(812.0, 425.0, 4.0),
            drop_at(100.0, 100.0, 5.0),
        ];
        let report = soak(&drops, &mut actor, &platforms(), ShelterPolicy::None);
        assert_eq!(report.hits, 3);
        assert_eq!(report.area, 8.0 + 18.0 + 32.0);
        assert_eq!(actor.wetness(), 58.0);
        assert!(!report.sheltered);
    }

    #[test]
    fn repeated_overlap_compounds() {
        let mut actor = Actor::new(Vec2::new(800.0, 400.0), Vec2::new(30.0, 60.0));
        let drops = vec![drop_at(800.0, 400.0, 3.0)];
        soak(&drops, &mut actor, &platforms(), ShelterPolicy::None);
        soak(&drops, &mut actor, &platforms(), ShelterPolicy::None);
        assert_eq!(actor.wetness(), 36.0);
    }

    #[test]
    fn shelter_detected_but_ignored_by_default() {
        let p = platforms();
        let under = Vec2::new(p.start.center.x, 820.0);
        let mut actor = Actor::new(under, Vec2::new(30.0, 60.0));
        let drops = vec![drop_at(under.x, under.y, 3.0)];
        let report = soak(&drops, &mut actor, &p, ShelterPolicy::None);
        assert!(report.sheltered);
        assert_eq!(actor.wetness(), 18.0);
    }

    #[test]
    fn shelter_policy_keeps_actor_dry() {
        let p = platforms();
        let under = Vec2::new(p.end.center.x, 820.0);
        let mut actor = Actor::new(under, Vec2::new(30.0, 60.0));
        let drops = vec![drop_at(under.x, under.y, 3.0)];
        let report = soak(&drops, &mut actor, &p, ShelterPolicy::UnderPlatform);
        assert!(report.sheltered);
        assert_eq!(report.hits, 1);
        assert_eq!(report.area, 0.0);
        assert_eq!(actor.wetness(), 0.0);
    }

    #[test]
    fn above_platform_is_not_sheltered() {
        let p = platforms();
        let actor = Actor::new(Vec2::new(p.start.center.x, 500.0), Vec2::new(30.0, 60.0));
        assert!(!is_sheltered(&actor, &p));
    }
}
