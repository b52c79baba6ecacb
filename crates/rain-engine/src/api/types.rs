use bytemuck::{Pod, Zeroable};

/// Event kinds carried in `SimEvent::kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SimEventKind {
    /// A walk or run began. `a` = speed.
    MoveStarted = 1,
    /// The actor reached the end point. `a` = wetness on arrival.
    ActorArrived = 2,
    /// The viewport changed. `a` = width, `b` = height.
    Resized = 3,
    /// A terminate command was received.
    Terminated = 4,
}

/// An event communicated from the simulation to the host.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SimEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SimEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: SimEventKind, a: f32, b: f32, c: f32) -> Self {
        Self { kind: kind as u32 as f32, a, b, c }
    }

    pub fn is(&self, kind: SimEventKind) -> bool {
        self.kind == kind as u32 as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_is_four_floats() {
        assert_eq!(std::mem::size_of::<SimEvent>(), SimEvent::FLOATS * 4);
    }

    #[test]
    fn kind_round_trips() {
        let e = SimEvent::new(SimEventKind::Resized, 800.0, 600.0, 0.0);
        assert!(e.is(SimEventKind::Resized));
        assert!(!e.is(SimEventKind::Terminated));
    }
}
