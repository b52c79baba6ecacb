use bytemuck::{Pod, Zeroable};

/// Per-rectangle draw data handed to the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge in world space.
    pub x: f32,
    /// Top edge in world space.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Color channels, 0.0 to 1.0.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// All rectangles for one frame, in draw order:
/// platforms, then drops, then the actor on top.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    /// Instances `[0..drops_start)` are platforms.
    pub drops_start: u32,
    /// Instance at `actor_index` is the actor.
    pub actor_index: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            drops_start: 0,
            actor_index: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.drops_start = 0;
        self.actor_index = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn as_floats_flattens() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance { x: 1.0, a: 0.5, ..Default::default() });
        buf.push(RenderInstance::default());
        let floats = buf.as_floats();
        assert_eq!(floats.len(), 16);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[7], 0.5);
        assert_eq!(buf.instance_count(), 2);
    }
}
