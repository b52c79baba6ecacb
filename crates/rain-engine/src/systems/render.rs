use crate::api::sim::Simulation;
use crate::components::color::Color;
use crate::core::geometry::Rect;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Platform fill color.
pub const PLATFORM_COLOR: Color = Color::rgb(110, 110, 120);

fn instance(rect: Rect, color: Color) -> RenderInstance {
    let size = rect.size();
    let [r, g, b, a] = color.to_f32();
    RenderInstance {
        x: rect.min.x,
        y: rect.min.y,
        width: size.x,
        height: size.y,
        r,
        g,
        b,
        a,
    }
}

/// Build the frame's draw list from the simulation's current state.
/// Call after `Simulation::frame` so the picture matches the collision pass.
pub fn build_render_buffer(sim: &Simulation, buffer: &mut RenderBuffer) {
    buffer.clear();

    for platform in sim.platforms().iter() {
        buffer.push(instance(platform.bounds(), PLATFORM_COLOR));
    }

    buffer.drops_start = buffer.instance_count();
    for drop in sim.drops() {
        buffer.push(instance(drop.bounds(), drop.tint));
    }

    let actor = sim.actor();
    buffer.actor_index = buffer.instance_count();
    buffer.push(instance(actor.bounds(), actor.display_color(&sim.config().actor.palette)));
}
