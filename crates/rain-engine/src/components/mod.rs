pub mod actor;
pub mod color;
pub mod emitter;
pub mod raindrop;
