pub mod geometry;
pub mod platform;
pub mod rng;
pub mod time;
