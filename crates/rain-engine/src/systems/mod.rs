pub mod rain;
pub mod render;
pub mod soak;
