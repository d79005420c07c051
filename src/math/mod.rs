pub mod vec2;
pub mod rng;

pub use vec2::Vec2;
pub use rng::SeededRng;
