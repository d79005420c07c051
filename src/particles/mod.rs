mod seeds;

pub use seeds::{FallingSeed, SeedPhysics};
