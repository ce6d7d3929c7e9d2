pub mod clock;
pub mod engine;

pub use clock::*;
pub use engine::*;
