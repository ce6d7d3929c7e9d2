pub mod generator;
pub mod player;
pub mod ratings;
pub mod stats;
pub mod team;

pub use generator::*;
pub use player::*;
pub use ratings::*;
pub use stats::*;
pub use team::*;
