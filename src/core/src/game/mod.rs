pub mod aggregator;
pub mod batch;
pub mod clutch;
pub mod config;
pub mod engine;
pub mod events;
pub mod lineup;
pub mod narrative;
pub mod possession;
pub mod recorder;
pub mod result;
pub mod synergy;

pub use aggregator::*;
pub use batch::*;
pub use clutch::*;
pub use config::*;
pub use engine::*;
pub use events::*;
pub use lineup::*;
pub use narrative::*;
pub use possession::*;
pub use recorder::*;
pub use result::*;
pub use synergy::*;
