pub mod format;
pub mod random;
pub mod time;

pub use format::*;
pub use random::*;
pub use time::*;
