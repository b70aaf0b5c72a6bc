pub mod contract;
pub mod party;
pub mod stats;

pub use contract::*;
pub use party::*;
pub use stats::*;
