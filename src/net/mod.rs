pub mod dev;
pub mod filter;

pub use dev::{CounterSource, DevFile, InterfaceCounters};
pub use filter::InterfaceFilter;
