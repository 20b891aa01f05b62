#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod human_time;
pub mod i3;
pub mod item;
pub mod net;
pub mod sampler;
pub mod theme;
