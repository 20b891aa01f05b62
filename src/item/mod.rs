pub mod net_rate;

pub use net_rate::NetRate;
