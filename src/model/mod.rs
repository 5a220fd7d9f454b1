pub mod analysis;
pub mod assessment;
pub mod config;
pub mod signal;

pub use analysis::*;
pub use assessment::*;
pub use config::{Config, FetchConfig};
pub use signal::*;
