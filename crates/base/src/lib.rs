pub mod logging;
pub use logging::*;

mod vec2;
pub use vec2::*;

// re-exported so downstream crates can reach the facade through base::log
pub use log;
