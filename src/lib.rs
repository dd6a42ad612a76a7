pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod monitor;
