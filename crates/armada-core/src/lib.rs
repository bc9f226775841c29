pub mod config;
pub mod develop;
pub mod error;
pub mod io;
pub mod paths;
pub mod port;
pub mod session;

pub use error::{ArmadaError, Result};
